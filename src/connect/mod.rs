//! Connection and credential resolution.
//!
//! # Data Flow
//! ```text
//! ConnectConfig (connection / connections / credential tree)
//!     → ConnectionResolver   (static entries + optional Discovery)
//!     → CredentialResolver   (static entries + optional CredentialStore)
//!     → HttpConnectionResolver (validate + normalize)
//!     → (ConnectionParams, CredentialParams) for client/server bootstrap
//! ```
//!
//! # Design Decisions
//! - Collaborators are passed at construction as `Option<Arc<dyn Trait>>`;
//!   there is no runtime service lookup
//! - The resolvers hold no mutable state; every call re-resolves from the
//!   configured entries, so concurrency safety is whatever the Discovery /
//!   CredentialStore implementations provide
//! - Errors are returned, never logged or retried, at this layer

pub mod credential;
pub mod discovery;
pub mod error;
pub mod http;
pub mod params;
pub mod resolver;

pub use credential::CredentialResolver;
pub use discovery::{CredentialStore, Discovery, MemoryCredentialStore, MemoryDiscovery};
pub use error::ResolveError;
pub use http::{HttpConnectionResolver, ResolvedConnections};
pub use params::{ConnectionParams, CredentialParams};
pub use resolver::ConnectionResolver;
