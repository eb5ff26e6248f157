//! Connection and credential resolution for HTTP clients and services.
//!
//! The crate reconciles the different ways an HTTP endpoint can be
//! configured (a single `uri`, discrete protocol/host/port fields, or a
//! `discovery_key` pointing into an external registry) into one validated,
//! normalized [`ConnectionParams`], together with the TLS credential
//! material an `https` endpoint requires.

pub mod config;
pub mod connect;

pub use config::loader::{load_config, parse_config, ConfigError};
pub use config::schema::ConnectConfig;
pub use connect::discovery::{CredentialStore, Discovery, MemoryCredentialStore, MemoryDiscovery};
pub use connect::error::ResolveError;
pub use connect::http::{HttpConnectionResolver, ResolvedConnections};
pub use connect::params::{ConnectionParams, CredentialParams};
pub use connect::{ConnectionResolver, CredentialResolver};
