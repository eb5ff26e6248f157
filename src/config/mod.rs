//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ConnectConfig (validated, immutable)
//!     → handed to the resolvers at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; resolvers take it at construction
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Resolvers built directly in code (tests, embedding) skip the loader
//!   and its semantic checks entirely

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::ConnectConfig;
pub use validation::{validate_config, ValidationError};
