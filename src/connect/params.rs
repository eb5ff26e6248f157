//! Connection and credential descriptors.
//!
//! # Responsibilities
//! - Represent an endpoint (protocol/host/port, uri, discovery_key)
//! - Represent transport credentials (TLS key/cert file paths)
//! - Preserve arbitrary extra fields opaquely
//!
//! # Design Decisions
//! - `port == 0` and an empty `uri` both mean "unset"
//! - Unknown fields are kept in a flattened map rather than dropped, so
//!   descriptors can round-trip through config files and discovery intact

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Endpoint parameters for an HTTP connection.
///
/// A descriptor may carry a fully-formed `uri`, discrete
/// `protocol`/`host`/`port` fields, or a `discovery_key` naming an entry in
/// an external discovery registry that supplies the rest.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ConnectionParams {
    /// Transport scheme, `"http"` or `"https"`.
    pub protocol: String,

    /// Hostname or IP literal.
    pub host: String,

    /// Port number; 0 means unset.
    pub port: u16,

    /// Fully-formed URI; when present it is authoritative over the
    /// discrete fields.
    pub uri: String,

    /// Key naming an entry in an external discovery registry.
    pub discovery_key: Option<String>,

    /// Additional fields, preserved opaquely.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ConnectionParams {
    /// Descriptor from discrete fields.
    pub fn new(protocol: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Descriptor from a fully-formed URI.
    pub fn from_uri(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Default::default()
        }
    }

    /// Descriptor to be filled in from discovery.
    pub fn from_discovery_key(key: impl Into<String>) -> Self {
        Self {
            discovery_key: Some(key.into()),
            ..Default::default()
        }
    }
}

/// Credential parameters for an HTTP connection.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CredentialParams {
    /// Path to the TLS private key file; required for `https`.
    pub ssl_key_file: Option<String>,

    /// Path to the TLS certificate file; required for `https`.
    pub ssl_crt_file: Option<String>,

    /// Key naming an entry in an external credential store.
    pub store_key: Option<String>,

    /// Additional fields (CA bundle, passphrase, ...), passed through
    /// unvalidated.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl CredentialParams {
    /// Credential carrying TLS key and certificate file paths.
    pub fn ssl_files(key_file: impl Into<String>, crt_file: impl Into<String>) -> Self {
        Self {
            ssl_key_file: Some(key_file.into()),
            ssl_crt_file: Some(crt_file.into()),
            ..Default::default()
        }
    }

    /// Credential to be looked up in a credential store.
    pub fn from_store_key(key: impl Into<String>) -> Self {
        Self {
            store_key: Some(key.into()),
            ..Default::default()
        }
    }
}
