//! Configuration schema definitions.
//!
//! The configuration recognizes a single `connection` block or a
//! `connections` list (or both), and a parallel `credential` /
//! `credentials` tree for TLS material. Each entry deserializes into the
//! descriptor types from [`crate::connect::params`].

use serde::{Deserialize, Serialize};

use crate::connect::params::{ConnectionParams, CredentialParams};

/// Root configuration for connection resolution.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ConnectConfig {
    /// Single connection block.
    pub connection: Option<ConnectionParams>,

    /// Ordered list of connections, alternative to `connection`.
    /// When both are present the list entries come first.
    pub connections: Vec<ConnectionParams>,

    /// Single credential block.
    pub credential: Option<CredentialParams>,

    /// Ordered list of credentials, alternative to `credential`.
    pub credentials: Vec<CredentialParams>,
}

impl ConnectConfig {
    /// All configured connection entries in resolution order.
    pub fn connection_entries(&self) -> Vec<ConnectionParams> {
        let mut entries = self.connections.clone();
        if let Some(single) = &self.connection {
            entries.push(single.clone());
        }
        entries
    }

    /// All configured credential entries in lookup order.
    pub fn credential_entries(&self) -> Vec<CredentialParams> {
        let mut entries = self.credentials.clone();
        if let Some(single) = &self.credential {
            entries.push(single.clone());
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_deserializes() {
        let config: ConnectConfig = toml::from_str("").unwrap();
        assert!(config.connection.is_none());
        assert!(config.connections.is_empty());
        assert!(config.credential_entries().is_empty());
    }

    #[test]
    fn test_single_block_and_list_are_ordered() {
        let config: ConnectConfig = toml::from_str(
            r#"
            [[connections]]
            host = "a"

            [connection]
            host = "b"
            "#,
        )
        .unwrap();

        let entries = config.connection_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].host, "a");
        assert_eq!(entries[1].host, "b");
    }
}
