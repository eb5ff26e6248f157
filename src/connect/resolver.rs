//! Generic connection resolver.
//!
//! # Responsibilities
//! - Hold the configured connection entries in order
//! - Expand discovery-keyed entries through the Discovery collaborator
//! - Publish descriptors back to discovery on registration
//!
//! # Design Decisions
//! - Static entries (no discovery_key) resolve without any collaborator
//! - Discovery failures and missing-collaborator errors are returned
//!   unchanged, never logged or retried
//! - Every call re-resolves from scratch; caching belongs to the
//!   Discovery implementation if anywhere

use std::sync::Arc;

use tracing::debug;

use crate::config::schema::ConnectConfig;
use crate::connect::discovery::Discovery;
use crate::connect::error::ResolveError;
use crate::connect::params::ConnectionParams;

/// Resolves connection descriptors from configuration and discovery.
pub struct ConnectionResolver {
    connections: Vec<ConnectionParams>,
    discovery: Option<Arc<dyn Discovery>>,
}

impl ConnectionResolver {
    /// Build from a configuration and an optional discovery collaborator.
    pub fn new(config: &ConnectConfig, discovery: Option<Arc<dyn Discovery>>) -> Self {
        Self {
            connections: config.connection_entries(),
            discovery,
        }
    }

    /// Build from explicit entries, bypassing the config schema.
    pub fn from_connections(
        connections: Vec<ConnectionParams>,
        discovery: Option<Arc<dyn Discovery>>,
    ) -> Self {
        Self {
            connections,
            discovery,
        }
    }

    fn discovery(&self, correlation_id: &str) -> Result<&Arc<dyn Discovery>, ResolveError> {
        self.discovery.as_ref().ok_or_else(|| ResolveError::NoDiscovery {
            correlation_id: correlation_id.to_owned(),
        })
    }

    /// Resolve a single connection descriptor.
    ///
    /// The first entry without a `discovery_key` wins; otherwise the first
    /// discovery-keyed entry the Discovery collaborator resolves. `Ok(None)`
    /// when nothing is configured or discovery has no match.
    pub fn resolve_one(
        &self,
        correlation_id: &str,
    ) -> Result<Option<ConnectionParams>, ResolveError> {
        for connection in &self.connections {
            if connection.discovery_key.is_none() {
                return Ok(Some(connection.clone()));
            }
        }

        for connection in &self.connections {
            if let Some(key) = &connection.discovery_key {
                if let Some(resolved) = self.discovery(correlation_id)?.resolve_one(correlation_id, key)? {
                    debug!(correlation_id, key = %key, host = %resolved.host, "resolved connection from discovery");
                    return Ok(Some(resolved));
                }
            }
        }

        Ok(None)
    }

    /// Resolve every configured connection, in configuration order.
    ///
    /// Static entries are passed through; discovery-keyed entries expand to
    /// whatever descriptors discovery holds for the key.
    pub fn resolve_all(
        &self,
        correlation_id: &str,
    ) -> Result<Vec<ConnectionParams>, ResolveError> {
        let mut resolved = Vec::new();
        for connection in &self.connections {
            match &connection.discovery_key {
                None => resolved.push(connection.clone()),
                Some(key) => {
                    let found = self.discovery(correlation_id)?.resolve_all(correlation_id, key)?;
                    debug!(correlation_id, key = %key, count = found.len(), "resolved connections from discovery");
                    resolved.extend(found);
                }
            }
        }
        Ok(resolved)
    }

    /// Publish a descriptor to discovery under its own `discovery_key`.
    ///
    /// A descriptor without a key has nothing to publish and succeeds.
    pub fn register(
        &self,
        correlation_id: &str,
        connection: &ConnectionParams,
    ) -> Result<(), ResolveError> {
        let Some(key) = &connection.discovery_key else {
            return Ok(());
        };
        self.discovery(correlation_id)?.register(correlation_id, key, connection)?;
        debug!(correlation_id, key = %key, "registered connection in discovery");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connect::discovery::MemoryDiscovery;

    fn single(config_connection: ConnectionParams) -> ConnectConfig {
        ConnectConfig {
            connection: Some(config_connection),
            ..Default::default()
        }
    }

    #[test]
    fn test_static_entry_wins() {
        let resolver = ConnectionResolver::new(&single(ConnectionParams::new("http", "localhost", 3000)), None);
        let resolved = resolver.resolve_one("123").unwrap().unwrap();
        assert_eq!(resolved.host, "localhost");
        assert_eq!(resolved.port, 3000);
    }

    #[test]
    fn test_discovery_key_resolves_through_discovery() {
        let discovery = Arc::new(MemoryDiscovery::new());
        discovery
            .register("123", "api", &ConnectionParams::new("http", "10.1.1.100", 8080))
            .unwrap();

        let resolver = ConnectionResolver::new(
            &single(ConnectionParams::from_discovery_key("api")),
            Some(discovery),
        );
        let resolved = resolver.resolve_one("123").unwrap().unwrap();
        assert_eq!(resolved.host, "10.1.1.100");
    }

    #[test]
    fn test_discovery_key_without_discovery_errors() {
        let resolver =
            ConnectionResolver::new(&single(ConnectionParams::from_discovery_key("api")), None);
        let err = resolver.resolve_one("123").unwrap_err();
        assert_eq!(err.code(), "NO_DISCOVERY");
        assert_eq!(err.correlation_id(), "123");
    }

    #[test]
    fn test_resolve_all_preserves_order() {
        let discovery = Arc::new(MemoryDiscovery::new());
        discovery
            .register("123", "mid", &ConnectionParams::new("http", "b", 2))
            .unwrap();
        discovery
            .register("123", "mid", &ConnectionParams::new("http", "c", 3))
            .unwrap();

        let resolver = ConnectionResolver::from_connections(
            vec![
                ConnectionParams::new("http", "a", 1),
                ConnectionParams::from_discovery_key("mid"),
                ConnectionParams::new("http", "d", 4),
            ],
            Some(discovery),
        );

        let hosts: Vec<String> = resolver
            .resolve_all("123")
            .unwrap()
            .into_iter()
            .map(|connection| connection.host)
            .collect();
        assert_eq!(hosts, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_register_publishes_under_key() {
        let discovery = Arc::new(MemoryDiscovery::new());
        let resolver = ConnectionResolver::from_connections(Vec::new(), Some(discovery.clone()));

        let mut connection = ConnectionParams::new("http", "localhost", 8080);
        connection.discovery_key = Some("api".into());
        resolver.register("123", &connection).unwrap();

        assert_eq!(discovery.resolve_one("123", "api").unwrap(), Some(connection));
    }

    #[test]
    fn test_register_without_key_is_noop() {
        let resolver = ConnectionResolver::from_connections(Vec::new(), None);
        resolver
            .register("123", &ConnectionParams::new("http", "localhost", 8080))
            .unwrap();
    }
}
