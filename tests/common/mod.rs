//! Shared utilities for integration testing.

use std::sync::Arc;

use http_connect::{ConnectionParams, Discovery, ResolveError};

/// Initialize tracing output for tests; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Discovery double whose lookups always fail, for transport-failure paths.
#[derive(Debug)]
pub struct FailingDiscovery;

impl FailingDiscovery {
    #[allow(dead_code)]
    pub fn shared() -> Arc<dyn Discovery> {
        Arc::new(FailingDiscovery)
    }

    fn fail(correlation_id: &str) -> ResolveError {
        ResolveError::DiscoveryFailed {
            correlation_id: correlation_id.to_owned(),
            message: "discovery backend unreachable".into(),
        }
    }
}

impl Discovery for FailingDiscovery {
    fn resolve_one(
        &self,
        correlation_id: &str,
        _key: &str,
    ) -> Result<Option<ConnectionParams>, ResolveError> {
        Err(Self::fail(correlation_id))
    }

    fn resolve_all(
        &self,
        correlation_id: &str,
        _key: &str,
    ) -> Result<Vec<ConnectionParams>, ResolveError> {
        Err(Self::fail(correlation_id))
    }

    fn register(
        &self,
        correlation_id: &str,
        _key: &str,
        _connection: &ConnectionParams,
    ) -> Result<(), ResolveError> {
        Err(Self::fail(correlation_id))
    }
}
