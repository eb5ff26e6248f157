//! Generic credential resolver.
//!
//! Mirrors [`super::resolver::ConnectionResolver`] for credential material:
//! inline entries resolve directly, store-keyed entries go through the
//! optional [`CredentialStore`] collaborator.

use std::sync::Arc;

use tracing::debug;

use crate::config::schema::ConnectConfig;
use crate::connect::discovery::CredentialStore;
use crate::connect::error::ResolveError;
use crate::connect::params::CredentialParams;

/// Resolves credential descriptors from configuration and a store.
pub struct CredentialResolver {
    credentials: Vec<CredentialParams>,
    store: Option<Arc<dyn CredentialStore>>,
}

impl CredentialResolver {
    /// Build from a configuration and an optional credential store.
    pub fn new(config: &ConnectConfig, store: Option<Arc<dyn CredentialStore>>) -> Self {
        Self {
            credentials: config.credential_entries(),
            store,
        }
    }

    /// Build from explicit entries, bypassing the config schema.
    pub fn from_credentials(
        credentials: Vec<CredentialParams>,
        store: Option<Arc<dyn CredentialStore>>,
    ) -> Self {
        Self { credentials, store }
    }

    /// Look up the credential for this component.
    ///
    /// The first entry without a `store_key` wins; otherwise the first
    /// store-keyed entry the store resolves. `Ok(None)` when nothing is
    /// configured or found. Absence of credentials is not an error here;
    /// the HTTP validation decides whether they were required.
    pub fn lookup(&self, correlation_id: &str) -> Result<Option<CredentialParams>, ResolveError> {
        for credential in &self.credentials {
            if credential.store_key.is_none() {
                return Ok(Some(credential.clone()));
            }
        }

        for credential in &self.credentials {
            if let Some(key) = &credential.store_key {
                let store = self.store.as_ref().ok_or_else(|| ResolveError::NoCredentialStore {
                    correlation_id: correlation_id.to_owned(),
                })?;
                if let Some(found) = store.lookup(correlation_id, key)? {
                    debug!(correlation_id, key = %key, "resolved credential from store");
                    return Ok(Some(found));
                }
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connect::discovery::MemoryCredentialStore;

    #[test]
    fn test_inline_credential_wins() {
        let resolver = CredentialResolver::from_credentials(
            vec![CredentialParams::ssl_files("server.key", "server.crt")],
            None,
        );
        let credential = resolver.lookup("123").unwrap().unwrap();
        assert_eq!(credential.ssl_key_file.as_deref(), Some("server.key"));
    }

    #[test]
    fn test_store_key_resolves_through_store() {
        let store = Arc::new(MemoryCredentialStore::new());
        store
            .store("123", "tls", CredentialParams::ssl_files("k", "c"))
            .unwrap();

        let resolver = CredentialResolver::from_credentials(
            vec![CredentialParams::from_store_key("tls")],
            Some(store),
        );
        let credential = resolver.lookup("123").unwrap().unwrap();
        assert_eq!(credential.ssl_crt_file.as_deref(), Some("c"));
    }

    #[test]
    fn test_store_key_without_store_errors() {
        let resolver = CredentialResolver::from_credentials(
            vec![CredentialParams::from_store_key("tls")],
            None,
        );
        let err = resolver.lookup("123").unwrap_err();
        assert_eq!(err.code(), "NO_CREDENTIAL_STORE");
    }

    #[test]
    fn test_nothing_configured_is_none() {
        let resolver = CredentialResolver::from_credentials(Vec::new(), None);
        assert_eq!(resolver.lookup("123").unwrap(), None);
    }
}
