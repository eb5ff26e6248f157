//! Discovery and credential store interfaces.
//!
//! # Responsibilities
//! - Map a symbolic key to one or more connection descriptors
//! - Accept descriptor registration under a key
//! - Look up credential material by key
//!
//! # Design Decisions
//! - Implementations may block internally (network discovery clients);
//!   the resolvers calling in have no suspension points of their own
//! - Implementations surface their own failures as
//!   [`ResolveError::DiscoveryFailed`]
//! - The in-memory implementations use `DashMap` so concurrent resolvers
//!   need no extra locking

use dashmap::DashMap;

use crate::connect::error::ResolveError;
use crate::connect::params::{ConnectionParams, CredentialParams};

/// External registry mapping symbolic keys to connection descriptors.
pub trait Discovery: Send + Sync {
    /// Resolve a single descriptor for the key, if any is registered.
    fn resolve_one(
        &self,
        correlation_id: &str,
        key: &str,
    ) -> Result<Option<ConnectionParams>, ResolveError>;

    /// Resolve every descriptor registered under the key.
    fn resolve_all(
        &self,
        correlation_id: &str,
        key: &str,
    ) -> Result<Vec<ConnectionParams>, ResolveError>;

    /// Register a descriptor under the key.
    fn register(
        &self,
        correlation_id: &str,
        key: &str,
        connection: &ConnectionParams,
    ) -> Result<(), ResolveError>;
}

/// External store mapping symbolic keys to credential material.
pub trait CredentialStore: Send + Sync {
    /// Look up the credential registered under the key, if any.
    fn lookup(
        &self,
        correlation_id: &str,
        key: &str,
    ) -> Result<Option<CredentialParams>, ResolveError>;

    /// Store a credential under the key.
    fn store(
        &self,
        correlation_id: &str,
        key: &str,
        credential: CredentialParams,
    ) -> Result<(), ResolveError>;
}

/// In-memory discovery registry.
///
/// Suitable for tests and for single-process deployments where the set of
/// endpoints is seeded at startup.
#[derive(Debug, Default)]
pub struct MemoryDiscovery {
    entries: DashMap<String, Vec<ConnectionParams>>,
}

impl MemoryDiscovery {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Discovery for MemoryDiscovery {
    fn resolve_one(
        &self,
        _correlation_id: &str,
        key: &str,
    ) -> Result<Option<ConnectionParams>, ResolveError> {
        Ok(self
            .entries
            .get(key)
            .and_then(|connections| connections.first().cloned()))
    }

    fn resolve_all(
        &self,
        _correlation_id: &str,
        key: &str,
    ) -> Result<Vec<ConnectionParams>, ResolveError> {
        Ok(self
            .entries
            .get(key)
            .map(|connections| connections.value().clone())
            .unwrap_or_default())
    }

    fn register(
        &self,
        _correlation_id: &str,
        key: &str,
        connection: &ConnectionParams,
    ) -> Result<(), ResolveError> {
        self.entries
            .entry(key.to_owned())
            .or_default()
            .push(connection.clone());
        Ok(())
    }
}

/// In-memory credential store.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    entries: DashMap<String, CredentialParams>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn lookup(
        &self,
        _correlation_id: &str,
        key: &str,
    ) -> Result<Option<CredentialParams>, ResolveError> {
        Ok(self.entries.get(key).map(|credential| credential.value().clone()))
    }

    fn store(
        &self,
        _correlation_id: &str,
        key: &str,
        credential: CredentialParams,
    ) -> Result<(), ResolveError> {
        self.entries.insert(key.to_owned(), credential);
        Ok(())
    }
}
