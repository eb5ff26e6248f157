//! HTTP connection resolver.
//!
//! # Responsibilities
//! - Compose the generic connection and credential resolvers
//! - Validate protocol, host, port, and TLS material
//! - Normalize between the `uri` and discrete-field representations
//!
//! # Design Decisions
//! - A descriptor with a non-empty `uri` is trusted as-is: discrete fields
//!   and TLS material are not checked in that branch
//! - Checks run in a fixed order and the first failure wins; problems are
//!   never aggregated
//! - Normalization picks whichever representation is present and derives
//!   the other completely; it never merges the two

use std::sync::Arc;

use http::Uri;

use crate::config::schema::ConnectConfig;
use crate::connect::credential::CredentialResolver;
use crate::connect::discovery::{CredentialStore, Discovery};
use crate::connect::error::ResolveError;
use crate::connect::params::{ConnectionParams, CredentialParams};
use crate::connect::resolver::ConnectionResolver;

/// Outcome of [`HttpConnectionResolver::resolve_all`].
///
/// When `error` is set the list is only partially processed: entries before
/// the failing one are validated and normalized, the failing entry and
/// everything after it are included as-resolved, untouched. Callers must
/// not assume the whole list is validated whenever `error` is present.
#[derive(Debug)]
pub struct ResolvedConnections {
    /// Every resolved connection, in configuration order.
    pub connections: Vec<ConnectionParams>,

    /// Credential shared by all connections in the list.
    pub credential: Option<CredentialParams>,

    /// First error encountered, if any.
    pub error: Option<ResolveError>,
}

/// Resolves, validates, and normalizes connections for HTTP-based services
/// and clients.
///
/// On top of the generic [`ConnectionResolver`] it parses `http://` URIs,
/// whitelists the protocol, and enforces that `https` endpoints come with
/// TLS key/cert file paths.
///
/// # Example
/// ```
/// use http_connect::{ConnectConfig, ConnectionParams, HttpConnectionResolver};
///
/// let config = ConnectConfig {
///     connection: Some(ConnectionParams::new("http", "10.1.1.100", 8080)),
///     ..Default::default()
/// };
/// let resolver = HttpConnectionResolver::from_config(&config, None, None);
///
/// let (connection, _credential) = resolver.resolve("123").unwrap();
/// assert_eq!(connection.uri, "http://10.1.1.100:8080");
/// ```
pub struct HttpConnectionResolver {
    connections: ConnectionResolver,
    credentials: CredentialResolver,
}

impl HttpConnectionResolver {
    /// Build from already-configured generic resolvers.
    pub fn new(connections: ConnectionResolver, credentials: CredentialResolver) -> Self {
        Self {
            connections,
            credentials,
        }
    }

    /// Build both generic resolvers from one configuration, with optional
    /// discovery and credential-store collaborators.
    pub fn from_config(
        config: &ConnectConfig,
        discovery: Option<Arc<dyn Discovery>>,
        store: Option<Arc<dyn CredentialStore>>,
    ) -> Self {
        Self::new(
            ConnectionResolver::new(config, discovery),
            CredentialResolver::new(config, store),
        )
    }

    /// Validate a connection/credential pair.
    ///
    /// A non-empty `uri` passes immediately, skipping the discrete-field
    /// and TLS checks entirely (the caller-supplied URI is trusted as-is).
    fn validate(
        correlation_id: &str,
        connection: Option<&ConnectionParams>,
        credential: Option<&CredentialParams>,
    ) -> Result<(), ResolveError> {
        let Some(connection) = connection else {
            return Err(ResolveError::NoConnection {
                correlation_id: correlation_id.to_owned(),
            });
        };

        if !connection.uri.is_empty() {
            return Ok(());
        }

        let protocol = connection.protocol.as_str();
        if protocol != "http" && protocol != "https" {
            return Err(ResolveError::WrongProtocol {
                correlation_id: correlation_id.to_owned(),
                protocol: protocol.to_owned(),
            });
        }
        if connection.host.is_empty() {
            return Err(ResolveError::NoHost {
                correlation_id: correlation_id.to_owned(),
            });
        }
        if connection.port == 0 {
            return Err(ResolveError::NoPort {
                correlation_id: correlation_id.to_owned(),
            });
        }

        if protocol == "https" {
            match credential {
                None => {
                    return Err(ResolveError::NoCredential {
                        correlation_id: correlation_id.to_owned(),
                    })
                }
                Some(credential) if credential.ssl_key_file.is_none() => {
                    return Err(ResolveError::NoSslKeyFile {
                        correlation_id: correlation_id.to_owned(),
                    })
                }
                Some(credential) if credential.ssl_crt_file.is_none() => {
                    return Err(ResolveError::NoSslCrtFile {
                        correlation_id: correlation_id.to_owned(),
                    })
                }
                Some(_) => {}
            }
        }

        Ok(())
    }

    /// Normalize a descriptor in place.
    ///
    /// Whichever representation is present wins completely: an empty `uri`
    /// is built from protocol/host/port (the `:{port}` suffix only when
    /// port is set); a present `uri` overwrites all three discrete fields.
    /// A `uri` without an explicit port yields port 0, and a `uri` that
    /// fails to parse leaves the discrete fields untouched. Both are
    /// accepted soft edges, not errors.
    fn normalize(connection: &mut ConnectionParams) {
        if connection.uri.is_empty() {
            let mut uri = format!("{}://{}", connection.protocol, connection.host);
            if connection.port != 0 {
                uri.push_str(&format!(":{}", connection.port));
            }
            connection.uri = uri;
        } else if let Ok(parsed) = connection.uri.parse::<Uri>() {
            connection.protocol = parsed.scheme_str().unwrap_or("").to_owned();
            connection.host = parsed.host().unwrap_or("").to_owned();
            connection.port = parsed.port_u16().unwrap_or(0);
        }
    }

    /// Resolve a single connection and its credential.
    ///
    /// Consults discovery when the configured entry carries a
    /// `discovery_key`. The returned connection is validated and
    /// normalized.
    pub fn resolve(
        &self,
        correlation_id: &str,
    ) -> Result<(ConnectionParams, Option<CredentialParams>), ResolveError> {
        let connection = self.connections.resolve_one(correlation_id)?;
        let credential = self.credentials.lookup(correlation_id)?;
        Self::validate(correlation_id, connection.as_ref(), credential.as_ref())?;

        // validate rejects an absent connection, so this arm is a guard,
        // not a reachable path
        let Some(mut connection) = connection else {
            return Err(ResolveError::NoConnection {
                correlation_id: correlation_id.to_owned(),
            });
        };
        Self::normalize(&mut connection);
        Ok((connection, credential))
    }

    /// Resolve every configured connection, sharing one credential lookup.
    ///
    /// First-error-wins: once a credential lookup or per-entry validation
    /// fails, the remaining entries are passed through unvalidated and
    /// unnormalized, and the outcome carries that first error alongside
    /// the full list.
    pub fn resolve_all(&self, correlation_id: &str) -> ResolvedConnections {
        let mut connections = match self.connections.resolve_all(correlation_id) {
            Ok(connections) => connections,
            Err(error) => {
                return ResolvedConnections {
                    connections: Vec::new(),
                    credential: None,
                    error: Some(error),
                }
            }
        };

        let (credential, mut error) = match self.credentials.lookup(correlation_id) {
            Ok(credential) => (credential, None),
            Err(err) => (None, Some(err)),
        };

        for connection in connections.iter_mut() {
            if error.is_none() {
                error = Self::validate(correlation_id, Some(connection), credential.as_ref()).err();
            }
            if error.is_none() {
                Self::normalize(connection);
            }
        }

        ResolvedConnections {
            connections,
            credential,
            error,
        }
    }

    /// Validate the configured connection and publish it to discovery.
    ///
    /// Any resolution or validation failure is returned without attempting
    /// registration.
    pub fn register(&self, correlation_id: &str) -> Result<(), ResolveError> {
        let connection = self.connections.resolve_one(correlation_id)?;
        let credential = self.credentials.lookup(correlation_id)?;
        Self::validate(correlation_id, connection.as_ref(), credential.as_ref())?;

        let Some(connection) = connection else {
            return Err(ResolveError::NoConnection {
                correlation_id: correlation_id.to_owned(),
            });
        };
        self.connections.register(correlation_id, &connection)
    }
}
