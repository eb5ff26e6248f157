//! Resolution error definitions.
//!
//! Every variant carries the correlation ID of the operation that failed,
//! and maps to a short machine-readable code via [`ResolveError::code`].
//! All of these are configuration-class problems; none are transient.

use thiserror::Error;

/// Errors produced while resolving, validating, or registering connections.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Connection descriptor absent.
    #[error("HTTP connection is not set (correlation: {correlation_id})")]
    NoConnection { correlation_id: String },

    /// Protocol other than `http` / `https`.
    #[error("protocol {protocol:?} is not supported by REST connection (correlation: {correlation_id})")]
    WrongProtocol {
        correlation_id: String,
        protocol: String,
    },

    /// Host field empty.
    #[error("connection host is not set (correlation: {correlation_id})")]
    NoHost { correlation_id: String },

    /// Port field zero/unset.
    #[error("connection port is not set (correlation: {correlation_id})")]
    NoPort { correlation_id: String },

    /// HTTPS requested with no credential descriptor at all.
    #[error("SSL certificates are not configured for HTTPS protocol (correlation: {correlation_id})")]
    NoCredential { correlation_id: String },

    /// HTTPS credential missing the key-file path.
    #[error("SSL key file is not configured in credentials (correlation: {correlation_id})")]
    NoSslKeyFile { correlation_id: String },

    /// HTTPS credential missing the cert-file path.
    #[error("SSL crt file is not configured in credentials (correlation: {correlation_id})")]
    NoSslCrtFile { correlation_id: String },

    /// A connection names a discovery_key but no discovery was provided.
    #[error("discovery is not configured but a discovery_key is set (correlation: {correlation_id})")]
    NoDiscovery { correlation_id: String },

    /// A credential names a store_key but no credential store was provided.
    #[error("credential store is not configured but a store_key is set (correlation: {correlation_id})")]
    NoCredentialStore { correlation_id: String },

    /// Failure surfaced by a Discovery or CredentialStore implementation,
    /// passed through unchanged.
    #[error("discovery lookup failed: {message} (correlation: {correlation_id})")]
    DiscoveryFailed {
        correlation_id: String,
        message: String,
    },
}

impl ResolveError {
    /// Short machine-readable code for the error condition.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoConnection { .. } => "NO_CONNECTION",
            Self::WrongProtocol { .. } => "WRONG_PROTOCOL",
            Self::NoHost { .. } => "NO_HOST",
            Self::NoPort { .. } => "NO_PORT",
            Self::NoCredential { .. } => "NO_CREDENTIAL",
            Self::NoSslKeyFile { .. } => "NO_SSL_KEY_FILE",
            Self::NoSslCrtFile { .. } => "NO_SSL_CRT_FILE",
            Self::NoDiscovery { .. } => "NO_DISCOVERY",
            Self::NoCredentialStore { .. } => "NO_CREDENTIAL_STORE",
            Self::DiscoveryFailed { .. } => "DISCOVERY_FAILED",
        }
    }

    /// Correlation ID of the failed operation.
    pub fn correlation_id(&self) -> &str {
        match self {
            Self::NoConnection { correlation_id }
            | Self::WrongProtocol { correlation_id, .. }
            | Self::NoHost { correlation_id }
            | Self::NoPort { correlation_id }
            | Self::NoCredential { correlation_id }
            | Self::NoSslKeyFile { correlation_id }
            | Self::NoSslCrtFile { correlation_id }
            | Self::NoDiscovery { correlation_id }
            | Self::NoCredentialStore { correlation_id }
            | Self::DiscoveryFailed { correlation_id, .. } => correlation_id,
        }
    }

    /// Detail key/value pair, where the condition carries one.
    pub fn details(&self) -> Option<(&'static str, &str)> {
        match self {
            Self::WrongProtocol { protocol, .. } => Some(("protocol", protocol)),
            Self::DiscoveryFailed { message, .. } => Some(("message", message)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_details() {
        let err = ResolveError::WrongProtocol {
            correlation_id: "123".into(),
            protocol: "ftp".into(),
        };
        assert_eq!(err.code(), "WRONG_PROTOCOL");
        assert_eq!(err.correlation_id(), "123");
        assert_eq!(err.details(), Some(("protocol", "ftp")));

        let err = ResolveError::NoHost {
            correlation_id: "123".into(),
        };
        assert_eq!(err.code(), "NO_HOST");
        assert_eq!(err.details(), None);
    }
}
