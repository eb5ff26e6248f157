//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ConnectConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<ConnectConfig, ConfigError> {
    let config: ConnectConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ConnectConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
            [connection]
            protocol = "https"
            host = "api.example.com"
            port = 8443

            [credential]
            ssl_key_file = "server.key"
            ssl_crt_file = "server.crt"
            "#,
        )
        .unwrap();

        let connection = config.connection.unwrap();
        assert_eq!(connection.protocol, "https");
        assert_eq!(connection.host, "api.example.com");
        assert_eq!(connection.port, 8443);

        let credential = config.credential.unwrap();
        assert_eq!(credential.ssl_key_file.as_deref(), Some("server.key"));
        assert_eq!(credential.ssl_crt_file.as_deref(), Some("server.crt"));
    }

    #[test]
    fn test_unknown_descriptor_fields_preserved() {
        let config = parse_config(
            r#"
            [connection]
            host = "localhost"
            port = 3000
            timeout_ms = 250
            region = "eu-west-1"
            "#,
        )
        .unwrap();

        let connection = config.connection.unwrap();
        assert_eq!(connection.extra["timeout_ms"], serde_json::json!(250));
        assert_eq!(connection.extra["region"], serde_json::json!("eu-west-1"));
    }

    #[test]
    fn test_invalid_config_reports_validation() {
        let err = parse_config("").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_malformed_toml_reports_parse() {
        let err = parse_config("connection = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
