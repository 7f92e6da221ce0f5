//! Configuration module for the inventory engine.
//!
//! Loads YAML configuration with environment variable interpolation and
//! validates it before the service starts.
//!
//! # Usage
//!
//! ```rust,ignore
//! use inventory_engine::config::load_config;
//!
//! // Load from default path (config.yaml); defaults apply if it is absent
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("deploy/config.yaml"))?;
//!
//! println!("HTTP port: {}", config.server.http_port);
//! ```

mod observability;
mod persistence;
mod reporting;
mod server;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use observability::{LogFormat, LoggingConfig, MetricsSettings, ObservabilityConfig};
pub use persistence::PersistenceConfig;
pub use reporting::ReportingConfig;
pub use server::{CorsConfig, ServerConfig};

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Environment variable overriding the configuration file path.
pub const CONFIG_PATH_ENV: &str = "INVENTORY_CONFIG";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Reporting configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
    /// Persistence configuration.
    #[serde(default)]
    pub persistence: PersistenceConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to `config.yaml`,
///   which may be absent, in which case built-in defaults are used.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let explicit = path.is_some();
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    if !explicit && !Path::new(path).exists() {
        tracing::info!(path, "No config file found, using defaults");
        let config = Config::default();
        validate_config(&config)?;
        return Ok(config);
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = if interpolated.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml_bw::from_str(&interpolated)?
    };
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let mut result = input.to_string();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    for cap in re.captures_iter(input) {
        let Some(full_match) = cap.get(0) else {
            continue;
        };
        let Some(var_match) = cap.get(1) else {
            continue;
        };
        let full_match = full_match.as_str();
        let var_name = var_match.as_str();
        let default_value = cap.get(2).map(|m| m.as_str());

        let value = match std::env::var(var_name) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        };

        result = result.replace(full_match, &value);
    }

    result
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.http_port == 0 {
        return Err(ConfigError::ValidationError(
            "server.http_port must be non-zero".to_string(),
        ));
    }

    if config.server.socket_addr().is_none() {
        return Err(ConfigError::ValidationError(format!(
            "server.bind_address '{}' is not a valid IP address",
            config.server.bind_address
        )));
    }

    validate_cors(&config.server.cors)?;

    if config.reporting.zone().is_none() {
        return Err(ConfigError::ValidationError(format!(
            "reporting.utc_offset_minutes must be within ±{} exclusive, got {}",
            reporting::MAX_OFFSET_MINUTES,
            config.reporting.utc_offset_minutes
        )));
    }

    if config.observability.logging.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "observability.logging.level must not be empty".to_string(),
        ));
    }

    let metrics = &config.observability.metrics;
    if metrics.enabled && metrics.listen_addr.parse::<std::net::SocketAddr>().is_err() {
        return Err(ConfigError::ValidationError(format!(
            "observability.metrics.listen_addr '{}' is not a socket address",
            metrics.listen_addr
        )));
    }

    if config
        .persistence
        .seed_path
        .as_deref()
        .is_some_and(|seed| seed.trim().is_empty())
    {
        return Err(ConfigError::ValidationError(
            "persistence.seed_path must not be empty when set".to_string(),
        ));
    }

    Ok(())
}

fn validate_cors(cors: &CorsConfig) -> Result<(), ConfigError> {
    if cors.allows_any_origin() && cors.allow_credentials {
        return Err(ConfigError::ValidationError(
            "server.cors.allowed_origins cannot contain '*' when allow_credentials is set"
                .to_string(),
        ));
    }
    if let Some(origin) = cors
        .allowed_origins
        .iter()
        .filter(|o| o.as_str() != "*")
        .find(|o| o.parse::<axum::http::HeaderValue>().is_err())
    {
        return Err(ConfigError::ValidationError(format!(
            "server.cors.allowed_origins entry '{origin}' is not a valid origin"
        )));
    }
    if let Some(method) = cors
        .allowed_methods
        .iter()
        .find(|m| m.parse::<axum::http::Method>().is_err())
    {
        return Err(ConfigError::ValidationError(format!(
            "server.cors.allowed_methods entry '{method}' is not an HTTP method"
        )));
    }
    if let Some(header) = cors
        .allowed_headers
        .iter()
        .find(|h| h.parse::<axum::http::HeaderName>().is_err())
    {
        return Err(ConfigError::ValidationError(format!(
            "server.cors.allowed_headers entry '{header}' is not a header name"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.http_port, 3000);
        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert_eq!(config.reporting.utc_offset_minutes, 0);
        assert!(config.persistence.seed_path.is_none());
        assert_eq!(config.observability.logging.format, LogFormat::Json);
        assert!(!config.observability.metrics.enabled);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_cors_defaults_allow_local_frontend() {
        let cors = Config::default().server.cors;
        assert_eq!(cors.allowed_origins, vec!["http://localhost:5173"]);
        assert!(cors.allow_credentials);
        assert!(cors.allowed_headers.iter().any(|h| h == "x-user-id"));
    }

    #[test]
    fn test_cors_wildcard_with_credentials_rejected() {
        let yaml = r#"
server:
  cors:
    allowed_origins: ["*"]
"#;
        let err = load_config_from_string(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(ref m) if m.contains("allow_credentials")));

        let yaml = r#"
server:
  cors:
    allowed_origins: ["*"]
    allow_credentials: false
"#;
        let config = load_config_from_string(yaml).unwrap();
        assert!(config.server.cors.allows_any_origin());
    }

    #[test]
    fn test_cors_rejects_bad_entries() {
        let bad_origin = "server:\n  cors:\n    allowed_origins: [\"http://bad\\norigin\"]\n";
        assert!(load_config_from_string(bad_origin).is_err());

        let bad_method = "server:\n  cors:\n    allowed_methods: [\"GE T\"]\n";
        assert!(load_config_from_string(bad_method).is_err());

        let bad_header = "server:\n  cors:\n    allowed_headers: [\"x user\"]\n";
        assert!(load_config_from_string(bad_header).is_err());
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = match load_config_from_string("") {
            Ok(c) => c,
            Err(e) => panic!("should load empty config: {e}"),
        };
        assert_eq!(config.server.http_port, 3000);
    }

    #[test]
    fn test_load_minimal_config() {
        let yaml = r"
server:
  http_port: 8080
";

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load minimal config: {e}"),
        };
        assert_eq!(config.server.http_port, 8080);
        assert_eq!(config.reporting.utc_offset_minutes, 0);
    }

    #[test]
    fn test_env_var_with_default_when_missing() {
        let input = "port: ${INVENTORY_CONFIG_TEST_NONEXISTENT_VAR:-3000}";
        let result = interpolate_env_vars(input);

        assert_eq!(result, "port: 3000");
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax, not format args
    fn test_env_var_with_default_uses_existing() {
        let input = "path: ${PATH:-default}";
        let result = interpolate_env_vars(input);

        assert_ne!(result, "path: default");
        assert!(result.starts_with("path: "));
    }

    #[test]
    fn test_env_var_without_default_becomes_empty() {
        let input = "seed_path: ${INVENTORY_CONFIG_TEST_UNLIKELY_TO_EXIST}";
        let result = interpolate_env_vars(input);

        assert_eq!(result, "seed_path: ");
    }

    #[test]
    fn test_validation_offset_out_of_range() {
        let yaml = r"
reporting:
  utc_offset_minutes: 1440
";

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for out-of-range offset");
        };
        assert!(err.to_string().contains("utc_offset_minutes"));
    }

    #[test]
    fn test_validation_bad_bind_address() {
        let yaml = r#"
server:
  bind_address: "not-an-ip"
"#;

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for bad bind address");
        };
        assert!(err.to_string().contains("bind_address"));
    }

    #[test]
    fn test_validation_bad_metrics_addr() {
        let yaml = r#"
observability:
  metrics:
    enabled: true
    listen_addr: "nowhere"
"#;

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for bad metrics address");
        };
        assert!(err.to_string().contains("listen_addr"));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let result = load_config(Some("/nonexistent/inventory.yaml"));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    #[test]
    fn test_full_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
server:
  http_port: 4000
  bind_address: "127.0.0.1"

reporting:
  utc_offset_minutes: -300

persistence:
  seed_path: "data/seed.json"

observability:
  logging:
    level: "debug"
    format: "pretty"
  metrics:
    enabled: true
    listen_addr: "127.0.0.1:9100"
"#
        )
        .unwrap();

        let path = file.path().to_string_lossy().to_string();
        let config = match load_config(Some(&path)) {
            Ok(c) => c,
            Err(e) => panic!("should load full config: {e}"),
        };

        assert_eq!(config.server.http_port, 4000);
        assert_eq!(config.server.bind_address, "127.0.0.1");
        assert_eq!(config.reporting.zone().unwrap().local_minus_utc(), -300 * 60);
        assert_eq!(config.persistence.seed_path.as_deref(), Some("data/seed.json"));
        assert_eq!(config.observability.logging.level, "debug");
        assert_eq!(config.observability.logging.format, LogFormat::Pretty);
        assert!(config.observability.metrics.enabled);
    }
}
