use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Absolute API root; empty means "page host + `port`"
    pub base_url: String,
    pub port: u16,
    pub request_timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            port: 8000,
            request_timeout_ms: 15_000,
        }
    }
}

/// Configuration shipped with the bundle (crates/frontend/config.toml)
const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

static CONFIG: Lazy<ClientConfig> = Lazy::new(load_config);

/// Parse a TOML document; missing keys take their defaults.
pub fn parse_config(contents: &str) -> Result<ClientConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Load the embedded configuration, falling back to built-in defaults
/// when the document does not parse.
pub fn load_config() -> ClientConfig {
    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => {
            log::debug!("Loaded embedded client config: {:?}", config);
            config
        }
        Err(err) => {
            log::warn!("Embedded config.toml is invalid ({}), using defaults", err);
            ClientConfig::default()
        }
    }
}

/// Process-wide configuration, loaded once on first use
pub fn config() -> &'static ClientConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.port, 8000);
        assert_eq!(config.api.request_timeout_ms, 15_000);
        assert!(config.api.base_url.is_empty());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = parse_config("[api]\nbase_url = \"https://inv.example.com\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://inv.example.com");
        assert_eq!(config.api.port, 8000);
        assert_eq!(config.api.request_timeout_ms, 15_000);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(parse_config("").unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(parse_config("[api]\nport = \"eighty\"\n").is_err());
    }
}
