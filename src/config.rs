use serde::{Deserialize, Serialize};

use crate::relay::DEFAULT_RELAY_ENDPOINT;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub backend: BackendConfig,
    pub relay: RelayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub path: String,
}

/// Base URL the intake forms and the admin console post against. Can be
/// overridden with the BACKEND_URL environment variable.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RelayConfig {
    pub endpoint: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
            },
            database: DatabaseConfig {
                path: "data/leads.db".to_string(),
            },
            backend: BackendConfig {
                base_url: "http://127.0.0.1:8000".to_string(),
            },
            relay: RelayConfig {
                endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

pub async fn load_config(
    path: &str,
) -> std::result::Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = Config::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.database.path, "data/leads.db");
        assert_eq!(config.relay.endpoint, DEFAULT_RELAY_ENDPOINT);
    }

    #[test]
    fn parses_yaml_config() {
        let yaml = r#"
server:
  host: 0.0.0.0
  port: 9000
database:
  path: /tmp/leads.db
backend:
  base_url: https://api.example.co.uk
relay:
  endpoint: https://formspree.io/f/abc123
logging:
  level: debug
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.backend.base_url, "https://api.example.co.uk");
        assert_eq!(config.relay.endpoint, "https://formspree.io/f/abc123");
        assert_eq!(config.logging.level, "debug");
    }
}
