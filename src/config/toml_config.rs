use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: ServerConfig,
    pub cors: Option<CorsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub listen: String,
    pub static_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub origins: Vec<String>,
}

impl TomlConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl ConfigProvider for TomlConfig {
    fn listen_addr(&self) -> &str {
        &self.server.listen
    }

    fn static_dir(&self) -> Option<&str> {
        self.server.static_dir.as_deref()
    }

    fn cors_origins(&self) -> &[String] {
        self.cors
            .as_ref()
            .map(|cors| cors.origins.as_slice())
            .unwrap_or(&[])
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_listen_addr("server.listen", &self.server.listen)?;
        for origin in self.cors_origins() {
            validation::validate_origin("cors.origins", origin)?;
        }
        if let Some(dir) = self.static_dir() {
            validation::validate_static_dir("server.static_dir", dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::utils::error::ApiError;

    #[test]
    fn test_parse_full_config() {
        let config: TomlConfig = toml::from_str(
            r#"
            [server]
            listen = "0.0.0.0:9000"
            static_dir = "public"

            [cors]
            origins = ["https://example.com"]
            "#,
        )
        .unwrap();

        assert_eq!(config.listen_addr(), "0.0.0.0:9000");
        assert_eq!(config.static_dir(), Some("public"));
        assert_eq!(config.cors_origins(), ["https://example.com".to_string()]);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: TomlConfig = toml::from_str(
            r#"
            [server]
            listen = "127.0.0.1:8080"
            "#,
        )
        .unwrap();

        assert!(config.static_dir().is_none());
        assert!(config.cors_origins().is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nlisten = \"127.0.0.1:7777\"").unwrap();

        let config = TomlConfig::load(file.path()).unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:7777");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = TomlConfig::load("/no/such/config.toml").unwrap_err();
        assert!(matches!(err, ApiError::IoError(_)));
    }
}
