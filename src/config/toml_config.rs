use crate::utils::error::{Result, ShippingError};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_route_path, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_path")]
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_path() -> String {
    "/shipping-rates".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path: default_path(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl ServiceConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed)?)
    }

    /// 替換環境變數 (例如 ${SHIPPING_PORT})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ShippingError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// `SHIPPING_HOST` / `SHIPPING_PORT` / `SHIPPING_PATH` win over the file.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var("SHIPPING_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("SHIPPING_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| ShippingError::InvalidConfigValueError {
                    field: "SHIPPING_PORT".to_string(),
                    value: port.clone(),
                    reason: format!("{}", e),
                })?;
        }
        if let Ok(path) = std::env::var("SHIPPING_PATH") {
            self.server.path = path;
        }
        Ok(())
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.server.host)?;
        validate_range("server.port", self.server.port, 1, u16::MAX)?;
        validate_route_path("server.path", &self.server.path)?;

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ShippingError::InvalidConfigValueError {
                field: "logging.level".to_string(),
                value: self.logging.level.clone(),
                reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
            });
        }

        tracing::debug!("✅ Service configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_document() {
        let config = ServiceConfig::from_toml_str("").unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.server.address(), "0.0.0.0:8080");
        assert_eq!(config.server.path, "/shipping-rates");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_sections() {
        let config = ServiceConfig::from_toml_str(
            r#"
[server]
port = 9000

[logging]
json = true
"#,
        )
        .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.json);
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("SHIPPING_TEST_ROUTE", "/frete");
        let config = ServiceConfig::from_toml_str(
            r#"
[server]
path = "${SHIPPING_TEST_ROUTE}"
"#,
        )
        .unwrap();
        assert_eq!(config.server.path, "/frete");
    }

    #[test]
    fn test_unknown_env_var_is_kept_and_fails_validation() {
        let config = ServiceConfig::from_toml_str(
            r#"
[server]
path = "${SHIPPING_TEST_UNSET_VARIABLE}"
"#,
        )
        .unwrap();
        assert_eq!(config.server.path, "${SHIPPING_TEST_UNSET_VARIABLE}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_values() {
        let mut config = ServiceConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = ServiceConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        assert!(ServiceConfig::from_toml_str("[server]\nport = \"eighty\"").is_err());
    }
}
