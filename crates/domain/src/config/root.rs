use serde::{Deserialize, Serialize};
use std::path::Path;

use super::answer::AnswerConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::runtime::RuntimeConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "dockdns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dockdns/config.toml";

/// Main configuration structure for dockdns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Container runtime connection
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// SRV answer settings
    #[serde(default)]
    pub answer: AnswerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dockdns.toml in current directory
    /// 3. /etc/dockdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(socket) = overrides.docker_socket {
            self.runtime.socket_path = socket;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        self.server.listen_addr()?;

        if self.runtime.socket_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Runtime socket path cannot be empty".to_string(),
            ));
        }

        if self.runtime.api_version.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Runtime API version cannot be empty".to_string(),
            ));
        }

        if self.runtime.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Runtime timeout must be greater than 0".to_string(),
            ));
        }

        if let Some(target) = &self.answer.target_host {
            if target.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "Answer target host cannot be blank".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub docker_socket: Option<String>,
    pub log_level: Option<String>,
}
