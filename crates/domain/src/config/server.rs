use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

/// Port the discovery service listens on when nothing else is configured.
pub const DEFAULT_DNS_PORT: u16 = 15353;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Idle timeout for TCP DNS connections, in seconds.
    #[serde(default = "default_tcp_timeout_secs")]
    pub tcp_timeout_secs: u64,
}

impl ServerConfig {
    /// Socket address to bind. IPv6 addresses may be given with or without brackets.
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.bind_address.trim();
        let host = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);
        let ip: IpAddr = host.parse().map_err(|_| {
            ConfigError::Validation(format!("Invalid bind address: {}", self.bind_address))
        })?;
        Ok(SocketAddr::new(ip, self.dns_port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dns_port: default_dns_port(),
            bind_address: default_bind_address(),
            tcp_timeout_secs: default_tcp_timeout_secs(),
        }
    }
}

fn default_dns_port() -> u16 {
    DEFAULT_DNS_PORT
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_tcp_timeout_secs() -> u64 {
    10
}
