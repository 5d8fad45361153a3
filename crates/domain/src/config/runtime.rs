use serde::{Deserialize, Serialize};

/// Connection settings for the container runtime API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RuntimeConfig {
    #[serde(default = "default_socket_path")]
    pub socket_path: String,

    /// API version prefix, e.g. `v1.41`.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Upper bound for one container listing, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            socket_path: default_socket_path(),
            api_version: default_api_version(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_socket_path() -> String {
    "/var/run/docker.sock".to_string()
}

fn default_api_version() -> String {
    "v1.41".to_string()
}

fn default_timeout_ms() -> u64 {
    2000
}
