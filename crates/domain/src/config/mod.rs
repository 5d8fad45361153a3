pub mod answer;
pub mod errors;
pub mod logging;
pub mod root;
pub mod runtime;
pub mod server;

pub use answer::AnswerConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use runtime::RuntimeConfig;
pub use server::{ServerConfig, DEFAULT_DNS_PORT};
