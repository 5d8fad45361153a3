use dockdns_domain::config::{LogFormat, DEFAULT_DNS_PORT};
use dockdns_domain::{CliOverrides, Config, ConfigError};
use std::io::Write;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.dns_port, 15353);
    assert_eq!(config.server.dns_port, DEFAULT_DNS_PORT);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.runtime.socket_path, "/var/run/docker.sock");
    assert_eq!(config.runtime.api_version, "v1.41");
    assert_eq!(config.runtime.timeout_ms, 2000);
    assert!(config.answer.target_host.is_none());
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Text);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [server]
        dns_port = 5300

        [runtime]
        socket_path = "/run/user/1000/docker.sock"

        [logging]
        format = "json"
        "#
    )
    .unwrap();

    let config = Config::from_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.server.dns_port, 5300);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.runtime.socket_path, "/run/user/1000/docker.sock");
    assert_eq!(config.runtime.api_version, "v1.41");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_cli_overrides_win_over_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server]\ndns_port = 5300\n").unwrap();

    let overrides = CliOverrides {
        dns_port: Some(5301),
        bind_address: Some("127.0.0.1".to_string()),
        docker_socket: Some("/tmp/docker.sock".to_string()),
        log_level: Some("debug".to_string()),
    };
    let config = Config::load(file.path().to_str(), overrides).unwrap();

    assert_eq!(config.server.dns_port, 5301);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.runtime.socket_path, "/tmp/docker.sock");
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_missing_file_is_read_error() {
    let result = Config::load(Some("/nonexistent/dockdns.toml"), CliOverrides::default());

    assert!(matches!(result, Err(ConfigError::FileRead { .. })));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server\ndns_port = ").unwrap();

    let result = Config::from_file(file.path().to_str().unwrap());

    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn test_validate_rejects_zero_port() {
    let mut config = Config::default();
    config.server.dns_port = 0;

    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_empty_runtime_settings() {
    let mut config = Config::default();
    config.runtime.socket_path = " ".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.runtime.api_version = String::new();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.runtime.timeout_ms = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.answer.target_host = Some(String::new());
    assert!(config.validate().is_err());
}

#[test]
fn test_listen_addr_accepts_ipv4_and_ipv6() {
    let mut config = Config::default();
    assert_eq!(
        config.server.listen_addr().unwrap().to_string(),
        "0.0.0.0:15353"
    );

    config.server.bind_address = "::".to_string();
    assert_eq!(config.server.listen_addr().unwrap().to_string(), "[::]:15353");

    config.server.bind_address = "[::1]".to_string();
    assert_eq!(config.server.listen_addr().unwrap().to_string(), "[::1]:15353");
}

#[test]
fn test_invalid_bind_address_fails_validation() {
    let mut config = Config::default();
    config.server.bind_address = "not-an-ip".to_string();

    assert!(config.server.listen_addr().is_err());
    assert!(config.validate().is_err());
}
