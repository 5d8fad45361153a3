mod logging;

use dockdns_domain::{CliOverrides, Config};

pub use logging::init_logging;

/// Load configuration and describe where it came from.
pub fn load_config(
    path: Option<&str>,
    overrides: CliOverrides,
) -> anyhow::Result<(Config, String)> {
    let source = path
        .map(str::to_string)
        .or_else(Config::get_config_path)
        .unwrap_or_else(|| "built-in defaults".to_string());

    let config = Config::load(path, overrides)?;
    Ok((config, source))
}
