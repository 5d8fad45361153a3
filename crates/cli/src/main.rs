use clap::Parser;
use dockdns_domain::CliOverrides;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "dockdns")]
#[command(version)]
#[command(about = "dockdns - DNS SRV discovery for running Docker containers")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Docker Engine API socket
    #[arg(long, value_name = "PATH")]
    docker_socket: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        docker_socket: cli.docker_socket,
        log_level: cli.log_level,
    };

    let (config, config_source) = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting dockdns v{}", env!("CARGO_PKG_VERSION"));
    info!(source = %config_source, "Configuration loaded");

    let services = di::DiscoveryServices::new(&config)?;

    tokio::select! {
        result = server::start_dns_server(&config.server, services.handler) => {
            if let Err(e) = &result {
                error!(error = %e, "DNS server error");
            }
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
