use dockdns_domain::config::ServerConfig;
use dockdns_infrastructure::dns::SrvRequestHandler;
use hickory_server::ServerFuture;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tracing::info;

/// Serve discovery queries on UDP and TCP until the listeners fail.
pub async fn start_dns_server(
    config: &ServerConfig,
    handler: SrvRequestHandler,
) -> anyhow::Result<()> {
    let socket_addr = config.listen_addr()?;
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    info!(bind_address = %socket_addr, "Starting DNS server");

    let mut server = ServerFuture::new(handler);
    server.register_socket(create_udp_socket(domain, socket_addr)?);
    server.register_listener(
        create_tcp_listener(domain, socket_addr)?,
        Duration::from_secs(config.tcp_timeout_secs),
    );

    info!("DNS server ready on {} (udp+tcp)", socket_addr);

    server.block_until_done().await?;
    Ok(())
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

fn create_tcp_listener(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(128)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}
