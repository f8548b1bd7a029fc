use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use stubdns_infrastructure::dns::DnsServerHandler;
use tokio::net::UdpSocket;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

/// Largest datagram read from the socket; classic UDP DNS payload ceiling.
const MAX_DATAGRAM_SIZE: usize = 512;

/// Pause after a recv error that is not tied to a single peer.
const RECV_ERROR_BACKOFF: Duration = Duration::from_millis(50);

pub async fn start_dns_server(
    socket_addr: SocketAddr,
    handler: DnsServerHandler,
    num_workers: usize,
) -> anyhow::Result<()> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    info!(bind_address = %socket_addr, num_workers, "Starting DNS server with SO_REUSEPORT");

    let handler = Arc::new(handler);
    let mut join_set: JoinSet<()> = JoinSet::new();

    for i in 0..num_workers.max(1) {
        let socket = create_udp_socket(domain, socket_addr)?;
        let handler = handler.clone();
        join_set.spawn(async move {
            run_udp_worker(socket, handler, i).await;
        });
    }

    info!("DNS server ready: {} workers on {}", num_workers.max(1), socket_addr);

    while join_set.join_next().await.is_some() {}
    Ok(())
}

async fn run_udp_worker(socket: UdpSocket, handler: Arc<DnsServerHandler>, worker_id: usize) {
    let mut recv_buf = [0u8; MAX_DATAGRAM_SIZE];

    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) if is_transient_recv_error(&e) => {
                debug!(worker = worker_id, error = %e, "Ignoring transient UDP recv error");
                continue;
            }
            Err(e) => {
                error!(worker = worker_id, error = %e, "UDP recv error");
                tokio::time::sleep(RECV_ERROR_BACKOFF).await;
                continue;
            }
        };

        debug!(worker = worker_id, client = %from, len = n, "Received datagram");

        let Some(response) = handler.handle_datagram(&recv_buf[..n]) else {
            continue;
        };

        if let Err(e) = socket.send_to(&response, from).await {
            error!(worker = worker_id, client = %from, error = %e, "UDP send error");
        }
    }
}

/// ICMP errors from an earlier send surface on the next recv; they say
/// nothing about the socket itself.
fn is_transient_recv_error(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::Interrupted
            | io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
    )
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
