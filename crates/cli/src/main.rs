use clap::Parser;
use std::net::Ipv4Addr;
use std::sync::Arc;
use stubdns_application::use_cases::BuildResponseUseCase;
use stubdns_domain::CliOverrides;
use stubdns_infrastructure::dns::{DnsServerHandler, StaticAnswerPolicy};
use tracing::{error, info};

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "stubdns")]
#[command(version)]
#[command(about = "stubdns - UDP DNS server answering every question with a fixed A record")]
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

    /// Number of UDP workers (0 = one per CPU)
    #[arg(long)]
    workers: Option<usize>,

    /// IPv4 address returned in every answer
    #[arg(long, value_name = "IPV4")]
    answer_ip: Option<Ipv4Addr>,

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
        workers: cli.workers,
        answer_address: cli.answer_ip,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting stubdns v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::log_config(&config);

    let policy = Arc::new(StaticAnswerPolicy::from_config(&config.answer));
    let use_case = Arc::new(BuildResponseUseCase::new(policy));
    let dns_handler = DnsServerHandler::new(use_case);

    let dns_addr = config.server.socket_addr()?;
    let num_workers = config.server.effective_workers();

    tokio::select! {
        result = server::start_dns_server(dns_addr, dns_handler, num_workers) => {
            if let Err(e) = result {
                error!(error = %e, "DNS server error");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
