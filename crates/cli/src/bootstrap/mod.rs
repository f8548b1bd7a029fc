mod logging;

pub use logging::init_logging;

use stubdns_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

pub fn log_config(config: &Config) {
    info!(
        bind_address = %config.server.bind_address,
        dns_port = config.server.dns_port,
        workers = config.server.effective_workers(),
        answer_address = %config.answer.address,
        answer_ttl = config.answer.ttl,
        "Configuration loaded"
    );
}
