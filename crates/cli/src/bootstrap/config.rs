use tracing::info;
use whoisd_domain::{CliOverrides, Config};

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        cache = config.cache.enabled,
        query_timeout_ms = config.whois.query_timeout_ms,
        "Configuration loaded"
    );

    Ok(config)
}
