//! # whoisd
//!
//! WHOIS lookups from the command line, or served over HTTP.

mod bootstrap;
mod di;
mod server;

use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use whoisd_domain::{CliOverrides, DomainError};
use whoisd_jobs::{CacheMaintenanceJob, JobRunner};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[command(name = "whoisd")]
#[command(version)]
#[command(about = "WHOIS lookups with per-registry dialects, coalescing and caching")]
struct Cli {
    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, global = true)]
    log_level: Option<String>,

    /// Path to a tld.json file or data directory
    #[arg(long, global = true)]
    tld_data: Option<String>,

    /// Cache responses in memory
    #[arg(long, global = true)]
    cache: bool,

    /// Per-lookup deadline in milliseconds
    #[arg(short = 't', long, global = true)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Query WHOIS for a host and print the response
    Lookup {
        host: String,

        /// Query these servers in order instead of the TLD table
        #[arg(short = 's', long = "server")]
        servers: Vec<String>,

        /// Print the parsed record as JSON instead of the raw response
        #[arg(long)]
        record: bool,
    },

    /// Serve the HTTP API
    Serve {
        /// Bind address
        #[arg(short = 'b', long)]
        bind: Option<String>,

        /// Web server port
        #[arg(short = 'w', long)]
        web_port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (bind_address, web_port) = match &cli.command {
        Command::Serve { bind, web_port } => (bind.clone(), *web_port),
        Command::Lookup { .. } => (None, None),
    };

    let overrides = CliOverrides {
        bind_address,
        web_port,
        log_level: cli.log_level.clone(),
        cache_enabled: cli.cache.then_some(true),
        query_timeout_ms: cli.timeout_ms,
        tld_data: cli.tld_data.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    let services = di::WhoisServices::new(&config)?;
    let use_cases = di::UseCases::new(&services, &config);

    match cli.command {
        Command::Lookup {
            host,
            servers,
            record,
        } => run_lookup(&use_cases, &host, &servers, record).await,
        Command::Serve { .. } => run_server(&config, &services, &use_cases).await,
    }
}

async fn run_lookup(
    use_cases: &di::UseCases,
    host: &str,
    servers: &[String],
    record: bool,
) -> anyhow::Result<()> {
    let outcome = if record {
        use_cases
            .lookup
            .execute_record(host, servers)
            .await
            .and_then(|lookup| {
                let json = serde_json::json!({
                    "domain": lookup.record.domain,
                    "created_date": lookup.record.created_date.map(|d| d.to_rfc3339()),
                    "server_kind": lookup.resolution.dialect.map(|k| k.to_string()),
                    "server": lookup.resolution.server.as_deref(),
                });
                serde_json::to_string_pretty(&json)
                    .map_err(|e| DomainError::TaskFailed(e.to_string()))
            })
    } else {
        use_cases
            .lookup
            .execute(host, servers)
            .await
            .map(|resolution| resolution.raw.to_string())
    };

    match outcome {
        Ok(text) => {
            println!("{text}");
            Ok(())
        }
        Err(e) => {
            if let Some(url) = e.referral_url() {
                eprintln!("{host}: this registry only offers a web lookup: {url}");
            }
            Err(e.into())
        }
    }
}

async fn run_server(
    config: &whoisd_domain::Config,
    services: &di::WhoisServices,
    use_cases: &di::UseCases,
) -> anyhow::Result<()> {
    let bind_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;
    let shutdown = CancellationToken::new();

    let mut runner = JobRunner::new();
    if let Some(purge) = &use_cases.purge_expired {
        runner = runner.with_cache_maintenance(
            CacheMaintenanceJob::new(Arc::clone(purge))
                .with_interval(config.cache.maintenance_interval_secs)
                .with_cancellation(shutdown.clone()),
        );
    }
    runner.start().await;

    let mut web = tokio::spawn({
        let state = use_cases.app_state();
        let origins = config.server.cors_allowed_origins.clone();
        let shutdown = shutdown.clone();
        async move { server::start_web_server(bind_addr, state, &origins, shutdown).await }
    });

    info!(api = %format!("http://{bind_addr}/api"), "whoisd ready, press Ctrl+C to stop");

    let joined = tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            if let Err(e) = signal {
                error!(error = %e, "Failed to listen for shutdown signal");
            }
            info!("Shutdown requested");
            shutdown.cancel();
            web.await
        }
        joined = &mut web => joined,
    };

    shutdown.cancel();
    services.resolver.shutdown();

    match joined {
        Ok(result) => result,
        Err(e) => Err(anyhow::anyhow!("web server task failed: {e}")),
    }
}
