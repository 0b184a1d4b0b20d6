use std::time::Duration;
use whoisd_application::ports::DEFAULT_WHOIS_PORT;
use whoisd_domain::Config;

/// Configuration for the WHOIS resolver
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// TCP port of WHOIS servers (default: 43)
    pub port: u16,

    /// Upper bound of a shared in-flight fetch
    pub fetch_ceiling: Duration,

    /// Lifetime of cached responses
    pub cache_ttl: Duration,

    /// Byte budget of the cache
    pub cache_max_cost: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_WHOIS_PORT,
            fetch_ceiling: Duration::from_secs(30),
            cache_ttl: Duration::from_secs(3600),
            cache_max_cost: 256 * 1024 * 1024,
        }
    }
}

impl From<&Config> for ResolverConfig {
    fn from(config: &Config) -> Self {
        Self {
            port: config.whois.port,
            fetch_ceiling: config.whois.fetch_ceiling(),
            cache_ttl: config.cache.ttl(),
            cache_max_cost: config.cache.max_cost_bytes,
        }
    }
}
