use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Cache raw responses (default: false)
    #[serde(default)]
    pub enabled: bool,

    /// Lifetime of every cached response in seconds (default: 3600)
    #[serde(default = "default_ttl")]
    pub ttl_secs: u64,

    /// Total bytes of cached responses before eviction starts (default: 256 MiB)
    #[serde(default = "default_max_cost")]
    pub max_cost_bytes: usize,

    /// Interval between expired-entry sweeps in seconds (default: 60)
    #[serde(default = "default_maintenance_interval")]
    pub maintenance_interval_secs: u64,
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            ttl_secs: default_ttl(),
            max_cost_bytes: default_max_cost(),
            maintenance_interval_secs: default_maintenance_interval(),
        }
    }
}

fn default_ttl() -> u64 {
    3600
}

fn default_max_cost() -> usize {
    256 * 1024 * 1024
}

fn default_maintenance_interval() -> u64 {
    60
}
