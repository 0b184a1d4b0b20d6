use serde::{Deserialize, Serialize};
use std::time::Duration;

/// WHOIS query settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WhoisConfig {
    /// How long a single caller waits for an answer, in milliseconds (default: 10000)
    #[serde(default = "default_query_timeout")]
    pub query_timeout_ms: u64,

    /// Upper bound for a shared in-flight fetch, in milliseconds (default: 30000)
    ///
    /// Independent of any caller's deadline, so one impatient caller cannot
    /// cancel a lookup other callers are still waiting on.
    #[serde(default = "default_fetch_ceiling")]
    pub fetch_ceiling_ms: u64,

    /// TCP port of WHOIS servers (default: 43)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to a `tld.json` file; the bundled table is used when unset
    #[serde(default)]
    pub tld_data: Option<String>,
}

impl WhoisConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    pub fn fetch_ceiling(&self) -> Duration {
        Duration::from_millis(self.fetch_ceiling_ms)
    }
}

impl Default for WhoisConfig {
    fn default() -> Self {
        Self {
            query_timeout_ms: default_query_timeout(),
            fetch_ceiling_ms: default_fetch_ceiling(),
            port: default_port(),
            tld_data: None,
        }
    }
}

fn default_query_timeout() -> u64 {
    10_000
}

fn default_fetch_ceiling() -> u64 {
    30_000
}

fn default_port() -> u16 {
    43
}
