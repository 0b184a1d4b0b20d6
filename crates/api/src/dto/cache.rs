use serde::Serialize;
use whoisd_domain::CacheStats;

#[derive(Serialize, Debug, Clone)]
pub struct CacheStatsResponse {
    pub enabled: bool,
    pub entries: usize,
    pub total_cost: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub evictions: u64,
    pub hit_rate: f64,
}

impl From<CacheStats> for CacheStatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            enabled: stats.enabled,
            entries: stats.entries,
            total_cost: stats.total_cost,
            hits: stats.hits,
            misses: stats.misses,
            insertions: stats.insertions,
            evictions: stats.evictions,
        }
    }
}
