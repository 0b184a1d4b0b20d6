use whoisd_domain::CacheStats;

/// Port for cache maintenance and metrics exposed to jobs and the API layer.
pub trait WhoisCachePort: Send + Sync {
    fn stats(&self) -> CacheStats;

    /// Drops entries whose TTL has elapsed; returns how many were removed.
    fn purge_expired(&self) -> usize;

    fn clear(&self);
}
