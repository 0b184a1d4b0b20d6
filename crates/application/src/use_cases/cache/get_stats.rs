use crate::ports::WhoisCachePort;
use std::sync::Arc;
use whoisd_domain::CacheStats;

pub struct GetCacheStatsUseCase {
    cache: Option<Arc<dyn WhoisCachePort>>,
}

impl GetCacheStatsUseCase {
    /// `None` when caching is disabled.
    pub fn new(cache: Option<Arc<dyn WhoisCachePort>>) -> Self {
        Self { cache }
    }

    pub fn execute(&self) -> CacheStats {
        match &self.cache {
            Some(cache) => cache.stats(),
            None => CacheStats::default(),
        }
    }
}
