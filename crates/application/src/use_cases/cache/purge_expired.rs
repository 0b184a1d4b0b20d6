use crate::ports::WhoisCachePort;
use std::sync::Arc;
use tracing::debug;

pub struct PurgeExpiredCacheUseCase {
    cache: Arc<dyn WhoisCachePort>,
}

impl PurgeExpiredCacheUseCase {
    pub fn new(cache: Arc<dyn WhoisCachePort>) -> Self {
        Self { cache }
    }

    pub fn execute(&self) -> usize {
        let removed = self.cache.purge_expired();
        debug!(removed, "Expired cache entries purged");
        removed
    }
}
