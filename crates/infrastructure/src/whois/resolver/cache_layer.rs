use super::super::cache::WhoisCache;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use whoisd_application::ports::{WhoisResolution, WhoisResolver};
use whoisd_domain::{DomainError, WhoisQuery};

/// Cache decorator for a WHOIS resolver
///
/// Consulted before the inner resolver. Responses are stored by the core
/// resolver's fetch task, which shares this cache; errors are never stored.
pub struct CachedWhoisResolver {
    inner: Arc<dyn WhoisResolver>,
    cache: Arc<WhoisCache>,
}

impl CachedWhoisResolver {
    pub fn new(inner: Arc<dyn WhoisResolver>, cache: Arc<WhoisCache>) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl WhoisResolver for CachedWhoisResolver {
    async fn whois(&self, query: &WhoisQuery) -> Result<WhoisResolution, DomainError> {
        let key = query.key();

        if let Some(raw) = self.cache.get(&key) {
            debug!(key = %key, "Cache HIT");
            return Ok(WhoisResolution::from_cache(raw));
        }

        debug!(key = %key, "Cache MISS");
        self.inner.whois(query).await
    }

    fn shutdown(&self) {
        debug!(entries = self.cache.len(), "Flushing WHOIS cache");
        self.cache.clear();
        self.inner.shutdown();
    }
}
