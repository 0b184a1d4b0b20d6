use async_trait::async_trait;
use whoisd_domain::{DialectKind, DomainError, WhoisQuery};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhoisResolution {
    /// Raw server response, shared by every coalesced caller.
    pub raw: Arc<str>,
    pub cache_hit: bool,
    /// Server that answered; unknown on cache hits.
    pub server: Option<Arc<str>>,
    pub dialect: Option<DialectKind>,
}

impl WhoisResolution {
    pub fn new(raw: impl Into<Arc<str>>) -> Self {
        Self {
            raw: raw.into(),
            cache_hit: false,
            server: None,
            dialect: None,
        }
    }

    pub fn from_cache(raw: Arc<str>) -> Self {
        Self {
            raw,
            cache_hit: true,
            server: None,
            dialect: None,
        }
    }

    pub fn with_origin(mut self, server: &str, dialect: DialectKind) -> Self {
        self.server = Some(Arc::from(server));
        self.dialect = Some(dialect);
        self
    }
}

#[async_trait]
pub trait WhoisResolver: Send + Sync {
    async fn whois(&self, query: &WhoisQuery) -> Result<WhoisResolution, DomainError>;

    /// Releases resolver-owned state (flushes caches).
    fn shutdown(&self) {}
}
