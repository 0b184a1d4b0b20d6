use super::super::cache::WhoisCache;
use super::super::matcher::TldMatcher;
use super::super::tld_table::TldTable;
use super::super::transport::TcpTransport;
use super::cache_layer::CachedWhoisResolver;
use super::config::ResolverConfig;
use super::core::CoreWhoisResolver;
use std::sync::Arc;
use tracing::info;
use whoisd_application::ports::{WhoisResolver, WhoisTransport};

pub struct WhoisResolverBuilder {
    table: TldTable,
    config: ResolverConfig,
    transport: Option<Arc<dyn WhoisTransport>>,
    cache: Option<Arc<WhoisCache>>,
}

impl WhoisResolverBuilder {
    pub fn new(table: TldTable) -> Self {
        Self {
            table,
            config: ResolverConfig::default(),
            transport: None,
            cache: None,
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Defaults to [`TcpTransport`].
    pub fn with_transport(mut self, transport: Arc<dyn WhoisTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_cache(mut self, cache: Arc<WhoisCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn build(self) -> Arc<dyn WhoisResolver> {
        info!(
            tlds = self.table.len(),
            cache = self.cache.is_some(),
            port = self.config.port,
            fetch_ceiling_ms = self.config.fetch_ceiling.as_millis() as u64,
            "Building WHOIS resolver"
        );

        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(TcpTransport::new()));

        let core: Arc<dyn WhoisResolver> = Arc::new(CoreWhoisResolver::new(
            TldMatcher::new(self.table),
            transport,
            &self.config,
            self.cache.clone(),
        ));

        match self.cache {
            Some(cache) => Arc::new(CachedWhoisResolver::new(core, cache)),
            None => core,
        }
    }
}
