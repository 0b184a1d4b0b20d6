use std::sync::Arc;
use tracing::info;
use whoisd_api::AppState;
use whoisd_application::ports::{WhoisCachePort, WhoisResolver};
use whoisd_application::use_cases::{
    GetCacheStatsUseCase, LookupWhoisUseCase, PurgeExpiredCacheUseCase,
};
use whoisd_domain::Config;
use whoisd_infrastructure::whois::{load_tld_table, ResolverConfig, WhoisCache, WhoisResolverBuilder};

/// Resolver stack built from configuration.
pub struct WhoisServices {
    pub resolver: Arc<dyn WhoisResolver>,
    pub cache: Option<Arc<WhoisCache>>,
}

impl WhoisServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let table = load_tld_table(config.whois.tld_data.as_deref())?;
        let resolver_config = ResolverConfig::from(config);

        let cache = config.cache.enabled.then(|| {
            Arc::new(WhoisCache::new(
                resolver_config.cache_ttl,
                resolver_config.cache_max_cost,
            ))
        });

        let mut builder = WhoisResolverBuilder::new(table).with_config(resolver_config);
        if let Some(cache) = &cache {
            builder = builder.with_cache(Arc::clone(cache));
        }

        Ok(Self {
            resolver: builder.build(),
            cache,
        })
    }

    fn cache_port(&self) -> Option<Arc<dyn WhoisCachePort>> {
        self.cache
            .as_ref()
            .map(|cache| Arc::clone(cache) as Arc<dyn WhoisCachePort>)
    }
}

pub struct UseCases {
    pub lookup: Arc<LookupWhoisUseCase>,
    pub get_cache_stats: Arc<GetCacheStatsUseCase>,
    /// Present only when caching is enabled.
    pub purge_expired: Option<Arc<PurgeExpiredCacheUseCase>>,
}

impl UseCases {
    pub fn new(services: &WhoisServices, config: &Config) -> Self {
        info!("Initializing use cases");

        let cache_port = services.cache_port();
        Self {
            lookup: Arc::new(LookupWhoisUseCase::new(
                Arc::clone(&services.resolver),
                config.whois.query_timeout(),
            )),
            get_cache_stats: Arc::new(GetCacheStatsUseCase::new(cache_port.clone())),
            purge_expired: cache_port.map(|port| Arc::new(PurgeExpiredCacheUseCase::new(port))),
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            lookup: Arc::clone(&self.lookup),
            get_cache_stats: Arc::clone(&self.get_cache_stats),
        }
    }
}
