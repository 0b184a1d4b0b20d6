#![allow(dead_code)]
use async_trait::async_trait;
use axum::Router;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use whoisd_api::{create_api_routes, create_index_routes, AppState};
use whoisd_application::ports::{WhoisCachePort, WhoisResolution, WhoisResolver};
use whoisd_application::use_cases::{GetCacheStatsUseCase, LookupWhoisUseCase};
use whoisd_domain::{CacheStats, DialectKind, DomainError, WhoisQuery};

/// Resolver double keyed by host.
#[derive(Default)]
pub struct StubResolver {
    answers: HashMap<String, Result<String, DomainError>>,
}

impl StubResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, host: &str, raw: &str) -> Self {
        self.answers.insert(host.to_string(), Ok(raw.to_string()));
        self
    }

    pub fn fail(mut self, host: &str, error: DomainError) -> Self {
        self.answers.insert(host.to_string(), Err(error));
        self
    }
}

#[async_trait]
impl WhoisResolver for StubResolver {
    async fn whois(&self, query: &WhoisQuery) -> Result<WhoisResolution, DomainError> {
        match self.answers.get(&*query.host) {
            Some(Ok(raw)) => Ok(WhoisResolution::new(raw.as_str())
                .with_origin("whois.stub.test", DialectKind::Verisign)),
            Some(Err(e)) => Err(e.clone()),
            None => Err(DomainError::CannotMatchTld(query.host.to_string())),
        }
    }
}

pub struct StubCache;

impl WhoisCachePort for StubCache {
    fn stats(&self) -> CacheStats {
        CacheStats {
            enabled: true,
            entries: 2,
            total_cost: 128,
            hits: 3,
            misses: 1,
            insertions: 2,
            evictions: 0,
        }
    }

    fn purge_expired(&self) -> usize {
        0
    }

    fn clear(&self) {}
}

pub fn app(resolver: StubResolver, cache: Option<Arc<dyn WhoisCachePort>>) -> Router {
    let state = AppState {
        lookup: Arc::new(LookupWhoisUseCase::new(
            Arc::new(resolver),
            Duration::from_secs(5),
        )),
        get_cache_stats: Arc::new(GetCacheStatsUseCase::new(cache)),
    };
    Router::new()
        .merge(create_index_routes())
        .nest("/api", create_api_routes(state))
}
