use super::super::cache::WhoisCache;
use super::super::coalescer::RequestCoalescer;
use super::super::dialect::Dialect;
use super::super::matcher::TldMatcher;
use super::config::ResolverConfig;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};
use whoisd_application::ports::{WhoisResolution, WhoisResolver, WhoisTransport};
use whoisd_domain::{DialectKind, DomainError, WhoisQuery};

/// Matches the host, coalesces identical queries and performs the fetch.
pub struct CoreWhoisResolver {
    dispatcher: Arc<Dispatcher>,
    coalescer: RequestCoalescer<WhoisResolution>,
}

/// State a detached fetch task needs to own.
struct Dispatcher {
    matcher: TldMatcher,
    transport: Arc<dyn WhoisTransport>,
    port: u16,
    cache: Option<Arc<WhoisCache>>,
}

impl CoreWhoisResolver {
    /// With a cache, successful fetches are stored from the fetch task itself,
    /// so the response is kept even when every caller stopped waiting.
    pub fn new(
        matcher: TldMatcher,
        transport: Arc<dyn WhoisTransport>,
        config: &ResolverConfig,
        cache: Option<Arc<WhoisCache>>,
    ) -> Self {
        Self {
            dispatcher: Arc::new(Dispatcher {
                matcher,
                transport,
                port: config.port,
                cache,
            }),
            coalescer: RequestCoalescer::new(config.fetch_ceiling),
        }
    }

    pub fn in_flight_len(&self) -> usize {
        self.coalescer.in_flight_len()
    }
}

impl Dispatcher {
    async fn fetch_and_store(&self, query: &WhoisQuery) -> Result<WhoisResolution, DomainError> {
        let resolution = self.fetch(query).await?;
        if let Some(cache) = &self.cache {
            cache.insert(query.key(), Arc::clone(&resolution.raw));
        }
        Ok(resolution)
    }

    async fn fetch(&self, query: &WhoisQuery) -> Result<WhoisResolution, DomainError> {
        if query.has_explicit_servers() {
            return self.fetch_from_servers(query).await;
        }

        let dialect = self.matcher.resolve(&query.host)?;
        debug!(
            host = %query.host,
            dialect = dialect.kind_name(),
            server = dialect.server_address(),
            "Dispatching WHOIS query"
        );

        let raw = dialect
            .fetch(self.transport.as_ref(), &query.host, self.port)
            .await?;
        Ok(WhoisResolution::new(raw).with_origin(dialect.server_address(), dialect.kind()))
    }

    /// Tries each server in order; individual failures are only logged.
    async fn fetch_from_servers(&self, query: &WhoisQuery) -> Result<WhoisResolution, DomainError> {
        for server in query.servers.iter() {
            let dialect = Dialect::plain(server);
            match dialect
                .fetch(self.transport.as_ref(), &query.host, self.port)
                .await
            {
                Ok(raw) => {
                    return Ok(WhoisResolution::new(raw).with_origin(server, DialectKind::Plain));
                }
                Err(e) => {
                    warn!(host = %query.host, server = %server, error = %e, "WHOIS server failed");
                }
            }
        }

        Err(DomainError::NoServerResponded(query.host.to_string()))
    }
}

#[async_trait]
impl WhoisResolver for CoreWhoisResolver {
    async fn whois(&self, query: &WhoisQuery) -> Result<WhoisResolution, DomainError> {
        let dispatcher = Arc::clone(&self.dispatcher);
        let owned = query.clone();

        self.coalescer
            .run(query.key(), move || async move {
                dispatcher.fetch_and_store(&owned).await
            })
            .await
    }
}
