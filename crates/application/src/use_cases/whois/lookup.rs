use crate::ports::{WhoisResolution, WhoisResolver};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};
use whoisd_domain::{DomainError, WhoisQuery, WhoisRecord};

/// Raw response plus the record extracted from it.
#[derive(Debug, Clone)]
pub struct WhoisLookup {
    pub resolution: WhoisResolution,
    pub record: WhoisRecord,
}

/// Looks up a host within the caller's deadline.
///
/// Giving up here only abandons this caller's wait; a fetch shared with other
/// callers keeps running inside the resolver.
pub struct LookupWhoisUseCase {
    resolver: Arc<dyn WhoisResolver>,
    timeout: Duration,
}

impl LookupWhoisUseCase {
    pub fn new(resolver: Arc<dyn WhoisResolver>, timeout: Duration) -> Self {
        Self { resolver, timeout }
    }

    #[instrument(skip(self, servers))]
    pub async fn execute(
        &self,
        host: &str,
        servers: &[String],
    ) -> Result<WhoisResolution, DomainError> {
        let query = WhoisQuery::new(host).with_servers(servers);
        if query.host.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "host cannot be empty".to_string(),
            ));
        }

        let resolution = tokio::time::timeout(self.timeout, self.resolver.whois(&query))
            .await
            .map_err(|_| DomainError::QueryTimeout(query.host.to_string()))??;

        debug!(
            host = %query.host,
            cache_hit = resolution.cache_hit,
            bytes = resolution.raw.len(),
            "WHOIS lookup completed"
        );

        Ok(resolution)
    }

    /// Same as [`execute`](Self::execute), plus creation-date extraction.
    pub async fn execute_record(
        &self,
        host: &str,
        servers: &[String],
    ) -> Result<WhoisLookup, DomainError> {
        let resolution = self.execute(host, servers).await?;
        let domain = WhoisQuery::new(host).host;
        let record = WhoisRecord::parse(&domain, resolution.raw.as_bytes());
        Ok(WhoisLookup { resolution, record })
    }
}
