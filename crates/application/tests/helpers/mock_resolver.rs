#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use whoisd_application::ports::{WhoisResolution, WhoisResolver};
use whoisd_domain::{DomainError, WhoisQuery};

// ============================================================================
// Mock WhoisResolver
// ============================================================================

#[derive(Clone, Default)]
pub struct MockWhoisResolver {
    responses: Arc<RwLock<HashMap<String, Result<WhoisResolution, DomainError>>>>,
    delay: Arc<RwLock<Option<Duration>>>,
    calls: Arc<AtomicUsize>,
    seen: Arc<RwLock<Vec<WhoisQuery>>>,
}

impl MockWhoisResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_response(&self, host: &str, raw: &str) {
        self.responses
            .write()
            .await
            .insert(host.to_string(), Ok(WhoisResolution::new(raw)));
    }

    pub async fn set_error(&self, host: &str, error: DomainError) {
        self.responses
            .write()
            .await
            .insert(host.to_string(), Err(error));
    }

    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn seen(&self) -> Vec<WhoisQuery> {
        self.seen.read().await.clone()
    }
}

#[async_trait]
impl WhoisResolver for MockWhoisResolver {
    async fn whois(&self, query: &WhoisQuery) -> Result<WhoisResolution, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.write().await.push(query.clone());

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.responses
            .read()
            .await
            .get(query.host.as_ref())
            .cloned()
            .unwrap_or_else(|| Err(DomainError::CannotMatchTld(query.host.to_string())))
    }
}
