#![allow(dead_code)]
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use whoisd_application::ports::WhoisTransport;
use whoisd_domain::{DomainError, TransportStage};

/// Transport double: canned answers per server, counts every round trip.
#[derive(Default)]
pub struct MockTransport {
    answers: HashMap<String, String>,
    failing: Vec<String>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    sent: Mutex<Vec<(String, String)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(mut self, server: &str, raw: &str) -> Self {
        self.answers.insert(server.to_string(), raw.to_string());
        self
    }

    pub fn with_failing_server(mut self, server: &str) -> Self {
        self.failing.push(server.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(query text, server)` pairs in send order.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl WhoisTransport for MockTransport {
    async fn query(&self, text: &str, server: &str, _port: u16) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent
            .lock()
            .unwrap()
            .push((text.to_string(), server.to_string()));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.iter().any(|s| s == server) {
            return Err(DomainError::transport(server, TransportStage::Dial, "connection refused"));
        }

        self.answers
            .get(server)
            .cloned()
            .ok_or_else(|| DomainError::transport(server, TransportStage::Dial, "unknown host"))
    }
}
