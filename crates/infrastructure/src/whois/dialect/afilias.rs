use std::sync::Arc;
use whoisd_application::ports::WhoisTransport;
use whoisd_domain::DomainError;

/// Afilias-operated registries.
///
/// Same wire behaviour as [`PlainDialect`](super::PlainDialect); kept apart so
/// responses can be post-processed per registry family.
#[derive(Debug, Clone)]
pub struct AfiliasDialect {
    server: Arc<str>,
}

impl AfiliasDialect {
    pub fn new(server: &str) -> Self {
        Self {
            server: Arc::from(server),
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub async fn fetch(
        &self,
        transport: &dyn WhoisTransport,
        host: &str,
        port: u16,
    ) -> Result<String, DomainError> {
        transport.query(host, &self.server, port).await
    }
}
