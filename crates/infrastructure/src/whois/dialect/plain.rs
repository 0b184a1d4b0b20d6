use std::sync::Arc;
use whoisd_application::ports::WhoisTransport;
use whoisd_domain::DomainError;

/// Sends the hostname unchanged. Default for servers without a known quirk.
#[derive(Debug, Clone)]
pub struct PlainDialect {
    server: Arc<str>,
}

impl PlainDialect {
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
