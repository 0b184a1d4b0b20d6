use std::sync::Arc;
use whoisd_application::ports::WhoisTransport;
use whoisd_domain::DomainError;

/// Verisign thin registries (`com`, `net`, ...).
///
/// A bare name matches registrar and nameserver objects as well; the `=`
/// prefix asks for an exact domain match only.
#[derive(Debug, Clone)]
pub struct VerisignDialect {
    server: Arc<str>,
}

impl VerisignDialect {
    pub fn new(server: &str) -> Self {
        Self {
            server: Arc::from(server),
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn query_text(host: &str) -> String {
        format!("={host}")
    }

    pub async fn fetch(
        &self,
        transport: &dyn WhoisTransport,
        host: &str,
        port: u16,
    ) -> Result<String, DomainError> {
        transport
            .query(&Self::query_text(host), &self.server, port)
            .await
    }
}
