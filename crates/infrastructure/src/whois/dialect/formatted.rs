use std::sync::Arc;
use whoisd_application::ports::WhoisTransport;
use whoisd_domain::{DialectKind, DomainError, QueryOptions};

const PLACEHOLDER: &str = "%s";

/// Registries that expect flags around the name, e.g. DENIC's `-T dn,ace %s`.
#[derive(Debug, Clone)]
pub struct FormattedDialect {
    server: Arc<str>,
    format: Arc<str>,
}

impl FormattedDialect {
    /// The template must be present, non-empty and hold exactly one `%s`.
    pub fn new(server: &str, options: &QueryOptions) -> Result<Self, DomainError> {
        let format = options
            .format()
            .ok_or_else(|| DomainError::MissingDialectOption {
                kind: DialectKind::Formatted.to_string(),
                option: QueryOptions::FORMAT.to_string(),
            })?;

        let placeholders = format.matches(PLACEHOLDER).count();
        if placeholders != 1 {
            return Err(DomainError::InvalidDialectOption {
                kind: DialectKind::Formatted.to_string(),
                option: QueryOptions::FORMAT.to_string(),
                reason: format!("expected exactly one {PLACEHOLDER}, found {placeholders} in {format:?}"),
            });
        }

        Ok(Self {
            server: Arc::from(server),
            format: Arc::from(format),
        })
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn query_text(&self, host: &str) -> String {
        self.format.replacen(PLACEHOLDER, host, 1)
    }

    pub async fn fetch(
        &self,
        transport: &dyn WhoisTransport,
        host: &str,
        port: u16,
    ) -> Result<String, DomainError> {
        transport
            .query(&self.query_text(host), &self.server, port)
            .await
    }
}
