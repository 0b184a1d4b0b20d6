use async_trait::async_trait;
use whoisd_domain::DomainError;

/// Port 43, used when a caller passes port 0.
pub const DEFAULT_WHOIS_PORT: u16 = 43;

/// One WHOIS round trip: send `text` + CRLF, read until the server closes.
///
/// The response is decoded as UTF-8, falling back to Latin-1 for registries
/// that still answer in ISO-8859-1.
#[async_trait]
pub trait WhoisTransport: Send + Sync {
    async fn query(&self, text: &str, server: &str, port: u16) -> Result<String, DomainError>;
}
