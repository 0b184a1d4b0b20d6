//! Dialects that never open a connection.

use std::sync::Arc;
use whoisd_domain::DomainError;

/// Reverse-DNS zones (`in-addr.arpa`, `ip6.arpa`).
#[derive(Debug, Clone, Default)]
pub struct ArpaDialect;

impl ArpaDialect {
    pub fn fetch(&self, host: &str) -> Result<String, DomainError> {
        Err(DomainError::NotImplemented(host.to_string()))
    }
}

/// Registries that run no WHOIS service at all.
#[derive(Debug, Clone, Default)]
pub struct NoneDialect;

impl NoneDialect {
    pub fn fetch(&self, host: &str) -> Result<String, DomainError> {
        Err(DomainError::NoWhoisServer(host.to_string()))
    }
}

/// Registries that only publish data through a web form.
#[derive(Debug, Clone)]
pub struct WebDialect {
    url: Arc<str>,
}

impl WebDialect {
    pub fn new(url: &str) -> Self {
        Self { url: Arc::from(url) }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn fetch(&self, host: &str) -> Result<String, DomainError> {
        Err(DomainError::WebOnly {
            host: host.to_string(),
            url: self.url.to_string(),
        })
    }
}
