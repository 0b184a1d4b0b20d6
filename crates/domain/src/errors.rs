use std::fmt;
use thiserror::Error;

/// Network step of a WHOIS round trip that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportStage {
    Dial,
    Write,
    Read,
}

impl TransportStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dial => "dial",
            Self::Write => "write",
            Self::Read => "read",
        }
    }
}

impl fmt::Display for TransportStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors share one value across every coalesced waiter, so they must be `Clone`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0:?}: cannot match TLD")]
    CannotMatchTld(String),

    #[error("dialect not found: {0:?}")]
    DialectNotFound(String),

    #[error("{kind} dialect: {option} option is required")]
    MissingDialectOption { kind: String, option: String },

    #[error("{kind} dialect: invalid {option} option: {reason}")]
    InvalidDialectOption {
        kind: String,
        option: String,
        reason: String,
    },

    #[error("Invalid TLD data: {0}")]
    InvalidTldData(String),

    #[error("{0:?}: not implemented")]
    NotImplemented(String),

    #[error("{0:?}: does not have a WHOIS server")]
    NoWhoisServer(String),

    #[error("{host:?}: server does not support WHOIS protocol, try web interface {url}")]
    WebOnly { host: String, url: String },

    #[error("{host:?}: {stage} failed: {reason}")]
    Transport {
        host: String,
        stage: TransportStage,
        reason: String,
    },

    #[error("{0:?}: no WHOIS server responded")]
    NoServerResponded(String),

    #[error("{0:?}: query timeout")]
    QueryTimeout(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("WHOIS task failed: {0}")]
    TaskFailed(String),
}

impl DomainError {
    pub fn transport(host: &str, stage: TransportStage, reason: impl fmt::Display) -> Self {
        Self::Transport {
            host: host.to_string(),
            stage,
            reason: reason.to_string(),
        }
    }

    /// Registries that refuse WHOIS by design (`arpa`, `none`, `web` dialects).
    pub fn is_unsupported_registry(&self) -> bool {
        matches!(
            self,
            Self::NotImplemented(_) | Self::NoWhoisServer(_) | Self::WebOnly { .. }
        )
    }

    /// Web lookup address for registries that only offer a web interface.
    pub fn referral_url(&self) -> Option<&str> {
        match self {
            Self::WebOnly { url, .. } => Some(url),
            _ => None,
        }
    }
}
