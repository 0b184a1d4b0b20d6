pub mod afilias;
pub mod formatted;
pub mod plain;
pub mod registry;
pub mod unsupported;
pub mod verisign;

pub use afilias::AfiliasDialect;
pub use formatted::FormattedDialect;
pub use plain::PlainDialect;
pub use registry::create_dialect;
pub use unsupported::{ArpaDialect, NoneDialect, WebDialect};
pub use verisign::VerisignDialect;

use whoisd_application::ports::WhoisTransport;
use whoisd_domain::{DialectKind, DomainError};

/// Enum-dispatched query dialect, one per TLD table entry.
///
/// The set of dialects is closed, so a `match` replaces a `Box<dyn _>` and
/// the table stores the values inline.
#[derive(Debug, Clone)]
pub enum Dialect {
    Plain(PlainDialect),
    Formatted(FormattedDialect),
    Afilias(AfiliasDialect),
    Verisign(VerisignDialect),
    Arpa(ArpaDialect),
    None(NoneDialect),
    Web(WebDialect),
}

impl Dialect {
    pub fn plain(server: &str) -> Self {
        Self::Plain(PlainDialect::new(server))
    }

    /// Queries `host` the way this registry expects. Unsupported registries
    /// fail without touching the transport.
    pub async fn fetch(
        &self,
        transport: &dyn WhoisTransport,
        host: &str,
        port: u16,
    ) -> Result<String, DomainError> {
        match self {
            Self::Plain(d) => d.fetch(transport, host, port).await,
            Self::Formatted(d) => d.fetch(transport, host, port).await,
            Self::Afilias(d) => d.fetch(transport, host, port).await,
            Self::Verisign(d) => d.fetch(transport, host, port).await,
            Self::Arpa(d) => d.fetch(host),
            Self::None(d) => d.fetch(host),
            Self::Web(d) => d.fetch(host),
        }
    }

    /// WHOIS server, the web URL for `web`, empty when there is neither.
    pub fn server_address(&self) -> &str {
        match self {
            Self::Plain(d) => d.server(),
            Self::Formatted(d) => d.server(),
            Self::Afilias(d) => d.server(),
            Self::Verisign(d) => d.server(),
            Self::Web(d) => d.url(),
            Self::Arpa(_) | Self::None(_) => "",
        }
    }

    pub fn kind(&self) -> DialectKind {
        match self {
            Self::Plain(_) => DialectKind::Plain,
            Self::Formatted(_) => DialectKind::Formatted,
            Self::Afilias(_) => DialectKind::Afilias,
            Self::Verisign(_) => DialectKind::Verisign,
            Self::Arpa(_) => DialectKind::Arpa,
            Self::None(_) => DialectKind::None,
            Self::Web(_) => DialectKind::Web,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind().as_str()
    }
}
