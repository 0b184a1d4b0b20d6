use super::{
    AfiliasDialect, ArpaDialect, Dialect, FormattedDialect, NoneDialect, PlainDialect,
    VerisignDialect, WebDialect,
};
use whoisd_domain::{DialectKind, DomainError, QueryOptions};

/// Builds the dialect for a TLD data entry.
///
/// `kind` uses the data file spelling; the empty string means `plain`. For
/// `web`, `server` is the registry's lookup URL.
pub fn create_dialect(
    kind: &str,
    server: &str,
    options: &QueryOptions,
) -> Result<Dialect, DomainError> {
    let dialect = match kind.parse::<DialectKind>()? {
        DialectKind::Plain => Dialect::Plain(PlainDialect::new(server)),
        DialectKind::Formatted => Dialect::Formatted(FormattedDialect::new(server, options)?),
        DialectKind::Afilias => Dialect::Afilias(AfiliasDialect::new(server)),
        DialectKind::Verisign => Dialect::Verisign(VerisignDialect::new(server)),
        DialectKind::Arpa => Dialect::Arpa(ArpaDialect),
        DialectKind::None => Dialect::None(NoneDialect),
        DialectKind::Web => Dialect::Web(WebDialect::new(server)),
    };
    Ok(dialect)
}
