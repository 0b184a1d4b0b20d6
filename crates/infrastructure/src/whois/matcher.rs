use super::dialect::Dialect;
use super::tld_table::TldTable;
use fancy_regex::Regex;
use std::sync::LazyLock;
use whoisd_domain::DomainError;

/// Root registry; answers for TLDs themselves.
pub const ROOT_WHOIS_SERVER: &str = "whois.iana.org";

static BARE_TLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.(xn--)?[a-z0-9]+$").expect("bare TLD pattern is valid"));

/// Picks the dialect for a hostname.
pub struct TldMatcher {
    table: TldTable,
    root: Dialect,
}

impl TldMatcher {
    pub fn new(table: TldTable) -> Self {
        Self {
            table,
            root: Dialect::plain(ROOT_WHOIS_SERVER),
        }
    }

    /// `.com`, `.xn--p1ai`, ... go to the root registry. Anything else is
    /// matched on its longest suffix present in the table.
    pub fn resolve(&self, host: &str) -> Result<&Dialect, DomainError> {
        let host = host.to_ascii_lowercase();

        if is_bare_tld(&host) {
            return Ok(&self.root);
        }

        let mut suffix = host.as_str();
        loop {
            if !suffix.is_empty() {
                if let Some(dialect) = self.table.get(suffix) {
                    return Ok(dialect);
                }
            }
            match suffix.split_once('.') {
                Some((_, rest)) => suffix = rest,
                None => return Err(DomainError::CannotMatchTld(host)),
            }
        }
    }
}

pub fn is_bare_tld(host: &str) -> bool {
    BARE_TLD.is_match(host).unwrap_or(false)
}
