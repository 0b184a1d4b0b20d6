use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Field labels registries use for the creation date, tried in order.
const CREATION_MARKERS: [&str; 5] = [
    "Creation Date:",
    "created:",
    "created on:",
    "created date:",
    "Domain Registration Date:",
];

/// Lightly structured view of a raw WHOIS response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoisRecord {
    pub domain: String,
    pub created_date: Option<DateTime<FixedOffset>>,
}

impl WhoisRecord {
    /// Never fails: a missing or unreadable creation date is left empty.
    pub fn parse(domain: &str, raw: &[u8]) -> Self {
        Self {
            domain: domain.to_string(),
            created_date: extract_creation_date(raw),
        }
    }
}

/// Returns the first marker, in listed order, whose value parses.
///
/// A marker present with an unreadable value is skipped in favour of the next.
pub fn extract_creation_date(raw: &[u8]) -> Option<DateTime<FixedOffset>> {
    let text = String::from_utf8_lossy(raw);

    CREATION_MARKERS.iter().find_map(|marker| {
        let pos = text.find(marker)?;
        let rest = &text[pos + marker.len()..];
        let value = rest.split('\n').next().unwrap_or_default().trim();
        parse_timestamp(value)
    })
}

/// Accepted shapes, most specific first.
fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%SZ") {
        return Some(Utc.from_utc_datetime(&naive).fixed_offset());
    }

    for format in ["%Y-%m-%d %H:%M:%S%z", "%Y-%m-%d %H:%M:%S%#z"] {
        if let Ok(ts) = DateTime::parse_from_str(value, format) {
            return Some(ts);
        }
    }

    // RFC 3339 parsing accepts fractional seconds as well.
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts);
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).fixed_offset())
}
