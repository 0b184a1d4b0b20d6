use serde::{Deserialize, Serialize};
use whoisd_application::use_cases::WhoisLookup;

#[derive(Deserialize, Debug, Clone)]
pub struct WhoisRequest {
    pub host: String,
    /// Servers to try in order instead of the TLD table.
    #[serde(default)]
    pub servers: Vec<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct WhoisRecordResponse {
    pub domain: String,
    /// RFC 3339, `null` when the response carries no parseable creation date.
    pub created_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    pub cache_hit: bool,
    pub raw: String,
}

impl From<WhoisLookup> for WhoisRecordResponse {
    fn from(lookup: WhoisLookup) -> Self {
        let WhoisLookup { resolution, record } = lookup;
        Self {
            domain: record.domain,
            created_date: record.created_date.map(|d| d.to_rfc3339()),
            server_kind: resolution.dialect.map(|k| k.to_string()),
            server: resolution.server.map(|s| s.to_string()),
            cache_hit: resolution.cache_hit,
            raw: resolution.raw.to_string(),
        }
    }
}
