//! TLD → dialect table as shipped in `tld.json`.
//!
//! The document is a single JSON object. The `_` key carries metadata
//! (`schema`, `updated`); every other key is a TLD suffix whose value names the
//! dialect (`adapter`), the WHOIS host (`host`) or web address (`url`), and any
//! dialect options (`format`, ...).

use crate::{DomainError, QueryOptions};
use serde_json::{Map, Value};
use std::path::Path;

const METADATA_KEY: &str = "_";

static BUNDLED_TLD_DATA: &str = include_str!("../data/tld.json");

/// One `(tld, kind, server, options)` row of the table, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TldEntry {
    pub tld: String,
    pub kind: String,
    pub server: String,
    pub options: QueryOptions,
}

impl TldEntry {
    pub fn new(tld: &str, kind: &str, server: &str) -> Self {
        Self {
            tld: normalize_tld(tld),
            kind: kind.to_string(),
            server: server.to_string(),
            options: QueryOptions::new(),
        }
    }

    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct TldData {
    pub schema: Option<String>,
    pub updated: Option<String>,
    pub entries: Vec<TldEntry>,
}

impl TldData {
    pub fn from_json(bytes: &[u8]) -> Result<Self, DomainError> {
        let root: Map<String, Value> = serde_json::from_slice(bytes)
            .map_err(|e| DomainError::InvalidTldData(e.to_string()))?;

        let mut data = TldData::default();

        for (key, value) in root {
            if key == METADATA_KEY {
                data.schema = string_field(&value, "schema");
                data.updated = string_field(&value, "updated");
                continue;
            }

            let fields = value.as_object().ok_or_else(|| {
                DomainError::InvalidTldData(format!("{key:?}: entry is not an object"))
            })?;

            let options: QueryOptions = fields
                .iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect();

            let kind = options.get("adapter").unwrap_or_default().to_string();
            let server = options
                .get("host")
                .filter(|h| !h.is_empty())
                .or_else(|| options.get("url"))
                .unwrap_or_default()
                .to_string();

            data.entries.push(TldEntry {
                tld: normalize_tld(&key),
                kind,
                server,
                options,
            });
        }

        Ok(data)
    }

    /// The table compiled into the binary.
    pub fn bundled() -> Result<Self, DomainError> {
        Self::from_json(BUNDLED_TLD_DATA.as_bytes())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            DomainError::InvalidTldData(format!("{}: {}", path.display(), e))
        })?;
        Self::from_json(&bytes)
    }

    /// Address-block data sets share the data directory but are never loaded.
    pub fn is_supported_dataset(file_name: &str) -> bool {
        match file_name {
            "asn16.json" | "asn32.json" | "ipv4.json" | "ipv6.json" => false,
            name => name == "tld.json",
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Lower-case, trimmed, no leading dot.
pub fn normalize_tld(tld: &str) -> String {
    tld.trim().trim_start_matches('.').to_ascii_lowercase()
}

fn string_field(value: &Value, field: &str) -> Option<String> {
    value.get(field).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "_": {"schema": "2", "updated": "2024-11-02 10:00:00 UTC"},
        "com": {"host": "whois.verisign-grs.com", "adapter": "verisign"},
        "de": {"host": "whois.denic.de", "adapter": "formatted", "format": "-T dn,ace %s"},
        ".CO.UK": {"host": "whois.nic.uk"},
        "xyz-web": {"adapter": "web", "url": "https://registry.example/whois"}
    }"#;

    fn entry<'a>(data: &'a TldData, tld: &str) -> &'a TldEntry {
        data.entries.iter().find(|e| e.tld == tld).unwrap()
    }

    #[test]
    fn test_metadata_is_not_an_entry() {
        let data = TldData::from_json(SAMPLE.as_bytes()).unwrap();
        assert_eq!(data.len(), 4);
        assert_eq!(data.schema.as_deref(), Some("2"));
        assert_eq!(data.updated.as_deref(), Some("2024-11-02 10:00:00 UTC"));
        assert!(data.entries.iter().all(|e| e.tld != "_"));
    }

    #[test]
    fn test_keys_are_normalized() {
        let data = TldData::from_json(SAMPLE.as_bytes()).unwrap();
        let uk = entry(&data, "co.uk");
        assert_eq!(uk.kind, "");
        assert_eq!(uk.server, "whois.nic.uk");
    }

    #[test]
    fn test_format_option_is_carried() {
        let data = TldData::from_json(SAMPLE.as_bytes()).unwrap();
        let de = entry(&data, "de");
        assert_eq!(de.kind, "formatted");
        assert_eq!(de.options.format(), Some("-T dn,ace %s"));
    }

    #[test]
    fn test_url_used_when_host_missing() {
        let data = TldData::from_json(SAMPLE.as_bytes()).unwrap();
        assert_eq!(entry(&data, "xyz-web").server, "https://registry.example/whois");
    }

    #[test]
    fn test_malformed_document_is_rejected() {
        assert!(matches!(
            TldData::from_json(b"[1, 2]"),
            Err(DomainError::InvalidTldData(_))
        ));
        assert!(matches!(
            TldData::from_json(br#"{"com": "whois.verisign-grs.com"}"#),
            Err(DomainError::InvalidTldData(_))
        ));
    }

    #[test]
    fn test_bundled_data_decodes() {
        let data = TldData::bundled().unwrap();
        assert!(!data.is_empty());
        for tld in ["com", "net", "org", "co.uk", "uk", "de"] {
            assert!(data.entries.iter().any(|e| e.tld == tld), "missing {tld}");
        }
    }

    #[test]
    fn test_address_block_datasets_are_unsupported() {
        assert!(TldData::is_supported_dataset("tld.json"));
        for name in ["asn16.json", "asn32.json", "ipv4.json", "ipv6.json", "notes.txt"] {
            assert!(!TldData::is_supported_dataset(name));
        }
    }
}
