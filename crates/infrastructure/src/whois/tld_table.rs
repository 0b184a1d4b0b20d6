use super::dialect::{create_dialect, Dialect};
use rustc_hash::FxHashMap;
use tracing::info;
use whoisd_domain::{normalize_tld, DomainError, TldData, TldEntry};

/// TLD suffix → dialect, built once and read-only afterwards.
#[derive(Debug, Default)]
pub struct TldTable {
    entries: FxHashMap<Box<str>, Dialect>,
}

impl TldTable {
    /// Fails on the first entry whose dialect cannot be built.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = &'a TldEntry>,
    {
        let mut table = FxHashMap::default();
        for entry in entries {
            let dialect = create_dialect(&entry.kind, &entry.server, &entry.options)?;
            table.insert(normalize_tld(&entry.tld).into_boxed_str(), dialect);
        }
        Ok(Self { entries: table })
    }

    pub fn from_tld_data(data: &TldData) -> Result<Self, DomainError> {
        let table = Self::from_entries(&data.entries)?;
        info!(
            entries = table.len(),
            schema = data.schema.as_deref().unwrap_or("unknown"),
            updated = data.updated.as_deref().unwrap_or("unknown"),
            "TLD table loaded"
        );
        Ok(table)
    }

    /// `suffix` must already be normalized.
    pub fn get(&self, suffix: &str) -> Option<&Dialect> {
        self.entries.get(suffix)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
