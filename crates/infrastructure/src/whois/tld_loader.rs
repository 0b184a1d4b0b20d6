use super::tld_table::TldTable;
use std::path::Path;
use tracing::{info, warn};
use whoisd_domain::{DomainError, TldData};

/// Builds the TLD table from `path`, or from the bundled data when `None`.
///
/// `path` may name a `tld.json` file or a data directory; in a directory only
/// `tld.json` is read and the address-block data sets are skipped.
pub fn load_tld_table(path: Option<&str>) -> Result<TldTable, DomainError> {
    let data = match path.filter(|p| !p.is_empty()) {
        None => TldData::bundled()?,
        Some(path) => load_path(Path::new(path))?,
    };
    TldTable::from_tld_data(&data)
}

fn load_path(path: &Path) -> Result<TldData, DomainError> {
    if !path.is_dir() {
        info!(path = %path.display(), "Loading TLD data");
        return TldData::load(path);
    }

    let dir = std::fs::read_dir(path)
        .map_err(|e| DomainError::InvalidTldData(format!("{}: {}", path.display(), e)))?;

    let mut found = None;
    for entry in dir.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(".json") {
            continue;
        }
        if TldData::is_supported_dataset(&name) {
            found = Some(entry.path());
        } else {
            warn!(file = %name, "Unsupported WHOIS data set, skipping");
        }
    }

    let file = found.ok_or_else(|| {
        DomainError::InvalidTldData(format!("{}: no tld.json found", path.display()))
    })?;
    info!(path = %file.display(), "Loading TLD data");
    TldData::load(file)
}
