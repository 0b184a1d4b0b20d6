//! whoisd Domain Layer
pub mod cache_stats;
pub mod config;
pub mod dialect;
pub mod errors;
pub mod tld_data;
pub mod whois_query;
pub mod whois_record;

pub use cache_stats::CacheStats;
pub use config::{CliOverrides, Config, ConfigError};
pub use dialect::{DialectKind, QueryOptions};
pub use errors::{DomainError, TransportStage};
pub use tld_data::{normalize_tld, TldData, TldEntry};
pub use whois_query::WhoisQuery;
pub use whois_record::{extract_creation_date, WhoisRecord};
