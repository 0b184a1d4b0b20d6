pub mod cache;
pub mod whois;

pub use cache::CacheStatsResponse;
pub use whois::{WhoisRecordResponse, WhoisRequest};
