pub mod cache;
pub mod whois;

pub use cache::{GetCacheStatsUseCase, PurgeExpiredCacheUseCase};
pub use whois::{LookupWhoisUseCase, WhoisLookup};
