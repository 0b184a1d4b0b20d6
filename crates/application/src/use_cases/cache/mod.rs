pub mod get_stats;
pub mod purge_expired;

pub use get_stats::GetCacheStatsUseCase;
pub use purge_expired::PurgeExpiredCacheUseCase;
