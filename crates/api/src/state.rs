use std::sync::Arc;
use whoisd_application::use_cases::{GetCacheStatsUseCase, LookupWhoisUseCase};

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<LookupWhoisUseCase>,
    pub get_cache_stats: Arc<GetCacheStatsUseCase>,
}
