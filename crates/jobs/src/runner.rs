use crate::CacheMaintenanceJob;
use std::sync::Arc;
use tracing::info;

/// Central orchestrator for all background jobs.
///
/// Register jobs with the builder methods, then call `.start()` once.
///
/// ```rust,ignore
/// JobRunner::new()
///     .with_cache_maintenance(CacheMaintenanceJob::new(purge).with_interval(60))
///     .start()
///     .await;
/// ```
pub struct JobRunner {
    cache_maintenance: Option<CacheMaintenanceJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            cache_maintenance: None,
        }
    }

    pub fn with_cache_maintenance(mut self, job: CacheMaintenanceJob) -> Self {
        self.cache_maintenance = Some(job);
        self
    }

    pub fn job_count(&self) -> usize {
        usize::from(self.cache_maintenance.is_some())
    }

    /// Start all registered background jobs.
    pub async fn start(self) {
        info!(jobs = self.job_count(), "Starting background job runner");

        if let Some(job) = self.cache_maintenance {
            Arc::new(job).start().await;
        }

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
