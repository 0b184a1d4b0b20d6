use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use whoisd_application::use_cases::PurgeExpiredCacheUseCase;

/// Sweeps expired WHOIS responses out of the cache on a fixed interval.
pub struct CacheMaintenanceJob {
    purge: Arc<PurgeExpiredCacheUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheMaintenanceJob {
    pub fn new(purge: Arc<PurgeExpiredCacheUseCase>) -> Self {
        Self {
            purge,
            interval_secs: 60,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting cache maintenance job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheMaintenanceJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let removed = self.purge.execute();
                        if removed > 0 {
                            info!(removed, "Cache maintenance completed");
                        } else {
                            debug!("Cache maintenance found nothing to purge");
                        }
                    }
                }
            }
        });
    }
}
