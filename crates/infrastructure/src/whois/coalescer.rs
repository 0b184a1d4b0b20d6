use futures::future::{BoxFuture, FutureExt, Shared};
use rustc_hash::FxHashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tracing::debug;
use whoisd_domain::DomainError;

type SharedFetch<V> = Shared<BoxFuture<'static, Result<V, DomainError>>>;
type InFlight<V> = Arc<Mutex<FxHashMap<Arc<str>, SharedFetch<V>>>>;

/// Per-key registry of in-flight fetches.
///
/// The first caller for a key spawns the fetch; callers arriving while it runs
/// join the same shared future and observe the identical value or error. The
/// fetch runs on its own task bounded by `ceiling`, so a caller that stops
/// waiting leaves it running for the others. The lock guards only map
/// insert/remove and is never held across an await.
pub struct RequestCoalescer<V> {
    in_flight: InFlight<V>,
    ceiling: Duration,
}

impl<V> RequestCoalescer<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(ceiling: Duration) -> Self {
        Self {
            in_flight: Arc::new(Mutex::new(FxHashMap::default())),
            ceiling,
        }
    }

    pub async fn run<F, Fut>(&self, key: Arc<str>, fetch: F) -> Result<V, DomainError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, DomainError>> + Send + 'static,
    {
        let shared = {
            let mut in_flight = self
                .in_flight
                .lock()
                .unwrap_or_else(PoisonError::into_inner);

            match in_flight.get(&key) {
                Some(existing) => {
                    debug!(key = %key, "Joining in-flight WHOIS fetch");
                    existing.clone()
                }
                None => {
                    let shared = self.spawn(Arc::clone(&key), fetch());
                    in_flight.insert(key, shared.clone());
                    shared
                }
            }
        };

        shared.await
    }

    /// Keys with a fetch currently running.
    pub fn in_flight_len(&self) -> usize {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Caller holds the registry lock, so the task's removal cannot run
    /// before the insert.
    fn spawn<Fut>(&self, key: Arc<str>, fetch: Fut) -> SharedFetch<V>
    where
        Fut: Future<Output = Result<V, DomainError>> + Send + 'static,
    {
        let guard = InFlightGuard {
            in_flight: Arc::clone(&self.in_flight),
            key: Arc::clone(&key),
        };
        let ceiling = self.ceiling;
        let label = key.to_string();

        let handle = tokio::spawn(async move {
            let _guard = guard;
            tokio::time::timeout(ceiling, fetch)
                .await
                .unwrap_or_else(|_| Err(DomainError::QueryTimeout(label)))
        });

        async move {
            handle
                .await
                .unwrap_or_else(|e| Err(DomainError::TaskFailed(e.to_string())))
        }
        .boxed()
        .shared()
    }
}

/// Removes the key when the fetch task ends, including on panic.
struct InFlightGuard<V> {
    in_flight: InFlight<V>,
    key: Arc<str>,
}

impl<V> Drop for InFlightGuard<V> {
    fn drop(&mut self) {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}
