use super::CacheMetrics;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use whoisd_application::ports::WhoisCachePort;
use whoisd_domain::CacheStats;

/// Entries inspected per eviction round.
const EVICTION_SAMPLE: usize = 5;

struct CacheEntry {
    value: Arc<str>,
    expires_at: Instant,
    cost: usize,
    /// Milliseconds since the cache was created.
    last_access: AtomicU64,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Raw WHOIS responses keyed by query key.
///
/// Every entry lives for the same TTL. The total cost (key plus response
/// bytes) is capped; once the cap is reached, random samples are taken and
/// the expired or least recently read entry of each sample is dropped, so
/// entries may leave before their TTL. Failures are never stored.
pub struct WhoisCache {
    entries: DashMap<Arc<str>, CacheEntry, FxBuildHasher>,
    ttl: Duration,
    max_cost: usize,
    total_cost: AtomicUsize,
    metrics: CacheMetrics,
    epoch: Instant,
}

impl WhoisCache {
    pub fn new(ttl: Duration, max_cost: usize) -> Self {
        info!(
            ttl_secs = ttl.as_secs(),
            max_cost_bytes = max_cost,
            "Initializing WHOIS cache"
        );

        Self {
            entries: DashMap::with_hasher(FxBuildHasher::default()),
            ttl,
            max_cost,
            total_cost: AtomicUsize::new(0),
            metrics: CacheMetrics::default(),
            epoch: Instant::now(),
        }
    }

    pub fn get(&self, key: &str) -> Option<Arc<str>> {
        let now = Instant::now();

        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now) => {
                entry
                    .last_access
                    .store(self.elapsed_ms(now), Ordering::Relaxed);
                self.metrics.record_hit();
                return Some(Arc::clone(&entry.value));
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.remove_if(key, |entry| entry.is_expired(now));
        }
        self.metrics.record_miss();
        None
    }

    /// Stores `value` for the configured TTL. Values larger than the whole
    /// budget are not stored.
    pub fn insert(&self, key: Arc<str>, value: Arc<str>) {
        let cost = key.len() + value.len();
        if cost > self.max_cost {
            debug!(key = %key, cost = cost, "Response exceeds cache budget, not cached");
            return;
        }

        while self.total_cost.load(Ordering::Relaxed) + cost > self.max_cost {
            if !self.evict_one() {
                break;
            }
        }

        let now = Instant::now();
        let entry = CacheEntry {
            value,
            expires_at: now + self.ttl,
            cost,
            last_access: AtomicU64::new(self.elapsed_ms(now)),
        };

        self.total_cost.fetch_add(cost, Ordering::Relaxed);
        if let Some(previous) = self.entries.insert(Arc::clone(&key), entry) {
            self.total_cost.fetch_sub(previous.cost, Ordering::Relaxed);
        }
        self.metrics.record_insertion();

        debug!(
            key = %key,
            cost = cost,
            cache_size = self.entries.len(),
            "Inserted into WHOIS cache"
        );
    }

    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut released = 0usize;
        let mut removed = 0usize;

        self.entries.retain(|_, entry| {
            if entry.is_expired(now) {
                released += entry.cost;
                removed += 1;
                false
            } else {
                true
            }
        });

        if removed > 0 {
            self.total_cost.fetch_sub(released, Ordering::Relaxed);
            self.metrics.record_expirations(removed);
            debug!(removed = removed, "Purged expired WHOIS cache entries");
        }
        removed
    }

    pub fn clear(&self) {
        self.entries.clear();
        self.total_cost.store(0, Ordering::Relaxed);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_cost(&self) -> usize {
        self.total_cost.load(Ordering::Relaxed)
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    /// Drops one entry from a random sample. Returns `false` when empty.
    fn evict_one(&self) -> bool {
        let len = self.entries.len();
        if len == 0 {
            return false;
        }

        let now = Instant::now();
        let sample = EVICTION_SAMPLE.min(len);
        let start = fastrand::usize(..=len - sample);
        let victim = self
            .entries
            .iter()
            .skip(start)
            .take(sample)
            .map(|entry| {
                let score = if entry.is_expired(now) {
                    0
                } else {
                    entry.last_access.load(Ordering::Relaxed) + 1
                };
                (Arc::clone(entry.key()), score)
            })
            .min_by_key(|(_, score)| *score)
            .map(|(key, _)| key);

        match victim {
            Some(key) => {
                if self.remove_if(&key, |_| true) {
                    self.metrics.record_eviction();
                }
                true
            }
            None => false,
        }
    }

    fn remove_if(&self, key: &str, predicate: impl FnOnce(&CacheEntry) -> bool) -> bool {
        match self.entries.remove_if(key, |_, entry| predicate(entry)) {
            Some((_, entry)) => {
                self.total_cost.fetch_sub(entry.cost, Ordering::Relaxed);
                true
            }
            None => false,
        }
    }

    fn elapsed_ms(&self, now: Instant) -> u64 {
        now.saturating_duration_since(self.epoch).as_millis() as u64
    }
}

impl WhoisCachePort for WhoisCache {
    fn stats(&self) -> CacheStats {
        CacheStats {
            enabled: true,
            entries: self.len(),
            total_cost: self.total_cost(),
            hits: self.metrics.hits(),
            misses: self.metrics.misses(),
            insertions: self.metrics.insertions(),
            evictions: self.metrics.evictions(),
        }
    }

    fn purge_expired(&self) -> usize {
        WhoisCache::purge_expired(self)
    }

    fn clear(&self) {
        WhoisCache::clear(self)
    }
}
