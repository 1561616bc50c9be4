//! Bounded, time-expiring memo of parse results.
//!
//! Entity IDs are parsed once per path or query parameter on every request,
//! over a small working set of distinct strings. The cache keeps the most
//! recently used results for a fixed time after insertion.
//!
//! - Capacity overflow evicts the least recently used entry
//! - Entries expire `ttl` after insertion, regardless of use
//! - Expired entries are dropped lazily when looked up
//! - Only successful parses are stored

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use lru::LruCache;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, trace};

use crate::{EntityId, EvmAddressFlavor};

/// Cache key: the raw input together with the flavor it was parsed under,
/// since the same string may be valid under one flavor and not another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    raw: String,
    flavor: EvmAddressFlavor,
}

impl CacheKey {
    fn new(raw: &str, flavor: EvmAddressFlavor) -> Self {
        Self {
            raw: raw.to_string(),
            flavor,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    id: EntityId,
    inserted_at: Instant,
}

/// Cache statistics.
#[derive(Debug, Default)]
pub struct CacheStats {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub evictions: AtomicU64,
    pub expirations: AtomicU64,
}

impl CacheStats {
    /// A point-in-time copy of the counters.
    pub fn snapshot(&self) -> CacheStatsSnapshot {
        CacheStatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            expirations: self.expirations.load(Ordering::Relaxed),
        }
    }
}

/// Plain copy of [`CacheStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
}

/// LRU cache of parsed entity IDs with a per-entry time to live.
///
/// Safe to share across threads. Two threads missing on the same key both
/// parse and both insert; the results are identical, so the race is benign.
pub struct EntityIdCache {
    entries: Mutex<LruCache<CacheKey, CacheEntry>>,
    ttl: Duration,
    stats: CacheStats,
}

impl EntityIdCache {
    /// Create a cache holding at most `capacity` entries for `ttl` each.
    pub fn new(capacity: NonZeroUsize, ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
            stats: CacheStats::default(),
        }
    }

    /// Look up a previously parsed entity ID.
    pub fn get(&self, raw: &str, flavor: EvmAddressFlavor) -> Option<EntityId> {
        self.get_at(raw, flavor, Instant::now())
    }

    /// Store a successfully parsed entity ID.
    pub fn insert(&self, raw: &str, flavor: EvmAddressFlavor, id: EntityId) {
        self.insert_at(raw, flavor, id, Instant::now());
    }

    pub(crate) fn get_at(
        &self,
        raw: &str,
        flavor: EvmAddressFlavor,
        now: Instant,
    ) -> Option<EntityId> {
        let key = CacheKey::new(raw, flavor);
        let mut entries = self.entries.lock();

        let Some(entry) = entries.get(&key).copied() else {
            self.stats.misses.fetch_add(1, Ordering::Relaxed);
            return None;
        };

        if now.saturating_duration_since(entry.inserted_at) >= self.ttl {
            entries.pop(&key);
            self.stats.expirations.fetch_add(1, Ordering::Relaxed);
            self.stats.misses.fetch_add(1, Ordering::Relaxed);
            debug!(raw = %raw, flavor = %flavor, "Entity ID cache entry expired");
            return None;
        }

        self.stats.hits.fetch_add(1, Ordering::Relaxed);
        trace!(raw = %raw, flavor = %flavor, "Entity ID cache hit");
        Some(entry.id)
    }

    pub(crate) fn insert_at(
        &self,
        raw: &str,
        flavor: EvmAddressFlavor,
        id: EntityId,
        now: Instant,
    ) {
        let key = CacheKey::new(raw, flavor);
        let entry = CacheEntry {
            id,
            inserted_at: now,
        };

        let mut entries = self.entries.lock();
        if let Some((evicted, _)) = entries.push(key.clone(), entry) {
            // push hands back the old value when the key was already present
            if evicted != key {
                self.stats.evictions.fetch_add(1, Ordering::Relaxed);
                debug!(raw = %evicted.raw, flavor = %evicted.flavor, "Evicted entity ID cache entry");
            }
        }
    }

    /// Returns true if an unexpired entry exists, without touching recency.
    pub fn contains(&self, raw: &str, flavor: EvmAddressFlavor) -> bool {
        let key = CacheKey::new(raw, flavor);
        self.entries
            .lock()
            .peek(&key)
            .is_some_and(|entry| entry.inserted_at.elapsed() < self.ttl)
    }

    /// Number of stored entries, including expired ones not yet dropped.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> NonZeroUsize {
        self.entries.lock().cap()
    }

    /// Time to live of each entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Hit, miss, and eviction counters.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

impl std::fmt::Debug for EntityIdCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityIdCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("ttl", &self.ttl)
            .finish()
    }
}
