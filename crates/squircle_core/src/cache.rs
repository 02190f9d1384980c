//! Outline cache
//!
//! Provides a bounded LRU cache so repeated requests for the same shape
//! (e.g. every redraw of an unchanged widget) skip the geometry pipeline.
//! Keys are the raw, unnormalized inputs; normalization is deterministic so
//! equal inputs always produce equal outlines.

use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use lru::LruCache;
use tracing::trace;

use crate::error::{Result, SquircleError};
use crate::geometry::{CornerRadius, Size};
use crate::outline::Outline;
use crate::smoothing::CornerSmoothing;

/// Number of outlines the shared cache keeps
pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(capacity) => capacity,
    None => panic!("default capacity must be non-zero"),
};

/// Process-wide cache used by [`crate::Squircle::outline`]
static SHARED_CACHE: OnceLock<OutlineCache> = OnceLock::new();

/// Exact identity of an outline request
///
/// Compared bit for bit: inputs differing only by floating-point noise are
/// different keys. Negative zero is folded into zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    size: [u64; 2],
    radii: [u64; 4],
    smoothing: u64,
}

impl CacheKey {
    pub fn new(size: Size, radii: CornerRadius, smoothing: CornerSmoothing) -> Self {
        Self {
            size: [bits(size.width), bits(size.height)],
            radii: radii.to_array().map(bits),
            smoothing: bits(smoothing.value()),
        }
    }
}

fn bits(value: f64) -> u64 {
    // -0.0 + 0.0 == +0.0
    (value + 0.0).to_bits()
}

/// Statistics about the outline cache
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of entries in the cache
    pub entries: usize,
    /// Maximum number of entries
    pub capacity: usize,
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
}

impl CacheStats {
    /// Get the hit rate (0.0 to 1.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

struct CacheState {
    entries: LruCache<CacheKey, Outline>,
    hits: u64,
    misses: u64,
}

/// Thread-safe LRU cache of built outlines
pub struct OutlineCache {
    state: Mutex<CacheState>,
}

impl OutlineCache {
    /// Create a new cache holding at most `capacity` outlines
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: LruCache::new(capacity),
                hits: 0,
                misses: 0,
            }),
        }
    }

    /// Create a new cache, rejecting a capacity of zero
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        NonZeroUsize::new(capacity)
            .map(Self::new)
            .ok_or(SquircleError::InvalidCacheCapacity)
    }

    /// The lazily created process-wide cache
    pub fn shared() -> &'static OutlineCache {
        SHARED_CACHE.get_or_init(OutlineCache::default)
    }

    /// Return the cached outline for `key`, or build, store and return it.
    ///
    /// `build` runs without the lock held. If another thread stored the same
    /// key in the meantime, its outline is returned instead so every caller
    /// shares one value.
    pub fn get_or_build<F>(&self, key: CacheKey, build: F) -> Outline
    where
        F: FnOnce() -> Outline,
    {
        if let Some(outline) = self.get(&key) {
            return outline;
        }

        let outline = build();

        let mut state = self.lock();
        if let Some(existing) = state.entries.get(&key).cloned() {
            // Another caller stored it while we were building
            state.hits += 1;
            return existing;
        }
        if let Some((evicted, _)) = state.entries.push(key, outline.clone()) {
            trace!(?evicted, "evicted least recently used outline");
        }
        outline
    }

    /// Get an outline from the cache, marking it most recently used
    pub fn get(&self, key: &CacheKey) -> Option<Outline> {
        let mut state = self.lock();
        match state.entries.get(key).cloned() {
            Some(outline) => {
                state.hits += 1;
                trace!(?key, "outline cache hit");
                Some(outline)
            }
            None => {
                state.misses += 1;
                trace!(?key, "outline cache miss");
                None
            }
        }
    }

    /// Insert an outline, evicting the least recently used entry if full
    pub fn insert(&self, key: CacheKey, outline: Outline) {
        let mut state = self.lock();
        if let Some((evicted, _)) = state.entries.push(key, outline) {
            if evicted != key {
                trace!(?evicted, "evicted least recently used outline");
            }
        }
    }

    /// Check if a key is in the cache without touching its recency
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.lock().entries.contains(key)
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Get the maximum number of entries
    pub fn capacity(&self) -> usize {
        self.lock().entries.cap().get()
    }

    /// Drop every entry and reset statistics
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.hits = 0;
        state.misses = 0;
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        CacheStats {
            entries: state.entries.len(),
            capacity: state.entries.cap().get(),
            hits: state.hits,
            misses: state.misses,
        }
    }

    // A panic while the lock was held cannot leave the map half-updated,
    // so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for OutlineCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
