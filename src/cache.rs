//! Path → route resolution caching.
//!
//! [`MatchCache`] remembers, per path, which entry of the route table matched
//! and which params it produced, so repeated navigations to the same path
//! skip the regex scan. Misses ("no route matches") are cached too. It is
//! gated behind the `cache` feature flag and uses the [`lru`] crate.
//!
//! The cache is cleared whenever the route table changes.
//!
//! # Examples
//!
//! ```
//! use spa_navigator::cache::{CachedMatch, MatchCache};
//! use spa_navigator::RouteParams;
//!
//! let mut cache = MatchCache::new(16);
//! cache.insert("/about".to_string(), Some(CachedMatch { index: 0, params: RouteParams::new() }));
//!
//! assert_eq!(cache.get("/about").unwrap().unwrap().index, 0);
//! assert_eq!(cache.stats().hits, 1);
//! ```

use crate::{debug_log, trace_log, RouteParams};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Result of a previous match: position in the route table and params.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedMatch {
    pub index: usize,
    pub params: RouteParams,
}

/// Counters tracking cache hit/miss rates and invalidations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of lookups answered from the cache.
    pub hits: usize,
    /// Number of lookups not in the cache.
    pub misses: usize,
    /// Number of full invalidations (via [`MatchCache::clear`]).
    pub invalidations: usize,
}

impl CacheStats {
    /// Return the hit rate as a value in `0.0..=1.0`.
    ///
    /// Returns `0.0` if no lookups have been performed.
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of match results keyed by path.
///
/// A capacity of zero produces a disabled cache that never stores anything.
#[derive(Debug)]
pub struct MatchCache {
    entries: Option<LruCache<String, Option<CachedMatch>>>,
    stats: CacheStats,
}

impl MatchCache {
    /// Create a cache holding up to `capacity` paths.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(LruCache::new),
            stats: CacheStats::default(),
        }
    }

    /// Look up a path.
    ///
    /// The outer `Option` is hit/miss; the inner one is the cached match
    /// result (`None` = no route matches this path).
    pub fn get(&mut self, path: &str) -> Option<Option<CachedMatch>> {
        let entries = self.entries.as_mut()?;
        if let Some(entry) = entries.get(path) {
            self.stats.hits += 1;
            trace_log!("Match cache hit for path: '{}'", path);
            Some(entry.clone())
        } else {
            self.stats.misses += 1;
            trace_log!("Match cache miss for path: '{}'", path);
            None
        }
    }

    /// Store the match result for a path.
    pub fn insert(&mut self, path: String, result: Option<CachedMatch>) {
        if let Some(entries) = self.entries.as_mut() {
            entries.push(path, result);
        }
    }

    /// Drop every entry and count an invalidation.
    pub fn clear(&mut self) {
        if let Some(entries) = self.entries.as_mut() {
            let removed = entries.len();
            entries.clear();
            self.stats.invalidations += 1;
            debug_log!(
                "Match cache cleared: {} entries removed ({} total invalidations, hit rate: {:.1}%)",
                removed,
                self.stats.invalidations,
                self.stats.hit_rate() * 100.0
            );
        }
    }

    /// Return a reference to the current cache statistics.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Number of cached paths.
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, LruCache::len)
    }

    /// `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(index: usize) -> Option<CachedMatch> {
        Some(CachedMatch {
            index,
            params: RouteParams::new(),
        })
    }

    #[test]
    fn test_miss_then_hit() {
        let mut cache = MatchCache::new(4);
        assert!(cache.get("/a").is_none());
        cache.insert("/a".to_string(), hit(2));

        assert_eq!(cache.get("/a"), Some(hit(2)));
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_negative_results_are_cached() {
        let mut cache = MatchCache::new(4);
        cache.insert("/nowhere".to_string(), None);
        assert_eq!(cache.get("/nowhere"), Some(None));
    }

    #[test]
    fn test_lru_eviction() {
        let mut cache = MatchCache::new(2);
        cache.insert("/a".to_string(), hit(0));
        cache.insert("/b".to_string(), hit(1));
        cache.insert("/c".to_string(), hit(2));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("/a").is_none());
    }

    #[test]
    fn test_clear() {
        let mut cache = MatchCache::new(4);
        cache.insert("/a".to_string(), hit(0));
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.stats().invalidations, 1);
    }

    #[test]
    fn test_zero_capacity_disables() {
        let mut cache = MatchCache::new(0);
        cache.insert("/a".to_string(), hit(0));
        assert!(cache.get("/a").is_none());
        assert!(cache.is_empty());
        assert!((cache.stats().hit_rate() - 0.0).abs() < f64::EPSILON);
    }
}
