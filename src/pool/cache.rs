use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use crate::config::BuildOptions;
use crate::error::Result;

use super::{BuildPoolSolid, Dimensions, GeneratedSolid, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    shape: ShapeKind,
    dimensions: [u64; 3],
}

/// Memoizes built solids by shape and exact dimensions.
///
/// Solids are immutable once built, so callers share them through `Arc`.
/// Entries are evicted oldest-first once `capacity` is reached. Changing the
/// build options invalidates every entry.
#[derive(Debug)]
pub struct SolidCache {
    capacity: usize,
    entries: HashMap<CacheKey, Arc<GeneratedSolid>>,
    order: VecDeque<CacheKey>,
    options: BuildOptions,
    hits: u64,
    misses: u64,
}

impl Default for SolidCache {
    fn default() -> Self {
        Self::new(16)
    }
}

impl SolidCache {
    /// Creates an empty cache holding at most `capacity` solids (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            order: VecDeque::new(),
            options: BuildOptions::default(),
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the cached solid or builds and stores it.
    ///
    /// # Errors
    ///
    /// Propagates build errors; nothing is cached on failure.
    pub fn get_or_build(
        &mut self,
        shape: ShapeKind,
        dimensions: &Dimensions,
        options: &BuildOptions,
    ) -> Result<Arc<GeneratedSolid>> {
        if *options != self.options {
            tracing::debug!(evicted = self.entries.len(), "build options changed, clearing solid cache");
            self.clear();
            self.options = options.clone();
        }

        let key = CacheKey {
            shape,
            dimensions: dimensions.key_bits(),
        };
        if let Some(solid) = self.entries.get(&key) {
            self.hits += 1;
            tracing::debug!(%shape, "solid cache hit");
            return Ok(Arc::clone(solid));
        }

        self.misses += 1;
        let solid = Arc::new(BuildPoolSolid::new(shape, dimensions).execute(options)?);
        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        self.entries.insert(key, Arc::clone(&solid));
        self.order.push_back(key);
        tracing::debug!(%shape, cached = self.entries.len(), "solid cache miss");
        Ok(solid)
    }

    /// Drops every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dims(length: f64) -> Dimensions {
        Dimensions::new(length, 8.0, 5.0).unwrap()
    }

    #[test]
    fn second_lookup_is_a_hit_sharing_the_solid() {
        let mut cache = SolidCache::new(4);
        let options = BuildOptions::default();
        let a = cache.get_or_build(ShapeKind::Kidney, &dims(16.0), &options).unwrap();
        let b = cache.get_or_build(ShapeKind::Kidney, &dims(16.0), &options).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!((cache.hits(), cache.misses()), (1, 1));
    }

    #[test]
    fn oldest_entry_is_evicted_at_capacity() {
        let mut cache = SolidCache::new(2);
        let options = BuildOptions::default();
        for length in [10.0, 12.0, 14.0] {
            cache.get_or_build(ShapeKind::Rectangle, &dims(length), &options).unwrap();
        }
        assert_eq!(cache.len(), 2);
        cache.get_or_build(ShapeKind::Rectangle, &dims(10.0), &options).unwrap();
        assert_eq!(cache.misses(), 4);
        cache.get_or_build(ShapeKind::Rectangle, &dims(14.0), &options).unwrap();
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn option_change_invalidates() {
        let mut cache = SolidCache::default();
        cache.get_or_build(ShapeKind::Lagoon, &dims(20.0), &BuildOptions::default()).unwrap();
        let finer = BuildOptions {
            curve_tolerance: 0.01,
            ..BuildOptions::default()
        };
        let solid = cache.get_or_build(ShapeKind::Lagoon, &dims(20.0), &finer).unwrap();
        assert_eq!(cache.misses(), 2);
        assert_eq!(cache.len(), 1);
        assert!(solid.vertex_count() > 0);
    }
}
