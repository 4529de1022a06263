//! Image cache for fast navigation.
//!
//! Keeps decoded images in their original orientation using an LRU policy,
//! so rotating or revisiting an image does not decode it again.

use image::DynamicImage;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// LRU cache for storing decoded images.
pub struct ImageCache {
    cache: LruCache<PathBuf, Arc<DynamicImage>>,
}

impl ImageCache {
    /// Creates a new image cache with the specified capacity (at least one entry).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Retrieves an image from the cache if it exists.
    pub fn get(&mut self, path: &Path) -> Option<Arc<DynamicImage>> {
        let result = self.cache.get(path).cloned();
        if result.is_some() {
            log::info!("Cache HIT: {}", path.display());
        } else {
            log::info!("Cache MISS: {}", path.display());
        }
        result
    }

    /// Stores an image in the cache.
    pub fn put(&mut self, path: PathBuf, image: Arc<DynamicImage>) {
        log::info!(
            "Cache PUT: {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        self.cache.put(path, image);
    }

    /// Drops a cached image, e.g. after the file was deleted.
    pub fn remove(&mut self, path: &Path) {
        self.cache.pop(path);
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.cache.contains(path)
    }
}
