//! Two-level keyed stores for cached GDI resources.
//!
//! Entries live until the protocol explicitly replaces or deletes them;
//! there is no implicit reclamation (no LRU, no size cap). Later orders
//! reference entries by `(cache id, cache index)` without copying them.

use std::collections::HashMap;

use egdi_pdu::secondary::{CacheBitmapV1, CacheBitmapV2, CacheBitmapV3};

/// Generic two-level keyed store: cache id selects a cache, cache index an
/// entry inside it. Inserting over an existing key replaces in place.
#[derive(Debug, Clone)]
pub struct GdiCache<T> {
    caches: HashMap<u8, HashMap<u16, T>>,
}

impl<T> GdiCache<T> {
    pub fn new() -> Self {
        Self { caches: HashMap::new() }
    }

    pub fn has(&self, cache_id: u8, cache_index: u16) -> bool {
        self.get(cache_id, cache_index).is_some()
    }

    pub fn get(&self, cache_id: u8, cache_index: u16) -> Option<&T> {
        self.caches.get(&cache_id)?.get(&cache_index)
    }

    pub fn insert(&mut self, cache_id: u8, cache_index: u16, entry: T) {
        self.caches.entry(cache_id).or_default().insert(cache_index, entry);
    }

    /// Removes an entry; returns whether one was present.
    pub fn evict(&mut self, cache_id: u8, cache_index: u16) -> bool {
        self.caches
            .get_mut(&cache_id)
            .is_some_and(|cache| cache.remove(&cache_index).is_some())
    }
}

impl<T> Default for GdiCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A cached bitmap, normalized over the three cache order revisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub cache_id: u8,
    pub cache_index: u16,
    pub bpp: u8,
    pub width: u16,
    pub height: u16,
    pub data: Vec<u8>,
    pub persistent_key: Option<(u32, u32)>,
}

impl From<&CacheBitmapV1> for CacheEntry {
    fn from(order: &CacheBitmapV1) -> Self {
        CacheEntry {
            cache_id: order.cache_id,
            cache_index: order.cache_index,
            bpp: order.bpp,
            width: u16::from(order.width),
            height: u16::from(order.height),
            data: order.data.clone(),
            persistent_key: None,
        }
    }
}

impl From<&CacheBitmapV2> for CacheEntry {
    fn from(order: &CacheBitmapV2) -> Self {
        CacheEntry {
            cache_id: order.cache_id,
            cache_index: order.cache_index,
            bpp: order.bpp,
            width: order.width,
            height: order.height,
            data: order.data.clone(),
            persistent_key: order.persistent_key,
        }
    }
}

impl From<&CacheBitmapV3> for CacheEntry {
    fn from(order: &CacheBitmapV3) -> Self {
        CacheEntry {
            cache_id: order.cache_id,
            cache_index: order.cache_index,
            bpp: order.bpp,
            width: order.width,
            height: order.height,
            data: order.data.clone(),
            persistent_key: Some((order.key1, order.key2)),
        }
    }
}
