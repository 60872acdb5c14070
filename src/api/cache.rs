//! # Detail Cache
//!
//! Restaurant detail payloads keyed by id. A cached entry is served without
//! a network round trip until something marks it stale with `invalidate`
//! (posting a review does this).

use std::collections::HashMap;

use log::debug;

use super::types::RestaurantDetail;

#[derive(Debug, Default)]
pub struct DetailCache {
    entries: HashMap<String, RestaurantDetail>,
}

impl DetailCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&RestaurantDetail> {
        self.entries.get(id)
    }

    pub fn insert(&mut self, detail: RestaurantDetail) {
        debug!("Caching detail for {}", detail.id);
        self.entries.insert(detail.id.clone(), detail);
    }

    /// Drops the entry for `id`. Returns whether anything was cached.
    pub fn invalidate(&mut self, id: &str) -> bool {
        let removed = self.entries.remove(id).is_some();
        debug!("Invalidated detail cache for {} (was cached: {})", id, removed);
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
