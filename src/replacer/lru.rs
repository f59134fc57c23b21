//! LRU (Least Recently Used) replacement policy.

use std::collections::VecDeque;

use super::Replacer;
use crate::common::PageId;

/// Evicts the page whose last reference is furthest in the past.
/// A hit costs a linear scan of the recency list.
#[derive(Debug, Default)]
pub struct LruReplacer {
    /// Recency list (front = least recently used, back = most recent).
    recency: VecDeque<PageId>,
}

impl LruReplacer {
    /// Create a new LRU replacer.
    pub fn new() -> Self {
        Self {
            recency: VecDeque::new(),
        }
    }

    fn touch(&mut self, page: PageId) {
        if let Some(pos) = self.recency.iter().position(|&p| p == page) {
            self.recency.remove(pos);
        }
        self.recency.push_back(page);
    }
}

impl Replacer for LruReplacer {
    fn record_load(&mut self, page: PageId) {
        self.touch(page);
    }

    fn record_hit(&mut self, page: PageId) {
        self.touch(page);
    }

    fn evict(&mut self) -> Option<PageId> {
        self.recency.pop_front()
    }

    fn size(&self) -> usize {
        self.recency.len()
    }
}
