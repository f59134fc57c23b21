//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use super::Replacer;
use crate::common::PageId;

/// Evicts pages in the order they were loaded.
///
/// Hits do not reorder the queue: a page loaded first is evicted first no
/// matter how often it is referenced afterwards.
#[derive(Debug, Default)]
pub struct FifoReplacer {
    /// Arrival queue (front = longest resident).
    queue: VecDeque<PageId>,
}

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl Replacer for FifoReplacer {
    fn record_load(&mut self, page: PageId) {
        self.queue.push_back(page);
    }

    fn record_hit(&mut self, _page: PageId) {}

    fn evict(&mut self) -> Option<PageId> {
        self.queue.pop_front()
    }

    fn size(&self) -> usize {
        self.queue.len()
    }
}
