//! Eviction policy implementations (replacers).
//!
//! A replacer tracks the order of resident pages and names the victim when
//! a fault finds the frame store full. It never touches the store itself.
//!
//! Currently implements:
//! - [`FifoReplacer`] - Arrival order, untouched by hits
//! - [`LruReplacer`] - Access order, refreshed by every hit

mod fifo;
mod lru;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;

use crate::common::PageId;

/// Ordering policy consulted by the standard simulator.
pub trait Replacer {
    /// A page was loaded into a frame after a fault.
    fn record_load(&mut self, page: PageId);

    /// A resident page was referenced again.
    fn record_hit(&mut self, page: PageId);

    /// Remove and return the page that should be evicted next.
    ///
    /// Returns `None` only if no page is being tracked.
    fn evict(&mut self) -> Option<PageId>;

    /// Number of tracked pages.
    fn size(&self) -> usize;
}
