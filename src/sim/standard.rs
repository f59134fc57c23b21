//! Standard FIFO and LRU simulators.
//!
//! Both run the same loop over a [`FrameStore`]: a hit leaves the slots
//! alone, a fault fills the lowest empty slot or, once the store is full,
//! overwrites the slot of the victim the replacer names. Only the replacer
//! differs between the two policies.

use std::num::NonZeroUsize;

use log::debug;

use super::step::{Access, SimulationResult, Step};
use crate::common::{FrameId, PageId};
use crate::frames::FrameStore;
use crate::replacer::{FifoReplacer, LruReplacer, Replacer};

/// Simulate FIFO replacement: the longest-resident page is evicted first.
///
/// # Example
/// ```
/// use std::num::NonZeroUsize;
/// use pagesim::{simulate_fifo, PageId};
///
/// let pages: Vec<PageId> = [1, 2, 1, 3].into_iter().map(PageId::new).collect();
/// let result = simulate_fifo(&pages, NonZeroUsize::new(2).unwrap());
///
/// assert_eq!(result.hits, 1);
/// assert_eq!(result.faults, 3);
/// // Page 1 arrived first, so page 3 replaces it
/// assert_eq!(result.steps[3].evicted, Some(PageId::new(1)));
/// ```
pub fn simulate_fifo(pages: &[PageId], frame_count: NonZeroUsize) -> SimulationResult {
    simulate(pages, frame_count, FifoReplacer::new())
}

/// Simulate LRU replacement: the least recently referenced page is evicted first.
///
/// # Example
/// ```
/// use std::num::NonZeroUsize;
/// use pagesim::{simulate_lru, PageId};
///
/// let pages: Vec<PageId> = [1, 2, 1, 3].into_iter().map(PageId::new).collect();
/// let result = simulate_lru(&pages, NonZeroUsize::new(2).unwrap());
///
/// // Page 1 was touched again, so page 2 is the victim
/// assert_eq!(result.steps[3].evicted, Some(PageId::new(2)));
/// ```
pub fn simulate_lru(pages: &[PageId], frame_count: NonZeroUsize) -> SimulationResult {
    simulate(pages, frame_count, LruReplacer::new())
}

/// Single pass shared by both policies.
fn simulate<R: Replacer>(
    pages: &[PageId],
    frame_count: NonZeroUsize,
    mut replacer: R,
) -> SimulationResult {
    let mut frames = FrameStore::new(frame_count);
    let mut steps = Vec::with_capacity(pages.len());
    let mut hits = 0;
    let mut faults = 0;

    for (i, &page) in pages.iter().enumerate() {
        let step = if frames.contains(page) {
            hits += 1;
            replacer.record_hit(page);

            Step {
                page,
                access: Access::Hit,
                frames: frames.snapshot(),
                loaded_into: None,
                evicted: None,
            }
        } else {
            faults += 1;

            let (frame_id, evicted) = match frames.first_empty() {
                Some(frame_id) => (frame_id, None),
                None => {
                    let (frame_id, victim) = select_victim(&frames, &mut replacer);
                    (frame_id, Some(victim))
                }
            };
            frames.replace(frame_id, page);
            replacer.record_load(page);

            Step {
                page,
                access: Access::Fault,
                frames: frames.snapshot(),
                loaded_into: Some(frame_id),
                evicted,
            }
        };

        debug!(
            "ref #{} page {}: {} -> {}{}",
            i,
            page,
            step.access,
            step.frames,
            step.evicted
                .map(|v| format!(" (evicted {})", v))
                .unwrap_or_default()
        );
        steps.push(step);
    }

    SimulationResult {
        steps,
        hits,
        faults,
    }
}

/// Ask the replacer for a victim and find the slot it occupies.
///
/// The replacer tracks exactly the resident pages, so a full store always
/// yields a victim that is present.
fn select_victim<R: Replacer>(frames: &FrameStore, replacer: &mut R) -> (FrameId, PageId) {
    let Some(victim) = replacer.evict() else {
        unreachable!(
            "replacer tracks {} pages while all {} frames are occupied",
            replacer.size(),
            frames.frame_count()
        );
    };
    let Some(frame_id) = frames.position(victim) else {
        unreachable!("replacer chose page {} which is not resident", victim);
    };
    (frame_id, victim)
}
