//! Visualization simulators.
//!
//! These replay a reference string using the hit/fault timeline of a
//! standard run, but lay pages out as a window ordered newest first instead
//! of keeping each page in the slot it was loaded into. Slot positions here
//! are unrelated to the standard run's slots.

use std::num::NonZeroUsize;

use log::trace;

use super::step::{ShiftStep, Step};
use crate::common::PageId;
use crate::frames::FrameStore;

/// FIFO window: every fault pushes the new page in at the front.
///
/// On a fault (according to `standard`) the page is inserted at slot 0 and
/// the last slot falls off. On a hit nothing moves.
///
/// # Panics
/// Panics if `pages` and `standard` differ in length.
pub fn visualize_fifo_shift(
    pages: &[PageId],
    frame_count: NonZeroUsize,
    standard: &[Step],
) -> Vec<ShiftStep> {
    assert_eq!(
        pages.len(),
        standard.len(),
        "standard trace must have one step per reference"
    );

    let mut frames = FrameStore::new(frame_count);

    pages
        .iter()
        .zip(standard)
        .map(|(&page, step)| {
            if step.access.is_fault() {
                frames.shift_in(page);
            }
            trace!("fifo window after {}: {}", page, frames.snapshot());
            ShiftStep {
                page,
                frames: frames.snapshot(),
            }
        })
        .collect()
}

/// LRU window: the referenced page always moves to the front.
///
/// Resident pages are kept newest first. A hit removes the page from its
/// old position before it is re-inserted at the front; a fault simply
/// inserts it and lets the least recent page fall off once the window is
/// over capacity. Empty slots pad the right-hand side.
///
/// # Panics
/// Panics if `pages` and `standard` differ in length.
pub fn visualize_lru_shift(
    pages: &[PageId],
    frame_count: NonZeroUsize,
    standard: &[Step],
) -> Vec<ShiftStep> {
    assert_eq!(
        pages.len(),
        standard.len(),
        "standard trace must have one step per reference"
    );

    let mut frames = FrameStore::new(frame_count);
    let mut steps = Vec::with_capacity(pages.len());

    for (&page, step) in pages.iter().zip(standard) {
        let mut working: Vec<PageId> = frames.resident().collect();
        if step.access.is_hit() {
            working.retain(|&p| p != page);
        }
        working.insert(0, page);
        if working.len() > frame_count.get() {
            working.pop();
        }
        frames.fill_from(working);

        trace!("lru window after {}: {}", page, frames.snapshot());
        steps.push(ShiftStep {
            page,
            frames: frames.snapshot(),
        });
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{simulate_fifo, simulate_lru};

    fn pages(ids: &[i64]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    fn frames(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    /// Render a trace as `[a,b,-]` groups for compact comparison.
    fn windows(steps: &[ShiftStep]) -> Vec<String> {
        steps
            .iter()
            .map(|s| {
                let cells: Vec<String> = s
                    .frames
                    .slots()
                    .iter()
                    .map(|slot| slot.map_or("-".to_string(), |p| p.to_string()))
                    .collect();
                format!("[{}]", cells.join(","))
            })
            .collect()
    }

    #[test]
    fn test_fifo_shift_newest_first() {
        let refs = pages(&[1, 2, 1, 3, 2, 4]);
        let standard = simulate_fifo(&refs, frames(3));
        let view = visualize_fifo_shift(&refs, frames(3), &standard.steps);

        assert_eq!(
            windows(&view),
            vec!["[1,-,-]", "[2,1,-]", "[2,1,-]", "[3,2,1]", "[3,2,1]", "[4,3,2]"]
        );
    }

    #[test]
    fn test_fifo_shift_follows_standard_faults() {
        let refs = pages(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]);
        let standard = simulate_fifo(&refs, frames(3));
        let view = visualize_fifo_shift(&refs, frames(3), &standard.steps);

        assert_eq!(
            windows(&view),
            vec![
                "[7,-,-]", "[0,7,-]", "[1,0,7]", "[2,1,0]", "[2,1,0]", "[3,2,1]", "[0,3,2]",
                "[4,0,3]", "[2,4,0]", "[3,2,4]", "[0,3,2]", "[0,3,2]", "[0,3,2]",
            ]
        );
    }

    #[test]
    fn test_lru_shift_moves_hit_to_front() {
        let refs = pages(&[1, 2, 1, 3, 2, 4]);
        let standard = simulate_lru(&refs, frames(3));
        let view = visualize_lru_shift(&refs, frames(3), &standard.steps);

        assert_eq!(
            windows(&view),
            vec!["[1,-,-]", "[2,1,-]", "[1,2,-]", "[3,1,2]", "[2,3,1]", "[4,2,3]"]
        );
    }

    #[test]
    fn test_lru_shift_textbook_sequence() {
        let refs = pages(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]);
        let standard = simulate_lru(&refs, frames(3));
        let view = visualize_lru_shift(&refs, frames(3), &standard.steps);

        assert_eq!(
            windows(&view),
            vec![
                "[7,-,-]", "[0,7,-]", "[1,0,7]", "[2,1,0]", "[0,2,1]", "[3,0,2]", "[0,3,2]",
                "[4,0,3]", "[2,4,0]", "[3,2,4]", "[0,3,2]", "[3,0,2]", "[2,3,0]",
            ]
        );
    }

    #[test]
    fn test_views_have_standard_length_and_width() {
        let refs = pages(&[5, 5, 6]);
        let standard = simulate_lru(&refs, frames(4));

        for view in [
            visualize_fifo_shift(&refs, frames(4), &standard.steps),
            visualize_lru_shift(&refs, frames(4), &standard.steps),
        ] {
            assert_eq!(view.len(), standard.steps.len());
            assert!(view.iter().all(|s| s.frames.len() == 4));
        }
    }

    #[test]
    #[should_panic(expected = "one step per reference")]
    fn test_mismatched_trace_panics() {
        let refs = pages(&[1, 2]);
        let standard = simulate_fifo(&refs[..1], frames(2));
        visualize_fifo_shift(&refs, frames(2), &standard.steps);
    }
}
