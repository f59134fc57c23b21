//! FrameStore - the fixed set of slots pages are loaded into.
//!
//! A [`FrameStore`] holds exactly `frame_count` slots. Each slot is either
//! empty (`None`) or holds one resident page. Simulators mutate a store in
//! place and record a [`FrameSnapshot`] after every reference.

use std::fmt;
use std::num::NonZeroUsize;

use crate::common::{FrameId, PageId};

/// A fixed-width row of frame slots.
///
/// The width never changes after construction. Every operation that moves
/// pages around (including [`FrameStore::shift_in`]) keeps exactly
/// `frame_count` slots.
///
/// # Example
/// ```
/// use std::num::NonZeroUsize;
/// use pagesim::{FrameId, FrameStore, PageId};
///
/// let mut store = FrameStore::new(NonZeroUsize::new(2).unwrap());
/// assert_eq!(store.first_empty(), Some(FrameId::new(0)));
///
/// store.replace(FrameId::new(0), PageId::new(7));
/// assert!(store.contains(PageId::new(7)));
/// assert_eq!(store.first_empty(), Some(FrameId::new(1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameStore {
    /// Slot contents, index == FrameId.
    slots: Vec<Option<PageId>>,
}

impl FrameStore {
    /// Create a store with every slot empty.
    pub fn new(frame_count: NonZeroUsize) -> Self {
        Self {
            slots: vec![None; frame_count.get()],
        }
    }

    /// Number of slots.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.slots.len()
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Check whether `page` is resident in any slot.
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.slots.contains(&Some(page))
    }

    /// Slot holding `page`, if it is resident.
    pub fn position(&self, page: PageId) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|slot| *slot == Some(page))
            .map(FrameId::new)
    }

    /// Lowest-indexed empty slot.
    pub fn first_empty(&self) -> Option<FrameId> {
        self.slots.iter().position(Option::is_none).map(FrameId::new)
    }

    /// Contents of a slot. Out-of-range ids read as empty.
    #[inline]
    pub fn get(&self, frame_id: FrameId) -> Option<PageId> {
        self.slots.get(frame_id.0).copied().flatten()
    }

    /// True when no slot is empty.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Resident pages in slot order, skipping empty slots.
    pub fn resident(&self) -> impl Iterator<Item = PageId> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// All slots in index order.
    #[inline]
    pub fn slots(&self) -> &[Option<PageId>] {
        &self.slots
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Put `page` into a slot, returning the previous occupant.
    ///
    /// # Panics
    /// Panics if `frame_id` is out of range.
    pub fn replace(&mut self, frame_id: FrameId, page: PageId) -> Option<PageId> {
        self.slots[frame_id.0].replace(page)
    }

    /// Insert `page` at the front and drop the last slot.
    ///
    /// Returns whatever fell off the end. The width is unchanged.
    pub fn shift_in(&mut self, page: PageId) -> Option<PageId> {
        self.slots.insert(0, Some(page));
        self.slots.pop().flatten()
    }

    /// Rebuild the store from resident pages in order, padding with empty
    /// slots on the right.
    ///
    /// Pages beyond the store width are discarded.
    pub fn fill_from<I>(&mut self, pages: I)
    where
        I: IntoIterator<Item = PageId>,
    {
        let mut next = pages.into_iter();
        for slot in self.slots.iter_mut() {
            *slot = next.next();
        }
    }

    /// Take an owned copy of the current slots.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            slots: self.slots.clone(),
        }
    }
}

/// An immutable copy of a [`FrameStore`] at one point in a run.
///
/// Snapshots own their slots, so later mutation of the store never changes
/// a snapshot that was already recorded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameSnapshot {
    slots: Vec<Option<PageId>>,
}

impl FrameSnapshot {
    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if the snapshot has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Contents of a slot. Out-of-range ids read as empty.
    #[inline]
    pub fn get(&self, frame_id: FrameId) -> Option<PageId> {
        self.slots.get(frame_id.0).copied().flatten()
    }

    /// All slots in index order.
    #[inline]
    pub fn slots(&self) -> &[Option<PageId>] {
        &self.slots
    }

    /// Check whether `page` is held by any slot.
    pub fn contains(&self, page: PageId) -> bool {
        self.slots.contains(&Some(page))
    }
}

impl From<Vec<Option<PageId>>> for FrameSnapshot {
    fn from(slots: Vec<Option<PageId>>) -> Self {
        Self { slots }
    }
}

impl fmt::Display for FrameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match slot {
                Some(page) => write!(f, "{}", page)?,
                None => write!(f, "-")?,
            }
        }
        write!(f, "]")
    }
}
