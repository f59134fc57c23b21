//! Per-reference records produced by the simulators.

use std::fmt;

use crate::common::{FrameId, PageId};
use crate::frames::FrameSnapshot;
use crate::stats::{aggregate, Statistics};

/// Outcome of a single reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// The page was already resident.
    Hit,
    /// The page had to be loaded.
    Fault,
}

impl Access {
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Access::Hit)
    }

    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, Access::Fault)
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Hit => write!(f, "Hit"),
            Access::Fault => write!(f, "Fault"),
        }
    }
}

/// One step of a standard simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The referenced page.
    pub page: PageId,

    /// Whether the reference hit or faulted.
    pub access: Access,

    /// Frame contents after the reference was processed.
    pub frames: FrameSnapshot,

    /// Slot the page was loaded into. `None` on a hit.
    pub loaded_into: Option<FrameId>,

    /// Page evicted to make room. `None` on a hit or when a slot was free.
    pub evicted: Option<PageId>,
}

/// Outcome of a standard simulation run.
///
/// `hits + faults == steps.len()` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    /// One step per reference, in order.
    pub steps: Vec<Step>,
    pub hits: usize,
    pub faults: usize,
}

impl SimulationResult {
    /// Number of references simulated.
    #[inline]
    pub fn total(&self) -> usize {
        self.steps.len()
    }

    /// Number of faults that had to evict a resident page.
    pub fn evictions(&self) -> usize {
        self.steps.iter().filter(|s| s.evicted.is_some()).count()
    }

    /// Aggregate the counts into rates and the hit/fault ratio.
    pub fn statistics(&self) -> Statistics {
        aggregate(self.hits, self.faults, self.total())
    }
}

/// One step of a visualization run.
///
/// Carries no hit/fault flag; that comes from the matching standard step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftStep {
    /// The referenced page.
    pub page: PageId,

    /// Window contents after the reference was processed.
    pub frames: FrameSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_display() {
        assert_eq!(Access::Hit.to_string(), "Hit");
        assert_eq!(Access::Fault.to_string(), "Fault");
        assert!(Access::Hit.is_hit());
        assert!(Access::Fault.is_fault());
    }

    #[test]
    fn test_result_counts() {
        let step = |access| Step {
            page: PageId::new(1),
            access,
            frames: FrameSnapshot::from(vec![Some(PageId::new(1))]),
            loaded_into: None,
            evicted: None,
        };
        let result = SimulationResult {
            steps: vec![step(Access::Fault), step(Access::Hit)],
            hits: 1,
            faults: 1,
        };

        assert_eq!(result.total(), 2);
        assert_eq!(result.evictions(), 0);
        assert_eq!(result.statistics().hit_rate, 50.0);
    }
}
