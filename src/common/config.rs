//! Configuration constants and run settings.

use std::num::NonZeroUsize;

use crate::common::{Error, Result};
use crate::sim::Algorithm;

/// Frame count used when the caller does not choose one.
///
/// Three frames is the size most textbook reference strings are worked with
/// (Belady's anomaly, the classic LRU exercise).
pub const DEFAULT_FRAME_COUNT: usize = 3;

/// Largest frame count a run accepts.
///
/// Every step records a snapshot of every slot, so memory grows with
/// `frame_count * references`.
pub const MAX_FRAME_COUNT: usize = 1024;

/// Number of decimal places statistics are rounded to.
pub const STAT_PRECISION: i32 = 2;

/// Label shown for an empty slot in rendered tables.
pub const EMPTY_SLOT_LABEL: &str = "";

/// Settings for a single simulation run.
///
/// # Example
/// ```
/// use pagesim::{Algorithm, SimulationConfig};
///
/// let config = SimulationConfig::new(4, Algorithm::Lru).unwrap();
/// assert_eq!(config.frame_count.get(), 4);
///
/// assert!(SimulationConfig::new(0, Algorithm::Fifo).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of frames in the store. Fixed for the whole run.
    pub frame_count: NonZeroUsize,

    /// Replacement policy to simulate.
    pub algorithm: Algorithm,
}

impl SimulationConfig {
    /// Create a validated config.
    ///
    /// # Errors
    /// - `Error::InvalidFrameCount` if `frame_count` is 0 or above [`MAX_FRAME_COUNT`]
    pub fn new(frame_count: usize, algorithm: Algorithm) -> Result<Self> {
        let frame_count = validate_frame_count(frame_count)?;
        Ok(Self {
            frame_count,
            algorithm,
        })
    }
}

/// Check that a frame count lies in `1..=MAX_FRAME_COUNT`.
///
/// # Errors
/// - `Error::InvalidFrameCount` if it does not
pub fn validate_frame_count(frame_count: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(frame_count)
        .filter(|n| n.get() <= MAX_FRAME_COUNT)
        .ok_or_else(|| Error::InvalidFrameCount(frame_count.to_string()))
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frame_count: NonZeroUsize::new(DEFAULT_FRAME_COUNT).unwrap_or(NonZeroUsize::MIN),
            algorithm: Algorithm::Fifo,
        }
    }
}
