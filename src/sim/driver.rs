//! Simulation driver.
//!
//! Runs the standard simulator for the chosen policy, replays its hit/fault
//! timeline through the matching visualization simulator and aggregates the
//! counts. Every run builds its own state; nothing is shared between runs.

use std::num::NonZeroUsize;

use log::info;

use super::algorithm::Algorithm;
use super::standard::{simulate_fifo, simulate_lru};
use super::step::{ShiftStep, SimulationResult};
use super::visualize::{visualize_fifo_shift, visualize_lru_shift};
use crate::common::{PageId, Result, SimulationConfig};
use crate::input::{check_frame_count, parse_frame_count, parse_reference_string};
use crate::stats::Statistics;

/// Everything one run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Policy that was simulated.
    pub algorithm: Algorithm,

    /// The reference string, as parsed.
    pub reference: Vec<PageId>,

    pub frame_count: NonZeroUsize,

    /// Standard simulation: slot assignment, hit/fault flags and counts.
    pub result: SimulationResult,

    /// Visualization trace, one step per reference.
    pub visualization: Vec<ShiftStep>,

    pub statistics: Statistics,
}

/// Run the full pipeline on already-validated input.
///
/// # Example
/// ```
/// use std::num::NonZeroUsize;
/// use pagesim::{run, Algorithm, PageId};
///
/// let pages: Vec<PageId> = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]
///     .into_iter()
///     .map(PageId::new)
///     .collect();
/// let report = run(&pages, NonZeroUsize::new(3).unwrap(), Algorithm::Fifo);
///
/// assert_eq!(report.result.hits, 3);
/// assert_eq!(report.result.faults, 9);
/// assert_eq!(report.visualization.len(), pages.len());
/// ```
pub fn run(pages: &[PageId], frame_count: NonZeroUsize, algorithm: Algorithm) -> Report {
    check_frame_count(pages, frame_count);

    let (result, visualization) = match algorithm {
        Algorithm::Fifo => {
            let result = simulate_fifo(pages, frame_count);
            let view = visualize_fifo_shift(pages, frame_count, &result.steps);
            (result, view)
        }
        Algorithm::Lru => {
            let result = simulate_lru(pages, frame_count);
            let view = visualize_lru_shift(pages, frame_count, &result.steps);
            (result, view)
        }
    };

    let statistics = result.statistics();
    info!(
        "{} with {} frames over {} references: {} hits, {} faults, {} evictions",
        algorithm,
        frame_count,
        pages.len(),
        result.hits,
        result.faults,
        result.evictions()
    );

    Report {
        algorithm,
        reference: pages.to_vec(),
        frame_count,
        result,
        visualization,
        statistics,
    }
}

/// Run the pipeline with settings taken from a [`SimulationConfig`].
pub fn run_with_config(pages: &[PageId], config: &SimulationConfig) -> Report {
    run(pages, config.frame_count, config.algorithm)
}

/// Validate raw text input, then run.
///
/// Both inputs are validated before any simulation starts.
///
/// # Errors
/// - `Error::InvalidInput` if the reference string is empty or malformed
/// - `Error::InvalidFrameCount` if the frame count is not an integer in `1..=MAX_FRAME_COUNT`
pub fn simulate_input(reference: &str, frame_count: &str, algorithm: Algorithm) -> Result<Report> {
    let pages = parse_reference_string(reference)?;
    let frame_count = parse_frame_count(frame_count)?;
    Ok(run(&pages, frame_count, algorithm))
}
