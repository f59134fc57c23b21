//! pagesim - an educational simulator for FIFO and LRU page replacement.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Input (input/)  →  Driver (sim::run)              │   │
//! │  │    reference string + frame count + algorithm            │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Standard simulators (sim/standard)              │   │
//! │  │      FrameStore + Replacer: FIFO queue | LRU recency      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                   ↓ hit/fault per step ↓                        │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Visualization simulators (sim/visualize)          │   │
//! │  │       FIFO shifting window | LRU recency window          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Statistics (stats/)  →  Rendering (render/)       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`frames`] - The fixed-width frame store and its snapshots
//! - [`replacer`] - Eviction order for FIFO and LRU
//! - [`sim`] - Standard and visualization simulators, and the run driver
//! - [`stats`] - Hit rate, fault rate and hit/fault ratio
//! - [`input`] - Parsing and validating user input
//! - [`render`] - Plain-text tables and explanations
//!
//! # Quick Start
//! ```
//! use pagesim::{simulate_input, Algorithm};
//!
//! let report = simulate_input("7 0 1 2 0 3 0 4 2 3 0 3 2", "3", Algorithm::Lru).unwrap();
//! assert_eq!(report.result.hits, 4);
//! assert_eq!(report.result.faults, 9);
//! println!("{}", report.statistics);
//! ```

pub mod common;
pub mod frames;
pub mod input;
pub mod render;
pub mod replacer;
pub mod sim;
pub mod stats;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameId, PageId, Result, SimulationConfig};

pub use frames::{FrameSnapshot, FrameStore};
pub use input::{parse_frame_count, parse_reference_string, read_reference_file};
pub use sim::{
    run, run_with_config, simulate_fifo, simulate_input, simulate_lru, visualize_fifo_shift,
    visualize_lru_shift, Access, Algorithm, Report, ShiftStep, SimulationResult, Step,
};
pub use stats::{aggregate, HitFaultRatio, Statistics};
