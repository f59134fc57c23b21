//! Page replacement simulation.
//!
//! Each run makes two passes over the same reference string:
//!
//! ```text
//!   reference string ──▶ standard simulator ──▶ Trace (hit/fault + frames)
//!                                 │
//!                     hit/fault flags per step
//!                                 ▼
//!   reference string ──▶ visualization simulator ──▶ Trace' (frames only)
//! ```
//!
//! # Components
//! - [`simulate_fifo`] / [`simulate_lru`] - Standard replacement with fixed slot assignment
//! - [`visualize_fifo_shift`] / [`visualize_lru_shift`] - Shifting window views
//! - [`run`] - The full pipeline, producing a [`Report`]

mod algorithm;
mod driver;
mod standard;
mod step;
mod visualize;

pub use algorithm::Algorithm;
pub use driver::{run, run_with_config, simulate_input, Report};
pub use standard::{simulate_fifo, simulate_lru};
pub use step::{Access, ShiftStep, SimulationResult, Step};
pub use visualize::{visualize_fifo_shift, visualize_lru_shift};
