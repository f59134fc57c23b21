//! Common types shared across the simulator.
//!
//! This module contains the fundamental primitives used throughout the codebase:
//! - Configuration constants and [`SimulationConfig`]
//! - Error types
//! - Identifiers (PageId, FrameId)

pub mod config;
pub mod error;
mod frame_id;
mod page_id;

pub use config::SimulationConfig;
pub use error::{Error, Result};
pub use frame_id::FrameId;
pub use page_id::PageId;
