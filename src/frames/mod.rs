//! Frame storage.
//!
//! # Components
//! - [`FrameStore`] - The fixed-width row of slots a simulator mutates
//! - [`FrameSnapshot`] - An owned copy of the slots, recorded after each reference

mod frame_store;

pub use frame_store::{FrameSnapshot, FrameStore};
