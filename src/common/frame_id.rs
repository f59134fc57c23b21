//! Frame identifier type.

use std::fmt;

/// Identifies a slot in a frame store.
///
/// Zero-based so it indexes the slot vector directly. The index carries no
/// meaning beyond display, where frames are labelled from 1.
///
/// # Example
/// ```
/// use pagesim::FrameId;
///
/// let frame_id = FrameId::new(0);
/// assert_eq!(frame_id.to_string(), "Frame 1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }

    /// One-based frame number used in tables.
    #[inline]
    pub fn number(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame {}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_id_new() {
        let fid = FrameId::new(10);
        assert_eq!(fid.0, 10);
        assert_eq!(fid.number(), 11);
    }

    #[test]
    fn test_frame_id_equality() {
        assert_eq!(FrameId::new(5), FrameId::new(5));
        assert_ne!(FrameId::new(5), FrameId::new(6));
    }

    #[test]
    fn test_frame_id_display() {
        assert_eq!(format!("{}", FrameId::new(0)), "Frame 1");
        assert_eq!(format!("{}", FrameId::new(41)), "Frame 42");
    }
}
