//! Input parsing and validation.
//!
//! Everything a caller types in passes through here before a simulator
//! runs, so a rejected input never produces a partial result.

use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

use log::{debug, warn};

use crate::common::config::validate_frame_count;
use crate::common::{Error, PageId, Result};

/// Parse a whitespace-separated reference string.
///
/// Any run of whitespace (spaces, tabs, newlines) separates tokens. Each
/// token must be a signed integer.
///
/// # Errors
/// - `Error::InvalidInput(None)` if there are no tokens
/// - `Error::InvalidInput(Some(token))` for the first token that is not an integer
///
/// # Example
/// ```
/// use pagesim::{parse_reference_string, PageId};
///
/// let pages = parse_reference_string(" 7 0\t1 \n 2 ").unwrap();
/// assert_eq!(pages, vec![PageId(7), PageId(0), PageId(1), PageId(2)]);
///
/// assert!(parse_reference_string("1 two 3").is_err());
/// assert!(parse_reference_string("   ").is_err());
/// ```
pub fn parse_reference_string(input: &str) -> Result<Vec<PageId>> {
    let pages = input
        .split_whitespace()
        .map(|token| {
            token
                .parse::<PageId>()
                .map_err(|_| Error::InvalidInput(Some(token.to_string())))
        })
        .collect::<Result<Vec<_>>>()?;

    if pages.is_empty() {
        return Err(Error::InvalidInput(None));
    }

    debug!("parsed reference string of {} pages", pages.len());
    Ok(pages)
}

/// Parse a frame count.
///
/// # Errors
/// - `Error::InvalidFrameCount` if the input is not an integer, is not
///   positive, or exceeds [`MAX_FRAME_COUNT`](crate::common::config::MAX_FRAME_COUNT)
pub fn parse_frame_count(input: &str) -> Result<NonZeroUsize> {
    let trimmed = input.trim();
    let count = trimmed
        .parse::<usize>()
        .map_err(|_| Error::InvalidFrameCount(trimmed.to_string()))?;
    validate_frame_count(count)
}

/// Read a reference string from a file.
///
/// The whole file is treated as one reference string, so pages may be
/// split across lines.
///
/// # Errors
/// - `Error::Io` if the file cannot be read
/// - Any error from [`parse_reference_string`]
pub fn read_reference_file<P: AsRef<Path>>(path: P) -> Result<Vec<PageId>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    debug!("read {} bytes from {}", contents.len(), path.display());
    parse_reference_string(&contents)
}

/// Log a warning when the frame count exceeds the reference length.
///
/// This is legal input: some slots simply stay empty for the whole run.
pub(crate) fn check_frame_count(pages: &[PageId], frame_count: NonZeroUsize) {
    if frame_count.get() > pages.len() {
        warn!(
            "{} frames for {} references: some frames will never be used",
            frame_count,
            pages.len()
        );
    }
}
