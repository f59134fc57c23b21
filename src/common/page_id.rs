//! Page identifier type.

use std::fmt;
use std::str::FromStr;

/// Identifies a page in a reference string.
///
/// Any integer is a legal page, including negatives and repeats, so there is
/// no sentinel value. Absence is always expressed as `Option<PageId>`.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page = PageId::new(-7);
/// assert_eq!(page.0, -7);
/// assert_eq!(page.to_string(), "-7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub i64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageId(id)
    }
}

impl From<i64> for PageId {
    fn from(id: i64) -> Self {
        PageId(id)
    }
}

impl FromStr for PageId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<i64>().map(PageId)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid.0, 42);
        assert_eq!(PageId::from(42), pid);
    }

    #[test]
    fn test_page_id_parse() {
        assert_eq!("17".parse::<PageId>().unwrap(), PageId(17));
        assert_eq!("-3".parse::<PageId>().unwrap(), PageId(-3));
        assert!("x".parse::<PageId>().is_err());
        assert!("1.5".parse::<PageId>().is_err());
    }

    #[test]
    fn test_page_id_ordering() {
        assert!(PageId::new(1) < PageId::new(2));
        assert!(PageId::new(-5) < PageId::new(3));
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new(42)), "42");
        assert_eq!(format!("{}", PageId::new(-1)), "-1");
    }
}
