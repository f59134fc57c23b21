//! Simulation statistics.
//!
//! [`aggregate`] turns the hit and fault counts of a run into the figures
//! shown to the user: hit rate, fault rate and the hit/fault ratio. All
//! values are percentages or plain ratios rounded to
//! [`STAT_PRECISION`](crate::common::config::STAT_PRECISION) decimals.

use std::fmt;

use crate::common::config::STAT_PRECISION;

/// Hits divided by faults, when that is defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitFaultRatio {
    /// A rounded numeric value.
    ///
    /// When there were no faults but at least one reference, this holds the
    /// raw hit count rather than a quotient.
    Value(f64),

    /// No references were made.
    NotApplicable,
}

impl HitFaultRatio {
    /// Numeric value, or `None` if not applicable.
    pub fn value(&self) -> Option<f64> {
        match self {
            HitFaultRatio::Value(v) => Some(*v),
            HitFaultRatio::NotApplicable => None,
        }
    }
}

impl fmt::Display for HitFaultRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HitFaultRatio::Value(v) => write!(f, "{:.*}", STAT_PRECISION as usize, v),
            HitFaultRatio::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// Derived statistics for one run.
///
/// # Example
/// ```
/// use pagesim::aggregate;
///
/// let stats = aggregate(3, 9, 12);
/// assert_eq!(stats.hit_rate, 25.0);
/// assert_eq!(stats.fault_rate, 75.0);
/// assert_eq!(stats.hit_fault_ratio.value(), Some(0.33));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub hits: usize,
    pub faults: usize,
    pub total: usize,

    /// Percentage of references that hit (0.0 to 100.0).
    pub hit_rate: f64,

    /// Percentage of references that faulted (0.0 to 100.0).
    pub fault_rate: f64,

    pub hit_fault_ratio: HitFaultRatio,
}

/// Compute rates and the hit/fault ratio from raw counts.
///
/// Rates are 0 when `total` is 0. The ratio is `hits / faults` when there
/// were faults, the hit count itself when there were references but no
/// faults, and [`HitFaultRatio::NotApplicable`] otherwise.
pub fn aggregate(hits: usize, faults: usize, total: usize) -> Statistics {
    let percent = |count: usize| {
        if total == 0 {
            0.0
        } else {
            round(count as f64 / total as f64 * 100.0)
        }
    };

    let hit_fault_ratio = if faults > 0 {
        HitFaultRatio::Value(round(hits as f64 / faults as f64))
    } else if total > 0 {
        HitFaultRatio::Value(round(hits as f64))
    } else {
        HitFaultRatio::NotApplicable
    };

    Statistics {
        hits,
        faults,
        total,
        hit_rate: percent(hits),
        fault_rate: percent(faults),
        hit_fault_ratio,
    }
}

/// Round to `STAT_PRECISION` decimal places.
fn round(value: f64) -> f64 {
    let scale = 10f64.powi(STAT_PRECISION);
    (value * scale).round() / scale
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, total: {}, hit_rate: {:.2}%, fault_rate: {:.2}%, ratio: {} }}",
            self.hits,
            self.faults,
            self.total,
            self.hit_rate,
            self.fault_rate,
            self.hit_fault_ratio
        )
    }
}
