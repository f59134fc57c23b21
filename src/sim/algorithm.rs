//! Algorithm selector.

use std::fmt;
use std::str::FromStr;

use crate::common::Error;

/// The replacement policies the simulator supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First-In, First-Out.
    Fifo,
    /// Least Recently Used.
    Lru,
}

impl Algorithm {
    /// Full display name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fifo => "FIFO (First-In, First-Out)",
            Algorithm::Lru => "LRU (Least Recently Used)",
        }
    }

    /// Heading for the standard solution inputs.
    pub fn inputs_title(&self) -> &'static str {
        match self {
            Algorithm::Fifo => "Inputs (Standard FIFO)",
            Algorithm::Lru => "Inputs (Standard LRU)",
        }
    }

    /// Heading for the visualization table.
    pub fn visualization_title(&self) -> &'static str {
        match self {
            Algorithm::Fifo => "Solution (Shifting Visualization)",
            Algorithm::Lru => "Solution (LRU Recency Visualization)",
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Algorithm::Fifo),
            "lru" => Ok(Algorithm::Lru),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Fifo => write!(f, "FIFO"),
            Algorithm::Lru => write!(f, "LRU"),
        }
    }
}
