//! Quality checks over converted stroke data
//!
//! Validation looks for records a trainer app could not draw correctly.
//! Statistics summarize a dataset for a quick sanity read.

pub mod statistics;
pub mod validation;

pub use statistics::{stroke_histogram, DatasetStatistics};
pub use validation::{validate, ValidationReport};

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Category {
    /// Expected character is absent from the dataset
    Missing,
    EmptyCharacter,
    EmptyStroke,
    OutOfRange,
    Timing,
    /// Map key does not match the record's codepoint
    Key,
}

/// Position of an issue within a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub stroke: usize,
    pub point: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaIssue {
    pub severity: Severity,
    pub category: Category,
    pub key: String,
    pub message: String,
    pub location: Option<Location>,
}

impl fmt::Display for QaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{mark}: {} {}", self.key, self.message)?;
        if let Some(location) = self.location {
            write!(f, " (stroke {}", location.stroke)?;
            if let Some(point) = location.point {
                write!(f, ", point {point}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}
