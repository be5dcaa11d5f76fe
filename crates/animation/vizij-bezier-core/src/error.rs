//! Errors reported by strict validation and segment loading.
//!
//! Sampling itself never fails; these only surface from
//! [`crate::validate::validate_segment`], checked sampling under
//! [`crate::config::Validation::Strict`], and JSON parsing.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SegmentError {
    #[error("segment end time {end} must be after start time {start}")]
    NonIncreasingTime { start: f32, end: f32 },

    #[error("non-finite component in {what}")]
    NonFinite { what: &'static str },

    #[error("{what} has {actual} dimensions, start value has {expected}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("handle time outside segment range in dimension {dimension}; time curve may not be invertible")]
    NonMonotonic { dimension: usize },

    #[error("segment json parse error: {0}")]
    Parse(String),
}
