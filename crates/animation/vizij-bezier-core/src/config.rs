//! Sampling configuration for vizij-bezier-core.

use serde::{Deserialize, Serialize};

/// Coordinates of the time passed to [`crate::Interpolator::value_at_time`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeDomain {
    /// Same units as the key times; passed straight to the solver.
    #[default]
    Local,
    /// [0,1] across the segment, mapped to `start + t * (end - start)`.
    Normalized,
}

/// Input checking policy for checked sampling.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Never reject; malformed segments give a best-effort number.
    #[default]
    Permissive,
    /// Run `validate_segment` before sampling and surface `SegmentError`.
    Strict,
}

/// Keep this minimal; new fields must default to current behaviour.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub time_domain: TimeDomain,
    pub validation: Validation,
    /// Return key values unchanged when sampling exactly at a key time.
    /// Without this the bisection lands within 2^-11 (in alpha) of the key.
    pub exact_anchors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_domain: TimeDomain::Local,
            validation: Validation::Permissive,
            exact_anchors: true,
        }
    }
}
