//! Caller-facing sampler for a single keyframe segment.
//!
//! Wraps the stateless functions in `sampling` with the time-domain and
//! validation policy from [`Config`]. Holds no per-segment state, so one
//! interpolator can serve any number of segments from any thread.

use crate::bezier::ControlPoint;
use crate::config::{Config, TimeDomain, Validation};
use crate::error::SegmentError;
use crate::sampling::{control_point_sets, sample_segment, sample_segment_slope};
use crate::shape::Components;
use crate::source::SegmentSource;
use crate::validate::validate_segment;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Interpolator {
    pub config: Config,
}

impl Interpolator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Map `t` from the configured domain into segment-local time.
    fn local_time<S: SegmentSource>(&self, segment: &S, t: f32) -> f32 {
        match self.config.time_domain {
            TimeDomain::Local => t,
            TimeDomain::Normalized => {
                let (t0, _) = segment.start_key();
                let (t3, _) = segment.end_key();
                // Exact at both ends so anchors still match.
                t0 * (1.0 - t) + t3 * t
            }
        }
    }

    /// Value of `segment` at `t`. Never fails, never validates.
    pub fn value_at_time<S: SegmentSource>(&self, segment: &S, t: f32) -> S::Value {
        let local = self.local_time(segment, t);
        if self.config.exact_anchors {
            let (t0, v0) = segment.start_key();
            if local == t0 {
                return v0;
            }
            let (t3, v3) = segment.end_key();
            if local == t3 {
                // Same kind as every other sample: the start key's.
                let comps: Vec<f32> = (0..v0.dimension_count())
                    .map(|d| v3.component_at(d))
                    .collect();
                return v0.build_from_components(&comps);
            }
        }
        sample_segment(segment, local)
    }

    /// Value at `u` in [0,1] across the segment, regardless of `time_domain`.
    pub fn value_at_normalized<S: SegmentSource>(&self, segment: &S, u: f32) -> S::Value {
        let normalized = Interpolator::new(Config {
            time_domain: TimeDomain::Normalized,
            ..self.config.clone()
        });
        normalized.value_at_time(segment, u)
    }

    /// [`Self::value_at_time`] preceded by validation when
    /// `validation == Strict`. Under `Permissive` this always succeeds.
    pub fn checked_value_at_time<S: SegmentSource>(
        &self,
        segment: &S,
        t: f32,
    ) -> Result<S::Value, SegmentError> {
        self.validate(segment)?;
        Ok(self.value_at_time(segment, t))
    }

    /// Run `validate_segment` if the policy is strict.
    pub fn validate<S: SegmentSource>(&self, segment: &S) -> Result<(), SegmentError> {
        match self.config.validation {
            Validation::Permissive => Ok(()),
            Validation::Strict => validate_segment(segment),
        }
    }

    /// dValue/dTime at `t`, per dimension, in segment-local units. In the
    /// normalized domain the result is still per local time unit.
    pub fn slope_at_time<S: SegmentSource>(&self, segment: &S, t: f32) -> S::Value {
        sample_segment_slope(segment, self.local_time(segment, t))
    }

    pub fn control_points<S: SegmentSource>(&self, segment: &S) -> Vec<[ControlPoint; 4]> {
        control_point_sets(segment)
    }
}
