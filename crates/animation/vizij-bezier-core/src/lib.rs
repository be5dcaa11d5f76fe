//! Vizij Bezier Core (engine-agnostic)
//!
//! Keyframe easing with time-parameterized cubic Bezier curves. Each value
//! dimension is a 2D curve over (time, value); sampling inverts the time curve
//! by fixed-cost bisection and evaluates the value curve at the same
//! parameter. Scalars and N-component vectors share one code path through the
//! [`Components`] trait.

pub mod bezier;
pub mod config;
pub mod data;
pub mod error;
pub mod interpolator;
pub mod sampling;
pub mod shape;
pub mod source;
pub mod stored_segment;
pub mod validate;
pub mod value;

// Re-exports for consumers (adapters)
pub use bezier::{
    evaluate_cubic_at_parameter, evaluate_y_at_x, slope_at_x, solve_parameter_for_coordinate,
    ControlPoint, SOLVE_ITERATIONS,
};
pub use config::{Config, TimeDomain, Validation};
pub use data::{Handle, Keyframe, Segment};
pub use error::SegmentError;
pub use interpolator::Interpolator;
pub use sampling::{control_point_sets, sample_segment, sample_segment_slope};
pub use shape::{Components, ValueShape};
pub use source::SegmentSource;
pub use stored_segment::{parse_segment_json, parse_segment_json_checked};
pub use validate::validate_segment;
pub use value::{Value, ValueKind};
