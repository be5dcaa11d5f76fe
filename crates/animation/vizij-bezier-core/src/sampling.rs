//! Segment sampling across value dimensions.
//!
//! Model:
//! - Each dimension d of a segment is its own 2D cubic Bezier:
//!   (t0, v0[d]) -> (h1.t[d], h1.v[d]) -> (h2.t[d], h2.v[d]) -> (t3, v3[d]).
//! - Key times are shared; handle times are per dimension.
//! - Dimensions are solved in index order and never read each other's results.
//! - The result is rebuilt with the kind of the start key value.
//!
//! Times passed here are in the segment's own coordinates (the same units as
//! the key times). See `Interpolator` for normalized input.

use crate::bezier::{evaluate_y_at_x_points, slope_at_x, ControlPoint};
use crate::shape::Components;
use crate::source::SegmentSource;

/// Resolve the start value (used as the rebuild template) and one control
/// point quadruple per dimension.
fn gather<S: SegmentSource>(segment: &S) -> (S::Value, Vec<[ControlPoint; 4]>) {
    let (t0, v0) = segment.start_key();
    let (t3, v3) = segment.end_key();
    let (h1_t, h1_v) = segment.start_handle_absolute();
    let (h2_t, h2_v) = segment.end_handle_absolute();

    let dims = v0.dimension_count();
    let mut sets = Vec::with_capacity(dims);
    for d in 0..dims {
        sets.push([
            ControlPoint::new(t0, v0.component_at(d)),
            ControlPoint::new(h1_t.component_at(d), h1_v.component_at(d)),
            ControlPoint::new(h2_t.component_at(d), h2_v.component_at(d)),
            ControlPoint::new(t3, v3.component_at(d)),
        ]);
    }
    (v0, sets)
}

/// Per-dimension control point quadruples for a segment.
///
/// A scalar segment yields exactly one quadruple. Pure marshaling: nothing is
/// interpolated here.
pub fn control_point_sets<S: SegmentSource>(segment: &S) -> Vec<[ControlPoint; 4]> {
    gather(segment).1
}

/// Evaluate every dimension's curve at time `t`, in dimension order.
pub fn sample_components(sets: &[[ControlPoint; 4]], t: f32) -> Vec<f32> {
    sets.iter()
        .map(|points| evaluate_y_at_x_points(t, points))
        .collect()
}

/// Sample a segment at time `t` (segment-local coordinates).
pub fn sample_segment<S: SegmentSource>(segment: &S, t: f32) -> S::Value {
    let (template, sets) = gather(segment);
    template.build_from_components(&sample_components(&sets, t))
}

/// dValue/dTime of every dimension at time `t`, in the value's shape.
pub fn sample_segment_slope<S: SegmentSource>(segment: &S, t: f32) -> S::Value {
    let (template, sets) = gather(segment);
    let slopes: Vec<f32> = sets.iter().map(|points| slope_at_x(t, points)).collect();
    template.build_from_components(&slopes)
}
