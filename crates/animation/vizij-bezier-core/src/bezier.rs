//! Cubic Bezier curve evaluation for keyframe easing.
//!
//! A keyframe curve is a 2D cubic Bezier per value dimension where x is time
//! and y is the value. Sampling at a time first inverts x(alpha) to find the
//! curve parameter, then evaluates y at that parameter:
//! - `evaluate_cubic_at_parameter` (Bernstein basis, one coordinate)
//! - `solve_parameter_for_coordinate` (fixed-cost bisection on x)
//! - `evaluate_y_at_x` (inversion followed by evaluation)
//! - `slope_at_x` (dy/dx at the solved parameter)

use serde::{Deserialize, Serialize};

/// Number of bisection steps used to invert x(alpha).
///
/// The final bracket is 2^-10 wide and the midpoint is returned, so the
/// parameter lands within 2^-11 of a root. Cost is constant per call.
pub const SOLVE_ITERATIONS: usize = 10;

/// One (coordinate, value) control point. `x` is time, `y` is the value.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ControlPoint {
    pub x: f32,
    pub y: f32,
}

impl ControlPoint {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Cubic Bezier basis evaluated at `alpha`:
/// `v0(1-a)^3 + 3 v1 a(1-a)^2 + 3 v2 a^2(1-a) + v3 a^3`.
///
/// Exact at the ends (`alpha == 0` gives `v0`, `alpha == 1` gives `v3`) and
/// extrapolates for parameters outside [0,1].
#[inline]
pub fn evaluate_cubic_at_parameter(alpha: f32, v0: f32, v1: f32, v2: f32, v3: f32) -> f32 {
    let u = 1.0 - alpha;
    v0 * u * u * u
        + v1 * 3.0 * alpha * u * u
        + v2 * 3.0 * u * alpha * alpha
        + v3 * alpha * alpha * alpha
}

/// First derivative of the cubic basis with respect to `alpha`.
#[inline]
pub fn cubic_derivative_at_parameter(alpha: f32, v0: f32, v1: f32, v2: f32, v3: f32) -> f32 {
    let u = 1.0 - alpha;
    3.0 * u * u * (v1 - v0) + 6.0 * u * alpha * (v2 - v1) + 3.0 * alpha * alpha * (v3 - v2)
}

/// Find the parameter whose coordinate x(alpha) equals `target`.
///
/// Orientation comes from the two ends of the curve: when x(1) is not below
/// x(0) the curve is treated as increasing. Each step halves the bracket by
/// moving whichever bound sits on the wrong side of `target`. After
/// [`SOLVE_ITERATIONS`] steps the midpoint of the bracket is returned.
///
/// Targets outside [c0, c3] converge toward the nearer end (about 0 or 1).
/// Non-monotonic coordinates yield a best-effort parameter, not necessarily a
/// root. Never fails.
pub fn solve_parameter_for_coordinate(target: f32, c0: f32, c1: f32, c2: f32, c3: f32) -> f32 {
    let mut lower = 0.0f32;
    let mut upper = 1.0f32;
    let lower_dist = evaluate_cubic_at_parameter(lower, c0, c1, c2, c3) - target;
    let upper_dist = evaluate_cubic_at_parameter(upper, c0, c1, c2, c3) - target;
    // NaN distances compare false here and fall through as "decreasing".
    let increasing = upper_dist - lower_dist >= 0.0;

    for _ in 0..SOLVE_ITERATIONS {
        let mid = 0.5 * (lower + upper);
        let mid_dist = evaluate_cubic_at_parameter(mid, c0, c1, c2, c3) - target;
        if (mid_dist > 0.0) != increasing {
            lower = mid;
        } else {
            upper = mid;
        }
    }
    0.5 * (lower + upper)
}

/// Sample the curve value at coordinate `x`.
pub fn evaluate_y_at_x(
    x: f32,
    p0: ControlPoint,
    p1: ControlPoint,
    p2: ControlPoint,
    p3: ControlPoint,
) -> f32 {
    let alpha = solve_parameter_for_coordinate(x, p0.x, p1.x, p2.x, p3.x);
    evaluate_cubic_at_parameter(alpha, p0.y, p1.y, p2.y, p3.y)
}

/// Array form of [`evaluate_y_at_x`], matching the layout produced by
/// [`crate::sampling::control_point_sets`].
#[inline]
pub fn evaluate_y_at_x_points(x: f32, points: &[ControlPoint; 4]) -> f32 {
    evaluate_y_at_x(x, points[0], points[1], points[2], points[3])
}

/// dy/dx of the curve at coordinate `x`.
///
/// Uses the same solved parameter as [`evaluate_y_at_x`]. Where dx/dalpha is
/// effectively zero (vertical tangent or degenerate segment) returns 0.
pub fn slope_at_x(x: f32, points: &[ControlPoint; 4]) -> f32 {
    let [p0, p1, p2, p3] = *points;
    let alpha = solve_parameter_for_coordinate(x, p0.x, p1.x, p2.x, p3.x);
    let dx = cubic_derivative_at_parameter(alpha, p0.x, p1.x, p2.x, p3.x);
    let dy = cubic_derivative_at_parameter(alpha, p0.y, p1.y, p2.y, p3.y);
    if dx.abs() > 1e-6 {
        dy / dx
    } else {
        0.0
    }
}
