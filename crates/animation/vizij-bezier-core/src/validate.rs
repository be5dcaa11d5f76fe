//! Opt-in structural checks for keyframe segments.

use crate::error::SegmentError;
use crate::shape::Components;
use crate::source::SegmentSource;

fn all_finite<V: Components>(v: &V) -> bool {
    (0..v.dimension_count()).all(|d| v.component_at(d).is_finite())
}

fn same_dims<V: Components>(
    what: &'static str,
    expected: usize,
    v: &V,
) -> Result<(), SegmentError> {
    let actual = v.dimension_count();
    if actual != expected {
        return Err(SegmentError::ShapeMismatch {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Check that a segment describes an invertible time curve.
///
/// Rules, in order:
/// - key times finite and strictly increasing;
/// - end value and both handles (times and values) share the start value's
///   dimension count, both resolved and as stored;
/// - every component finite;
/// - every handle time inside [start, end].
pub fn validate_segment<S: SegmentSource>(segment: &S) -> Result<(), SegmentError> {
    let (t0, v0) = segment.start_key();
    let (t3, v3) = segment.end_key();
    let (h1_t, h1_v) = segment.start_handle_absolute();
    let (h2_t, h2_v) = segment.end_handle_absolute();

    if !t0.is_finite() || !t3.is_finite() {
        return Err(SegmentError::NonFinite { what: "key time" });
    }
    if t3 <= t0 {
        return Err(SegmentError::NonIncreasingTime { start: t0, end: t3 });
    }

    let dims = v0.dimension_count();
    same_dims("end value", dims, &v3)?;
    same_dims("start handle time", dims, &h1_t)?;
    same_dims("start handle value", dims, &h1_v)?;
    same_dims("end handle time", dims, &h2_t)?;
    same_dims("end handle value", dims, &h2_v)?;
    segment.stored_shape_check()?;

    for (what, v) in [
        ("start value", &v0),
        ("end value", &v3),
        ("start handle time", &h1_t),
        ("start handle value", &h1_v),
        ("end handle time", &h2_t),
        ("end handle value", &h2_v),
    ] {
        if !all_finite(v) {
            return Err(SegmentError::NonFinite { what });
        }
    }

    for d in 0..dims {
        let inside = |t: f32| t >= t0 && t <= t3;
        if !inside(h1_t.component_at(d)) || !inside(h2_t.component_at(d)) {
            return Err(SegmentError::NonMonotonic { dimension: d });
        }
    }
    Ok(())
}
