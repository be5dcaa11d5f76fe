//! Keyframe segment provider contract.

use crate::error::SegmentError;
use crate::shape::Components;

/// Supplies the four resolved control points of one keyframe segment.
///
/// Handle accessors return absolute positions (offsets already applied).
/// Handle times have the same shape as the value: a vector segment carries
/// one handle time per dimension, while the key times are shared.
pub trait SegmentSource {
    type Value: Components;

    /// (time, value) of the key the segment starts at.
    fn start_key(&self) -> (f32, Self::Value);

    /// (time, value) of the key the segment ends at.
    fn end_key(&self) -> (f32, Self::Value);

    /// (times, values) of the outgoing handle of the start key.
    fn start_handle_absolute(&self) -> (Self::Value, Self::Value);

    /// (times, values) of the incoming handle of the end key.
    fn end_handle_absolute(&self) -> (Self::Value, Self::Value);

    /// Shape problems in how the handles are stored that the resolved
    /// positions no longer show. Run by `validate_segment`.
    fn stored_shape_check(&self) -> Result<(), SegmentError> {
        Ok(())
    }
}

impl<S: SegmentSource + ?Sized> SegmentSource for &S {
    type Value = S::Value;

    fn start_key(&self) -> (f32, Self::Value) {
        (**self).start_key()
    }

    fn end_key(&self) -> (f32, Self::Value) {
        (**self).end_key()
    }

    fn start_handle_absolute(&self) -> (Self::Value, Self::Value) {
        (**self).start_handle_absolute()
    }

    fn end_handle_absolute(&self) -> (Self::Value, Self::Value) {
        (**self).end_handle_absolute()
    }

    fn stored_shape_check(&self) -> Result<(), SegmentError> {
        (**self).stored_shape_check()
    }
}
