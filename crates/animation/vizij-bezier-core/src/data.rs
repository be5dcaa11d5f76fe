//! Stored keyframe segment model.
//! Value/ValueKind are defined in value.rs.

use serde::{Deserialize, Serialize};

use crate::error::SegmentError;
use crate::shape::Components;
use crate::source::SegmentSource;
use crate::value::Value;

/// Default handle reach as a fraction of the segment duration. With zero
/// value offsets this gives the standard ease curve (0.42, 0) / (0.58, 1).
pub const DEFAULT_HANDLE_REACH: f32 = 0.42;

/// A keyframe anchor.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Keyframe {
    pub time: f32,
    pub value: Value,
}

impl Keyframe {
    pub fn new(time: f32, value: impl Into<Value>) -> Self {
        Self {
            time,
            value: value.into(),
        }
    }
}

/// Tangent handle stored as offsets from its key.
///
/// `time` has the value's shape so each dimension may reach a different
/// distance in time. The end key's handle normally has negative time offsets.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Handle {
    pub time: Value,
    pub value: Value,
}

impl Handle {
    pub fn new(time: impl Into<Value>, value: impl Into<Value>) -> Self {
        Self {
            time: time.into(),
            value: value.into(),
        }
    }
}

/// One interpolation segment between two keyframes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    pub start: Keyframe,
    pub end: Keyframe,
    #[serde(default, rename = "startHandle")]
    pub start_handle: Option<Handle>,
    #[serde(default, rename = "endHandle")]
    pub end_handle: Option<Handle>,
}

impl Segment {
    pub fn new(start: Keyframe, end: Keyframe) -> Self {
        Self {
            start,
            end,
            start_handle: None,
            end_handle: None,
        }
    }

    pub fn with_handles(mut self, start_handle: Handle, end_handle: Handle) -> Self {
        self.start_handle = Some(start_handle);
        self.end_handle = Some(end_handle);
        self
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.end.time - self.start.time
    }

    /// Apply handle offsets to `key`. Handle times and values follow the same
    /// rule: a scalar offset is shared by every dimension, a per-dimension
    /// offset is applied component-wise, and a missing component is a zero
    /// offset.
    fn resolve(&self, key: &Keyframe, handle: Option<&Handle>, reach: f32) -> (Value, Value) {
        let template = &self.start.value;
        match handle {
            Some(h) => (
                apply_offset(template, &h.time, |_| key.time),
                apply_offset(template, &h.value, |d| component_or_zero(&key.value, d)),
            ),
            None => {
                let times = vec![key.time + reach; template.dimension_count()];
                (template.build_from_components(&times), key.value.clone())
            }
        }
    }
}

#[inline]
fn component_or_zero(v: &Value, d: usize) -> f32 {
    v.as_slice().get(d).copied().unwrap_or(0.0)
}

/// `base(d) + offset[d]` for every dimension of `template`, in the template's
/// kind. Components the offset lacks are no offset; extra ones are ignored
/// here and reported by `stored_shape_check`.
fn apply_offset(template: &Value, offset: &Value, base: impl Fn(usize) -> f32) -> Value {
    let comps: Vec<f32> = (0..template.dimension_count())
        .map(|d| match offset {
            Value::Float(o) => base(d) + *o,
            per_dim => base(d) + component_or_zero(per_dim, d),
        })
        .collect();
    template.build_from_components(&comps)
}

impl SegmentSource for Segment {
    type Value = Value;

    fn start_key(&self) -> (f32, Value) {
        (self.start.time, self.start.value.clone())
    }

    fn end_key(&self) -> (f32, Value) {
        (self.end.time, self.end.value.clone())
    }

    fn start_handle_absolute(&self) -> (Value, Value) {
        let reach = DEFAULT_HANDLE_REACH * self.duration();
        self.resolve(&self.start, self.start_handle.as_ref(), reach)
    }

    fn end_handle_absolute(&self) -> (Value, Value) {
        let reach = -DEFAULT_HANDLE_REACH * self.duration();
        self.resolve(&self.end, self.end_handle.as_ref(), reach)
    }

    /// Stored per-dimension offsets must match the start value's dimension
    /// count. Scalar offsets are shared and always fit.
    fn stored_shape_check(&self) -> Result<(), SegmentError> {
        let expected = self.start.value.dimension_count();
        let stored = [
            ("start handle time", self.start_handle.as_ref().map(|h| &h.time)),
            ("start handle value", self.start_handle.as_ref().map(|h| &h.value)),
            ("end handle time", self.end_handle.as_ref().map(|h| &h.time)),
            ("end handle value", self.end_handle.as_ref().map(|h| &h.value)),
        ];
        for (what, offset) in stored {
            match offset {
                None | Some(Value::Float(_)) => {}
                Some(v) if v.dimension_count() == expected => {}
                Some(v) => {
                    return Err(SegmentError::ShapeMismatch {
                        what,
                        expected,
                        actual: v.dimension_count(),
                    })
                }
            }
        }
        Ok(())
    }
}
