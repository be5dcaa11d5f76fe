//! Keyframed value kinds.
//! All numeric types use f32.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Float,
    Vec2,
    Vec3,
    Vec4,
    Quat,
    ColorRgba,
    Vector,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Value {
    /// Scalar float
    Float(f32),

    /// 2D vector
    Vec2([f32; 2]),

    /// 3D vector
    Vec3([f32; 3]),

    /// 4D vector
    Vec4([f32; 4]),

    /// Quaternion (x, y, z, w). Interpolated per component like any vector;
    /// callers renormalize if they need a unit rotation.
    Quat([f32; 4]),

    /// RGBA color (linear by convention)
    ColorRgba([f32; 4]),

    /// Generic, variable-length numeric vector
    Vector(Vec<f32>),
}

impl Value {
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Float(_) => ValueKind::Float,
            Value::Vec2(_) => ValueKind::Vec2,
            Value::Vec3(_) => ValueKind::Vec3,
            Value::Vec4(_) => ValueKind::Vec4,
            Value::Quat(_) => ValueKind::Quat,
            Value::ColorRgba(_) => ValueKind::ColorRgba,
            Value::Vector(_) => ValueKind::Vector,
        }
    }

    /// Components as a slice (a scalar is a one-element slice).
    pub fn as_slice(&self) -> &[f32] {
        match self {
            Value::Float(v) => std::slice::from_ref(v),
            Value::Vec2(v) => v,
            Value::Vec3(v) => v,
            Value::Vec4(v) | Value::Quat(v) | Value::ColorRgba(v) => v,
            Value::Vector(v) => v,
        }
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<Vec<f32>> for Value {
    fn from(v: Vec<f32>) -> Self {
        Value::Vector(v)
    }
}
