//! Value shapes and per-component access.
//!
//! Every dimension of a keyframed value is eased independently, so the
//! sampler only needs three things from a value type: how many dimensions it
//! has, the scalar at a dimension, and a way to rebuild a value of the same
//! kind from per-dimension results.

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Scalar (one dimension) or an N-component vector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "id", content = "len")]
pub enum ValueShape {
    Scalar,
    Vector(usize),
}

impl ValueShape {
    #[inline]
    pub fn dimension_count(self) -> usize {
        match self {
            ValueShape::Scalar => 1,
            ValueShape::Vector(n) => n,
        }
    }
}

/// Component view over a keyframed value type.
pub trait Components: Sized {
    fn shape(&self) -> ValueShape;

    /// Scalar at `index`. Out-of-range reads return 0.0.
    fn component_at(&self, index: usize) -> f32;

    /// Build a value of the same kind as `self` from per-dimension scalars.
    fn build_from_components(&self, components: &[f32]) -> Self;

    #[inline]
    fn dimension_count(&self) -> usize {
        self.shape().dimension_count()
    }
}

impl Components for f32 {
    #[inline]
    fn shape(&self) -> ValueShape {
        ValueShape::Scalar
    }

    #[inline]
    fn component_at(&self, index: usize) -> f32 {
        if index == 0 {
            *self
        } else {
            0.0
        }
    }

    #[inline]
    fn build_from_components(&self, components: &[f32]) -> Self {
        components.first().copied().unwrap_or(0.0)
    }
}

impl<const N: usize> Components for [f32; N] {
    #[inline]
    fn shape(&self) -> ValueShape {
        ValueShape::Vector(N)
    }

    #[inline]
    fn component_at(&self, index: usize) -> f32 {
        self.get(index).copied().unwrap_or(0.0)
    }

    #[inline]
    fn build_from_components(&self, components: &[f32]) -> Self {
        fill(components)
    }
}

#[inline]
fn fill<const N: usize>(components: &[f32]) -> [f32; N] {
    let mut out = [0.0; N];
    for (dst, src) in out.iter_mut().zip(components) {
        *dst = *src;
    }
    out
}

impl Components for Value {
    fn shape(&self) -> ValueShape {
        match self {
            Value::Float(_) => ValueShape::Scalar,
            other => ValueShape::Vector(other.as_slice().len()),
        }
    }

    fn component_at(&self, index: usize) -> f32 {
        match self.as_slice().get(index) {
            Some(v) => *v,
            None => {
                log::warn!(
                    "component {index} missing on {:?} value; reading 0.0",
                    self.kind()
                );
                0.0
            }
        }
    }

    fn build_from_components(&self, components: &[f32]) -> Self {
        match self {
            Value::Float(_) => Value::Float(components.first().copied().unwrap_or(0.0)),
            Value::Vec2(_) => Value::Vec2(fill(components)),
            Value::Vec3(_) => Value::Vec3(fill(components)),
            Value::Vec4(_) => Value::Vec4(fill(components)),
            Value::Quat(_) => Value::Quat(fill(components)),
            Value::ColorRgba(_) => Value::ColorRgba(fill(components)),
            Value::Vector(_) => Value::Vector(components.to_vec()),
        }
    }
}
