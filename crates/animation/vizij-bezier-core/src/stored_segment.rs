use serde::Deserialize;

use crate::data::{Handle, Keyframe, Segment};
use crate::error::SegmentError;
use crate::validate::validate_segment;
use crate::value::Value;

/// Public API: parse stored segment JSON into the canonical `Segment` (data.rs).
///
/// Notes:
/// - Times are kept in the file's units; no normalization happens here.
/// - Handles are offsets from their key. Missing handles fall back to the
///   default ease reach at sampling time.
/// - Values may be numbers, numeric arrays, `{x,y}`, `{x,y,z}`, `{r,g,b}` or
///   `{r,g,b,a}`. A numeric handle time or value is shared by every dimension.
/// - `{r,g,b}` means opaque on a key, but no alpha offset on a handle.
/// - No validation is applied; see [`parse_segment_json_checked`].
pub fn parse_segment_json(s: &str) -> Result<Segment, SegmentError> {
    let raw: StoredSegment =
        serde_json::from_str(s).map_err(|e| SegmentError::Parse(e.to_string()))?;

    let segment = Segment {
        start: to_keyframe(raw.start),
        end: to_keyframe(raw.end),
        start_handle: raw.start_handle.map(to_handle),
        end_handle: raw.end_handle.map(to_handle),
    };
    log::debug!(
        "parsed segment {}..{} ({:?})",
        segment.start.time,
        segment.end.time,
        segment.start.value.kind()
    );
    Ok(segment)
}

/// [`parse_segment_json`] followed by [`validate_segment`].
pub fn parse_segment_json_checked(s: &str) -> Result<Segment, SegmentError> {
    let segment = parse_segment_json(s)?;
    validate_segment(&segment)?;
    Ok(segment)
}

fn to_keyframe(k: RawKey) -> Keyframe {
    Keyframe {
        time: k.time as f32,
        value: to_core_value(k.value, 1.0),
    }
}

fn to_handle(h: RawHandle) -> Handle {
    Handle {
        time: to_core_value(h.time, 0.0),
        value: to_core_value(h.value, 0.0),
    }
}

/// `missing_alpha` fills the alpha of an `{r,g,b}` value.
fn to_core_value(v: RawValue, missing_alpha: f32) -> Value {
    match v {
        RawValue::Number(n) => Value::Float(n as f32),
        RawValue::Array(items) => {
            let comps: Vec<f32> = items.into_iter().map(|x| x as f32).collect();
            match comps.len() {
                2 => Value::Vec2([comps[0], comps[1]]),
                3 => Value::Vec3([comps[0], comps[1], comps[2]]),
                4 => Value::Vec4([comps[0], comps[1], comps[2], comps[3]]),
                _ => Value::Vector(comps),
            }
        }
        RawValue::Vector3 { x, y, z } => Value::Vec3([x as f32, y as f32, z as f32]),
        RawValue::Vector2 { x, y } => Value::Vec2([x as f32, y as f32]),
        RawValue::Rgba { r, g, b, a } => {
            Value::ColorRgba([r as f32, g as f32, b as f32, a as f32])
        }
        RawValue::Rgb { r, g, b } => {
            Value::ColorRgba([r as f32, g as f32, b as f32, missing_alpha])
        }
    }
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct StoredSegment {
    start: RawKey,
    end: RawKey,
    #[serde(default, rename = "startHandle")]
    start_handle: Option<RawHandle>,
    #[serde(default, rename = "endHandle")]
    end_handle: Option<RawHandle>,
}

#[derive(Debug, Deserialize)]
struct RawKey {
    time: f64,
    value: RawValue,
}

#[derive(Debug, Deserialize)]
struct RawHandle {
    time: RawValue,
    value: RawValue,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Array(Vec<f64>),
    // Put more specific shapes BEFORE less specific to avoid untagged matching pitfalls.
    Vector3 { x: f64, y: f64, z: f64 },
    Vector2 { x: f64, y: f64 },
    Rgba { r: f64, g: f64, b: f64, a: f64 },
    Rgb { r: f64, g: f64, b: f64 },
}
