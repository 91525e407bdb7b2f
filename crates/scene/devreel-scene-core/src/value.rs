//! Property value kinds carried by scene nodes.

use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValueKind {
    Scalar,
    Vec2,
    Color,
    Bool,
    Text,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Value {
    Scalar(f32),
    Vec2([f32; 2]),
    /// Straight (non-premultiplied) RGBA in [0, 1]
    Color([f32; 4]),
    /// Step-only boolean value (no blending)
    Bool(bool),
    /// Text; interpolates by prefix when the target extends the source
    Text(String),
}

impl Value {
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Scalar(_) => ValueKind::Scalar,
            Value::Vec2(_) => ValueKind::Vec2,
            Value::Color(_) => ValueKind::Color,
            Value::Bool(_) => ValueKind::Bool,
            Value::Text(_) => ValueKind::Text,
        }
    }

    pub fn as_scalar(&self) -> Option<f32> {
        match self {
            Value::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vec2(&self) -> Option<[f32; 2]> {
        match self {
            Value::Vec2(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` into a [`Value::Color`].
    /// Opaque color from a packed `0xRRGGBB` literal.
    pub fn rgb(packed: u32) -> Value {
        Value::rgba((packed << 8) | 0xff)
    }

    /// Color from a packed `0xRRGGBBAA` literal.
    pub fn rgba(packed: u32) -> Value {
        let bytes = packed.to_be_bytes();
        Value::Color(bytes.map(|c| c as f32 / 255.0))
    }

    pub fn hex(code: &str) -> SceneResult<Value> {
        let digits = code.strip_prefix('#').unwrap_or(code);
        let bad = || SceneError::invalid("color", code, "expected #rgb, #rrggbb or #rrggbbaa");
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| bad());
        let rgba: [u8; 4] = match digits.len() {
            3 => {
                let mut out = [255u8; 4];
                for (i, c) in digits.char_indices() {
                    let v = channel(&digits[i..i + c.len_utf8()])?;
                    out[i] = v * 17;
                }
                out
            }
            6 | 8 => {
                let mut out = [255u8; 4];
                for (slot, i) in (0..digits.len()).step_by(2).enumerate() {
                    out[slot] = channel(digits.get(i..i + 2).ok_or_else(bad)?)?;
                }
                out
            }
            _ => return Err(bad()),
        };
        Ok(Value::Color(rgba.map(|c| c as f32 / 255.0)))
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Scalar(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Scalar(v as f32)
    }
}

impl From<[f32; 2]> for Value {
    fn from(v: [f32; 2]) -> Self {
        Value::Vec2(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}
