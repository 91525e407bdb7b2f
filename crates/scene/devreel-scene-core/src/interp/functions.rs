//! Interpolation helpers:
//! - lerp_f32 / lerp_vec2 / lerp_vec4 (component-wise)
//! - text_value (prefix growth or shrink, otherwise hold)
//! - interpolate (dispatch by kind; mismatched kinds are an error)
//! - bezier_ease_t (cubic-bezier timing)

use crate::value::{Value, ValueKind};

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec2(a: [f32; 2], b: [f32; 2], t: f32) -> [f32; 2] {
    [lerp_f32(a[0], b[0], t), lerp_f32(a[1], b[1], t)]
}

#[inline]
pub fn lerp_vec4(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
        lerp_f32(a[3], b[3], t),
    ]
}

/// Text interpolation.
///
/// When one string is a prefix of the other, characters are added (or
/// removed) proportionally to `t`. Unrelated strings hold the source until
/// `t` reaches 1.
pub fn text_value(a: &str, b: &str, t: f32) -> String {
    if t >= 1.0 {
        return b.to_string();
    }
    let t = t.max(0.0);
    let (short, long, growing) = if b.starts_with(a) {
        (a, b, true)
    } else if a.starts_with(b) {
        (b, a, false)
    } else {
        return a.to_string();
    };
    let base = short.chars().count();
    let extra = long.chars().count() - base;
    let frac = if growing { t } else { 1.0 - t };
    let shown = ((extra as f32) * frac).floor() as usize;
    long.chars().take(base + shown.min(extra)).collect()
}

/// Blend two values of the same kind. Bool holds the source until `t == 1`.
/// Returns `Err((expected, actual))` when the kinds differ.
pub fn interpolate(a: &Value, b: &Value, t: f32) -> Result<Value, (ValueKind, ValueKind)> {
    let out = match (a, b) {
        (Value::Scalar(va), Value::Scalar(vb)) => Value::Scalar(lerp_f32(*va, *vb, t)),
        (Value::Vec2(va), Value::Vec2(vb)) => Value::Vec2(lerp_vec2(*va, *vb, t)),
        (Value::Color(ca), Value::Color(cb)) => Value::Color(lerp_vec4(*ca, *cb, t)),
        (Value::Bool(va), Value::Bool(vb)) => Value::Bool(if t >= 1.0 { *vb } else { *va }),
        (Value::Text(sa), Value::Text(sb)) => Value::Text(text_value(sa, sb, t)),
        _ => return Err((a.kind(), b.kind())),
    };
    Ok(out)
}

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1],
/// compute the eased y by inverting the x bezier via binary search.
#[inline]
pub fn bezier_ease_t(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    // Bezier(0,0,1,1) is exactly linear
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // Monotonic X in [0,1] assumed for x1/x2 in [0,1]
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_grows_by_prefix() {
        assert_eq!(text_value("", "abcd", 0.0), "");
        assert_eq!(text_value("", "abcd", 0.5), "ab");
        assert_eq!(text_value("ab", "abcd", 0.5), "abc");
        assert_eq!(text_value("", "abcd", 1.0), "abcd");
    }

    #[test]
    fn text_shrinks_and_holds() {
        assert_eq!(text_value("abcd", "", 0.5), "ab");
        assert_eq!(text_value("abcd", "", 1.0), "");
        assert_eq!(text_value("foo", "bar", 0.9), "foo");
        assert_eq!(text_value("foo", "bar", 1.0), "bar");
    }

    #[test]
    fn interpolate_rejects_kind_mismatch() {
        let err = interpolate(&Value::Scalar(0.0), &Value::Text("x".into()), 0.5).unwrap_err();
        assert_eq!(err, (ValueKind::Scalar, ValueKind::Text));
    }

    #[test]
    fn interpolate_color_componentwise() {
        let v = interpolate(&Value::Color([0.0; 4]), &Value::Color([1.0; 4]), 0.25).unwrap();
        assert_eq!(v, Value::Color([0.25; 4]));
    }
}
