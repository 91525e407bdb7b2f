//! Easing curves and per-kind interpolation.
//!
//! Tweens map elapsed time to a normalized `t` in [0, 1], shape it with an
//! [`Easing`], then blend source and target values with
//! [`functions::interpolate`].

pub mod functions;

use serde::{Deserialize, Serialize};

use self::functions::bezier_ease_t;

/// Timing curve applied to a tween's normalized progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseInCubic,
    EaseOutCubic,
    /// Default for property tweens.
    #[default]
    EaseInOutCubic,
    EaseInOutSine,
    /// CSS-style control points (x1, y1, x2, y2).
    CubicBezier([f32; 4]),
}

impl Easing {
    /// Shape a progress value. Input is clamped to [0, 1]; endpoints are exact.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseInOutSine => -((std::f32::consts::PI * t).cos() - 1.0) / 2.0,
            Easing::CubicBezier([x1, y1, x2, y2]) => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else {
                    bezier_ease_t(t, *x1, *y1, *x2, *y2)
                }
            }
        }
    }
}
