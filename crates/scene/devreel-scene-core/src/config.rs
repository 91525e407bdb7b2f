//! Project configuration: output frame, background and playback limits.

use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// Output configuration shared by every scene of a project.
/// Keep this minimal; the renderer owns everything visual beyond this.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Output frame size in pixels.
    pub width: u32,
    pub height: u32,
    /// Frames per second of the rendered output.
    pub fps: u32,
    /// Background painted behind every scene and transition.
    pub background: String,
    /// Upper bound on a single scene's main script, in seconds.
    pub max_scene_seconds: f64,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            fps: 60,
            background: "#0b1020".to_string(),
            max_scene_seconds: 600.0,
        }
    }
}

impl ProjectConfig {
    /// Duration of one frame in seconds.
    #[inline]
    pub fn frame_dt(&self) -> f64 {
        1.0 / self.fps as f64
    }

    /// Reject configurations the scheduler cannot run.
    pub fn validate(&self) -> SceneResult<()> {
        if self.fps == 0 {
            return Err(SceneError::invalid("fps", self.fps, "must be positive"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::invalid(
                "size",
                format!("{}x{}", self.width, self.height),
                "frame size must be non-empty",
            ));
        }
        if !(self.max_scene_seconds.is_finite() && self.max_scene_seconds > 0.0) {
            return Err(SceneError::invalid(
                "max_scene_seconds",
                self.max_scene_seconds,
                "must be a positive finite number",
            ));
        }
        crate::value::Value::hex(&self.background)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let cfg = ProjectConfig::default();
        cfg.validate().unwrap();
        assert!((cfg.frame_dt() - 1.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: ProjectConfig = serde_json::from_str(r#"{"fps": 30}"#).unwrap();
        assert_eq!(cfg.fps, 30);
        assert_eq!(cfg.width, 1920);
        assert_eq!(cfg.background, "#0b1020");
    }

    #[test]
    fn zero_fps_rejected() {
        let cfg = ProjectConfig {
            fps: 0,
            ..ProjectConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(SceneError::InvalidParameter { .. })
        ));
    }
}
