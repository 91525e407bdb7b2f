//! Error types for scene construction and playback.

use serde::{Deserialize, Serialize};

use crate::value::ValueKind;

/// Result alias used throughout the crate.
pub type SceneResult<T> = Result<T, SceneError>;

/// Everything that can go wrong while building or playing a scene.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SceneError {
    /// A step parameter is outside its allowed domain
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },

    /// A script refers to a node name that does not exist in the scene
    #[error("Unknown node: {name}")]
    UnknownNode { name: String },

    /// Two nodes in one scene share a name
    #[error("Duplicate node name: {name}")]
    DuplicateNode { name: String },

    /// A cancel step names a label that no fork in the script declares
    #[error("Unknown fork label: {label}")]
    UnknownLabel { label: String },

    /// Tween target kind differs from the property's current kind
    #[error("Kind mismatch on {node}.{property}: expected {expected:?}, got {actual:?}")]
    KindMismatch {
        node: String,
        property: String,
        expected: ValueKind,
        actual: ValueKind,
    },

    /// The main script did not finish within the configured limit
    #[error("Scene {scene} did not finish within {limit}s")]
    SceneTooLong { scene: String, limit: f64 },

    /// Scene description could not be (de)serialized
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl SceneError {
    /// Shorthand for [`SceneError::InvalidParameter`].
    pub fn invalid(name: impl Into<String>, value: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidParameter { .. } | Self::KindMismatch { .. } => "validation",
            Self::UnknownNode { .. } | Self::DuplicateNode { .. } | Self::UnknownLabel { .. } => {
                "reference"
            }
            Self::SceneTooLong { .. } => "playback",
            Self::Serialization { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_message() {
        let err = SceneError::invalid("duration", -1.0, "must be non-negative");
        assert_eq!(
            err.to_string(),
            "Invalid parameter duration = -1: must be non-negative"
        );
        assert_eq!(err.category(), "validation");
    }

    #[test]
    fn categories() {
        let err = SceneError::UnknownNode {
            name: "cursor".into(),
        };
        assert_eq!(err.category(), "reference");
        let err = SceneError::SceneTooLong {
            scene: "intro".into(),
            limit: 10.0,
        };
        assert_eq!(err.category(), "playback");
    }

    #[test]
    fn json_error_converts() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: SceneError = parse.unwrap_err().into();
        assert!(matches!(err, SceneError::Serialization { .. }));
    }

    #[test]
    fn serialization_roundtrip() {
        let error = SceneError::UnknownLabel {
            label: "cursor".into(),
        };
        let serialized = serde_json::to_string(&error).unwrap();
        let deserialized: SceneError = serde_json::from_str(&serialized).unwrap();
        assert_eq!(error, deserialized);
    }
}
