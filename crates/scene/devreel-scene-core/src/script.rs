//! Scene script steps.
//!
//! A script is an ordered list of [`Step`]s referring to nodes by name. Steps
//! are plain data (serde) so scenes can be stored as JSON; they are validated
//! and resolved against a graph when a [`Scene`](crate::scene::Scene) is built.
//!
//! Composition rules:
//! - steps in a list run one after another and never overlap;
//! - [`Step::All`] starts its children together and finishes with the slowest;
//! - [`Step::Fork`] starts its child as a separate task and finishes at once;
//!   the child keeps running until it completes, is cancelled, or the scene ends.

use serde::{Deserialize, Serialize};

use crate::interp::Easing;
use crate::value::Value;

fn text_property() -> String {
    "text".to_string()
}

/// Travel direction of a slide transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Starting offset of a scene that slides into place moving in this direction.
    pub fn entry_offset(self, width: f32, height: f32) -> [f32; 2] {
        match self {
            Direction::Left => [width, 0.0],
            Direction::Right => [-width, 0.0],
            Direction::Up => [0.0, height],
            Direction::Down => [0.0, -height],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Suspend for `duration` seconds.
    Wait { duration: f64 },
    /// Interpolate a property from its value at step start to `to`.
    Tween {
        node: String,
        property: String,
        to: Value,
        duration: f64,
        #[serde(default)]
        easing: Easing,
    },
    /// Write a property instantly.
    Set {
        node: String,
        property: String,
        value: Value,
    },
    /// Replace the node's text with `text`, one character at a time.
    Reveal {
        node: String,
        text: String,
        duration: f64,
        #[serde(default = "text_property")]
        property: String,
    },
    /// Type `text` after the node's current text, one character at a time.
    Append {
        node: String,
        text: String,
        duration: f64,
        #[serde(default = "text_property")]
        property: String,
    },
    /// Move a code node's line selection; `last_line: None` selects through the end.
    Select {
        node: String,
        first_line: u32,
        #[serde(default)]
        last_line: Option<u32>,
        duration: f64,
    },
    /// Slide the whole scene into place from one frame off-screen.
    SlideIn { direction: Direction, duration: f64 },
    /// Cursor blink: opacity 1 now, then 0 and 1 alternating every `half_period`, forever.
    Blink { node: String, half_period: f64 },
    /// Repeat `body` until cancelled. The body must take time.
    Loop { body: Vec<Step> },
    Sequence { steps: Vec<Step> },
    /// Parallel group: start every step, finish when the slowest finishes.
    All { steps: Vec<Step> },
    /// Start `step` as a separate task without waiting for it.
    Fork {
        step: Box<Step>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    /// Cancel the task started by the fork with this label.
    Cancel { label: String },
}

pub fn wait(duration: f64) -> Step {
    Step::Wait { duration }
}

pub fn tween(node: &str, property: &str, to: impl Into<Value>, duration: f64) -> Step {
    Step::Tween {
        node: node.to_string(),
        property: property.to_string(),
        to: to.into(),
        duration,
        easing: Easing::default(),
    }
}

pub fn tween_eased(
    node: &str,
    property: &str,
    to: impl Into<Value>,
    duration: f64,
    easing: Easing,
) -> Step {
    Step::Tween {
        node: node.to_string(),
        property: property.to_string(),
        to: to.into(),
        duration,
        easing,
    }
}

pub fn set(node: &str, property: &str, value: impl Into<Value>) -> Step {
    Step::Set {
        node: node.to_string(),
        property: property.to_string(),
        value: value.into(),
    }
}

pub fn reveal(node: &str, text: &str, duration: f64) -> Step {
    Step::Reveal {
        node: node.to_string(),
        text: text.to_string(),
        duration,
        property: text_property(),
    }
}

pub fn append(node: &str, text: &str, duration: f64) -> Step {
    Step::Append {
        node: node.to_string(),
        text: text.to_string(),
        duration,
        property: text_property(),
    }
}

/// Append to a property other than `text`, e.g. a code block's `code`.
pub fn append_to(node: &str, property: &str, text: &str, duration: f64) -> Step {
    Step::Append {
        node: node.to_string(),
        text: text.to_string(),
        duration,
        property: property.to_string(),
    }
}

pub fn select(node: &str, first_line: u32, last_line: Option<u32>, duration: f64) -> Step {
    Step::Select {
        node: node.to_string(),
        first_line,
        last_line,
        duration,
    }
}

pub fn slide_in(direction: Direction, duration: f64) -> Step {
    Step::SlideIn {
        direction,
        duration,
    }
}

pub fn blink(node: &str, half_period: f64) -> Step {
    Step::Blink {
        node: node.to_string(),
        half_period,
    }
}

pub fn repeat(body: Vec<Step>) -> Step {
    Step::Loop { body }
}

pub fn sequence(steps: Vec<Step>) -> Step {
    Step::Sequence { steps }
}

pub fn all(steps: Vec<Step>) -> Step {
    Step::All { steps }
}

pub fn fork(step: Step) -> Step {
    Step::Fork {
        step: Box::new(step),
        label: None,
    }
}

pub fn fork_labelled(label: &str, step: Step) -> Step {
    Step::Fork {
        step: Box::new(step),
        label: Some(label.to_string()),
    }
}

pub fn cancel(label: &str) -> Step {
    Step::Cancel {
        label: label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape_is_op_tagged() {
        let step = fork_labelled("cursor", blink("cursor", 0.5));
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "op": "fork",
                "label": "cursor",
                "step": {"op": "blink", "node": "cursor", "half_period": 0.5}
            })
        );
    }

    #[test]
    fn reveal_defaults_to_text_property() {
        let step: Step =
            serde_json::from_str(r#"{"op":"reveal","node":"prompt","text":"ok","duration":1.0}"#)
                .unwrap();
        assert_eq!(step, reveal("prompt", "ok", 1.0));
    }

    #[test]
    fn entry_offsets() {
        assert_eq!(Direction::Left.entry_offset(1920.0, 1080.0), [1920.0, 0.0]);
        assert_eq!(Direction::Down.entry_offset(1920.0, 1080.0), [0.0, -1080.0]);
    }
}
