//! Output contracts from scene playback.
//!
//! Playback produces property changes keyed by node and property name. A
//! renderer applies each frame's changes to its own copy of the node tree
//! and draws.

use serde::{Deserialize, Serialize};

use crate::ids::NodeId;
use crate::value::Value;

/// One property write at an exact logical time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub time: f64,
    pub node: NodeId,
    /// Node name, or `#id` for anonymous nodes.
    pub target: String,
    pub property: String,
    pub value: Value,
}

/// Property state published at one output frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub index: u64,
    pub time: f64,
    /// Last write of each (node, property) since the previous frame, in first-write order.
    #[serde(default)]
    pub changes: Vec<Change>,
}

impl Frame {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Value written for `target.property` in this frame, if any.
    pub fn value(&self, target: &str, property: &str) -> Option<&Value> {
        self.changes
            .iter()
            .find(|c| c.target == target && c.property == property)
            .map(|c| &c.value)
    }
}

/// Every frame of one scene.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderedScene {
    pub name: String,
    /// Time at which the scene's main script finished.
    pub duration: f64,
    pub frames: Vec<Frame>,
    /// Forked tasks still running at the end and cancelled by teardown.
    pub cancelled_forks: usize,
}

/// Collapse a run of writes to the last value per (node, property),
/// keeping the order in which each key was first written.
pub fn coalesce(changes: &[Change]) -> Vec<Change> {
    let mut index: hashbrown::HashMap<(NodeId, &str), usize> = hashbrown::HashMap::new();
    let mut out: Vec<Change> = Vec::new();
    for change in changes {
        match index.get(&(change.node, change.property.as_str())) {
            Some(&slot) => out[slot] = change.clone(),
            None => {
                index.insert((change.node, change.property.as_str()), out.len());
                out.push(change.clone());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(time: f64, node: u32, property: &str, v: f32) -> Change {
        Change {
            time,
            node: NodeId(node),
            target: format!("#{node}"),
            property: property.into(),
            value: Value::Scalar(v),
        }
    }

    #[test]
    fn coalesce_keeps_last_value_first_order() {
        let raw = vec![
            change(0.0, 1, "opacity", 0.0),
            change(0.0, 2, "opacity", 0.5),
            change(0.01, 1, "opacity", 1.0),
            change(0.01, 1, "scale", 2.0),
        ];
        let out = coalesce(&raw);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].value, Value::Scalar(1.0));
        assert_eq!(out[0].time, 0.01);
        assert_eq!(out[1].node, NodeId(2));
        assert_eq!(out[2].property, "scale");
    }

    #[test]
    fn frame_lookup_by_target() {
        let frame = Frame {
            index: 0,
            time: 0.0,
            changes: vec![change(0.0, 3, "opacity", 0.25)],
        };
        assert_eq!(frame.value("#3", "opacity"), Some(&Value::Scalar(0.25)));
        assert!(frame.value("#3", "scale").is_none());
    }
}
