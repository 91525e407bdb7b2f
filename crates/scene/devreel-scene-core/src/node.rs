//! Scene graph: an arena of named nodes with ordered properties.
//!
//! Scripts address nodes by name (the equivalent of a component ref), so names
//! are unique per graph. Properties are free-form; the renderer decides what
//! `fill`, `radius` or `font_size` mean. The playback core only reads and
//! writes them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};
use crate::ids::{IdAllocator, NodeId};
use crate::value::Value;

/// Name of the implicit root node every graph starts with.
pub const ROOT: &str = "view";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    #[default]
    Group,
    Rect,
    Circle,
    Txt,
    Code,
    Line,
}

/// Declarative description of a node subtree, added to a graph with
/// [`SceneGraph::add`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub kind: NodeKind,
    #[serde(default)]
    pub props: IndexMap<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn child(mut self, child: NodeSpec) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = NodeSpec>) -> Self {
        self.children.extend(children);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub name: Option<String>,
    pub kind: NodeKind,
    pub props: IndexMap<String, Value>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

#[derive(Clone, Debug)]
pub struct SceneGraph {
    ids: IdAllocator,
    nodes: Vec<Node>,
    names: hashbrown::HashMap<String, NodeId>,
    root: NodeId,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    /// Create a graph holding only the root group.
    pub fn new() -> Self {
        let mut ids = IdAllocator::new();
        let root = ids.alloc_node();
        let mut props = IndexMap::new();
        props.insert("position".to_string(), Value::Vec2([0.0, 0.0]));
        props.insert("opacity".to_string(), Value::Scalar(1.0));
        let mut names = hashbrown::HashMap::new();
        names.insert(ROOT.to_string(), root);
        Self {
            ids,
            nodes: vec![Node {
                id: root,
                name: Some(ROOT.to_string()),
                kind: NodeKind::Group,
                props,
                parent: None,
                children: Vec::new(),
            }],
            names,
            root,
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a subtree under `parent`, returning the id of the subtree's top node.
    pub fn add(&mut self, parent: NodeId, spec: NodeSpec) -> SceneResult<NodeId> {
        self.node(parent)?;
        let NodeSpec {
            name,
            kind,
            props,
            children,
        } = spec;
        if let Some(n) = &name {
            if self.names.contains_key(n) {
                return Err(SceneError::DuplicateNode { name: n.clone() });
            }
        }
        let id = self.ids.alloc_node();
        if let Some(n) = &name {
            self.names.insert(n.clone(), id);
        }
        self.nodes.push(Node {
            id,
            name,
            kind,
            props,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0 as usize].children.push(id);
        for child in children {
            self.add(id, child)?;
        }
        Ok(id)
    }

    /// Resolve a node by name.
    pub fn find(&self, name: &str) -> SceneResult<NodeId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| SceneError::UnknownNode {
                name: name.to_string(),
            })
    }

    pub fn node(&self, id: NodeId) -> SceneResult<&Node> {
        self.nodes
            .get(id.0 as usize)
            .ok_or_else(|| SceneError::UnknownNode {
                name: format!("#{}", id.0),
            })
    }

    /// Display name used in logs and errors.
    pub fn label(&self, id: NodeId) -> String {
        match self.nodes.get(id.0 as usize).and_then(|n| n.name.as_deref()) {
            Some(name) => name.to_string(),
            None => format!("#{}", id.0),
        }
    }

    pub fn get(&self, id: NodeId, key: &str) -> Option<&Value> {
        self.nodes.get(id.0 as usize)?.props.get(key)
    }

    pub fn set(&mut self, id: NodeId, key: &str, value: Value) -> SceneResult<()> {
        let label = format!("#{}", id.0);
        let node = self
            .nodes
            .get_mut(id.0 as usize)
            .ok_or(SceneError::UnknownNode { name: label })?;
        match node.props.get_mut(key) {
            Some(slot) => *slot = value,
            None => {
                node.props.insert(key.to_string(), value);
            }
        }
        Ok(())
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0 as usize)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NodeSpec {
        NodeSpec::new(NodeKind::Rect)
            .named("window")
            .prop("width", 100.0)
            .child(NodeSpec::new(NodeKind::Txt).named("label").prop("text", ""))
            .child(NodeSpec::new(NodeKind::Circle).prop("size", 12.0))
    }

    #[test]
    fn add_nested_and_find() {
        let mut g = SceneGraph::new();
        let window = g.add(g.root(), sample()).unwrap();
        assert_eq!(g.len(), 4);
        assert_eq!(g.find("window").unwrap(), window);
        let label = g.find("label").unwrap();
        assert_eq!(g.node(label).unwrap().parent, Some(window));
        assert_eq!(g.children(window).len(), 2);
        assert_eq!(g.label(g.children(window)[1]), "#3");
    }

    #[test]
    fn duplicate_names_rejected() {
        let mut g = SceneGraph::new();
        g.add(g.root(), sample()).unwrap();
        let err = g.add(g.root(), sample()).unwrap_err();
        assert_eq!(
            err,
            SceneError::DuplicateNode {
                name: "window".into()
            }
        );
    }

    #[test]
    fn set_inserts_and_overwrites() {
        let mut g = SceneGraph::new();
        let id = g.add(g.root(), sample()).unwrap();
        g.set(id, "opacity", Value::Scalar(0.0)).unwrap();
        g.set(id, "width", Value::Scalar(50.0)).unwrap();
        assert_eq!(g.get(id, "opacity"), Some(&Value::Scalar(0.0)));
        assert_eq!(g.get(id, "width"), Some(&Value::Scalar(50.0)));
        assert!(g.find("missing").is_err());
    }

    #[test]
    fn spec_json_roundtrip_keeps_prop_order() {
        let spec = sample();
        let json = serde_json::to_string(&spec).unwrap();
        let back: NodeSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}
