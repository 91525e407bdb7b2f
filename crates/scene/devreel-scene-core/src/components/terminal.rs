use crate::node::{NodeKind, NodeSpec};
use crate::value::Value;

use super::{content_name, label, title_bar, title_name, window};

const TITLE_BAR_HEIGHT: f32 = 40.0;
const BUTTON_SPACING: f32 = 10.0;
const PADDING: f32 = 40.0;

/// macOS-style terminal window.
///
/// Children passed to [`Terminal::build`] go into a clipped content container
/// named `<name>.content`; the title text is `<name>.title`.
#[derive(Clone, Debug, PartialEq)]
pub struct Terminal {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub title_bar_color: Value,
    pub background_color: Value,
    pub position: [f32; 2],
    pub scale: f32,
    pub opacity: f32,
}

impl Default for Terminal {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
            title: "Terminal".to_string(),
            title_bar_color: Value::rgb(0x2d2d2d),
            background_color: Value::rgb(0x1e1e1e),
            position: [0.0, 0.0],
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

impl Terminal {
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn build(&self, name: &str, children: impl IntoIterator<Item = NodeSpec>) -> NodeSpec {
        let bar = title_bar(
            self.width,
            self.height,
            TITLE_BAR_HEIGHT,
            self.title_bar_color.clone(),
            BUTTON_SPACING,
        )
        .child(
            label(&title_name(name), &self.title, 16.0, Value::rgb(0xcccccc))
                .prop("font_weight", 500.0),
        );

        let content = NodeSpec::new(NodeKind::Rect)
            .named(content_name(name))
            .prop("width", self.width - PADDING)
            .prop("height", self.height - TITLE_BAR_HEIGHT - PADDING)
            .prop("fill", Value::rgba(0))
            .prop("position", [0.0, TITLE_BAR_HEIGHT / 2.0])
            .prop("clip", true)
            .with_children(children);

        window(name, self.width, self.height, self.background_color.clone())
            .prop("position", self.position)
            .prop("scale", self.scale)
            .prop("opacity", self.opacity)
            .child(bar)
            .child(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::SceneGraph;

    #[test]
    fn content_container_holds_children() {
        let spec = Terminal::default()
            .size(1200.0, 700.0)
            .opacity(0.0)
            .build("terminal", [label("prompt", "", 24.0, Value::rgb(0x26a269))]);
        let mut graph = SceneGraph::new();
        graph.add(graph.root(), spec).unwrap();

        let content = graph.find("terminal.content").unwrap();
        let prompt = graph.find("prompt").unwrap();
        assert_eq!(graph.node(prompt).unwrap().parent, Some(content));
        assert_eq!(graph.get(content, "height"), Some(&Value::Scalar(620.0)));

        let title = graph.find("terminal.title").unwrap();
        assert_eq!(graph.get(title, "text"), Some(&Value::Text("Terminal".into())));
        let window = graph.find("terminal").unwrap();
        assert_eq!(graph.get(window, "opacity"), Some(&Value::Scalar(0.0)));
    }
}
