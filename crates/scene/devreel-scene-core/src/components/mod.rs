//! Reusable node subtrees: window chrome for the terminal and the code editor,
//! and a pre-configured code block.
//!
//! Component builders return plain [`NodeSpec`] trees. Geometry that a layout
//! engine would derive from signals (button offsets, title bar placement) is
//! computed once from the window size here.

mod code_editor;
mod syntax;
mod terminal;

pub use code_editor::{CodeEditor, EditorTheme};
pub use syntax::{get_code_snippet, snippet, Language, SyntaxHighlighter, Theme, SNIPPETS};
pub use terminal::Terminal;

use crate::node::{NodeKind, NodeSpec};
use crate::value::Value;

/// Font stack used by every demo component.
pub const MONO: &str = "JetBrains Mono, monospace";

const CLOSE: u32 = 0xff5f57;
const MINIMIZE: u32 = 0xfebc2e;
const MAXIMIZE: u32 = 0x28c840;

/// Name of the child container that receives a window's content.
pub fn content_name(window: &str) -> String {
    format!("{window}.content")
}

/// Name of the text node showing a window's title.
pub fn title_name(window: &str) -> String {
    format!("{window}.title")
}

/// Rounded, shadowed window body.
fn window(name: &str, width: f32, height: f32, fill: Value) -> NodeSpec {
    NodeSpec::new(NodeKind::Rect)
        .named(name)
        .prop("width", width)
        .prop("height", height)
        .prop("fill", fill)
        .prop("radius", 8.0)
        .prop("shadow_color", Value::rgba(0x00000088))
        .prop("shadow_blur", 30.0)
        .prop("shadow_offset_y", 10.0)
}

/// Title bar spanning the top of a window, with close/minimize/maximize dots.
fn title_bar(width: f32, window_height: f32, bar_height: f32, fill: Value, spacing: f32) -> NodeSpec {
    const BUTTON: f32 = 12.0;
    let buttons = [CLOSE, MINIMIZE, MAXIMIZE]
        .into_iter()
        .enumerate()
        .map(|(i, color)| {
            NodeSpec::new(NodeKind::Circle)
                .prop("size", BUTTON)
                .prop("fill", Value::rgb(color))
                .prop(
                    "position",
                    [-width / 2.0 + 20.0 + (BUTTON + spacing) * i as f32, 0.0],
                )
        });
    NodeSpec::new(NodeKind::Rect)
        .prop("width", width)
        .prop("height", bar_height)
        .prop("fill", fill)
        .prop("radius", 8.0)
        .prop("square_bottom", true)
        .prop("position", [0.0, -window_height / 2.0 + bar_height / 2.0])
        .with_children(buttons)
}

/// Single line of monospace text.
pub fn label(name: &str, text: &str, font_size: f32, fill: Value) -> NodeSpec {
    NodeSpec::new(NodeKind::Txt)
        .named(name)
        .prop("text", text)
        .prop("fill", fill)
        .prop("font_size", font_size)
        .prop("font_family", MONO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_bar_buttons_are_spaced_from_left_edge() {
        let bar = title_bar(1000.0, 600.0, 40.0, Value::rgb(0x2d2d2d), 10.0);
        assert_eq!(bar.children.len(), 3);
        let xs: Vec<f32> = bar
            .children
            .iter()
            .filter_map(|c| c.props.get("position").and_then(Value::as_vec2))
            .map(|p| p[0])
            .collect();
        assert_eq!(xs, vec![-480.0, -458.0, -436.0]);
        assert_eq!(bar.props.get("position"), Some(&Value::Vec2([0.0, -280.0])));
    }
}
