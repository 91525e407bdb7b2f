use crate::node::{NodeKind, NodeSpec};
use crate::value::Value;

use super::{content_name, label, title_bar, title_name, window};

const TITLE_BAR_HEIGHT: f32 = 45.0;
const TAB_HEIGHT: f32 = 35.0;
const BUTTON_SPACING: f32 = 12.0;
const GUTTER_WIDTH: f32 = 60.0;
const LINE_NUMBERS: u32 = 20;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EditorTheme {
    #[default]
    Dark,
    Light,
}

struct Palette {
    body: u32,
    title_bar: u32,
    tab_bar: u32,
    gutter: u32,
    text: u32,
    line_number: u32,
    separator: u32,
}

impl EditorTheme {
    fn palette(self) -> Palette {
        match self {
            EditorTheme::Dark => Palette {
                body: 0x1e1e1e,
                title_bar: 0x2d2d2d,
                tab_bar: 0x252526,
                gutter: 0x1e1e1e,
                text: 0xcccccc,
                line_number: 0x858585,
                separator: 0x2d2d2d,
            },
            EditorTheme::Light => Palette {
                body: 0xffffff,
                title_bar: 0xe8e8e8,
                tab_bar: 0xf3f3f3,
                gutter: 0xf8f8f8,
                text: 0x333333,
                line_number: 0x999999,
                separator: 0xd4d4d4,
            },
        }
    }
}

/// Editor window with a file tab, a line-number gutter and a content area
/// named `<name>.content`.
#[derive(Clone, Debug, PartialEq)]
pub struct CodeEditor {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub file_name: String,
    pub theme: EditorTheme,
    pub position: [f32; 2],
    pub scale: f32,
    pub opacity: f32,
}

impl Default for CodeEditor {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 700.0,
            title: "Code Editor".to_string(),
            file_name: "example.ts".to_string(),
            theme: EditorTheme::Dark,
            position: [0.0, 0.0],
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

impl CodeEditor {
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn theme(mut self, theme: EditorTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn position(mut self, position: [f32; 2]) -> Self {
        self.position = position;
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
        let p = self.theme.palette();
        let (w, h) = (self.width, self.height);
        let chrome = TITLE_BAR_HEIGHT + TAB_HEIGHT;

        let bar = title_bar(w, h, TITLE_BAR_HEIGHT, Value::rgb(p.title_bar), BUTTON_SPACING).child(
            label(&title_name(name), &self.title, 14.0, Value::rgb(p.text))
                .prop("font_weight", 500.0),
        );

        let tab = NodeSpec::new(NodeKind::Rect)
            .prop("width", 200.0)
            .prop("height", TAB_HEIGHT)
            .prop("fill", Value::rgb(p.body))
            .prop("position", [-w / 2.0 + 100.0, 0.0])
            .child(
                label(&format!("{name}.icon"), "TS", 12.0, Value::rgb(0x3178c6))
                    .prop("font_weight", 700.0)
                    .prop("position", [-80.0, 0.0]),
            )
            .child(
                label(&format!("{name}.file"), &self.file_name, 13.0, Value::rgb(p.text))
                    .prop("position", [-20.0, 0.0]),
            )
            .child(
                NodeSpec::new(NodeKind::Circle)
                    .prop("size", 8.0)
                    .prop("fill", Value::rgb(0x3794ff))
                    .prop("position", [70.0, 0.0]),
            );
        let tab_bar = NodeSpec::new(NodeKind::Rect)
            .prop("width", w)
            .prop("height", TAB_HEIGHT)
            .prop("fill", Value::rgb(p.tab_bar))
            .prop("position", [0.0, -h / 2.0 + TITLE_BAR_HEIGHT + TAB_HEIGHT / 2.0])
            .child(tab);

        let numbers = (0..LINE_NUMBERS).map(|i| {
            NodeSpec::new(NodeKind::Txt)
                .prop("text", (i + 1).to_string())
                .prop("fill", Value::rgb(p.line_number))
                .prop("font_size", 14.0)
                .prop("font_family", super::MONO)
                .prop("position", [0.0, -280.0 + i as f32 * 30.0])
        });
        let gutter = NodeSpec::new(NodeKind::Rect)
            .prop("width", GUTTER_WIDTH)
            .prop("height", h - chrome)
            .prop("fill", Value::rgb(p.gutter))
            .prop("position", [-w / 2.0 + GUTTER_WIDTH / 2.0, chrome / 2.0])
            .with_children(numbers);

        let separator = NodeSpec::new(NodeKind::Line)
            .prop("from", [-w / 2.0 + GUTTER_WIDTH, -h / 2.0 + chrome])
            .prop("to", [-w / 2.0 + GUTTER_WIDTH, h / 2.0])
            .prop("stroke", Value::rgb(p.separator))
            .prop("line_width", 1.0);

        let content = NodeSpec::new(NodeKind::Rect)
            .named(content_name(name))
            .prop("width", w - 2.0 * GUTTER_WIDTH)
            .prop("height", h - chrome - 40.0)
            .prop("fill", Value::rgba(0))
            .prop("position", [30.0, chrome / 2.0 + 10.0])
            .prop("clip", true)
            .with_children(children);

        window(name, w, h, Value::rgb(p.body))
            .prop("position", self.position)
            .prop("scale", self.scale)
            .prop("opacity", self.opacity)
            .with_children([bar, tab_bar, gutter, separator, content])
    }
}
