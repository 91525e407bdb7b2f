use crate::components::label;
use crate::config::ProjectConfig;
use crate::error::SceneResult;
use crate::node::{NodeKind, NodeSpec};
use crate::scene::SceneDesc;
use crate::script::{fork, repeat, tween, wait};
use crate::value::Value;

use super::backdrop;

/// (name, size, color, position, scale keyframes, seconds per keyframe)
const CIRCLES: [(&str, f32, u32, [f32; 2], [f32; 3], f64); 3] = [
    ("circle1", 400.0, 0x1a5fb4, [-600.0, -300.0], [0.8, 1.2, 0.8], 2.0),
    ("circle2", 500.0, 0x26a269, [600.0, 200.0], [1.2, 0.9, 1.2], 2.5),
    ("circle3", 300.0, 0xe01b24, [0.0, 400.0], [1.0, 1.1, 1.0], 1.8),
];

pub fn scene(config: &ProjectConfig) -> SceneResult<SceneDesc> {
    let mut desc = SceneDesc::new("intro").node(backdrop(config)?);

    for (name, size, color, position, _, _) in CIRCLES {
        desc = desc.node(
            NodeSpec::new(NodeKind::Circle)
                .named(name)
                .prop("size", size)
                .prop("fill", Value::rgb(color))
                .prop("opacity", 0.1)
                .prop("position", position)
                .prop("scale", 1.0),
        );
    }

    let desc = desc
        .node(
            label("title", "Motion Canvas", 90.0, Value::rgb(0xffffff))
                .prop("font_weight", 700.0)
                .prop("opacity", 0.0)
                .prop("position", [0.0, -50.0]),
        )
        .node(
            label("subtitle", "Animations with Code", 42.0, Value::rgb(0xcccccc))
                .prop("opacity", 0.0)
                .prop("position", [0.0, 40.0]),
        );

    // Background circles breathe for the whole scene.
    let breathing = CIRCLES.map(|(name, _, _, _, keys, seconds)| {
        fork(repeat(
            keys.iter()
                .map(|k| tween(name, "scale", *k, seconds))
                .collect(),
        ))
    });

    Ok(desc.steps(breathing).steps([
        tween("title", "opacity", 1.0, 1.0),
        wait(0.5),
        tween("subtitle", "opacity", 1.0, 1.0),
        wait(2.0),
    ]))
}
