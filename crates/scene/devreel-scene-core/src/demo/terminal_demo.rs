use crate::components::{label, Terminal};
use crate::config::ProjectConfig;
use crate::error::SceneResult;
use crate::node::{NodeKind, NodeSpec};
use crate::scene::SceneDesc;
use crate::script::{
    all, blink, cancel, fork_labelled, reveal, set, slide_in, tween, wait, Direction,
};
use crate::value::Value;

use super::backdrop;

pub const PROMPT: &str = "willem@cloud-engineer:~$";
pub const KUBECTL: &str = "kubectl get pods -n production";
pub const DOCKER: &str = "docker ps";

pub const PODS: &str = "NAME                          READY   STATUS    RESTARTS   AGE
webapp-7d9b8c5f4-k8m2j       1/1     Running   0          2d
webapp-7d9b8c5f4-n5x7p       1/1     Running   0          2d
api-server-5c8f9d6-q4r8t     1/1     Running   1          5d
redis-cache-8f7c6d-m9p3k     1/1     Running   0          7d";

pub const CONTAINERS: &str = "CONTAINER ID   IMAGE            STATUS         PORTS
a3c9f8e1d2b4   nginx:latest     Up 2 hours     0.0.0.0:80->80/tcp
b7f3e2c8a9d1   postgres:14      Up 3 hours     0.0.0.0:5432->5432/tcp";

const LEFT_X: f32 = -560.0;
const PROMPT_GAP: f32 = 12.0;
/// Advance of one monospace glyph at 24px.
const GLYPH: f32 = 14.4;

/// Prompt, command and cursor on one line at height `y`. The cursor sits one
/// glyph past the end of `command`.
fn command_line(suffix: &str, y: f32, command: &str, cursor_opacity: f32) -> [NodeSpec; 3] {
    let command_x = LEFT_X + PROMPT.chars().count() as f32 * GLYPH + PROMPT_GAP;
    let cursor_x = command_x + command.chars().count() as f32 * GLYPH + 6.0;
    [
        label(&format!("prompt{suffix}"), "", 24.0, Value::rgb(0x26a269))
            .prop("font_weight", 600.0)
            .prop("offset", [-1.0, 0.0])
            .prop("position", [LEFT_X, y]),
        label(&format!("command{suffix}"), "", 24.0, Value::rgb(0xffffff))
            .prop("offset", [-1.0, 0.0])
            .prop("position", [command_x, y]),
        NodeSpec::new(NodeKind::Rect)
            .named(format!("cursor{suffix}"))
            .prop("width", 12.0)
            .prop("height", 28.0)
            .prop("fill", Value::rgb(0xffffff))
            .prop("position", [cursor_x, y])
            .prop("opacity", cursor_opacity),
    ]
}

fn output(name: &str, y: f32) -> NodeSpec {
    label(name, "", 20.0, Value::rgb(0xcccccc))
        .prop("offset", [-1.0, 0.0])
        .prop("position", [LEFT_X, y])
        .prop("text_align", "left")
}

pub fn scene(config: &ProjectConfig) -> SceneResult<SceneDesc> {
    let mut content: Vec<NodeSpec> = Vec::new();
    content.extend(command_line("", -280.0, KUBECTL, 1.0));
    content.push(output("output", -200.0));
    // Second command appears once the first output is done.
    content.extend(command_line("2", 60.0, DOCKER, 0.0));
    content.push(output("output2", 120.0));

    let terminal = Terminal::default()
        .size(1200.0, 700.0)
        .scale(0.8)
        .opacity(0.0)
        .build("terminal", content);

    Ok(SceneDesc::new("terminal-demo")
        .node(backdrop(config)?)
        .node(terminal)
        .steps([
            slide_in(Direction::Left, 1.0),
            all(vec![
                tween("terminal", "scale", 1.0, 0.8),
                tween("terminal", "opacity", 1.0, 0.8),
            ]),
            wait(0.5),
            reveal("prompt", PROMPT, 0.8),
            wait(0.3),
            fork_labelled("cursor", blink("cursor", 0.5)),
            reveal("command", KUBECTL, 2.0),
            wait(0.5),
            // Stop blinking, fade the cursor while the output starts.
            cancel("cursor"),
            all(vec![tween("cursor", "opacity", 0.0, 0.2), wait(0.3)]),
            reveal("output", PODS, 3.0),
            wait(1.0),
            set("cursor2", "opacity", 1.0),
            reveal("prompt2", PROMPT, 0.6),
            fork_labelled("cursor2", blink("cursor2", 0.5)),
            reveal("command2", DOCKER, 1.2),
            wait(0.5),
            // Fading takes the opacity over from the blink, which stops it.
            all(vec![tween("cursor2", "opacity", 0.0, 0.2), wait(0.3)]),
            reveal("output2", CONTAINERS, 2.5),
            wait(2.0),
        ]))
}
