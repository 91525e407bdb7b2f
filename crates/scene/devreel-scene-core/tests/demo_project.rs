use devreel_scene_core::demo::{self, code_demo, terminal_demo};
use devreel_scene_core::{Project, RenderedScene, Value};

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() <= 1e-6, "left={a} right={b}");
}

fn final_value<'a>(scene: &'a RenderedScene, node: &str, property: &str) -> Option<&'a Value> {
    scene
        .frames
        .iter()
        .rev()
        .find_map(|f| f.value(node, property))
}

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

/// it should render intro, terminal demo and code demo in order
#[test]
fn demo_renders_three_scenes() {
    let project = demo::project().unwrap();
    assert_eq!(project.config.width, 1920);
    assert_eq!(project.config.background, "#0b1020");
    let rendered = project.render().unwrap();
    let names: Vec<&str> = rendered.scenes.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["intro", "terminal-demo", "code-demo"]);

    let fps = project.config.fps as f64;
    for scene in &rendered.scenes {
        let n = scene.frames.len();
        assert!(scene.frames[n - 1].time >= scene.duration - 1e-9, "{}", scene.name);
        assert!(scene.frames[n - 2].time < scene.duration, "{}", scene.name);
        assert!((n as f64 - 1.0 - scene.duration * fps).abs() < 1.0 + 1e-6);
    }
    assert_eq!(
        rendered.frame_count(),
        rendered.scenes.iter().map(|s| s.frames.len()).sum::<usize>()
    );
}

/// it should leave the intro's circles breathing until teardown
#[test]
fn intro_scene() {
    let rendered = demo::project().unwrap().render().unwrap();
    let intro = rendered.scene("intro").unwrap();
    approx(intro.duration, 4.5);
    assert_eq!(intro.cancelled_forks, 3);
    assert_eq!(final_value(intro, "title", "opacity"), Some(&Value::Scalar(1.0)));
    assert_eq!(final_value(intro, "subtitle", "opacity"), Some(&Value::Scalar(1.0)));
    assert!(final_value(intro, "circle2", "scale").is_some());
}

/// it should type both commands and their output, stopping both cursors
#[test]
fn terminal_scene() {
    let rendered = demo::project().unwrap().render().unwrap();
    let term = rendered.scene("terminal-demo").unwrap();
    approx(term.duration, 17.3);
    assert_eq!(term.cancelled_forks, 0);

    assert_eq!(final_value(term, "prompt", "text"), Some(&text(terminal_demo::PROMPT)));
    assert_eq!(final_value(term, "command", "text"), Some(&text(terminal_demo::KUBECTL)));
    assert_eq!(final_value(term, "output", "text"), Some(&text(terminal_demo::PODS)));
    assert_eq!(final_value(term, "prompt2", "text"), Some(&text(terminal_demo::PROMPT)));
    assert_eq!(final_value(term, "command2", "text"), Some(&text(terminal_demo::DOCKER)));
    assert_eq!(
        final_value(term, "output2", "text"),
        Some(&text(terminal_demo::CONTAINERS))
    );
    assert_eq!(final_value(term, "cursor", "opacity"), Some(&Value::Scalar(0.0)));
    assert_eq!(final_value(term, "cursor2", "opacity"), Some(&Value::Scalar(0.0)));
    assert_eq!(final_value(term, "view", "position"), Some(&Value::Vec2([0.0, 0.0])));
    assert_eq!(final_value(term, "terminal", "scale"), Some(&Value::Scalar(1.0)));

    // The slide starts one frame width to the right.
    assert_eq!(
        term.frames[0].value("view", "position"),
        Some(&Value::Vec2([1920.0, 0.0]))
    );
}

/// it should type the whole sample, walk the selection and fade out
#[test]
fn code_scene() {
    let rendered = demo::project().unwrap().render().unwrap();
    let code = rendered.scene("code-demo").unwrap();

    let typing: f64 = code_demo::TYPING.iter().map(|(_, s, p)| s + p).sum();
    approx(code.duration, 2.6 + typing + 10.0);
    assert_eq!(
        final_value(code, "code", "code"),
        Some(&text(&code_demo::typed_code()))
    );

    let lines = code_demo::typed_code().lines().count() as f32;
    assert_eq!(
        final_value(code, "code", "selection"),
        Some(&Value::Vec2([0.0, lines - 1.0]))
    );
    // The first selection highlights lines 8 to 11.
    let selections: Vec<&Value> = code
        .frames
        .iter()
        .filter_map(|f| f.value("code", "selection"))
        .collect();
    assert!(selections.contains(&&Value::Vec2([8.0, 11.0])));
    assert_eq!(final_value(code, "editor", "opacity"), Some(&Value::Scalar(0.0)));
    assert_eq!(final_value(code, "title", "opacity"), Some(&Value::Scalar(0.0)));
}

/// it should survive a JSON round trip and render the same frames
#[test]
fn demo_project_json_roundtrip() {
    let project = demo::project().unwrap();
    let back = Project::from_json(&project.to_json().unwrap()).unwrap();
    assert_eq!(back, project);
    let a = project.render().unwrap();
    let b = back.render().unwrap();
    assert_eq!(a.frame_count(), b.frame_count());
}
