use devreel_scene_core::script::{append, reveal, wait};
use devreel_scene_core::{
    NodeKind, NodeSpec, ProjectConfig, Scene, SceneDesc, ScenePlayer, Step, Value,
};

fn txt(name: &str, text: &str) -> NodeSpec {
    NodeSpec::new(NodeKind::Txt).named(name).prop("text", text)
}

fn play(nodes: Vec<NodeSpec>, script: Vec<Step>) -> ScenePlayer {
    let desc = SceneDesc {
        name: "reveal".into(),
        nodes,
        script,
    };
    Scene::new(&desc, &ProjectConfig::default())
        .expect("scene should build")
        .play()
}

fn texts(player: &ScenePlayer, node: &str) -> Vec<(f64, String)> {
    player
        .history(node, "text")
        .into_iter()
        .map(|(t, v)| (t, v.as_text().unwrap_or_default().to_string()))
        .collect()
}

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() <= 1e-9, "left={a} right={b}");
}

/// it should show "", "o", "ok" at 0, 0.5 and 1.0 when revealing "ok" over one second
#[test]
fn reveal_two_chars_over_one_second() {
    let mut p = play(vec![txt("label", "")], vec![reveal("label", "ok", 1.0)]);
    p.advance_to(2.0).unwrap();
    assert_eq!(
        texts(&p, "label"),
        vec![
            (0.0, String::new()),
            (0.5, "o".to_string()),
            (1.0, "ok".to_string())
        ]
    );
    assert_eq!(p.finished_at(), Some(1.0));
}

/// it should show one empty state and consume no time for an empty string
#[test]
fn reveal_empty_string_does_not_wait() {
    let mut p = play(
        vec![txt("label", "stale")],
        vec![reveal("label", "", 2.0), wait(0.25)],
    );
    p.advance_to(0.0).unwrap();
    assert_eq!(texts(&p, "label"), vec![(0.0, String::new())]);
    p.advance_to(1.0).unwrap();
    assert_eq!(p.finished_at(), Some(0.25));
}

/// it should visit exactly n+1 prefixes in order with uniform spacing
#[test]
fn reveal_visits_every_prefix() {
    let mut p = play(vec![txt("label", "")], vec![reveal("label", "hello", 1.0)]);
    p.advance_to(5.0).unwrap();
    let h = texts(&p, "label");
    assert_eq!(h.len(), 6);
    for (i, (t, text)) in h.iter().enumerate() {
        assert_eq!(text, &"hello"[..i]);
        approx(*t, i as f64 / 5.0);
    }
    approx(p.finished_at().unwrap(), 1.0);
}

/// it should count characters, not bytes
#[test]
fn reveal_unicode_by_char() {
    let mut p = play(vec![txt("label", "")], vec![reveal("label", "→é", 1.0)]);
    p.advance_to(1.0).unwrap();
    let states: Vec<String> = texts(&p, "label").into_iter().map(|(_, s)| s).collect();
    assert_eq!(states, ["", "→", "→é"]);
}

/// it should start the next step exactly when the reveal's full text appears
#[test]
fn reveal_total_time_equals_duration() {
    let mut p = play(
        vec![txt("a", ""), txt("b", "")],
        vec![reveal("a", "abc", 0.9), reveal("b", "x", 0.3)],
    );
    p.advance_to(3.0).unwrap();
    let a = texts(&p, "a");
    let b = texts(&p, "b");
    assert_eq!(a.last().map(|(_, s)| s.as_str()), Some("abc"));
    approx(a.last().unwrap().0, 0.9);
    approx(b[0].0, 0.9);
    approx(p.finished_at().unwrap(), 1.2);
}

/// it should keep the existing text and type after it when appending
#[test]
fn append_types_after_existing_text() {
    let mut p = play(
        vec![txt("command", "$ ")],
        vec![append("command", "ls", 0.4), append("command", "", 1.0)],
    );
    p.advance_to(1.0).unwrap();
    let states: Vec<String> = texts(&p, "command").into_iter().map(|(_, s)| s).collect();
    assert_eq!(states, ["$ ", "$ l", "$ ls", "$ ls"]);
    assert_eq!(p.value("command", "text"), Some(&Value::Text("$ ls".into())));
}

/// it should record every state at its exact time even when typing is faster than frames
#[test]
fn fast_reveal_is_not_frame_quantized() {
    let desc = SceneDesc::new("fast")
        .node(txt("label", ""))
        .step(reveal("label", "abcdef", 0.01));
    let scene = Scene::new(&desc, &ProjectConfig::default()).unwrap();

    let mut p = scene.play();
    p.advance_to(1.0).unwrap();
    assert_eq!(texts(&p, "label").len(), 7);

    let rendered = scene.render().unwrap();
    assert_eq!(rendered.frames.len(), 2);
    assert_eq!(
        rendered.frames[0].value("label", "text"),
        Some(&Value::Text(String::new()))
    );
    assert_eq!(
        rendered.frames[1].value("label", "text"),
        Some(&Value::Text("abcdef".into()))
    );
}
