use anyhow::Result;
use devreel_scene_core::{Project, ProjectConfig, Scene, SceneDesc, Value};
use devreel_test_fixtures as fixtures;

fn load_scene(name: &str) -> Result<Scene> {
    let desc = SceneDesc::from_json(&fixtures::scenes::json(name)?)?;
    Ok(Scene::new(&desc, &ProjectConfig::default())?)
}

/// it should build and render every scene fixture in the manifest
#[test]
fn every_fixture_renders() -> Result<()> {
    let keys = fixtures::scenes::keys();
    assert!(!keys.is_empty());
    for key in keys {
        let rendered = load_scene(&key)?.render()?;
        assert_eq!(rendered.name, key);
        assert!(!rendered.frames.is_empty());
    }
    Ok(())
}

/// it should keep a scene description intact through JSON
#[test]
fn fixture_json_roundtrip() -> Result<()> {
    for key in fixtures::scenes::keys() {
        let desc: SceneDesc = fixtures::scenes::load(&key)?;
        let back = SceneDesc::from_json(&desc.to_json()?)?;
        assert_eq!(back, desc, "{key}");
    }
    Ok(())
}

/// it should type the reveal fixture in three evenly spaced states
#[test]
fn reveal_fixture_states() -> Result<()> {
    let mut p = load_scene("reveal-ok")?.play();
    p.advance_to(1.0)?;
    let states: Vec<(f64, Value)> = p.history("label", "text");
    assert_eq!(
        states,
        vec![
            (0.0, Value::Text(String::new())),
            (0.5, Value::Text("o".into())),
            (1.0, Value::Text("ok".into())),
        ]
    );
    Ok(())
}

/// it should leave the cursor hidden after the fade takes over from the blink
#[test]
fn blink_then_fade_fixture() -> Result<()> {
    let rendered = load_scene("blink-then-fade")?.render()?;
    assert_eq!(rendered.cancelled_forks, 0);
    let last = rendered
        .frames
        .iter()
        .rev()
        .find_map(|f| f.value("cursor", "opacity"));
    assert_eq!(last, Some(&Value::Scalar(0.0)));
    Ok(())
}

/// it should run the typing prompt fixture end to end
#[test]
fn typing_prompt_fixture() -> Result<()> {
    let scene = load_scene("typing-prompt")?;
    let mut p = scene.play();
    p.advance_to(10.0)?;
    assert_eq!(p.value("command", "text"), Some(&Value::Text("ls -la".into())));
    assert_eq!(p.value("prompt", "text"), Some(&Value::Text("dev@box:~$".into())));
    assert_eq!(p.value("view", "position"), Some(&Value::Vec2([0.0, 0.0])));
    assert_eq!(p.value("terminal", "opacity"), Some(&Value::Scalar(1.0)));
    assert_eq!(p.scheduler().forked_count(), 0);
    assert!((p.finished_at().unwrap_or_default() - 3.6).abs() < 1e-9);
    Ok(())
}

/// it should start the step after a parallel group when the slowest child ends
#[test]
fn parallel_fades_fixture() -> Result<()> {
    let mut p = load_scene("parallel-fades")?.play();
    p.advance_to(5.0)?;
    let first_c = p.history("c", "opacity").first().map(|(t, _)| *t);
    assert_eq!(first_c, Some(1.5));
    assert_eq!(p.finished_at(), Some(2.0));
    Ok(())
}

/// it should render a whole project fixture with its own configuration
#[test]
fn project_fixture_renders() -> Result<()> {
    let project = Project::from_json(&fixtures::projects::json("two-scenes")?)?;
    assert_eq!(project.config.fps, 30);
    let rendered = project.render()?;
    assert_eq!(rendered.scenes.len(), 2);

    let code = rendered.scene("code").expect("code scene rendered");
    let last = code.frames.last().expect("frames");
    assert_eq!(last.value("code", "selection"), Some(&Value::Vec2([0.0, 2.0])));
    assert!((code.duration - 1.5).abs() < 1e-9);
    Ok(())
}
