//! Bundled demo project: an intro card, a terminal session and a code editor
//! walkthrough, played in that order.

pub mod code_demo;
pub mod intro;
pub mod terminal_demo;

use crate::config::ProjectConfig;
use crate::error::SceneResult;
use crate::node::{NodeKind, NodeSpec};
use crate::project::Project;
use crate::value::Value;

pub const PROJECT_NAME: &str = "complete-demo";

/// Solid background, three frames wide and tall, so a sliding scene never
/// uncovers empty canvas.
pub fn backdrop(config: &ProjectConfig) -> SceneResult<NodeSpec> {
    Ok(NodeSpec::new(NodeKind::Rect)
        .named("backdrop")
        .prop("width", config.width as f32 * 3.0)
        .prop("height", config.height as f32 * 3.0)
        .prop("fill", Value::hex(&config.background)?)
        .prop("z_index", -100.0))
}

/// The three demo scenes under the default configuration.
pub fn project() -> SceneResult<Project> {
    project_with(ProjectConfig::default())
}

pub fn project_with(config: ProjectConfig) -> SceneResult<Project> {
    let scenes = vec![
        intro::scene(&config)?,
        terminal_demo::scene(&config)?,
        code_demo::scene(&config)?,
    ];
    Ok(Project::new(PROJECT_NAME)
        .with_config(config)
        .with_scenes(scenes))
}
