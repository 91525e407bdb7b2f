//! Projects: an ordered list of scenes sharing one output configuration.

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::ProjectConfig;
use crate::error::SceneResult;
use crate::outputs::RenderedScene;
use crate::scene::{Scene, SceneDesc};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub config: ProjectConfig,
    #[serde(default)]
    pub scenes: Vec<SceneDesc>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_config(mut self, config: ProjectConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a scene after the ones already present.
    pub fn scene(mut self, desc: SceneDesc) -> Self {
        self.scenes.push(desc);
        self
    }

    pub fn with_scenes(mut self, scenes: impl IntoIterator<Item = SceneDesc>) -> Self {
        self.scenes.extend(scenes);
        self
    }

    pub fn from_json(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate every scene before any of them plays.
    pub fn build(&self) -> SceneResult<Vec<Scene>> {
        self.config.validate()?;
        self.scenes
            .iter()
            .map(|desc| Scene::new(desc, &self.config))
            .collect()
    }

    /// Render every scene in order.
    pub fn render(&self) -> SceneResult<RenderedProject> {
        let scenes = self
            .build()?
            .iter()
            .map(Scene::render)
            .collect::<SceneResult<Vec<_>>>()?;
        let rendered = RenderedProject {
            name: self.name.clone(),
            config: self.config.clone(),
            scenes,
        };
        info!(
            "project {:?}: {} scenes, {} frames, {:.3}s",
            self.name,
            rendered.scenes.len(),
            rendered.frame_count(),
            rendered.duration()
        );
        Ok(rendered)
    }
}

/// Frame trace of a whole project.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderedProject {
    pub name: String,
    pub config: ProjectConfig,
    pub scenes: Vec<RenderedScene>,
}

impl RenderedProject {
    pub fn frame_count(&self) -> usize {
        self.scenes.iter().map(|s| s.frames.len()).sum()
    }

    /// Sum of scene durations.
    pub fn duration(&self) -> f64 {
        self.scenes.iter().map(|s| s.duration).sum()
    }

    pub fn scene(&self, name: &str) -> Option<&RenderedScene> {
        self.scenes.iter().find(|s| s.name == name)
    }
}
