//! Scenes: a node tree bound to a script, and their playback.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::ProjectConfig;
use crate::error::{SceneError, SceneResult};
use crate::ids::TaskId;
use crate::node::{NodeSpec, SceneGraph};
use crate::outputs::{coalesce, Frame, RenderedScene};
use crate::plan::{compile, Plan};
use crate::scheduler::Scheduler;
use crate::script::Step;
use crate::value::Value;

/// Serializable description of one scene.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDesc {
    pub name: String,
    /// Top-level nodes, added under the root in order.
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub script: Vec<Step>,
}

impl SceneDesc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn node(mut self, spec: NodeSpec) -> Self {
        self.nodes.push(spec);
        self
    }

    pub fn step(mut self, step: Step) -> Self {
        self.script.push(step);
        self
    }

    pub fn steps(mut self, steps: impl IntoIterator<Item = Step>) -> Self {
        self.script.extend(steps);
        self
    }

    pub fn from_json(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A validated scene, ready to play any number of times.
#[derive(Debug)]
pub struct Scene {
    name: String,
    graph: SceneGraph,
    plan: Plan,
    config: ProjectConfig,
}

impl Scene {
    /// Build the node tree and compile the script. Every parameter and node
    /// reference is checked here.
    pub fn new(desc: &SceneDesc, config: &ProjectConfig) -> SceneResult<Self> {
        config.validate()?;
        let mut graph = SceneGraph::new();
        for spec in &desc.nodes {
            graph.add(graph.root(), spec.clone())?;
        }
        let plan = compile(&desc.script, &graph, config)?;
        if plan.min_duration().is_infinite() {
            return Err(SceneError::invalid(
                "script",
                &desc.name,
                "main script never finishes; fork loops and blinks instead",
            ));
        }
        Ok(Self {
            name: desc.name.clone(),
            graph,
            plan,
            config: config.clone(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Initial node tree.
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// Start playback at time 0.
    pub fn play(&self) -> ScenePlayer {
        let mut scheduler = Scheduler::new(self.config.frame_dt());
        let main = scheduler.spawn(self.plan.clone());
        info!("scene {:?}: start", self.name);
        ScenePlayer {
            name: self.name.clone(),
            graph: self.graph.clone(),
            scheduler,
            main,
            config: self.config.clone(),
            frame_cursor: 0,
            next_index: 0,
        }
    }

    /// Play to the end and collect one frame per output tick.
    pub fn render(&self) -> SceneResult<RenderedScene> {
        self.play().render()
    }
}

/// One in-progress playback of a scene.
#[derive(Debug)]
pub struct ScenePlayer {
    name: String,
    graph: SceneGraph,
    scheduler: Scheduler,
    main: TaskId,
    config: ProjectConfig,
    frame_cursor: usize,
    next_index: u64,
}

impl ScenePlayer {
    pub fn now(&self) -> f64 {
        self.scheduler.now()
    }

    /// Run the timeline up to time `t` (seconds since scene start).
    pub fn advance_to(&mut self, t: f64) -> SceneResult<()> {
        self.scheduler.advance_to(t, &mut self.graph)
    }

    pub fn is_finished(&self) -> bool {
        !self.scheduler.is_alive(self.main)
    }

    /// Time at which the main script completed.
    pub fn finished_at(&self) -> Option<f64> {
        self.scheduler.completed_at(self.main)
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Current value of `node.property`.
    pub fn value(&self, node: &str, property: &str) -> Option<&Value> {
        let id = self.graph.find(node).ok()?;
        self.graph.get(id, property)
    }

    /// Every write to `node.property` since the last `clear_history`, as (time, value).
    pub fn history(&self, node: &str, property: &str) -> Vec<(f64, Value)> {
        self.scheduler
            .changes()
            .iter()
            .filter(|c| c.target == node && c.property == property)
            .map(|c| (c.time, c.value.clone()))
            .collect()
    }

    /// Drop recorded writes. Frames already produced are unaffected.
    pub fn clear_history(&mut self) {
        self.scheduler.clear_changes();
        self.frame_cursor = 0;
    }

    /// Cancel a labelled fork from outside the script.
    pub fn cancel(&mut self, label: &str) -> bool {
        self.scheduler.cancel_label(label)
    }

    /// Cancel every forked task still running. Returns how many there were.
    pub fn teardown(&mut self) -> usize {
        let cancelled = self.scheduler.cancel_forks();
        if cancelled > 0 {
            debug!("scene {:?}: teardown cancelled {cancelled} forks", self.name);
        }
        cancelled
    }

    /// Advance to the next output frame and return its coalesced changes.
    pub fn next_frame(&mut self, index: u64) -> SceneResult<Frame> {
        let time = index as f64 / self.config.fps as f64;
        self.advance_to(time)?;
        let changes = coalesce(&self.scheduler.changes()[self.frame_cursor..]);
        self.frame_cursor = self.scheduler.changes().len();
        self.next_index = index + 1;
        Ok(Frame {
            index,
            time,
            changes,
        })
    }

    /// Produce frames until the main script finishes, then tear down.
    /// Picks up at the first frame not yet produced and not behind the clock.
    pub fn render(mut self) -> SceneResult<RenderedScene> {
        let mut frames = Vec::new();
        let fps = self.config.fps as f64;
        let mut index = self.next_index.max((self.now() * fps).floor() as u64);
        while (index as f64 / fps) < self.now() {
            index += 1;
        }
        loop {
            let frame = self.next_frame(index)?;
            let time = frame.time;
            frames.push(frame);
            // The player is consumed, so its history is never read again.
            self.clear_history();
            if self.is_finished() {
                break;
            }
            if time >= self.config.max_scene_seconds {
                self.teardown();
                return Err(SceneError::SceneTooLong {
                    scene: self.name.clone(),
                    limit: self.config.max_scene_seconds,
                });
            }
            index += 1;
        }
        let duration = self.finished_at().unwrap_or_else(|| self.now());
        let cancelled_forks = self.teardown();
        info!(
            "scene {:?}: {} frames, {duration:.3}s, {cancelled_forks} forks cancelled",
            self.name,
            frames.len()
        );
        Ok(RenderedScene {
            name: self.name,
            duration,
            frames,
            cancelled_forks,
        })
    }
}
