//! devreel scene core (renderer-agnostic)
//!
//! Scenes are node trees driven by scripts of steps (tweens, text reveals,
//! blinks, loops, forks). A cooperative scheduler plays a script on a logical
//! clock and records every property write; rendering a scene groups those
//! writes into per-frame change sets that a renderer applies and draws.

pub mod components;
pub mod config;
pub mod demo;
pub mod error;
pub mod ids;
pub mod interp;
pub mod node;
pub mod outputs;
pub mod plan;
pub mod project;
mod reveal;
mod routine;
pub mod scene;
pub mod scheduler;
pub mod script;
mod tween;
pub mod value;

// Re-exports for consumers (renderers, tools)
pub use config::ProjectConfig;
pub use error::{SceneError, SceneResult};
pub use ids::{NodeId, TaskId};
pub use interp::Easing;
pub use node::{NodeKind, NodeSpec, SceneGraph, ROOT};
pub use outputs::{Change, Frame, RenderedScene};
pub use plan::{compile, Plan};
pub use project::{Project, RenderedProject};
pub use scene::{Scene, SceneDesc, ScenePlayer};
pub use scheduler::Scheduler;
pub use script::{Direction, Step};
pub use value::{Value, ValueKind};
