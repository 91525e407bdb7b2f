//! Validated, name-resolved form of a script.
//!
//! [`compile`] checks every parameter up front so a malformed script fails
//! when the scene is built, not halfway through playback. Sugar steps
//! (`blink`, `slide_in`) are lowered here onto the primitive routines.

use crate::config::ProjectConfig;
use crate::error::{SceneError, SceneResult};
use crate::ids::NodeId;
use crate::interp::Easing;
use crate::node::SceneGraph;
use crate::script::Step;
use crate::value::Value;

#[derive(Clone, Debug, PartialEq)]
pub enum Plan {
    Wait(f64),
    Tween {
        node: NodeId,
        property: String,
        to: Value,
        duration: f64,
        easing: Easing,
    },
    Set {
        node: NodeId,
        property: String,
        value: Value,
    },
    Reveal {
        node: NodeId,
        property: String,
        text: Vec<char>,
        duration: f64,
        append: bool,
    },
    Select {
        node: NodeId,
        first_line: u32,
        last_line: Option<u32>,
        duration: f64,
    },
    Loop(Vec<Plan>),
    Sequence(Vec<Plan>),
    All(Vec<Plan>),
    Fork {
        plan: Box<Plan>,
        label: Option<String>,
    },
    Cancel(String),
}

impl Plan {
    /// Shortest time this plan can take; `f64::INFINITY` for plans that never finish.
    pub fn min_duration(&self) -> f64 {
        match self {
            Plan::Wait(d) | Plan::Tween { duration: d, .. } | Plan::Select { duration: d, .. } => {
                *d
            }
            Plan::Reveal { text, duration, .. } => {
                if text.is_empty() {
                    0.0
                } else {
                    *duration
                }
            }
            Plan::Set { .. } | Plan::Fork { .. } | Plan::Cancel(_) => 0.0,
            Plan::Loop(_) => f64::INFINITY,
            Plan::Sequence(steps) => steps.iter().map(Plan::min_duration).sum(),
            Plan::All(steps) => steps.iter().map(Plan::min_duration).fold(0.0, f64::max),
        }
    }

    fn collect_labels<'a>(&'a self, forks: &mut Vec<&'a str>, cancels: &mut Vec<&'a str>) {
        match self {
            Plan::Fork { plan, label } => {
                if let Some(l) = label {
                    forks.push(l);
                }
                plan.collect_labels(forks, cancels);
            }
            Plan::Cancel(l) => cancels.push(l),
            Plan::Loop(steps) | Plan::Sequence(steps) | Plan::All(steps) => {
                for s in steps {
                    s.collect_labels(forks, cancels);
                }
            }
            _ => {}
        }
    }
}

fn check_duration(name: &str, d: f64) -> SceneResult<f64> {
    if !d.is_finite() || d < 0.0 {
        return Err(SceneError::invalid(
            name,
            d,
            "must be a finite, non-negative number of seconds",
        ));
    }
    Ok(d)
}

/// Resolve node names, validate parameters and lower sugar steps.
/// `steps` is treated as one sequential list.
pub fn compile(steps: &[Step], graph: &SceneGraph, cfg: &ProjectConfig) -> SceneResult<Plan> {
    let plan = Plan::Sequence(
        steps
            .iter()
            .map(|s| compile_step(s, graph, cfg))
            .collect::<SceneResult<_>>()?,
    );
    let mut forks = Vec::new();
    let mut cancels = Vec::new();
    plan.collect_labels(&mut forks, &mut cancels);
    if let Some(missing) = cancels.iter().find(|l| !forks.contains(*l)) {
        return Err(SceneError::UnknownLabel {
            label: missing.to_string(),
        });
    }
    Ok(plan)
}

fn compile_step(step: &Step, graph: &SceneGraph, cfg: &ProjectConfig) -> SceneResult<Plan> {
    let many = |steps: &[Step]| -> SceneResult<Vec<Plan>> {
        steps.iter().map(|s| compile_step(s, graph, cfg)).collect()
    };
    let plan = match step {
        Step::Wait { duration } => Plan::Wait(check_duration("wait.duration", *duration)?),
        Step::Tween {
            node,
            property,
            to,
            duration,
            easing,
        } => {
            let id = graph.find(node)?;
            if let Some(current) = graph.get(id, property) {
                if current.kind() != to.kind() {
                    return Err(SceneError::KindMismatch {
                        node: node.clone(),
                        property: property.clone(),
                        expected: current.kind(),
                        actual: to.kind(),
                    });
                }
            }
            Plan::Tween {
                node: id,
                property: property.clone(),
                to: to.clone(),
                duration: check_duration("tween.duration", *duration)?,
                easing: *easing,
            }
        }
        Step::Set {
            node,
            property,
            value,
        } => Plan::Set {
            node: graph.find(node)?,
            property: property.clone(),
            value: value.clone(),
        },
        Step::Reveal {
            node,
            text,
            duration,
            property,
        }
        | Step::Append {
            node,
            text,
            duration,
            property,
        } => Plan::Reveal {
            node: graph.find(node)?,
            property: property.clone(),
            text: text.chars().collect(),
            duration: check_duration("reveal.duration", *duration)?,
            append: matches!(step, Step::Append { .. }),
        },
        Step::Select {
            node,
            first_line,
            last_line,
            duration,
        } => {
            if let Some(last) = last_line {
                if last < first_line {
                    return Err(SceneError::invalid(
                        "select.last_line",
                        last,
                        format!("must not precede first_line {first_line}"),
                    ));
                }
            }
            Plan::Select {
                node: graph.find(node)?,
                first_line: *first_line,
                last_line: *last_line,
                duration: check_duration("select.duration", *duration)?,
            }
        }
        Step::SlideIn {
            direction,
            duration,
        } => {
            let root = graph.root();
            let from = direction.entry_offset(cfg.width as f32, cfg.height as f32);
            Plan::Sequence(vec![
                Plan::Set {
                    node: root,
                    property: "position".into(),
                    value: Value::Vec2(from),
                },
                Plan::Tween {
                    node: root,
                    property: "position".into(),
                    to: Value::Vec2([0.0, 0.0]),
                    duration: check_duration("slide_in.duration", *duration)?,
                    easing: Easing::default(),
                },
            ])
        }
        Step::Blink { node, half_period } => {
            if !half_period.is_finite() || *half_period <= 0.0 {
                return Err(SceneError::invalid(
                    "blink.half_period",
                    half_period,
                    "must be a positive number of seconds",
                ));
            }
            blink_plan(graph.find(node)?, *half_period)
        }
        Step::Loop { body } => {
            let body = many(body)?;
            let cycle = body.iter().map(Plan::min_duration).sum::<f64>();
            if cycle <= 0.0 {
                return Err(SceneError::invalid(
                    "loop.body",
                    format!("{cycle}s"),
                    "a loop body must take time",
                ));
            }
            Plan::Loop(body)
        }
        Step::Sequence { steps } => Plan::Sequence(many(steps)?),
        Step::All { steps } => Plan::All(many(steps)?),
        Step::Fork { step, label } => Plan::Fork {
            plan: Box::new(compile_step(step, graph, cfg)?),
            label: label.clone(),
        },
        Step::Cancel { label } => Plan::Cancel(label.clone()),
    };
    Ok(plan)
}

/// Opacity 1 immediately, then forever: 0 over `half_period`, 1 over `half_period`.
pub fn blink_plan(node: NodeId, half_period: f64) -> Plan {
    let fade = |to: f32| Plan::Tween {
        node,
        property: "opacity".into(),
        to: Value::Scalar(to),
        duration: half_period,
        easing: Easing::default(),
    };
    Plan::Sequence(vec![
        Plan::Set {
            node,
            property: "opacity".into(),
            value: Value::Scalar(1.0),
        },
        Plan::Loop(vec![fade(0.0), fade(1.0)]),
    ])
}
