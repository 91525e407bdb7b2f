//! Runtime state machines for plans.
//!
//! Every plan becomes a [`Routine`] when it starts. The scheduler resumes a
//! routine at its wake time; `resume` performs the writes due at that instant
//! and answers [`Poll::Done`] or [`Poll::Sleep`] with the next wake time.
//! Composite routines drive their children inline, so a sequence or parallel
//! group is a single scheduler task.

use log::debug;

use crate::error::{SceneError, SceneResult};
use crate::ids::{NodeId, TaskId};
use crate::node::SceneGraph;
use crate::outputs::Change;
use crate::plan::Plan;
use crate::reveal::RevealState;
use crate::tween::TweenState;
use crate::value::Value;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Poll {
    Done,
    /// Resume no earlier than this absolute time.
    Sleep(f64),
}

/// Side effect a routine requests from the scheduler. Effects are applied in
/// request order after `resume` returns.
#[derive(Debug)]
pub(crate) enum Effect {
    Spawn { plan: Plan, label: Option<String> },
    CancelLabel(String),
    /// The resuming task took over a property claimed by this task.
    Preempt(TaskId),
}

/// Everything a routine may touch while it is resumed.
pub(crate) struct Cx<'a> {
    pub now: f64,
    pub frame_dt: f64,
    pub task: TaskId,
    pub graph: &'a mut SceneGraph,
    pub log: &'a mut Vec<Change>,
    pub claims: &'a mut hashbrown::HashMap<(NodeId, String), TaskId>,
    pub effects: &'a mut Vec<Effect>,
}

impl Cx<'_> {
    /// Write a property and record the change.
    pub fn write(&mut self, node: NodeId, property: &str, value: Value) -> SceneResult<()> {
        self.graph.set(node, property, value.clone())?;
        self.log.push(Change {
            time: self.now,
            node,
            target: self.graph.label(node),
            property: property.to_string(),
            value,
        });
        Ok(())
    }

    /// Take ownership of a property for the resuming task. A different task
    /// that owned it is reported for pre-emption.
    pub fn claim(&mut self, node: NodeId, property: &str) {
        let previous = self.claims.insert((node, property.to_string()), self.task);
        if let Some(owner) = previous {
            if owner != self.task {
                self.effects.push(Effect::Preempt(owner));
            }
        }
    }

    /// Start of the first frame strictly after `now`.
    pub fn next_frame(&self) -> f64 {
        let k = (self.now / self.frame_dt + 1e-9).floor() + 1.0;
        k * self.frame_dt
    }
}

#[derive(Debug)]
pub(crate) enum Routine {
    Wait {
        duration: f64,
        until: Option<f64>,
    },
    Tween(TweenState),
    Set {
        node: NodeId,
        property: String,
        value: Value,
    },
    Reveal(RevealState),
    Select {
        node: NodeId,
        first_line: u32,
        last_line: Option<u32>,
        duration: f64,
        tween: Option<TweenState>,
    },
    Sequence {
        plans: Vec<Plan>,
        next: usize,
        current: Option<Box<Routine>>,
    },
    All {
        children: Vec<Child>,
    },
    Loop {
        body: Vec<Plan>,
        current: Option<Box<Routine>>,
        cycle_start: f64,
    },
    Fork {
        plan: Option<Plan>,
        label: Option<String>,
    },
    Cancel(String),
}

/// Parallel group member with its own wake time.
#[derive(Debug)]
pub(crate) struct Child {
    routine: Routine,
    wake: Option<f64>,
    done: bool,
}

impl Routine {
    pub fn start(plan: Plan) -> Routine {
        match plan {
            Plan::Wait(duration) => Routine::Wait {
                duration,
                until: None,
            },
            Plan::Tween {
                node,
                property,
                to,
                duration,
                easing,
            } => Routine::Tween(TweenState::new(node, property, to, duration, easing)),
            Plan::Set {
                node,
                property,
                value,
            } => Routine::Set {
                node,
                property,
                value,
            },
            Plan::Reveal {
                node,
                property,
                text,
                duration,
                append,
            } => Routine::Reveal(RevealState::new(node, property, text, duration, append)),
            Plan::Select {
                node,
                first_line,
                last_line,
                duration,
            } => Routine::Select {
                node,
                first_line,
                last_line,
                duration,
                tween: None,
            },
            Plan::Sequence(plans) => Routine::Sequence {
                plans,
                next: 0,
                current: None,
            },
            Plan::All(plans) => Routine::All {
                children: plans
                    .into_iter()
                    .map(|p| Child {
                        routine: Routine::start(p),
                        wake: None,
                        done: false,
                    })
                    .collect(),
            },
            Plan::Loop(body) => Routine::Loop {
                body,
                current: None,
                cycle_start: 0.0,
            },
            Plan::Fork { plan, label } => Routine::Fork {
                plan: Some(*plan),
                label,
            },
            Plan::Cancel(label) => Routine::Cancel(label),
        }
    }

    pub(crate) fn resume(&mut self, cx: &mut Cx<'_>) -> SceneResult<Poll> {
        match self {
            Routine::Wait { duration, until } => {
                let end = *until.get_or_insert(cx.now + *duration);
                if cx.now >= end {
                    Ok(Poll::Done)
                } else {
                    Ok(Poll::Sleep(end))
                }
            }
            Routine::Tween(tween) => tween.resume(cx),
            Routine::Set {
                node,
                property,
                value,
            } => {
                cx.claim(*node, property);
                cx.write(*node, property, value.clone())?;
                Ok(Poll::Done)
            }
            Routine::Reveal(reveal) => reveal.resume(cx),
            Routine::Select {
                node,
                first_line,
                last_line,
                duration,
                tween,
            } => {
                if tween.is_none() {
                    let lines = cx
                        .graph
                        .get(*node, "code")
                        .and_then(Value::as_text)
                        .map(|code| code.lines().count().max(1))
                        .unwrap_or(1) as u32;
                    let last_index = lines - 1;
                    let last = last_line.unwrap_or(last_index).min(last_index);
                    let first = (*first_line).min(last);
                    if cx.graph.get(*node, "selection").is_none() {
                        // Code starts fully selected.
                        cx.write(*node, "selection", Value::Vec2([0.0, last_index as f32]))?;
                    }
                    *tween = Some(TweenState::new(
                        *node,
                        "selection".into(),
                        Value::Vec2([first as f32, last as f32]),
                        *duration,
                        Default::default(),
                    ));
                }
                match tween {
                    Some(t) => t.resume(cx),
                    None => Ok(Poll::Done),
                }
            }
            Routine::Sequence {
                plans,
                next,
                current,
            } => loop {
                if current.is_none() {
                    if *next >= plans.len() {
                        return Ok(Poll::Done);
                    }
                    let plan = plans[*next].clone();
                    *next += 1;
                    *current = Some(Box::new(Routine::start(plan)));
                }
                if let Some(routine) = current {
                    match routine.resume(cx)? {
                        Poll::Done => *current = None,
                        sleep => return Ok(sleep),
                    }
                }
            },
            Routine::All { children } => {
                let mut earliest: Option<f64> = None;
                for child in children.iter_mut().filter(|c| !c.done) {
                    let due = child.wake.map_or(true, |w| w <= cx.now);
                    if due {
                        match child.routine.resume(cx)? {
                            Poll::Done => {
                                child.done = true;
                                child.wake = None;
                                continue;
                            }
                            Poll::Sleep(t) => child.wake = Some(t),
                        }
                    }
                    if let Some(w) = child.wake {
                        earliest = Some(earliest.map_or(w, |e: f64| e.min(w)));
                    }
                }
                Ok(earliest.map_or(Poll::Done, Poll::Sleep))
            }
            Routine::Loop {
                body,
                current,
                cycle_start,
            } => loop {
                if current.is_none() {
                    *cycle_start = cx.now;
                    *current = Some(Box::new(Routine::start(Plan::Sequence(body.clone()))));
                }
                if let Some(routine) = current {
                    match routine.resume(cx)? {
                        Poll::Done => {
                            if cx.now <= *cycle_start {
                                return Err(SceneError::invalid(
                                    "loop.body",
                                    "0s",
                                    "a loop body must take time",
                                ));
                            }
                            *current = None;
                        }
                        sleep => return Ok(sleep),
                    }
                }
            },
            // Yield once so the forked task runs before the rest of this one.
            Routine::Fork { plan, label } => match plan.take() {
                Some(plan) => {
                    debug!("task {:?} forks {:?} at {:.3}s", cx.task, label, cx.now);
                    cx.effects.push(Effect::Spawn {
                        plan,
                        label: label.clone(),
                    });
                    Ok(Poll::Sleep(cx.now))
                }
                None => Ok(Poll::Done),
            },
            Routine::Cancel(label) => {
                cx.effects.push(Effect::CancelLabel(label.clone()));
                Ok(Poll::Done)
            }
        }
    }
}
