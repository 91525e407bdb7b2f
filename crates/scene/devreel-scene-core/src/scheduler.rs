//! Cooperative scheduler on a logical clock.
//!
//! Tasks sit in a min-heap keyed by wake time (ties broken by insertion
//! order). [`Scheduler::advance_to`] resumes every task due at or before the
//! target time, setting the clock to each task's own wake time, so step
//! boundaries are exact rather than rounded to frames.
//!
//! Ownership rules:
//! - the main task belongs to the scene and is never cancelled by a fork;
//! - forked tasks are registered here and cancelled explicitly, by label,
//!   by pre-emption, or all at once at teardown;
//! - a task owns every property it has tweened or set; when another task
//!   starts writing that property, a forked owner is cancelled.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use log::{debug, warn};

use crate::error::{SceneError, SceneResult};
use crate::ids::{IdAllocator, NodeId, TaskId};
use crate::node::SceneGraph;
use crate::outputs::Change;
use crate::plan::Plan;
use crate::routine::{Cx, Effect, Poll, Routine};

#[derive(Copy, Clone, Debug)]
struct Wake {
    at: f64,
    seq: u64,
    task: TaskId,
}

impl PartialEq for Wake {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Wake {}

impl PartialOrd for Wake {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Wake {
    fn cmp(&self, other: &Self) -> Ordering {
        self.at
            .total_cmp(&other.at)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

#[derive(Debug)]
struct Task {
    routine: Routine,
    forked: bool,
    label: Option<String>,
}

#[derive(Debug)]
pub struct Scheduler {
    ids: IdAllocator,
    now: f64,
    frame_dt: f64,
    seq: u64,
    queue: BinaryHeap<Reverse<Wake>>,
    tasks: hashbrown::HashMap<TaskId, Task>,
    labels: hashbrown::HashMap<String, TaskId>,
    claims: hashbrown::HashMap<(NodeId, String), TaskId>,
    completed: hashbrown::HashMap<TaskId, f64>,
    log: Vec<Change>,
}

impl Scheduler {
    /// `frame_dt` is the interval at which running tweens publish intermediate values.
    pub fn new(frame_dt: f64) -> Self {
        Self {
            ids: IdAllocator::new(),
            now: 0.0,
            frame_dt,
            seq: 0,
            queue: BinaryHeap::new(),
            tasks: hashbrown::HashMap::new(),
            labels: hashbrown::HashMap::new(),
            claims: hashbrown::HashMap::new(),
            completed: hashbrown::HashMap::new(),
            log: Vec::new(),
        }
    }

    #[inline]
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Start a main (non-forked) task at the current time.
    pub fn spawn(&mut self, plan: Plan) -> TaskId {
        self.spawn_task(plan, false, None)
    }

    /// Start a forked task at the current time. Re-using a live label cancels
    /// the task that held it.
    pub fn fork(&mut self, plan: Plan, label: Option<String>) -> TaskId {
        self.spawn_task(plan, true, label)
    }

    fn spawn_task(&mut self, plan: Plan, forked: bool, label: Option<String>) -> TaskId {
        let id = self.ids.alloc_task();
        if let Some(l) = &label {
            if let Some(previous) = self.labels.get(l).copied() {
                debug!("label {l:?} moves from task {previous:?} to {id:?}");
                self.cancel(previous);
            }
            self.labels.insert(l.clone(), id);
        }
        debug!(
            "spawn task {id:?} (forked: {forked}, label: {label:?}) at {:.3}s",
            self.now
        );
        self.tasks.insert(
            id,
            Task {
                routine: Routine::start(plan),
                forked,
                label,
            },
        );
        self.push(self.now, id);
        id
    }

    fn push(&mut self, at: f64, task: TaskId) {
        self.seq += 1;
        self.queue.push(Reverse(Wake {
            at,
            seq: self.seq,
            task,
        }));
    }

    pub fn is_alive(&self, id: TaskId) -> bool {
        self.tasks.contains_key(&id)
    }

    /// Completion time of a main task.
    pub fn completed_at(&self, id: TaskId) -> Option<f64> {
        self.completed.get(&id).copied()
    }

    /// Number of forked tasks still running.
    pub fn forked_count(&self) -> usize {
        self.tasks.values().filter(|t| t.forked).count()
    }

    /// Task currently holding a fork label.
    pub fn labelled(&self, label: &str) -> Option<TaskId> {
        self.labels.get(label).copied()
    }

    /// Earliest pending wake time of a live task.
    pub fn next_wake(&mut self) -> Option<f64> {
        while let Some(Reverse(w)) = self.queue.peek() {
            if self.tasks.contains_key(&w.task) {
                return Some(w.at);
            }
            self.queue.pop();
        }
        None
    }

    /// Every property write since the log was last cleared, in order.
    pub fn changes(&self) -> &[Change] {
        &self.log
    }

    pub fn clear_changes(&mut self) {
        self.log.clear();
    }

    /// Resume every task due at or before `t`, then set the clock to `t`.
    pub fn advance_to(&mut self, t: f64, graph: &mut SceneGraph) -> SceneResult<()> {
        if !t.is_finite() || t < self.now {
            return Err(SceneError::invalid(
                "time",
                t,
                format!("clock is at {} and cannot run backwards", self.now),
            ));
        }
        while let Some(Reverse(wake)) = self.queue.peek().copied() {
            if wake.at > t {
                break;
            }
            self.queue.pop();
            let Some(mut task) = self.tasks.remove(&wake.task) else {
                continue;
            };
            self.now = self.now.max(wake.at);

            let mut effects = Vec::new();
            let poll = {
                let mut cx = Cx {
                    now: self.now,
                    frame_dt: self.frame_dt,
                    task: wake.task,
                    graph: &mut *graph,
                    log: &mut self.log,
                    claims: &mut self.claims,
                    effects: &mut effects,
                };
                task.routine.resume(&mut cx)
            };
            let poll = match poll {
                Ok(poll) => poll,
                Err(err) => {
                    warn!("task {:?} failed at {:.3}s: {err}", wake.task, self.now);
                    return Err(err);
                }
            };

            // Effects first: tasks spawned here queue ahead of the resumed one.
            self.apply(wake.task, effects);
            match poll {
                Poll::Done => {
                    debug!("task {:?} finished at {:.3}s", wake.task, self.now);
                    self.release_claims(wake.task);
                    if !task.forked {
                        self.completed.insert(wake.task, self.now);
                    }
                    if let Some(l) = &task.label {
                        if self.labels.get(l) == Some(&wake.task) {
                            self.labels.remove(l);
                        }
                    }
                }
                Poll::Sleep(at) => {
                    self.tasks.insert(wake.task, task);
                    self.push(at.max(self.now), wake.task);
                }
            }
        }
        self.now = t;
        Ok(())
    }

    fn apply(&mut self, current: TaskId, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Spawn { plan, label } => {
                    self.fork(plan, label);
                }
                Effect::CancelLabel(label) => {
                    if !self.cancel_label(&label) {
                        debug!("cancel {label:?}: no running fork holds it");
                    }
                }
                Effect::Preempt(owner) => {
                    let forked = self.tasks.get(&owner).map_or(false, |t| t.forked);
                    if forked && owner != current {
                        debug!("task {owner:?} pre-empted by {current:?}");
                        self.cancel(owner);
                    }
                }
            }
        }
    }

    /// Cancel a task. Returns false when it was not running.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.remove(&id) else {
            return false;
        };
        if let Some(l) = &task.label {
            if self.labels.get(l) == Some(&id) {
                self.labels.remove(l);
            }
        }
        self.release_claims(id);
        debug!("cancel task {id:?} at {:.3}s", self.now);
        true
    }

    fn release_claims(&mut self, id: TaskId) {
        self.claims.retain(|_, owner| *owner != id);
    }

    /// Task currently animating `node.property`.
    pub fn owner(&self, node: NodeId, property: &str) -> Option<TaskId> {
        self.claims.get(&(node, property.to_string())).copied()
    }

    /// Cancel the fork holding `label`.
    pub fn cancel_label(&mut self, label: &str) -> bool {
        match self.labels.get(label).copied() {
            Some(id) => self.cancel(id),
            None => false,
        }
    }

    /// Teardown: cancel every forked task, returning how many were running.
    pub fn cancel_forks(&mut self) -> usize {
        let forked: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, t)| t.forked)
            .map(|(id, _)| *id)
            .collect();
        for id in &forked {
            self.cancel(*id);
        }
        forked.len()
    }
}
