//! Property tween: interpolate from the value current at start to a target.

use crate::error::{SceneError, SceneResult};
use crate::ids::NodeId;
use crate::interp::functions::interpolate;
use crate::interp::Easing;
use crate::routine::{Cx, Poll};
use crate::value::Value;

#[derive(Debug)]
pub(crate) struct TweenState {
    node: NodeId,
    property: String,
    to: Value,
    duration: f64,
    easing: Easing,
    start: f64,
    /// Captured on first resume; `None` until the tween starts.
    from: Option<Value>,
}

impl TweenState {
    pub fn new(node: NodeId, property: String, to: Value, duration: f64, easing: Easing) -> Self {
        Self {
            node,
            property,
            to,
            duration,
            easing,
            start: 0.0,
            from: None,
        }
    }

    fn mismatch(&self, cx: &Cx<'_>, expected: &Value) -> SceneError {
        SceneError::KindMismatch {
            node: cx.graph.label(self.node),
            property: self.property.clone(),
            expected: expected.kind(),
            actual: self.to.kind(),
        }
    }

    /// Writes once per frame and once more, exactly, at the end time.
    pub fn resume(&mut self, cx: &mut Cx<'_>) -> SceneResult<Poll> {
        if self.from.is_none() {
            let from = cx
                .graph
                .get(self.node, &self.property)
                .cloned()
                .unwrap_or_else(|| self.to.clone());
            if from.kind() != self.to.kind() {
                return Err(self.mismatch(cx, &from));
            }
            self.start = cx.now;
            self.from = Some(from);
            cx.claim(self.node, &self.property);
        }

        let end = self.start + self.duration;
        if cx.now >= end {
            cx.write(self.node, &self.property, self.to.clone())?;
            return Ok(Poll::Done);
        }

        let Some(from) = &self.from else {
            return Ok(Poll::Done);
        };
        let t = ((cx.now - self.start) / self.duration) as f32;
        let value = match interpolate(from, &self.to, self.easing.apply(t)) {
            Ok(v) => v,
            Err(_) => return Err(self.mismatch(cx, from)),
        };
        cx.write(self.node, &self.property, value)?;
        Ok(Poll::Sleep(cx.next_frame().min(end)))
    }
}
