//! Text-reveal sequencer ("typing" effect).
//!
//! Shows `base + S[0:i]` for `i = 0..=n`, spacing the states evenly so that
//! state `i` appears at `start + D * i / n`. The last state lands exactly on
//! `start + D`, which is also when the step completes. An empty string shows
//! one state and completes without suspending.

use crate::error::SceneResult;
use crate::ids::NodeId;
use crate::routine::{Cx, Poll};
use crate::value::Value;

#[derive(Debug)]
pub(crate) struct RevealState {
    node: NodeId,
    property: String,
    chars: Vec<char>,
    duration: f64,
    /// Keep the node's existing text and type after it.
    append: bool,
    start: f64,
    base: Option<String>,
    /// Number of characters currently shown.
    i: usize,
}

impl RevealState {
    pub fn new(
        node: NodeId,
        property: String,
        chars: Vec<char>,
        duration: f64,
        append: bool,
    ) -> Self {
        Self {
            node,
            property,
            chars,
            duration,
            append,
            start: 0.0,
            base: None,
            i: 0,
        }
    }

    fn displayed(&self) -> String {
        let base = self.base.as_deref().unwrap_or("");
        let mut out = String::with_capacity(base.len() + self.i * 4);
        out.push_str(base);
        out.extend(&self.chars[..self.i]);
        out
    }

    /// Absolute time at which state `i` is shown.
    fn due(&self, i: usize) -> f64 {
        let n = self.chars.len();
        if i >= n {
            self.start + self.duration
        } else {
            self.start + self.duration * i as f64 / n as f64
        }
    }

    pub fn resume(&mut self, cx: &mut Cx<'_>) -> SceneResult<Poll> {
        if self.base.is_none() {
            let base = if self.append {
                cx.graph
                    .get(self.node, &self.property)
                    .and_then(Value::as_text)
                    .unwrap_or("")
                    .to_string()
            } else {
                String::new()
            };
            self.base = Some(base);
            self.start = cx.now;
            cx.claim(self.node, &self.property);
        }

        loop {
            cx.write(self.node, &self.property, Value::Text(self.displayed()))?;
            if self.i >= self.chars.len() {
                return Ok(Poll::Done);
            }
            self.i += 1;
            let wake = self.due(self.i);
            if wake > cx.now {
                return Ok(Poll::Sleep(wake));
            }
        }
    }
}
