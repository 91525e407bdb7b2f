//! Identifiers and simple allocators for scene entities.

use serde::{Deserialize, Serialize};

/// Index of a node inside a [`SceneGraph`](crate::node::SceneGraph) arena.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Handle of a top-level task owned by a [`Scheduler`](crate::scheduler::Scheduler).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u32);

/// Monotonic allocator for NodeId and TaskId.
/// Dense indices keep the node arena a plain Vec; IDs are opaque externally.
#[derive(Clone, Default, Debug)]
pub struct IdAllocator {
    next_node: u32,
    next_task: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_node(&mut self) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node = self.next_node.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_task(&mut self) -> TaskId {
        let id = TaskId(self.next_task);
        self.next_task = self.next_task.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc_node(), NodeId(0));
        assert_eq!(alloc.alloc_node(), NodeId(1));
        assert_eq!(alloc.alloc_task(), TaskId(0));
        assert_eq!(alloc.alloc_task(), TaskId(1));
        alloc.reset();
        assert_eq!(alloc.alloc_node(), NodeId(0));
    }
}
