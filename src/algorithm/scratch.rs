//! Per-pass traversal state kept outside the node arena
//!
//! Every traversal over a [`MazeGraph`] builds its own state here, so no pass
//! can observe marks or scores left behind by an earlier one.

use bitvec::prelude::*;

use crate::spatial::{MazeGraph, NodeId};

/// Visited flags for one pass over a graph
#[derive(Clone, Debug)]
pub struct VisitMarks {
    bits: BitVec,
}

impl VisitMarks {
    /// Create marks for a graph with every node unvisited
    pub fn new(graph: &MazeGraph) -> Self {
        Self {
            bits: bitvec![0; graph.len()],
        }
    }

    /// Mark a node visited, returning whether it was unvisited before
    pub fn visit(&mut self, id: NodeId) -> bool {
        match self.bits.get_mut(id.index()) {
            Some(mut bit) => !std::mem::replace(&mut *bit, true),
            None => false,
        }
    }

    /// Test whether a node has been visited in this pass
    pub fn is_visited(&self, id: NodeId) -> bool {
        self.bits.get(id.index()).as_deref() == Some(&true)
    }

    /// Number of visited nodes
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Connections of `id` that have not been visited yet, in connection order
    pub fn unvisited(&self, graph: &MazeGraph, id: NodeId) -> Vec<NodeId> {
        graph
            .connections(id)
            .iter()
            .copied()
            .filter(|&other| !self.is_visited(other))
            .collect()
    }
}

/// Scores and back-pointers for one pathfinding pass
///
/// `g` is the step cost from the node that last offered this one as a
/// candidate, `h` the estimate to the goal. Both start unset; `f` only exists
/// once both are known.
#[derive(Clone, Debug)]
pub struct SearchState {
    marks: VisitMarks,
    cost: Vec<Option<u64>>,
    estimate: Vec<Option<u64>>,
    came_from: Vec<Option<NodeId>>,
}

impl SearchState {
    /// Create fresh state for a graph
    pub fn new(graph: &MazeGraph) -> Self {
        let len = graph.len();
        Self {
            marks: VisitMarks::new(graph),
            cost: vec![None; len],
            estimate: vec![None; len],
            came_from: vec![None; len],
        }
    }

    /// Visited flags of this pass
    pub const fn marks(&self) -> &VisitMarks {
        &self.marks
    }

    /// Mark a node visited, returning whether it was unvisited before
    pub fn visit(&mut self, id: NodeId) -> bool {
        self.marks.visit(id)
    }

    /// Test whether a node has been visited in this pass
    pub fn is_visited(&self, id: NodeId) -> bool {
        self.marks.is_visited(id)
    }

    /// Connections of `id` not yet visited in this pass
    pub fn frontier(&self, graph: &MazeGraph, id: NodeId) -> Vec<NodeId> {
        self.marks.unvisited(graph, id)
    }

    /// Step cost `g`, if set
    pub fn g(&self, id: NodeId) -> Option<u64> {
        self.cost.get(id.index()).copied().flatten()
    }

    /// Goal estimate `h`, if set
    pub fn h(&self, id: NodeId) -> Option<u64> {
        self.estimate.get(id.index()).copied().flatten()
    }

    /// Ordering key `g + h`, once both parts are set
    pub fn f(&self, id: NodeId) -> Option<u64> {
        Some(self.g(id)?.saturating_add(self.h(id)?))
    }

    /// Overwrite `g`
    pub fn set_g(&mut self, id: NodeId, value: u64) {
        if let Some(slot) = self.cost.get_mut(id.index()) {
            *slot = Some(value);
        }
    }

    /// Set `h` with `estimate` unless it is already known
    pub fn ensure_h<F>(&mut self, id: NodeId, estimate: F)
    where
        F: FnOnce() -> u64,
    {
        if let Some(slot) = self.estimate.get_mut(id.index())
            && slot.is_none()
        {
            *slot = Some(estimate());
        }
    }

    /// Predecessor recorded for a node
    pub fn came_from(&self, id: NodeId) -> Option<NodeId> {
        self.came_from.get(id.index()).copied().flatten()
    }

    /// Record the node a candidate was offered from
    pub fn set_came_from(&mut self, id: NodeId, parent: NodeId) {
        if let Some(slot) = self.came_from.get_mut(id.index()) {
            *slot = Some(parent);
        }
    }

    /// Follow back-pointers from `id` to the root, returned root first
    ///
    /// The walk stops after as many steps as there are nodes, so a corrupt
    /// chain cannot loop forever.
    pub fn trace(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = vec![id];
        let mut current = id;
        while chain.len() <= self.came_from.len() {
            match self.came_from(current) {
                Some(parent) => {
                    chain.push(parent);
                    current = parent;
                }
                None => break,
            }
        }
        chain.reverse();
        chain
    }
}
