//! Greedy heuristic walk from the entry node to the exit node
//!
//! The walk keeps a single current node. Each step scores the unvisited
//! connections of the current node by `g + h`, where `g` is the Manhattan
//! length of that one step and `h` the Manhattan distance to the exit, and
//! moves to the cheapest one. When the walk hits a node with nothing left to
//! explore it retreats one predecessor at a time until some node offers an
//! unvisited connection again.
//!
//! Scores are local to a step rather than accumulated along the path, so the
//! route found is not necessarily the shortest one.

use log::{debug, info};

use crate::algorithm::scratch::SearchState;
use crate::io::error::{MazeError, Result};
use crate::math::distance::manhattan;
use crate::spatial::{MazeGraph, NodeId, Position};

/// Ordered node sequence from the entry node onwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    /// Wrap an entry-first node sequence
    pub const fn new(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    /// Nodes along the path, entry first
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of nodes on the path
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Test whether the path holds no nodes
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node of the path
    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Last node of the path
    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Pixel positions of the path nodes
    pub fn positions(&self, graph: &MazeGraph) -> Vec<Position> {
        self.nodes
            .iter()
            .filter_map(|&id| graph.position(id))
            .collect()
    }

    /// Total Manhattan length in pixels between consecutive nodes
    pub fn pixel_length(&self, graph: &MazeGraph) -> u64 {
        self.positions(graph)
            .windows(2)
            .map(|pair| match pair {
                [a, b] => manhattan(*a, *b),
                _ => 0,
            })
            .sum()
    }
}

/// Result of a traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The exit was reached
    Solved {
        /// Route from entry to exit
        path: Path,
    },
    /// Every option was exhausted without reaching the exit
    Exhausted {
        /// Route from entry to the last node reached before the final retreat
        trace: Path,
        /// Number of nodes visited during the search
        explored: usize,
    },
}

impl SearchOutcome {
    /// Whether the exit was reached
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }

    /// The solution, or the partial trace when no solution exists
    pub const fn path(&self) -> &Path {
        match self {
            Self::Solved { path } => path,
            Self::Exhausted { trace, .. } => trace,
        }
    }

    /// Convert a negative outcome into [`MazeError::NoPathFound`]
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::NoPathFound`] if the search was exhausted
    pub fn into_result(self, graph: &MazeGraph) -> Result<Path> {
        match self {
            Self::Solved { path } => Ok(path),
            Self::Exhausted { trace, explored } => Err(MazeError::NoPathFound {
                furthest: trace
                    .last()
                    .and_then(|id| graph.position(id))
                    .unwrap_or(Position::new(0, 0)),
                explored,
            }),
        }
    }
}

/// Entry and exit nodes of a graph
///
/// The entry is the leftmost node of the top row, the exit the leftmost node
/// of the bottom row.
///
/// # Errors
///
/// Returns [`MazeError::EmptyMaze`] naming the first of those rows that holds
/// no node
pub fn endpoints(graph: &MazeGraph) -> Result<(NodeId, NodeId)> {
    let (_, height) = graph.dimensions();
    let last_row = height.saturating_sub(1);

    let entry = graph
        .row(0)
        .first()
        .copied()
        .ok_or(MazeError::EmptyMaze { row: 0 })?;
    let goal = graph
        .row(last_row)
        .first()
        .copied()
        .ok_or(MazeError::EmptyMaze { row: last_row })?;

    Ok((entry, goal))
}

/// Run the walk between the graph's entry and exit
///
/// # Errors
///
/// Returns [`MazeError::EmptyMaze`] if the top or bottom row has no node.
/// Failing to reach the exit is reported as [`SearchOutcome::Exhausted`].
pub fn find_path(graph: &MazeGraph) -> Result<SearchOutcome> {
    let (entry, goal) = endpoints(graph)?;
    Ok(find_path_between(graph, entry, goal))
}

/// Run the walk between two arbitrary nodes with fresh search state
pub fn find_path_between(graph: &MazeGraph, entry: NodeId, goal: NodeId) -> SearchOutcome {
    walk(graph, SearchState::new(graph), entry, goal)
}

fn walk(graph: &MazeGraph, mut state: SearchState, entry: NodeId, goal: NodeId) -> SearchOutcome {
    let position = |id: NodeId| graph.position(id).unwrap_or(Position::new(0, 0));
    let goal_position = position(goal);

    info!("Entry: {}, exit: {goal_position}", position(entry));

    state.visit(entry);
    if entry == goal {
        info!("Entry is the exit");
        return SearchOutcome::Solved {
            path: Path::new(vec![entry]),
        };
    }

    let mut current = entry;
    let mut frontier = state.frontier(graph, current);

    while !frontier.is_empty() {
        debug!(
            "Current {} with frontier {:?}",
            position(current),
            frontier.iter().map(|&id| position(id)).collect::<Vec<_>>()
        );

        let current_position = position(current);
        state.set_g(current, 0);
        state.ensure_h(current, || manhattan(current_position, goal_position));

        for &candidate in &frontier {
            let candidate_position = position(candidate);
            state.set_g(candidate, manhattan(candidate_position, current_position));
            state.ensure_h(candidate, || manhattan(candidate_position, goal_position));
            state.set_came_from(candidate, current);
        }

        let Some(next) = frontier
            .iter()
            .copied()
            .min_by_key(|&candidate| state.f(candidate).unwrap_or(u64::MAX))
        else {
            break;
        };

        current = next;
        state.visit(current);
        frontier = state.frontier(graph, current);

        if current == goal {
            info!(
                "Reached the exit after visiting {} nodes",
                state.marks().count()
            );
            return SearchOutcome::Solved {
                path: Path::new(state.trace(goal)),
            };
        }

        let furthest = current;
        while frontier.is_empty() {
            debug!("Dead end at {}", position(current));
            match state.came_from(current) {
                Some(parent) => {
                    current = parent;
                    frontier = state.frontier(graph, current);
                }
                None => {
                    return exhausted(&state, furthest, &position);
                }
            }
        }
    }

    exhausted(&state, current, &position)
}

fn exhausted<F>(state: &SearchState, furthest: NodeId, position: &F) -> SearchOutcome
where
    F: Fn(NodeId) -> Position,
{
    info!(
        "No path to the exit; stopped at {} after visiting {} nodes",
        position(furthest),
        state.marks().count()
    );
    SearchOutcome::Exhausted {
        trace: Path::new(state.trace(furthest)),
        explored: state.marks().count(),
    }
}
