//! Extraction, connection and traversal wired into one pipeline

use log::info;

use crate::algorithm::connectivity::connect;
use crate::algorithm::extraction::extract;
use crate::algorithm::pathfinder::{SearchOutcome, endpoints, find_path};
use crate::io::error::Result;
use crate::spatial::{MazeGraph, NodeId, PixelOracle};

/// Node graph of a maze, ready to be solved
///
/// Building the solver runs extraction and connection once. Every call to
/// [`MazeSolver::solve`] starts from fresh traversal state, so repeated calls
/// give the same outcome.
#[derive(Debug, Clone)]
pub struct MazeSolver {
    graph: MazeGraph,
}

impl MazeSolver {
    /// Extract nodes from the oracle and connect them
    ///
    /// # Errors
    ///
    /// Returns an error only if the oracle contradicts its declared dimensions
    pub fn new<O: PixelOracle + ?Sized>(oracle: &O) -> Result<Self> {
        let mut graph = extract(oracle)?;
        let edges = connect(oracle, &mut graph)?;

        let (width, height) = graph.dimensions();
        info!(
            "Built graph for {width}x{height} maze: {} nodes, {edges} edges",
            graph.len()
        );

        Ok(Self { graph })
    }

    /// Wrap an already connected graph
    pub const fn from_graph(graph: MazeGraph) -> Self {
        Self { graph }
    }

    /// The node and edge set
    pub const fn graph(&self) -> &MazeGraph {
        &self.graph
    }

    /// Entry and exit nodes
    ///
    /// # Errors
    ///
    /// Returns [`crate::MazeError::EmptyMaze`] if the top or bottom row has no node
    pub fn endpoints(&self) -> Result<(NodeId, NodeId)> {
        endpoints(&self.graph)
    }

    /// Walk from the entry to the exit
    ///
    /// # Errors
    ///
    /// Returns [`crate::MazeError::EmptyMaze`] if the top or bottom row has no node
    pub fn solve(&self) -> Result<SearchOutcome> {
        find_path(&self.graph)
    }

    /// Give up the solver and keep the graph
    pub fn into_graph(self) -> MazeGraph {
        self.graph
    }
}
