//! Maze solving over a graph of corridor nodes extracted from a raster image
//!
//! Open pixels that are not plain corridor (dead ends, turns and junctions)
//! become nodes, nodes sharing a row or column with nothing but open pixels
//! between them are connected, and a greedy heuristic walk with backtracking
//! looks for a route from the top row to the bottom row.

#![forbid(unsafe_code)]

/// Node extraction, connection and traversal
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Distance metrics
pub mod math;
/// Positions, pixel oracles and the node arena
pub mod spatial;

pub use algorithm::pathfinder::{Path, SearchOutcome};
pub use algorithm::solver::MazeSolver;
pub use io::error::{MazeError, Result};
pub use spatial::{MazeGraph, NodeId, OpenField, PixelOracle, Position};
