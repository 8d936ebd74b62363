//! Spatial data structures for maze fields and node graphs
//!
//! This module contains:
//! - The pixel oracle abstraction and its grid-backed implementation
//! - The node arena with row and column indexes

/// Node arena, positions and axis indexes
pub mod graph;
/// Open/blocked pixel queries
pub mod oracle;

pub use graph::{MazeGraph, Node, NodeId, Position};
pub use oracle::{OpenField, PixelOracle};
