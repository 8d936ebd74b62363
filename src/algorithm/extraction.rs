//! Node discovery over an open-pixel field
//!
//! A pixel becomes a node when it is open and is not a plain corridor pixel.
//! Corridor pixels are the ones with exactly two open neighbours lying on the
//! same axis; everything else that is open (dead ends, turns, junctions and
//! isolated pixels) is kept.

use log::debug;

use crate::io::error::Result;
use crate::spatial::{MazeGraph, PixelOracle, Position};

/// In-bounds 4-connected neighbours of `position`, in right, down, left, up order
pub fn neighbours<O: PixelOracle + ?Sized>(oracle: &O, position: Position) -> Vec<Position> {
    let (width, height) = oracle.dimensions();
    let Position { x, y } = position;

    [
        x.checked_add(1).map(|nx| Position::new(nx, y)),
        y.checked_add(1).map(|ny| Position::new(x, ny)),
        x.checked_sub(1).map(|nx| Position::new(nx, y)),
        y.checked_sub(1).map(|ny| Position::new(x, ny)),
    ]
    .into_iter()
    .flatten()
    .filter(|candidate| candidate.x < width && candidate.y < height)
    .collect()
}

/// Open in-bounds 4-connected neighbours of `position`
///
/// # Errors
///
/// Returns an error if the oracle rejects a position inside its own bounds
pub fn open_neighbours<O: PixelOracle + ?Sized>(
    oracle: &O,
    position: Position,
) -> Result<Vec<Position>> {
    let mut open = Vec::with_capacity(4);
    for candidate in neighbours(oracle, position) {
        if oracle.open_at(candidate)? {
            open.push(candidate);
        }
    }
    Ok(open)
}

/// Decide whether an open pixel is a node given its open neighbours
///
/// Two neighbours make a node only when they differ in both coordinates,
/// which happens at a turn. Any other count always makes a node.
pub fn is_node_shape(open: &[Position]) -> bool {
    match open {
        [a, b] => a.x != b.x && a.y != b.y,
        _ => true,
    }
}

/// Whether the pixel at `position` is a graph node
///
/// # Errors
///
/// Returns an error if `position` or one of its neighbours is rejected by the oracle
pub fn is_node<O: PixelOracle + ?Sized>(oracle: &O, position: Position) -> Result<bool> {
    if !oracle.open_at(position)? {
        return Ok(false);
    }
    Ok(is_node_shape(&open_neighbours(oracle, position)?))
}

/// Scan the field row by row and collect every node
///
/// Nodes are created in row-major order so every axis bucket is filled in
/// ascending order. An all-blocked field yields an empty graph.
///
/// # Errors
///
/// Returns an error only if the oracle contradicts its declared dimensions
pub fn extract<O: PixelOracle + ?Sized>(oracle: &O) -> Result<MazeGraph> {
    let (width, height) = oracle.dimensions();
    let mut graph = MazeGraph::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let position = Position::new(x, y);
            if is_node(oracle, position)? {
                graph.add_node(position);
            }
        }
    }

    debug!(
        "Extracted {} nodes from {width}x{height} field",
        graph.len()
    );
    Ok(graph)
}
