//! Edge discovery between nodes sharing a row or a column
//!
//! Only consecutive entries of an axis bucket are tested. Any node lying
//! between two same-line nodes is itself in the bucket, so a longer-range
//! edge would always pass through it.

use log::debug;

use crate::io::error::Result;
use crate::spatial::{MazeGraph, NodeId, PixelOracle, Position};

/// Whether two positions on a shared line have only open pixels between them
///
/// Positions sharing neither axis are never connected.
///
/// # Errors
///
/// Returns an error if the oracle rejects a position inside its own bounds
pub fn are_connected<O: PixelOracle + ?Sized>(oracle: &O, a: Position, b: Position) -> Result<bool> {
    if !a.is_aligned_with(b) {
        return Ok(false);
    }
    for pixel in a.between(b) {
        if !oracle.open_at(pixel)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Node pairs that are direct neighbours along some column or row
///
/// Columns are listed first (ascending x), then rows (ascending y). Within a
/// bucket pairs follow the bucket order.
pub fn candidate_pairs(graph: &MazeGraph) -> Vec<(NodeId, NodeId)> {
    graph
        .columns()
        .chain(graph.rows())
        .flat_map(|(_, bucket)| {
            bucket.windows(2).filter_map(|pair| match pair {
                [a, b] => Some((*a, *b)),
                _ => None,
            })
        })
        .collect()
}

/// Add an undirected edge for every unobstructed candidate pair
///
/// Returns the number of edges added.
///
/// # Errors
///
/// Returns an error only if the oracle contradicts its declared dimensions
pub fn connect<O: PixelOracle + ?Sized>(oracle: &O, graph: &mut MazeGraph) -> Result<usize> {
    let mut edges = Vec::new();
    for (a, b) in candidate_pairs(graph) {
        let (Some(from), Some(to)) = (graph.position(a), graph.position(b)) else {
            continue;
        };
        if are_connected(oracle, from, to)? {
            edges.push((a, b));
        }
    }

    for &(a, b) in &edges {
        graph.connect(a, b);
    }

    debug!(
        "Connected {} of {} nodes with {} edges",
        graph.nodes().filter(|(_, node)| node.degree() > 0).count(),
        graph.len(),
        edges.len()
    );
    Ok(edges.len())
}
