//! Node arena with per-axis indexes
//!
//! Nodes live in a single `Vec` and are referred to by [`NodeId`]. Two ordered
//! indexes group node ids by column (x) and by row (y) so that same-line
//! neighbours can be paired without comparing every node against every other.

use std::collections::BTreeMap;
use std::fmt;

/// Pixel coordinate inside a maze image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column, growing rightwards from 0
    pub x: u32,
    /// Row, growing downwards from 0
    pub y: u32,
}

impl Position {
    /// Create a position from its column and row
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Test whether two positions share a row or a column
    pub const fn is_aligned_with(self, other: Self) -> bool {
        self.x == other.x || self.y == other.y
    }

    /// Pixels strictly between two positions on a shared row or column
    ///
    /// Yields nothing for positions that share neither axis, for equal
    /// positions and for direct neighbours. Order runs from the lower
    /// coordinate to the higher one regardless of argument order.
    pub fn between(self, other: Self) -> impl Iterator<Item = Self> {
        let (vertical, range) = if self.x == other.x {
            (true, self.y.min(other.y).saturating_add(1)..self.y.max(other.y))
        } else if self.y == other.y {
            (false, self.x.min(other.x).saturating_add(1)..self.x.max(other.x))
        } else {
            (true, 0..0)
        };

        range.map(move |value| {
            if vertical {
                Self::new(self.x, value)
            } else {
                Self::new(value, self.y)
            }
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Index of a node inside its [`MazeGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Wrap a raw arena index
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw arena index
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A junction, turn, dead end, entry or exit of the maze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    position: Position,
    connections: Vec<NodeId>,
}

impl Node {
    const fn new(position: Position) -> Self {
        Self {
            position,
            connections: Vec::new(),
        }
    }

    /// Pixel this node sits on
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Directly reachable nodes, in the order the edges were added
    pub fn connections(&self) -> &[NodeId] {
        &self.connections
    }

    /// Number of edges touching this node
    pub const fn degree(&self) -> usize {
        self.connections.len()
    }
}

/// Owning container for every node of a maze plus its axis indexes
///
/// Buckets in both indexes keep their ids ascending along the perpendicular
/// axis, so consecutive entries of a bucket are nearest neighbours on that line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGraph {
    nodes: Vec<Node>,
    columns: BTreeMap<u32, Vec<NodeId>>,
    rows: BTreeMap<u32, Vec<NodeId>>,
    dimensions: (u32, u32),
}

impl MazeGraph {
    /// Create an empty graph for a `width` x `height` image
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            nodes: Vec::new(),
            columns: BTreeMap::new(),
            rows: BTreeMap::new(),
            dimensions: (width, height),
        }
    }

    /// Image dimensions as (width, height)
    pub const fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    /// Number of nodes
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Test whether the graph has no nodes
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Register a node and file it under its column and row
    ///
    /// Insertion in row-major scan order appends to every bucket; other
    /// orders fall back to an ordered insert.
    pub fn add_node(&mut self, position: Position) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(position));

        let column = self.columns.entry(position.x).or_default();
        let at = column.partition_point(|other| {
            self.nodes
                .get(other.0)
                .is_some_and(|node| node.position.y < position.y)
        });
        column.insert(at, id);

        let row = self.rows.entry(position.y).or_default();
        let at = row.partition_point(|other| {
            self.nodes
                .get(other.0)
                .is_some_and(|node| node.position.x < position.x)
        });
        row.insert(at, id);

        id
    }

    /// Add an undirected edge between two nodes
    ///
    /// Self-loops and unknown ids are ignored.
    pub fn connect(&mut self, a: NodeId, b: NodeId) {
        if a == b || a.0 >= self.nodes.len() || b.0 >= self.nodes.len() {
            return;
        }
        if let Some(node) = self.nodes.get_mut(a.0) {
            node.connections.push(b);
        }
        if let Some(node) = self.nodes.get_mut(b.0) {
            node.connections.push(a);
        }
    }

    /// Look up a node
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Position of a node
    pub fn position(&self, id: NodeId) -> Option<Position> {
        self.node(id).map(Node::position)
    }

    /// Connections of a node, empty for unknown ids
    pub fn connections(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::connections).unwrap_or_default()
    }

    /// Test whether `a` lists `b` as a connection
    pub fn are_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.connections(a).contains(&b)
    }

    /// Every node with its id, in creation order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    /// Find the node sitting on a given pixel
    pub fn find(&self, position: Position) -> Option<NodeId> {
        let row = self.row(position.y);
        let at = row.partition_point(|id| {
            self.position(*id)
                .is_some_and(|other| other.x < position.x)
        });
        row.get(at)
            .copied()
            .filter(|id| self.position(*id) == Some(position))
    }

    /// Nodes in column `x`, ascending by y
    pub fn column(&self, x: u32) -> &[NodeId] {
        self.columns.get(&x).map(Vec::as_slice).unwrap_or_default()
    }

    /// Nodes in row `y`, ascending by x
    pub fn row(&self, y: u32) -> &[NodeId] {
        self.rows.get(&y).map(Vec::as_slice).unwrap_or_default()
    }

    /// Non-empty column buckets, ascending by x
    pub fn columns(&self) -> impl Iterator<Item = (u32, &[NodeId])> {
        self.columns
            .iter()
            .map(|(&x, bucket)| (x, bucket.as_slice()))
    }

    /// Non-empty row buckets, ascending by y
    pub fn rows(&self) -> impl Iterator<Item = (u32, &[NodeId])> {
        self.rows.iter().map(|(&y, bucket)| (y, bucket.as_slice()))
    }

    /// Every undirected edge once, as (lower id, higher id)
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> {
        self.nodes().flat_map(|(id, node)| {
            node.connections
                .iter()
                .copied()
                .filter(move |other| id < *other)
                .map(move |other| (id, other))
        })
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum::<usize>() / 2
    }
}
