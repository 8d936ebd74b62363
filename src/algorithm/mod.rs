/// Edge discovery between same-line nodes
pub mod connectivity;
/// Node discovery over an open-pixel field
pub mod extraction;
/// Greedy heuristic walk from entry to exit
pub mod pathfinder;
/// Per-pass traversal state
pub mod scratch;
/// Extraction, connection and traversal pipeline
pub mod solver;
