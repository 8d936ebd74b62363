//! Mathematical utilities for the algorithm

/// Manhattan distance between grid positions
pub mod distance;
