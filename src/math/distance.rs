//! Grid distance metrics

use crate::spatial::Position;

/// Sum of absolute coordinate differences between two positions
pub const fn manhattan(a: Position, b: Position) -> u64 {
    a.x.abs_diff(b.x) as u64 + a.y.abs_diff(b.y) as u64
}
