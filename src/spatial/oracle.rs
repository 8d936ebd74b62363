//! Open/blocked pixel queries over a maze field

use ndarray::Array2;

use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::spatial::graph::Position;

/// Read-only view of which pixels of a maze are passable
///
/// Implementations must answer [`PixelOracle::is_open`] for every position in
/// `[0, width) x [0, height)`. Callers never ask about anything outside.
pub trait PixelOracle {
    /// Field size as (width, height)
    fn dimensions(&self) -> (u32, u32);

    /// Whether the pixel at `position` is passable
    fn is_open(&self, position: Position) -> bool;

    /// Whether `position` lies inside the declared bounds
    fn contains(&self, position: Position) -> bool {
        let (width, height) = self.dimensions();
        position.x < width && position.y < height
    }

    /// Bounds-checked variant of [`PixelOracle::is_open`]
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::MalformedOracle`] if `position` is outside the
    /// declared dimensions
    fn open_at(&self, position: Position) -> Result<bool> {
        if self.contains(position) {
            Ok(self.is_open(position))
        } else {
            Err(MazeError::MalformedOracle {
                position,
                dimensions: self.dimensions(),
            })
        }
    }
}

/// Boolean open-pixel grid, stored row-major as `(y, x)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenField {
    cells: Array2<bool>,
}

impl OpenField {
    /// Create a field with every pixel blocked
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: Array2::from_elem((height as usize, width as usize), false),
        }
    }

    /// Build a field by asking `is_open` about every position
    pub fn from_fn<F>(width: u32, height: u32, mut is_open: F) -> Self
    where
        F: FnMut(Position) -> bool,
    {
        let cells = Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
            is_open(Position::new(x as u32, y as u32))
        });
        Self { cells }
    }

    /// Parse a text drawing where `#` marks a wall and any other character is open
    ///
    /// # Errors
    ///
    /// Returns an error if the rows differ in length
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.chars().count());
        if let Some(ragged) = rows.iter().find(|row| row.chars().count() != width) {
            return Err(invalid_parameter(
                "rows",
                ragged,
                &format!("every row must be {width} characters wide"),
            ));
        }

        let cells = Array2::from_shape_fn((rows.len(), width), |(y, x)| {
            rows.get(y)
                .and_then(|row| row.chars().nth(x))
                .is_some_and(|c| c != '#')
        });
        Ok(Self { cells })
    }

    /// Mark a pixel open or blocked, ignoring positions outside the field
    pub fn set_open(&mut self, position: Position, open: bool) {
        if let Some(cell) = self
            .cells
            .get_mut((position.y as usize, position.x as usize))
        {
            *cell = open;
        }
    }

    /// Number of open pixels
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|&&open| open).count()
    }
}

impl PixelOracle for OpenField {
    fn dimensions(&self) -> (u32, u32) {
        let (height, width) = self.cells.dim();
        (width as u32, height as u32)
    }

    fn is_open(&self, position: Position) -> bool {
        self.cells
            .get((position.y as usize, position.x as usize))
            .copied()
            .unwrap_or(false)
    }
}
