//! Conversion between image space and drawing space cell indices
//!
//! Image rows are counted top to bottom while drawing rows are counted bottom
//! to top. Keeping the flip in one place makes the convention auditable.

/// Map a row index between image space and drawing space
///
/// The mapping is its own inverse, so the same call converts in either
/// direction. `rows` is the total number of cell rows and `row` must be less
/// than it; an out-of-range row yields `None`.
pub const fn flip_row(row: usize, rows: usize) -> Option<usize> {
    if row < rows {
        Some(rows - 1 - row)
    } else {
        None
    }
}

/// Pixel rectangle `[x0, x0 + length) x [y0, y0 + length)` covered by a cell
///
/// `column` and `row` are image-space cell indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellBounds {
    /// Leftmost pixel column
    pub x0: usize,
    /// Topmost pixel row
    pub y0: usize,
    /// Side length in pixels
    pub length: usize,
}

impl CellBounds {
    /// Bounds of the cell at image-space indices `(column, row)`
    pub const fn new(column: usize, row: usize, length: usize) -> Self {
        Self {
            x0: column * length,
            y0: row * length,
            length,
        }
    }

    /// Iterate every pixel coordinate inside the cell in scan order
    pub fn pixels(self) -> impl Iterator<Item = (usize, usize)> {
        (self.y0..self.y0 + self.length)
            .flat_map(move |y| (self.x0..self.x0 + self.length).map(move |x| (x, y)))
    }
}

/// Number of whole cells along an axis of `extent` pixels
///
/// Trailing pixels that do not fill a cell are dropped. Returns zero when
/// `length` is zero.
pub const fn whole_cells(extent: usize, length: usize) -> usize {
    if length == 0 { 0 } else { extent / length }
}
