//! Assembly of the full tile grid from a center matrix

use log::debug;

use crate::geometry::pattern::{TilePattern, generate_tile_polygon};
use crate::geometry::polygon::Polygon;
use crate::mapping::CenterMatrix;

/// Rule choosing the tile pattern of a cell from its grid indices
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PatternStrategy {
    /// A on cells with even `column + row`, C elsewhere
    #[default]
    Checkerboard,
    /// B on cells with even `column + row`, D elsewhere
    InvertedCheckerboard,
}

impl PatternStrategy {
    /// Pattern of the cell at drawing-space indices `(column, row)`
    pub const fn pattern_for(self, column: usize, row: usize) -> TilePattern {
        let even = (column + row) % 2 == 0;
        match (self, even) {
            (Self::Checkerboard, true) => TilePattern::A,
            (Self::Checkerboard, false) => TilePattern::C,
            (Self::InvertedCheckerboard, true) => TilePattern::B,
            (Self::InvertedCheckerboard, false) => TilePattern::D,
        }
    }
}

/// Extent of the drawing in canvas units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl CanvasSize {
    /// Canvas for a `columns x rows` grid of `length` cells plus one cell of margin
    pub const fn for_grid(columns: usize, rows: usize, length: f64) -> Self {
        Self {
            width: (columns + 1) as f64 * length,
            height: (rows + 1) as f64 * length,
        }
    }
}

/// Polygons of every cell in generation order plus the canvas they sit on
#[derive(Clone, Debug, PartialEq)]
pub struct TilingResult {
    /// One polygon per cell, column-major
    pub polygons: Vec<Polygon>,
    /// Drawing extent
    pub canvas: CanvasSize,
}

/// Tile the grid with the default checkerboard of patterns A and C
pub fn assemble_tiling(centers: &CenterMatrix, length: f64) -> TilingResult {
    assemble_tiling_with(centers, length, PatternStrategy::Checkerboard)
}

/// Tile the grid, choosing each cell's pattern with `strategy`
///
/// Cell `(column, row)` is shifted to `(column * length, row * length)`.
pub fn assemble_tiling_with(
    centers: &CenterMatrix,
    length: f64,
    strategy: PatternStrategy,
) -> TilingResult {
    let (columns, rows) = centers.dim();
    let mut polygons = Vec::with_capacity(columns * rows);

    for column in 0..columns {
        for row in 0..rows {
            let Some(&center) = centers.get((column, row)) else {
                continue;
            };
            polygons.push(generate_tile_polygon(
                center,
                strategy.pattern_for(column, row),
                column as f64 * length,
                row as f64 * length,
                length,
            ));
        }
    }

    let canvas = CanvasSize::for_grid(columns, rows, length);
    debug!(
        "Assembled {} polygons on a {}x{} canvas",
        polygons.len(),
        canvas.width,
        canvas.height
    );

    TilingResult { polygons, canvas }
}
