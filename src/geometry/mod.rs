//! Tile geometry and grid assembly
//!
//! This module contains:
//! - Point and closed polygon types
//! - The four tile templates and per-cell polygon construction
//! - Grid assembly with pattern selection strategies

/// Tile templates and per-cell polygon construction
pub mod pattern;
/// Points and closed polygon rings
pub mod polygon;
/// Grid assembly from a center matrix
pub mod tiling;

pub use pattern::TilePattern;
pub use polygon::{Point, Polygon};
pub use tiling::{CanvasSize, PatternStrategy, TilingResult};
