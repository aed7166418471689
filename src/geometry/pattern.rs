//! The four Truchet tile templates and per-cell polygon construction
//!
//! Each pattern is a quadrilateral in the unit cell whose fourth vertex sits on
//! a diagonal at the cell's center parameter. A and C are mirror duals and form
//! the classic two-curve motif when alternated; B and D are the complementary
//! pair for alternate tilings.

use std::fmt;
use std::str::FromStr;

use crate::geometry::polygon::{Point, Polygon};
use crate::io::error::{Result, TruchetError};

/// Tile template selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TilePattern {
    /// Lower-left triangle bent toward `(c, c)`
    A,
    /// Upper-left triangle bent toward `(c, 1 - c)`
    B,
    /// Upper-right triangle bent toward `(1 - c, 1 - c)`
    C,
    /// Lower-right triangle bent toward `(1 - c, c)`
    D,
}

impl TilePattern {
    /// All patterns in tag order
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Single-letter tag of the pattern
    pub const fn tag(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }

    /// Parse a single-letter tag, accepting either case
    ///
    /// # Errors
    ///
    /// Returns [`TruchetError::InvalidPattern`] for any tag other than A-D
    pub fn from_tag(tag: char) -> Result<Self> {
        match tag.to_ascii_uppercase() {
            'A' => Ok(Self::A),
            'B' => Ok(Self::B),
            'C' => Ok(Self::C),
            'D' => Ok(Self::D),
            _ => Err(TruchetError::InvalidPattern {
                tag: tag.to_string(),
            }),
        }
    }

    /// Closed unit-cell ring for this pattern with curve vertex `center`
    pub const fn unit_template(self, center: f64) -> [Point; 5] {
        let c = center;
        let k = 1.0 - center;
        match self {
            Self::A => [
                Point::new(0.0, 0.0),
                Point::new(0.0, 1.0),
                Point::new(c, c),
                Point::new(1.0, 0.0),
                Point::new(0.0, 0.0),
            ],
            Self::B => [
                Point::new(0.0, 0.0),
                Point::new(0.0, 1.0),
                Point::new(1.0, 1.0),
                Point::new(c, k),
                Point::new(0.0, 0.0),
            ],
            Self::C => [
                Point::new(1.0, 1.0),
                Point::new(0.0, 1.0),
                Point::new(k, k),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
            ],
            Self::D => [
                Point::new(0.0, 0.0),
                Point::new(k, c),
                Point::new(1.0, 1.0),
                Point::new(1.0, 0.0),
                Point::new(0.0, 0.0),
            ],
        }
    }
}

impl fmt::Display for TilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for TilePattern {
    type Err = TruchetError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(tag), None) => Self::from_tag(tag),
            _ => Err(TruchetError::InvalidPattern { tag: s.to_string() }),
        }
    }
}

/// Build the polygon of one cell in absolute drawing coordinates
///
/// Each template point `(px, py)` becomes `(px * length + x_shift,
/// py * length + y_shift)`.
pub fn generate_tile_polygon(
    center: f64,
    pattern: TilePattern,
    x_shift: f64,
    y_shift: f64,
    length: f64,
) -> Polygon {
    let points = pattern
        .unit_template(center)
        .iter()
        .map(|point| point.scaled_and_shifted(length, x_shift, y_shift))
        .collect();
    Polygon::closed(points)
}

/// Build the polygon of one cell from a single-letter pattern tag
///
/// # Errors
///
/// Returns [`TruchetError::InvalidPattern`] if `tag` names no pattern
pub fn generate_tile_polygon_from_tag(
    center: f64,
    tag: char,
    x_shift: f64,
    y_shift: f64,
    length: f64,
) -> Result<Polygon> {
    let pattern = TilePattern::from_tag(tag)?;
    Ok(generate_tile_polygon(
        center, pattern, x_shift, y_shift, length,
    ))
}
