//! Points and closed polygon rings in drawing space

/// A point in drawing space (x to the right, y upward)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Scale a unit-cell point by `length` and translate it by the cell shift
    pub fn scaled_and_shifted(self, length: f64, x_shift: f64, y_shift: f64) -> Self {
        Self {
            x: self.x.mul_add(length, x_shift),
            y: self.y.mul_add(length, y_shift),
        }
    }
}

/// Closed ring of points; the first point is repeated as the last
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Build a polygon from a ring of points, closing it if needed
    ///
    /// An empty input stays empty.
    pub fn closed(mut points: Vec<Point>) -> Self {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if first != last {
                points.push(first);
            }
        }
        Self { points }
    }

    /// All points of the ring, including the repeated closing point
    pub const fn points(&self) -> &[Point] {
        self.points.as_slice()
    }

    /// Number of distinct vertices (the closing point is not counted)
    pub const fn vertex_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Whether the first and last points coincide
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Signed area by the shoelace formula (positive when counter-clockwise)
    pub fn signed_area(&self) -> f64 {
        let twice_area: f64 = self
            .points
            .windows(2)
            .filter_map(|pair| match pair {
                [a, b] => Some(a.x.mul_add(b.y, -(b.x * a.y))),
                _ => None,
            })
            .sum();
        twice_area / 2.0
    }
}
