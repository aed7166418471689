//! Tests for tile templates and single-cell polygon construction

#[cfg(test)]
mod tests {
    use truchetize::TruchetError;
    use truchetize::geometry::pattern::{
        TilePattern, generate_tile_polygon, generate_tile_polygon_from_tag,
    };
    use truchetize::geometry::polygon::Point;

    fn assert_points(actual: &[Point], expected: &[(f64, f64)]) {
        assert_eq!(actual.len(), expected.len());
        for (point, &(x, y)) in actual.iter().zip(expected) {
            assert!(
                (point.x - x).abs() < 1e-12 && (point.y - y).abs() < 1e-12,
                "expected ({x}, {y}), got ({}, {})",
                point.x,
                point.y
            );
        }
    }

    // Tests each unit template matches its vertex list
    // Verified by swapping c and 1 - c in template C
    #[test]
    fn test_unit_templates() {
        let c = 0.6;
        assert_points(
            &TilePattern::A.unit_template(c),
            &[(0.0, 0.0), (0.0, 1.0), (0.6, 0.6), (1.0, 0.0), (0.0, 0.0)],
        );
        assert_points(
            &TilePattern::B.unit_template(c),
            &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.6, 0.4), (0.0, 0.0)],
        );
        assert_points(
            &TilePattern::C.unit_template(c),
            &[(1.0, 1.0), (0.0, 1.0), (0.4, 0.4), (1.0, 0.0), (1.0, 1.0)],
        );
        assert_points(
            &TilePattern::D.unit_template(c),
            &[(0.0, 0.0), (0.4, 0.6), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)],
        );
    }

    // Tests template points are scaled by length then shifted
    // Verified by shifting before scaling
    #[test]
    fn test_scaled_and_shifted() {
        let polygon = generate_tile_polygon(0.75, TilePattern::A, 4.0, 6.0, 2.0);
        assert_points(
            polygon.points(),
            &[(4.0, 6.0), (4.0, 8.0), (5.5, 7.5), (6.0, 6.0), (4.0, 6.0)],
        );
    }

    // Tests every pattern yields a closed ring for the whole center range
    // Verified by omitting the repeated first point
    #[test]
    fn test_polygons_closed() {
        for pattern in TilePattern::ALL {
            for center in [0.25, 0.4, 0.5, 0.6, 0.75] {
                let polygon = generate_tile_polygon(center, pattern, 3.0, 1.0, 2.0);
                assert!(polygon.is_closed(), "{pattern} with {center} is open");
                assert_eq!(polygon.vertex_count(), 4);
            }
        }
    }

    // Tests polygons stay non-degenerate across the center range
    // Verified by placing the vertex on the cell corner
    #[test]
    fn test_polygons_have_area() {
        for pattern in TilePattern::ALL {
            for center in [0.25, 0.5, 0.75] {
                let polygon = generate_tile_polygon(center, pattern, 0.0, 0.0, 1.0);
                assert!(polygon.signed_area().abs() > 0.1);
            }
        }
    }

    // Tests midpoint center puts the A vertex at the cell midpoint
    // Verified by scaling the vertex by 1 - c
    #[test]
    fn test_midpoint_vertex() {
        let polygon = generate_tile_polygon(0.5, TilePattern::A, 0.0, 0.0, 2.0);
        let vertex = polygon.points().get(2).copied();
        assert_eq!(vertex, Some(Point::new(1.0, 1.0)));
    }

    // Tests tags parse in either case and round-trip through display
    // Verified by matching only uppercase tags
    #[test]
    fn test_tag_parsing() {
        for pattern in TilePattern::ALL {
            assert_eq!(TilePattern::from_tag(pattern.tag()).ok(), Some(pattern));
            assert_eq!(pattern.to_string().parse::<TilePattern>().ok(), Some(pattern));
        }
        assert_eq!(TilePattern::from_tag('c').ok(), Some(TilePattern::C));
    }

    // Tests unknown tags fail with InvalidPattern
    // Verified by defaulting unknown tags to pattern A
    #[test]
    fn test_invalid_tag() {
        assert!(matches!(
            TilePattern::from_tag('E'),
            Err(TruchetError::InvalidPattern { ref tag }) if tag == "E"
        ));
        assert!("AB".parse::<TilePattern>().is_err());
        assert!("".parse::<TilePattern>().is_err());
        assert!(generate_tile_polygon_from_tag(0.5, 'x', 0.0, 0.0, 1.0).is_err());
    }

    // Tests tag-based construction matches enum-based construction
    // Verified by ignoring the parsed pattern
    #[test]
    fn test_polygon_from_tag() {
        let from_tag = generate_tile_polygon_from_tag(0.3, 'D', 2.0, 2.0, 2.0).ok();
        let direct = generate_tile_polygon(0.3, TilePattern::D, 2.0, 2.0, 2.0);
        assert_eq!(from_tag, Some(direct));
    }
}
