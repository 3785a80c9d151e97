use crate::domain::{Point, Polygon, Segment, Waterline};

/// Join the waterline and its border closing into one point loop
///
/// Repeated consecutive points are dropped, as is a final point equal to the
/// first; the loop closes implicitly.
pub fn assemble(waterline: &Waterline, closing: &[Segment]) -> Polygon {
    let mut points: Vec<Point> = Vec::with_capacity(waterline.len() + closing.len() + 1);

    let ends = waterline
        .points()
        .into_iter()
        .chain(closing.iter().map(|s| s.end));
    for point in ends {
        if points.last() != Some(&point) {
            points.push(point);
        }
    }

    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }

    Polygon::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::closer::close;

    #[test]
    fn test_assemble_half_square() {
        let waterline = Waterline::from_points(&[
            Point::new(0.0, -10.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 10.0),
        ]);
        let closing = close(Point::new(0.0, -10.0), Point::new(0.0, 10.0), 10.0);
        let polygon = assemble(&waterline, &closing);

        assert_eq!(
            polygon.points(),
            &[
                Point::new(0.0, -10.0),
                Point::new(1.0, 0.0),
                Point::new(0.0, 10.0),
                Point::new(10.0, 10.0),
                Point::new(10.0, -10.0),
            ]
        );
        assert!(polygon.is_simple());
        assert!((polygon.area() - 190.0).abs() < 1e-9);
    }

    #[test]
    fn test_assemble_drops_zero_length_closing() {
        let waterline = Waterline::from_points(&[Point::new(5.0, 5.0), Point::new(-5.0, -5.0)]);
        let closing = close(Point::new(5.0, 5.0), Point::new(-5.0, -5.0), 5.0);
        assert_eq!(closing.len(), 3);

        let polygon = assemble(&waterline, &closing);
        assert_eq!(polygon.len(), 3);
        assert_eq!(polygon.points()[2], Point::new(-5.0, 5.0));
        assert!((polygon.area() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_assemble_empty() {
        assert!(assemble(&Waterline::default(), &[]).is_empty());
    }
}
