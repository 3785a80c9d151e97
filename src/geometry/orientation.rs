use crate::domain::Point;

/// Turn direction of an ordered point triple in a y-up plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Classify the turn `p1 -> p2 -> p3` by the sign of `(p2 - p1) x (p3 - p2)`
///
/// A positive cross product is a left turn, reported as `CounterClockwise`.
pub fn orientation(p1: Point, p2: Point, p3: Point) -> Orientation {
    let cross = (p2.x - p1.x) * (p3.y - p2.y) - (p2.y - p1.y) * (p3.x - p2.x);
    if cross > 0.0 {
        Orientation::CounterClockwise
    } else if cross < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Whether `q` lies inside the axis-aligned bounding box of segment `p`-`r`
fn within_bounds(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Whether segment `p1`-`q1` and segment `p2`-`q2` share any point
///
/// Proper crossings, touching endpoints and collinear overlap all count.
pub fn segments_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && within_bounds(p1, p2, q1))
        || (o2 == Orientation::Collinear && within_bounds(p1, q2, q1))
        || (o3 == Orientation::Collinear && within_bounds(p2, p1, q2))
        || (o4 == Orientation::Collinear && within_bounds(p2, q1, q2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_orientation() {
        assert_eq!(
            orientation(p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)),
            Orientation::CounterClockwise
        );
        assert_eq!(
            orientation(p(0.0, 0.0), p(1.0, 0.0), p(1.0, -1.0)),
            Orientation::Clockwise
        );
        assert_eq!(
            orientation(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)),
            Orientation::Collinear
        );
    }

    #[test]
    fn test_proper_crossing() {
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(2.0, 2.0),
            p(0.0, 2.0),
            p(2.0, 0.0)
        ));
    }

    #[test]
    fn test_disjoint() {
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(0.0, 1.0),
            p(1.0, 1.0)
        ));
    }

    #[test]
    fn test_touching_endpoint() {
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 5.0)
        ));
    }

    #[test]
    fn test_t_junction() {
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(4.0, 0.0),
            p(2.0, 3.0),
            p(2.0, 0.0)
        ));
    }

    #[test]
    fn test_collinear_overlap() {
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(3.0, 0.0),
            p(2.0, 0.0),
            p(5.0, 0.0)
        ));
    }

    #[test]
    fn test_collinear_separate() {
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(2.0, 0.0),
            p(3.0, 0.0)
        ));
    }
}
