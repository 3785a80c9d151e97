use crate::domain::{Point, Segment};
use crate::geometry::{Side, Square};

/// Segments walking the border clockwise from the waterline end back to its start
///
/// `start` and `end` must both lie on the border. Returns an empty list when
/// they share a side; that configuration is not supported.
pub fn close(start: Point, end: Point, radius: f64) -> Vec<Segment> {
    let square = Square::new(radius);
    if square.share_side(start, end) {
        return Vec::new();
    }

    let Some((from, to)) = endpoint_sides(&square, start, end) else {
        return Vec::new();
    };

    let quarter_turns = from.clockwise_distance(to);
    let corners = (0..quarter_turns).map(|i| from.clockwise(i).end_corner(radius));

    let mut chain = Vec::with_capacity(quarter_turns + 1);
    let mut cursor = end;
    for corner in corners {
        chain.push(Segment::new(cursor, corner));
        cursor = corner;
    }
    chain.push(Segment::new(cursor, start));
    chain
}

/// Pick the side each endpoint is walked from (`end`) and to (`start`)
///
/// Opposite sides are detected by a full side-length gap, x before y, which
/// settles the choice for corner points.
fn endpoint_sides(square: &Square, start: Point, end: Point) -> Option<(Side, Side)> {
    let span = square.side_length();

    if (start.x - end.x).abs() == span {
        return Some(if end.x > start.x {
            (Side::Right, Side::Left)
        } else {
            (Side::Left, Side::Right)
        });
    }
    if (start.y - end.y).abs() == span {
        return Some(if end.y > start.y {
            (Side::Top, Side::Bottom)
        } else {
            (Side::Bottom, Side::Top)
        });
    }

    let from = *square.sides_of(end).first()?;
    let to = *square.sides_of(start).first()?;
    Some((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: f64 = 25.0;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn assert_chain(segments: &[Segment], from: Point, to: Point) {
        assert_eq!(segments.first().unwrap().start, from);
        assert_eq!(segments.last().unwrap().end, to);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        let square = Square::new(R);
        for segment in segments {
            assert!(square.share_side(segment.start, segment.end));
        }
    }

    #[test]
    fn test_same_side_is_empty() {
        assert!(close(p(25.0, 10.0), p(25.0, -10.0), R).is_empty());
        assert!(close(p(-3.0, -25.0), p(7.0, -25.0), R).is_empty());
    }

    #[test]
    fn test_opposite_corners() {
        let start = p(25.0, 25.0);
        let end = p(-25.0, -25.0);
        let segments = close(start, end, R);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], Segment::new(end, p(-25.0, 25.0)));
        assert_eq!(segments[1], Segment::new(p(-25.0, 25.0), p(25.0, 25.0)));
        assert_eq!(segments[2], Segment::new(p(25.0, 25.0), start));
        assert_eq!(close(start, end, R), segments);
    }

    #[test]
    fn test_opposite_top_bottom() {
        let start = p(0.0, -25.0);
        let end = p(3.0, 25.0);
        let segments = close(start, end, R);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].end, p(25.0, 25.0));
        assert_eq!(segments[1].end, p(25.0, -25.0));
        assert_chain(&segments, end, start);
    }

    #[test]
    fn test_opposite_left_right() {
        let start = p(25.0, 4.0);
        let end = p(-25.0, -9.0);
        let segments = close(start, end, R);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].end, p(-25.0, 25.0));
        assert_eq!(segments[1].end, p(25.0, 25.0));
        assert_chain(&segments, end, start);
    }

    #[test]
    fn test_adjacent_single_corner() {
        // Top end, right start: one corner clockwise
        let start = p(25.0, 5.0);
        let end = p(-2.0, 25.0);
        let segments = close(start, end, R);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].end, p(25.0, 25.0));
        assert_chain(&segments, end, start);
    }

    #[test]
    fn test_adjacent_three_corners() {
        // Right end, top start: three corners clockwise
        let start = p(-2.0, 25.0);
        let end = p(25.0, 5.0);
        let segments = close(start, end, R);

        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0].end, p(25.0, -25.0));
        assert_eq!(segments[1].end, p(-25.0, -25.0));
        assert_eq!(segments[2].end, p(-25.0, 25.0));
        assert_chain(&segments, end, start);
    }

    #[test]
    fn test_every_side_pair_closes() {
        let on_side = |side: Side| match side {
            Side::Top => p(1.0, R),
            Side::Right => p(R, -2.0),
            Side::Bottom => p(3.0, -R),
            Side::Left => p(-R, 4.0),
        };
        for from in Side::CLOCKWISE {
            for to in Side::CLOCKWISE {
                let segments = close(on_side(to), on_side(from), R);
                if from == to {
                    assert!(segments.is_empty());
                } else {
                    assert_eq!(segments.len(), from.clockwise_distance(to) + 1);
                    assert_chain(&segments, on_side(from), on_side(to));
                }
            }
        }
    }
}
