use geo::{Area, LineString};
use serde::Serialize;

use super::{Point, Segment};
use crate::geometry::segments_intersect;

/// Open chain of segments forming the water's edge, border to border
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Waterline {
    segments: Vec<Segment>,
}

impl Waterline {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Build a chained waterline through consecutive points
    pub fn from_points(points: &[Point]) -> Self {
        let segments = points
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
            .collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn start(&self) -> Option<Point> {
        self.segments.first().map(|s| s.start)
    }

    pub fn end(&self) -> Option<Point> {
        self.segments.last().map(|s| s.end)
    }

    pub fn length(&self) -> f64 {
        self.segments.iter().map(Segment::length).sum()
    }

    /// Start of the first segment followed by every segment end
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.segments.len() + 1);
        if let Some(first) = self.segments.first() {
            points.push(first.start);
        }
        points.extend(self.segments.iter().map(|s| s.end));
        points
    }

    /// True when no two non-adjacent segments touch or cross
    pub fn is_simple(&self) -> bool {
        let n = self.segments.len();
        for i in 0..n {
            for j in (i + 2)..n {
                let (a, b) = (self.segments[i], self.segments[j]);
                if segments_intersect(a.start, a.end, b.start, b.end) {
                    return false;
                }
            }
        }
        true
    }
}

/// Closed loop of points; the edge from the last point back to the first is implicit
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive edges, including the one closing the loop
    pub fn edges(&self) -> Vec<Segment> {
        let n = self.points.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .map(|i| Segment::new(self.points[i], self.points[(i + 1) % n]))
            .collect()
    }

    /// Shoelace area; positive for counter-clockwise loops
    pub fn signed_area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let ring: LineString<f64> = self.points.iter().map(Point::as_tuple).collect();
        geo::Polygon::new(ring, vec![]).signed_area()
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }

    /// True when no two non-adjacent edges touch or cross
    pub fn is_simple(&self) -> bool {
        let edges = self.edges();
        let n = edges.len();
        if n < 3 {
            return false;
        }
        for i in 0..n {
            for j in (i + 2)..n {
                // first and last edges share the closing vertex
                if i == 0 && j == n - 1 {
                    continue;
                }
                let (a, b) = (edges[i], edges[j]);
                if segments_intersect(a.start, a.end, b.start, b.end) {
                    return false;
                }
            }
        }
        true
    }
}
