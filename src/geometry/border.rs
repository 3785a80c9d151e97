use rand::Rng;

use crate::domain::Point;

/// Share of each side that start points are drawn from, centered on the side
const START_SPAN: f64 = 0.8;

/// One side of the square region, in clockwise order starting at the top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const CLOCKWISE: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Right => 1,
            Side::Bottom => 2,
            Side::Left => 3,
        }
    }

    /// The side reached after `steps` quarter turns clockwise
    pub fn clockwise(self, steps: usize) -> Side {
        Self::CLOCKWISE[(self.index() + steps) % 4]
    }

    /// Number of quarter turns clockwise from `self` to `other`
    pub fn clockwise_distance(self, other: Side) -> usize {
        (other.index() + 4 - self.index()) % 4
    }

    /// Corner where this side ends when walking the border clockwise
    pub fn end_corner(self, radius: f64) -> Point {
        match self {
            Side::Top => Point::new(radius, radius),
            Side::Right => Point::new(radius, -radius),
            Side::Bottom => Point::new(-radius, -radius),
            Side::Left => Point::new(-radius, radius),
        }
    }

    /// Compass heading pointing out of the square through this side
    pub fn outward_heading(self) -> f64 {
        match self {
            Side::Top => 0.0,
            Side::Right => 90.0,
            Side::Bottom => 180.0,
            Side::Left => 270.0,
        }
    }

    /// Perpendicular distance from `point` to this side
    pub fn distance(self, point: Point, radius: f64) -> f64 {
        match self {
            Side::Top => radius - point.y,
            Side::Right => radius - point.x,
            Side::Bottom => radius + point.y,
            Side::Left => radius + point.x,
        }
    }

    fn contains(self, point: Point, radius: f64) -> bool {
        match self {
            Side::Top => point.y == radius,
            Side::Right => point.x == radius,
            Side::Bottom => point.y == -radius,
            Side::Left => point.x == -radius,
        }
    }
}

/// Axis-aligned square of half-width `radius` centered on the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub radius: f64,
}

impl Square {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn side_length(&self) -> f64 {
        2.0 * self.radius
    }

    /// Strictly inside, not touching the border
    pub fn contains(&self, point: Point) -> bool {
        point.x.abs() < self.radius && point.y.abs() < self.radius
    }

    pub fn is_on_border(&self, point: Point) -> bool {
        let within = point.x.abs() <= self.radius && point.y.abs() <= self.radius;
        within && (point.x.abs() == self.radius || point.y.abs() == self.radius)
    }

    /// Sides the point lies on; two for a corner, none off the border
    pub fn sides_of(&self, point: Point) -> Vec<Side> {
        if !self.is_on_border(point) {
            return Vec::new();
        }
        Side::CLOCKWISE
            .into_iter()
            .filter(|side| side.contains(point, self.radius))
            .collect()
    }

    pub fn share_side(&self, a: Point, b: Point) -> bool {
        let sides = self.sides_of(b);
        self.sides_of(a).iter().any(|side| sides.contains(side))
    }

    /// Nearest side to `point`, skipping `excluded`.
    ///
    /// Vertical sides win ties, so a point on the diagonal is drawn sideways.
    /// Falls back to the nearest side overall when everything is excluded.
    pub fn nearest_side(&self, point: Point, excluded: &[Side]) -> Side {
        const TIE_ORDER: [Side; 4] = [Side::Right, Side::Left, Side::Top, Side::Bottom];

        let mut best: Option<Side> = None;
        for side in TIE_ORDER.into_iter().filter(|s| !excluded.contains(s)) {
            if best.is_none_or(|b| {
                side.distance(point, self.radius) < b.distance(point, self.radius)
            }) {
                best = Some(side);
            }
        }
        best.unwrap_or_else(|| self.nearest_side(point, &[]))
    }

    /// Clamp each coordinate into `[-radius, radius]`
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            point.x.clamp(-self.radius, self.radius),
            point.y.clamp(-self.radius, self.radius),
        )
    }

    /// Random start point on a random side, away from the corners
    pub fn random_border_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let side = Side::CLOCKWISE[rng.gen_range(0..4)];
        let span = self.radius * START_SPAN;
        let along = rng.gen_range(-span..span);
        match side {
            Side::Top => Point::new(along, self.radius),
            Side::Right => Point::new(self.radius, along),
            Side::Bottom => Point::new(along, -self.radius),
            Side::Left => Point::new(-self.radius, along),
        }
    }
}
