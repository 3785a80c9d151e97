use super::Point;

/// Angular width of one heading bucket in degrees
pub const HEADING_RESOLUTION: u16 = 4;

/// Number of heading buckets covering a full turn
pub const HEADING_BUCKETS: usize = (360 / HEADING_RESOLUTION) as usize;

/// A quantized compass heading.
///
/// 0° points along +y and angles grow clockwise, so 90° points along +x.
/// Stored as a bucket index so equality is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Heading(u16);

impl Heading {
    /// Heading for bucket `index`, wrapping around a full turn
    pub fn from_bucket(index: usize) -> Self {
        Self((index % HEADING_BUCKETS) as u16)
    }

    /// Nearest bucket to an arbitrary angle in degrees
    pub fn from_degrees(degrees: f64) -> Self {
        let bucket = (normalize_degrees(degrees) / HEADING_RESOLUTION as f64).round() as usize;
        Self::from_bucket(bucket)
    }

    pub fn bucket(&self) -> usize {
        self.0 as usize
    }

    pub fn degrees(&self) -> f64 {
        f64::from(self.0 * HEADING_RESOLUTION)
    }

    pub fn reversed(&self) -> Self {
        Self::from_bucket(self.bucket() + HEADING_BUCKETS / 2)
    }

    /// All buckets in increasing angle order
    pub fn all() -> impl Iterator<Item = Heading> {
        (0..HEADING_BUCKETS).map(Heading::from_bucket)
    }

    /// Point reached by travelling `distance` from `from` along this heading
    pub fn project(&self, from: Point, distance: f64) -> Point {
        let radians = self.degrees().to_radians();
        Point::new(
            from.x + distance * radians.sin(),
            from.y + distance * radians.cos(),
        )
    }
}

/// Wrap an angle into `[0, 360)`
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Continuous compass heading from one point toward another
pub fn heading_between(from: Point, to: Point) -> f64 {
    normalize_degrees((to.x - from.x).atan2(to.y - from.y).to_degrees())
}

/// Smallest angle between two headings, in `[0, 180]`
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = normalize_degrees(a - b);
    diff.min(360.0 - diff)
}

/// Relative frequency of every heading bucket for one walk step.
///
/// A usable map has at least one positive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightMap {
    weights: [u32; HEADING_BUCKETS],
}

impl Default for WeightMap {
    fn default() -> Self {
        Self::new()
    }
}

impl WeightMap {
    /// A map with every weight set to zero
    pub fn new() -> Self {
        Self {
            weights: [0; HEADING_BUCKETS],
        }
    }

    pub fn set(&mut self, heading: Heading, weight: u32) {
        self.weights[heading.bucket()] = weight;
    }

    pub fn get(&self, heading: Heading) -> u32 {
        self.weights[heading.bucket()]
    }

    pub fn total(&self) -> u64 {
        self.weights.iter().map(|&w| u64::from(w)).sum()
    }

    /// True when no heading can be drawn from this map
    pub fn is_empty(&self) -> bool {
        self.weights.iter().all(|&w| w == 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Heading, u32)> + '_ {
        self.weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (Heading::from_bucket(i), w))
    }
}

impl FromIterator<(Heading, u32)> for WeightMap {
    fn from_iter<I: IntoIterator<Item = (Heading, u32)>>(iter: I) -> Self {
        let mut map = WeightMap::new();
        for (heading, weight) in iter {
            map.set(heading, weight);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_count() {
        assert_eq!(HEADING_BUCKETS, 90);
        assert_eq!(Heading::all().count(), 90);
    }

    #[test]
    fn test_from_degrees_rounds_and_wraps() {
        assert_eq!(Heading::from_degrees(7.0).degrees(), 8.0);
        assert_eq!(Heading::from_degrees(359.0).degrees(), 0.0);
        assert_eq!(Heading::from_degrees(-4.0).degrees(), 356.0);
    }

    #[test]
    fn test_reversed() {
        assert_eq!(Heading::from_degrees(0.0).reversed().degrees(), 180.0);
        assert_eq!(Heading::from_degrees(272.0).reversed().degrees(), 92.0);
    }

    #[test]
    fn test_compass_convention() {
        let origin = Point::ORIGIN;
        assert!((heading_between(origin, Point::new(0.0, 1.0)) - 0.0).abs() < 1e-9);
        assert!((heading_between(origin, Point::new(1.0, 0.0)) - 90.0).abs() < 1e-9);
        assert!((heading_between(origin, Point::new(0.0, -1.0)) - 180.0).abs() < 1e-9);
        assert!((heading_between(origin, Point::new(-1.0, 0.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_project_east() {
        let p = Heading::from_degrees(88.0).project(Point::ORIGIN, 2.0);
        assert!(p.x > 1.99);
        assert!(p.y > 0.0 && p.y < 0.1);
    }

    #[test]
    fn test_angular_distance_wraps() {
        assert!((angular_distance(358.0, 2.0) - 4.0).abs() < 1e-9);
        assert!((angular_distance(90.0, 270.0) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_weight_map_empty() {
        let mut map = WeightMap::new();
        assert!(map.is_empty());
        map.set(Heading::from_bucket(3), 2);
        assert!(!map.is_empty());
        assert_eq!(map.total(), 2);
    }
}
