//! 2D point value type.

/// A position in 2D space.
///
/// Used both for absolute canvas positions and for shape-local vertices.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The point `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    ///
    /// NaN coordinates propagate to a NaN result.
    pub fn distance(p1: Point, p2: Point) -> f64 {
        let dx = p1.x - p2.x;
        let dy = p1.y - p2.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Packs a flat `[x0, y0, x1, y1, ...]` sequence into points.
    ///
    /// Produces `coordinates.len() / 2` points. A trailing unpaired value is
    /// dropped.
    pub fn to_points(coordinates: &[f64]) -> Vec<Point> {
        coordinates
            .chunks_exact(2)
            .map(|pair| Point::new(pair[0], pair[1]))
            .collect()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
