// MIT/Apache2 License

use lyon_geom::{point, Point};

/// A point of a polygon outline, in the coordinate space of the rectangle it was built in.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vertex {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Vertex {
    /// Create a new vertex.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Vertex {
        Vertex { x, y }
    }

    #[inline]
    #[must_use]
    pub fn to_point(self) -> Point<f32> {
        point(self.x, self.y)
    }

    /// Get the distance from this vertex to a point.
    #[inline]
    #[must_use]
    pub fn distance_to(self, other: Point<f32>) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl From<Point<f32>> for Vertex {
    #[inline]
    fn from(pt: Point<f32>) -> Vertex {
        Vertex::new(pt.x, pt.y)
    }
}

impl From<Vertex> for Point<f32> {
    #[inline]
    fn from(v: Vertex) -> Point<f32> {
        v.to_point()
    }
}
