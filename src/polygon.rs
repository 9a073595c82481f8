// MIT/Apache2 License

use crate::{path_utils, transform, InvalidArgument, PathSink, Vertex};
use lyon_geom::{vector, Angle, LineSegment, Point, Rect, Vector};
use lyon_path::{path::Builder, Path};
use std::f64::consts::PI;
use tinyvec::TinyVec;

/// Number of sides a polygon has unless told otherwise.
pub const DEFAULT_SIDES: u32 = 3;
/// Width of the line a polygon is stroked with unless told otherwise.
pub const DEFAULT_LINE_WIDTH: f32 = 1.0;

// polygons with this many vertices or fewer are kept on the stack
type Vertices = TinyVec<[Vertex; 8]>;

/// The way a rotation is applied to the vertices of a polygon.
///
/// Both produce the same rigid rotation about the center of the rectangle, up to floating point error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RotationStrategy {
    /// Move the finished vertices with a translate-rotate-translate affine transform.
    Affine,
    /// Rotate each vertex's offset from the center directly with its sine and cosine.
    Trigonometric,
}

impl Default for RotationStrategy {
    #[inline]
    fn default() -> Self {
        Self::Affine
    }
}

/// Builds the outline of an N-sided polygon inscribed in a rectangle.
///
/// Vertices are placed on the ellipse inscribed in the rectangle at angles `2π * i / sides`, starting from its
/// rightmost point and moving towards positive Y. If the rectangle is a square, the result is a regular
/// polygon. The ellipse is shrunk by half of the line width on both axes so that a stroke of that width stays
/// inside of the rectangle; a line width of zero places the vertices on the rectangle's inscribed ellipse
/// itself.
///
/// Rectangles with zero or negative sizes, and line widths wider than the rectangle, are not rejected. They
/// produce a collapsed or mirrored polygon.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PolygonPathBuilder {
    rect: Rect<f32>,
    sides: u32,
    rotation: Option<Angle<f32>>,
    line_width: f32,
    rotation_strategy: RotationStrategy,
}

impl PolygonPathBuilder {
    /// Create a builder for a triangle in `rect`, stroked with a line one unit wide and not rotated.
    #[inline]
    #[must_use]
    pub fn new(rect: Rect<f32>) -> Self {
        Self {
            rect,
            sides: DEFAULT_SIDES,
            rotation: None,
            line_width: DEFAULT_LINE_WIDTH,
            rotation_strategy: RotationStrategy::default(),
        }
    }

    /// Set the number of sides. [`build`](Self::build) fails unless this is greater than two.
    #[inline]
    #[must_use]
    pub fn sides(mut self, sides: u32) -> Self {
        self.sides = sides;
        self
    }

    /// Rotate the polygon about the center of the rectangle.
    #[inline]
    #[must_use]
    pub fn rotation(mut self, rotation: Angle<f32>) -> Self {
        self.rotation = Some(rotation);
        self
    }

    #[inline]
    #[must_use]
    pub fn rotation_radians(self, radians: f32) -> Self {
        self.rotation(Angle::radians(radians))
    }

    #[inline]
    #[must_use]
    pub fn rotation_degrees(self, degrees: f32) -> Self {
        self.rotation(Angle::degrees(degrees))
    }

    /// Set the line width, which insets the polygon by half its value. Zero disables the inset.
    #[inline]
    #[must_use]
    pub fn line_width(mut self, line_width: f32) -> Self {
        self.line_width = line_width;
        self
    }

    #[inline]
    #[must_use]
    pub fn rotation_strategy(mut self, rotation_strategy: RotationStrategy) -> Self {
        self.rotation_strategy = rotation_strategy;
        self
    }

    /// Compute the polygon.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::TooFewSides`] if the polygon has two sides or fewer. Nothing is computed in
    /// that case.
    pub fn build(&self) -> crate::Result<PathResult> {
        if self.sides <= 2 {
            return Err(InvalidArgument::TooFewSides { sides: self.sides }.into());
        }

        let center = self.rect.center();
        let inset = self.line_width / 2.0;
        let radii = vector(
            self.rect.width() / 2.0 - inset,
            self.rect.height() / 2.0 - inset,
        );

        if radii.x <= 0.0 || radii.y <= 0.0 {
            log::debug!(
                "Polygon radii {:?} are not positive for {:?} with line width {}, output is degenerate",
                radii,
                self.rect,
                self.line_width,
            );
        }

        log::trace!(
            "Building {}-sided polygon around {:?} with radii {:?} and rotation {:?}",
            self.sides,
            center,
            radii,
            self.rotation,
        );

        let mut vertices: Vertices = (0..self.sides)
            .map(|i| ellipse_vertex(center, radii, i, self.sides))
            .collect();

        if let Some(rotation) = self.rotation {
            match self.rotation_strategy {
                RotationStrategy::Affine => {
                    transform::rotate_vertices(&mut vertices, center, rotation)
                }
                RotationStrategy::Trigonometric => rotate_in_place(&mut vertices, center, rotation),
            }
        }

        Ok(PathResult {
            vertices,
            closed: true,
            line_width: self.line_width,
            center,
            radii,
        })
    }
}

/// Build a closed polygon with `sides` vertices inscribed in `rect`.
///
/// `rotation_radians` rotates the polygon about the center of `rect`, and `line_width` insets it by half of
/// the line width. See [`PolygonPathBuilder`] for the details.
///
/// # Errors
///
/// Returns [`InvalidArgument::TooFewSides`] if `sides` is two or fewer.
#[inline]
pub fn build_regular_polygon_path(
    rect: Rect<f32>,
    sides: u32,
    rotation_radians: Option<f32>,
    line_width: f32,
) -> crate::Result<PathResult> {
    let mut builder = PolygonPathBuilder::new(rect).sides(sides).line_width(line_width);
    if let Some(radians) = rotation_radians {
        builder = builder.rotation_radians(radians);
    }
    builder.build()
}

/// The `i`th of `sides` equally spaced points on the ellipse, counting from its rightmost point.
#[inline]
fn ellipse_vertex(center: Point<f32>, radii: Vector<f32>, i: u32, sides: u32) -> Vertex {
    // f32 cannot tell adjacent angles apart once sides passes 2^24
    let theta = 2.0 * PI * f64::from(i) / f64::from(sides);
    Vertex::new(
        (f64::from(center.x) + f64::from(radii.x) * theta.cos()) as f32,
        (f64::from(center.y) + f64::from(radii.y) * theta.sin()) as f32,
    )
}

#[inline]
fn rotate_in_place(vertices: &mut [Vertex], center: Point<f32>, rotation: Angle<f32>) {
    let (sin, cos) = rotation.radians.sin_cos();
    vertices.iter_mut().for_each(|vertex| {
        let dx = vertex.x - center.x;
        let dy = vertex.y - center.y;
        vertex.x = center.x + dx * cos - dy * sin;
        vertex.y = center.y + dx * sin + dy * cos;
    });
}

/// A closed polygon outline, produced by [`PolygonPathBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    // invariant: contains at least 3 vertices
    vertices: Vertices,
    closed: bool,
    line_width: f32,
    center: Point<f32>,
    radii: Vector<f32>,
}

impl PathResult {
    /// The vertices, in the order they are connected. The last one connects back to the first.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The number of vertices, which is also the number of sides.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The line width the polygon was built for.
    #[inline]
    #[must_use]
    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    /// The center of the rectangle, which is also the center of rotation.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point<f32> {
        self.center
    }

    /// The radii of the ellipse the vertices were placed on, after the line width inset.
    #[inline]
    #[must_use]
    pub fn radii(&self) -> Vector<f32> {
        self.radii
    }

    /// Tell if this is a regular polygon, i.e. its vertices lie on a circle rather than an ellipse.
    #[inline]
    #[must_use]
    pub fn is_regular(&self) -> bool {
        approx::relative_eq!(self.radii.x, self.radii.y)
    }

    /// Send the outline into a path sink.
    #[inline]
    pub fn replay<S: PathSink + ?Sized>(&self, sink: &mut S) {
        sink.set_line_width(self.line_width);

        let mut points = self.vertices.iter().copied().map(Vertex::to_point);
        if let Some(first) = points.next() {
            sink.move_to(first);
            points.for_each(|pt| sink.line_to(pt));
            if self.closed {
                sink.close();
            }
        }
    }

    /// Convert the outline into a `lyon` path.
    #[must_use]
    pub fn to_path(&self) -> Path {
        let mut builder = Builder::with_capacity(self.len(), self.len());
        self.replay(&mut builder);
        builder.build()
    }

    /// The straight edges of the outline, including the one that closes it.
    #[must_use]
    pub fn edges(&self) -> Vec<LineSegment<f32>> {
        path_utils::path_to_edges(self.to_path().iter()).collect()
    }
}
