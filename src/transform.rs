// MIT/Apache2 License

use crate::Vertex;
use lyon_geom::{Angle, Point, Transform};

/// Create a rigid rotation by `angle` about `center`.
///
/// This moves `center` to the origin, rotates about the origin, and moves the result back.
#[inline]
#[must_use]
pub fn rotation_about(center: Point<f32>, angle: Angle<f32>) -> Transform<f32> {
    Transform::translation(-center.x, -center.y)
        .then_rotate(angle)
        .then_translate(center.to_vector())
}

/// Rotate every vertex in `vertices` by `angle` about `center`.
#[inline]
pub fn rotate_vertices(vertices: &mut [Vertex], center: Point<f32>, angle: Angle<f32>) {
    let transform = rotation_about(center, angle);
    vertices.iter_mut().for_each(|vertex| {
        *vertex = transform.transform_point(vertex.to_point()).into();
    });
}
