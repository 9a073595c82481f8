// MIT/Apache2 License

use lyon_geom::LineSegment;
use lyon_path::PathEvent;

/// Collect the straight segments of a line-only path, including the closing segment of closed sub-paths even
/// when it has zero length. Curves are skipped.
#[inline]
pub(crate) fn path_to_edges<I: IntoIterator<Item = PathEvent>>(
    iter: I,
) -> impl Iterator<Item = LineSegment<f32>> {
    iter.into_iter().filter_map(|event| match event {
        PathEvent::Line { from, to } => Some(LineSegment { from, to }),
        PathEvent::End {
            last,
            first,
            close: true,
        } => Some(LineSegment {
            from: last,
            to: first,
        }),
        _ => None,
    })
}
