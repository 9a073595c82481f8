// MIT/Apache2 License

use lyon_geom::Point;
use lyon_path::{builder::PathBuilder, path::Builder};

/// Something that accepts a polygon outline, one drawing command at a time.
///
/// This is usually a path builder or a drawing surface belonging to a graphics framework. The commands come in
/// the order: `set_line_width`, `move_to`, any number of `line_to`, then `close`.
pub trait PathSink {
    /// Set the width of the line the outline will be stroked with. Sinks that do not stroke can ignore it.
    #[inline]
    fn set_line_width(&mut self, _line_width: f32) {}
    /// Start a new outline at `to`.
    fn move_to(&mut self, to: Point<f32>);
    /// Draw a straight line from the current point to `to`.
    fn line_to(&mut self, to: Point<f32>);
    /// Draw a straight line back to the start of the outline and finish it.
    fn close(&mut self);
}

impl<S: PathSink + ?Sized> PathSink for &mut S {
    #[inline]
    fn set_line_width(&mut self, line_width: f32) {
        (**self).set_line_width(line_width)
    }
    #[inline]
    fn move_to(&mut self, to: Point<f32>) {
        (**self).move_to(to)
    }
    #[inline]
    fn line_to(&mut self, to: Point<f32>) {
        (**self).line_to(to)
    }
    #[inline]
    fn close(&mut self) {
        (**self).close()
    }
}

impl PathSink for Builder {
    #[inline]
    fn move_to(&mut self, to: Point<f32>) {
        PathBuilder::begin(self, to);
    }
    #[inline]
    fn line_to(&mut self, to: Point<f32>) {
        PathBuilder::line_to(self, to);
    }
    #[inline]
    fn close(&mut self) {
        PathBuilder::close(self);
    }
}
