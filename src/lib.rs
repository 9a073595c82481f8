// MIT/Apache2 License

//! Closed polygon outlines inscribed in an axis-aligned rectangle.
//!
//! The vertices of an N-sided polygon are placed at equally spaced angles around the ellipse inscribed in the
//! rectangle, starting from its rightmost point. When the rectangle is a square, this is a regular polygon.
//! The outline can optionally be rotated about the center of the rectangle, and is handed back as a
//! [`PathResult`] that can be turned into a `lyon_path::Path` or replayed into any [`PathSink`].

#![forbid(unsafe_code)]

mod error;
mod path_utils;
mod polygon;
mod sink;
mod transform;
mod vertex;

pub use error::*;
pub use polygon::*;
pub use sink::*;
pub use transform::*;
pub use vertex::*;
