//! Geometry values of the plane: points, lines, vertical lines, line
//! segments, and the empty set, along with the [`Value`] sum type that
//! intersects any two of them.
use cgmath;
pub mod line;
pub mod point;
pub mod segment;
pub mod value;

pub use line::{line_through, Line, VerticalLine};
pub use segment::LineSegment2;
pub use value::{Value, ValueKind};

pub type Point2 = cgmath::Point2<f64>;
pub type Vector2 = cgmath::Vector2<f64>;

pub fn p2<T>(x: T, y: T) -> cgmath::Point2<T> {
    cgmath::Point2::new(x, y)
}
pub use cgmath::vec2 as v2;
