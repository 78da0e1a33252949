use std::ops;
use crate::plane::{line_through, p2, Point2, Value, Vector2};
use crate::util::segment::Segment;
use crate::util::tolerance::{real_close, real_close_point};

/// A finite line segment between two endpoints.
///
/// The endpoints can come in either order. [`LineSegment2::canonical`] puts
/// the geometrically first endpoint in `a`: the lower one for vertical
/// segments and the leftmost one otherwise.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineSegment2 {
    pub a: Point2,
    pub b: Point2
}

impl LineSegment2 {
    pub fn new(a: Point2, b: Point2) -> Self {
        LineSegment2 { a, b }
    }

    pub fn is_vertical(&self) -> bool {
        real_close(self.a.x, self.b.x)
    }

    /// The infinite [`Line`](crate::plane::Line) or
    /// [`VerticalLine`](crate::plane::VerticalLine) containing this segment.
    pub fn supporting_line(&self) -> Value {
        line_through(self.a, self.b)
    }

    /// Swaps the endpoints if they run downwards (vertical) or leftwards.
    pub fn ordered(&self) -> Self {
        let backwards = if self.is_vertical() {
            self.b.y < self.a.y
        } else {
            self.b.x < self.a.x
        };

        if backwards { self.reversed() } else { *self }
    }

    /// Collapses a segment whose endpoints coincide into a point, otherwise
    /// orders its endpoints:
    ///
    /// ```
    /// # use geomlang::plane::{p2, LineSegment2, Value};
    /// let seg = LineSegment2::new(p2(3.0, 1.0), p2(1.0, 2.0));
    /// assert_eq!(seg.canonical(), Value::LineSegment(LineSegment2::new(p2(1.0, 2.0), p2(3.0, 1.0))));
    ///
    /// let dot = LineSegment2::new(p2(1.0, 1.0), p2(1.000001, 1.0));
    /// assert_eq!(dot.canonical(), Value::Point(p2(1.0, 1.0)));
    /// ```
    pub fn canonical(&self) -> Value {
        if real_close_point(self.a.x, self.a.y, self.b.x, self.b.y) {
            Value::Point(self.a)
        } else {
            Value::LineSegment(self.ordered())
        }
    }

    /// The common part of two segments lying on the same line.
    ///
    /// Only meaningful for colinear segments; anything else is logged and
    /// compared as though it were. A zero-length overlap is a point.
    pub fn overlap(&self, other: &LineSegment2) -> Value {
        let s = self.ordered();
        let t = other.ordered();

        let (ls, lt) = (s.supporting_line(), t.supporting_line());
        if !ls.approx_eq(&lt) {
            tracing::warn!(a = ?s, b = ?t, a_line = ?ls.kind(), b_line = ?lt.kind(), "overlapping segments that are not colinear");
        }

        let common = if s.is_vertical() {
            if s.a.y < t.a.y {
                vertical_overlap(s, t)
            } else {
                vertical_overlap(t, s)
            }
        } else if s.a.x < t.a.x {
            sloped_overlap(s, t)
        } else {
            sloped_overlap(t, s)
        };

        match common {
            Value::LineSegment(seg) => seg.canonical(),
            result => result,
        }
    }
}

fn vertical_overlap(below: LineSegment2, above: LineSegment2) -> Value {
    let x = below.a.x;
    if real_close(below.b.y, above.a.y) {
        Value::Point(p2(x, below.b.y))
    } else if below.b.y < above.a.y {
        Value::NoPoints
    } else if below.b.y > above.b.y {
        Value::LineSegment(above)
    } else {
        Value::LineSegment(LineSegment2::new(p2(x, above.a.y), p2(x, below.b.y)))
    }
}

fn sloped_overlap(left: LineSegment2, right: LineSegment2) -> Value {
    if real_close(left.b.x, right.a.x) {
        Value::Point(left.b)
    } else if left.b.x < right.a.x {
        Value::NoPoints
    } else if left.b.x > right.b.x {
        Value::LineSegment(right)
    } else {
        Value::LineSegment(LineSegment2::new(right.a, left.b))
    }
}

impl Segment for LineSegment2 {
    type Point = Point2;

    fn from_endpoints(a: Point2, b: Point2) -> Self {
        LineSegment2 { a, b }
    }

    fn start(&self) -> Point2 { self.a }
    fn end(&self) -> Point2 { self.b }
}

impl ops::Add<Vector2> for LineSegment2 {
    type Output = LineSegment2;

    fn add(self, other: Vector2) -> Self {
        LineSegment2::new(self.a + other, self.b + other)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment2 {
        LineSegment2::new(p2(x1, y1), p2(x2, y2))
    }

    #[test]
    fn test_ordering() {
        assert_eq!(seg(0.0, 5.0, 0.0, 1.0).ordered(), seg(0.0, 1.0, 0.0, 5.0));
        assert_eq!(seg(0.0, 1.0, 0.0, 5.0).ordered(), seg(0.0, 1.0, 0.0, 5.0));
        assert_eq!(seg(4.0, 0.0, 1.0, 3.0).ordered(), seg(1.0, 3.0, 4.0, 0.0));
        // nearly vertical orders by y
        assert_eq!(seg(0.000001, 5.0, 0.0, 1.0).ordered(), seg(0.0, 1.0, 0.000001, 5.0));
        assert_eq!(seg(2.0, 2.0, 1.0, 1.0).reversed(), seg(1.0, 1.0, 2.0, 2.0));
    }

    #[test]
    fn test_canonical() {
        assert_eq!(seg(2.0, 2.0, 2.0, 2.0).canonical(), Value::Point(p2(2.0, 2.0)));
        assert_eq!(seg(2.0, 2.0, 0.0, 0.0).canonical(), Value::LineSegment(seg(0.0, 0.0, 2.0, 2.0)));
        assert_eq!(seg(0.0, 0.0, 2.0, 2.0).canonical(), Value::LineSegment(seg(0.0, 0.0, 2.0, 2.0)));
    }

    #[test]
    fn test_horizontal_overlap() {
        let a = seg(0.0, 0.0, 10.0, 0.0);

        assert_eq!(a.overlap(&seg(5.0, 0.0, 15.0, 0.0)), Value::LineSegment(seg(5.0, 0.0, 10.0, 0.0)));
        assert_eq!(seg(5.0, 0.0, 15.0, 0.0).overlap(&a), Value::LineSegment(seg(5.0, 0.0, 10.0, 0.0)));
        assert_eq!(a.overlap(&seg(10.0, 0.0, 15.0, 0.0)), Value::Point(p2(10.0, 0.0)));
        assert_eq!(a.overlap(&seg(11.0, 0.0, 15.0, 0.0)), Value::NoPoints);
        assert_eq!(a.overlap(&seg(2.0, 0.0, 3.0, 0.0)), Value::LineSegment(seg(2.0, 0.0, 3.0, 0.0)));
        assert_eq!(a.overlap(&seg(-2.0, 0.0, 13.0, 0.0)), Value::LineSegment(seg(0.0, 0.0, 10.0, 0.0)));
    }

    #[test]
    fn test_vertical_overlap() {
        let a = seg(1.0, 0.0, 1.0, 10.0);

        assert_eq!(a.overlap(&seg(1.0, 15.0, 1.0, 5.0)), Value::LineSegment(seg(1.0, 5.0, 1.0, 10.0)));
        assert_eq!(a.overlap(&seg(1.0, -3.0, 1.0, 0.0)), Value::Point(p2(1.0, 0.0)));
        assert_eq!(a.overlap(&seg(1.0, -3.0, 1.0, -1.0)), Value::NoPoints);
        assert_eq!(a.overlap(&seg(1.0, 2.0, 1.0, 4.0)), Value::LineSegment(seg(1.0, 2.0, 1.0, 4.0)));
        assert_eq!(seg(1.0, 2.0, 1.0, 4.0).overlap(&a), Value::LineSegment(seg(1.0, 2.0, 1.0, 4.0)));
    }

    #[test]
    fn test_shared_first_endpoint() {
        let long = seg(0.0, 0.0, 10.0, 0.0);
        let short = seg(0.0, 0.0, 5.0, 0.0);
        assert_eq!(long.overlap(&short), Value::LineSegment(short));
        assert_eq!(short.overlap(&long), Value::LineSegment(short));

        let long = seg(1.0, 0.0, 1.0, 10.0);
        let short = seg(1.0, 0.0, 1.0, 4.0);
        assert_eq!(long.overlap(&short), Value::LineSegment(short));
        assert_eq!(short.overlap(&long), Value::LineSegment(short));
    }

    #[test]
    fn test_zero_length_overlap_is_point() {
        let upright = seg(0.0, -3.0, 0.0, 0.0);
        let dot = seg(0.0, -3.0, 0.0, -3.0);
        assert_eq!(upright.overlap(&dot), Value::Point(p2(0.0, -3.0)));
        assert_eq!(dot.overlap(&upright), Value::Point(p2(0.0, -3.0)));
        assert_eq!(dot.overlap(&dot), Value::Point(p2(0.0, -3.0)));
    }

    #[test]
    fn test_sloped_overlap() {
        let a = seg(0.0, 0.0, 4.0, 4.0);
        assert_eq!(a.overlap(&seg(6.0, 6.0, 2.0, 2.0)), Value::LineSegment(seg(2.0, 2.0, 4.0, 4.0)));
        assert_eq!(a.overlap(&seg(4.0, 4.0, 6.0, 6.0)), Value::Point(p2(4.0, 4.0)));
    }
}
