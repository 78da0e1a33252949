//! Intersections with a single [`Point2`] on the left-hand side.
use crate::plane::{Line, LineSegment2, Point2, Value, VerticalLine};
use crate::util::intersect::Intersect;
use crate::util::segment::Segment;
use crate::util::tolerance::{inbetween, real_close, real_close_point};

impl Intersect<&Point2> for Point2 {
    type Output = Value;

    fn intersect(&self, other: &Point2) -> Value {
        if real_close_point(self.x, self.y, other.x, other.y) {
            Value::Point(*other)
        } else {
            Value::NoPoints
        }
    }
}

impl Intersect<&Line> for Point2 {
    type Output = Value;

    fn intersect(&self, line: &Line) -> Value {
        if real_close(self.y, line.y_at(self.x)) {
            Value::Point(*self)
        } else {
            Value::NoPoints
        }
    }
}

impl Intersect<&VerticalLine> for Point2 {
    type Output = Value;

    fn intersect(&self, line: &VerticalLine) -> Value {
        if real_close(self.x, line.x) {
            Value::Point(*self)
        } else {
            Value::NoPoints
        }
    }
}

/// Bounds check only: the point is assumed to already lie on the line
/// containing the segment.
impl Intersect<&LineSegment2> for Point2 {
    type Output = Value;

    fn intersect(&self, seg: &LineSegment2) -> Value {
        let (a, b) = (seg.start(), seg.end());
        if inbetween(self.x, a.x, b.x) && inbetween(self.y, a.y, b.y) {
            Value::Point(*self)
        } else {
            Value::NoPoints
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::plane::p2;

    #[test]
    fn test_point_point() {
        assert_eq!(p2(0.0, 0.0).intersect(&p2(0.0, 0.0)), Value::Point(p2(0.0, 0.0)));
        assert_eq!(p2(0.0, 0.0).intersect(&p2(0.000001, 0.0)), Value::Point(p2(0.000001, 0.0)));
        assert_eq!(p2(0.0, 0.0).intersect(&p2(0.0, 1.0)), Value::NoPoints);
    }

    #[test]
    fn test_point_lines() {
        let diagonal = Line::new(1.0, 0.0);
        assert_eq!(p2(1.0, 1.0).intersect(&diagonal), Value::Point(p2(1.0, 1.0)));
        assert_eq!(p2(1.0, 2.0).intersect(&diagonal), Value::NoPoints);

        let v = VerticalLine::new(-2.0);
        assert_eq!(p2(-2.0, 7.0).intersect(&v), Value::Point(p2(-2.0, 7.0)));
        assert_eq!(p2(2.0, 7.0).intersect(&v), Value::NoPoints);
    }

    #[test]
    fn test_point_segment_bounds() {
        let seg = LineSegment2::new(p2(4.0, 4.0), p2(0.0, 0.0));
        assert_eq!(p2(2.0, 2.0).intersect(&seg), Value::Point(p2(2.0, 2.0)));
        assert_eq!(p2(4.000001, 4.000001).intersect(&seg), Value::Point(p2(4.000001, 4.000001)));
        assert_eq!(p2(0.0, 0.0).intersect(&seg), Value::Point(p2(0.0, 0.0)));
        assert_eq!(p2(5.0, 5.0).intersect(&seg), Value::NoPoints);
        assert_eq!(p2(-1.0, -1.0).intersect(&seg), Value::NoPoints);
    }
}
