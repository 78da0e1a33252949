//! The closed set of geometry values and the intersection algebra over it.
//!
//! Every pairing of the five kinds is handled by [`Value`]'s
//! [`Intersect`] impl. Pairings involving a line segment are reduced in two
//! steps: intersect with the infinite line containing the segment, then clip
//! that result back to the segment.
use std::fmt;
use std::ops;

use crate::plane::{v2, Line, LineSegment2, Point2, Vector2, VerticalLine};
use crate::util::intersect::Intersect;
use crate::util::tolerance::{real_close, real_close_point};

/// A geometry value. Values are immutable: shifting or intersecting always
/// produces a new value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    NoPoints,
    Point(Point2),
    Line(Line),
    VerticalLine(VerticalLine),
    LineSegment(LineSegment2),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    NoPoints,
    Point,
    Line,
    VerticalLine,
    LineSegment,
}

impl Value {
    pub fn point(x: f64, y: f64) -> Value {
        Value::Point(Point2::new(x, y))
    }

    pub fn line(m: f64, b: f64) -> Value {
        Value::Line(Line::new(m, b))
    }

    pub fn vertical_line(x: f64) -> Value {
        Value::VerticalLine(VerticalLine::new(x))
    }

    pub fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> Value {
        Value::LineSegment(LineSegment2::new(Point2::new(x1, y1), Point2::new(x2, y2)))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::NoPoints => ValueKind::NoPoints,
            Value::Point(_) => ValueKind::Point,
            Value::Line(_) => ValueKind::Line,
            Value::VerticalLine(_) => ValueKind::VerticalLine,
            Value::LineSegment(_) => ValueKind::LineSegment,
        }
    }

    /// Translates by `(dx, dy)`:
    ///
    /// ```
    /// # use geomlang::plane::Value;
    /// assert_eq!(Value::point(1.0, 1.0).shift(1.0, 0.0), Value::point(2.0, 1.0));
    /// assert_eq!(Value::NoPoints.shift(1.0, 0.0), Value::NoPoints);
    /// ```
    pub fn shift(&self, dx: f64, dy: f64) -> Value {
        self.clone() + v2(dx, dy)
    }

    /// Canonical form of a literal: degenerate segments become points and
    /// segment endpoints are ordered. Every other kind is unchanged.
    pub fn preprocess(&self) -> Value {
        match self {
            Value::LineSegment(seg) => seg.canonical(),
            other => other.clone(),
        }
    }

    /// Same kind, with every numeric field within epsilon.
    pub fn approx_eq(&self, other: &Value) -> bool {
        if self.kind() != other.kind() {
            return false;
        }

        match (self, other) {
            (Value::NoPoints, Value::NoPoints) => true,
            (Value::Point(a), Value::Point(b)) => real_close_point(a.x, a.y, b.x, b.y),
            (Value::Line(a), Value::Line(b)) => real_close(a.m, b.m) && real_close(a.b, b.b),
            (Value::VerticalLine(a), Value::VerticalLine(b)) => real_close(a.x, b.x),
            (Value::LineSegment(s), Value::LineSegment(t)) => {
                real_close_point(s.a.x, s.a.y, t.a.x, t.a.y)
                    && real_close_point(s.b.x, s.b.y, t.b.x, t.b.y)
            }
            _ => false,
        }
    }

    /// Like [`Value::approx_eq`], but a segment also matches its reversal,
    /// since both denote the same set of points.
    pub fn same_points(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::LineSegment(s), Value::LineSegment(t)) => {
                self.approx_eq(other)
                    || Value::LineSegment(s.ordered()).approx_eq(&Value::LineSegment(t.ordered()))
            }
            _ => self.approx_eq(other),
        }
    }

    /// Intersects with `seg` by way of the line containing it.
    fn intersect_segment(&self, seg: &LineSegment2) -> Value {
        self.intersect(&seg.supporting_line()).clip_to_segment(seg)
    }

    /// Restricts a value known to lie on the line through `seg` to `seg`
    /// itself.
    fn clip_to_segment(&self, seg: &LineSegment2) -> Value {
        match self {
            Value::NoPoints => Value::NoPoints,
            Value::Point(p) => p.intersect(seg),
            Value::Line(_) | Value::VerticalLine(_) => Value::LineSegment(*seg),
            Value::LineSegment(s) => s.overlap(seg),
        }
    }
}

/// ```
/// # use geomlang::plane::Value;
/// # use geomlang::util::intersect::Intersect;
/// let crossing = Value::line(1.0, 0.0).intersect(&Value::line(-1.0, 0.0));
/// assert_eq!(crossing, Value::point(0.0, 0.0));
///
/// let overlap = Value::segment(0.0, 0.0, 10.0, 0.0).intersect(&Value::segment(5.0, 0.0, 15.0, 0.0));
/// assert_eq!(overlap, Value::segment(5.0, 0.0, 10.0, 0.0));
/// ```
impl Intersect<&Value> for Value {
    type Output = Value;

    fn intersect(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::NoPoints, _) | (_, Value::NoPoints) => Value::NoPoints,
            (Value::LineSegment(seg), _) => other.intersect_segment(seg),
            (_, Value::LineSegment(seg)) => self.intersect_segment(seg),
            (Value::Point(a), Value::Point(b)) => a.intersect(b),
            (Value::Point(p), Value::Line(l)) | (Value::Line(l), Value::Point(p)) => p.intersect(l),
            (Value::Point(p), Value::VerticalLine(v))
            | (Value::VerticalLine(v), Value::Point(p)) => p.intersect(v),
            (Value::Line(a), Value::Line(b)) => a.intersect(b),
            (Value::Line(l), Value::VerticalLine(v))
            | (Value::VerticalLine(v), Value::Line(l)) => l.intersect(v),
            (Value::VerticalLine(a), Value::VerticalLine(b)) => a.intersect(b),
        }
    }
}

impl ops::Add<Vector2> for Value {
    type Output = Value;

    fn add(self, other: Vector2) -> Value {
        match self {
            Value::NoPoints => Value::NoPoints,
            Value::Point(p) => Value::Point(p + other),
            Value::Line(l) => Value::Line(l + other),
            Value::VerticalLine(v) => Value::VerticalLine(v + other),
            Value::LineSegment(s) => Value::LineSegment(s + other),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::NoPoints => write!(f, "NoPoints"),
            Value::Point(p) => write!(f, "Point({}, {})", p.x, p.y),
            Value::Line(l) => write!(f, "Line({}, {})", l.m, l.b),
            Value::VerticalLine(v) => write!(f, "VerticalLine({})", v.x),
            Value::LineSegment(s) => write!(f, "LineSegment({}, {}, {}, {})", s.a.x, s.a.y, s.b.x, s.b.y),
        }
    }
}
