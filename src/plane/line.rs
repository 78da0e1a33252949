use std::ops;
use crate::plane::{p2, Point2, Value, Vector2};
use crate::util::intersect::Intersect;
use crate::util::tolerance::real_close;

/// A non-vertical infinite line, `y = m * x + b`.
///
/// Supports translation by a vector:
///
/// ```
/// # use geomlang::plane::{v2, Line};
/// let l = Line::new(1.0, 0.0) + v2(1.0, 0.0);
/// assert_eq!(l, Line::new(1.0, -1.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Line {
    pub m: f64,
    pub b: f64
}

/// An infinite line `x = x`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VerticalLine {
    pub x: f64
}

impl Line {
    pub fn new(m: f64, b: f64) -> Line {
        Line { m, b }
    }

    pub fn y_at(&self, x: f64) -> f64 {
        self.m * x + self.b
    }
}

impl VerticalLine {
    pub fn new(x: f64) -> VerticalLine {
        VerticalLine { x }
    }
}

/// The infinite line through two points, which is a [`VerticalLine`] when the
/// x coordinates are close and a [`Line`] otherwise:
///
/// ```
/// # use geomlang::plane::{p2, line_through, Line, Value, VerticalLine};
/// assert_eq!(line_through(p2(0.0, 1.0), p2(2.0, 5.0)), Value::Line(Line::new(2.0, 1.0)));
/// assert_eq!(line_through(p2(3.0, 1.0), p2(3.0, 5.0)), Value::VerticalLine(VerticalLine::new(3.0)));
/// ```
pub fn line_through(a: Point2, b: Point2) -> Value {
    if real_close(a.x, b.x) {
        Value::VerticalLine(VerticalLine::new(a.x))
    } else {
        let m = (b.y - a.y) / (b.x - a.x);
        Value::Line(Line::new(m, a.y - m * a.x))
    }
}

impl ops::Add<Vector2> for Line {
    type Output = Line;

    fn add(self, other: Vector2) -> Self {
        Line::new(self.m, self.b + other.y - self.m * other.x)
    }
}

impl ops::Add<Vector2> for VerticalLine {
    type Output = VerticalLine;

    fn add(self, other: Vector2) -> Self {
        VerticalLine::new(self.x + other.x)
    }
}

impl Intersect<&Line> for Line {
    type Output = Value;

    fn intersect(&self, other: &Line) -> Value {
        if real_close(self.m, other.m) {
            if real_close(self.b, other.b) {
                Value::Line(*other)
            } else {
                Value::NoPoints
            }
        } else {
            let x = (other.b - self.b) / (self.m - other.m);
            Value::Point(p2(x, self.y_at(x)))
        }
    }
}

impl Intersect<&VerticalLine> for Line {
    type Output = Value;

    fn intersect(&self, other: &VerticalLine) -> Value {
        Value::Point(p2(other.x, self.y_at(other.x)))
    }
}

impl Intersect<&VerticalLine> for VerticalLine {
    type Output = Value;

    fn intersect(&self, other: &VerticalLine) -> Value {
        if real_close(self.x, other.x) {
            Value::VerticalLine(*other)
        } else {
            Value::NoPoints
        }
    }
}
