/// A finite piece of a line, given by its two endpoints.
///
/// Endpoints are not assumed to be in any particular order.
pub trait Segment: Sized {
    type Point: Copy;

    fn from_endpoints(start: Self::Point, end: Self::Point) -> Self;
    fn start(&self) -> Self::Point;
    fn end(&self) -> Self::Point;

    fn reversed(&self) -> Self {
        Self::from_endpoints(self.end(), self.start())
    }
}
