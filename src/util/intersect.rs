/// Two objects whose common points can be computed.
///
/// Implemented pairwise for the concrete plane types, and once for
/// [`Value`](crate::plane::value::Value), which picks the pairing from the
/// kinds of both operands.
pub trait Intersect<K> {
    type Output;

    fn intersect(&self, other: K) -> Self::Output;
}
