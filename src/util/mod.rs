pub mod intersect;
pub mod segment;
pub mod tolerance;
