//! Epsilon-tolerant comparisons shared by every geometry value.
//!
//! Equality between reals is never exact: two coordinates are the same if
//! they differ by less than [`EPSILON`]. Ordering comparisons are left to the
//! callers and stay exact unless they go through [`inbetween`].

/// Fixed tolerance for all real comparisons.
pub const EPSILON: f64 = 0.00001;

/// ```
/// # use geomlang::util::tolerance::real_close;
/// assert!(real_close(1.0, 1.000001));
/// assert!(!real_close(1.0, 1.001));
/// ```
pub fn real_close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

pub fn real_close_point(x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
    real_close(x1, x2) && real_close(y1, y2)
}

/// Is `v` within `[end1, end2]`, widened by epsilon on both sides? The two
/// ends may come in either order.
pub fn inbetween(v: f64, end1: f64, end2: f64) -> bool {
    (end1 - EPSILON <= v && v <= end2 + EPSILON) || (end2 - EPSILON <= v && v <= end1 + EPSILON)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_real_close() {
        assert!(real_close(0.0, 0.0));
        assert!(real_close(0.0, EPSILON / 2.0));
        assert!(!real_close(0.0, EPSILON));
        assert!(real_close_point(1.0, 2.0, 1.000001, 1.999999));
        assert!(!real_close_point(1.0, 2.0, 1.0, 2.1));
    }

    #[test]
    fn test_inbetween() {
        assert!(inbetween(0.5, 0.0, 1.0));
        assert!(inbetween(0.5, 1.0, 0.0));
        assert!(inbetween(1.0 + EPSILON / 2.0, 0.0, 1.0));
        assert!(inbetween(-EPSILON / 2.0, 1.0, 0.0));
        assert!(!inbetween(1.1, 0.0, 1.0));
        assert!(!inbetween(-0.1, 1.0, 0.0));
    }
}
