//! A little language for two-dimensional geometry values: points, lines,
//! vertical lines, line segments, and the empty set. Any two values can be
//! intersected, and expressions combine them with local bindings and shifts:
//!
//! ```
//! use geomlang::lang::{run, Expr};
//! use geomlang::plane::Value;
//! use geomlang::util::intersect::Intersect;
//!
//! let a = Value::segment(0.0, 0.0, 10.0, 0.0);
//! let b = Value::segment(5.0, 0.0, 15.0, 0.0);
//! assert_eq!(a.intersect(&b), Value::segment(5.0, 0.0, 10.0, 0.0));
//!
//! let program = Expr::let_in("a", a, Expr::intersect(Expr::var("a"), Value::vertical_line(3.0)));
//! assert_eq!(run(&program).unwrap(), Value::point(3.0, 0.0));
//! ```
//!
//! All comparisons between reals are tolerant up to
//! [`EPSILON`](util::tolerance::EPSILON).
extern crate cgmath;
pub mod lang;
pub mod plane;
pub mod util;

pub use lang::{run, Env, EvalError, Expr};
pub use plane::Value;
