//! The expression language built on top of [`plane`](crate::plane) values.
//!
//! A program is an [`Expr`] tree. It is normalized once with
//! [`Expr::preprocess_prog`] and then evaluated with [`Expr::eval_prog`]
//! against an [`Env`]; [`run`] does both starting from an empty environment.
pub mod env;
pub mod error;
pub mod expr;

pub use env::Env;
pub use error::{EvalError, EvalResult};
pub use expr::Expr;

use crate::plane::Value;

/// Preprocesses `program` and evaluates it with no bindings:
///
/// ```
/// # use geomlang::lang::{run, Expr};
/// # use geomlang::plane::Value;
/// let program = Expr::let_in("p", Value::point(1.0, 1.0), Expr::shift(1.0, 0.0, Expr::var("p")));
/// assert_eq!(run(&program).unwrap(), Value::point(2.0, 1.0));
/// ```
#[tracing::instrument(level = "debug", skip(program), fields(program = %program))]
pub fn run(program: &Expr) -> EvalResult<Value> {
    let value = program.preprocess_prog().eval_prog(&Env::new())?;
    tracing::debug!(result = %value, "evaluated program");
    Ok(value)
}

#[cfg(test)]
mod test {
    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_run() {
        init_tracing();

        let program = Expr::let_in(
            "a",
            Value::segment(10.0, 0.0, 0.0, 0.0),
            Expr::intersect(Expr::var("a"), Value::segment(15.0, 0.0, 5.0, 0.0))
        );
        assert_eq!(run(&program), Ok(Value::segment(5.0, 0.0, 10.0, 0.0)));
        assert_eq!(run(&Expr::var("x")), Err(EvalError::unbound("x")));
    }
}
