use std::fmt;
use std::sync::Arc;

use crate::lang::{Env, EvalError, EvalResult};
use crate::plane::Value;
use crate::util::intersect::Intersect;

/// An expression producing a geometry value. Values are leaf expressions
/// that evaluate to themselves.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Value(Value),
    Intersect(Box<Expr>, Box<Expr>),
    Let {
        name: Arc<str>,
        bound: Box<Expr>,
        body: Box<Expr>
    },
    Var(Arc<str>),
    Shift {
        dx: f64,
        dy: f64,
        body: Box<Expr>
    },
}

impl Expr {
    pub fn intersect(a: impl Into<Expr>, b: impl Into<Expr>) -> Expr {
        Expr::Intersect(Box::new(a.into()), Box::new(b.into()))
    }

    pub fn let_in(name: impl Into<Arc<str>>, bound: impl Into<Expr>, body: impl Into<Expr>) -> Expr {
        Expr::Let {
            name: name.into(),
            bound: Box::new(bound.into()),
            body: Box::new(body.into())
        }
    }

    pub fn var(name: impl Into<Arc<str>>) -> Expr {
        Expr::Var(name.into())
    }

    pub fn shift(dx: f64, dy: f64, body: impl Into<Expr>) -> Expr {
        Expr::Shift { dx, dy, body: Box::new(body.into()) }
    }

    /// A normalized copy of this tree, with every segment literal replaced
    /// by its canonical form. Applying it twice changes nothing further.
    pub fn preprocess_prog(&self) -> Expr {
        match self {
            Expr::Value(v) => Expr::Value(v.preprocess()),
            Expr::Intersect(a, b) => Expr::intersect(a.preprocess_prog(), b.preprocess_prog()),
            Expr::Let { name, bound, body } => {
                Expr::let_in(name.clone(), bound.preprocess_prog(), body.preprocess_prog())
            },
            Expr::Var(_) => self.clone(),
            Expr::Shift { dx, dy, body } => Expr::shift(*dx, *dy, body.preprocess_prog()),
        }
    }

    /// Evaluates against `env`. Fails only when a variable is not bound.
    ///
    /// ```
    /// # use geomlang::lang::{Env, EvalError, Expr};
    /// let missing = Expr::var("x").eval_prog(&Env::new());
    /// assert_eq!(missing, Err(EvalError::unbound("x")));
    /// ```
    pub fn eval_prog(&self, env: &Env) -> EvalResult<Value> {
        match self {
            Expr::Value(v) => Ok(v.clone()),
            Expr::Intersect(a, b) => {
                let a = a.eval_prog(env)?;
                let b = b.eval_prog(env)?;
                Ok(a.intersect(&b))
            },
            Expr::Let { name, bound, body } => {
                let value = bound.eval_prog(env)?;
                tracing::trace!(name = %name, value = %value, "bind");
                body.eval_prog(&env.bind(name.clone(), value))
            },
            Expr::Var(name) => match env.lookup(name) {
                Some(value) => {
                    tracing::trace!(name = %name, value = %value, "lookup");
                    Ok(value.clone())
                },
                None => {
                    tracing::debug!(name = %name, "unbound variable");
                    Err(EvalError::unbound(name.to_string()))
                }
            },
            Expr::Shift { dx, dy, body } => Ok(body.eval_prog(env)?.shift(*dx, *dy)),
        }
    }
}

impl From<Value> for Expr {
    fn from(v: Value) -> Expr {
        Expr::Value(v)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Value(v) => write!(f, "{}", v),
            Expr::Intersect(a, b) => write!(f, "Intersect({}, {})", a, b),
            Expr::Let { name, bound, body } => write!(f, "Let({:?}, {}, {})", name, bound, body),
            Expr::Var(name) => write!(f, "Var({:?})", name),
            Expr::Shift { dx, dy, body } => write!(f, "Shift({}, {}, {})", dx, dy, body),
        }
    }
}
