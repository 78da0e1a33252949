pub type EvalResult<T> = Result<T, EvalError>;

/// Failures while evaluating an expression. Any error aborts the whole
/// program.
#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
pub enum EvalError {
    #[error("undefined variable: {0}")]
    UnboundVariable(String),
}

impl EvalError {
    pub fn unbound(name: impl Into<String>) -> Self {
        Self::UnboundVariable(name.into())
    }
}
