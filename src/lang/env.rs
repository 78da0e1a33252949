use std::iter::FromIterator;
use std::sync::Arc;

use crate::plane::Value;

/// Ordered variable bindings, most recent first.
///
/// Binding never touches the receiver: it returns a new environment sharing
/// structure with the old one, so a name can be shadowed in an inner scope
/// and still resolve to its outer value afterwards.
///
/// ```
/// # use geomlang::lang::Env;
/// # use geomlang::plane::Value;
/// let outer = Env::new().bind("a", Value::point(0.0, 0.0));
/// let inner = outer.bind("a", Value::vertical_line(1.0));
/// assert_eq!(inner.lookup("a"), Some(&Value::vertical_line(1.0)));
/// assert_eq!(outer.lookup("a"), Some(&Value::point(0.0, 0.0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Env {
    bindings: im::Vector<(Arc<str>, Value)>
}

impl Env {
    pub fn new() -> Self {
        Env { bindings: im::Vector::new() }
    }

    pub fn bind(&self, name: impl Into<Arc<str>>, value: Value) -> Env {
        let mut bindings = self.bindings.clone();
        bindings.push_front((name.into(), value));
        Env { bindings }
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.iter()
            .find(|(bound, _)| &**bound == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Pairs are taken most recent first, as they would be looked up.
impl<N: Into<Arc<str>>> FromIterator<(N, Value)> for Env {
    fn from_iter<I>(it: I) -> Self
    where I: IntoIterator<Item=(N, Value)> {
        let bindings = it.into_iter().map(|(name, value)| (name.into(), value)).collect();
        Env { bindings }
    }
}
