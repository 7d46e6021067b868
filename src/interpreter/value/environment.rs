use im_rc::HashMap;

use crate::interpreter::value::core::Binding;

/// An immutable mapping from identifiers to bindings.
///
/// Binding a name never changes an existing environment; it returns a new one
/// that shares structure with the old. Cloning is constant time, so holding
/// on to an earlier environment (as a call does to restore the caller's
/// bindings) costs nothing extra.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: HashMap<String, Binding>,
}

impl Environment {
    /// Creates an environment with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the environment a procedure body runs in: one binding per
    /// formal parameter and nothing else.
    #[must_use]
    pub fn from_parameters<I>(parameters: I) -> Self
        where I: IntoIterator<Item = (String, f64)>
    {
        Self { bindings: parameters.into_iter()
                                   .map(|(name, value)| (name, Binding::Number(value)))
                                   .collect(), }
    }

    /// Returns a new environment in which `name` refers to `binding`.
    ///
    /// # Example
    /// ```
    /// use while_lang::interpreter::value::{core::Binding, environment::Environment};
    ///
    /// let before = Environment::new();
    /// let after = before.bind("x", 5.0);
    ///
    /// assert_eq!(before.lookup("x"), None);
    /// assert_eq!(after.lookup("x"), Some(&Binding::Number(5.0)));
    /// ```
    #[must_use]
    pub fn bind(&self, name: &str, binding: impl Into<Binding>) -> Self {
        Self { bindings: self.bindings.update(name.to_string(), binding.into()), }
    }

    /// Looks up the binding for `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Looks up `name` and returns its value if it is bound to a number.
    #[must_use]
    pub fn number(&self, name: &str) -> Option<f64> {
        self.lookup(name).and_then(Binding::as_number)
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
