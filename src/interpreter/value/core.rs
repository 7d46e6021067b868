use std::rc::Rc;

use crate::ast::ProcedureDef;

/// What a name in the environment refers to.
///
/// Numbers are the only runtime values; procedures are bound by `proc`
/// statements and can only be called, never computed with.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    /// A double-precision number.
    Number(f64),
    /// A procedure definition, shared with the AST node that declared it.
    Procedure(Rc<ProcedureDef>),
}

impl Binding {
    /// Returns the number held by this binding, if any.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Procedure(_) => None,
        }
    }
}

impl From<f64> for Binding {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Rc<ProcedureDef>> for Binding {
    fn from(procedure: Rc<ProcedureDef>) -> Self {
        Self::Procedure(procedure)
    }
}
