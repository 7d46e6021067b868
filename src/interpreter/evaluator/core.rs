use crate::{
    ast::Expr,
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::{binary::eval_binary_op, call::eval_call},
        value::{core::Binding, environment::Environment, output::Output},
    },
};

/// Result type used by the evaluator.
///
/// Evaluation either produces a value of type `T` or stops with a [`Fatal`]
/// error that still carries the output printed so far.
pub type EvalResult<T> = Result<T, Fatal>;

/// The state produced by evaluating one node.
///
/// Every node returns the value it computed together with the environment
/// and output the next node continues from. Nothing else is shared between
/// nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The node's value. Statements yield fixed markers (`1` for `proc`, `0`
    /// for `print` and `while`).
    pub value: f64,
    /// Bindings after the node ran.
    pub env:   Environment,
    /// Output after the node ran.
    pub out:   Output,
}

impl Evaluation {
    #[must_use]
    pub const fn new(value: f64, env: Environment, out: Output) -> Self {
        Self { value, env, out }
    }
}

/// A runtime error that terminated evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Fatal {
    /// What went wrong.
    pub error:  RuntimeError,
    /// Output printed before the error.
    pub output: Output,
}

impl Fatal {
    #[must_use]
    pub const fn new(error: RuntimeError, output: Output) -> Self {
        Self { error, output }
    }
}

impl From<Fatal> for Error {
    fn from(fatal: Fatal) -> Self {
        Self::Runtime { error:  fatal.error,
                        output: fatal.output.into_string(), }
    }
}

/// Evaluation of AST nodes.
///
/// Implementors consume the incoming environment and output and hand back
/// new ones; a node never reaches evaluation state through any other
/// channel. Composite nodes evaluate their children left to right, feeding
/// each child the state the previous one produced.
pub trait Evaluate {
    /// Evaluates the node against `env` and `out`.
    ///
    /// # Errors
    /// Returns [`Fatal`] on the first runtime error; evaluation does not
    /// continue past it.
    fn evaluate(&self, env: Environment, out: Output) -> EvalResult<Evaluation>;
}

impl Evaluate for Expr {
    fn evaluate(&self, env: Environment, out: Output) -> EvalResult<Evaluation> {
        match self {
            Self::Literal { value } => Ok(Evaluation::new(*value, env, out)),
            Self::Variable { name, line } => eval_variable(name, *line, env, out),
            Self::BinaryOp { left, op, right } => eval_binary_op(left, *op, right, env, out),
            Self::Assignment { name, value } => {
                let result = value.evaluate(env, out)?;
                let env = result.env.bind(name, result.value);
                Ok(Evaluation { env, ..result })
            },
            Self::Call { name,
                         arguments,
                         line, } => eval_call(name, arguments, *line, env, out),
        }
    }
}

/// Resolves a variable reference to its number.
fn eval_variable(name: &str,
                 line: usize,
                 env: Environment,
                 out: Output)
                 -> EvalResult<Evaluation> {
    let value = match env.lookup(name) {
        Some(Binding::Number(value)) => *value,
        Some(Binding::Procedure(_)) => {
            return Err(Fatal::new(RuntimeError::NotANumber { name: name.to_string(),
                                                             line },
                                  out));
        },
        None => {
            return Err(Fatal::new(RuntimeError::UnboundIdentifier { name: name.to_string(),
                                                                    line },
                                  out));
        },
    };
    Ok(Evaluation::new(value, env, out))
}
