use std::{fmt, mem, rc::Rc};

use crate::util::num::format_literal;

/// Binary operators, from comparisons down to exponentiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `=`
    Equal,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl BinaryOperator {
    /// The operator as written in source.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

/// An abstract syntax tree node representing an expression.
///
/// Expressions always evaluate to a number. Assignments and calls are
/// expressions too, so they may appear anywhere a value is expected.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number literal.
    Literal {
        /// The constant value.
        value: f64,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic or comparison).
    BinaryOp {
        /// Left operand, evaluated first.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Assignment `name := value`; its value is the assigned number.
    Assignment {
        /// Name being bound.
        name:  String,
        /// Right-hand side.
        value: Box<Self>,
    },
    /// Procedure call expression (e.g. `f(1, x)`).
    Call {
        /// Name of the procedure being called.
        name:      String,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

/// A procedure introduced by a `proc` statement.
///
/// The definition captures nothing from the environment it was declared in;
/// its body sees only its own parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureDef {
    /// The procedure name.
    pub name:   String,
    /// Formal parameter names, in order.
    pub params: Vec<String>,
    /// The procedure body.
    pub body:   Statement,
}

/// An abstract syntax tree node representing a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `first; second`. Longer programs nest to the left.
    Sequence {
        /// Runs first.
        first:  Box<Self>,
        /// Runs with the bindings and output `first` produced.
        second: Box<Self>,
    },
    /// `proc name(params) { body }`.
    Procedure(Rc<ProcedureDef>),
    /// `if condition { then } else { else }`.
    If {
        /// Guard; any value other than zero selects `then_branch`.
        condition:   Expr,
        /// Runs when the guard is nonzero.
        then_branch: Box<Self>,
        /// Runs when the guard is zero.
        else_branch: Box<Self>,
    },
    /// `while condition { body }`.
    While {
        /// Re-evaluated before every iteration.
        condition: Expr,
        /// Loop body.
        body:      Box<Self>,
    },
    /// `print expr`.
    Print {
        /// The value to print.
        expr: Expr,
    },
    /// An expression used as a statement.
    Expression {
        /// The expression.
        expr: Expr,
    },
}

impl Statement {
    /// Chains two statements into a sequence.
    #[must_use]
    pub fn then(self, second: Self) -> Self {
        Self::Sequence { first:  Box::new(self),
                         second: Box::new(second), }
    }

    /// A statement with no children, left behind when a node is taken apart.
    const fn placeholder() -> Self {
        Self::Expression { expr: Expr::Literal { value: 0.0 } }
    }
}

/// Sequences are torn down through a worklist; the derived drop would recurse
/// once per statement.
impl Drop for Statement {
    fn drop(&mut self) {
        let Self::Sequence { first, second } = self else {
            return;
        };
        let mut pending = vec![mem::replace(first.as_mut(), Self::placeholder()),
                               mem::replace(second.as_mut(), Self::placeholder())];

        while let Some(mut statement) = pending.pop() {
            if let Self::Sequence { first, second } = &mut statement {
                pending.push(mem::replace(first.as_mut(), Self::placeholder()));
                pending.push(mem::replace(second.as_mut(), Self::placeholder()));
            }
        }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Renders the canonical form: every binary operation and assignment is
/// parenthesised, and literals never use exponent notation, so the text
/// parses back into an equivalent tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value } => f.write_str(&format_literal(*value)),
            Self::Variable { name, .. } => f.write_str(name),
            Self::BinaryOp { left, op, right } => write!(f, "({left}{}{right})", op.symbol()),
            Self::Assignment { name, value } => write!(f, "({name} := {value})"),
            Self::Call { name, arguments, .. } => {
                write!(f, "{name}(")?;
                write_list(f, arguments)?;
                f.write_str(")")
            },
        }
    }
}

impl fmt::Display for ProcedureDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "proc {}(", self.name)?;
        write_list(f, &self.params)?;
        write!(f, ") {{ {} }}", self.body)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence { .. } => {
                let mut pending = vec![self];
                let mut separator = "";
                while let Some(statement) = pending.pop() {
                    if let Self::Sequence { first, second } = statement {
                        pending.push(second);
                        pending.push(first);
                    } else {
                        write!(f, "{separator}{statement}")?;
                        separator = "; ";
                    }
                }
                Ok(())
            },
            Self::Procedure(def) => write!(f, "{def}"),
            Self::If { condition,
                       then_branch,
                       else_branch, } => {
                write!(f, "if {condition} {{ {then_branch} }} else {{ {else_branch} }}")
            },
            Self::While { condition, body } => write!(f, "while {condition} {{ {body} }}"),
            Self::Print { expr } => write!(f, "print {expr}"),
            Self::Expression { expr } => write!(f, "{expr}"),
        }
    }
}
