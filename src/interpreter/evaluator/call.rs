use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluate, Evaluation, Fatal},
        value::{core::Binding, environment::Environment, output::Output},
    },
};

/// Evaluates a procedure call.
///
/// The call target must be bound to a procedure whose parameter count
/// matches the number of arguments; both are checked before any argument is
/// evaluated.
///
/// Arguments are evaluated left to right, threading environment and output,
/// so prints inside arguments are kept and an assignment in one argument is
/// visible to the next. The body then runs in an environment holding only
/// the parameters: it cannot see the caller's variables, other procedures,
/// or itself.
///
/// Once the body finishes, the caller continues with the environment it had
/// *before* the arguments were evaluated. Assignments made by arguments or by
/// the body are discarded; only the output survives the call.
///
/// # Errors
/// - `UnboundIdentifier` if `name` is not bound.
/// - `NotAProcedure` if `name` is bound to a number.
/// - `ArityMismatch` if the argument count is wrong.
/// - Any error raised by an argument or the body.
pub(crate) fn eval_call(name: &str,
                        arguments: &[Expr],
                        line: usize,
                        env: Environment,
                        out: Output)
                        -> EvalResult<Evaluation> {
    let procedure = match env.lookup(name) {
        Some(Binding::Procedure(procedure)) => Rc::clone(procedure),
        Some(Binding::Number(_)) => {
            return Err(Fatal::new(RuntimeError::NotAProcedure { name: name.to_string(),
                                                                line },
                                  out));
        },
        None => {
            return Err(Fatal::new(RuntimeError::UnboundIdentifier { name: name.to_string(),
                                                                    line },
                                  out));
        },
    };

    if procedure.params.len() != arguments.len() {
        return Err(Fatal::new(RuntimeError::ArityMismatch { name: name.to_string(),
                                                            expected: procedure.params.len(),
                                                            found: arguments.len(),
                                                            line },
                              out));
    }

    let (values, out) = eval_arguments(arguments, env.clone(), out)?;
    let frame = Environment::from_parameters(procedure.params.iter().cloned().zip(values));

    log::trace!("line {line}: calling {name} with {} argument(s)", arguments.len());
    let result = procedure.body.evaluate(frame, out)?;

    Ok(Evaluation { value: result.value,
                    env,
                    out: result.out })
}

/// Evaluates call arguments in order and returns their values together with
/// the resulting output. The environment they produce is dropped.
fn eval_arguments(arguments: &[Expr],
                  mut env: Environment,
                  mut out: Output)
                  -> EvalResult<(Vec<f64>, Output)> {
    let mut values = Vec::with_capacity(arguments.len());
    for argument in arguments {
        let result = argument.evaluate(env, out)?;
        values.push(result.value);
        env = result.env;
        out = result.out;
    }
    Ok((values, out))
}
