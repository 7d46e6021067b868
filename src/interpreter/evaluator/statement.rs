use std::rc::Rc;

use crate::{
    ast::{Expr, Statement},
    interpreter::{
        evaluator::core::{EvalResult, Evaluate, Evaluation},
        value::{environment::Environment, output::Output},
    },
};

/// Statements run through an explicit worklist rather than recursion on
/// `Sequence`, so program length never grows the native stack.
impl Evaluate for Statement {
    #[allow(clippy::float_cmp)]
    fn evaluate(&self, env: Environment, out: Output) -> EvalResult<Evaluation> {
        let mut pending = vec![self];
        let mut state = Evaluation::new(0.0, env, out);

        while let Some(statement) = pending.pop() {
            let Evaluation { env, out, .. } = state;
            state = match statement {
                Self::Sequence { first, second } => {
                    pending.push(second);
                    pending.push(first);
                    Evaluation::new(0.0, env, out)
                },
                Self::Procedure(def) => {
                    let env = env.bind(&def.name, Rc::clone(def));
                    Evaluation::new(1.0, env, out)
                },
                Self::If { condition,
                           then_branch,
                           else_branch, } => {
                    let guard = condition.evaluate(env, out)?;
                    let branch = if guard.value == 0.0 { else_branch } else { then_branch };
                    pending.push(branch);
                    Evaluation::new(0.0, guard.env, guard.out)
                },
                Self::While { condition, body } => eval_while(condition, body, env, out)?,
                Self::Print { expr } => {
                    let result = expr.evaluate(env, out)?;
                    Evaluation::new(0.0, result.env, result.out.print(result.value))
                },
                Self::Expression { expr } => expr.evaluate(env, out)?,
            };
        }

        Ok(state)
    }
}

/// Runs a loop iteratively.
///
/// When the guard evaluates to zero the loop yields `0` together with the
/// environment from before that final guard check; the guard's own
/// assignments on that check are dropped, its output is kept.
#[allow(clippy::float_cmp)]
fn eval_while(condition: &Expr,
              body: &Statement,
              mut env: Environment,
              mut out: Output)
              -> EvalResult<Evaluation> {
    let mut iterations: u64 = 0;
    loop {
        let guard = condition.evaluate(env.clone(), out)?;
        if guard.value == 0.0 {
            log::trace!("loop finished after {iterations} iteration(s)");
            return Ok(Evaluation::new(0.0, env, guard.out));
        }

        let pass = body.evaluate(guard.env, guard.out)?;
        env = pass.env;
        out = pass.out;
        iterations += 1;
    }
}
