mod release;
pub use release::*;

#[cfg(feature = "repl")]
mod core;
#[cfg(feature = "repl")]
pub use self::core::*;

#[cfg(feature = "repl")]
pub mod highlight;

#[cfg(feature = "repl")]
pub mod prompt;

#[cfg(feature = "repl")]
pub mod validator;

use crate::lang::{CallStack, EvalResult, Signal};
use crate::parser::{parse, parse_program};

/// Evaluate a snippet in a fresh session
pub fn eval(input: &str) -> EvalResult {
    eval_in(&mut CallStack::default(), input)
}

/// Evaluate a snippet, returning the value of its last expression
pub fn eval_in(stack: &mut CallStack, input: &str) -> EvalResult {
    let expr = parse(input)?;
    stack.eval_and_finalize(expr)
}

/// Evaluate each top-level expression in turn, printing visible results
///
/// Evaluation stops at the first error or at `q()`, which is passed back
/// to the caller as a signal.
///
pub fn eval_and_print(stack: &mut CallStack, input: &str) -> Result<(), Signal> {
    for expr in parse_program(input)? {
        log::trace!("evaluating {expr}");
        let value = stack.eval_and_finalize(expr)?;
        if stack.visible {
            println!("{}", value.format(&stack.session.format));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Cond;
    use crate::object::Obj;

    #[test]
    fn values_persist_within_a_session() {
        let mut stack = CallStack::default();
        assert!(eval_and_print(&mut stack, "x <- c(a = 1, b = 2)").is_ok());
        assert_eq!(eval_in(&mut stack, r#"x[["b"]]"#), Ok(Obj::from(2.0)));
    }

    #[test]
    fn quitting_stops_evaluation() {
        let mut stack = CallStack::default();
        assert_eq!(
            eval_and_print(&mut stack, "x <- 1\nq()\nx <- 2"),
            Err(Signal::Condition(Cond::Terminate))
        );
        assert_eq!(eval_in(&mut stack, "x"), Ok(Obj::from(1.0)));
    }

    #[test]
    fn parse_errors_are_signalled() {
        assert!(matches!(eval("x <- "), Err(Signal::Error(_))));
    }
}
