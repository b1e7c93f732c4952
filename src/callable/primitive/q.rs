use rsubset_derive::*;

use crate::callable::core::*;
use crate::formals;
use crate::lang::*;
use crate::object::ExprList;

/// Quit
///
/// Quit from the interpreter.
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// q()
/// ```
///
#[doc(alias = "q")]
#[doc(alias = "quit")]
#[builtin(sym = "q")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveQ;
formals!(PrimitiveQ, []);

impl Callable for PrimitiveQ {
    fn call(&self, _args: ExprList, _stack: &mut CallStack) -> EvalResult {
        Err(Signal::Condition(Cond::Terminate))
    }

    fn visibility(&self) -> Option<bool> {
        Some(false)
    }
}

#[cfg(test)]
mod tests {
    use crate::lang::{Cond, Signal};

    #[test]
    fn terminates() {
        assert_eq!(
            crate::repl::eval("q()"),
            Err(Signal::Condition(Cond::Terminate))
        );
    }
}
