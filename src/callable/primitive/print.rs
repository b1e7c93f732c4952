use rsubset_derive::*;

use crate::callable::core::*;
use crate::formals;
use crate::lang::*;

/// Print to the Console
///
/// Prints `x` using the session's formatting options and returns it
/// invisibly.
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// print(x)
/// ```
///
/// ## Arguments
///
/// * `x`: An object to print.
///
/// ## Examples
///
/// ```custom,{class=r-repl}
/// print("Hello, World!")
/// ```
///
#[doc(alias = "print")]
#[builtin(sym = "print")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitivePrint;
formals!(PrimitivePrint, ["x", "..."]);

impl Callable for PrimitivePrint {
    fn call_matched(&self, mut args: Args, stack: &mut CallStack) -> EvalResult {
        let x = args.require("x")?;
        println!("{}", x.format(&stack.session.format));
        Ok(x)
    }

    fn visibility(&self) -> Option<bool> {
        Some(false)
    }
}

/// Return a value without printing it
#[doc(alias = "invisible")]
#[builtin(sym = "invisible")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveInvisible;
formals!(PrimitiveInvisible, ["x"]);

impl Callable for PrimitiveInvisible {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        Ok(args.take("x").unwrap_or_default())
    }

    fn visibility(&self) -> Option<bool> {
        Some(false)
    }
}

#[cfg(test)]
mod tests {
    use crate::lang::CallStack;
    use crate::object::*;
    use crate::parser::parse;

    #[test]
    fn print_returns_its_argument_invisibly() {
        let mut stack = CallStack::default();
        let expr = parse("print(1:2)").unwrap();
        let value = stack.eval_and_finalize(expr).unwrap();
        assert_eq!(value, Obj::from(vec![1, 2]));
        assert!(!stack.visible);
    }

    #[test]
    fn invisible_values_are_not_shown() {
        let mut stack = CallStack::default();
        let expr = parse("invisible(3)").unwrap();
        assert_eq!(stack.eval_and_finalize(expr).unwrap(), Obj::from(3.0));
        assert!(!stack.visible);
    }
}
