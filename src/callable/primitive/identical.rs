use rsubset_derive::*;

use crate::callable::core::*;
use crate::formals;
use crate::lang::*;
use crate::object::*;

/// Test Objects for Exact Equality
///
/// Compares values, modes and attributes. Unlike `==`, the comparison is
/// not vectorized and `NA` values are identical to one another.
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// identical(x, y)
/// ```
///
/// ## Examples
///
/// ```custom,{class=r-repl}
/// identical(c(a = 1), c(a = 1))
/// identical(1L, 1)
/// ```
///
#[doc(alias = "identical")]
#[builtin(sym = "identical")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveIdentical;
formals!(PrimitiveIdentical, ["x", "y"]);

impl Callable for PrimitiveIdentical {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        let x = args.require("x")?;
        let y = args.require("y")?;
        Ok(Obj::from(x == y))
    }
}

#[cfg(test)]
mod tests {
    use crate::r_expect;

    #[test]
    fn equal_values() {
        r_expect!(identical(c(1, 2), c(1, 2)))
    }

    #[test]
    fn modes_must_match() {
        r_expect! {{r#"!identical(1L, 1)"#}}
    }

    #[test]
    fn attributes_must_match() {
        r_expect!(!identical(c(a = 1), c(1)))
    }

    #[test]
    fn missing_values_are_identical() {
        r_expect!(identical(NA, NA))
    }
}
