use rsubset_derive::*;

use crate::callable::core::*;
use crate::formals;
use crate::lang::*;
use crate::object::*;

/// Is an object `NULL`
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// is.null(x)
/// ```
///
/// ## Examples
///
/// ```custom,{class=r-repl}
/// is.null(NULL)
/// is.null(list())
/// ```
///
#[doc(alias = "is.null")]
#[builtin(sym = "is.null")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveIsNull;
formals!(PrimitiveIsNull, ["x"]);

impl Callable for PrimitiveIsNull {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        Ok(Obj::from(args.require("x")?.is_null()))
    }
}
