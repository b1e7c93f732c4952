use rsubset_derive::*;

use crate::callable::core::*;
use crate::formals;
use crate::lang::*;
use crate::object::*;

/// Construct a `list`
///
/// Elements keep their values as given. Names are only attached when at
/// least one argument is named.
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// list(...)
/// ```
///
/// ## Examples
///
/// ```custom,{class=r-repl}
/// list(a = 1, "b", NULL)
/// ```
///
#[doc(alias = "list")]
#[builtin(sym = "list")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveList;
formals!(PrimitiveList);

impl Callable for PrimitiveList {
    fn call_matched(&self, args: Args, _stack: &mut CallStack) -> EvalResult {
        Ok(Obj::List(List::from_pairs(args.ellipsis)))
    }
}
