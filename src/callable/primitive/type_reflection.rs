use rsubset_derive::*;

use crate::callable::core::*;
use crate::formals;
use crate::lang::*;
use crate::object::*;

/// The Type of an Object
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// typeof(x)
/// ```
///
/// ## Examples
///
/// ```custom,{class=r-repl}
/// typeof(1:2)
/// typeof(data.frame(a = 1))
/// ```
///
#[doc(alias = "typeof")]
#[builtin(sym = "typeof")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveTypeof;
formals!(PrimitiveTypeof, ["x"]);

impl Callable for PrimitiveTypeof {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        Ok(Obj::from(args.require("x")?.type_name()))
    }
}

#[cfg(test)]
mod tests {
    use crate::object::*;
    use crate::r;

    #[test]
    fn atomic_types() {
        assert_eq!(r!("typeof(TRUE)"), Obj::from("logical"));
        assert_eq!(r!("typeof(1L)"), Obj::from("integer"));
        assert_eq!(r!("typeof(1)"), Obj::from("double"));
        assert_eq!(r!(r#"typeof("a")"#), Obj::from("character"));
    }

    #[test]
    fn recursive_types() {
        assert_eq!(r!("typeof(NULL)"), Obj::from("NULL"));
        assert_eq!(r!("typeof(list())"), Obj::from("list"));
        assert_eq!(r!("typeof(data.frame(a = 1))"), Obj::from("list"));
        assert_eq!(r!("typeof(c)"), Obj::from("builtin"));
    }
}
