use rsubset_derive::*;

use crate::callable::core::*;
use crate::error::Error;
use crate::formals;
use crate::lang::*;
use crate::object::types::*;
use crate::object::*;

/// Logical values of all arguments, in order
fn logicals(args: &[(Option<String>, Obj)]) -> Result<Vec<Logical>, Error> {
    let mut values = vec![];
    for (_, x) in args {
        match x {
            Obj::Null => (),
            Obj::Vector(v) if v.mode() != Mode::Character => values.extend(v.as_logicals()),
            _ => return Err(Error::CannotBeCoercedTo("logical")),
        }
    }
    Ok(values)
}

/// Are All Values True?
///
/// `TRUE` when no value is `FALSE` and none are missing. Missing values
/// make the result `NA` unless a `FALSE` is present.
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// all(...)
/// ```
///
/// ## Examples
///
/// ```custom,{class=r-repl}
/// all(c(TRUE, NA, FALSE))
/// all(c(TRUE, TRUE))
/// ```
///
#[doc(alias = "all")]
#[builtin(sym = "all")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveAll;
formals!(PrimitiveAll);

impl Callable for PrimitiveAll {
    fn call_matched(&self, args: Args, _stack: &mut CallStack) -> EvalResult {
        let values = logicals(&args.ellipsis)?;
        let result = if values.contains(&Logical::Some(false)) {
            Logical::Some(false)
        } else if values.contains(&Logical::NA) {
            Logical::NA
        } else {
            Logical::Some(true)
        };

        Ok(Obj::from(vec![result]))
    }
}

/// Is Any Value True?
#[doc(alias = "any")]
#[builtin(sym = "any")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveAny;
formals!(PrimitiveAny);

impl Callable for PrimitiveAny {
    fn call_matched(&self, args: Args, _stack: &mut CallStack) -> EvalResult {
        let values = logicals(&args.ellipsis)?;
        let result = if values.contains(&Logical::Some(true)) {
            Logical::Some(true)
        } else if values.contains(&Logical::NA) {
            Logical::NA
        } else {
            Logical::Some(false)
        };

        Ok(Obj::from(vec![result]))
    }
}

#[cfg(test)]
mod tests {
    use crate::object::types::*;
    use crate::object::*;
    use crate::{r, r_expect};

    #[test]
    fn all_true() {
        r_expect!(all(c(TRUE, TRUE)))
    }

    #[test]
    fn false_dominates_missing() {
        r_expect!(!all(c(TRUE, NA, FALSE)))
    }

    #[test]
    fn missing_without_false() {
        assert_eq!(r!("all(c(TRUE, NA))"), Obj::from(vec![Logical::NA]));
    }

    #[test]
    fn empty_is_true() {
        r_expect!(all(logical(0)))
    }

    #[test]
    fn any_true() {
        r_expect!(any(c(FALSE, NA, TRUE)) && !any(c(FALSE, FALSE)))
    }
}
