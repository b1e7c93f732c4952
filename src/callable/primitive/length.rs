use rsubset_derive::*;

use crate::callable::core::*;
use crate::formals;
use crate::lang::*;
use crate::object::*;

/// Length of an Object
///
/// The number of elements of a vector or list, or the number of columns
/// of a data frame.
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// length(x)
/// ```
///
#[doc(alias = "length")]
#[builtin(sym = "length")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveLength;
formals!(PrimitiveLength, ["x"]);

impl Callable for PrimitiveLength {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        let x = args.require("x")?;
        Ok(Obj::from(x.len() as i32))
    }
}

#[cfg(test)]
mod tests {
    use crate::r_expect;

    #[test]
    fn double() {
        r_expect!(length(c(1, 2)) == 2)
    }

    #[test]
    fn integer() {
        r_expect!(length(2:11) == 10)
    }

    #[test]
    fn list() {
        r_expect!(length(list(1, 2, 3, 5)) == 4)
    }

    #[test]
    fn null() {
        r_expect!(length(NULL) == 0)
    }

    #[test]
    fn empty() {
        r_expect!(length(1[FALSE]) == 0)
    }

    #[test]
    fn data_frame_columns() {
        r_expect!(length(data.frame(a = 1:3, b = 1:3)) == 2)
    }

    #[test]
    fn subset_mask() {
        r_expect! {{
            "length((1:3)[c(TRUE, TRUE, FALSE)]) == 2"
        }}
    }
}
