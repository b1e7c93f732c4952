use rsubset_derive::*;

use crate::callable::core::*;
use crate::error::Error;
use crate::formals;
use crate::lang::*;
use crate::object::*;

/// Get or Set the Names of an Object
///
/// Returns the element names of a vector or list, the column names of a
/// data frame, or `NULL` when the object carries no names.
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// names(x)
/// names(x) <- value
/// ```
///
/// ## Arguments
///
/// * `x`: An object from which to retrieve names
/// * `value`: A character vector of names, or `NULL` to remove them.
///   Shorter vectors are padded with `NA`.
///
/// ## Examples
///
/// ```custom,{class=r-repl}
/// names(list(a = 1, b = 2, 3))
/// ```
///
/// ```custom,{class=r-repl}
/// x <- 1:3
/// names(x) <- c("a", "b")
/// x
/// ```
///
#[doc(alias = "names")]
#[builtin(sym = "names")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveNames;
formals!(PrimitiveNames, ["x"]);

impl Callable for PrimitiveNames {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        let x = args.require("x")?;
        Ok(x.names().map_or(Obj::Null, Obj::from))
    }

    fn call_assign(
        &self,
        mut target: Obj,
        _args: ExprList,
        value: Obj,
        _stack: &mut CallStack,
    ) -> EvalResult {
        let names = match value {
            Obj::Null => None,
            Obj::Vector(v) => Some(v.as_characters()),
            _ => return Error::ArgumentInvalid("value".to_string()).into(),
        };

        target.set_names(names)?;
        Ok(target)
    }
}

/// Remove names and dimensions
#[doc(alias = "unname")]
#[builtin(sym = "unname")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveUnname;
formals!(PrimitiveUnname, ["obj"]);

impl Callable for PrimitiveUnname {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        Ok(args.require("obj")?.unname())
    }
}

#[cfg(test)]
mod tests {
    use crate::object::types::*;
    use crate::object::*;
    use crate::{r, r_expect};

    #[test]
    fn unnamed_objects_have_null_names() {
        assert_eq!(r!("names(1:3)"), Obj::Null);
    }

    #[test]
    fn list_names_include_empty_names() {
        assert_eq!(r!("names(list(a = 1, 2))"), Obj::from(vec!["a", ""]));
    }

    #[test]
    fn replacement_pads_with_na() {
        r_expect! {{r#"
            x <- 1:3
            names(x) <- c("a", "b")
            identical(names(x)[1:2], c("a", "b")) && is.na(names(x)[3])
        "#}}
    }

    #[test]
    fn replacement_with_null_removes_names() {
        r_expect! {{r#"
            x <- c(a = 1, b = 2)
            names(x) <- NULL
            is.null(names(x))
        "#}}
    }

    #[test]
    fn unname_strips_attributes() {
        assert_eq!(r!("unname(c(a = 1))"), Obj::from(vec![Double::Some(1.0)]));
    }
}
