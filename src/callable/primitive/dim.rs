use rsubset_derive::*;

use super::matrix::extents_from;
use crate::callable::core::*;
use crate::formals;
use crate::lang::*;
use crate::object::*;

fn extents_obj(x: &Obj) -> Obj {
    match x.dims() {
        Some(dims) => Obj::from(dims.extents.iter().map(|&e| e as i32).collect::<Vec<_>>()),
        None => Obj::Null,
    }
}

fn extent(x: &Obj, axis: usize) -> Obj {
    match x.dims().and_then(|dims| dims.extents.get(axis).copied()) {
        Some(n) => Obj::from(n as i32),
        None => Obj::Null,
    }
}

/// Dimensions of an Object
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// dim(x)
/// dim(x) <- value
/// ```
///
/// ## Examples
///
/// ```custom,{class=r-repl}
/// x <- 1:6
/// dim(x) <- c(2, 3)
/// x
/// ```
///
#[doc(alias = "dim")]
#[builtin(sym = "dim")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveDim;
formals!(PrimitiveDim, ["x"]);

impl Callable for PrimitiveDim {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        Ok(extents_obj(&args.require("x")?))
    }

    fn call_assign(
        &self,
        mut target: Obj,
        _args: ExprList,
        value: Obj,
        _stack: &mut CallStack,
    ) -> EvalResult {
        let dims = match value {
            Obj::Null => None,
            value => Some(Dims::new(extents_from(&value)?)),
        };

        target.set_dims(dims)?;
        Ok(target)
    }
}

#[doc(alias = "nrow")]
#[builtin(sym = "nrow")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveNrow;
formals!(PrimitiveNrow, ["x"]);

impl Callable for PrimitiveNrow {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        Ok(extent(&args.require("x")?, 0))
    }
}

#[doc(alias = "ncol")]
#[builtin(sym = "ncol")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveNcol;
formals!(PrimitiveNcol, ["x"]);

impl Callable for PrimitiveNcol {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        Ok(extent(&args.require("x")?, 1))
    }
}

#[cfg(test)]
mod tests {
    use crate::object::*;
    use crate::{r, r_expect};

    #[test]
    fn plain_vectors_have_no_dims() {
        assert_eq!(r!("dim(1:3)"), Obj::Null);
        assert_eq!(r!("nrow(1:3)"), Obj::Null);
    }

    #[test]
    fn data_frames_report_rows_and_columns() {
        assert_eq!(r!("dim(data.frame(a = 1:3, b = 4:6))"), Obj::from(vec![3, 2]));
        assert_eq!(r!("ncol(data.frame(a = 1:3, b = 4:6))"), Obj::from(2));
    }

    #[test]
    fn dims_can_be_assigned() {
        r_expect! {{"
            x <- 1:6
            dim(x) <- c(2, 3)
            nrow(x) == 2 && ncol(x) == 3 && x[2, 3] == 6
        "}}
    }

    #[test]
    fn dims_must_match_length() {
        assert!(crate::repl::eval("x <- 1:6; dim(x) <- c(4, 2)").is_err());
    }
}
