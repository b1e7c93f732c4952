use rsubset_derive::*;

use crate::callable::core::*;
use crate::error::Error;
use crate::formals;
use crate::lang::*;
use crate::object::types::*;
use crate::object::*;

fn axis_names(x: &Obj, axis: usize) -> Obj {
    match x {
        Obj::DataFrame(df) if axis == 0 => Obj::from(df.row_labels()),
        Obj::DataFrame(df) => Obj::from(df.column_names()),
        _ => x
            .dims()
            .and_then(|dims| dims.axis_names(axis).map(<[Character]>::to_vec))
            .map_or(Obj::Null, Obj::from),
    }
}

fn set_axis_names(mut x: Obj, axis: usize, value: Obj) -> EvalResult {
    let names = match value {
        Obj::Null => None,
        Obj::Vector(v) => Some(v.as_characters()),
        _ => return Error::ArgumentInvalid("value".to_string()).into(),
    };

    if let Obj::DataFrame(df) = &mut x {
        match names {
            None if axis == 0 => df.reset_row_names(),
            Some(names) if axis == 0 => df.set_row_names(
                names
                    .into_iter()
                    .map(|name| name.as_option().unwrap_or_else(|| "NA".to_string()))
                    .collect(),
            )?,
            None => return Error::Other("data frames must have column names".to_string()).into(),
            Some(names) => df.set_column_names(names)?,
        }
        return Ok(x);
    }

    let Some(dims) = x.dims() else {
        return Error::Other("attempt to set names on an object with no dimensions".to_string())
            .into();
    };

    let extent = dims.extents.get(axis).copied().unwrap_or_default();
    if let Some(names) = &names {
        if names.len() != extent {
            return Error::Other(format!(
                "length of 'dimnames' [{}] not equal to array extent",
                names.len()
            ))
            .into();
        }
    }

    let mut dimnames = dims
        .dimnames
        .clone()
        .unwrap_or_else(|| vec![None; dims.ndim()]);
    dimnames[axis] = names;
    x.set_dims(Some(Dims::new(dims.extents).with_dimnames(Some(dimnames))))?;

    Ok(x)
}

/// Row names of a matrix or data frame
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// rownames(x)
/// rownames(x) <- value
/// ```
///
#[doc(alias = "rownames")]
#[builtin(sym = "rownames")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveRownames;
formals!(PrimitiveRownames, ["x"]);

impl Callable for PrimitiveRownames {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        Ok(axis_names(&args.require("x")?, 0))
    }

    fn call_assign(
        &self,
        target: Obj,
        _args: ExprList,
        value: Obj,
        _stack: &mut CallStack,
    ) -> EvalResult {
        set_axis_names(target, 0, value)
    }
}

/// Column names of a matrix or data frame
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// colnames(x)
/// colnames(x) <- value
/// ```
///
#[doc(alias = "colnames")]
#[builtin(sym = "colnames")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveColnames;
formals!(PrimitiveColnames, ["x"]);

impl Callable for PrimitiveColnames {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        Ok(axis_names(&args.require("x")?, 1))
    }

    fn call_assign(
        &self,
        target: Obj,
        _args: ExprList,
        value: Obj,
        _stack: &mut CallStack,
    ) -> EvalResult {
        set_axis_names(target, 1, value)
    }
}
