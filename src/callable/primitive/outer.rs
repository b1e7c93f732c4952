use rsubset_derive::*;

use crate::callable::core::*;
use crate::error::Error;
use crate::formals;
use crate::lang::*;
use crate::object::*;
use crate::subset::{Selection, Slot};

/// Outer Product of Vectors
///
/// Applies `FUN` to every pair of elements of `X` and `Y`, producing a
/// matrix with a row for each element of `X` and a column for each
/// element of `Y`. `FUN` is called once with both arguments expanded, so
/// it must be vectorized. Further arguments are passed on to `FUN`.
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// outer(X, Y, FUN = "*", ...)
/// ```
///
/// ## Examples
///
/// ```custom,{class=r-repl}
/// outer(1:3, 1:4)
/// ```
///
/// ```custom,{class=r-repl}
/// outer(c("a", "b"), 1:3, paste, sep = "")
/// ```
///
#[doc(alias = "outer")]
#[builtin(sym = "outer")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveOuter;
formals!(PrimitiveOuter, ["X", "Y", "FUN", "..."]);

impl Callable for PrimitiveOuter {
    fn call_matched(&self, mut args: Args, stack: &mut CallStack) -> EvalResult {
        let x = args.require("X")?;
        let y = args.require("Y")?;

        let f = match args.take("FUN") {
            None => stack.env().get_function("*")?,
            Some(Obj::Function(f)) => Obj::Function(f),
            Some(name) => match name.as_string() {
                Some(name) => stack.env().get_function(&name)?,
                None => return Error::ArgumentInvalid("FUN".to_string()).into(),
            },
        };

        let Obj::Function(f) = f else {
            return Error::ArgumentInvalid("FUN".to_string()).into();
        };

        let (nx, ny) = (x.len(), y.len());
        let xs: Selection = (0..nx * ny).map(|k| Slot::Hit(k % nx)).collect();
        let ys: Selection = (0..nx * ny).map(|k| Slot::Hit(k / nx)).collect();

        let mut values = vec![
            (None, x.unname().select(&xs)),
            (None, y.unname().select(&ys)),
        ];
        values.append(&mut args.ellipsis);

        log::trace!("outer product of {nx} x {ny} elements with `{}`", f.sym());
        let matched = f.match_args(values)?;
        let mut result = f.call_matched(matched, stack)?;

        let dimnames = match (x.names(), y.names()) {
            (None, None) => None,
            (rows, cols) => Some(vec![rows, cols]),
        };

        result.set_dims(Some(Dims::new(vec![nx, ny]).with_dimnames(dimnames)))?;
        Ok(result)
    }
}
