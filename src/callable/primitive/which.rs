use rsubset_derive::*;

use crate::callable::core::*;
use crate::error::Error;
use crate::formals;
use crate::lang::*;
use crate::object::types::*;
use crate::object::*;

/// Which Indices are `TRUE`
///
/// Converts a logical vector into the (one-based) positions of its `TRUE`
/// elements. Missing values are skipped, and names are kept.
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// which(x)
/// ```
///
/// ## Examples
///
/// ```custom,{class=r-repl}
/// which(c(a = TRUE, b = FALSE, c = TRUE))
/// ```
///
#[doc(alias = "which")]
#[builtin(sym = "which")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveWhich;
formals!(PrimitiveWhich, ["x"]);

impl Callable for PrimitiveWhich {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        let x = args.require("x")?;
        let v = match &x {
            Obj::Vector(v) if v.mode() == Mode::Logical => v,
            _ => return Error::Other("argument to 'which' is not logical".to_string()).into(),
        };

        let positions: Vec<usize> = v
            .as_logicals()
            .into_iter()
            .enumerate()
            .filter(|(_, x)| matches!(x, OptionNA::Some(true)))
            .map(|(i, _)| i)
            .collect();

        let names = v
            .names()
            .map(|names| positions.iter().map(|&i| names[i].clone()).collect());

        let mut result = Vector::from(
            positions
                .into_iter()
                .map(|i| i as i32 + 1)
                .collect::<Vec<_>>(),
        );
        result.set_names(names);
        Ok(Obj::Vector(result))
    }
}
