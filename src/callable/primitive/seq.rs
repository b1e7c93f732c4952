use rsubset_derive::*;

use crate::callable::core::*;
use crate::error::Error;
use crate::formals;
use crate::lang::*;
use crate::object::*;

fn sequence(n: usize) -> Obj {
    Obj::from((1..=n as i32).collect::<Vec<_>>())
}

/// Sequence from 1 to `length.out`
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// seq_len(length.out)
/// ```
///
/// ## Examples
///
/// ```custom,{class=r-repl}
/// seq_len(4)
/// seq_len(0)
/// ```
///
#[doc(alias = "seq_len")]
#[builtin(sym = "seq_len")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveSeqLen;
formals!(PrimitiveSeqLen, ["length.out"]);

impl Callable for PrimitiveSeqLen {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        let n = args
            .count("length.out")?
            .ok_or_else(|| Error::ArgumentMissing("length.out".to_string()))?;
        Ok(sequence(n))
    }
}

/// Sequence along the elements of an object
#[doc(alias = "seq_along")]
#[builtin(sym = "seq_along")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveSeqAlong;
formals!(PrimitiveSeqAlong, ["along.with"]);

impl Callable for PrimitiveSeqAlong {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        Ok(sequence(args.require("along.with")?.len()))
    }
}
