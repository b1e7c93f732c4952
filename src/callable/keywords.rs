use rsubset_derive::*;

use super::core::*;
use crate::formals;
use crate::lang::*;
use crate::object::{ExprList, Obj};

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = "(", kind = Keyword)]
pub struct KeywordParen;
formals!(KeywordParen);
impl Callable for KeywordParen {
    fn call(&self, args: ExprList, stack: &mut CallStack) -> EvalResult {
        stack.eval(args.unnamed_unary_arg())
    }
}

/// Evaluate expressions in turn, returning the last value
///
/// The visibility of a block is that of its last expression.
///
#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = "{", kind = Keyword)]
pub struct KeywordBlock;
formals!(KeywordBlock);
impl Callable for KeywordBlock {
    fn call(&self, args: ExprList, stack: &mut CallStack) -> EvalResult {
        let mut value = Obj::Null;
        stack.visible = true;
        for expr in args.values {
            stack.visible = true;
            value = stack.eval(expr)?;
        }
        Ok(value)
    }

    fn visibility(&self) -> Option<bool> {
        None
    }
}
