use rsubset_derive::*;

use crate::callable::core::*;
use crate::formals;
use crate::lang::*;
use crate::object::types::*;
use crate::object::*;

fn length(args: &mut Args) -> Result<usize, Signal> {
    Ok(args.count("length")?.unwrap_or(0))
}

/// `integer(length)`: a vector of zeros
#[builtin(sym = "integer")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveInteger;
formals!(PrimitiveInteger, ["length"]);

impl Callable for PrimitiveInteger {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        Ok(Obj::from(vec![0; length(&mut args)?]))
    }
}

/// `numeric(length)`: a vector of zeros
#[builtin(sym = "numeric")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveNumeric;
formals!(PrimitiveNumeric, ["length"]);

impl Callable for PrimitiveNumeric {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        Ok(Obj::from(vec![0.0; length(&mut args)?]))
    }
}

/// `character(length)`: a vector of empty strings
#[builtin(sym = "character")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveCharacter;
formals!(PrimitiveCharacter, ["length"]);

impl Callable for PrimitiveCharacter {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        Ok(Obj::from(vec![Character::Some(String::new()); length(&mut args)?]))
    }
}

/// `logical(length)`: a vector of `FALSE`
#[builtin(sym = "logical")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveLogical;
formals!(PrimitiveLogical, ["length"]);

impl Callable for PrimitiveLogical {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        Ok(Obj::from(vec![false; length(&mut args)?]))
    }
}

#[cfg(test)]
mod tests {
    use crate::object::types::*;
    use crate::object::*;
    use crate::r;

    #[test]
    fn empty_constructors() {
        assert_eq!(r!("integer(0)"), Obj::Vector(Vector::empty(Mode::Integer)));
        assert_eq!(r!("character()"), Obj::Vector(Vector::empty(Mode::Character)));
        assert_eq!(r!("numeric(2)"), Obj::from(vec![0.0, 0.0]));
        assert_eq!(r!("logical(1)"), Obj::from(vec![false]));
    }
}
