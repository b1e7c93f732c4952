use rsubset_derive::*;

use super::core::*;
use super::primitive::match_positions;
use crate::error::Error;
use crate::formals;
use crate::lang::{CallStack, EvalResult, Signal};
use crate::object::operators::*;
use crate::object::types::*;
use crate::object::*;
use crate::subset;

/// Operands of a vectorized operator, with `NULL` acting as a zero-length vector
fn vectors(lhs: Obj, rhs: Obj) -> Result<(Vector, Vector), Error> {
    Ok((operand(lhs)?, operand(rhs)?))
}

fn operand(x: Obj) -> Result<Vector, Error> {
    match x {
        Obj::Vector(v) => Ok(v),
        Obj::Null => Ok(Vector::empty(Mode::Logical)),
        _ => Err(Error::Other(
            "non-numeric argument to binary operator".to_string(),
        )),
    }
}

fn operands(args: &mut Args) -> Result<(Obj, Obj), Error> {
    Ok((args.require("e1")?, args.require("e2")?))
}

fn arith_matched(op: ArithOp, mut args: Args) -> EvalResult {
    let (lhs, rhs) = operands(&mut args)?;
    let (l, r) = vectors(lhs, rhs)?;
    Ok(Obj::Vector(arith(op, &l, &r)?))
}

fn relational_matched(op: CmpOp, mut args: Args) -> EvalResult {
    let (lhs, rhs) = operands(&mut args)?;
    if lhs.is_list_like() || rhs.is_list_like() {
        return Err(Error::Other("comparison is possible only for atomic types".to_string()).into());
    }

    let (l, r) = vectors(lhs, rhs)?;
    Ok(Obj::Vector(relational(op, &l, &r)?))
}

fn logical_matched(op: LogicOp, mut args: Args) -> EvalResult {
    let (lhs, rhs) = operands(&mut args)?;
    let (l, r) = vectors(lhs, rhs)?;
    Ok(Obj::Vector(logical(op, &l, &r)?))
}

/// A length-one logical operand of `&&` or `||`
fn scalar_logical(x: &Obj, op: &str) -> Result<Logical, Error> {
    match x {
        Obj::Vector(v) if v.len() == 1 && v.mode() != Mode::Character => {
            Ok(v.as_logicals().pop().unwrap_or(Logical::NA))
        }
        Obj::Vector(v) if v.len() > 1 => Err(Error::Other(format!(
            "'length = {}' in coercion to 'logical(1)'",
            v.len()
        ))),
        _ => Err(Error::Other(format!("invalid 'x' type in 'x {op} y'"))),
    }
}

fn assign_call(args: ExprList, stack: &mut CallStack) -> EvalResult {
    let (lhs, rhs) = args.unnamed_binary_args();
    let value = stack.eval(rhs)?;
    stack.assign(lhs, value)
}

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = "<-", kind = Infix)]
pub struct InfixAssign;
formals!(InfixAssign);
impl Callable for InfixAssign {
    fn call(&self, args: ExprList, stack: &mut CallStack) -> EvalResult {
        assign_call(args, stack)
    }

    fn visibility(&self) -> Option<bool> {
        Some(false)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = "=", kind = Infix)]
pub struct InfixAssignEq;
formals!(InfixAssignEq);
impl Callable for InfixAssignEq {
    fn call(&self, args: ExprList, stack: &mut CallStack) -> EvalResult {
        assign_call(args, stack)
    }

    fn visibility(&self) -> Option<bool> {
        Some(false)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = "+", kind = Infix)]
pub struct InfixAdd;
formals!(InfixAdd, ["e1", "e2"]);
impl Callable for InfixAdd {
    fn call_matched(&self, args: Args, _stack: &mut CallStack) -> EvalResult {
        arith_matched(ArithOp::Add, args)
    }
}

/// Subtraction, or negation when called with a single argument
#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = "-", kind = Infix)]
pub struct InfixSub;
formals!(InfixSub, ["e1", "e2"]);
impl Callable for InfixSub {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        let what = args.require("e1")?;
        match args.take("e2") {
            None => Ok(Obj::Vector(negate(&operand(what)?)?)),
            Some(rhs) => {
                let (l, r) = vectors(what, rhs)?;
                Ok(Obj::Vector(arith(ArithOp::Sub, &l, &r)?))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = "!", kind = Prefix)]
pub struct PrefixNot;
formals!(PrefixNot, ["x"]);
impl Callable for PrefixNot {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        let what = args.require("x")?;
        Ok(Obj::Vector(not(&operand(what)?)?))
    }
}

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = "*", kind = Infix)]
pub struct InfixMul;
formals!(InfixMul, ["e1", "e2"]);
impl Callable for InfixMul {
    fn call_matched(&self, args: Args, _stack: &mut CallStack) -> EvalResult {
        arith_matched(ArithOp::Mul, args)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = "/", kind = Infix)]
pub struct InfixDiv;
formals!(InfixDiv, ["e1", "e2"]);
impl Callable for InfixDiv {
    fn call_matched(&self, args: Args, _stack: &mut CallStack) -> EvalResult {
        arith_matched(ArithOp::Div, args)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = "^", kind = Infix)]
pub struct InfixPow;
formals!(InfixPow, ["e1", "e2"]);
impl Callable for InfixPow {
    fn call_matched(&self, args: Args, _stack: &mut CallStack) -> EvalResult {
        arith_matched(ArithOp::Pow, args)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = "%%", kind = Infix)]
pub struct InfixMod;
formals!(InfixMod, ["e1", "e2"]);
impl Callable for InfixMod {
    fn call_matched(&self, args: Args, _stack: &mut CallStack) -> EvalResult {
        arith_matched(ArithOp::Mod, args)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = "%in%", kind = Infix)]
pub struct InfixIn;
formals!(InfixIn, ["x", "table"]);
impl Callable for InfixIn {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        let (x, table) = vectors(args.require("x")?, args.require("table")?)?;
        let found: Vec<bool> = match_positions(&x, &table)
            .into_iter()
            .map(|i| i.is_some())
            .collect();
        Ok(Obj::from(found))
    }
}

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = "||", kind = Infix)]
pub struct InfixOr;
formals!(InfixOr);
impl Callable for InfixOr {
    fn call(&self, args: ExprList, stack: &mut CallStack) -> EvalResult {
        let (lhs, rhs) = args.unnamed_binary_args();
        let l = scalar_logical(&stack.eval(lhs)?, "||")?;
        if l == OptionNA::Some(true) {
            return Ok(Obj::from(true));
        }

        let r = scalar_logical(&stack.eval(rhs)?, "||")?;
        let res = match (l, r) {
            (_, OptionNA::Some(true)) => OptionNA::Some(true),
            (OptionNA::Some(false), OptionNA::Some(false)) => OptionNA::Some(false),
            _ => OptionNA::NA,
        };

        Ok(Obj::from(vec![res]))
    }
}

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = "&&", kind = Infix)]
pub struct InfixAnd;
formals!(InfixAnd);
impl Callable for InfixAnd {
    fn call(&self, args: ExprList, stack: &mut CallStack) -> EvalResult {
        let (lhs, rhs) = args.unnamed_binary_args();
        let l = scalar_logical(&stack.eval(lhs)?, "&&")?;
        if l == OptionNA::Some(false) {
            return Ok(Obj::from(false));
        }

        let r = scalar_logical(&stack.eval(rhs)?, "&&")?;
        let res = match (l, r) {
            (_, OptionNA::Some(false)) => OptionNA::Some(false),
            (OptionNA::Some(true), OptionNA::Some(true)) => OptionNA::Some(true),
            _ => OptionNA::NA,
        };

        Ok(Obj::from(vec![res]))
    }
}

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = "|", kind = Infix)]
pub struct InfixVectorOr;
formals!(InfixVectorOr, ["e1", "e2"]);
impl Callable for InfixVectorOr {
    fn call_matched(&self, args: Args, _stack: &mut CallStack) -> EvalResult {
        logical_matched(LogicOp::Or, args)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = "&", kind = Infix)]
pub struct InfixVectorAnd;
formals!(InfixVectorAnd, ["e1", "e2"]);
impl Callable for InfixVectorAnd {
    fn call_matched(&self, args: Args, _stack: &mut CallStack) -> EvalResult {
        logical_matched(LogicOp::And, args)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = ">", kind = Infix)]
pub struct InfixGreater;
formals!(InfixGreater, ["e1", "e2"]);
impl Callable for InfixGreater {
    fn call_matched(&self, args: Args, _stack: &mut CallStack) -> EvalResult {
        relational_matched(CmpOp::Gt, args)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = ">=", kind = Infix)]
pub struct InfixGreaterEqual;
formals!(InfixGreaterEqual, ["e1", "e2"]);
impl Callable for InfixGreaterEqual {
    fn call_matched(&self, args: Args, _stack: &mut CallStack) -> EvalResult {
        relational_matched(CmpOp::Gte, args)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = "<", kind = Infix)]
pub struct InfixLess;
formals!(InfixLess, ["e1", "e2"]);
impl Callable for InfixLess {
    fn call_matched(&self, args: Args, _stack: &mut CallStack) -> EvalResult {
        relational_matched(CmpOp::Lt, args)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = "<=", kind = Infix)]
pub struct InfixLessEqual;
formals!(InfixLessEqual, ["e1", "e2"]);
impl Callable for InfixLessEqual {
    fn call_matched(&self, args: Args, _stack: &mut CallStack) -> EvalResult {
        relational_matched(CmpOp::Lte, args)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = "==", kind = Infix)]
pub struct InfixEqual;
formals!(InfixEqual, ["e1", "e2"]);
impl Callable for InfixEqual {
    fn call_matched(&self, args: Args, _stack: &mut CallStack) -> EvalResult {
        relational_matched(CmpOp::Eq, args)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = "!=", kind = Infix)]
pub struct InfixNotEqual;
formals!(InfixNotEqual, ["e1", "e2"]);
impl Callable for InfixNotEqual {
    fn call_matched(&self, args: Args, _stack: &mut CallStack) -> EvalResult {
        relational_matched(CmpOp::Neq, args)
    }
}

/// The first value of an operand of `:`
fn colon_bound(x: &Obj) -> Result<f64, Error> {
    let value = match x {
        Obj::Vector(v) if v.mode() != Mode::Character => v.as_doubles().first().cloned(),
        _ => None,
    };

    match value {
        Some(OptionNA::Some(x)) if !x.is_nan() => Ok(x),
        Some(_) => Err(Error::Other("NA/NaN argument".to_string())),
        None => Err(Error::Other("argument of length 0".to_string())),
    }
}

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = ":", kind = Infix)]
pub struct InfixColon;
formals!(InfixColon, ["from", "to"]);
impl Callable for InfixColon {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        let (from, to) = (
            colon_bound(&args.require("from")?)?,
            colon_bound(&args.require("to")?)?,
        );

        let n = ((to - from).abs() + 1e-10).floor() as usize + 1;
        let step = if from <= to { 1.0 } else { -1.0 };
        let values = (0..n).map(|i| from + step * i as f64);

        let fits_integer = |x: f64| x >= i32::MIN as f64 && x <= i32::MAX as f64;
        if from.fract() == 0.0 && fits_integer(from) && fits_integer(from + step * (n - 1) as f64) {
            Ok(Obj::from(values.map(|x| x as i32).collect::<Vec<i32>>()))
        } else {
            Ok(Obj::from(values.collect::<Vec<f64>>()))
        }
    }
}

/// Evaluate the indices of `[` or `[[`, separating out named options
///
/// Empty positions, as in `m[1, ]`, are kept as `None`.
///
fn eval_indices(
    args: ExprList,
    options: &[&str],
    stack: &mut CallStack,
) -> Result<(Vec<Option<Obj>>, Vec<(String, Obj)>), Signal> {
    let mut indices = vec![];
    let mut named = vec![];

    for (key, value) in args {
        match key {
            Some(key) if options.contains(&key.as_str()) => {
                named.push((key, stack.eval(value)?));
            }
            _ => match value {
                Expr::Missing => indices.push(None),
                value => indices.push(Some(stack.eval(value)?)),
            },
        }
    }

    Ok((indices, named))
}

fn option_flag(options: &[(String, Obj)], name: &str) -> Result<Option<bool>, Error> {
    match options.iter().find(|(k, _)| k == name) {
        None => Ok(None),
        Some((_, value)) => value
            .as_flag()
            .map(Some)
            .ok_or_else(|| Error::ArgumentInvalid(name.to_string())),
    }
}

fn split_target(args: ExprList) -> Result<(Expr, ExprList), Signal> {
    args.split_first()
        .ok_or_else(|| Error::ArgumentMissing("x".to_string()).into())
}

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = "[", kind = PostfixCall("[", "]"))]
pub struct PostfixVecIndex;
formals!(PostfixVecIndex);
impl Callable for PostfixVecIndex {
    fn call(&self, args: ExprList, stack: &mut CallStack) -> EvalResult {
        let (what, args) = split_target(args)?;
        let x = stack.eval(what)?;
        let (indices, options) = eval_indices(args, &["drop"], stack)?;
        let drop = option_flag(&options, "drop")?;
        Ok(subset::select(&x, &indices, drop)?)
    }

    fn call_assign(
        &self,
        mut target: Obj,
        args: ExprList,
        value: Obj,
        stack: &mut CallStack,
    ) -> EvalResult {
        let (indices, _) = eval_indices(args, &["drop"], stack)?;
        subset::assign(&mut target, &indices, value)?;
        Ok(target)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = "[[", kind = PostfixCall("[[", "]]"))]
pub struct PostfixIndex;
formals!(PostfixIndex);
impl Callable for PostfixIndex {
    fn call(&self, args: ExprList, stack: &mut CallStack) -> EvalResult {
        let (what, args) = split_target(args)?;
        let x = stack.eval(what)?;
        let (indices, options) = eval_indices(args, &["exact"], stack)?;
        let exact = option_flag(&options, "exact")?.unwrap_or(true);
        Ok(subset::select_single(&x, &indices, exact)?)
    }

    fn call_assign(
        &self,
        mut target: Obj,
        args: ExprList,
        value: Obj,
        stack: &mut CallStack,
    ) -> EvalResult {
        let (indices, _) = eval_indices(args, &["exact"], stack)?;
        subset::assign_single(&mut target, &indices, value)?;
        Ok(target)
    }
}

/// The name following `$`, which is never evaluated
fn dollar_name(expr: Expr) -> Result<String, Error> {
    match expr {
        Expr::Symbol(name) | Expr::String(name) => Ok(name),
        other => Err(Error::InvalidIndex(format!(
            "invalid subscript type '{other}'"
        ))),
    }
}

#[derive(Debug, Clone, PartialEq)]
#[builtin(sym = "$", kind = PostfixCall("$", ""))]
pub struct InfixDollar;
formals!(InfixDollar);
impl Callable for InfixDollar {
    fn call(&self, args: ExprList, stack: &mut CallStack) -> EvalResult {
        let (what, name) = args.unnamed_binary_args();
        let x = stack.eval(what)?;
        Ok(subset::select_dollar(&x, &dollar_name(name)?)?)
    }

    fn call_assign(
        &self,
        mut target: Obj,
        args: ExprList,
        value: Obj,
        _stack: &mut CallStack,
    ) -> EvalResult {
        let name = dollar_name(args.unnamed_unary_arg())?;
        subset::assign_dollar(&mut target, &name, value)?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use crate::object::types::*;
    use crate::object::Obj;
    use crate::{r, r_expect};

    #[test]
    fn arithmetic_recycles() {
        assert_eq!(r!("1:4 + c(10, 20)"), Obj::from(vec![11.0, 22.0, 13.0, 24.0]));
        assert_eq!(r!("-c(1, 2)"), Obj::from(vec![-1.0, -2.0]));
        assert_eq!(r!("7 %% 3"), Obj::from(1.0));
    }

    #[test]
    fn integer_sequences() {
        assert_eq!(r!("1:3"), Obj::from(vec![1, 2, 3]));
        assert_eq!(r!("3:1"), Obj::from(vec![3, 2, 1]));
        assert_eq!(r!("-1:1"), Obj::from(vec![-1, 0, 1]));
        assert_eq!(r!("1.5:3"), Obj::from(vec![1.5, 2.5]));
    }

    #[test]
    fn scalar_logicals_short_circuit() {
        r_expect! { TRUE || undefined_variable }
        r_expect! { !(FALSE && undefined_variable) }
        assert_eq!(r!("NA && TRUE"), Obj::from(vec![Logical::NA]));
    }

    #[test]
    fn comparisons_propagate_na() {
        assert_eq!(
            r!("c(1, NA, 3) > 2"),
            Obj::from(vec![Logical::Some(false), Logical::NA, Logical::Some(true)])
        );
    }

    #[test]
    fn membership() {
        assert_eq!(r!(r#"c("a", "z") %in% c("a", "b")"#), Obj::from(vec![true, false]));
    }

    #[test]
    fn indexing_operators() {
        r_expect! {{r#"
            x <- c(a = 1, b = 2, c = 3)
            identical(x[c("a", "c")], c(a = 1, c = 3)) && x[["b"]] == 2
        "#}}

        r_expect! {{r#"
            m <- matrix(1:6, nrow = 2)
            identical(m[2, ], c(2L, 4L, 6L)) && identical(dim(m[, 2, drop = FALSE]), c(2L, 1L))
        "#}}
    }

    #[test]
    fn dollar_uses_the_unevaluated_name() {
        r_expect! {{r#"
            l <- list(alpha = 1, beta = 2)
            a <- "beta"
            l$a == 1 && l$`beta` == 2 && is.null(l$gamma)
        "#}}
    }

    #[test]
    fn replacement_through_operators() {
        r_expect! {{r#"
            x <- 1:5
            x[x > 3] <- 0L
            identical(x, c(1L, 2L, 3L, 0L, 0L))
        "#}}

        r_expect! {{r#"
            l <- list()
            l$a$b <- "deep"
            l[["a"]][["b"]] == "deep"
        "#}}
    }
}
