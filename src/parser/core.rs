/// Grammar Parsers
///
/// Internally, parsing dispatches out to individual parsers for specific
/// grammar tokens. Most grammar tokens expect either a single
/// `pest::iterators::Pair` or `pest::iterators::Pairs` and return an
/// `Expr`, with a few more specific internal parsers returning `ExprList`s.
///
use pest::iterators::{Pair, Pairs};
use pest::Parser;

use super::{RParser, Rule, PRATT};
use crate::callable::core::Builtin;
use crate::callable::keywords::*;
use crate::callable::operators::*;
use crate::callable::primitive::{PrimitiveCharacter, PrimitiveInteger, PrimitiveNumeric};
use crate::error::Error;
use crate::object::{Expr, ExprList};

pub type ParseResult = Result<Expr, Error>;
pub type ParseListResult = Result<ExprList, Error>;

/// Parse a snippet into a single expression
///
/// Multiple top-level expressions are wrapped in a block, so evaluating the
/// result evaluates each in turn. An empty snippet parses to `NULL`.
///
pub fn parse(input: &str) -> ParseResult {
    let mut exprs = parse_program(input)?;
    match exprs.len() {
        0 => Ok(Expr::Null),
        1 => exprs.pop().ok_or(Error::Internal(None, file!(), line!())),
        _ => Ok(Expr::new_primitive_call(
            KeywordBlock,
            exprs.into_iter().collect(),
        )),
    }
}

/// Parse a snippet into its top-level expressions
pub fn parse_program(input: &str) -> Result<Vec<Expr>, Error> {
    let pairs = RParser::parse(Rule::program, input)
        .map_err(|e| Error::ParseFailure(Box::new(e)))?;

    pairs
        .filter(|pair| pair.as_rule() == Rule::expr)
        .map(|pair| parse_expr(pair.into_inner()))
        .collect()
}

pub fn parse_expr(pairs: Pairs<Rule>) -> ParseResult {
    PRATT
        .map_primary(parse_primary)
        .map_prefix(|op, rhs| {
            let args = ExprList::from_iter([rhs?]);
            match op.as_rule() {
                Rule::negate => Ok(Expr::new_primitive_call(InfixSub, args)),
                Rule::not => Ok(Expr::new_primitive_call(PrefixNot, args)),
                rule => Err(Error::ParseUnexpected(rule)),
            }
        })
        .map_infix(|lhs, op, rhs| {
            let (lhs, rhs) = (lhs?, rhs?);

            // `value -> x` assigns like `x <- value`
            if op.as_rule() == Rule::assign_right {
                let args = ExprList::from_iter([rhs, lhs]);
                return Ok(Expr::new_primitive_call(InfixAssign, args));
            }

            let op: Box<dyn Builtin> = match op.as_rule() {
                Rule::assign => Box::new(InfixAssign),
                Rule::assign_eq => Box::new(InfixAssignEq),
                Rule::or => Box::new(InfixOr),
                Rule::and => Box::new(InfixAnd),
                Rule::vor => Box::new(InfixVectorOr),
                Rule::vand => Box::new(InfixVectorAnd),
                Rule::eq => Box::new(InfixEqual),
                Rule::neq => Box::new(InfixNotEqual),
                Rule::lt => Box::new(InfixLess),
                Rule::gt => Box::new(InfixGreater),
                Rule::lte => Box::new(InfixLessEqual),
                Rule::gte => Box::new(InfixGreaterEqual),
                Rule::add => Box::new(InfixAdd),
                Rule::subtract => Box::new(InfixSub),
                Rule::multiply => Box::new(InfixMul),
                Rule::divide => Box::new(InfixDiv),
                Rule::modulo => Box::new(InfixMod),
                Rule::special_in => Box::new(InfixIn),
                Rule::colon => Box::new(InfixColon),
                Rule::power => Box::new(InfixPow),
                rule => return Err(Error::ParseUnexpected(rule)),
            };

            // infix operator with two unnamed arguments
            let args = ExprList::from_iter([lhs, rhs]);
            Ok(Expr::Call(Box::new(Expr::Primitive(op)), args))
        })
        .parse(pairs)
}

fn parse_primary(pair: Pair<Rule>) -> ParseResult {
    match pair.as_rule() {
        // postfix notation and nested expressions
        Rule::postfixed => parse_postfixed(pair),
        Rule::expr => parse_expr(pair.into_inner()),
        Rule::paren => {
            let inner = next(&mut pair.into_inner())?;
            let args = ExprList::from_iter([parse_expr(inner.into_inner())?]);
            Ok(Expr::new_primitive_call(KeywordParen, args))
        }
        Rule::block => parse_block(pair),

        // reserved values
        Rule::val_true => Ok(Expr::Bool(true)),
        Rule::val_false => Ok(Expr::Bool(false)),
        Rule::val_null => Ok(Expr::Null),
        Rule::val_na => Ok(Expr::NA),
        Rule::val_na_typed => Ok(parse_typed_na(pair.as_str())),
        Rule::val_inf => Ok(Expr::Inf),
        Rule::val_nan => Ok(Expr::NaN),

        // atomic values
        Rule::number => Ok(Expr::Number(
            pair.as_str()
                .parse::<f64>()
                .map_err(|e| Error::Internal(Some(e.to_string()), file!(), line!()))?,
        )),
        Rule::integer => parse_integer(pair.as_str()),
        Rule::string => Ok(Expr::String(parse_string(pair)?)),

        // symbols
        Rule::symbol_ident => Ok(Expr::Symbol(String::from(pair.as_str()))),
        Rule::symbol_backticked => Ok(Expr::Symbol(inner_str(pair)?)),

        // otherwise fail
        rule => Err(Error::ParseUnexpected(rule)),
    }
}

/// Typed missing values are calls that coerce `NA` into the requested mode
fn parse_typed_na(s: &str) -> Expr {
    let ctor: Box<dyn Builtin> = match s {
        "NA_integer_" => Box::new(PrimitiveInteger),
        "NA_real_" => Box::new(PrimitiveNumeric),
        _ => Box::new(PrimitiveCharacter),
    };

    // `integer(1)[NA]`, a length-one vector of the requested mode
    let one = Expr::Call(
        Box::new(Expr::Primitive(ctor)),
        ExprList::from_iter([Expr::Integer(1)]),
    );
    Expr::new_primitive_call(PostfixVecIndex, ExprList::from_iter([one, Expr::NA]))
}

fn parse_integer(s: &str) -> ParseResult {
    let digits = s.trim_end_matches('L');
    match digits.parse::<i32>() {
        Ok(i) => Ok(Expr::Integer(i)),
        Err(_) => {
            log::warn!("non-integer value {digits}L qualified with L; using numeric value");
            let x = digits
                .parse::<f64>()
                .map_err(|e| Error::Internal(Some(e.to_string()), file!(), line!()))?;
            Ok(Expr::Number(x))
        }
    }
}

/// The next pair of a rule known by the grammar to have one
fn next<'i>(pairs: &mut Pairs<'i, Rule>) -> Result<Pair<'i, Rule>, Error> {
    pairs
        .next()
        .ok_or(Error::Internal(None, file!(), line!()))
}

fn inner_str(pair: Pair<Rule>) -> Result<String, Error> {
    Ok(next(&mut pair.into_inner())?.as_str().to_string())
}

/// String contents with escape sequences resolved
fn parse_string(pair: Pair<Rule>) -> Result<String, Error> {
    let raw = inner_str(pair)?;
    let mut value = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => value.push('\n'),
            Some('t') => value.push('\t'),
            Some('r') => value.push('\r'),
            Some('0') => value.push('\0'),
            Some(other) => value.push(other),
            None => value.push('\\'),
        }
    }

    Ok(value)
}

fn parse_block(pair: Pair<Rule>) -> ParseResult {
    // extract each inline expression, and treat as unnamed list
    let exprs: ExprList = pair
        .into_inner()
        .map(|i| parse_expr(i.into_inner()))
        .collect::<Result<_, _>>()?;

    Ok(Expr::new_primitive_call(KeywordBlock, exprs))
}

fn parse_named(pair: Pair<Rule>) -> Result<(Option<String>, Expr), Error> {
    let mut inner = pair.into_inner();
    let name = next(&mut inner)?;
    let name = match name.as_rule() {
        Rule::symbol_ident => name.as_str().to_string(),
        Rule::symbol_backticked => inner_str(name)?,
        Rule::string => parse_string(name)?,
        rule => return Err(Error::ParseUnexpected(rule)),
    };

    let value = next(&mut inner)?;
    Ok((Some(name), parse_expr(value.into_inner())?))
}

/// Arguments of a call or index, where empty slots are kept as missing
fn parse_args(pair: Pair<Rule>) -> ParseListResult {
    let args = next(&mut pair.into_inner())?;
    args.into_inner()
        .map(|slot| match slot.as_rule() {
            Rule::named => parse_named(slot),
            Rule::empty => Ok((None, Expr::Missing)),
            Rule::expr => Ok((None, parse_expr(slot.into_inner())?)),
            rule => Err(Error::ParseUnexpected(rule)),
        })
        .collect()
}

fn parse_postfixed(pair: Pair<Rule>) -> ParseResult {
    let mut inner = pair.into_inner();
    let mut result = parse_primary(next(&mut inner)?)?;

    for postfix in inner {
        result = match postfix.as_rule() {
            Rule::call => {
                let mut args = parse_args(postfix)?;

                // a call with a single empty slot, as in `f()`, has no arguments
                if matches!(&args.values[..], [Expr::Missing]) {
                    args = ExprList::new();
                }

                Expr::Call(Box::new(result), args)
            }
            Rule::index => with_target(PostfixIndex, result, parse_args(postfix)?),
            Rule::vector_index => with_target(PostfixVecIndex, result, parse_args(postfix)?),
            Rule::dollar => {
                let name = next(&mut postfix.into_inner())?;
                let name = match name.as_rule() {
                    Rule::symbol_ident => name.as_str().to_string(),
                    Rule::symbol_backticked => inner_str(name)?,
                    Rule::string => parse_string(name)?,
                    rule => return Err(Error::ParseUnexpected(rule)),
                };

                let args = ExprList::from_iter([result, Expr::Symbol(name)]);
                Expr::new_primitive_call(InfixDollar, args)
            }
            rule => return Err(Error::ParseUnexpected(rule)),
        };
    }

    Ok(result)
}

/// A postfix operator called with the indexed value as its first argument
fn with_target<T: Builtin + 'static>(op: T, target: Expr, args: ExprList) -> Expr {
    let args = std::iter::once((None, target)).chain(args).collect();
    Expr::new_primitive_call(op, args)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::object::Obj;
    use crate::r;

    #[test]
    fn prefix_with_space() {
        assert_eq!(r!("- 1"), r!("-1"));
    }

    #[test]
    fn postfix_with_space() {
        assert_eq!(r!("c (1)"), r!("c(1)"));
    }

    #[test]
    fn negation_binds_looser_than_power() {
        assert_eq!(r!("-2^2"), Obj::from(-4.0));
        assert_eq!(r!("-1:2"), Obj::from(vec![-1, 0, 1, 2]));
    }

    #[test]
    fn not_binds_looser_than_comparison() {
        assert_eq!(r!("!1 == 2"), Obj::from(true));
    }

    #[test]
    fn empty_index_slots_are_missing() {
        let expr = parse("m[1, ]").unwrap();
        let Expr::Call(_, args) = expr else {
            panic!("expected a call");
        };
        assert_eq!(args.values[2], Expr::Missing);
    }

    #[test]
    fn calls_without_arguments() {
        let expr = parse("f()").unwrap();
        assert_eq!(
            expr,
            Expr::Call(Box::new(Expr::Symbol("f".into())), ExprList::new())
        );
    }

    #[test]
    fn multiple_expressions_form_a_block() {
        assert_eq!(r!("x <- 1; y <- 2\nx + y"), Obj::from(3.0));
    }

    #[test]
    fn comments_are_ignored() {
        assert_eq!(r!("1 + # one\n 2 # two"), Obj::from(3.0));
    }

    #[test]
    fn strings_resolve_escapes() {
        assert_eq!(parse(r#""a\"b""#).unwrap(), Expr::String("a\"b".into()));
        assert!(parse("'it''s'").is_err());
    }

    #[test]
    fn right_assignment() {
        assert_eq!(r!("3 -> x; x"), Obj::from(3.0));
    }

    #[test]
    fn dollar_names() {
        let expr = parse("df$`a b`").unwrap();
        assert_eq!(expr.to_string(), "df$a b");
    }

    #[test]
    fn incomplete_input_fails() {
        assert!(parse("x[1").is_err());
        assert!(matches!(parse("c(1,"), Err(Error::ParseFailure(_))));
    }
}
