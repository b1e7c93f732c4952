use core::fmt;
use std::{iter::Zip, vec::IntoIter};

use crate::callable::core::{Builtin, SymKind};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Null,
    NA,
    Inf,
    NaN,
    Missing,
    Bool(bool),
    Number(f64),
    Integer(i32),
    String(String),
    Symbol(String),
    Call(Box<Expr>, ExprList),
    Primitive(Box<dyn Builtin>),
}

impl Expr {
    pub fn as_primitive<T>(x: T) -> Self
    where
        T: Builtin + 'static,
    {
        Self::Primitive(Box::new(x))
    }

    pub fn new_primitive_call<T>(x: T, args: ExprList) -> Self
    where
        T: Builtin + 'static,
    {
        let p = Self::as_primitive(x);
        Self::Call(Box::new(p), args)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Null => write!(f, "NULL"),
            Expr::NA => write!(f, "NA"),
            Expr::Inf => write!(f, "Inf"),
            Expr::NaN => write!(f, "NaN"),
            Expr::Missing => write!(f, ""),
            Expr::Bool(true) => write!(f, "TRUE"),
            Expr::Bool(false) => write!(f, "FALSE"),
            Expr::Number(x) => write!(f, "{}", x),
            Expr::Integer(x) => write!(f, "{}L", x),
            Expr::String(x) => write!(f, "\"{}\"", x),
            Expr::Symbol(x) => write!(f, "{}", x),
            Expr::Call(what, args) => match &**what {
                Expr::Primitive(p) => {
                    let sym = p.sym();
                    match (p.kind(), &args.values[..]) {
                        (SymKind::Infix, [lhs, rhs]) => write!(f, "{lhs} {sym} {rhs}"),
                        (SymKind::Infix | SymKind::Prefix, [arg]) => write!(f, "{sym}{arg}"),
                        (SymKind::Keyword, [inner]) if sym == "(" => write!(f, "({inner})"),
                        (SymKind::Keyword, exprs) if sym == "{" => {
                            writeln!(f, "{{")?;
                            for expr in exprs {
                                writeln!(f, "  {expr}")?;
                            }
                            write!(f, "}}")
                        }
                        (SymKind::PostfixCall(l, r), [first, ..]) => {
                            let rest: ExprList = args.clone().into_iter().skip(1).collect();
                            write!(f, "{first}{l}{rest}{r}")
                        }
                        _ => write!(f, "{sym}({args})"),
                    }
                }
                Expr::String(s) | Expr::Symbol(s) => write!(f, "{}({})", s, args),
                rexpr => write!(f, "{}({})", rexpr, args),
            },
            Expr::Primitive(p) => write!(f, "`{}`", p.sym()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExprList {
    pub keys: Vec<Option<String>>,
    pub values: Vec<Expr>,
}

impl fmt::Display for ExprList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self
            .keys
            .iter()
            .zip(self.values.iter())
            .map(|(k, v)| match (k, v) {
                (Some(k), Expr::Missing) => format!("{k} = "),
                (Some(k), _) => format!("{} = {}", k, v),
                (None, v) => format!("{}", v),
            })
            .collect();

        write!(f, "{}", pairs.join(", "))
    }
}

impl IntoIterator for ExprList {
    type Item = (Option<String>, Expr);
    type IntoIter = <Zip<IntoIter<Option<String>>, IntoIter<Expr>> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter().zip(self.values)
    }
}

impl FromIterator<(Option<String>, Expr)> for ExprList {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (Option<String>, Expr)>,
    {
        let (keys, values) = iter.into_iter().unzip();
        ExprList { keys, values }
    }
}

impl FromIterator<Expr> for ExprList {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Expr>,
    {
        let values: Vec<Expr> = iter.into_iter().collect();
        ExprList {
            keys: vec![None; values.len()],
            values,
        }
    }
}

impl ExprList {
    pub fn new() -> ExprList {
        ExprList {
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Expr> {
        self.values.get(index)
    }

    pub fn push(&mut self, pair: (Option<String>, Expr)) {
        let (key, value) = pair;
        self.keys.push(key);
        self.values.push(value);
    }

    /// Split off the first expression, as used by postfix calls
    pub fn split_first(self) -> Option<(Expr, ExprList)> {
        let mut pairs = self.into_iter();
        let (_, first) = pairs.next()?;
        Some((first, pairs.collect()))
    }

    pub fn unnamed_unary_arg(self) -> Expr {
        self.values.into_iter().next().unwrap_or(Expr::Missing)
    }

    pub fn unnamed_binary_args(self) -> (Expr, Expr) {
        let mut values = self.values.into_iter();
        let lhs = values.next().unwrap_or(Expr::Missing);
        let rhs = values.next().unwrap_or(Expr::Missing);
        (lhs, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn subsetting_calls_deparse_like_source() {
        let expr = parse("x[1, ]").unwrap();
        assert_eq!(expr.to_string(), "x[1, ]");

        let expr = parse("l[[\"a\"]]").unwrap();
        assert_eq!(expr.to_string(), "l[[\"a\"]]");
    }

    #[test]
    fn split_first_separates_the_target() {
        let args: ExprList = vec![Expr::Symbol("x".into()), Expr::Number(1.0)]
            .into_iter()
            .collect();

        let (first, rest) = args.split_first().unwrap();
        assert_eq!(first, Expr::Symbol("x".into()));
        assert_eq!(rest.values, vec![Expr::Number(1.0)]);
    }
}
