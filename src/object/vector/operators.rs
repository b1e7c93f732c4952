use super::types::*;
use super::{OptionNA, Rep, Vector};
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Mod,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CmpOp {
    Eq,
    Neq,
    Lt,
    Gt,
    Lte,
    Gte,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogicOp {
    And,
    Or,
}

/// Pair up elements of two sequences, recycling the shorter one
///
/// Zero-length inputs produce zero-length output. A warning is raised
/// when the longer length is not a multiple of the shorter.
///
pub fn zip_recycle<L, R>(l: &[L], r: &[R]) -> Vec<(L, R)>
where
    L: Clone,
    R: Clone,
{
    if l.is_empty() || r.is_empty() {
        return vec![];
    }

    let n = l.len().max(r.len());
    if n % l.len() != 0 || n % r.len() != 0 {
        log::warn!("longer object length is not a multiple of shorter object length");
    }

    (0..n)
        .map(|i| (l[i % l.len()].clone(), r[i % r.len()].clone()))
        .collect()
}

/// Attributes of a binary result follow the longer operand, or the first
/// when lengths agree.
fn with_attributes_of<T: Clone>(rep: Rep<T>, l: &Vector, r: &Vector) -> Rep<T> {
    let source = if r.len() > l.len() { r } else { l };
    let other = if r.len() > l.len() { l } else { r };

    let names = source
        .names()
        .or_else(|| other.names().filter(|_| other.len() == rep.len()))
        .map(<[Character]>::to_vec);

    let dims = source
        .dims()
        .or_else(|| other.dims().filter(|_| other.len() == rep.len()))
        .cloned();

    rep.with_names(names).with_dims(dims)
}

fn check_numeric(x: &Vector) -> Result<(), Error> {
    match x {
        Vector::Character(_) => Err(Error::Other(
            "non-numeric argument to binary operator".to_string(),
        )),
        _ => Ok(()),
    }
}

fn integer_arith(op: ArithOp, l: i32, r: i32) -> Integer {
    let res = match op {
        ArithOp::Add => l.checked_add(r),
        ArithOp::Sub => l.checked_sub(r),
        ArithOp::Mul => l.checked_mul(r),
        ArithOp::Mod if r != 0 => Some(l.rem_euclid(r)),
        _ => None,
    };

    match res {
        Some(x) => OptionNA::Some(x),
        None => {
            if !matches!(op, ArithOp::Mod) {
                log::warn!("NAs produced by integer overflow");
            }
            OptionNA::NA
        }
    }
}

fn double_arith(op: ArithOp, l: f64, r: f64) -> f64 {
    match op {
        ArithOp::Add => l + r,
        ArithOp::Sub => l - r,
        ArithOp::Mul => l * r,
        ArithOp::Div => l / r,
        ArithOp::Pow => l.powf(r),
        ArithOp::Mod => l - (l / r).floor() * r,
    }
}

pub fn arith(op: ArithOp, l: &Vector, r: &Vector) -> Result<Vector, Error> {
    check_numeric(l)?;
    check_numeric(r)?;

    let integer_result = l.mode() <= Mode::Integer
        && r.mode() <= Mode::Integer
        && !matches!(op, ArithOp::Div | ArithOp::Pow);

    if integer_result {
        let values: Rep<Integer> = zip_recycle(&l.as_integers(), &r.as_integers())
            .into_iter()
            .map(|pair| match pair {
                (OptionNA::Some(l), OptionNA::Some(r)) => integer_arith(op, l, r),
                _ => OptionNA::NA,
            })
            .collect();

        return Ok(Vector::Integer(with_attributes_of(values, l, r)));
    }

    let values: Rep<Double> = zip_recycle(&l.as_doubles(), &r.as_doubles())
        .into_iter()
        .map(|pair| match pair {
            (OptionNA::Some(l), OptionNA::Some(r)) => OptionNA::Some(double_arith(op, l, r)),
            _ => OptionNA::NA,
        })
        .collect();

    Ok(Vector::Double(with_attributes_of(values, l, r)))
}

fn compare<T: PartialOrd>(op: CmpOp, l: &T, r: &T) -> Logical {
    use std::cmp::Ordering::*;
    match l.partial_cmp(r) {
        None => OptionNA::NA,
        Some(ord) => OptionNA::Some(match op {
            CmpOp::Eq => ord == Equal,
            CmpOp::Neq => ord != Equal,
            CmpOp::Lt => ord == Less,
            CmpOp::Gt => ord == Greater,
            CmpOp::Lte => ord != Greater,
            CmpOp::Gte => ord != Less,
        }),
    }
}

pub fn relational(op: CmpOp, l: &Vector, r: &Vector) -> Result<Vector, Error> {
    let values: Rep<Logical> = if l.mode() == Mode::Character || r.mode() == Mode::Character {
        zip_recycle(&l.as_characters(), &r.as_characters())
            .into_iter()
            .map(|(l, r)| compare(op, &l, &r))
            .collect()
    } else {
        zip_recycle(&l.as_doubles(), &r.as_doubles())
            .into_iter()
            .map(|(l, r)| compare(op, &l, &r))
            .collect()
    };

    Ok(Vector::Logical(with_attributes_of(values, l, r)))
}

pub fn logical(op: LogicOp, l: &Vector, r: &Vector) -> Result<Vector, Error> {
    use OptionNA::*;
    let values: Rep<Logical> = zip_recycle(&l.as_logicals(), &r.as_logicals())
        .into_iter()
        .map(|pair| match (op, pair) {
            (LogicOp::And, (Some(false), _) | (_, Some(false))) => Some(false),
            (LogicOp::And, (Some(true), Some(true))) => Some(true),
            (LogicOp::Or, (Some(true), _) | (_, Some(true))) => Some(true),
            (LogicOp::Or, (Some(false), Some(false))) => Some(false),
            _ => NA,
        })
        .collect();

    Ok(Vector::Logical(with_attributes_of(values, l, r)))
}

pub fn not(x: &Vector) -> Result<Vector, Error> {
    if x.mode() == Mode::Character {
        return Err(Error::Other("invalid argument type".to_string()));
    }

    Ok(Vector::Logical(x.as_logical_rep().map(|v| v.clone().map(|b| !b))))
}

pub fn negate(x: &Vector) -> Result<Vector, Error> {
    match x {
        Vector::Character(_) => Err(Error::Other(
            "invalid argument to unary operator".to_string(),
        )),
        Vector::Double(v) => Ok(Vector::Double(v.map(|v| v.clone().map(|f| -f)))),
        _ => Ok(Vector::Integer(
            x.as_integer_rep().map(|v| v.clone().map(|i| -i)),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_stay_integers_under_addition() {
        let x = Vector::from(vec![1, 2, 3]);
        let y = Vector::from(vec![1]);
        let z = arith(ArithOp::Add, &x, &y).unwrap();
        assert_eq!(z, Vector::from(vec![2, 3, 4]));
    }

    #[test]
    fn division_produces_doubles() {
        let x = Vector::from(vec![1, 2]);
        let y = Vector::from(vec![2]);
        let z = arith(ArithOp::Div, &x, &y).unwrap();
        assert_eq!(z, Vector::from(vec![0.5, 1.0]));
    }

    #[test]
    fn comparison_with_na_is_na() {
        let x = Vector::from(vec![OptionNA::Some(1.0), OptionNA::NA]);
        let y = Vector::from(vec![1.0]);
        let z = relational(CmpOp::Eq, &x, &y).unwrap();
        assert_eq!(z, Vector::from(vec![OptionNA::Some(true), OptionNA::NA]));
    }

    #[test]
    fn three_valued_logic() {
        let x = Vector::from(vec![Logical::NA, Logical::NA]);
        let y = Vector::from(vec![false, true]);
        assert_eq!(
            logical(LogicOp::And, &x, &y).unwrap(),
            Vector::from(vec![OptionNA::Some(false), OptionNA::NA])
        );
        assert_eq!(
            logical(LogicOp::Or, &x, &y).unwrap(),
            Vector::from(vec![OptionNA::NA, OptionNA::Some(true)])
        );
    }

    #[test]
    fn strings_cannot_be_added() {
        let x = Vector::from(vec!["a"]);
        assert!(arith(ArithOp::Add, &x, &x).is_err());
    }
}
