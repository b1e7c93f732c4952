use hashbrown::{HashMap, HashSet};
use rsubset_derive::*;

use crate::callable::core::*;
use crate::error::Error;
use crate::formals;
use crate::lang::*;
use crate::object::types::*;
use crate::object::*;
use crate::subset::dims::concat;
use crate::subset::{Selection, Slot};

/// Position of the first match of each element of `x` in `table`
///
/// Values are compared through their character keys, so `1L` matches `1`
/// and `NA` matches `NA`.
///
pub fn match_positions(x: &Vector, table: &Vector) -> Vec<Option<usize>> {
    let mut first: HashMap<Character, usize> = HashMap::new();
    for (i, key) in table.keys().into_iter().enumerate() {
        first.entry(key).or_insert(i);
    }

    x.keys().iter().map(|key| first.get(key).copied()).collect()
}

/// Elements of `x` without duplicates or attributes, in order of appearance
fn unique(x: &Vector) -> Vector {
    let mut seen = HashSet::new();
    let selection: Selection = x
        .keys()
        .into_iter()
        .enumerate()
        .filter(|(_, key)| seen.insert(key.clone()))
        .map(|(i, _)| Slot::Hit(i))
        .collect();

    x.bare().select(&selection)
}

/// Keep the elements of `x` for which `keep` holds
fn filter(x: &Vector, keep: impl Fn(Option<usize>) -> bool, table: &Vector) -> Vector {
    let selection: Selection = match_positions(x, table)
        .into_iter()
        .enumerate()
        .filter(|(_, pos)| keep(*pos))
        .map(|(i, _)| Slot::Hit(i))
        .collect();

    x.select(&selection)
}

fn vectors(args: &mut Args) -> Result<(Vector, Vector), Signal> {
    let as_vector = |x: Obj| -> Result<Vector, Signal> {
        match x {
            Obj::Null => Ok(Vector::empty(Mode::Logical)),
            Obj::Vector(v) => Ok(v),
            _ => Err(Error::CannotBeCoercedTo("vector").into()),
        }
    };

    Ok((as_vector(args.require("x")?)?, as_vector(args.require("y")?)?))
}

/// Value Matching
///
/// The (one-based) position of the first match of each element of `x`
/// in `table`, or `NA` when there is none.
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// match(x, table)
/// ```
///
/// ## Examples
///
/// ```custom,{class=r-repl}
/// match(c("c", "a", "z"), c("a", "b", "c"))
/// ```
///
#[doc(alias = "match")]
#[builtin(sym = "match")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveMatch;
formals!(PrimitiveMatch, ["x", "table"]);

impl Callable for PrimitiveMatch {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        let x = args.require("x")?;
        let table = args.require("table")?;
        let empty = Vector::empty(Mode::Logical);
        let x = match &x {
            Obj::Null => &empty,
            x => x.as_vector()?,
        };
        let table = match &table {
            Obj::Null => &empty,
            table => table.as_vector()?,
        };

        let positions: Vec<Integer> = match_positions(x, table)
            .into_iter()
            .map(|pos| pos.map(|i| i as i32 + 1).into())
            .collect();

        Ok(Obj::from(positions))
    }
}

/// Elements of `x` that are not in `y`, without duplicates
#[doc(alias = "setdiff")]
#[builtin(sym = "setdiff")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveSetdiff;
formals!(PrimitiveSetdiff, ["x", "y"]);

impl Callable for PrimitiveSetdiff {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        let (x, y) = vectors(&mut args)?;
        Ok(Obj::Vector(unique(&filter(&x, |pos| pos.is_none(), &y))))
    }
}

/// Elements in either of `x` or `y`, without duplicates
#[doc(alias = "union")]
#[builtin(sym = "union")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveUnion;
formals!(PrimitiveUnion, ["x", "y"]);

impl Callable for PrimitiveUnion {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        let (x, y) = vectors(&mut args)?;
        Ok(Obj::Vector(unique(&concat(&x, &y))))
    }
}

/// Elements in both of `x` and `y`, without duplicates
///
/// # In-Language
///
/// ## Examples
///
/// ```custom,{class=r-repl}
/// intersect(c(1, 2, 2, 3), c(2, 3, 4))
/// ```
///
#[doc(alias = "intersect")]
#[builtin(sym = "intersect")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveIntersect;
formals!(PrimitiveIntersect, ["x", "y"]);

impl Callable for PrimitiveIntersect {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        let (x, y) = vectors(&mut args)?;
        let mode = x.mode().max(y.mode());
        Ok(Obj::Vector(unique(&filter(&x, |pos| pos.is_some(), &y)).coerce(mode)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::types::Integer;
    use crate::{r, r_expect};

    #[test]
    fn positions_in_table() {
        let x = Vector::from(vec!["c", "a", "z"]);
        let table = Vector::from(vec!["a", "b", "c", "a"]);
        assert_eq!(match_positions(&x, &table), vec![Some(2), Some(0), None]);
    }

    #[test]
    fn matching_across_modes() {
        assert_eq!(
            r!("match(c(2L, 5L), c(1, 2, 3))"),
            Obj::from(vec![Integer::Some(2), Integer::NA])
        );
    }

    #[test]
    fn set_operations() {
        assert_eq!(r!("setdiff(c(1, 2, 2, 3), 2)"), Obj::from(vec![1.0, 3.0]));
        assert_eq!(r!("union(c(1, 2), c(2, 3))"), Obj::from(vec![1.0, 2.0, 3.0]));
        assert_eq!(
            r!("intersect(c(1, 2, 2, 3), c(2, 3, 4))"),
            Obj::from(vec![2.0, 3.0])
        );
    }

    #[test]
    fn selecting_unmatched_elements() {
        r_expect! {{r#"
            x <- c(a = 1, b = 2, c = 3)
            identical(setdiff(names(x), "b"), c("a", "c"))
        "#}}
    }
}
