use super::index::Axis;
use super::selection::{Selection, Slot};
use super::simplify;
use crate::error::Error;
use crate::object::{Obj, OptionNA, Vector};

/// Where a single key lands on an axis
#[derive(Debug, Clone, Copy, PartialEq)]
enum Found {
    At(usize),
    /// out of bounds or a missing (`NA`) key
    Absent,
}

fn zero_length() -> Error {
    Error::InvalidIndex("subscript of length 0".to_string())
}

fn not_subsettable(x: &Obj) -> Error {
    Error::InvalidIndex(format!(
        "object of type '{}' is not subsettable",
        x.type_name()
    ))
}

/// Resolve a length-one key against an axis
fn locate(key: &Vector, axis: Axis, exact: bool) -> Result<Found, Error> {
    match key {
        Vector::Character(names) => match names.get(0) {
            Some(OptionNA::Some(name)) => axis
                .position_of(name, exact)
                .map(Found::At)
                .ok_or_else(|| Error::NoSuchName(name.clone())),
            _ => Ok(Found::Absent),
        },
        _ => match key.as_doubles().first() {
            Some(OptionNA::Some(x)) if x.is_nan() => Ok(Found::Absent),
            Some(OptionNA::Some(x)) if *x < 1.0 => Err(Error::InvalidIndex(format!(
                "invalid subscript '{}' for a single element",
                x.trunc()
            ))),
            Some(OptionNA::Some(x)) => {
                let i = x.trunc() as usize - 1;
                Ok(if i < axis.len {
                    Found::At(i)
                } else {
                    Found::Absent
                })
            }
            _ => Ok(Found::Absent),
        },
    }
}

/// A single element of a container, unwrapped from its container
fn element_at(x: &Obj, i: usize) -> Obj {
    match x {
        Obj::Vector(_) | Obj::List(_) => {
            simplify::unwrap(x.select(&Selection::from(vec![Slot::Hit(i)])))
        }
        Obj::DataFrame(df) => df.column(i).cloned().unwrap_or_default(),
        Obj::Null | Obj::Function(_) => Obj::Null,
    }
}

fn key_vector(key: &Obj) -> Result<&Vector, Error> {
    match key {
        Obj::Vector(v) if v.is_empty() => Err(zero_length()),
        Obj::Vector(v) => Ok(v),
        Obj::Null => Err(zero_length()),
        other => Err(Error::InvalidIndex(format!(
            "invalid subscript type '{}'",
            other.type_name()
        ))),
    }
}

/// Select with one scalar key along the flat axis
fn select_scalar(x: &Obj, key: &Vector, exact: bool) -> Result<Obj, Error> {
    let found = locate(key, x.axis(), exact)?;
    match (x, found) {
        (Obj::Null, _) => Ok(Obj::Null),
        (Obj::Function(_), _) => Err(not_subsettable(x)),
        (_, Found::At(i)) => Ok(element_at(x, i)),
        (Obj::List(_), Found::Absent) => Ok(Obj::Null),
        (Obj::Vector(_) | Obj::DataFrame(_), Found::Absent) => Err(Error::OutOfBounds),
    }
}

/// Select with one key, descending through nested lists for longer keys
fn select_key(x: &Obj, key: &Obj, exact: bool) -> Result<Obj, Error> {
    let key = key_vector(key)?;
    if key.len() == 1 {
        return select_scalar(x, key, exact);
    }

    if !x.is_list_like() {
        return Err(Error::InvalidIndex(
            "attempt to select more than one element".to_string(),
        ));
    }

    let mut current = x.clone();
    for i in 0..key.len() {
        if i > 0 && current.is_null() {
            log::debug!("recursive indexing stopped at level {}", i + 1);
            return Err(Error::OutOfBounds);
        }
        let level = key.select(&Selection::from(vec![Slot::Hit(i)])).bare();
        current = select_scalar(&current, &level, exact)?;
    }

    Ok(current)
}

/// Select a single element with `[[`
///
/// One key selects along the flat axis (or the columns of a data frame).
/// A key of several values on a list descends one level of nesting per
/// value. Arrays accept one key per axis and data frames accept a row and
/// a column key.
///
pub fn select_single(x: &Obj, indices: &[Option<Obj>], exact: bool) -> Result<Obj, Error> {
    let keys = indices
        .iter()
        .map(|i| i.as_ref().ok_or_else(zero_length))
        .collect::<Result<Vec<&Obj>, Error>>()?;

    match x {
        Obj::Null => return Ok(Obj::Null),
        Obj::Function(_) => return Err(not_subsettable(x)),
        _ => (),
    }

    match (x, &keys[..]) {
        (_, []) => Err(zero_length()),
        (_, [key]) => select_key(x, key, exact),
        (Obj::DataFrame(df), [row, column]) => {
            let labels = df.row_labels();
            let names = df.column_names();

            let j = match locate(key_scalar(column)?, Axis::new(df.ncol(), Some(&names)), exact)? {
                Found::At(j) => j,
                Found::Absent => return Err(Error::OutOfBounds),
            };
            let i = match locate(key_scalar(row)?, Axis::new(df.nrow(), Some(&labels)), exact)? {
                Found::At(i) => i,
                Found::Absent => return Err(Error::OutOfBounds),
            };

            Ok(element_at(&element_at(x, j), i))
        }
        (_, keys) => select_cell(x, keys, exact),
    }
}

fn key_scalar(key: &Obj) -> Result<&Vector, Error> {
    let key = key_vector(key)?;
    if key.len() > 1 {
        return Err(Error::InvalidIndex(
            "attempt to select more than one element".to_string(),
        ));
    }
    Ok(key)
}

/// Select one cell of a matrix or array with one key per axis
fn select_cell(x: &Obj, keys: &[&Obj], exact: bool) -> Result<Obj, Error> {
    let dims = match x.dims() {
        Some(dims) if dims.ndim() == keys.len() => dims,
        _ => {
            return Err(Error::DimensionMismatch(
                "incorrect number of subscripts".to_string(),
            ))
        }
    };

    let mut coords = Vec::with_capacity(keys.len());
    for (k, key) in keys.iter().enumerate() {
        let axis = Axis::new(dims.extents[k], dims.axis_names(k));
        match locate(key_scalar(key)?, axis, exact)? {
            Found::At(c) => coords.push(c),
            Found::Absent => return Err(Error::OutOfBounds),
        }
    }

    Ok(element_at(x, dims.offset(&coords)))
}

/// Select a list element or data frame column with `$`
///
/// Names match exactly, or by a unique prefix when nothing matches
/// exactly. An unmatched name yields `NULL`.
///
pub fn select_dollar(x: &Obj, name: &str) -> Result<Obj, Error> {
    match x {
        Obj::Null => Ok(Obj::Null),
        Obj::Vector(_) => Err(Error::InvalidIndex(
            "$ operator is invalid for atomic vectors".to_string(),
        )),
        Obj::Function(_) => Err(not_subsettable(x)),
        Obj::List(_) | Obj::DataFrame(_) => {
            let names = x.names();
            let axis = Axis::new(x.len(), names.as_deref());
            Ok(axis
                .position_of(name, false)
                .map(|i| element_at(x, i))
                .unwrap_or_default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::types::*;
    use crate::object::{DataFrame, Dims, List};

    fn named_list() -> Obj {
        Obj::List(List::from_pairs(vec![
            (Some("alpha".to_string()), Obj::from(1)),
            (Some("beta".to_string()), Obj::from(vec!["x", "y"])),
        ]))
    }

    fn key(x: impl Into<Obj>) -> Option<Obj> {
        Some(x.into())
    }

    #[test]
    fn atomic_positions_unwrap() {
        let mut v = Vector::from(vec![10, 20, 30]);
        v.set_names(Some(vec![
            Character::Some("a".into()),
            Character::Some("b".into()),
            Character::Some("c".into()),
        ]));
        let x = Obj::Vector(v);

        assert_eq!(select_single(&x, &[key(2)], true), Ok(Obj::from(vec![20])));
        assert_eq!(select_single(&x, &[key("c")], true), Ok(Obj::from(vec![30])));
    }

    #[test]
    fn atomic_out_of_bounds_fails() {
        let x = Obj::from(vec![1, 2]);
        assert_eq!(select_single(&x, &[key(3)], true), Err(Error::OutOfBounds));
        assert_eq!(
            select_single(&x, &[key(vec![Integer::NA])], true),
            Err(Error::OutOfBounds)
        );
    }

    #[test]
    fn list_out_of_bounds_is_null() {
        let x = named_list();
        assert_eq!(select_single(&x, &[key(5)], true), Ok(Obj::Null));
    }

    #[test]
    fn unmatched_names_fail() {
        let x = named_list();
        assert_eq!(
            select_single(&x, &[key("gamma")], true),
            Err(Error::NoSuchName("gamma".to_string()))
        );
    }

    #[test]
    fn invalid_keys() {
        let x = named_list();
        assert!(matches!(
            select_single(&x, &[key(Obj::Null)], true),
            Err(Error::InvalidIndex(_))
        ));
        assert!(matches!(
            select_single(&x, &[key(0)], true),
            Err(Error::InvalidIndex(_))
        ));
        assert!(matches!(
            select_single(&x, &[key(-1)], true),
            Err(Error::InvalidIndex(_))
        ));
        assert!(matches!(
            select_single(&x, &[None], true),
            Err(Error::InvalidIndex(_))
        ));
    }

    #[test]
    fn longer_keys_recurse_into_lists() {
        let x = named_list();
        assert_eq!(
            select_single(&x, &[key(vec![2, 1])], true),
            Ok(Obj::from(vec!["x"]))
        );
        assert_eq!(
            select_single(&x, &[key(vec!["beta"])], true),
            Ok(Obj::from(vec!["x", "y"]))
        );

        let atomic = Obj::from(vec![1, 2, 3]);
        assert!(matches!(
            select_single(&atomic, &[key(vec![1, 2])], true),
            Err(Error::InvalidIndex(_))
        ));
    }

    #[test]
    fn array_cells() {
        let mut v = Vector::from((1..=6).collect::<Vec<i32>>());
        v.set_dims(Some(Dims::new(vec![2, 3])));
        let m = Obj::Vector(v);

        assert_eq!(select_single(&m, &[key(2), key(3)], true), Ok(Obj::from(vec![6])));
        assert_eq!(
            select_single(&m, &[key(3), key(1)], true),
            Err(Error::OutOfBounds)
        );
        assert!(matches!(
            select_single(&m, &[key(1), key(1), key(1)], true),
            Err(Error::DimensionMismatch(_))
        ));
    }

    #[test]
    fn data_frame_columns_and_cells() {
        let df = DataFrame::new(vec![
            ("x".to_string(), Obj::from(vec![1, 2, 3])),
            ("y".to_string(), Obj::from(vec!["a", "b", "c"])),
        ])
        .unwrap();
        let x = Obj::DataFrame(df);

        assert_eq!(
            select_single(&x, &[key("y")], true),
            Ok(Obj::from(vec!["a", "b", "c"]))
        );
        assert_eq!(select_single(&x, &[key(3)], true), Err(Error::OutOfBounds));
        assert_eq!(
            select_single(&x, &[key(2), key("y")], true),
            Ok(Obj::from(vec!["b"]))
        );
    }

    #[test]
    fn dollar_matches_prefixes() {
        let x = named_list();
        assert_eq!(select_dollar(&x, "al"), Ok(Obj::from(1)));
        assert_eq!(select_dollar(&x, "gamma"), Ok(Obj::Null));
        assert!(select_dollar(&Obj::from(1), "a").is_err());
    }
}
