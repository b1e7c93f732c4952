use hashbrown::HashSet;

use super::dims::{coordinate_selection, cross_product, dispatch, resolve_axes, Dispatch};
use super::index::{Axis, Subset};
use super::selection::{Selection, Slot};
use super::single::select_single;
use crate::error::Error;
use crate::internal_err;
use crate::object::types::*;
use crate::object::{with_rep, DataFrame, List, Obj, OptionNA, Rep, Vector};

/// One position written by an assignment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    At(usize),
    /// a missing (`NA`) request, written to nowhere
    Skip,
}

/// Targets of a flat assignment and the names of elements it appends
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Targets {
    pub targets: Vec<Target>,
    pub appended: Vec<String>,
}

impl Targets {
    /// Length the container needs to hold every target
    fn extent(&self, len: usize) -> usize {
        self.targets
            .iter()
            .filter_map(|t| match t {
                Target::At(i) => Some(i + 1),
                Target::Skip => None,
            })
            .max()
            .unwrap_or(0)
            .max(len)
    }
}

/// Resolve an index into assignment targets along one axis
///
/// Unlike selection, positions past the end and unmatched names are valid
/// targets: they extend the container. A repeated new name writes to the
/// same new element.
///
pub fn flat_targets(axis: Axis, index: Option<&Obj>) -> Result<Targets, Error> {
    let len = axis.len;
    let subset = Subset::normalize_for_assign(index, axis)?;

    let targets = match &subset {
        Subset::All => (0..len).map(Target::At).collect(),
        Subset::Empty => vec![],
        Subset::Indices(indices) => indices
            .iter()
            .map(|i| i.map_or(Target::Skip, Target::At))
            .collect(),
        Subset::Exclude(_) => subset
            .resolve(axis)
            .iter()
            .filter_map(|slot| match slot {
                Slot::Hit(i) => Some(Target::At(*i)),
                _ => None,
            })
            .collect(),
        Subset::Mask { values, .. } => (0..values.len().max(len))
            .filter_map(|i| match values[i % values.len()] {
                Some(true) => Some(Target::At(i)),
                Some(false) => None,
                None => Some(Target::Skip),
            })
            .collect(),
        Subset::Names(names) => {
            let mut appended: Vec<String> = vec![];
            let mut targets = Vec::with_capacity(names.len());
            for name in names {
                let Some(name) = name else {
                    targets.push(Target::Skip);
                    continue;
                };

                let target = match axis.position_of(name, true) {
                    Some(i) => i,
                    None => match appended.iter().position(|n| n == name) {
                        Some(k) => len + k,
                        None => {
                            appended.push(name.clone());
                            len + appended.len() - 1
                        }
                    },
                };
                targets.push(Target::At(target));
            }

            return Ok(Targets { targets, appended });
        }
    };

    Ok(Targets {
        targets,
        appended: vec![],
    })
}

/// Validate the number of values against the number of targets
fn check_lengths(targets: &[Target], m: usize) -> Result<(), Error> {
    let n = targets.len();
    if m == 0 || m > n || n % m != 0 {
        return Err(Error::LengthMismatch(n, m));
    }

    if m > 1 && targets.contains(&Target::Skip) {
        return Err(Error::InvalidIndex(
            "NAs are not allowed in subscripted assignments".to_string(),
        ));
    }

    Ok(())
}

/// Each element of a vector as a length-one vector, keeping attributes
pub fn vector_elements(v: &Vector) -> List {
    fn wrap<T>(rep: &Rep<T>) -> List
    where
        T: Clone,
        Vector: From<Rep<T>>,
    {
        rep.map(|x| Obj::Vector(Vector::from(Rep::from(vec![x.clone()]))))
    }

    with_rep!(v, r => wrap(r))
}

/// Bring a container and replacement values to a common representation
///
/// Atomic containers are coerced to the more general of the two modes, or
/// become lists when the values are list-like. The values are returned in
/// the representation of the (possibly converted) container.
///
fn harmonize(x: &mut Obj, value: Obj) -> Result<Obj, Error> {
    if x.is_null() {
        *x = match &value {
            Obj::Vector(v) => Obj::Vector(Vector::empty(v.mode())),
            _ => Obj::List(List::new()),
        };
    }

    let value = match value {
        Obj::DataFrame(df) => Obj::List(df.columns().bare()),
        Obj::Function(_) => Obj::List(List::from(vec![value])),
        Obj::Null => Obj::List(List::from(vec![Obj::Null])),
        value => value,
    };

    let elements = match (&*x, &value) {
        (Obj::Vector(xv), Obj::List(_)) => Some(vector_elements(xv)),
        _ => None,
    };
    if let Some(elements) = elements {
        *x = Obj::List(elements);
    }

    match (&mut *x, value) {
        (Obj::Vector(xv), Obj::Vector(v)) => {
            let mode = xv.mode().max(v.mode());
            if xv.mode() != mode {
                log::trace!("coercing container to {}", mode.type_name());
                *xv = xv.coerce(mode);
            }
            Ok(Obj::Vector(v.coerce(mode)))
        }
        (Obj::List(_), Obj::Vector(v)) => Ok(Obj::List(vector_elements(&v.bare()))),
        (Obj::List(_), Obj::List(l)) => Ok(Obj::List(l)),
        (Obj::Function(_), _) => Err(Error::InvalidIndex(
            "object of type 'builtin' is not subsettable".to_string(),
        )),
        _ => internal_err!(),
    }
}

fn write_rep<T: Clone>(rep: &mut Rep<T>, targets: &[Target], values: &[T]) {
    rep.with_values_mut(|xs| {
        for (k, target) in targets.iter().enumerate() {
            if let Target::At(i) = target {
                xs[*i] = values[k % values.len()].clone();
            }
        }
    })
}

/// Write harmonized values into their targets
fn write(x: &mut Obj, targets: &[Target], value: &Obj) -> Result<(), Error> {
    use Vector::*;
    match (x, value) {
        (Obj::Vector(Logical(x)), Obj::Vector(Logical(v))) => write_rep(x, targets, v.values()),
        (Obj::Vector(Integer(x)), Obj::Vector(Integer(v))) => write_rep(x, targets, v.values()),
        (Obj::Vector(Double(x)), Obj::Vector(Double(v))) => write_rep(x, targets, v.values()),
        (Obj::Vector(Character(x)), Obj::Vector(Character(v))) => {
            write_rep(x, targets, v.values())
        }
        (Obj::List(x), Obj::List(v)) => write_rep(x, targets, v.values()),
        _ => return internal_err!(),
    }
    Ok(())
}

fn extend_rep<T: Clone + Default>(rep: &mut Rep<T>, len: usize, appended: &[String]) {
    let old = rep.len();
    rep.grow(len);

    if appended.is_empty() {
        return;
    }

    if !rep.is_named() {
        rep.set_names(Some(vec![Character::Some(String::new()); rep.len()]));
    }

    rep.with_names_mut(|names| {
        for (k, name) in appended.iter().enumerate() {
            names[old + k] = Character::Some(name.clone());
        }
    });
}

/// Grow a container to `len` elements, naming appended elements
fn extend(x: &mut Obj, len: usize, appended: &[String]) {
    match x {
        Obj::Vector(v) => with_rep!(v, r => extend_rep(r, len, appended)),
        Obj::List(l) => extend_rep(l, len, appended),
        Obj::Null | Obj::DataFrame(_) | Obj::Function(_) => (),
    }
}

/// Remove the targeted elements of a list
fn remove(l: &List, targets: &[Target]) -> List {
    let removed: HashSet<usize> = targets
        .iter()
        .filter_map(|t| match t {
            Target::At(i) => Some(*i),
            Target::Skip => None,
        })
        .collect();

    let kept: Selection = (0..l.len())
        .filter(|i| !removed.contains(i))
        .map(Slot::Hit)
        .collect();

    log::trace!("removing {} list elements", l.len() - kept.len());
    l.select(&kept)
}

/// Assign along the flat axis, extending the container when needed
fn assign_flat(x: &mut Obj, index: Option<&Obj>, value: Obj) -> Result<(), Error> {
    let resolved = flat_targets(x.axis(), index)?;
    let targets = &resolved.targets;

    if value.is_null() {
        match x {
            Obj::List(l) => {
                *l = remove(l, targets);
                return Ok(());
            }
            Obj::Null => return Ok(()),
            _ => (),
        }
    }

    if targets.is_empty() {
        return Ok(());
    }

    check_lengths(targets, value.len())?;

    let len = x.len();
    let value = harmonize(x, value)?;
    extend(x, resolved.extent(len), &resolved.appended);
    write(x, targets, &value)
}

/// Assign into positions that already exist, such as matrix cells
fn assign_within(x: &mut Obj, targets: &[Target], value: Obj) -> Result<(), Error> {
    if targets.is_empty() {
        return Ok(());
    }

    check_lengths(targets, value.len())?;
    let value = harmonize(x, value)?;
    write(x, targets, &value)
}

fn slot_targets(selection: &Selection) -> Result<Vec<Target>, Error> {
    selection
        .iter()
        .map(|slot| match slot {
            Slot::Hit(i) => Ok(Target::At(*i)),
            Slot::Missing => Ok(Target::Skip),
            Slot::OutOfBounds => Err(Error::InvalidIndex("subscript out of bounds".to_string())),
        })
        .collect()
}

fn assign_per_axis(x: &mut Obj, indices: &[Option<Obj>], value: Obj) -> Result<(), Error> {
    let Some(dims) = x.dims() else {
        return internal_err!();
    };

    let selections = resolve_axes(&dims, indices)?;
    let targets = slot_targets(&cross_product(&dims, &selections))?;
    assign_within(x, &targets, value)
}

fn assign_coordinates(x: &mut Obj, index: &Obj, value: Obj) -> Result<(), Error> {
    let (Some(dims), Obj::Vector(index)) = (x.dims(), index) else {
        return Err(Error::InvalidIndex("invalid matrix subscript".to_string()));
    };

    let targets = slot_targets(&coordinate_selection(&dims, index)?)?;
    assign_within(x, &targets, value)
}

/// The replacement values destined for each targeted column
fn column_parts(value: Obj, nrow: usize, ncol: usize) -> Result<Vec<Obj>, Error> {
    match value {
        Obj::Vector(v) => {
            let total = nrow * ncol;
            let m = v.len();
            if m == 0 || m > total || total % m != 0 {
                return Err(Error::LengthMismatch(total, m));
            }

            let v = v.bare();
            Ok((0..ncol)
                .map(|k| {
                    let cells: Selection = (0..nrow).map(|r| Slot::Hit((k * nrow + r) % m)).collect();
                    Obj::Vector(v.select(&cells))
                })
                .collect())
        }
        Obj::List(_) | Obj::DataFrame(_) => {
            let elements: Vec<Obj> = match value {
                Obj::DataFrame(df) => df.columns().values().to_vec(),
                Obj::List(l) => l.into_values(),
                _ => vec![],
            };

            let m = elements.len();
            if m == 0 || ncol % m != 0 {
                return Err(Error::LengthMismatch(ncol, m));
            }

            Ok((0..ncol).map(|k| elements[k % m].clone()).collect())
        }
        Obj::Null => Err(Error::LengthMismatch(nrow * ncol, 0)),
        Obj::Function(_) => Err(Error::InvalidIndex(
            "cannot assign a function into a data frame".to_string(),
        )),
    }
}

/// Assign into the columns (and optionally rows) of a data frame
///
/// Without a row index whole columns are replaced, recycling values to the
/// number of rows. New columns may be added by name or by the next free
/// position; rows cannot be added.
///
fn assign_frame(
    df: &mut DataFrame,
    rows: Option<&Obj>,
    cols: Option<&Obj>,
    value: Obj,
) -> Result<(), Error> {
    let nrow = df.nrow();
    let ncol = df.ncol();
    let names = df.column_names();

    let resolved = flat_targets(Axis::new(ncol, Some(&names)), cols)?;
    if resolved.targets.contains(&Target::Skip) {
        return Err(Error::InvalidIndex(
            "missing values are not allowed in subscripted assignments of data frames"
                .to_string(),
        ));
    }

    if value.is_null() && rows.is_none() {
        let columns = remove(df.columns(), &resolved.targets);
        df.with_columns_mut(|cols, _| *cols = columns);
        return Ok(());
    }

    let row_index = match rows {
        None => None,
        Some(rows) => {
            let labels = df.row_labels();
            let axis = Axis::new(nrow, Some(&labels));
            let selection = Subset::normalize(Some(rows), axis)?.resolve(axis);
            if selection.has_out_of_bounds() || selection.has_missing() {
                return Err(Error::InvalidIndex(
                    "new rows cannot be added to a data frame by assignment".to_string(),
                ));
            }

            let positions: Vec<i32> = selection
                .iter()
                .filter_map(|slot| match slot {
                    Slot::Hit(i) => Some(*i as i32 + 1),
                    _ => None,
                })
                .collect();
            Some(Obj::from(positions))
        }
    };

    let nr = row_index.as_ref().map_or(nrow, Obj::len);
    let nc = resolved.targets.len();
    if nc == 0 {
        return Ok(());
    }

    if nr == 0 {
        return assign_frame_without_rows(df, &resolved, value, names);
    }

    let parts = column_parts(value, nr, nc)?;
    let mut columns: Vec<Obj> = df.columns().values().to_vec();
    let mut column_names = names;

    for (target, part) in resolved.targets.iter().zip(parts) {
        let Target::At(j) = *target else {
            continue;
        };

        let column = match &row_index {
            None => {
                let part = part.unname();
                if part.is_empty() || nrow % part.len() != 0 {
                    return Err(Error::LengthMismatch(nrow, part.len()));
                }
                part.recycle(nrow)
            }
            Some(rows) => {
                let mut column = columns
                    .get(j)
                    .cloned()
                    .unwrap_or_else(|| Obj::from(vec![Logical::NA; nrow]));
                assign_flat(&mut column, Some(rows), part)?;
                column
            }
        };

        if j < columns.len() {
            columns[j] = column;
        } else if j == columns.len() {
            let name = resolved
                .appended
                .get(j - ncol)
                .cloned()
                .unwrap_or_else(|| format!("V{}", j + 1));
            columns.push(column);
            column_names.push(Character::Some(name));
        } else {
            return Err(Error::InvalidIndex(
                "new columns would leave holes after existing columns".to_string(),
            ));
        }
    }

    log::debug!("assigned {nc} data frame columns");
    df.with_columns_mut(|cols, _| *cols = List::from(columns).with_names(Some(column_names)));
    Ok(())
}

/// Assign when no rows are targeted
///
/// Only empty values fit. Existing columns are untouched and new columns
/// are created with the value's mode, filled with `NA`.
///
fn assign_frame_without_rows(
    df: &mut DataFrame,
    resolved: &Targets,
    value: Obj,
    mut column_names: Vec<Character>,
) -> Result<(), Error> {
    let nrow = df.nrow();
    let ncol = df.ncol();

    let template = match value {
        Obj::Vector(v) if v.is_empty() => v.bare(),
        Obj::Vector(v) => return Err(Error::LengthMismatch(0, v.len())),
        Obj::List(l) => match l.iter().find(|x| !x.is_empty()) {
            Some(x) => return Err(Error::LengthMismatch(0, x.len())),
            None => match l.get(0) {
                Some(Obj::Vector(v)) => v.bare(),
                _ => Vector::empty(Mode::Logical),
            },
        },
        other => return Err(Error::LengthMismatch(0, other.len())),
    };

    let missing: Selection = (0..nrow).map(|_| Slot::Missing).collect();
    let mut columns: Vec<Obj> = df.columns().values().to_vec();

    for target in &resolved.targets {
        let Target::At(j) = *target else {
            continue;
        };

        if j < columns.len() {
            continue;
        } else if j == columns.len() {
            let name = resolved
                .appended
                .get(j - ncol)
                .cloned()
                .unwrap_or_else(|| format!("V{}", j + 1));
            columns.push(Obj::Vector(template.select(&missing)));
            column_names.push(Character::Some(name));
        } else {
            return Err(Error::InvalidIndex(
                "new columns would leave holes after existing columns".to_string(),
            ));
        }
    }

    df.with_columns_mut(|cols, _| *cols = List::from(columns).with_names(Some(column_names)));
    Ok(())
}

/// Assign with `[<-`
///
/// The indices address the container exactly as they would for selection
/// with `[`. Values are recycled over the targets and the container is
/// coerced to a type able to hold them.
///
pub fn assign(x: &mut Obj, indices: &[Option<Obj>], value: Obj) -> Result<(), Error> {
    if let Obj::DataFrame(df) = x {
        return match indices {
            [] => assign_frame(df, None, None, value),
            [cols] => assign_frame(df, None, cols.as_ref(), value),
            [rows, cols] => assign_frame(df, rows.as_ref(), cols.as_ref(), value),
            _ => Err(Error::DimensionMismatch(format!(
                "{} indices for a data frame",
                indices.len()
            ))),
        };
    }

    match dispatch(x, indices)? {
        Dispatch::Whole => assign_flat(x, None, value),
        Dispatch::Flat => assign_flat(x, indices[0].as_ref(), value),
        Dispatch::Coordinates => match &indices[0] {
            Some(index) => assign_coordinates(x, index, value),
            None => internal_err!(),
        },
        Dispatch::PerAxis => assign_per_axis(x, indices, value),
    }
}

/// Validate a single `[[` key
fn single_key(key: Option<&Obj>) -> Result<&Obj, Error> {
    let invalid = |msg: &str| Err(Error::InvalidIndex(msg.to_string()));
    let Some(key) = key else {
        return invalid("subscript of length 0");
    };

    match key {
        Obj::Null => invalid("subscript of length 0"),
        Obj::Vector(v) if v.is_empty() => invalid("subscript of length 0"),
        Obj::Vector(Vector::Logical(_)) => invalid("invalid logical subscript"),
        Obj::Vector(Vector::Character(_)) => Ok(key),
        Obj::Vector(v) => {
            let valid = v
                .as_doubles()
                .iter()
                .all(|x| matches!(x, OptionNA::Some(x) if x.trunc() >= 1.0));
            if valid {
                Ok(key)
            } else {
                invalid("invalid subscript for a single element")
            }
        }
        other => Err(Error::InvalidIndex(format!(
            "invalid subscript type '{}'",
            other.type_name()
        ))),
    }
}

/// Replace (or remove, with `NULL`) one element of a list
fn set_element(l: &mut List, key: &Obj, value: Obj) -> Result<(), Error> {
    let resolved = flat_targets(l.axis(), Some(key))?;
    let i = match resolved.targets[..] {
        [Target::At(i)] => i,
        _ => {
            return Err(Error::InvalidIndex(
                "more elements supplied than there are to replace".to_string(),
            ))
        }
    };

    if value.is_null() {
        if i < l.len() {
            *l = remove(l, &resolved.targets);
        }
        return Ok(());
    }

    let len = l.len();
    extend_rep(l, resolved.extent(len), &resolved.appended);
    l.with_values_mut(|values| values[i] = value);
    Ok(())
}

/// Assign with `[[<-`
///
/// A single element is replaced: atomic containers take one value, lists
/// take any object (removing the element when it is `NULL`). Longer keys
/// on lists assign into nested elements.
///
pub fn assign_single(x: &mut Obj, indices: &[Option<Obj>], value: Obj) -> Result<(), Error> {
    if let Obj::DataFrame(df) = x {
        return match indices {
            [key] => {
                let key = single_key(key.as_ref())?;
                if key.len() > 1 {
                    return Err(Error::InvalidIndex(
                        "attempt to select more than one element".to_string(),
                    ));
                }
                assign_frame(df, None, Some(key), value)
            }
            [row, col] => {
                if value.len() != 1 {
                    return Err(Error::LengthMismatch(1, value.len()));
                }
                let row = single_key(row.as_ref())?;
                let col = single_key(col.as_ref())?;
                assign_frame(df, Some(row), Some(col), value)
            }
            _ => Err(Error::DimensionMismatch(format!(
                "{} indices for a data frame",
                indices.len()
            ))),
        };
    }

    if indices.len() > 1 {
        let keys = indices
            .iter()
            .map(|k| single_key(k.as_ref()).cloned().map(Some))
            .collect::<Result<Vec<Option<Obj>>, Error>>()?;

        if keys.iter().flatten().any(|k| k.len() != 1) {
            return Err(Error::InvalidIndex(
                "attempt to select more than one element".to_string(),
            ));
        }

        let value = match x {
            Obj::List(_) => Obj::List(List::from(vec![value])),
            _ if value.len() == 1 => value,
            _ => return Err(Error::LengthMismatch(1, value.len())),
        };
        return assign(x, &keys, value);
    }

    let key = single_key(indices.first().and_then(Option::as_ref))?;

    if key.len() > 1 {
        if !x.is_list_like() {
            return Err(Error::InvalidIndex(
                "more elements supplied than there are to replace".to_string(),
            ));
        }

        // assign into the nested element, then store it back
        let Obj::Vector(path) = key else {
            return internal_err!();
        };
        let head = Obj::Vector(path.select(&Selection::from(vec![Slot::Hit(0)])).bare());
        let rest = Obj::Vector(path.select(&(1..path.len()).map(Slot::Hit).collect()).bare());

        let mut inner = select_single(x, &[Some(head.clone())], true)?;
        assign_single(&mut inner, &[Some(rest)], value)?;
        return assign_single(x, &[Some(head)], inner);
    }

    let as_element = match (&*x, &value) {
        (Obj::List(_), _) => true,
        (_, Obj::Vector(v)) if v.len() == 1 => false,
        (Obj::Null, Obj::Null) => return Ok(()),
        (Obj::Vector(_), Obj::Null) => return Err(Error::LengthMismatch(1, 0)),
        (Obj::Vector(_), Obj::Vector(v)) => return Err(Error::LengthMismatch(1, v.len())),
        _ => true,
    };

    if !as_element {
        return assign_flat(x, Some(key), value);
    }

    *x = match std::mem::take(x) {
        Obj::Vector(v) => Obj::List(vector_elements(&v)),
        Obj::Null => Obj::List(List::new()),
        other => other,
    };

    match x {
        Obj::List(l) => set_element(l, key, value),
        _ => Err(Error::InvalidIndex(
            "object of type 'builtin' is not subsettable".to_string(),
        )),
    }
}

/// Assign with `$<-`
///
/// Names match exactly; an unmatched name appends a new element or
/// column. Atomic vectors cannot be assigned by `$`.
///
pub fn assign_dollar(x: &mut Obj, name: &str, value: Obj) -> Result<(), Error> {
    let key = Obj::from(name);
    match x {
        Obj::Vector(_) => Err(Error::InvalidIndex(
            "$ operator is invalid for atomic vectors".to_string(),
        )),
        Obj::Function(_) => Err(Error::InvalidIndex(
            "object of type 'builtin' is not subsettable".to_string(),
        )),
        Obj::DataFrame(df) => assign_frame(df, None, Some(&key), value),
        Obj::Null if value.is_null() => Ok(()),
        Obj::Null => {
            *x = Obj::List(List::new());
            assign_dollar(x, name, value)
        }
        Obj::List(l) => set_element(l, &key, value),
    }
}
