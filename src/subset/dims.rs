use super::index::{Axis, Subset};
use super::selection::{select_names, Selection, Slot};
use super::simplify;
use crate::error::Error;
use crate::object::types::*;
use crate::object::{DataFrame, Dims, List, Obj, OptionNA, RowNames, Vector};

/// How a set of indices addresses a container
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dispatch {
    /// `x[]`, everything with all attributes
    Whole,
    /// a single index against the flat storage
    Flat,
    /// an index matrix with one column per axis
    Coordinates,
    /// one index per axis
    PerAxis,
}

/// Decide how `indices` address `x`
pub fn dispatch(x: &Obj, indices: &[Option<Obj>]) -> Result<Dispatch, Error> {
    let ndim = x.dims().map_or(1, |d| d.ndim());

    match indices {
        [] | [None] => Ok(Dispatch::Whole),
        [Some(index)] => match (x.dims(), coordinate_columns(index)) {
            (Some(dims), Some(ncol)) if dims.ndim() >= 2 => {
                if ncol != dims.ndim() {
                    return Err(Error::DimensionMismatch(format!(
                        "index matrix has {ncol} columns for {} dimensions",
                        dims.ndim()
                    )));
                }
                Ok(Dispatch::Coordinates)
            }
            _ => Ok(Dispatch::Flat),
        },
        _ if indices.len() == ndim && ndim >= 2 => Ok(Dispatch::PerAxis),
        _ => Err(Error::DimensionMismatch(format!(
            "{} indices for {} dimensions",
            indices.len(),
            ndim
        ))),
    }
}

/// Number of columns of a numeric or character index matrix
fn coordinate_columns(index: &Obj) -> Option<usize> {
    match index {
        Obj::Vector(v) if v.mode() != Mode::Logical => match v.dims() {
            Some(d) if d.ndim() == 2 => Some(d.extents[1]),
            _ => None,
        },
        _ => None,
    }
}

/// Resolve one index per axis of an array
///
/// Each axis must resolve within bounds; `NA` requests are allowed and
/// produce missing elements.
///
pub fn resolve_axes(dims: &Dims, indices: &[Option<Obj>]) -> Result<Vec<Selection>, Error> {
    indices
        .iter()
        .enumerate()
        .map(|(k, index)| {
            let axis = Axis::new(dims.extents[k], dims.axis_names(k));
            let selection = Subset::normalize(index.as_ref(), axis)?.resolve(axis);
            if selection.has_out_of_bounds() {
                return Err(Error::InvalidIndex("subscript out of bounds".to_string()));
            }
            Ok(selection)
        })
        .collect()
}

/// Lay out the cross product of per-axis selections, first axis fastest
pub fn cross_product(dims: &Dims, selections: &[Selection]) -> Selection {
    let strides = dims.strides();
    let total: usize = selections.iter().map(Selection::len).product();

    let mut coords = vec![0; selections.len()];
    let mut slots = Vec::with_capacity(total);

    for _ in 0..total {
        let mut offset = 0;
        let mut missing = false;
        for (k, &c) in coords.iter().enumerate() {
            match selections[k].slots()[c] {
                Slot::Hit(i) => offset += i * strides[k],
                Slot::OutOfBounds | Slot::Missing => missing = true,
            }
        }

        slots.push(if missing {
            Slot::Missing
        } else {
            Slot::Hit(offset)
        });

        for (k, c) in coords.iter_mut().enumerate() {
            *c += 1;
            if *c < selections[k].len() {
                break;
            }
            *c = 0;
        }
    }

    Selection::from(slots)
}

/// Select one index per axis from a matrix or array
pub fn select_per_axis(x: &Obj, indices: &[Option<Obj>], drop: bool) -> Result<Obj, Error> {
    let Some(dims) = x.dims() else {
        return Err(Error::DimensionMismatch(format!(
            "{} indices for 1 dimension",
            indices.len()
        )));
    };

    let selections = resolve_axes(&dims, indices)?;
    let flat = cross_product(&dims, &selections);

    let extents = selections.iter().map(Selection::len).collect();
    let dimnames = dims.dimnames.as_ref().map(|_| {
        selections
            .iter()
            .enumerate()
            .map(|(k, s)| select_names(Axis::new(dims.extents[k], dims.axis_names(k)), s))
            .collect()
    });

    let mut result = x.select(&flat);
    result.set_dims(Some(Dims::new(extents).with_dimnames(dimnames)))?;
    log::debug!("per-axis selection of {} elements", flat.len());

    if drop {
        Ok(simplify::drop_dims(result))
    } else {
        Ok(result)
    }
}

/// Read the coordinates of an index matrix as storage offsets
///
/// Rows containing a zero are dropped. Negative coordinates are invalid;
/// coordinates outside the array or `NA` produce missing elements.
///
pub fn coordinate_selection(dims: &Dims, index: &Vector) -> Result<Selection, Error> {
    let Some(index_dims) = index.dims() else {
        return Err(Error::InvalidIndex("index is not a matrix".to_string()));
    };

    let (nrow, ncol) = (index_dims.extents[0], index_dims.extents[1]);
    let strides = dims.strides();

    let coords: Vec<Option<i64>> = match index {
        Vector::Character(names) => names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let k = i / nrow;
                let Some(axis_names) = dims.axis_names(k) else {
                    return Err(Error::NoNameMapping);
                };

                let axis = Axis::new(dims.extents[k], Some(axis_names));
                Ok(match name {
                    OptionNA::Some(name) => axis
                        .position_of(name, true)
                        .map(|p| p as i64 + 1)
                        .or(Some(i64::MAX)),
                    OptionNA::NA => None,
                })
            })
            .collect::<Result<_, _>>()?,
        _ => index
            .as_doubles()
            .into_iter()
            .map(|x| match x {
                OptionNA::Some(x) if !x.is_nan() => Some(x.trunc() as i64),
                _ => None,
            })
            .collect(),
    };

    if coords.iter().any(|c| matches!(c, Some(c) if *c < 0)) {
        return Err(Error::InvalidIndex(
            "negative values are not allowed in a matrix subscript".to_string(),
        ));
    }

    let mut slots = Vec::with_capacity(nrow);
    for i in 0..nrow {
        let row: Vec<Option<i64>> = (0..ncol).map(|k| coords[k * nrow + i]).collect();

        if row.iter().any(|c| *c == Some(0)) {
            continue;
        }

        let mut offset = 0;
        let mut slot = None;
        for (k, c) in row.iter().enumerate() {
            match c {
                None => slot = Some(Slot::Missing),
                Some(c) if *c as usize > dims.extents[k] => {
                    slot = slot.or(Some(Slot::OutOfBounds));
                }
                Some(c) => offset += (*c as usize - 1) * strides[k],
            }
        }

        slots.push(slot.unwrap_or(Slot::Hit(offset)));
    }

    Ok(Selection::from(slots))
}

/// Select elements addressed by the rows of an index matrix
pub fn select_coordinates(x: &Obj, index: &Obj) -> Result<Obj, Error> {
    let (Some(dims), Obj::Vector(index)) = (x.dims(), index) else {
        return Err(Error::InvalidIndex("invalid matrix subscript".to_string()));
    };

    let selection = coordinate_selection(&dims, index)?;
    let mut result = x.select(&selection);
    result.set_names(None)?;
    Ok(result)
}

fn undefined_columns() -> Error {
    Error::InvalidIndex("undefined columns selected".to_string())
}

/// Resolve a column index of a data frame; every column must exist
pub fn resolve_columns(df: &DataFrame, index: Option<&Obj>) -> Result<Selection, Error> {
    let names = df.column_names();
    let axis = Axis::new(df.ncol(), Some(&names));
    let selection = Subset::normalize(index, axis)?.resolve(axis);

    if selection.has_out_of_bounds() || selection.has_missing() {
        return Err(undefined_columns());
    }

    Ok(selection)
}

/// Resolve a row index of a data frame; missing rows are allowed
pub fn resolve_rows(df: &DataFrame, index: Option<&Obj>) -> Result<Selection, Error> {
    let labels = df.row_labels();
    let axis = Axis::new(df.nrow(), Some(&labels));
    Ok(Subset::normalize(index, axis)?.resolve(axis))
}

fn frame_columns(df: &DataFrame, columns: &Selection) -> List {
    let mut list = df.columns().select(columns);
    if let Some(names) = list.names() {
        let unique = crate::object::make_unique(names.iter().map(|n| match n {
            OptionNA::Some(n) => n.clone(),
            OptionNA::NA => "NA".to_string(),
        }));
        list.set_names(Some(unique.into_iter().map(OptionNA::Some).collect()));
    }
    list
}

/// Select from a data frame
///
/// One index selects columns and always returns a data frame. Two indices
/// select rows and columns; a single resulting column is returned as a
/// vector unless `drop` is false.
///
pub fn select_frame(
    df: &DataFrame,
    indices: &[Option<Obj>],
    drop: Option<bool>,
) -> Result<Obj, Error> {
    match indices {
        [] | [None] => Ok(Obj::DataFrame(df.clone())),
        [Some(index)] if is_frame_matrix_index(df, index) => select_frame_cells(df, index),
        [index] => {
            let columns = resolve_columns(df, index.as_ref())?;
            let list = frame_columns(df, &columns);
            Ok(Obj::DataFrame(DataFrame::from_parts(
                list,
                df.row_names().clone(),
            )))
        }
        [rows, cols] => {
            let columns = resolve_columns(df, cols.as_ref())?;
            let rows = resolve_rows(df, rows.as_ref())?;
            log::debug!(
                "data frame selection of {} rows by {} columns",
                rows.len(),
                columns.len()
            );

            let list = frame_columns(df, &columns);
            let selected: Vec<Obj> = list.iter().map(|c| c.select(&rows)).collect();

            if selected.len() == 1 && drop.unwrap_or(true) {
                return Ok(selected.into_iter().next().unwrap_or_default());
            }

            let list = List::from(selected).with_names(list.names().map(<[Character]>::to_vec));
            let row_names = match df.row_names() {
                RowNames::Automatic(_) if indices[0].is_none() => df.row_names().clone(),
                row_names => row_names.select(&rows),
            };

            Ok(Obj::DataFrame(DataFrame::from_parts(list, row_names)))
        }
        _ => Err(Error::DimensionMismatch(format!(
            "{} indices for a data frame",
            indices.len()
        ))),
    }
}

fn is_frame_matrix_index(df: &DataFrame, index: &Obj) -> bool {
    match index {
        Obj::Vector(v) => match v.dims() {
            Some(d) if d.ndim() == 2 => {
                v.mode() != Mode::Logical || d.extents == vec![df.nrow(), df.ncol()]
            }
            _ => false,
        },
        _ => false,
    }
}

/// Gather data frame cells addressed by a matrix into a common vector
fn select_frame_cells(df: &DataFrame, index: &Obj) -> Result<Obj, Error> {
    let cells = frame_as_matrix(df)?;
    match index {
        Obj::Vector(v) if v.mode() == Mode::Logical => {
            let axis = cells.axis();
            let selection = Subset::normalize(Some(index), axis)?.resolve(axis);
            Ok(cells.select(&selection))
        }
        Obj::Vector(v) => {
            let dims = df.dims();
            if v.dims().map(|d| d.extents[1]) != Some(2) {
                return Err(Error::DimensionMismatch(
                    "index matrix must have 2 columns for a data frame".to_string(),
                ));
            }
            let selection = coordinate_selection(&dims, v)?;
            Ok(cells.select(&selection))
        }
        _ => Err(Error::InvalidIndex("invalid matrix subscript".to_string())),
    }
}

/// All cells of a data frame as one column-major vector of a common type
pub fn frame_as_matrix(df: &DataFrame) -> Result<Obj, Error> {
    let vectors: Vec<&Vector> = df
        .columns()
        .iter()
        .filter_map(|c| match c {
            Obj::Vector(v) => Some(v),
            _ => None,
        })
        .collect();

    if vectors.len() != df.ncol() {
        let cells: Vec<Obj> = df
            .columns()
            .iter()
            .flat_map(|c| {
                let n = c.len();
                (0..n).map(move |i| crate::subset::select_single(c, &[Some(Obj::from(i as i32 + 1))], true))
            })
            .collect::<Result<_, _>>()?;
        return Ok(Obj::List(List::from(cells)));
    }

    let mode = crate::object::common_mode(vectors.iter().copied()).unwrap_or(Mode::Logical);
    let mut values = Vector::empty(mode);
    for v in vectors {
        values = concat(&values, &v.coerce(mode));
    }

    Ok(Obj::Vector(values))
}

/// Concatenate two vectors of the same mode, without attributes
pub fn concat(l: &Vector, r: &Vector) -> Vector {
    match (l, r) {
        (Vector::Logical(l), Vector::Logical(r)) => {
            Vector::from(l.iter().chain(r.iter()).cloned().collect::<Vec<Logical>>())
        }
        (Vector::Integer(l), Vector::Integer(r)) => {
            Vector::from(l.iter().chain(r.iter()).cloned().collect::<Vec<Integer>>())
        }
        (Vector::Double(l), Vector::Double(r)) => {
            Vector::from(l.iter().chain(r.iter()).cloned().collect::<Vec<Double>>())
        }
        (Vector::Character(l), Vector::Character(r)) => {
            Vector::from(l.iter().chain(r.iter()).cloned().collect::<Vec<Character>>())
        }
        _ => {
            let mode = l.mode().max(r.mode());
            concat(&l.coerce(mode), &r.coerce(mode))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(values: Vec<i32>, nrow: usize, ncol: usize) -> Obj {
        let mut v = Vector::from(values);
        v.set_dims(Some(Dims::new(vec![nrow, ncol])));
        Obj::Vector(v)
    }

    #[test]
    fn cross_product_is_first_axis_fastest() {
        let dims = Dims::new(vec![3, 3]);
        let selections = vec![
            Selection::from(vec![Slot::Hit(0), Slot::Hit(2)]),
            Selection::from(vec![Slot::Hit(1), Slot::Hit(2)]),
        ];
        let flat = cross_product(&dims, &selections);
        assert_eq!(
            flat,
            Selection::from(vec![Slot::Hit(3), Slot::Hit(5), Slot::Hit(6), Slot::Hit(8)])
        );
    }

    #[test]
    fn per_axis_selection_keeps_shape() {
        let m = matrix((1..=9).collect(), 3, 3);
        let index = [Some(Obj::from(vec![1, 3])), Some(Obj::from(vec![2, 3]))];
        let result = select_per_axis(&m, &index, true).unwrap();
        assert_eq!(result, matrix(vec![4, 6, 7, 9], 2, 2));
    }

    #[test]
    fn per_axis_out_of_bounds_fails() {
        let m = matrix((1..=4).collect(), 2, 2);
        let index = [Some(Obj::from(vec![3])), None];
        assert!(matches!(
            select_per_axis(&m, &index, true),
            Err(Error::InvalidIndex(_))
        ));
    }

    #[test]
    fn wrong_number_of_indices_is_a_dimension_mismatch() {
        let m = matrix((1..=4).collect(), 2, 2);
        let index = [None, None, None];
        assert!(matches!(
            dispatch(&m, &index),
            Err(Error::DimensionMismatch(_))
        ));
    }

    #[test]
    fn coordinate_rows_address_cells() {
        let dims = Dims::new(vec![3, 3]);
        let mut index = Vector::from(vec![1, 3, 0, 2, 1, 1]);
        index.set_dims(Some(Dims::new(vec![3, 2])));
        let selection = coordinate_selection(&dims, &index).unwrap();
        assert_eq!(selection, Selection::from(vec![Slot::Hit(3), Slot::Hit(2)]));
    }

    #[test]
    fn coordinates_outside_the_array_are_missing() {
        let m = matrix((1..=4).collect(), 2, 2);
        let mut index = Vector::from(vec![1, 5]);
        index.set_dims(Some(Dims::new(vec![1, 2])));
        let result = select_coordinates(&m, &Obj::Vector(index)).unwrap();
        assert_eq!(result, Obj::from(vec![Integer::NA]));
    }

    #[test]
    fn coordinate_columns_must_match_the_dimensions() {
        let m = matrix((1..=9).collect(), 3, 3);
        let mut index = Vector::from(vec![1, 2, 3]);
        index.set_dims(Some(Dims::new(vec![1, 3])));
        assert!(matches!(
            dispatch(&m, &[Some(Obj::Vector(index))]),
            Err(Error::DimensionMismatch(_))
        ));
    }

    #[test]
    fn named_coordinates_need_dimnames() {
        let m = matrix((1..=4).collect(), 2, 2);
        let mut index = Vector::from(vec!["a", "b"]);
        index.set_dims(Some(Dims::new(vec![1, 2])));
        assert_eq!(
            select_coordinates(&m, &Obj::Vector(index)),
            Err(Error::NoNameMapping)
        );
    }

    #[test]
    fn named_coordinates_use_dimnames() {
        let names = |xs: &[&str]| -> Option<Vec<Character>> {
            Some(xs.iter().map(|x| Character::Some(x.to_string())).collect())
        };
        let mut v = Vector::from((1..=4).collect::<Vec<i32>>());
        v.set_dims(Some(
            Dims::new(vec![2, 2]).with_dimnames(Some(vec![names(&["a", "b"]), names(&["x", "y"])])),
        ));

        let mut index = Vector::from(vec!["b", "y"]);
        index.set_dims(Some(Dims::new(vec![1, 2])));
        assert_eq!(
            select_coordinates(&Obj::Vector(v), &Obj::Vector(index)),
            Ok(Obj::from(vec![4]))
        );
    }
}
