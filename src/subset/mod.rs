//! Subsetting of vectors, lists, arrays and data frames
//!
//! Indices are first normalized against an [`Axis`] into a [`Subset`],
//! resolved into a [`Selection`] of slots and finally materialized from the
//! container. The same normalization drives assignment.

mod index;
pub use index::{Axis, Subset};

mod selection;
pub use selection::{select_names, Selection, Slot};

pub mod assign;
pub mod dims;
pub mod simplify;
pub mod single;

pub use assign::{assign, assign_dollar, assign_single};
pub use single::{select_dollar, select_single};

use crate::error::Error;
use crate::object::Obj;
use dims::Dispatch;

/// Select with `[`
///
/// `indices` holds one entry per index position, `None` marking an empty
/// position as in `m[1, ]`. `drop` controls whether extents of one are
/// dropped from matrix results (the default) and whether a single data
/// frame column is returned as a vector.
///
pub fn select(x: &Obj, indices: &[Option<Obj>], drop: Option<bool>) -> Result<Obj, Error> {
    match x {
        Obj::Null => return Ok(Obj::Null),
        Obj::DataFrame(df) => return dims::select_frame(df, indices, drop),
        Obj::Function(_) => {
            return Err(Error::InvalidIndex(
                "object of type 'builtin' is not subsettable".to_string(),
            ))
        }
        Obj::Vector(_) | Obj::List(_) => (),
    }

    match dims::dispatch(x, indices)? {
        Dispatch::Whole => Ok(x.clone()),
        Dispatch::Flat => {
            let axis = x.axis();
            let selection = Subset::normalize(indices[0].as_ref(), axis)?.resolve(axis);
            log::trace!("flat selection of {} elements", selection.len());
            Ok(x.select(&selection))
        }
        Dispatch::Coordinates => match &indices[0] {
            Some(index) => dims::select_coordinates(x, index),
            None => Ok(x.clone()),
        },
        Dispatch::PerAxis => dims::select_per_axis(x, indices, drop.unwrap_or(true)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::types::*;
    use crate::object::{DataFrame, Dims, List, Vector};

    fn doubles() -> Obj {
        Obj::from(vec![2.1, 4.2, 3.3, 5.4])
    }

    #[test]
    fn positive_positions() {
        let x = select(&doubles(), &[Some(Obj::from(vec![3, 1]))], None).unwrap();
        assert_eq!(x, Obj::from(vec![3.3, 2.1]));

        let x = select(&doubles(), &[Some(Obj::from(vec![1, 1]))], None).unwrap();
        assert_eq!(x, Obj::from(vec![2.1, 2.1]));
    }

    #[test]
    fn negative_positions() {
        let x = select(&doubles(), &[Some(Obj::from(vec![-3, -1]))], None).unwrap();
        assert_eq!(x, Obj::from(vec![4.2, 5.4]));
    }

    #[test]
    fn logical_masks() {
        let mask = Obj::from(vec![true, false, true, false]);
        let x = select(&doubles(), &[Some(mask)], None).unwrap();
        assert_eq!(x, Obj::from(vec![2.1, 3.3]));
    }

    #[test]
    fn empty_indices() {
        let x = select(&doubles(), &[Some(Obj::Null)], None).unwrap();
        assert_eq!(x.len(), 0);

        let x = select(&doubles(), &[None], None).unwrap();
        assert_eq!(x, doubles());
    }

    #[test]
    fn out_of_bounds_positions_are_na() {
        let x = select(&doubles(), &[Some(Obj::from(vec![5]))], None).unwrap();
        assert_eq!(x, Obj::from(vec![Double::NA]));
    }

    #[test]
    fn single_brackets_preserve_lists() {
        let l = Obj::List(List::from_pairs(vec![
            (Some("a".to_string()), Obj::from(1)),
            (Some("b".to_string()), Obj::from(2)),
        ]));

        let x = select(&l, &[Some(Obj::from("a"))], None).unwrap();
        let expected = Obj::List(List::from_pairs(vec![(Some("a".to_string()), Obj::from(1))]));
        assert_eq!(x, expected);

        let x = select_single(&l, &[Some(Obj::from("a"))], true).unwrap();
        assert_eq!(x, Obj::from(1));
    }

    #[test]
    fn matrices_drop_by_default() {
        let mut v = Vector::from((1..=6).collect::<Vec<i32>>());
        v.set_dims(Some(Dims::new(vec![2, 3])));
        let m = Obj::Vector(v);

        let row = select(&m, &[Some(Obj::from(1)), None], None).unwrap();
        assert_eq!(row, Obj::from(vec![1, 3, 5]));

        let kept = select(&m, &[Some(Obj::from(1)), None], Some(false)).unwrap();
        assert_eq!(kept.dims().map(|d| d.extents), Some(vec![1, 3]));
    }

    #[test]
    fn data_frame_modes() {
        let df = Obj::DataFrame(
            DataFrame::new(vec![
                ("x".to_string(), Obj::from(vec![1, 2, 3])),
                ("y".to_string(), Obj::from(vec!["a", "b", "c"])),
            ])
            .unwrap(),
        );

        let columns = select(&df, &[Some(Obj::from("y"))], None).unwrap();
        assert!(matches!(columns, Obj::DataFrame(_)));

        let column = select(&df, &[None, Some(Obj::from("y"))], None).unwrap();
        assert_eq!(column, Obj::from(vec!["a", "b", "c"]));

        let frame = select(&df, &[None, Some(Obj::from("y"))], Some(false)).unwrap();
        assert!(matches!(frame, Obj::DataFrame(_)));

        assert!(matches!(
            select(&df, &[Some(Obj::from("z"))], None),
            Err(Error::InvalidIndex(_))
        ));
    }
}
