use crate::object::types::Character;
use crate::object::{map_rep, Dims, Obj, Rep, Vector};

fn drop_extents<T: Clone>(rep: Rep<T>) -> Rep<T> {
    let Some(dims) = rep.dims().cloned() else {
        return rep;
    };

    let kept: Vec<usize> = (0..dims.ndim())
        .filter(|&k| dims.extents[k] != 1)
        .collect();

    if kept.len() == dims.ndim() {
        return rep;
    }

    match kept[..] {
        [] => rep.with_dims(None).with_names(None),
        [axis] => {
            let names = dims.axis_names(axis).map(<[Character]>::to_vec);
            rep.with_dims(None).with_names(names)
        }
        _ => {
            let extents = kept.iter().map(|&k| dims.extents[k]).collect();
            let dimnames = dims
                .dimnames
                .as_ref()
                .map(|d| kept.iter().map(|&k| d[k].clone()).collect());

            rep.with_dims(Some(Dims::new(extents).with_dimnames(dimnames)))
        }
    }
}

/// Drop extents of one from a matrix or array
///
/// When a single axis remains, its names become the element names. When
/// no axis remains, the result is a plain unnamed vector.
///
pub fn drop_dims(x: Obj) -> Obj {
    match x {
        Obj::Vector(v) => Obj::Vector(map_rep!(v, r => drop_extents(r))),
        Obj::List(l) => Obj::List(drop_extents(l)),
        other => other,
    }
}

/// Simplify the result of a single-element extraction
///
/// A length-one list is unwrapped into its element and atomic results
/// lose their names and dimensions.
///
pub fn unwrap(x: Obj) -> Obj {
    match x {
        Obj::List(l) if l.len() == 1 => l.get(0).cloned().unwrap_or_default(),
        Obj::Vector(v) => Obj::Vector(v.bare()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::OptionNA;

    fn names(xs: &[&str]) -> Option<Vec<Character>> {
        Some(xs.iter().map(|x| OptionNA::Some(x.to_string())).collect())
    }

    #[test]
    fn single_remaining_axis_names_elements() {
        let dims = Dims::new(vec![1, 2]).with_dimnames(Some(vec![names(&["r"]), names(&["a", "b"])]));
        let mut v = Vector::from(vec![1, 2]);
        v.set_dims(Some(dims));

        let dropped = drop_dims(Obj::Vector(v));
        let Obj::Vector(v) = dropped else {
            unreachable!()
        };

        assert!(v.dims().is_none());
        assert_eq!(v.names().map(<[Character]>::to_vec), names(&["a", "b"]));
    }

    #[test]
    fn all_unit_extents_leave_a_plain_vector() {
        let mut v = Vector::from(vec![1]);
        v.set_dims(Some(Dims::new(vec![1, 1, 1])));

        let dropped = drop_dims(Obj::Vector(v));
        assert_eq!(dropped, Obj::from(vec![1]));
    }

    #[test]
    fn higher_dimensions_keep_their_names() {
        let dims = Dims::new(vec![2, 1, 2]).with_dimnames(Some(vec![
            names(&["a", "b"]),
            None,
            names(&["x", "y"]),
        ]));
        let mut v = Vector::from(vec![1, 2, 3, 4]);
        v.set_dims(Some(dims));

        let dropped = drop_dims(Obj::Vector(v));
        let expected = Dims::new(vec![2, 2]).with_dimnames(Some(vec![names(&["a", "b"]), names(&["x", "y"])]));
        assert_eq!(dropped.dims(), Some(expected));
    }

    #[test]
    fn unwrap_strips_atomic_names() {
        let mut v = Vector::from(vec![1]);
        v.set_names(names(&["a"]));
        assert_eq!(unwrap(Obj::Vector(v)), Obj::from(vec![1]));
    }
}
