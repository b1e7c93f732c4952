use pretty_assertions::assert_eq;

use rsubset::error::Error;
use rsubset::object::types::*;
use rsubset::object::*;
use rsubset::subset::{assign, assign_dollar, assign_single, select, select_dollar, select_single};

fn x() -> Obj {
    Obj::from(vec![2.1, 4.2, 3.3, 5.4])
}

fn ab() -> Obj {
    Obj::List(List::from_pairs([
        (Some("a".to_string()), Obj::from(1.0)),
        (Some("b".to_string()), Obj::from(2.0)),
    ]))
}

fn index<T>(x: T) -> Vec<Option<Obj>>
where
    Obj: From<T>,
{
    vec![Some(Obj::from(x))]
}

#[test]
fn positive_positions() {
    assert_eq!(select(&x(), &index(vec![3, 1]), None), Ok(Obj::from(vec![3.3, 2.1])));
}

#[test]
fn negative_positions_exclude() {
    assert_eq!(
        select(&x(), &index(vec![-3, -1]), None),
        Ok(Obj::from(vec![4.2, 5.4]))
    );
}

#[test]
fn logical_masks() {
    assert_eq!(
        select(&x(), &index(vec![true, false, true, false]), None),
        Ok(Obj::from(vec![2.1, 3.3]))
    );

    // shorter masks recycle
    assert_eq!(
        select(&x(), &index(vec![true, false]), None),
        select(&x(), &index(vec![true, false, true, false]), None)
    );
}

#[test]
fn zero_length_and_absent_indices() {
    let empty = select(&x(), &index(Vec::<i32>::new()), None);
    assert_eq!(empty.map(|v| v.len()), Ok(0));

    let null = select(&x(), &[Some(Obj::Null)], None);
    assert_eq!(null.map(|v| v.len()), Ok(0));

    assert_eq!(select(&x(), &[None], None), Ok(x()));
}

#[test]
fn mixed_signs_fail() {
    assert_eq!(select(&x(), &index(vec![1, -2]), None), Err(Error::MixedSign));
}

#[test]
fn complements() {
    let positions = select(&x(), &index(vec![2, 4]), None);
    let complement = select(&x(), &index(vec![-1, -3]), None);
    assert_eq!(positions, complement);
}

#[test]
fn out_of_bounds_atomic() {
    assert_eq!(
        select_single(&x(), &index(10), true),
        Err(Error::OutOfBounds)
    );

    assert_eq!(
        select(&x(), &index(10), None),
        Ok(Obj::from(vec![Double::NA]))
    );
}

#[test]
fn out_of_bounds_list() {
    assert_eq!(select_single(&ab(), &index(10), true), Ok(Obj::Null));

    let slot = select(&ab(), &index(10), None).unwrap();
    assert_eq!(slot.len(), 1);
    assert!(matches!(&slot, Obj::List(l) if l.iter().all(Obj::is_null)));
}

#[test]
fn list_keys() {
    assert_eq!(select_single(&ab(), &index("a"), true), Ok(Obj::from(1.0)));

    let wrapped = select(&ab(), &index("a"), None).unwrap();
    assert_eq!(
        wrapped,
        Obj::List(List::from_pairs([(Some("a".to_string()), Obj::from(1.0))]))
    );
}

#[test]
fn dollar_partial_matching() {
    let x = Obj::List(List::from_pairs([(Some("alpha".to_string()), Obj::from(1.0))]));
    assert_eq!(select_dollar(&x, "al"), Ok(Obj::from(1.0)));
    assert_eq!(select_dollar(&x, "b"), Ok(Obj::Null));
}

#[test]
fn assignment_then_selection() {
    let mut v = x();
    assign(&mut v, &index(vec![1, 3]), Obj::from(vec![0.0, 1.0])).unwrap();
    assert_eq!(
        select(&v, &index(vec![1, 3]), None),
        Ok(Obj::from(vec![0.0, 1.0]))
    );

    // values recycle when lengths divide evenly
    let mut v = x();
    assign(&mut v, &index(vec![1, 2, 3, 4]), Obj::from(vec![0.0, 1.0])).unwrap();
    assert_eq!(v, Obj::from(vec![0.0, 1.0, 0.0, 1.0]));
}

#[test]
fn assignment_length_mismatch() {
    let mut v = x();
    let result = assign(&mut v, &index(vec![1, 2, 3]), Obj::from(vec![0.0, 1.0]));
    assert_eq!(result, Err(Error::LengthMismatch(3, 2)));
    assert_eq!(v, x());
}

#[test]
fn single_assignment_and_removal() {
    let mut l = ab();
    assign_single(&mut l, &index("c"), Obj::from(3.0)).unwrap();
    assert_eq!(l.len(), 3);

    assign_dollar(&mut l, "a", Obj::Null).unwrap();
    assert_eq!(
        l.names(),
        Some(vec![Character::Some("b".into()), Character::Some("c".into())])
    );
}

#[test]
fn coordinate_matrices() {
    // a 3 x 3 matrix holding 1..9 in column-major order
    let mut m = Obj::from((1..=9).collect::<Vec<i32>>());
    m.set_dims(Some(Dims::new(vec![3, 3]))).unwrap();

    let mut coords = Obj::from(vec![1, 3, 2, 1]);
    coords.set_dims(Some(Dims::new(vec![2, 2]))).unwrap();

    // (1, 2) and (3, 1)
    assert_eq!(select(&m, &[Some(coords)], None), Ok(Obj::from(vec![4, 3])));
}
