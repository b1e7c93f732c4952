use crate::error::Error;
use crate::object::types::*;
use crate::object::{Obj, OptionNA, Vector};

/// The length and names of one axis of a container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis<'a> {
    pub len: usize,
    pub names: Option<&'a [Character]>,
}

impl<'a> Axis<'a> {
    pub fn new(len: usize, names: Option<&'a [Character]>) -> Self {
        Axis { len, names }
    }

    /// Position of the first element carrying `name`
    ///
    /// Empty names never match. Without `exact`, a unique prefix match is
    /// accepted when no name matches exactly.
    ///
    pub fn position_of(&self, name: &str, exact: bool) -> Option<usize> {
        let names = self.names?;
        if name.is_empty() {
            return None;
        }

        let exact_match = names
            .iter()
            .position(|n| matches!(n, OptionNA::Some(n) if n == name));

        if exact || exact_match.is_some() {
            return exact_match;
        }

        let mut partial = names
            .iter()
            .enumerate()
            .filter(|(_, n)| matches!(n, OptionNA::Some(n) if n.starts_with(name)));

        match (partial.next(), partial.next()) {
            (Some((i, _)), None) => Some(i),
            _ => None,
        }
    }
}

/// A normalized index
///
/// Positions are zero-based. `None` marks a missing request (`NA`).
/// Positive positions may exceed the axis length; they resolve to
/// out-of-bounds slots when selecting and extend the container when
/// assigning.
#[derive(Debug, Clone, PartialEq)]
pub enum Subset {
    /// No index given, as in `x[]`
    All,
    /// Zero-length index, as in `x[integer(0)]` or `x[NULL]`
    Empty,
    Indices(Vec<Option<usize>>),
    Exclude(Vec<usize>),
    Mask {
        values: Vec<Option<bool>>,
        /// whether the mask recycles unevenly over the axis
        uneven: bool,
    },
    Names(Vec<Option<String>>),
}

/// Convert numeric index values into signed whole positions
fn whole_positions(v: &Vector) -> Vec<Option<i64>> {
    v.as_doubles()
        .into_iter()
        .map(|x| match x {
            OptionNA::Some(x) if x.is_nan() => None,
            OptionNA::Some(x) => Some(x.trunc() as i64),
            OptionNA::NA => None,
        })
        .collect()
}

impl Subset {
    /// Normalize an index for selection
    ///
    /// Character indices require the axis to carry names.
    pub fn normalize(index: Option<&Obj>, axis: Axis) -> Result<Subset, Error> {
        let subset = Subset::normalize_for_assign(index, axis)?;
        if matches!(subset, Subset::Names(_)) && axis.names.is_none() {
            return Err(Error::NoNameMapping);
        }
        Ok(subset)
    }

    /// Normalize an index for assignment, where names may be created
    pub fn normalize_for_assign(index: Option<&Obj>, axis: Axis) -> Result<Subset, Error> {
        let Some(index) = index else {
            return Ok(Subset::All);
        };

        let v = match index {
            Obj::Null => return Ok(Subset::Empty),
            Obj::Vector(v) => v,
            other => {
                return Err(Error::InvalidIndex(format!(
                    "invalid subscript type '{}'",
                    other.type_name()
                )))
            }
        };

        if v.is_empty() {
            return Ok(Subset::Empty);
        }

        match v {
            Vector::Logical(mask) => Ok(Subset::from_mask(mask.values(), axis)),
            Vector::Character(names) => Ok(Subset::Names(
                names.iter().map(|n| n.clone().as_option()).collect(),
            )),
            Vector::Integer(_) | Vector::Double(_) => {
                Subset::from_positions(&whole_positions(v), axis)
            }
        }
    }

    fn from_mask(mask: &[Logical], axis: Axis) -> Subset {
        let uneven = mask.len() < axis.len && axis.len % mask.len() != 0;
        if uneven {
            log::warn!(
                "logical index of length {} recycled unevenly over {} elements",
                mask.len(),
                axis.len
            );
        }

        Subset::Mask {
            values: mask.iter().map(|m| m.clone().as_option()).collect(),
            uneven,
        }
    }

    fn from_positions(positions: &[Option<i64>], axis: Axis) -> Result<Subset, Error> {
        let has_positive = positions.iter().any(|p| matches!(p, Some(p) if *p > 0));
        let has_negative = positions.iter().any(|p| matches!(p, Some(p) if *p < 0));
        let has_na = positions.iter().any(Option::is_none);

        if has_positive && has_negative {
            return Err(Error::MixedSign);
        }

        if has_negative {
            if has_na {
                return Err(Error::InvalidIndex(
                    "can't mix NAs with negative subscripts".to_string(),
                ));
            }

            let excluded = positions
                .iter()
                .flatten()
                .filter(|p| **p != 0)
                .map(|p| p.unsigned_abs() as usize)
                .collect::<Vec<usize>>();

            if excluded.iter().any(|p| *p > axis.len) {
                return Err(Error::InvalidIndex(
                    "negative subscript out of bounds".to_string(),
                ));
            }

            log::trace!("excluding {} positions", excluded.len());
            return Ok(Subset::Exclude(excluded.into_iter().map(|p| p - 1).collect()));
        }

        // zeros select nothing
        let indices: Vec<Option<usize>> = positions
            .iter()
            .filter(|p| **p != Some(0))
            .map(|p| p.map(|p| p as usize - 1))
            .collect();

        if indices.is_empty() {
            return Ok(Subset::Empty);
        }

        Ok(Subset::Indices(indices))
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Subset::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(len: usize) -> Axis<'static> {
        Axis::new(len, None)
    }

    #[test]
    fn doubles_truncate_toward_zero() {
        let index = Obj::from(vec![2.9, 1.1]);
        let subset = Subset::normalize(Some(&index), axis(4)).unwrap();
        assert_eq!(subset, Subset::Indices(vec![Some(1), Some(0)]));
    }

    #[test]
    fn zeros_are_dropped() {
        let index = Obj::from(vec![0, 2, 0]);
        let subset = Subset::normalize(Some(&index), axis(4)).unwrap();
        assert_eq!(subset, Subset::Indices(vec![Some(1)]));

        let index = Obj::from(vec![0]);
        let subset = Subset::normalize(Some(&index), axis(4)).unwrap();
        assert_eq!(subset, Subset::Empty);
    }

    #[test]
    fn negatives_exclude() {
        let index = Obj::from(vec![-3, -1, 0]);
        let subset = Subset::normalize(Some(&index), axis(4)).unwrap();
        assert_eq!(subset, Subset::Exclude(vec![2, 0]));
    }

    #[test]
    fn mixed_signs_fail() {
        let index = Obj::from(vec![-1, 2]);
        assert_eq!(
            Subset::normalize(Some(&index), axis(4)),
            Err(Error::MixedSign)
        );
    }

    #[test]
    fn negatives_with_na_fail() {
        let index = Obj::from(vec![Integer::Some(-1), Integer::NA]);
        assert!(matches!(
            Subset::normalize(Some(&index), axis(4)),
            Err(Error::InvalidIndex(_))
        ));
    }

    #[test]
    fn negatives_beyond_the_axis_fail() {
        let index = Obj::from(vec![-5]);
        assert!(matches!(
            Subset::normalize(Some(&index), axis(4)),
            Err(Error::InvalidIndex(_))
        ));
    }

    #[test]
    fn positives_beyond_the_axis_are_kept() {
        let index = Obj::from(vec![5]);
        let subset = Subset::normalize(Some(&index), axis(4)).unwrap();
        assert_eq!(subset, Subset::Indices(vec![Some(4)]));
    }

    #[test]
    fn null_and_empty_select_nothing() {
        assert_eq!(
            Subset::normalize(Some(&Obj::Null), axis(4)),
            Ok(Subset::Empty)
        );
        let index = Obj::Vector(Vector::empty(Mode::Integer));
        assert_eq!(Subset::normalize(Some(&index), axis(4)), Ok(Subset::Empty));
        assert_eq!(Subset::normalize(None, axis(4)), Ok(Subset::All));
    }

    #[test]
    fn uneven_masks_are_flagged() {
        let index = Obj::from(vec![true, false]);
        let subset = Subset::normalize(Some(&index), axis(3)).unwrap();
        assert!(matches!(subset, Subset::Mask { uneven: true, .. }));

        let subset = Subset::normalize(Some(&index), axis(4)).unwrap();
        assert!(matches!(subset, Subset::Mask { uneven: false, .. }));
    }

    #[test]
    fn names_require_named_axes() {
        let index = Obj::from(vec!["a"]);
        assert_eq!(
            Subset::normalize(Some(&index), axis(2)),
            Err(Error::NoNameMapping)
        );
        assert!(Subset::normalize_for_assign(Some(&index), axis(2)).is_ok());
    }

    #[test]
    fn lists_are_not_indices() {
        let index = Obj::List(vec![Obj::from(1)].into());
        assert!(matches!(
            Subset::normalize(Some(&index), axis(2)),
            Err(Error::InvalidIndex(_))
        ));
    }

    #[test]
    fn partial_name_matching() {
        let names = vec![
            Character::Some("alpha".into()),
            Character::Some("beta".into()),
            Character::Some("bet".into()),
        ];
        let axis = Axis::new(3, Some(&names));
        assert_eq!(axis.position_of("al", false), Some(0));
        assert_eq!(axis.position_of("al", true), None);
        assert_eq!(axis.position_of("bet", false), Some(2));
        assert_eq!(axis.position_of("be", false), None);
    }
}
