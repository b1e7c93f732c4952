use hashbrown::HashSet;

use super::index::{Axis, Subset};
use crate::object::types::Character;
use crate::object::OptionNA;

/// One position of a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// An existing element
    Hit(usize),
    /// A position or name that does not exist in the container
    OutOfBounds,
    /// A missing (`NA`) request
    Missing,
}

/// An ordered selection of positions into a container
///
/// Selections only reference the container; they are materialized with
/// [`crate::object::Rep::select`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection(Vec<Slot>);

impl Selection {
    /// Every element, in order
    pub fn all(len: usize) -> Selection {
        Selection((0..len).map(Slot::Hit).collect())
    }

    /// Cycle through `len` elements until `to` slots are filled
    pub fn recycled(len: usize, to: usize) -> Selection {
        if len == 0 {
            return Selection(vec![Slot::Missing; to]);
        }
        Selection((0..to).map(|i| Slot::Hit(i % len)).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.0.iter()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.0
    }

    pub fn has_out_of_bounds(&self) -> bool {
        self.0.iter().any(|s| *s == Slot::OutOfBounds)
    }

    pub fn has_missing(&self) -> bool {
        self.0.iter().any(|s| *s == Slot::Missing)
    }
}

impl From<Vec<Slot>> for Selection {
    fn from(value: Vec<Slot>) -> Self {
        Selection(value)
    }
}

impl FromIterator<Slot> for Selection {
    fn from_iter<T: IntoIterator<Item = Slot>>(iter: T) -> Self {
        Selection(iter.into_iter().collect())
    }
}

impl IntoIterator for Selection {
    type Item = Slot;
    type IntoIter = std::vec::IntoIter<Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Subset {
    /// Resolve a normalized index against an axis
    ///
    /// Resolution never fails. Positions past the end and unmatched names
    /// become [`Slot::OutOfBounds`]; `NA` requests become
    /// [`Slot::Missing`].
    ///
    pub fn resolve(&self, axis: Axis) -> Selection {
        let len = axis.len;
        match self {
            Subset::All => Selection::all(len),
            Subset::Empty => Selection::default(),
            Subset::Indices(indices) => indices
                .iter()
                .map(|i| match i {
                    Some(i) if *i < len => Slot::Hit(*i),
                    Some(_) => Slot::OutOfBounds,
                    None => Slot::Missing,
                })
                .collect(),
            Subset::Exclude(excluded) => {
                let excluded: HashSet<usize> = excluded.iter().copied().collect();
                (0..len)
                    .filter(|i| !excluded.contains(i))
                    .map(Slot::Hit)
                    .collect()
            }
            Subset::Mask { values, .. } => {
                let n = values.len().max(len);
                (0..n)
                    .filter_map(|i| match values[i % values.len()] {
                        Some(true) if i < len => Some(Slot::Hit(i)),
                        Some(true) => Some(Slot::OutOfBounds),
                        Some(false) => None,
                        None => Some(Slot::Missing),
                    })
                    .collect()
            }
            Subset::Names(names) => names
                .iter()
                .map(|name| match name {
                    Some(name) => axis
                        .position_of(name, true)
                        .map_or(Slot::OutOfBounds, Slot::Hit),
                    None => Slot::Missing,
                })
                .collect(),
        }
    }
}

/// Names of the selected positions of a named axis
pub fn select_names(axis: Axis, selection: &Selection) -> Option<Vec<Character>> {
    let names = axis.names?;
    Some(
        selection
            .iter()
            .map(|slot| match slot {
                Slot::Hit(i) => names[*i].clone(),
                Slot::OutOfBounds | Slot::Missing => OptionNA::NA,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_past_the_end_are_out_of_bounds() {
        let subset = Subset::Indices(vec![Some(2), Some(5), None]);
        let selection = subset.resolve(Axis::new(4, None));
        assert_eq!(
            selection,
            Selection::from(vec![Slot::Hit(2), Slot::OutOfBounds, Slot::Missing])
        );
    }

    #[test]
    fn exclusion_keeps_order() {
        let subset = Subset::Exclude(vec![2, 0]);
        let selection = subset.resolve(Axis::new(4, None));
        assert_eq!(selection, Selection::from(vec![Slot::Hit(1), Slot::Hit(3)]));
    }

    #[test]
    fn masks_recycle() {
        let subset = Subset::Mask {
            values: vec![Some(true), Some(false)],
            uneven: false,
        };
        let selection = subset.resolve(Axis::new(4, None));
        assert_eq!(selection, Selection::from(vec![Slot::Hit(0), Slot::Hit(2)]));
    }

    #[test]
    fn long_masks_reach_past_the_end() {
        let subset = Subset::Mask {
            values: vec![Some(true), None, Some(true)],
            uneven: false,
        };
        let selection = subset.resolve(Axis::new(2, None));
        assert_eq!(
            selection,
            Selection::from(vec![Slot::Hit(0), Slot::Missing, Slot::OutOfBounds])
        );
    }

    #[test]
    fn names_resolve_to_their_first_match() {
        let names = vec![
            Character::Some("a".into()),
            Character::Some("b".into()),
            Character::Some("a".into()),
        ];
        let subset = Subset::Names(vec![Some("a".into()), Some("z".into())]);
        let selection = subset.resolve(Axis::new(3, Some(&names)));
        assert_eq!(selection, Selection::from(vec![Slot::Hit(0), Slot::OutOfBounds]));
    }
}
