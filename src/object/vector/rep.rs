use std::fmt::Debug;

use super::coercion::CoercibleInto;
use super::types::Character;
use crate::object::{CowObj, Dims};
use crate::subset::{Axis, Selection, Slot};

/// Vector Representation
///
/// The values of a vector (or list) together with its attributes. Values
/// are shared copy-on-write, so cloning a `Rep` is cheap and selections
/// never alias the container they were taken from.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Rep<T: Clone> {
    values: CowObj<Vec<T>>,
    names: Option<CowObj<Vec<Character>>>,
    dims: Option<Dims>,
}

impl<T: Clone> Default for Rep<T> {
    fn default() -> Self {
        Rep {
            values: CowObj::from(Vec::new()),
            names: None,
            dims: None,
        }
    }
}

impl<T: Clone> From<Vec<T>> for Rep<T> {
    fn from(values: Vec<T>) -> Self {
        Rep {
            values: CowObj::from(values),
            names: None,
            dims: None,
        }
    }
}

impl<T: Clone> FromIterator<T> for Rep<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Rep::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Clone> Rep<T> {
    pub fn new() -> Self {
        Rep::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Mutate the values in place, copying them first if they are shared
    pub fn with_values_mut<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Vec<T>) -> R,
    {
        self.values.with_inner_mut(f)
    }

    pub fn into_values(self) -> Vec<T> {
        self.values.into_inner()
    }

    pub fn names(&self) -> Option<&[Character]> {
        self.names.as_deref().map(Vec::as_slice)
    }

    pub fn is_named(&self) -> bool {
        self.names.is_some()
    }

    pub fn set_names(&mut self, names: Option<Vec<Character>>) {
        self.names = names.map(CowObj::from);
    }

    pub fn with_names(mut self, names: Option<Vec<Character>>) -> Self {
        self.set_names(names);
        self
    }

    pub fn with_names_mut<F, R>(&mut self, f: F) -> Option<R>
    where
        F: FnOnce(&mut Vec<Character>) -> R,
    {
        self.names.as_mut().map(|names| names.with_inner_mut(f))
    }

    pub fn dims(&self) -> Option<&Dims> {
        self.dims.as_ref()
    }

    pub fn set_dims(&mut self, dims: Option<Dims>) {
        self.dims = dims;
    }

    pub fn with_dims(mut self, dims: Option<Dims>) -> Self {
        self.set_dims(dims);
        self
    }

    /// Copy of this representation without names or dimensions
    pub fn bare(&self) -> Self {
        Rep {
            values: self.values.clone(),
            names: None,
            dims: None,
        }
    }

    /// The single axis along which this representation is indexed
    pub fn axis(&self) -> Axis<'_> {
        Axis {
            len: self.len(),
            names: self.names(),
        }
    }

    /// Map values into a new representation, keeping all attributes
    pub fn map<U, F>(&self, f: F) -> Rep<U>
    where
        U: Clone,
        F: FnMut(&T) -> U,
    {
        Rep {
            values: CowObj::from(self.values.iter().map(f).collect::<Vec<U>>()),
            names: self.names.clone(),
            dims: self.dims.clone(),
        }
    }

    /// Coerce values into another mode, keeping all attributes
    pub fn coerce<U>(&self) -> Rep<U>
    where
        T: CoercibleInto<U>,
        U: Clone,
    {
        self.map(|x| x.clone().coerce_into())
    }
}

impl<T: Clone + Default> Rep<T> {
    /// Materialize a selection
    ///
    /// Slots that do not hit an element produce the missing marker of the
    /// element type: `NA` for atomic values and `NULL` for list elements.
    /// Names follow their elements, and the result carries no dimensions.
    ///
    pub fn select(&self, selection: &Selection) -> Rep<T> {
        let values: Vec<T> = selection
            .iter()
            .map(|slot| match slot {
                Slot::Hit(i) => self.values.get(*i).cloned().unwrap_or_default(),
                Slot::OutOfBounds | Slot::Missing => T::default(),
            })
            .collect();

        let names = self.names().map(|names| {
            selection
                .iter()
                .map(|slot| match slot {
                    Slot::Hit(i) => names.get(*i).cloned().unwrap_or_default(),
                    Slot::OutOfBounds | Slot::Missing => Character::NA,
                })
                .collect()
        });

        Rep::from(values).with_names(names)
    }

    /// Extend with missing markers (and empty names) up to `len` elements
    pub fn grow(&mut self, len: usize) {
        if len <= self.len() {
            return;
        }

        self.with_values_mut(|values| values.resize(len, T::default()));
        self.with_names_mut(|names| names.resize(len, Character::Some(String::new())));
        self.dims = None;
    }
}
