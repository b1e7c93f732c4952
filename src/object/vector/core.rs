use super::coercion::coerce_values;
use super::rep::Rep;
use super::types::*;
use crate::object::Dims;
use crate::subset::{Axis, Selection};

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum OptionNA<T> {
    #[default]
    NA,
    Some(T),
}

impl<T> PartialOrd for OptionNA<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self, other) {
            (OptionNA::Some(l), OptionNA::Some(r)) => l.partial_cmp(r),
            _ => None,
        }
    }
}

impl<T> OptionNA<T> {
    pub fn map<F, U>(self, f: F) -> OptionNA<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            OptionNA::Some(x) => OptionNA::Some(f(x)),
            OptionNA::NA => OptionNA::NA,
        }
    }

    pub fn as_option(self) -> Option<T> {
        match self {
            OptionNA::Some(x) => Option::Some(x),
            OptionNA::NA => Option::None,
        }
    }

    pub fn as_ref(&self) -> OptionNA<&T> {
        match self {
            OptionNA::Some(x) => OptionNA::Some(x),
            OptionNA::NA => OptionNA::NA,
        }
    }
}

impl<T> From<Option<T>> for OptionNA<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(OptionNA::NA, OptionNA::Some)
    }
}

/// Apply an expression to the `Rep` of any vector variant
macro_rules! with_rep {
    ($vector:expr, $rep:ident => $body:expr) => {
        match $vector {
            Vector::Logical($rep) => $body,
            Vector::Integer($rep) => $body,
            Vector::Double($rep) => $body,
            Vector::Character($rep) => $body,
        }
    };
}

/// Map the `Rep` of any vector variant into a vector of the same mode
macro_rules! map_rep {
    ($vector:expr, $rep:ident => $body:expr) => {
        match $vector {
            Vector::Logical($rep) => Vector::Logical($body),
            Vector::Integer($rep) => Vector::Integer($body),
            Vector::Double($rep) => Vector::Double($body),
            Vector::Character($rep) => Vector::Character($body),
        }
    };
}

pub(crate) use map_rep;
pub(crate) use with_rep;

#[derive(Debug, Clone, PartialEq)]
pub enum Vector {
    Logical(Rep<Logical>),
    Integer(Rep<Integer>),
    Double(Rep<Double>),
    Character(Rep<Character>),
}

impl Default for Vector {
    fn default() -> Self {
        Vector::Logical(Rep::new())
    }
}

impl Vector {
    pub fn empty(mode: Mode) -> Self {
        match mode {
            Mode::Logical => Vector::Logical(Rep::new()),
            Mode::Integer => Vector::Integer(Rep::new()),
            Mode::Double => Vector::Double(Rep::new()),
            Mode::Character => Vector::Character(Rep::new()),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Vector::Logical(_) => Mode::Logical,
            Vector::Integer(_) => Mode::Integer,
            Vector::Double(_) => Mode::Double,
            Vector::Character(_) => Mode::Character,
        }
    }

    pub fn len(&self) -> usize {
        with_rep!(self, x => x.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn names(&self) -> Option<&[Character]> {
        with_rep!(self, x => x.names())
    }

    pub fn is_named(&self) -> bool {
        self.names().is_some()
    }

    pub fn set_names(&mut self, names: Option<Vec<Character>>) {
        with_rep!(self, x => x.set_names(names))
    }

    pub fn dims(&self) -> Option<&Dims> {
        with_rep!(self, x => x.dims())
    }

    pub fn set_dims(&mut self, dims: Option<Dims>) {
        with_rep!(self, x => x.set_dims(dims))
    }

    pub fn axis(&self) -> Axis<'_> {
        with_rep!(self, x => x.axis())
    }

    /// Copy without names or dimensions
    pub fn bare(&self) -> Vector {
        map_rep!(self, x => x.bare())
    }

    pub fn select(&self, selection: &Selection) -> Vector {
        map_rep!(self, x => x.select(selection))
    }

    pub fn grow(&mut self, len: usize) {
        with_rep!(self, x => x.grow(len))
    }

    /// Coerce into another mode, keeping names and dimensions
    ///
    /// Coercion that introduces `NA`s (for example parsing `"a"` as a
    /// number) is reported as a warning.
    ///
    pub fn coerce(&self, mode: Mode) -> Vector {
        if self.mode() == mode {
            return self.clone();
        }

        let introduced_na = match (self, mode) {
            (Vector::Character(x), Mode::Double | Mode::Integer | Mode::Logical) => {
                let (_, introduced_na): (Vec<Double>, bool) = coerce_values(x.values());
                introduced_na
            }
            _ => false,
        };

        if introduced_na {
            log::warn!("NAs introduced by coercion");
        }

        match mode {
            Mode::Logical => Vector::Logical(self.as_logical_rep()),
            Mode::Integer => Vector::Integer(self.as_integer_rep()),
            Mode::Double => Vector::Double(self.as_double_rep()),
            Mode::Character => Vector::Character(self.as_character_rep()),
        }
    }

    pub fn as_logical_rep(&self) -> Rep<Logical> {
        with_rep!(self, x => x.coerce())
    }

    pub fn as_integer_rep(&self) -> Rep<Integer> {
        with_rep!(self, x => x.coerce())
    }

    pub fn as_double_rep(&self) -> Rep<Double> {
        with_rep!(self, x => x.coerce())
    }

    pub fn as_character_rep(&self) -> Rep<Character> {
        with_rep!(self, x => x.coerce())
    }

    pub fn as_logicals(&self) -> Vec<Logical> {
        self.as_logical_rep().into_values()
    }

    pub fn as_integers(&self) -> Vec<Integer> {
        self.as_integer_rep().into_values()
    }

    pub fn as_doubles(&self) -> Vec<Double> {
        self.as_double_rep().into_values()
    }

    pub fn as_characters(&self) -> Vec<Character> {
        self.as_character_rep().into_values()
    }

    /// Whether each element is `NA` (or `NaN` for doubles)
    pub fn is_na(&self) -> Vec<bool> {
        match self {
            Vector::Double(x) => x
                .iter()
                .map(|v| match v {
                    OptionNA::Some(f) => f.is_nan(),
                    OptionNA::NA => true,
                })
                .collect(),
            Vector::Integer(x) => x.iter().map(|v| matches!(v, OptionNA::NA)).collect(),
            Vector::Logical(x) => x.iter().map(|v| matches!(v, OptionNA::NA)).collect(),
            Vector::Character(x) => x.iter().map(|v| matches!(v, OptionNA::NA)).collect(),
        }
    }

    /// Values as per-element character keys, used when matching values
    pub fn keys(&self) -> Vec<Character> {
        self.bare().as_characters()
    }
}

/// The most general mode among a set of vectors
pub fn common_mode<'a, I>(vectors: I) -> Option<Mode>
where
    I: IntoIterator<Item = &'a Vector>,
{
    vectors.into_iter().map(Vector::mode).max()
}

impl From<Rep<Logical>> for Vector {
    fn from(x: Rep<Logical>) -> Self {
        Vector::Logical(x)
    }
}

impl From<Rep<Integer>> for Vector {
    fn from(x: Rep<Integer>) -> Self {
        Vector::Integer(x)
    }
}

impl From<Rep<Double>> for Vector {
    fn from(x: Rep<Double>) -> Self {
        Vector::Double(x)
    }
}

impl From<Rep<Character>> for Vector {
    fn from(x: Rep<Character>) -> Self {
        Vector::Character(x)
    }
}

impl From<Vec<f64>> for Vector {
    fn from(x: Vec<f64>) -> Self {
        Vector::Double(x.into_iter().map(OptionNA::Some).collect())
    }
}

impl From<Vec<Double>> for Vector {
    fn from(x: Vec<Double>) -> Self {
        Vector::Double(x.into())
    }
}

impl From<Vec<i32>> for Vector {
    fn from(x: Vec<i32>) -> Self {
        Vector::Integer(x.into_iter().map(OptionNA::Some).collect())
    }
}

impl From<Vec<Integer>> for Vector {
    fn from(x: Vec<Integer>) -> Self {
        Vector::Integer(x.into())
    }
}

impl From<Vec<bool>> for Vector {
    fn from(x: Vec<bool>) -> Self {
        Vector::Logical(x.into_iter().map(OptionNA::Some).collect())
    }
}

impl From<Vec<Logical>> for Vector {
    fn from(x: Vec<Logical>) -> Self {
        Vector::Logical(x.into())
    }
}

impl From<Vec<String>> for Vector {
    fn from(x: Vec<String>) -> Self {
        Vector::Character(x.into_iter().map(OptionNA::Some).collect())
    }
}

impl From<Vec<&str>> for Vector {
    fn from(x: Vec<&str>) -> Self {
        Vector::Character(x.into_iter().map(|s| OptionNA::Some(s.to_string())).collect())
    }
}

impl From<Vec<Character>> for Vector {
    fn from(x: Vec<Character>) -> Self {
        Vector::Character(x.into())
    }
}

impl From<f64> for Vector {
    fn from(x: f64) -> Self {
        Vector::from(vec![x])
    }
}

impl From<i32> for Vector {
    fn from(x: i32) -> Self {
        Vector::from(vec![x])
    }
}

impl From<bool> for Vector {
    fn from(x: bool) -> Self {
        Vector::from(vec![x])
    }
}

impl From<String> for Vector {
    fn from(x: String) -> Self {
        Vector::from(vec![x])
    }
}

impl From<&str> for Vector {
    fn from(x: &str) -> Self {
        Vector::from(vec![x])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coercion_keeps_names() {
        let mut x = Vector::from(vec![1, 2]);
        x.set_names(Some(vec![
            Character::Some("a".into()),
            Character::Some("b".into()),
        ]));

        let y = x.coerce(Mode::Character);
        assert_eq!(y.mode(), Mode::Character);
        assert_eq!(y.names(), x.names());
        assert_eq!(
            y.as_characters(),
            vec![Character::Some("1".into()), Character::Some("2".into())]
        );
    }

    #[test]
    fn common_mode_is_most_general() {
        let x = Vector::from(vec![true]);
        let y = Vector::from(vec![1.5]);
        assert_eq!(common_mode([&x, &y]), Some(Mode::Double));
    }
}
