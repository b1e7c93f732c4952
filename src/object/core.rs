use crate::callable::core::Builtin;
use crate::error::Error;
use crate::subset::{Axis, Selection};

use super::types::*;
use super::*;

#[derive(Default, Clone, Debug, PartialEq)]
pub enum Obj {
    // Data structures
    #[default]
    Null,
    Vector(Vector),
    List(List),
    DataFrame(DataFrame),

    // Builtin functions, bound in the base environment
    Function(Box<dyn Builtin>),
}

impl Obj {
    pub fn is_null(&self) -> bool {
        matches!(self, Obj::Null)
    }

    pub fn is_list_like(&self) -> bool {
        matches!(self, Obj::List(_) | Obj::DataFrame(_))
    }

    /// Number of elements along the flat axis (columns for data frames)
    pub fn len(&self) -> usize {
        match self {
            Obj::Null => 0,
            Obj::Vector(v) => v.len(),
            Obj::List(l) => l.len(),
            Obj::DataFrame(df) => df.ncol(),
            Obj::Function(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Obj::Null => "NULL",
            Obj::Vector(v) => v.mode().type_name(),
            Obj::List(_) | Obj::DataFrame(_) => "list",
            Obj::Function(_) => "builtin",
        }
    }

    pub fn names(&self) -> Option<Vec<Character>> {
        match self {
            Obj::Vector(v) => v.names().map(<[Character]>::to_vec),
            Obj::List(l) => l.names().map(<[Character]>::to_vec),
            Obj::DataFrame(df) => Some(df.column_names()),
            Obj::Null | Obj::Function(_) => None,
        }
    }

    pub fn set_names(&mut self, names: Option<Vec<Character>>) -> Result<(), Error> {
        if let Some(names) = &names {
            if names.len() > self.len() {
                return Err(Error::Other(format!(
                    "'names' attribute [{}] must be the same length as the vector [{}]",
                    names.len(),
                    self.len()
                )));
            }
        }

        // shorter names are padded with NA
        let names = names.map(|mut names| {
            names.resize(self.len(), Character::NA);
            names
        });

        match self {
            Obj::Vector(v) => v.set_names(names),
            Obj::List(l) => l.set_names(names),
            Obj::DataFrame(df) => match names {
                Some(names) => df.set_column_names(names)?,
                None => return Err(Error::Other("data frames must have names".to_string())),
            },
            Obj::Null if names.is_none() => (),
            Obj::Null | Obj::Function(_) => {
                return Err(Error::Other(
                    "names() applied to a non-vector".to_string(),
                ))
            }
        }

        Ok(())
    }

    /// Dimensions of a matrix, array or data frame
    pub fn dims(&self) -> Option<Dims> {
        match self {
            Obj::Vector(v) => v.dims().cloned(),
            Obj::List(l) => l.dims().cloned(),
            Obj::DataFrame(df) => Some(df.dims()),
            Obj::Null | Obj::Function(_) => None,
        }
    }

    pub fn set_dims(&mut self, dims: Option<Dims>) -> Result<(), Error> {
        if let Some(dims) = &dims {
            dims.validate(self.len())?;
        }

        match self {
            Obj::Vector(v) => {
                v.set_dims(dims);
                v.set_names(None);
            }
            Obj::List(l) => {
                l.set_dims(dims);
                l.set_names(None);
            }
            Obj::Null if dims.is_none() => (),
            _ => return Err(Error::Other("invalid first argument".to_string())),
        }

        Ok(())
    }

    /// The flat axis used when the object is indexed by a single index
    pub fn axis(&self) -> Axis<'_> {
        match self {
            Obj::Vector(v) => v.axis(),
            Obj::List(l) => l.axis(),
            Obj::DataFrame(df) => df.columns().axis(),
            Obj::Null | Obj::Function(_) => Axis {
                len: 0,
                names: None,
            },
        }
    }

    /// Materialize a flat selection of elements
    pub fn select(&self, selection: &Selection) -> Obj {
        match self {
            Obj::Null | Obj::Function(_) => Obj::Null,
            Obj::Vector(v) => Obj::Vector(v.select(selection)),
            Obj::List(l) => Obj::List(l.select(selection)),
            Obj::DataFrame(df) => Obj::List(df.columns().select(selection)),
        }
    }

    /// Recycle a vector or list to `len` elements, without attributes
    pub fn recycle(&self, len: usize) -> Obj {
        let n = self.len();
        if n == len {
            return self.clone();
        }

        let selection = Selection::recycled(n, len);
        match self.select(&selection) {
            Obj::Vector(mut v) => {
                v.set_names(None);
                Obj::Vector(v)
            }
            Obj::List(mut l) => {
                l.set_names(None);
                Obj::List(l)
            }
            other => other,
        }
    }

    pub fn as_vector(&self) -> Result<&Vector, Error> {
        match self {
            Obj::Vector(v) => Ok(v),
            _ => Err(Error::Other(format!(
                "cannot coerce type '{}' to vector of type 'any'",
                self.type_name()
            ))),
        }
    }

    /// Whether this is a non-empty logical (or coercible) vector of `TRUE`s
    pub fn all_true(&self) -> bool {
        match self {
            Obj::Vector(v) if !v.is_empty() => v
                .as_logicals()
                .iter()
                .all(|x| matches!(x, OptionNA::Some(true))),
            _ => false,
        }
    }

    /// Interpret a length-one vector as a logical flag
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Obj::Vector(v) if v.len() == 1 => v.as_logicals().pop().and_then(OptionNA::as_option),
            _ => None,
        }
    }

    /// Interpret a length-one vector as a count
    pub fn as_count(&self) -> Option<usize> {
        match self {
            Obj::Vector(v) if v.len() == 1 && v.mode() != Mode::Character => v
                .as_doubles()
                .pop()
                .and_then(OptionNA::as_option)
                .filter(|x| x.is_finite() && *x >= 0.0)
                .map(|x| x as usize),
            _ => None,
        }
    }

    /// Interpret a length-one vector as a string
    pub fn as_string(&self) -> Option<String> {
        match self {
            Obj::Vector(v) if v.len() == 1 => {
                v.as_characters().pop().and_then(OptionNA::as_option)
            }
            _ => None,
        }
    }

    /// Remove names and dimensions
    pub fn unname(&self) -> Obj {
        match self {
            Obj::Vector(v) => Obj::Vector(v.bare()),
            Obj::List(l) => Obj::List(l.bare()),
            Obj::DataFrame(df) => {
                let mut df = df.clone();
                df.reset_row_names();
                Obj::DataFrame(df)
            }
            other => other.clone(),
        }
    }
}

impl From<Vector> for Obj {
    fn from(value: Vector) -> Self {
        Obj::Vector(value)
    }
}

impl From<List> for Obj {
    fn from(value: List) -> Self {
        Obj::List(value)
    }
}

impl From<DataFrame> for Obj {
    fn from(value: DataFrame) -> Self {
        Obj::DataFrame(value)
    }
}

impl<T> From<Vec<T>> for Obj
where
    Vector: From<Vec<T>>,
{
    fn from(value: Vec<T>) -> Self {
        Obj::Vector(Vector::from(value))
    }
}

impl From<f64> for Obj {
    fn from(value: f64) -> Self {
        Obj::Vector(value.into())
    }
}

impl From<i32> for Obj {
    fn from(value: i32) -> Self {
        Obj::Vector(value.into())
    }
}

impl From<bool> for Obj {
    fn from(value: bool) -> Self {
        Obj::Vector(value.into())
    }
}

impl From<&str> for Obj {
    fn from(value: &str) -> Self {
        Obj::Vector(value.into())
    }
}

impl From<String> for Obj {
    fn from(value: String) -> Self {
        Obj::Vector(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorter_names_are_padded_with_na() {
        let mut x = Obj::from(vec![1, 2, 3]);
        x.set_names(Some(vec![Character::Some("a".into())])).unwrap();
        assert_eq!(
            x.names(),
            Some(vec![Character::Some("a".into()), Character::NA, Character::NA])
        );
    }

    #[test]
    fn setting_dims_checks_length() {
        let mut x = Obj::from(vec![1, 2, 3]);
        assert!(x.set_dims(Some(Dims::new(vec![2, 2]))).is_err());
        assert!(x.set_dims(Some(Dims::new(vec![3, 1]))).is_ok());
    }

    #[test]
    fn recycling_repeats_elements() {
        let x = Obj::from(vec![1, 2]);
        assert_eq!(x.recycle(5), Obj::from(vec![1, 2, 1, 2, 1]));
    }
}
