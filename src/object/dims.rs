use super::types::Character;
use crate::error::Error;

/// The `dim` and `dimnames` attributes of a matrix or array
///
/// Values are stored in column-major order: the first axis varies fastest.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dims {
    pub extents: Vec<usize>,
    pub dimnames: Option<Vec<Option<Vec<Character>>>>,
}

impl Dims {
    pub fn new(extents: Vec<usize>) -> Self {
        Dims {
            extents,
            dimnames: None,
        }
    }

    pub fn with_dimnames(mut self, dimnames: Option<Vec<Option<Vec<Character>>>>) -> Self {
        self.dimnames = dimnames.filter(|d| d.iter().any(Option::is_some));
        self
    }

    pub fn ndim(&self) -> usize {
        self.extents.len()
    }

    /// Number of elements addressed by these dimensions
    pub fn len(&self) -> usize {
        self.extents.iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn axis_names(&self, axis: usize) -> Option<&[Character]> {
        self.dimnames
            .as_ref()
            .and_then(|d| d.get(axis))
            .and_then(|names| names.as_deref())
    }

    /// Distance in storage between neighbors along each axis
    pub fn strides(&self) -> Vec<usize> {
        let mut stride = 1;
        self.extents
            .iter()
            .map(|extent| {
                let this = stride;
                stride *= extent;
                this
            })
            .collect()
    }

    /// Storage offset of a zero-based coordinate
    pub fn offset(&self, coords: &[usize]) -> usize {
        coords
            .iter()
            .zip(self.strides())
            .map(|(coord, stride)| coord * stride)
            .sum()
    }

    /// Check that the dimensions fit a container of `len` elements
    pub fn validate(&self, len: usize) -> Result<(), Error> {
        if self.len() != len {
            return Err(Error::Other(format!(
                "dims [product {}] do not match the length of object [{}]",
                self.len(),
                len
            )));
        }

        if let Some(dimnames) = &self.dimnames {
            if dimnames.len() != self.ndim() {
                return Err(Error::Other(
                    "length of 'dimnames' must match that of 'dims'".to_string(),
                ));
            }

            for (names, extent) in dimnames.iter().zip(self.extents.iter()) {
                if let Some(names) = names {
                    if names.len() != *extent {
                        return Err(Error::Other(format!(
                            "length of 'dimnames' [{}] not equal to array extent",
                            names.len()
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_is_column_major() {
        let dims = Dims::new(vec![2, 3, 4]);
        assert_eq!(dims.strides(), vec![1, 2, 6]);
        assert_eq!(dims.offset(&[1, 2, 3]), 1 + 4 + 18);
        assert_eq!(dims.len(), 24);
    }

    #[test]
    fn dimnames_must_match_extents() {
        let names = vec![Character::Some("a".into())];
        let dims = Dims::new(vec![2, 1]).with_dimnames(Some(vec![Some(names), None]));
        assert!(dims.validate(2).is_err());
    }
}
