use hashbrown::HashMap;

use super::types::Character;
use super::{Dims, List, Obj, OptionNA};
use crate::error::Error;
use crate::subset::{Selection, Slot};

/// Row names of a data frame
///
/// Automatic row names are the sequence `1..n` and are only materialized
/// as labels when printed or selected.
#[derive(Debug, Clone, PartialEq)]
pub enum RowNames {
    Automatic(usize),
    Named(Vec<String>),
}

impl RowNames {
    pub fn len(&self) -> usize {
        match self {
            RowNames::Automatic(n) => *n,
            RowNames::Named(names) => names.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn labels(&self) -> Vec<String> {
        match self {
            RowNames::Automatic(n) => (1..=*n).map(|i| i.to_string()).collect(),
            RowNames::Named(names) => names.clone(),
        }
    }

    /// Row names of selected rows, made unique
    ///
    /// Missing rows are labelled `NA`; repeated labels receive a numeric
    /// suffix (`1`, `1.1`, `1.2`, ...).
    ///
    pub fn select(&self, selection: &Selection) -> RowNames {
        if let RowNames::Automatic(n) = self {
            let identity = selection.len() == *n
                && selection
                    .iter()
                    .enumerate()
                    .all(|(i, slot)| *slot == Slot::Hit(i));

            if identity {
                return self.clone();
            }
        }

        let labels = self.labels();
        let selected = selection.iter().map(|slot| match slot {
            Slot::Hit(i) => labels[*i].clone(),
            Slot::OutOfBounds | Slot::Missing => "NA".to_string(),
        });

        RowNames::Named(make_unique(selected))
    }
}

pub(crate) fn make_unique<I: IntoIterator<Item = String>>(labels: I) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    labels
        .into_iter()
        .map(|label| {
            let count = seen.entry(label.clone()).or_insert(0);
            let unique = if *count == 0 {
                label
            } else {
                format!("{label}.{count}")
            };
            *count += 1;
            unique
        })
        .collect()
}

/// A list of equal-length named columns with row names
#[derive(Debug, Clone, PartialEq)]
pub struct DataFrame {
    columns: List,
    row_names: RowNames,
}

impl DataFrame {
    /// Build a data frame, recycling columns to a common row count
    pub fn new(columns: Vec<(String, Obj)>) -> Result<DataFrame, Error> {
        let nrow = columns.iter().map(|(_, c)| c.len()).max().unwrap_or(0);

        let mut names = Vec::with_capacity(columns.len());
        let mut values = Vec::with_capacity(columns.len());

        for (name, column) in columns {
            let column = match column {
                Obj::Vector(mut v) => {
                    v.set_dims(None);
                    v.set_names(None);
                    Obj::Vector(v)
                }
                Obj::List(l) => Obj::List(l.bare()),
                Obj::Null => continue,
                other => {
                    return Err(Error::Other(format!(
                        "cannot coerce class '{}' to a data.frame",
                        other.type_name()
                    )))
                }
            };

            let len = column.len();
            if len != nrow && (len == 0 || nrow % len != 0) {
                return Err(Error::Other(format!(
                    "arguments imply differing number of rows: {nrow}, {len}"
                )));
            }

            names.push(Character::Some(name));
            values.push(column.recycle(nrow));
        }

        Ok(DataFrame {
            columns: List::from(values).with_names(Some(names)),
            row_names: RowNames::Automatic(nrow),
        })
    }

    /// Assemble a data frame from parts that are already consistent
    pub fn from_parts(columns: List, row_names: RowNames) -> DataFrame {
        let columns = if columns.names().is_none() {
            let names = (1..=columns.len())
                .map(|i| Character::Some(format!("V{i}")))
                .collect();
            columns.with_names(Some(names))
        } else {
            columns
        };

        DataFrame { columns, row_names }
    }

    pub fn nrow(&self) -> usize {
        self.row_names.len()
    }

    pub fn ncol(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &List {
        &self.columns
    }

    pub fn column(&self, j: usize) -> Option<&Obj> {
        self.columns.get(j)
    }

    pub fn column_names(&self) -> Vec<Character> {
        self.columns
            .names()
            .map(<[Character]>::to_vec)
            .unwrap_or_default()
    }

    pub fn set_column_names(&mut self, names: Vec<Character>) -> Result<(), Error> {
        if names.len() != self.ncol() {
            return Err(Error::Other(format!(
                "'names' attribute [{}] must be the same length as the data frame [{}]",
                names.len(),
                self.ncol()
            )));
        }

        self.columns.set_names(Some(names));
        Ok(())
    }

    pub fn row_names(&self) -> &RowNames {
        &self.row_names
    }

    pub fn set_row_names(&mut self, names: Vec<String>) -> Result<(), Error> {
        if names.len() != self.nrow() {
            return Err(Error::Other("invalid 'row.names' length".to_string()));
        }

        let unique = make_unique(names.clone());
        if unique != names {
            return Err(Error::Other("duplicate 'row.names' are not allowed".to_string()));
        }

        self.row_names = RowNames::Named(names);
        Ok(())
    }

    pub fn reset_row_names(&mut self) {
        self.row_names = RowNames::Automatic(self.nrow());
    }

    pub fn row_labels(&self) -> Vec<Character> {
        self.row_names
            .labels()
            .into_iter()
            .map(OptionNA::Some)
            .collect()
    }

    /// Dimensions as a two-axis matrix of rows and columns
    pub fn dims(&self) -> Dims {
        Dims::new(vec![self.nrow(), self.ncol()])
            .with_dimnames(Some(vec![Some(self.row_labels()), Some(self.column_names())]))
    }

    /// Replace columns (with their names) and row names at once
    pub(crate) fn with_columns_mut<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut List, &mut RowNames) -> R,
    {
        f(&mut self.columns, &mut self.row_names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_recycled_to_the_row_count() {
        let df = DataFrame::new(vec![
            ("x".to_string(), Obj::from(vec![1, 2, 3, 4])),
            ("y".to_string(), Obj::from(vec!["a", "b"])),
        ])
        .unwrap();

        assert_eq!(df.nrow(), 4);
        assert_eq!(df.column(1), Some(&Obj::from(vec!["a", "b", "a", "b"])));
    }

    #[test]
    fn columns_must_divide_the_row_count() {
        let df = DataFrame::new(vec![
            ("x".to_string(), Obj::from(vec![1, 2, 3])),
            ("y".to_string(), Obj::from(vec![1, 2])),
        ]);

        assert!(df.is_err());
    }

    #[test]
    fn selected_row_names_are_unique() {
        let rows = RowNames::Automatic(3);
        let selection: Selection = vec![Slot::Hit(0), Slot::Hit(0), Slot::OutOfBounds].into();
        assert_eq!(
            rows.select(&selection),
            RowNames::Named(vec!["1".into(), "1.1".into(), "NA".into()])
        );
    }

    #[test]
    fn selecting_every_row_in_order_keeps_automatic_names() {
        let rows = RowNames::Automatic(2);
        let selection: Selection = vec![Slot::Hit(0), Slot::Hit(1)].into();
        assert_eq!(rows.select(&selection), RowNames::Automatic(2));
    }
}
