use std::cmp::Ordering;

use rsubset_derive::*;

use crate::callable::core::*;
use crate::error::Error;
use crate::formals;
use crate::lang::*;
use crate::object::types::*;
use crate::object::*;

/// Sort keys of one argument to `order()`
enum Key {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

impl Key {
    fn from_obj(x: &Obj) -> Result<Key, Error> {
        let v = x.as_vector()?;
        Ok(match v.mode() {
            Mode::Character => Key::Text(v.as_characters().into_iter().map(OptionNA::as_option).collect()),
            _ => Key::Numeric(
                v.as_doubles()
                    .into_iter()
                    .map(|x| x.as_option().filter(|x| !x.is_nan()))
                    .collect(),
            ),
        })
    }

    fn len(&self) -> usize {
        match self {
            Key::Numeric(x) => x.len(),
            Key::Text(x) => x.len(),
        }
    }

    /// Compare two positions, with missing values last in either direction
    fn compare(&self, i: usize, j: usize, decreasing: bool) -> Ordering {
        fn nas_last<T>(l: &Option<T>, r: &Option<T>, decreasing: bool, cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
            match (l, r) {
                (Some(l), Some(r)) if decreasing => cmp(l, r).reverse(),
                (Some(l), Some(r)) => cmp(l, r),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }

        match self {
            Key::Numeric(x) => nas_last(&x[i], &x[j], decreasing, |l, r| l.total_cmp(r)),
            Key::Text(x) => nas_last(&x[i], &x[j], decreasing, Ord::cmp),
        }
    }
}

/// Ordering Permutation
///
/// The positions that would sort the first argument, with ties broken by
/// subsequent arguments. The sort is stable and missing values are placed
/// last.
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// order(..., decreasing = FALSE)
/// ```
///
/// ## Examples
///
/// ```custom,{class=r-repl}
/// x <- c(b = 3, c = 2, a = 1)
/// x[order(x)]
/// ```
///
/// ```custom,{class=r-repl}
/// df <- data.frame(x = c(2, 3, 1), y = c("b", "c", "a"))
/// df[order(df$x), ]
/// ```
///
#[doc(alias = "order")]
#[builtin(sym = "order")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveOrder;
formals!(PrimitiveOrder, ["...", "decreasing"]);

impl Callable for PrimitiveOrder {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        let decreasing = args.flag("decreasing", false)?;
        let keys = args
            .ellipsis
            .iter()
            .map(|(_, x)| Key::from_obj(x))
            .collect::<Result<Vec<_>, _>>()?;

        let Some(n) = keys.first().map(Key::len) else {
            return Ok(Obj::from(Vec::<Integer>::new()));
        };

        if keys.iter().any(|key| key.len() != n) {
            return Error::Other("argument lengths differ".to_string()).into();
        }

        let mut permutation: Vec<usize> = (0..n).collect();
        permutation.sort_by(|&i, &j| {
            keys.iter()
                .map(|key| key.compare(i, j, decreasing))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        });

        Ok(Obj::from(
            permutation
                .into_iter()
                .map(|i| i as i32 + 1)
                .collect::<Vec<_>>(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::object::*;
    use crate::{r, r_expect};

    #[test]
    fn increasing() {
        assert_eq!(r!("order(c(3, 1, 2))"), Obj::from(vec![2, 3, 1]));
    }

    #[test]
    fn decreasing() {
        assert_eq!(
            r!("order(c(3, 1, 2), decreasing = TRUE)"),
            Obj::from(vec![1, 3, 2])
        );
    }

    #[test]
    fn missing_values_sort_last() {
        assert_eq!(r!("order(c(NA, 2, 1))"), Obj::from(vec![3, 2, 1]));
        assert_eq!(
            r!("order(c(NA, 2, 1), decreasing = TRUE)"),
            Obj::from(vec![2, 3, 1])
        );
    }

    #[test]
    fn ties_are_stable_and_broken_by_later_keys() {
        assert_eq!(r!("order(c(1, 1, 0))"), Obj::from(vec![3, 1, 2]));
        assert_eq!(
            r!(r#"order(c(1, 1, 0), c("b", "a", "c"))"#),
            Obj::from(vec![3, 2, 1])
        );
    }

    #[test]
    fn sorts_data_frame_rows() {
        r_expect! {{r#"
            df <- data.frame(x = c(2, 3, 1), y = c("b", "c", "a"))
            identical(df[order(df$x), "y"], c("a", "b", "c"))
        "#}}
    }
}
