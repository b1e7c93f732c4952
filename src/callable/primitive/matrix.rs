use rsubset_derive::*;

use crate::callable::core::*;
use crate::error::Error;
use crate::formals;
use crate::lang::*;
use crate::object::types::*;
use crate::object::*;
use crate::subset::{Selection, Slot};

/// Dimnames given as a list of `NULL` or character vectors
pub fn dimnames_from(x: Option<Obj>) -> Result<Option<Vec<Option<Vec<Character>>>>, Error> {
    let Some(x) = x else { return Ok(None) };

    match x {
        Obj::Null => Ok(None),
        Obj::List(l) => l
            .iter()
            .map(|names| match names {
                Obj::Null => Ok(None),
                Obj::Vector(v) => Ok(Some(v.as_characters())),
                _ => Err(Error::Other("invalid 'dimnames' given".to_string())),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        _ => Err(Error::Other("'dimnames' must be a list".to_string())),
    }
}

/// Construct a Matrix
///
/// Fill a matrix of `nrow` rows and `ncol` columns with `data`, recycling
/// it as needed. Values fill columns first unless `byrow` is `TRUE`.
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// matrix(data = NA, nrow, ncol, byrow = FALSE, dimnames = NULL)
/// ```
///
/// ## Arguments
///
/// `data`: A vector or list of values.
/// `nrow`, `ncol`: The shape. When only one is given the other is derived
///   from the length of `data`.
/// `byrow`: Whether to fill the matrix by rows.
/// `dimnames`: A list of row and column names.
///
/// ## Examples
///
/// ```custom,{class=r-repl}
/// matrix(1:6, nrow = 2)
/// ```
///
/// ```custom,{class=r-repl}
/// matrix(1:6, nrow = 2, byrow = TRUE)
/// ```
///
#[doc(alias = "matrix")]
#[builtin(sym = "matrix")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveMatrix;
formals!(PrimitiveMatrix, ["data", "nrow", "ncol", "byrow", "dimnames"]);

impl Callable for PrimitiveMatrix {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        let data = args
            .take("data")
            .unwrap_or_else(|| Obj::from(vec![Logical::NA]))
            .unname();

        let len = data.len();
        let ceil = |n: usize| if n == 0 { 0 } else { len.div_ceil(n) };

        let (nrow, ncol) = match (args.count("nrow")?, args.count("ncol")?) {
            (None, None) => (len, 1),
            (Some(nrow), None) => (nrow, ceil(nrow)),
            (None, Some(ncol)) => (ceil(ncol), ncol),
            (Some(nrow), Some(ncol)) => (nrow, ncol),
        };

        let n = nrow * ncol;
        if len > 0 && (n % len != 0 && len % n.max(1) != 0) {
            log::warn!(
                "data length [{len}] is not a sub-multiple or multiple of the number of rows [{nrow}]"
            );
        }

        let cells = if args.flag("byrow", false)? && len > 0 {
            (0..n)
                .map(|k| Slot::Hit(((k % nrow) * ncol + k / nrow) % len))
                .collect::<Selection>()
        } else {
            Selection::recycled(len, n)
        };

        let dimnames = dimnames_from(args.take("dimnames"))?;
        let mut m = data.select(&cells);
        m.set_dims(Some(Dims::new(vec![nrow, ncol]).with_dimnames(dimnames)))?;
        Ok(m)
    }
}

/// Construct an Array
///
/// Fill an array with extents `dim`, recycling `data` in column-major
/// order.
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// array(data = NA, dim = length(data), dimnames = NULL)
/// ```
///
/// ## Examples
///
/// ```custom,{class=r-repl}
/// array(1:24, c(2, 3, 4))
/// ```
///
#[doc(alias = "array")]
#[builtin(sym = "array")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveArray;
formals!(PrimitiveArray, ["data", "dim", "dimnames"]);

impl Callable for PrimitiveArray {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        let data = args
            .take("data")
            .unwrap_or_else(|| Obj::from(vec![Logical::NA]))
            .unname();

        let extents = match args.take("dim") {
            None => vec![data.len()],
            Some(dim) => extents_from(&dim)?,
        };

        let dims = Dims::new(extents).with_dimnames(dimnames_from(args.take("dimnames"))?);
        let mut a = data.select(&Selection::recycled(data.len(), dims.len()));
        a.set_dims(Some(dims))?;
        Ok(a)
    }
}

/// Non-negative extents from a numeric vector
pub fn extents_from(x: &Obj) -> Result<Vec<usize>, Error> {
    let invalid = || Error::Other("the dims contain missing or negative values".to_string());

    match x {
        Obj::Vector(v) if v.mode() != Mode::Character && !v.is_empty() => v
            .as_doubles()
            .into_iter()
            .map(|x| match x {
                OptionNA::Some(x) if x >= 0.0 => Ok(x as usize),
                _ => Err(invalid()),
            })
            .collect(),
        _ => Err(Error::Other("'dims' cannot be of length 0".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use crate::object::*;
    use crate::r;

    #[test]
    fn fills_columns_first() {
        let m = r!("matrix(1:6, nrow = 2)");
        assert_eq!(m.dims().map(|d| d.extents), Some(vec![2, 3]));
        assert_eq!(r!("matrix(1:6, nrow = 2)[1, ]"), Obj::from(vec![1, 3, 5]));
    }

    #[test]
    fn fills_rows_when_asked() {
        assert_eq!(
            r!("matrix(1:6, nrow = 2, byrow = TRUE)[1, ]"),
            Obj::from(vec![1, 2, 3])
        );
    }

    #[test]
    fn derives_missing_extents() {
        let m = r!("matrix(1:6, ncol = 2)");
        assert_eq!(m.dims().map(|d| d.extents), Some(vec![3, 2]));

        let m = r!("matrix(0, 2, 2)");
        assert_eq!(m.len(), 4);
    }

    #[test]
    fn arrays_take_extents() {
        let a = r!("array(1:24, c(2, 3, 4))");
        assert_eq!(a.dims().map(|d| d.extents), Some(vec![2, 3, 4]));
        assert_eq!(r!("array(1:24, c(2, 3, 4))[2, 3, 4]"), Obj::from(vec![24]));
    }

    #[test]
    fn dimnames_label_axes() {
        let m = r!(r#"matrix(1:4, 2, dimnames = list(c("a", "b"), c("x", "y")))"#);
        let dims = m.dims().unwrap();
        assert!(dims.axis_names(0).is_some());
        assert!(dims.axis_names(1).is_some());
    }
}
