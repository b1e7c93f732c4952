use rsubset_derive::*;

use crate::callable::core::*;
use crate::error::Error;
use crate::formals;
use crate::lang::*;
use crate::object::types::*;
use crate::object::*;
use crate::subset::{Selection, Slot};

/// Counts given as a numeric vector of non-negative whole numbers
fn counts(x: &Obj, arg: &str) -> Result<Vec<usize>, Error> {
    let invalid = || Error::ArgumentInvalid(arg.to_string());
    match x {
        Obj::Vector(v) if v.mode() != Mode::Character => v
            .as_doubles()
            .into_iter()
            .map(|n| match n {
                OptionNA::Some(n) if n >= 0.0 && n.is_finite() => Ok(n as usize),
                _ => Err(invalid()),
            })
            .collect(),
        _ => Err(invalid()),
    }
}

/// Replicate Elements
///
/// Each element is first repeated `each` times. The result is then
/// repeated `times` times, or, when `times` has one count per element,
/// each element is repeated by its own count. `length.out` truncates or
/// recycles the final result.
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// rep(x, times = 1, each = 1, length.out = NA)
/// ```
///
/// ## Examples
///
/// ```custom,{class=r-repl}
/// rep(c(1, 2), times = 3)
/// ```
///
/// ```custom,{class=r-repl}
/// rep(c("a", "b"), each = 2, times = 2)
/// ```
///
/// Lookup tables can be expanded with character subsetting:
///
/// ```custom,{class=r-repl}
/// grades <- c(1, 2, 2, 3, 1)
/// info <- c(A = "Excellent", B = "Good", C = "Poor")
/// info[rep(c("A", "B", "C"), c(1, 2, 1))]
/// ```
///
#[doc(alias = "rep")]
#[builtin(sym = "rep")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveRep;
formals!(PrimitiveRep, ["x", "times", "each", "length.out"]);

impl Callable for PrimitiveRep {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        let x = args.require("x")?;
        if matches!(x, Obj::DataFrame(_) | Obj::Function(_)) {
            return Error::ArgumentInvalid("x".to_string()).into();
        }

        let each = args.count("each")?.unwrap_or(1);
        let base: Vec<usize> = (0..x.len())
            .flat_map(|i| std::iter::repeat(i).take(each))
            .collect();

        let times = match args.take("times") {
            None => vec![1],
            Some(times) => counts(&times, "times")?,
        };

        let mut positions: Vec<usize> = match times.as_slice() {
            [n] => (0..*n).flat_map(|_| base.iter().copied()).collect(),
            per_element if per_element.len() == base.len() => base
                .iter()
                .zip(per_element)
                .flat_map(|(&i, &n)| std::iter::repeat(i).take(n))
                .collect(),
            _ => return Error::ArgumentInvalid("times".to_string()).into(),
        };

        if let Some(len) = args.count("length.out")? {
            if !positions.is_empty() {
                positions = (0..len).map(|k| positions[k % positions.len()]).collect();
            }
        }

        let selection: Selection = positions.into_iter().map(Slot::Hit).collect();
        Ok(x.select(&selection))
    }
}

#[cfg(test)]
mod tests {
    use crate::object::*;
    use crate::{r, r_expect};

    #[test]
    fn repeats_whole_vector() {
        assert_eq!(r!("rep(1:2, times = 3)"), Obj::from(vec![1, 2, 1, 2, 1, 2]));
    }

    #[test]
    fn repeats_each_element() {
        assert_eq!(r!("rep(1:2, each = 2)"), Obj::from(vec![1, 1, 2, 2]));
        assert_eq!(
            r!(r#"rep(c("a", "b"), each = 2, times = 2)"#),
            Obj::from(vec!["a", "a", "b", "b", "a", "a", "b", "b"])
        );
    }

    #[test]
    fn per_element_counts() {
        assert_eq!(r!("rep(1:3, c(1, 2, 1))"), Obj::from(vec![1, 2, 2, 3]));
    }

    #[test]
    fn length_out_recycles() {
        assert_eq!(r!("rep(1:3, length.out = 5)"), Obj::from(vec![1, 2, 3, 1, 2]));
    }

    #[test]
    fn lists_are_repeated() {
        r_expect!(length(rep(list(1, "a"), 2)) == 4)
    }

    #[test]
    fn invalid_counts() {
        assert!(crate::repl::eval("rep(1:3, c(1, 2))").is_err());
    }
}
