use rand::Rng;
use rsubset_derive::*;

use crate::callable::core::*;
use crate::error::Error;
use crate::formals;
use crate::lang::*;
use crate::object::types::*;
use crate::object::*;
use crate::subset::{Selection, Slot};

/// Random Samples and Permutations
///
/// Draws `size` elements of `x`, with or without replacement. A single
/// number `n` (at least one) samples from `1:n`. Without `size`, the result
/// is a permutation.
///
/// Samples are drawn from the session's random number generator, which
/// can be seeded with `set.seed()`. The generator is not R's, so seeded
/// draws are reproducible but differ from R's.
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// sample(x, size, replace = FALSE)
/// ```
///
/// ## Examples
///
/// ```custom,{class=r-repl}
/// set.seed(1)
/// x <- c(10, 20, 30)
/// x[sample(3)]
/// ```
///
#[doc(alias = "sample")]
#[builtin(sym = "sample")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveSample;
formals!(PrimitiveSample, ["x", "size", "replace"]);

impl Callable for PrimitiveSample {
    fn call_matched(&self, mut args: Args, stack: &mut CallStack) -> EvalResult {
        let x = args.require("x")?;
        let population = match &x {
            Obj::Vector(v) if v.len() == 1 && v.mode() != Mode::Character => {
                match v.as_doubles().pop() {
                    Some(OptionNA::Some(n)) if n >= 1.0 => {
                        Obj::from((1..=n.floor() as i32).collect::<Vec<_>>())
                    }
                    _ => x.clone(),
                }
            }
            Obj::Vector(_) | Obj::List(_) => x.clone(),
            _ => return Error::ArgumentInvalid("x".to_string()).into(),
        };

        let n = population.len();
        let size = args.count("size")?.unwrap_or(n);
        let replace = args.flag("replace", false)?;

        let positions: Vec<usize> = if replace {
            if n == 0 && size > 0 {
                return Error::Other("invalid first argument".to_string()).into();
            }
            (0..size).map(|_| stack.rng().gen_range(0..n)).collect()
        } else {
            if size > n {
                return Error::Other(
                    "cannot take a sample larger than the population when 'replace = FALSE'"
                        .to_string(),
                )
                .into();
            }
            rand::seq::index::sample(stack.rng(), n, size).into_vec()
        };

        let selection: Selection = positions.into_iter().map(Slot::Hit).collect();
        Ok(population.select(&selection))
    }
}

/// Seed the Random Number Generator
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// set.seed(seed)
/// ```
///
#[doc(alias = "set.seed")]
#[builtin(sym = "set.seed")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveSetSeed;
formals!(PrimitiveSetSeed, ["seed"]);

impl Callable for PrimitiveSetSeed {
    fn call_matched(&self, mut args: Args, stack: &mut CallStack) -> EvalResult {
        let seed = args.require("seed")?;
        let seed = match &seed {
            Obj::Vector(v) if v.len() == 1 && v.mode() != Mode::Character => v.as_doubles().pop(),
            _ => None,
        };

        match seed {
            Some(OptionNA::Some(seed)) if seed.is_finite() => {
                stack.set_seed(seed.trunc() as i64 as u64);
                Ok(Obj::Null)
            }
            _ => Error::Other("supplied seed is not a valid integer".to_string()).into(),
        }
    }

    fn visibility(&self) -> Option<bool> {
        Some(false)
    }
}

#[cfg(test)]
mod tests {
    use crate::object::*;
    use crate::{r, r_expect};

    #[test]
    fn permutations_keep_all_elements() {
        r_expect! {{"
            x <- sample(10)
            length(x) == 10 && all(1:10 %in% x)
        "}}
    }

    #[test]
    fn sizes_are_respected() {
        assert_eq!(r!("length(sample(c(1, 2, 3), 2))"), Obj::from(2));
        assert_eq!(r!("length(sample(2, 5, replace = TRUE))"), Obj::from(5));
    }

    #[test]
    fn sampling_without_replacement_is_bounded() {
        assert!(crate::repl::eval("sample(3, 4)").is_err());
    }

    #[test]
    fn seeds_make_draws_reproducible() {
        r_expect! {{"
            set.seed(42)
            a <- sample(100, 5)
            set.seed(42)
            b <- sample(100, 5)
            identical(a, b)
        "}}
    }

    #[test]
    fn shuffled_rows() {
        r_expect! {{"
            df <- data.frame(x = 1:5)
            set.seed(1)
            shuffled <- df[sample(nrow(df)), , drop = FALSE]
            nrow(shuffled) == 5 && all(1:5 %in% shuffled$x)
        "}}
    }
}
