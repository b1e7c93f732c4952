//! R's subsetting semantics for vectors, lists, matrices, arrays and data
//! frames, together with a small evaluator for R snippets.
//!
//! ```
//! let x = rsubset::repl::eval("x <- c(a = 1, b = 2, c = 3); x[-2]").unwrap();
//! assert_eq!(x.len(), 2);
//! ```

#[macro_use]
extern crate pest_derive;

pub mod callable;
pub mod cli;
pub mod error;
pub mod lang;
pub mod object;
pub mod parser;
pub mod repl;
pub mod session;
pub mod subset;

#[doc(hidden)]
pub fn r_eval(input: &str) -> object::Obj {
    match repl::eval(input) {
        Ok(value) => value,
        Err(e) => panic!("evaluating `{input}` failed with {e}"),
    }
}

/// Evaluate R code, panicking on error
///
/// Accepts either a string (`r!("x[1]")`, `r! {{"x[1]"}}`) or bare tokens
/// (`r! { c(1, 2)[2] }`). Tokens are stringified, so code that does not
/// survive `stringify!` (such as `1L` or `<-`) must be given as a string.
///
#[macro_export]
macro_rules! r {
    ({ $e:expr }) => {
        $crate::r_eval($e)
    };
    ($e:literal) => {
        $crate::r_eval($e)
    };
    ($($t:tt)+) => {
        $crate::r_eval(stringify!($($t)+))
    };
}

/// Assert that R code evaluates to all `TRUE`
#[macro_export]
macro_rules! r_expect {
    ($($t:tt)+) => {{
        let value = $crate::r!($($t)+);
        assert!(value.all_true(), "expected all TRUE, found {value:?}");
    }};
}
