use rsubset_derive::*;

use crate::callable::core::*;
use crate::error::Error;
use crate::formals;
use crate::lang::*;
use crate::object::*;

/// Strings of each element of a pasted argument
fn strings(x: &Obj) -> Vec<String> {
    let na = || "NA".to_string();
    match x {
        Obj::Vector(v) => v
            .as_characters()
            .into_iter()
            .map(|s| s.as_option().unwrap_or_else(na))
            .collect(),
        Obj::List(l) => l
            .iter()
            .map(|el| el.as_string().unwrap_or_else(|| el.to_string()))
            .collect(),
        Obj::DataFrame(df) => strings(&Obj::List(df.columns().clone())),
        other => vec![other.to_string()],
    }
}

/// Paste arguments element-wise, recycling to the longest
///
/// Zero-length arguments are dropped. With `collapse`, the pasted strings
/// are joined into one.
///
pub fn paste(args: &[Obj], sep: &str, collapse: Option<&str>) -> Obj {
    let columns: Vec<Vec<String>> = args
        .iter()
        .map(strings)
        .filter(|s| !s.is_empty())
        .collect();

    let n = columns.iter().map(Vec::len).max().unwrap_or(0);
    let pasted: Vec<String> = (0..n)
        .map(|i| {
            columns
                .iter()
                .map(|col| col[i % col.len()].as_str())
                .collect::<Vec<_>>()
                .join(sep)
        })
        .collect();

    match collapse {
        Some(collapse) => Obj::from(pasted.join(collapse)),
        None => Obj::from(pasted),
    }
}

fn collapse_arg(args: &mut Args) -> Result<Option<String>, Error> {
    match args.take("collapse") {
        None | Some(Obj::Null) => Ok(None),
        Some(x) => x
            .as_string()
            .map(Some)
            .ok_or_else(|| Error::Other("invalid 'collapse' argument".to_string())),
    }
}

/// Paste Objects into Strings
///
/// Construct strings out of objects, producing a `character` vector
/// from element-wise inputs and optionally collapsing the results into a
/// single string.
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// paste(..., sep = " ", collapse = NULL)
/// ```
///
/// ## Arguments
///
/// `...`: Objects to paste into strings.
/// `sep`: A separator to insert when pasting.
/// `collapse`: An optional string used to concatenate all elements
///   of the pasted `character` vector.
///
/// ## Examples
///
/// ```custom,{class=r-repl}
/// paste(1:3, 4:6)
/// ```
///
/// ```custom,{class=r-repl}
/// paste(1:3, 4:6, sep = "-", collapse = ":")
/// ```
///
#[doc(alias = "paste")]
#[builtin(sym = "paste")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitivePaste;
formals!(PrimitivePaste, ["...", "sep", "collapse"]);

impl Callable for PrimitivePaste {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        let sep = args.string("sep")?.unwrap_or_else(|| " ".to_string());
        let collapse = collapse_arg(&mut args)?;
        let values: Vec<Obj> = args.ellipsis.into_iter().map(|(_, x)| x).collect();
        Ok(paste(&values, &sep, collapse.as_deref()))
    }
}

/// Paste Objects into Strings without a separator
#[doc(alias = "paste0")]
#[builtin(sym = "paste0")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitivePaste0;
formals!(PrimitivePaste0, ["...", "collapse"]);

impl Callable for PrimitivePaste0 {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        let collapse = collapse_arg(&mut args)?;
        let values: Vec<Obj> = args.ellipsis.into_iter().map(|(_, x)| x).collect();
        Ok(paste(&values, "", collapse.as_deref()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::object::types::Character;
    use crate::r;

    #[test]
    fn numeric_input() {
        assert_eq!(r!("paste(1, 2, collapse = NULL)"), r!(r#""1 2""#));
    }

    #[test]
    fn only_null() {
        assert_eq!(r!("paste(NULL)"), Obj::from(Vec::<Character>::new()));
    }

    #[test]
    fn ignore_null() {
        assert_eq!(
            r!(r#"paste(1.1, NULL, 2, FALSE, "a", c(1.0, 2.0))"#),
            r!(r#"c("1.1 2 FALSE a 1", "1.1 2 FALSE a 2")"#)
        )
    }

    #[test]
    fn sep_param() {
        assert_eq!(
            r!(r#"paste(1.1, 2, "a", c(1.0, 2.0), sep = "+")"#),
            r!(r#"c("1.1+2+a+1", "1.1+2+a+2")"#)
        )
    }

    #[test]
    fn param_recycling() {
        assert_eq!(
            r!(r#"paste(c(1, 2, 3, 4, 5), c("st", "nd", "rd", c("th", "th")), sep = "")"#),
            r!(r#"c("1st", "2nd", "3rd", "4th", "5th")"#)
        )
    }

    #[test]
    fn collapse_and_sep() {
        assert_eq!(
            r!(r#"paste(c(1, 2), 3, 4, 5, sep = "-", collapse = "+")"#),
            r!(r#""1-3-4-5+2-3-4-5""#)
        )
    }

    #[test]
    fn missing_values_are_pasted() {
        assert_eq!(r!(r#"paste0("x", NA)"#), Obj::from("xNA"));
    }

    #[test]
    fn collapse_empty_string() {
        assert_eq!(r!(r#"paste0("a", c("b", "c"), collapse = "")"#), Obj::from("abac"));
    }
}
