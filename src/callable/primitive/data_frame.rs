use rsubset_derive::*;

use crate::callable::core::*;
use crate::formals;
use crate::lang::*;
use crate::object::*;

/// Construct a Data Frame
///
/// Columns are recycled to a common number of rows. Unnamed arguments
/// are named after the expression that produced them, and data frame or
/// list arguments contribute each of their columns.
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// data.frame(..., stringsAsFactors = FALSE)
/// ```
///
/// ## Examples
///
/// ```custom,{class=r-repl}
/// data.frame(x = 1:3, y = c("a", "b", "c"))
/// ```
///
#[doc(alias = "data.frame")]
#[builtin(sym = "data.frame")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveDataFrame;
formals!(PrimitiveDataFrame, ["...", "stringsAsFactors"]);

impl Callable for PrimitiveDataFrame {
    fn call(&self, args: ExprList, stack: &mut CallStack) -> EvalResult {
        let mut named = Vec::with_capacity(args.len());
        for (key, expr) in args {
            let label = expr.to_string();
            let value = stack.eval(expr)?;
            let key = match key {
                None if !value.is_list_like() => Some(label),
                key => key,
            };
            named.push((key, value));
        }

        let args = self.match_args(named)?;
        self.call_matched(args, stack)
    }

    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        if args.flag("stringsAsFactors", false)? {
            log::warn!("factors are not supported, strings are kept as characters");
        }

        let mut columns = vec![];
        for (name, value) in args.ellipsis {
            let name = name.unwrap_or_default();
            match value {
                Obj::DataFrame(df) => columns.extend(prefixed(&name, df.columns().pairs())),
                Obj::List(l) => columns.extend(prefixed(&name, l.pairs())),
                value => columns.push((name, value)),
            }
        }

        let names: Vec<String> = columns.iter().map(|(name, _)| name.clone()).collect();
        let unique = make_unique(names);
        let columns = unique
            .into_iter()
            .zip(columns)
            .map(|(name, (_, value))| (name, value))
            .collect();

        Ok(Obj::DataFrame(DataFrame::new(columns)?))
    }
}

/// Columns spliced in from a list-like argument, prefixed by its name
fn prefixed(prefix: &str, pairs: Vec<(Option<String>, Obj)>) -> Vec<(String, Obj)> {
    pairs
        .into_iter()
        .enumerate()
        .map(|(i, (name, value))| {
            let name = name.unwrap_or_else(|| format!("V{}", i + 1));
            match prefix {
                "" => (name, value),
                prefix => (format!("{prefix}.{name}"), value),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::object::types::*;
    use crate::object::*;
    use crate::{r, r_expect};

    #[test]
    fn columns_are_named() {
        let df = r!(r#"data.frame(x = 1:3, y = c("a", "b", "c"))"#);
        assert_eq!(df.dims().map(|d| d.extents), Some(vec![3, 2]));
        assert_eq!(
            df.names(),
            Some(vec![Character::Some("x".into()), Character::Some("y".into())])
        );
    }

    #[test]
    fn unnamed_arguments_are_named_by_expression() {
        r_expect! {{r#"
            x <- 1:2
            df <- data.frame(x, y = 3:4)
            identical(names(df), c("x", "y"))
        "#}}
    }

    #[test]
    fn duplicate_names_are_made_unique() {
        let df = r!("data.frame(a = 1, a = 2)");
        assert_eq!(
            df.names(),
            Some(vec![Character::Some("a".into()), Character::Some("a.1".into())])
        );
    }

    #[test]
    fn scalars_are_recycled() {
        let df = r!("data.frame(x = 1:4, y = 0)");
        assert_eq!(df.dims().map(|d| d.extents), Some(vec![4, 2]));
    }
}
