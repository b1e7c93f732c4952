use rsubset_derive::*;

use crate::callable::core::*;
use crate::formals;
use crate::lang::*;
use crate::object::types::*;
use crate::object::*;
use crate::subset::assign::vector_elements;
use crate::subset::dims::concat;

/// Concatenate Values
///
/// Construct a vector of values. Heterogeneous values are coerced into
/// their most general mode, and any list argument makes the result a
/// list.
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// c(...)
/// ```
///
/// ## Arguments
///
/// `...`: Arguments to collect into a `vector`. Argument names become
///   element names, prefixed to the names of longer arguments.
///
/// ## Examples
///
/// ```custom,{class=r-repl}
/// c(a = 1, b = 2, 3)
/// ```
///
/// ```custom,{class=r-repl}
/// c(FALSE, 1L, "two")
/// ```
///
#[doc(alias = "c")]
#[builtin(sym = "c")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveC;
formals!(PrimitiveC);

impl Callable for PrimitiveC {
    fn call_matched(&self, args: Args, _stack: &mut CallStack) -> EvalResult {
        Ok(combine(args.ellipsis))
    }
}

/// Element names contributed by one argument of `c()`
fn element_names(arg: Option<&str>, x: &Obj) -> Vec<String> {
    let names = x.names();
    let name_at = |i: usize| match names.as_ref().and_then(|n| n.get(i)) {
        Some(OptionNA::Some(name)) => name.clone(),
        _ => String::new(),
    };

    let n = x.len();
    (0..n)
        .map(|i| match (arg, name_at(i)) {
            (Some(arg), inner) if !inner.is_empty() => format!("{arg}.{inner}"),
            (Some(arg), _) if n == 1 => arg.to_string(),
            (Some(arg), _) => format!("{arg}{}", i + 1),
            (None, inner) => inner,
        })
        .collect()
}

/// Combine values as `c()` does
pub fn combine(args: Vec<(Option<String>, Obj)>) -> Obj {
    let args: Vec<_> = args.into_iter().filter(|(_, x)| !x.is_null()).collect();
    if args.is_empty() {
        return Obj::Null;
    }

    let names: Vec<String> = args
        .iter()
        .flat_map(|(arg, x)| element_names(arg.as_deref(), x))
        .collect();

    let named = names.iter().any(|n| !n.is_empty());
    let names = named.then(|| names.into_iter().map(Character::Some).collect());

    let atomic = args.iter().all(|(_, x)| matches!(x, Obj::Vector(_)));
    if atomic {
        let mut v = args
            .iter()
            .filter_map(|(_, x)| match x {
                Obj::Vector(v) => Some(v),
                _ => None,
            })
            .fold(Vector::empty(Mode::Logical), |acc, v| concat(&acc, v));

        v.set_names(names);
        return Obj::Vector(v);
    }

    let mut elements = vec![];
    for (_, x) in args {
        match x {
            Obj::Vector(v) => elements.extend(vector_elements(&v).into_values()),
            Obj::List(l) => elements.extend(l.iter().cloned()),
            Obj::DataFrame(df) => elements.extend(df.columns().iter().cloned()),
            other => elements.push(other),
        }
    }

    Obj::List(List::from(elements).with_names(names))
}

#[cfg(test)]
mod tests {
    use crate::object::types::*;
    use crate::object::*;
    use crate::r;

    #[test]
    fn coerces_to_the_most_general_mode() {
        assert_eq!(r!("c(TRUE, 2L)"), Obj::from(vec![1, 2]));
        assert_eq!(r!("c(1L, 2.5)"), Obj::from(vec![1.0, 2.5]));
        assert_eq!(r!(r#"c(1, "a")"#), Obj::from(vec!["1", "a"]));
    }

    #[test]
    fn nulls_are_dropped() {
        assert_eq!(r!("c()"), Obj::Null);
        assert_eq!(r!("c(NULL, 1, NULL)"), Obj::from(vec![1.0]));
    }

    #[test]
    fn argument_names_become_element_names() {
        let x = r!("c(a = 1, 2, b = c(x = 3, 4))");
        let names = x.names().unwrap();
        assert_eq!(
            names,
            vec!["a", "", "b.x", "b2"]
                .into_iter()
                .map(|s| Character::Some(s.to_string()))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn lists_make_lists() {
        let x = r!("c(list(1), 2:3)");
        assert_eq!(x.len(), 3);
        assert!(matches!(x, Obj::List(_)));
    }
}
