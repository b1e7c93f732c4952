use rsubset_derive::*;

use crate::callable::core::*;
use crate::formals;
use crate::lang::*;
use crate::object::*;

/// Which Elements are Missing
///
/// For atomic vectors, `NA` (and `NaN`) elements are `TRUE`. Names and
/// dimensions are kept. For lists, only length-one `NA` elements count as
/// missing.
///
/// # In-Language
///
/// ## Usage
///
/// ```custom,{class=r}
/// is.na(x)
/// ```
///
/// ## Examples
///
/// ```custom,{class=r-repl}
/// is.na(c(a = 1, b = NA))
/// ```
///
#[doc(alias = "is.na")]
#[builtin(sym = "is.na")]
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveIsNA;
formals!(PrimitiveIsNA, ["x"]);

impl Callable for PrimitiveIsNA {
    fn call_matched(&self, mut args: Args, _stack: &mut CallStack) -> EvalResult {
        let x = args.require("x")?;
        let missing: Vec<bool> = match &x {
            Obj::Vector(v) => v.is_na(),
            Obj::List(l) => l
                .iter()
                .map(|el| match el {
                    Obj::Vector(v) if v.len() == 1 => v.is_na()[0],
                    _ => false,
                })
                .collect(),
            Obj::Null => vec![],
            _ => {
                log::warn!("is.na() applied to non-(list or vector) of type '{}'", x.type_name());
                vec![false]
            }
        };

        let mut result = Vector::from(missing);
        if let Some(names) = x.names() {
            result.set_names(Some(names));
        }
        if let Some(dims) = x.dims().filter(|_| !matches!(x, Obj::DataFrame(_))) {
            result.set_dims(Some(dims));
        }

        Ok(Obj::Vector(result))
    }
}

#[cfg(test)]
mod tests {
    use crate::object::types::*;
    use crate::object::*;
    use crate::{r, r_expect};

    #[test]
    fn marks_missing_values() {
        assert_eq!(
            r!("is.na(c(1, NA, 3))"),
            Obj::from(vec![false, true, false])
        );
    }

    #[test]
    fn nan_is_missing() {
        r_expect!(is.na(NaN))
    }

    #[test]
    fn keeps_names() {
        let x = r!("is.na(c(a = 1, b = NA))");
        assert_eq!(
            x.names(),
            Some(vec![Character::Some("a".into()), Character::Some("b".into())])
        );
    }

    #[test]
    fn typed_missing_values() {
        r_expect!(is.na(NA_integer_) && is.na(NA_character_))
    }
}
