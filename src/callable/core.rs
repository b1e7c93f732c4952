use crate::error::Error;
use crate::lang::{CallStack, EvalResult};
use crate::object::{ExprList, Obj};

/// Declare the formals of a builtin
///
/// ```ignore
/// formals!(PrimitiveRep, ["x", "times", "each"]);
/// ```
///
/// Without a list of names the builtin accepts `...` only.
///
#[macro_export]
macro_rules! formals {
    ($what:ident) => {
        impl $crate::callable::core::CallableFormals for $what {}
    };
    ($what:ident, [$($formal:literal),* $(,)?]) => {
        impl $crate::callable::core::CallableFormals for $what {
            fn formals(&self) -> &'static [&'static str] {
                &[$($formal),*]
            }
        }
    };
}

/// How a builtin is written in source, used when deparsing calls
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SymKind {
    Keyword,
    Function,
    Infix,
    Prefix,
    Postfix,
    PostfixCall(&'static str, &'static str),
}

impl std::fmt::Debug for Box<dyn Builtin> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<builtin `{}`>", self.sym())
    }
}

impl Clone for Box<dyn Builtin> {
    fn clone(&self) -> Box<dyn Builtin> {
        self.callable_clone()
    }
}

impl PartialEq for Box<dyn Builtin> {
    fn eq(&self, other: &Self) -> bool {
        self.sym() == other.sym() && self.kind() == other.kind()
    }
}

pub trait CallableClone: Callable {
    fn callable_clone(&self) -> Box<dyn Builtin>;
}

pub trait Builtin: Callable + CallableClone + Send + Sync {
    fn sym(&self) -> &'static str;
    fn kind(&self) -> SymKind;
}

pub trait CallableFormals {
    /// Parameter names, where `...` collects everything left unmatched
    fn formals(&self) -> &'static [&'static str] {
        &["..."]
    }
}

/// Arguments after matching against a callable's formals
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    formals: &'static [&'static str],
    values: Vec<Option<Obj>>,
    pub ellipsis: Vec<(Option<String>, Obj)>,
}

impl Args {
    pub fn take(&mut self, name: &str) -> Option<Obj> {
        let i = self.formals.iter().position(|f| *f == name)?;
        self.values[i].take()
    }

    pub fn require(&mut self, name: &str) -> Result<Obj, Error> {
        self.take(name)
            .ok_or_else(|| Error::ArgumentMissing(name.to_string()))
    }

    pub fn flag(&mut self, name: &str, default: bool) -> Result<bool, Error> {
        match self.take(name) {
            None => Ok(default),
            Some(x) => x
                .as_flag()
                .ok_or_else(|| Error::ArgumentInvalid(name.to_string())),
        }
    }

    pub fn count(&mut self, name: &str) -> Result<Option<usize>, Error> {
        match self.take(name) {
            None | Some(Obj::Null) => Ok(None),
            Some(x) => x
                .as_count()
                .map(Some)
                .ok_or_else(|| Error::ArgumentInvalid(name.to_string())),
        }
    }

    pub fn string(&mut self, name: &str) -> Result<Option<String>, Error> {
        match self.take(name) {
            None => Ok(None),
            Some(x) => x
                .as_string()
                .map(Some)
                .ok_or_else(|| Error::ArgumentInvalid(name.to_string())),
        }
    }
}

pub trait Callable: CallableFormals {
    /// Match arguments to formals
    ///
    /// Named arguments match formals exactly. The remaining arguments fill
    /// the unmatched formals before `...` by position, and anything left
    /// over is collected by `...` in call order.
    ///
    fn match_args(&self, args: Vec<(Option<String>, Obj)>) -> Result<Args, Error> {
        let formals = self.formals();
        let dots = formals.iter().position(|f| *f == "...");
        let positional = dots.unwrap_or(formals.len());

        let mut values: Vec<Option<Obj>> = vec![None; formals.len()];
        let mut unmatched = Vec::with_capacity(args.len());

        for (name, value) in args {
            let formal = name
                .as_ref()
                .and_then(|name| formals.iter().position(|f| *f == name.as_str() && *f != "..."));

            match formal {
                Some(i) if values[i].is_some() => {
                    return Err(Error::Other(format!(
                        "formal argument \"{}\" matched by multiple actual arguments",
                        formals[i]
                    )))
                }
                Some(i) => values[i] = Some(value),
                None => unmatched.push((name, value)),
            }
        }

        let mut ellipsis = vec![];
        for (name, value) in unmatched {
            let next = (0..positional).find(|i| values[*i].is_none());
            match next {
                Some(i) if name.is_none() => values[i] = Some(value),
                _ if dots.is_some() => ellipsis.push((name, value)),
                _ => {
                    let arg = match name {
                        Some(name) => format!("{name} = {value}"),
                        None => value.to_string(),
                    };
                    return Err(Error::UnusedArgument(arg));
                }
            }
        }

        Ok(Args {
            formals,
            values,
            ellipsis,
        })
    }

    fn call(&self, args: ExprList, stack: &mut CallStack) -> EvalResult {
        let args = stack.eval_args(args)?;
        let args = self.match_args(args)?;
        self.call_matched(args, stack)
    }

    fn call_matched(&self, _args: Args, _stack: &mut CallStack) -> EvalResult {
        Err(Error::Other("builtin cannot be called with matched arguments".to_string()).into())
    }

    /// Whether the result is printed when evaluated at the top level
    ///
    /// `None` keeps the visibility left behind by evaluating the arguments.
    ///
    fn visibility(&self) -> Option<bool> {
        Some(true)
    }

    /// Produce `target` updated with `value`, as in `f(target, ...) <- value`
    fn call_assign(
        &self,
        _target: Obj,
        _args: ExprList,
        _value: Obj,
        _stack: &mut CallStack,
    ) -> EvalResult {
        Err(Error::InvalidAssignmentTarget.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture;

    impl CallableFormals for Fixture {
        fn formals(&self) -> &'static [&'static str] {
            &["x", "size", "...", "sep"]
        }
    }

    impl Callable for Fixture {}

    fn named(name: &str, x: i32) -> (Option<String>, Obj) {
        (Some(name.to_string()), Obj::from(x))
    }

    fn unnamed(x: i32) -> (Option<String>, Obj) {
        (None, Obj::from(x))
    }

    #[test]
    fn names_match_before_positions() {
        let mut args = Fixture
            .match_args(vec![unnamed(1), named("x", 2), unnamed(3)])
            .unwrap();

        assert_eq!(args.take("x"), Some(Obj::from(2)));
        assert_eq!(args.take("size"), Some(Obj::from(1)));
        assert_eq!(args.ellipsis, vec![unnamed(3)]);
    }

    #[test]
    fn formals_after_dots_match_by_name_only() {
        let mut args = Fixture
            .match_args(vec![unnamed(1), unnamed(2), unnamed(3), named("sep", 4)])
            .unwrap();

        assert_eq!(args.take("sep"), Some(Obj::from(4)));
        assert_eq!(args.ellipsis, vec![unnamed(3)]);
    }

    #[test]
    fn unmatched_names_are_kept_in_order() {
        let args = Fixture
            .match_args(vec![unnamed(1), unnamed(2), named("a", 3), unnamed(4)])
            .unwrap();

        assert_eq!(args.ellipsis, vec![named("a", 3), unnamed(4)]);
    }

    #[test]
    fn repeated_names_are_rejected() {
        let result = Fixture.match_args(vec![named("x", 1), named("x", 2)]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_arguments() {
        let mut args = Fixture.match_args(vec![]).unwrap();
        assert_eq!(
            args.require("x"),
            Err(Error::ArgumentMissing("x".to_string()))
        );
        assert_eq!(args.string("sep"), Ok(None));
    }
}
