use std::fmt::Display;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::callable::core::Builtin;
use crate::error::Error;
use crate::internal_err;
use crate::object::*;
use crate::session::Session;

pub type EvalResult = Result<Obj, Signal>;

#[derive(Debug, Clone, PartialEq)]
pub enum Cond {
    Terminate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    Condition(Cond),
    Error(Error),
}

impl Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Signal::Condition(Cond::Terminate) => write!(f, ""),
            Signal::Error(e) => write!(f, "{e}"),
        }
    }
}

/// Evaluation state of a session
///
/// Holds the global environment, the visibility of the most recent result
/// (assignments and `invisible()` are not auto-printed) and the random
/// number generator used by `sample()`.
///
#[derive(Debug)]
pub struct CallStack {
    pub session: Session,
    pub visible: bool,
    env: Rc<Environment>,
    rng: StdRng,
}

impl Default for CallStack {
    fn default() -> Self {
        CallStack::new(Session::default())
    }
}

impl From<Session> for CallStack {
    fn from(session: Session) -> Self {
        CallStack::new(session)
    }
}

impl CallStack {
    pub fn new(session: Session) -> Self {
        CallStack {
            session,
            visible: true,
            env: Environment::global(),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn env(&self) -> Rc<Environment> {
        self.env.clone()
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn set_seed(&mut self, seed: u64) {
        log::debug!("random number generator seeded with {seed}");
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn eval(&mut self, expr: Expr) -> EvalResult {
        use crate::object::types::Logical;

        match expr {
            Expr::Null => Ok(Obj::Null),
            Expr::NA => Ok(Obj::from(vec![Logical::NA])),
            Expr::Inf => Ok(Obj::from(f64::INFINITY)),
            Expr::NaN => Ok(Obj::from(f64::NAN)),
            Expr::Bool(x) => Ok(Obj::from(x)),
            Expr::Number(x) => Ok(Obj::from(x)),
            Expr::Integer(x) => Ok(Obj::from(x)),
            Expr::String(x) => Ok(Obj::from(x)),
            Expr::Symbol(name) => Ok(self.env.get(&name)?),
            Expr::Primitive(p) => Ok(Obj::Function(p)),
            Expr::Missing => Err(Error::ArgumentMissing("argument".to_string()).into()),
            Expr::Call(what, args) => self.eval_call(*what, args),
        }
    }

    /// Evaluate a call, resolving the callee by name when given a symbol
    pub fn eval_call(&mut self, what: Expr, args: ExprList) -> EvalResult {
        let f = self.callable(what)?;
        let result = f.call(args, self);
        if let Some(visible) = f.visibility() {
            self.visible = visible;
        }
        result
    }

    /// Evaluate an expression that was typed at the top level
    ///
    /// Resets visibility, so that assignments nested in other calls don't
    /// hide the outer result.
    ///
    pub fn eval_and_finalize(&mut self, expr: Expr) -> EvalResult {
        self.visible = true;
        self.eval(expr)
    }

    /// Evaluate each argument, keeping argument names
    pub fn eval_args(&mut self, args: ExprList) -> Result<Vec<(Option<String>, Obj)>, Signal> {
        args.into_iter()
            .map(|(k, v)| Ok((k, self.eval(v)?)))
            .collect()
    }

    fn callable(&self, what: Expr) -> Result<Box<dyn Builtin>, Signal> {
        let f = match what {
            Expr::Primitive(p) => return Ok(p),
            Expr::Symbol(name) | Expr::String(name) => self.env.get_function(&name)?,
            other => return Err(Error::FunctionNotFound(other.to_string()).into()),
        };

        match f {
            Obj::Function(p) => Ok(p),
            _ => internal_err!(),
        }
    }

    /// Assign a value to a target expression
    ///
    /// Symbols bind directly in the global environment. Calls are treated as
    /// replacement functions: `f(x, ...) <- value` evaluates `x`, asks `f` to
    /// produce the updated object and then assigns that back to `x`, so that
    /// nested targets like `x$a[[2]] <- value` update from the inside out.
    ///
    pub fn assign(&mut self, target: Expr, value: Obj) -> EvalResult {
        match target {
            Expr::Symbol(name) | Expr::String(name) => {
                log::trace!("binding '{name}'");
                self.env.insert(name, value.clone());
                Ok(value)
            }
            Expr::Call(what, args) => {
                let Some((inner, rest)) = args.split_first() else {
                    return Err(Error::InvalidAssignmentTarget.into());
                };

                let current = match &inner {
                    Expr::Symbol(name) => self.env.get(name).unwrap_or(Obj::Null),
                    Expr::Call(..) => match self.eval(inner.clone()) {
                        // assignment creates elements that don't exist yet
                        Err(Signal::Error(Error::NoSuchName(_) | Error::OutOfBounds)) => Obj::Null,
                        result => result?,
                    },
                    _ => return Err(Error::InvalidAssignmentTarget.into()),
                };

                let f = self.callable(*what)?;
                let updated = f.call_assign(current, rest, value.clone(), self)?;
                self.assign(inner, updated)?;
                Ok(value)
            }
            _ => Err(Error::InvalidAssignmentTarget.into()),
        }
    }
}
