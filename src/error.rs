use crate::{lang::Signal, parser::Rule};

use core::fmt;
use pest::error::LineColLocation::Pos;

#[macro_export]
macro_rules! internal_err {
    () => {
        $crate::error::Error::Internal(None, std::file!(), std::line!()).into()
    };
    ( $x:expr ) => {
        $crate::error::Error::Internal(Some($x.to_string()), std::file!(), std::line!()).into()
    };
}

#[macro_export]
macro_rules! err {
    ( $x:expr ) => {
        $crate::error::Error::Other($x.to_string()).into()
    };
}

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    // subsetting
    MixedSign,
    NoNameMapping,
    OutOfBounds,
    NoSuchName(String),
    InvalidIndex(String),
    DimensionMismatch(String),
    LengthMismatch(usize, usize),

    // evaluation
    VariableNotFound(String),
    FunctionNotFound(String),
    InvalidAssignmentTarget,
    CannotBeCoercedTo(&'static str),
    ArgumentMissing(String),
    ArgumentInvalid(String),
    UnusedArgument(String),
    Other(String),

    // parsing errors
    ParseFailure(Box<pest::error::Error<Rule>>),
    ParseUnexpected(Rule),

    // in-dev errors
    Internal(Option<String>, &'static str, u32),
}

impl Error {
    fn as_str(&self) -> String {
        match self {
            Error::MixedSign => "can't mix positive and negative subscripts".to_string(),
            Error::NoNameMapping => "subscript names used on an object without names".to_string(),
            Error::OutOfBounds => "subscript out of bounds".to_string(),
            Error::NoSuchName(name) => format!("no such name '{name}'"),
            Error::InvalidIndex(msg) => msg.to_string(),
            Error::DimensionMismatch(msg) => format!("incorrect number of dimensions: {msg}"),
            Error::LengthMismatch(targets, values) => {
                format!("replacement has length {values}, but {targets} elements are assigned")
            }
            Error::VariableNotFound(v) => format!("object '{v}' not found"),
            Error::FunctionNotFound(v) => format!("could not find function \"{v}\""),
            Error::InvalidAssignmentTarget => "invalid assignment target".to_string(),
            Error::CannotBeCoercedTo(to) => {
                format!("object cannot be coerced to type '{to}'")
            }
            Error::ArgumentMissing(s) => format!("argument '{s}' is missing with no default"),
            Error::ArgumentInvalid(s) => format!("argument '{s}' is invalid"),
            Error::UnusedArgument(s) => format!("unused argument ({s})"),
            Error::Other(s) => s.to_string(),
            Error::ParseFailure(e) => match e.line_col {
                Pos((line, col)) => format!("Parse failed at Line {}, Column {}", line, col),
                _ => format!("Parse failed at {:?}", e.line_col),
            },
            Error::ParseUnexpected(rule) => {
                format!("Parse failed. Found unexpected parsing rule '{:#?}'", rule)
            }
            Error::Internal(None, file, line) => format!("Internal Error ({file}:{line})"),
            Error::Internal(Some(msg), file, line) => {
                format!("Internal Error ({file}:{line})\n{msg}")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error: {}", self.as_str())
    }
}

impl std::error::Error for Error {}

impl From<Error> for Signal {
    fn from(val: Error) -> Self {
        Signal::Error(val)
    }
}

impl<T> From<Error> for Result<T, Signal> {
    fn from(val: Error) -> Self {
        Err(Signal::Error(val))
    }
}

impl<T> From<Error> for Result<T, Error> {
    fn from(val: Error) -> Self {
        Err(val)
    }
}

impl From<&str> for Signal {
    fn from(msg: &str) -> Self {
        Signal::Error(Error::Other(msg.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subset_errors_render_like_r() {
        assert_eq!(
            Error::MixedSign.to_string(),
            "Error: can't mix positive and negative subscripts"
        );
        assert_eq!(
            Error::LengthMismatch(3, 2).to_string(),
            "Error: replacement has length 2, but 3 elements are assigned"
        );
    }
}
