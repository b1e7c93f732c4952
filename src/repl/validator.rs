use pest::error::InputLocation;
use pest::Parser;
use reedline::{ValidationResult, Validator};

use crate::parser::{RParser, Rule};

/// Continue reading lines while input ends mid-expression
///
/// Failures before the end of the input are complete, so that the error
/// is reported once the line is submitted.
///
pub struct RValidator;

impl Validator for RValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        let Err(e) = RParser::parse(Rule::program, line) else {
            return ValidationResult::Complete;
        };

        let pos = match e.location {
            InputLocation::Pos(pos) => pos,
            InputLocation::Span((_, end)) => end,
        };

        if pos >= line.trim_end().len() {
            ValidationResult::Incomplete
        } else {
            ValidationResult::Complete
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_complete(line: &str) -> bool {
        matches!(RValidator.validate(line), ValidationResult::Complete)
    }

    #[test]
    fn open_brackets_continue() {
        assert!(!is_complete("c(1,"));
        assert!(!is_complete("x[1"));
        assert!(!is_complete("1 +"));
        assert!(!is_complete("{\n x <- 1"));
    }

    #[test]
    fn finished_and_broken_lines_submit() {
        assert!(is_complete("c(1, 2)"));
        assert!(is_complete("x[[1]]"));
        assert!(is_complete("1 ) + 2"));
    }
}
