use std::path::PathBuf;

use crate::cli::Cli;
use crate::object::FormatOptions;

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub format: FormatOptions,
    pub header: bool,
    pub history: Option<PathBuf>,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            format: FormatOptions::default(),
            header: true,
            history: None,
        }
    }
}

impl From<Cli> for Session {
    fn from(value: Cli) -> Self {
        Session {
            format: FormatOptions {
                width: value.width,
                digits: value.digits,
            },
            header: !value.no_header,
            history: value.history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn options_come_from_the_command_line() {
        let cli = Cli::parse_from(["rsubset", "--width", "40", "--no-header", "-e", "1"]);
        let session = Session::from(cli);
        assert_eq!(session.format.width, 40);
        assert_eq!(session.format.digits, 7);
        assert!(!session.header);
    }
}
