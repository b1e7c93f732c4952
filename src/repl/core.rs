use reedline::{FileBackedHistory, Reedline};

use super::highlight::RHighlighter;
use super::prompt::RPrompt;
use super::release::*;
use super::validator::RValidator;
use crate::lang::{CallStack, Cond, Signal};
use crate::session::Session;

const HISTORY_SIZE: usize = 1000;

fn history(session: &Session) -> FileBackedHistory {
    let Some(path) = &session.history else {
        return FileBackedHistory::new(HISTORY_SIZE);
    };

    match FileBackedHistory::with_file(HISTORY_SIZE, path.clone()) {
        Ok(history) => {
            log::debug!("restoring session history from {}", path.display());
            history
        }
        Err(e) => {
            log::warn!("unable to use history file {}: {e}", path.display());
            FileBackedHistory::new(HISTORY_SIZE)
        }
    }
}

pub fn repl(session: Session) -> Result<(), Signal> {
    if session.header {
        println!("{}", session_header());
    }

    let mut line_editor = Reedline::create()
        .with_validator(Box::new(RValidator))
        .with_highlighter(Box::new(RHighlighter))
        .with_history(Box::new(history(&session)));

    let prompt = RPrompt;
    let mut stack = CallStack::from(session);

    loop {
        match line_editor.read_line(&prompt) {
            Ok(reedline::Signal::Success(line)) => {
                // skip all-whitespace entries
                if line.chars().all(char::is_whitespace) {
                    continue;
                }

                match super::eval_and_print(&mut stack, &line) {
                    Ok(()) => (),
                    Err(Signal::Condition(Cond::Terminate)) => break,
                    Err(e) => eprintln!("{e}"),
                }
            }
            Ok(reedline::Signal::CtrlD) => break,
            Ok(reedline::Signal::CtrlC) => continue,
            Err(err) => {
                log::error!("unable to read input: {err:?}");
                break;
            }
        }
    }

    Ok(())
}
