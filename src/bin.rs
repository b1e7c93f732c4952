use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use rsubset::cli::Cli;
use rsubset::lang::{CallStack, Cond, Signal};
use rsubset::repl::eval_and_print;
use rsubset::session::Session;

fn run(stack: &mut CallStack, input: &str) -> Result<(), ExitCode> {
    match eval_and_print(stack, input) {
        Ok(()) => Ok(()),
        Err(Signal::Condition(Cond::Terminate)) => Err(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("{e}");
            Err(ExitCode::FAILURE)
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::new().filter_or("RSUBSET_LOG", "warn")).init();

    let cli = Cli::parse();
    let script = cli.script.clone();
    let exprs = cli.exprs.clone();
    let session = Session::from(cli);

    if script.is_none() && exprs.is_empty() {
        return interactive(session);
    }

    let mut stack = CallStack::from(session);

    if let Some(path) = script {
        log::info!("evaluating script {}", path.display());
        let input = match std::fs::read_to_string(&path) {
            Ok(input) => input,
            Err(e) => {
                eprintln!("Error: unable to read {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        };

        if let Err(code) = run(&mut stack, &input) {
            return code;
        }
    }

    for expr in exprs {
        if let Err(code) = run(&mut stack, &expr) {
            return code;
        }
    }

    ExitCode::SUCCESS
}

#[cfg(feature = "repl")]
fn interactive(session: Session) -> ExitCode {
    match rsubset::repl::repl(session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "repl"))]
fn interactive(_session: Session) -> ExitCode {
    eprintln!("Error: built without interactive support, pass a script or --expr");
    ExitCode::FAILURE
}
