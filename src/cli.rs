use std::path::PathBuf;

/// Evaluate R snippets with R's subsetting semantics
///
/// Without a script or expressions, an interactive session is started.
///
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "rsubset", version, about)]
pub struct Cli {
    /// Script file to evaluate
    pub script: Option<PathBuf>,

    /// Expression to evaluate, may be given more than once
    #[arg(short, long = "expr")]
    pub exprs: Vec<String>,

    /// Console width used when printing values
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Significant digits used when printing doubles
    #[arg(long, default_value_t = 7)]
    pub digits: usize,

    /// File used to persist interactive history
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Skip the session header
    #[arg(long)]
    pub no_header: bool,
}
