use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "esq",
    about = "Compile tabular query requests into search engine query DSL",
    version,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Log debug output (RUST_LOG takes precedence when set)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Print JSON on a single line instead of pretty-printing it
    #[arg(long, global = true)]
    pub compact: bool,

    /// Pick which subcommand to use
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the query DSL document for a request
    Compile(InputArgs),
    /// Print the full search body: compiled query plus size/from
    Body(InputArgs),
    /// Decode a request and report its shape without printing the DSL
    Check(InputArgs),
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Request JSON file; reads stdin when omitted or "-"
    pub file: Option<PathBuf>,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
