// CLI module
// Command-line interface, argument parsing and the retrieval command

mod args;
mod command;

pub use args::CliArgs;
pub use command::execute;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, missing required arguments, or
/// --help), clap displays an error or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
