//! Command-line interface implementation for crafter.
//! Argument parsing stops at the program level; command resolution is the
//! registry's job, so everything after the flags is passed through verbatim.

use clap::Parser;

/// Command-line arguments structure for crafter.
#[derive(Parser, Debug)]
#[command(author, version, about = "crafter: artisan-style code generator for TypeScript web projects", long_about = None)]
pub struct Args {
    /// Command name followed by its arguments (run with no command for help)
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
