//! # SIL
//!
//! Runs SIL programs from the command line.

use clap::Parser;
use sil::term::{self, Options};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sil", version, about = "Run SIL programs")]
struct Cli {
    /// Program files, run one after another
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print each line number as it runs
    #[arg(long)]
    trace: bool,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,

    /// Lines to run between checks for Ctrl-C
    #[arg(long, default_value_t = 5000)]
    cycles: usize,
}

fn main() {
    let cli = Cli::parse();
    term::init_tracing(cli.verbose);
    let options = Options {
        trace: cli.trace,
        cycles: cli.cycles.max(1),
    };
    std::process::exit(term::main(&cli.files, &options));
}
