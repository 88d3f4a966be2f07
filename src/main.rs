//! ASCII-art banner CLI entry point.
//!
//! Argument handling and mode dispatch live in the [`cli`] module; this
//! file only owns the process exit policy. The library layer never prints
//! or terminates, so every error funnels through here exactly once.

use std::process;

use clap::Parser;

mod cli;

fn main() {
    let args = match cli::Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version also arrive through the error path
            let is_usage_error = err.use_stderr();
            let _ = err.print();
            process::exit(if is_usage_error { cli::EXIT_USAGE } else { 0 });
        }
    };

    if let Err(err) = cli::run(args) {
        eprintln!("{err}");
        process::exit(err.exit_code());
    }
}
