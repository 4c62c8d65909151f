//! `oasproto` binary entry point.

use clap::Parser;
use oasproto_cli::{Args, ExitCode, init_logging, run};

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version print to stdout and succeed
            let code = if err.use_stderr() {
                ExitCode::Usage
            } else {
                ExitCode::Success
            };
            let _ = err.print();
            std::process::exit(code.code());
        }
    };

    init_logging();
    std::process::exit(run(args).code());
}
