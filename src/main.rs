use std::process::ExitCode;

use clap::Parser;
use termscan::{
    cli::{CountArgs, build_count_config},
    logging,
};

fn main() -> ExitCode {
    let args = match CountArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };
    logging::init(args.verbose, args.quiet);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CountArgs) -> anyhow::Result<()> {
    let config = build_count_config(args)?;
    let outcome = termscan_core::run_count(&config)?;

    if !outcome.failures.is_empty() {
        eprintln!(
            "{} file(s) processed, {} failed",
            outcome.results.len(),
            outcome.failures.len()
        );
    }
    println!("{}", outcome.report_path.display());
    Ok(())
}
