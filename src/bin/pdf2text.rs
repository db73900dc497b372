use std::process::ExitCode;

use clap::Parser;
use termscan::{
    cli::{ExtractArgs, build_extract_config},
    logging,
};

fn main() -> ExitCode {
    let args = match ExtractArgs::try_parse() {
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

fn run(args: &ExtractArgs) -> anyhow::Result<()> {
    let config = build_extract_config(args)?;
    let outcome = termscan_core::run_extract(&config)?;

    for file in &outcome.written {
        println!("{} -> {}", file.source.display(), file.output.display());
    }
    eprintln!(
        "{} PDF(s) extracted into {}, {} failed",
        outcome.written.len(),
        outcome.output_dir.display(),
        outcome.failures.len()
    );
    Ok(())
}
