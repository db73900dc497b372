mod count_args;
mod extract_args;
mod value_enum;

use std::path::Path;

pub use count_args::CountArgs;
pub use extract_args::ExtractArgs;
use termscan_core::{
    CountConfig, ExtractConfig,
    error::{PresentationError, Result},
};
pub use value_enum::CliOutputFormat;

fn validate_output_dir(flag: &str, dir: &Path) -> Result<()> {
    if dir.is_file() {
        return Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: dir.display().to_string(),
            reason: "exists and is not a directory".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Convert parsed `termscan` arguments into a run configuration.
///
/// # Errors
///
/// Returns `Err` when `--output-dir` names an existing regular file.
pub fn build_count_config(args: &CountArgs) -> Result<CountConfig> {
    validate_output_dir("--output-dir", &args.output_dir)?;

    let mut config = CountConfig::new(&args.input_path, &args.terms_file);
    config.output_dir.clone_from(&args.output_dir);
    config.format = args.format.into();
    config.strict = args.strict;
    Ok(config)
}

/// Convert parsed `pdf2text` arguments into a run configuration.
///
/// # Errors
///
/// Returns `Err` when `--output-dir` names an existing regular file.
pub fn build_extract_config(args: &ExtractArgs) -> Result<ExtractConfig> {
    validate_output_dir("--output-dir", &args.output_dir)?;

    let mut config = ExtractConfig::new(&args.manifest);
    config.output_dir.clone_from(&args.output_dir);
    config.strict = args.strict;
    Ok(config)
}
