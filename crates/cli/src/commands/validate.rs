use std::path::Path;

use anyhow::{bail, Context, Result};
use lascrack_core::analyzer::OUTPUT_FILE_NAME_KEY;
use lascrack_core::registry::Analyzer;
use lascrack_core::{ConfigRegistry, LasCrackAnalysis, ParameterSet, COMPONENT_NAME};

use crate::RecordArgs;

/// Output file name used when none is given on the command line.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "LasCrackAnalysis.root";

/// Construct the analyzer from the resolved configuration and report its settings.
///
/// `params_file` takes precedence over the record arguments; `output_file_name`
/// only fills `OutputFileName` when the parameters do not carry one already.
pub fn validate_command(
    args: &RecordArgs,
    params_file: Option<&Path>,
    output_file_name: &str,
    json: bool,
) -> Result<()> {
    let mut registry = ConfigRegistry::new();
    match params_file {
        Some(path) => {
            let mut params = lascrack_core::loader::load_parameter_set(path)?;
            if params.is_tracked(OUTPUT_FILE_NAME_KEY) {
                bail!(
                    "{} must be an untracked parameter in {}",
                    OUTPUT_FILE_NAME_KEY,
                    path.display()
                );
            }
            if !params.contains(OUTPUT_FILE_NAME_KEY) {
                params.insert_untracked(OUTPUT_FILE_NAME_KEY, output_file_name);
            }
            registry.register(COMPONENT_NAME, params);
        }
        None => {
            let record = args.resolve()?;
            let mut extra = ParameterSet::new();
            extra.insert_untracked(OUTPUT_FILE_NAME_KEY, output_file_name);
            record.register_with(&mut registry, extra);
        }
    }

    let analyzer = LasCrackAnalysis::from_registry(&registry)
        .with_context(|| format!("Invalid {} configuration", COMPONENT_NAME))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analyzer)?);
        return Ok(());
    }

    println!("Configuration OK: {}", analyzer.describe());
    println!("  Analysis mode:  {}", analyzer.analysis_mode);
    println!("  Digi type:      {}", analyzer.digi_type);
    println!("  Digi producer:  {}", analyzer.digis_module_label);
    println!("  Output file:    {}", analyzer.output_file_name);
    println!("  Output mode:    {}", analyzer.output_mode.as_str());
    if !analyzer.digi_type.is_supported() {
        println!("  Warning: {} digis are not processed by the analyzer yet", analyzer.digi_type);
    }

    Ok(())
}
