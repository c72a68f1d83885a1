use std::path::Path;

use anyhow::{Context, Result};
use lascrack_core::analyzer::OUTPUT_FILE_NAME_KEY;
use lascrack_core::loader::ConfigFormat;

use crate::{absolute_path, RecordArgs};

/// Write the resolved record to `output` (format chosen by extension).
///
/// With `output_file_name`, a full parameter set is written instead so the
/// file can be fed straight to `validate --params`.
pub fn write_command(
    args: &RecordArgs,
    output: &str,
    output_file_name: Option<String>,
) -> Result<()> {
    let record = args.resolve()?;
    let target = absolute_path(Path::new(output))?;
    ConfigFormat::from_path(&target)?;
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output dir: {}", parent.display()))?;
    }

    match output_file_name {
        Some(file_name) => {
            let mut params = record.to_parameter_set();
            params.insert_untracked(OUTPUT_FILE_NAME_KEY, file_name);
            lascrack_core::loader::save_parameter_set(&params, &target)?;
            println!("Wrote parameter set:");
            println!("  Id: {}", params.id());
        }
        None => {
            lascrack_core::loader::save_record(&record, &target)?;
            println!("Wrote configuration record:");
        }
    }
    println!("  Component: {}", record.component_name());
    println!("  Path: {}", target.display());

    Ok(())
}
