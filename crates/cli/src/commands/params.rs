use anyhow::Result;
use lascrack_core::analyzer::OUTPUT_FILE_NAME_KEY;
use lascrack_core::loader::ConfigFormat;
use serde::Serialize;

use crate::{OutputFormat, RecordArgs};

#[derive(Debug, Serialize)]
pub struct ParamsSnapshot {
    pub component: String,
    pub id: String,
    pub parameters: lascrack_core::ParameterSet,
}

/// Print the record's key-value form together with its parameter-set id.
pub fn params_command(
    args: &RecordArgs,
    output_file_name: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let record = args.resolve()?;
    let mut params = record.to_parameter_set();
    if let Some(file_name) = output_file_name {
        params.insert_untracked(OUTPUT_FILE_NAME_KEY, file_name);
    }

    let snapshot = ParamsSnapshot {
        component: record.component_name().to_string(),
        id: params.id(),
        parameters: params,
    };

    match format {
        OutputFormat::Json => println!("{}", ConfigFormat::Json.render(&snapshot)?),
        OutputFormat::Yaml => print!("{}", ConfigFormat::Yaml.render(&snapshot)?),
        OutputFormat::Text => {
            println!("{} (id {})", snapshot.component, snapshot.id);
            for name in snapshot.parameters.tracked_names() {
                if let Some(value) = snapshot.parameters.value(&name) {
                    println!("  {} = {} [{}]", name, value, value.type_name());
                }
            }
            for name in snapshot.parameters.untracked_names() {
                if let Some(value) = snapshot.parameters.value(&name) {
                    println!("  {} = {} [{}, untracked]", name, value, value.type_name());
                }
            }
        }
    }

    Ok(())
}
