use anyhow::Result;
use lascrack_core::loader::ConfigFormat;
use lascrack_core::ConfigurationRecord;

use crate::{OutputFormat, RecordArgs};

/// Print the resolved configuration record.
pub fn show_command(args: &RecordArgs, format: OutputFormat) -> Result<()> {
    let record = args.resolve()?;
    print_record(&record, format)
}

pub fn print_record(record: &ConfigurationRecord, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", ConfigFormat::Json.render(record)?),
        OutputFormat::Yaml => print!("{}", ConfigFormat::Yaml.render(record)?),
        OutputFormat::Text => {
            println!("Component: {}", record.component_name());
            println!("  AnalysisType:       {}", record.analysis_type());
            println!("  DigisInstanceLabel: {}", record.digis_instance_label());
            println!("  DigisModuleLabel:   {}", record.digis_module_label());
        }
    }
    Ok(())
}
