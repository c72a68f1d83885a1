use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lascrack::commands::{
    components_command, params_command, show_command, validate_command, write_command,
    DEFAULT_OUTPUT_FILE_NAME,
};
use lascrack::{init_logging, OutputFormat, RecordArgs};

/// LasCrackAnalysis configuration CLI.
///
/// This CLI is a thin wrapper around `lascrack-core` (exposed in code as `lascrack_core`).
/// All substantive logic lives in the library so it can be tested thoroughly
/// and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "lascrack",
    version,
    about = "Build, inspect, and validate LasCrackAnalysis configuration",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the configuration record (defaults plus any overrides).
    Show {
        #[command(flatten)]
        record: RecordArgs,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Emit YAML instead of human-readable text.
        #[arg(long, default_value_t = false, conflicts_with = "json")]
        yaml: bool,
    },

    /// Write the configuration record to a JSON or YAML file.
    ///
    /// The format is chosen from the file extension (.json, .yaml, .yml).
    Write {
        #[command(flatten)]
        record: RecordArgs,

        /// Destination file.
        #[arg(long)]
        output: String,

        /// Also set the untracked OutputFileName and write a full parameter set.
        #[arg(long)]
        output_file_name: Option<String>,
    },

    /// Construct the analyzer from the configuration and report its settings.
    ///
    /// Fails with the analyzer's error when the analysis type or digi
    /// instance label is not one the analyzer accepts.
    Validate {
        #[command(flatten)]
        record: RecordArgs,

        /// Validate a full parameter set file instead of a record.
        #[arg(long)]
        params: Option<PathBuf>,

        /// Output file name handed to the analyzer.
        #[arg(long, default_value = DEFAULT_OUTPUT_FILE_NAME)]
        output_file_name: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the parameter set built from the record, with its id.
    Params {
        #[command(flatten)]
        record: RecordArgs,

        /// Add the untracked OutputFileName parameter.
        #[arg(long)]
        output_file_name: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Emit YAML instead of human-readable text.
        #[arg(long, default_value_t = false, conflicts_with = "json")]
        yaml: bool,
    },

    /// List the analyzer components this binary can construct.
    Components {
        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_logging("warn");
    let cli = Cli::parse();

    // Default to showing the default record if no command is provided.
    let command = cli.command.unwrap_or(Command::Show {
        record: RecordArgs::default(),
        json: false,
        yaml: false,
    });

    match command {
        Command::Show { record, json, yaml } => {
            show_command(&record, OutputFormat::from_flags(json, yaml))?
        }
        Command::Write { record, output, output_file_name } => {
            write_command(&record, &output, output_file_name)?
        }
        Command::Validate { record, params, output_file_name, json } => {
            validate_command(&record, params.as_deref(), &output_file_name, json)?
        }
        Command::Params { record, output_file_name, json, yaml } => {
            params_command(&record, output_file_name, OutputFormat::from_flags(json, yaml))?
        }
        Command::Components { json } => components_command(json)?,
    }

    Ok(())
}
