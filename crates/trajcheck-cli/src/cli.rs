use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use trajcheck::TrailingLines;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "trajcheck",
    version,
    about = "trajcheck - fetch, validate and export fixed-column XYZ atomic trajectories.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to validate files in parallel.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Path to a configuration file in TOML format.
    /// Defaults to `config.toml` in the platform configuration directory, if present.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S decode.verify-frames=true
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", global = true)]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download a trajectory from the data server and save it if it validates.
    Fetch(FetchArgs),
    /// Validate local trajectory files and print a summary of each.
    Validate(ValidateArgs),
    /// Decode a trajectory and write its coordinates as long-format CSV.
    Export(ExportArgs),
}

/// Options controlling how trajectory text is decoded.
#[derive(Args, Debug, Default, Clone)]
pub struct DecodeArgs {
    /// 0-based column at which coordinate scanning starts.
    #[arg(long, value_name = "COLUMN", conflicts_with = "padded")]
    pub coordinate_column: Option<usize>,

    /// Use the padded layout whose coordinates start at column 7.
    #[arg(long)]
    pub padded: bool,

    /// What to do with lines after the last complete frame (`ignore` or `reject`).
    #[arg(long, value_name = "POLICY")]
    pub trailing_lines: Option<TrailingLines>,

    /// Strip a trailing carriage return from every line before decoding.
    #[arg(long)]
    pub normalize_line_endings: bool,

    /// Check the header and atom types of every frame, not only the first.
    #[arg(long)]
    pub verify_frames: bool,
}

/// Arguments for the `fetch` subcommand.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Name of the trajectory file on the data server.
    #[arg(required = true, value_name = "NAME")]
    pub name: String,

    /// Override the base URL of the data server.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Directory to save the trajectory in.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Overwrite an existing file with the same name.
    #[arg(long)]
    pub force: bool,

    #[command(flatten)]
    pub decode: DecodeArgs,
}

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Trajectory files to validate.
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub decode: DecodeArgs,
}

/// Arguments for the `export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Trajectory file to decode.
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path of the CSV file to write.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    #[command(flatten)]
    pub decode: DecodeArgs,
}
