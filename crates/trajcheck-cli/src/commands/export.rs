use crate::cli::ExportArgs;
use crate::config::{ConfigOverrides, build_config};
use crate::error::{CliError, Result};
use std::path::Path;
use tracing::info;
use trajcheck::XyzFile;
use trajcheck::core::io::export::write_csv_to_path;
use trajcheck::core::io::traits::TrajectoryFile;

pub fn run(args: ExportArgs, config_path: Option<&Path>, set_values: &[String]) -> Result<()> {
    let config = build_config(config_path, set_values, &ConfigOverrides::from(&args))?;

    info!("Loading trajectory from {:?}", &args.input);
    let trajectory =
        XyzFile::read_from_path(&args.input, &config.decode).map_err(|e| {
            CliError::FileParsing {
                path: args.input.clone(),
                source: e.into(),
            }
        })?;

    let rows = write_csv_to_path(&trajectory, &args.output)?;
    println!(
        "✓ Wrote {} row(s) ({} atom(s) x {} frame(s)) to {}",
        rows,
        trajectory.atom_count(),
        trajectory.frame_count(),
        args.output.display()
    );
    Ok(())
}
