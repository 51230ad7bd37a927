use crate::cli::ValidateArgs;
use crate::config::{ConfigOverrides, build_config};
use crate::error::{CliError, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use trajcheck::core::io::traits::TrajectoryFile;
use trajcheck::core::io::xyz::TrajectoryFileError;
use trajcheck::{DecodeConfig, DecodedTrajectory, XyzFile};

pub fn run(args: ValidateArgs, config_path: Option<&Path>, set_values: &[String]) -> Result<()> {
    let config = build_config(config_path, set_values, &ConfigOverrides::from(&args))?;

    let reports = validate_all(&args.paths, &config.decode);
    let failed = reports.iter().filter(|(_, result)| result.is_err()).count();

    for (path, result) in &reports {
        match result {
            Ok(trajectory) => println!("✓ {}: {}", path.display(), summarize(trajectory)),
            Err(e) => println!("✗ {}: {}", path.display(), e),
        }
    }

    info!(
        "Validated {} file(s), {} failed.",
        reports.len(),
        failed
    );
    if failed > 0 {
        return Err(CliError::Validation {
            failed,
            total: reports.len(),
        });
    }
    Ok(())
}

/// Decodes every path in parallel, keeping the input order in the result.
fn validate_all(
    paths: &[PathBuf],
    config: &DecodeConfig,
) -> Vec<(PathBuf, std::result::Result<DecodedTrajectory, TrajectoryFileError>)> {
    paths
        .par_iter()
        .map(|path| {
            debug!("Validating {:?}", path);
            (path.clone(), XyzFile::read_from_path(path, config))
        })
        .collect()
}

fn summarize(trajectory: &DecodedTrajectory) -> String {
    let composition = trajectory
        .composition()
        .iter()
        .map(|(element, count)| format!("{} {}", element, count))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{} atom(s), {} frame(s) [{}]",
        trajectory.atom_count(),
        trajectory.frame_count(),
        composition
    )
}
