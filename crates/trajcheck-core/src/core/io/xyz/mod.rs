//! Fixed-column XYZ trajectory codec.
//!
//! Decoding runs four stages in order and stops at the first failure: frame geometry from
//! the header, atom types from the first frame, coordinates of every frame, and assembly of
//! the final [`DecodedTrajectory`].

mod atom_types;
mod coordinates;
pub mod error;
mod geometry;
mod tokenizer;
mod writer;

pub use error::{CoordinateErrorKind, FrameErrorKind, TrajectoryFileError, ValidationError};

use crate::core::io::config::DecodeConfig;
use crate::core::io::traits::TrajectoryFile;
use crate::core::models::trajectory::DecodedTrajectory;
use std::io::{Read, Write};
use tracing::{debug, instrument};

/// Validates `text` and decodes it with the default [`DecodeConfig`].
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered; no partial trajectory is produced.
pub fn validate_and_decode(text: &str) -> Result<DecodedTrajectory, ValidationError> {
    validate_and_decode_with(text, &DecodeConfig::default())
}

/// Validates `text` and decodes it with an explicit configuration.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered; no partial trajectory is produced.
#[instrument(skip_all, fields(bytes = text.len()))]
pub fn validate_and_decode_with(
    text: &str,
    config: &DecodeConfig,
) -> Result<DecodedTrajectory, ValidationError> {
    let lines = geometry::split_lines(text, config);
    let geometry = geometry::measure(&lines, config)?;
    let atom_types = atom_types::read_atom_types(&lines, &geometry, &config.layout)?;
    let (coordinates, comments) =
        coordinates::decode_frames(&lines, &geometry, &atom_types, config)?;

    debug!(
        atoms = geometry.atom_count(),
        frames = geometry.frame_count(),
        "Trajectory decoded."
    );
    Ok(DecodedTrajectory::assemble(atom_types, comments, coordinates))
}

/// Returns `true` if `text` is a valid trajectory under the default configuration.
pub fn is_valid(text: &str) -> bool {
    validate_and_decode(text).is_ok()
}

pub struct XyzFile;

impl TrajectoryFile for XyzFile {
    type Error = TrajectoryFileError;

    fn read_from(
        reader: &mut impl Read,
        config: &DecodeConfig,
    ) -> Result<DecodedTrajectory, Self::Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(validate_and_decode_with(&text, config)?)
    }

    fn write_to(
        trajectory: &DecodedTrajectory,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        writer::write_trajectory(trajectory, writer)?;
        Ok(())
    }
}
