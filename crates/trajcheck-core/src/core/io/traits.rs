use crate::core::io::config::DecodeConfig;
use crate::core::models::trajectory::DecodedTrajectory;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Defines the interface for reading and writing trajectory file formats.
///
/// Implementors provide format-specific decoding from a reader and encoding to a writer;
/// the path-based helpers are shared.
pub trait TrajectoryFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads and validates a trajectory from a reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The reader to consume completely.
    /// * `config` - Options controlling validation and decoding.
    ///
    /// # Return
    ///
    /// Returns the decoded trajectory.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the content is not a valid trajectory.
    fn read_from(
        reader: &mut impl Read,
        config: &DecodeConfig,
    ) -> Result<DecodedTrajectory, Self::Error>;

    /// Writes a trajectory to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(trajectory: &DecodedTrajectory, writer: &mut impl Write)
    -> Result<(), Self::Error>;

    /// Reads a trajectory from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or its content is invalid.
    fn read_from_path<P: AsRef<Path>>(
        path: P,
        config: &DecodeConfig,
    ) -> Result<DecodedTrajectory, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, config)
    }

    /// Writes a trajectory to a file path, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(
        trajectory: &DecodedTrajectory,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(trajectory, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
