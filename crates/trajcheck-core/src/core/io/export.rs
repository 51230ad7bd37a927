use crate::core::models::element::Element;
use crate::core::models::trajectory::DecodedTrajectory;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// One row of the long-format coordinate table.
#[derive(Debug, Serialize)]
struct CoordinateRecord {
    frame: usize,
    atom: usize,
    element: Element,
    x: f32,
    y: f32,
    z: f32,
}

/// Writes one `frame,atom,element,x,y,z` row per atom of every frame, frame-major.
///
/// Returns the number of data rows written.
pub fn write_csv<W: Write>(trajectory: &DecodedTrajectory, writer: W) -> Result<usize, csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let coordinates = trajectory.coordinates();
    let mut rows = 0;

    for frame in 0..trajectory.frame_count() {
        for (atom, element) in trajectory.atom_types().iter().enumerate() {
            let p = coordinates[(atom, frame)];
            csv_writer.serialize(CoordinateRecord {
                frame,
                atom,
                element: *element,
                x: p.x,
                y: p.y,
                z: p.z,
            })?;
            rows += 1;
        }
    }

    csv_writer.flush()?;
    Ok(rows)
}

pub fn write_csv_to_path(
    trajectory: &DecodedTrajectory,
    path: &Path,
) -> Result<usize, ExportError> {
    let file = std::fs::File::create(path).map_err(|e| ExportError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    write_csv(trajectory, file).map_err(|e| ExportError::Csv {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}
