use crate::core::io::config::{PADDED_COORDINATE_COLUMN, SYMBOL_COLUMN, SYMBOL_WIDTH};
use crate::core::models::trajectory::DecodedTrajectory;
use std::io::{self, Write};

const COORDINATE_PRECISION: usize = 6;
const COORDINATE_WIDTH: usize = 10;

/// Writes `trajectory` in the padded fixed-column layout.
///
/// The first coordinate of every atom line starts at column 7, so the output decodes under
/// both the compact and the padded layout.
pub(crate) fn write_trajectory(
    trajectory: &DecodedTrajectory,
    writer: &mut impl Write,
) -> io::Result<()> {
    let padding = " ".repeat(PADDED_COORDINATE_COLUMN - SYMBOL_COLUMN - SYMBOL_WIDTH);
    let lead = " ".repeat(SYMBOL_COLUMN);
    let coordinates = trajectory.coordinates();

    for (frame, comment) in trajectory.comments().iter().enumerate() {
        writeln!(writer, "{}", trajectory.atom_count())?;
        writeln!(writer, "{}", comment.replace('\n', " "))?;
        for (atom, element) in trajectory.atom_types().iter().enumerate() {
            let p = coordinates[(atom, frame)];
            writeln!(
                writer,
                "{lead}{:<sw$}{padding}{:>w$.prec$} {:>w$.prec$} {:>w$.prec$}",
                element.symbol(),
                p.x,
                p.y,
                p.z,
                sw = SYMBOL_WIDTH,
                w = COORDINATE_WIDTH,
                prec = COORDINATE_PRECISION,
            )?;
        }
    }
    Ok(())
}
