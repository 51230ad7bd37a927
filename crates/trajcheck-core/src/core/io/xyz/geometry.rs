use super::error::{FrameErrorKind, ValidationError};
use crate::core::io::config::{DecodeConfig, TrailingLines};
use crate::core::models::trajectory::FrameGeometry;
use tracing::{debug, warn};

pub(crate) fn split_lines<'a>(text: &'a str, config: &DecodeConfig) -> Vec<&'a str> {
    text.split('\n')
        .map(|line| {
            if config.normalize_line_endings {
                line.strip_suffix('\r').unwrap_or(line)
            } else {
                line
            }
        })
        .collect()
}

fn parse_atom_count(header: &str) -> Result<usize, ValidationError> {
    match header.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(ValidationError::MalformedHeader {
            value: header.to_string(),
        }),
    }
}

/// Derives the frame layout of `lines` from the atom count on the first line.
///
/// Fails before anything is sized by the declared atom count if the text cannot hold even
/// one frame, so an absurd header never turns into a huge allocation.
pub(crate) fn measure(
    lines: &[&str],
    config: &DecodeConfig,
) -> Result<FrameGeometry, ValidationError> {
    let header = lines.first().copied().unwrap_or_default();
    let atom_count = parse_atom_count(header)?;
    let geometry = FrameGeometry::from_line_count(atom_count, lines.len()).ok_or_else(|| {
        ValidationError::MalformedHeader {
            value: header.to_string(),
        }
    })?;

    if geometry.frame_count() == 0 {
        return Err(ValidationError::MalformedFrame {
            line: lines.len() + 1,
            kind: FrameErrorKind::MissingLine,
        });
    }

    let consumed = geometry.consumed_lines();
    let leftover = &lines[consumed..];
    if leftover.iter().any(|line| !line.trim().is_empty()) {
        match config.trailing_lines {
            TrailingLines::Reject => {
                return Err(ValidationError::MalformedFrame {
                    line: consumed + 1,
                    kind: FrameErrorKind::IncompleteFrame,
                });
            }
            TrailingLines::Ignore => warn!(
                "Ignoring {} trailing line(s) after the last complete frame (line {}).",
                leftover.len(),
                consumed + 1
            ),
        }
    }

    debug!(
        atoms = geometry.atom_count(),
        frames = geometry.frame_count(),
        lines = lines.len(),
        "Measured frame geometry."
    );
    Ok(geometry)
}
