use super::atom_types::{line_at, symbol_field};
use super::error::{CoordinateErrorKind, FrameErrorKind, ValidationError};
use super::tokenizer::{FieldTokens, parse_component};
use crate::core::io::config::{ColumnLayout, DecodeConfig};
use crate::core::models::element::Element;
use crate::core::models::trajectory::{Coordinate, FrameGeometry, TrajectoryTable};
use tracing::trace;

/// Parses the three coordinates of one atom line.
pub(crate) fn decode_atom_line(
    line: &str,
    line_number: usize,
    layout: &ColumnLayout,
) -> Result<Coordinate, ValidationError> {
    let malformed = |kind| ValidationError::MalformedCoordinate {
        line: line_number,
        kind,
    };

    let mut tokens = FieldTokens::new(line, layout.coordinate_column);
    let mut components = [0.0_f32; 3];
    for (found, component) in components.iter_mut().enumerate() {
        let token = tokens
            .next()
            .ok_or_else(|| malformed(CoordinateErrorKind::ComponentCount { found }))?;
        *component = parse_component(token).ok_or_else(|| {
            malformed(CoordinateErrorKind::InvalidNumber {
                token: token.to_string(),
            })
        })?;
    }

    let extra = tokens.count();
    if extra > 0 {
        return Err(malformed(CoordinateErrorKind::ComponentCount {
            found: components.len() + extra,
        }));
    }

    let [x, y, z] = components;
    Ok(Coordinate::new(x, y, z))
}

fn verify_frame_header(
    lines: &[&str],
    geometry: &FrameGeometry,
    frame: usize,
) -> Result<(), ValidationError> {
    let index = geometry.frame_start(frame);
    let header = line_at(lines, index)?;
    if header.trim().parse::<usize>().ok() != Some(geometry.atom_count()) {
        return Err(ValidationError::MalformedFrame {
            line: index + 1,
            kind: FrameErrorKind::AtomCountMismatch {
                expected: geometry.atom_count(),
                found: header.trim().to_string(),
            },
        });
    }
    Ok(())
}

fn verify_atom_type(
    line: &str,
    line_number: usize,
    expected: Element,
    layout: &ColumnLayout,
) -> Result<(), ValidationError> {
    let symbol = symbol_field(line, layout).ok_or(ValidationError::MalformedFrame {
        line: line_number,
        kind: FrameErrorKind::LineTooShort {
            min: layout.symbol_end(),
        },
    })?;
    if symbol != expected.symbol() {
        return Err(ValidationError::MalformedFrame {
            line: line_number,
            kind: FrameErrorKind::AtomTypeMismatch {
                expected,
                found: symbol,
            },
        });
    }
    Ok(())
}

/// Decodes every atom line of every complete frame.
///
/// Returns the coordinate table together with the comment line of each frame.
pub(crate) fn decode_frames(
    lines: &[&str],
    geometry: &FrameGeometry,
    atom_types: &[Element],
    config: &DecodeConfig,
) -> Result<(TrajectoryTable, Vec<String>), ValidationError> {
    let mut table = TrajectoryTable::zeroed(geometry.atom_count(), geometry.frame_count());
    let mut comments = Vec::with_capacity(geometry.frame_count());

    for frame in 0..geometry.frame_count() {
        let check_frame = config.verify_frames && frame > 0;
        if check_frame {
            verify_frame_header(lines, geometry, frame)?;
        }
        comments.push(line_at(lines, geometry.comment_line(frame))?.to_string());

        for (atom, element) in atom_types.iter().enumerate() {
            let index = geometry.atom_line(frame, atom);
            let line = line_at(lines, index)?;
            if check_frame {
                verify_atom_type(line, index + 1, *element, &config.layout)?;
            }
            table.set(atom, frame, decode_atom_line(line, index + 1, &config.layout)?);
        }
        trace!(frame, "Decoded frame.");
    }

    Ok((table, comments))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(line: &str) -> Result<Coordinate, ValidationError> {
        decode_atom_line(line, 3, &ColumnLayout::default())
    }

    #[test]
    fn decodes_three_components_with_any_spacing() {
        assert_eq!(
            decode(" C  1.000000   2.000000   3.000000"),
            Ok(Coordinate::new(1.0, 2.0, 3.0))
        );
        assert_eq!(
            decode(" H      -0.5 0.6     0.7   "),
            Ok(Coordinate::new(-0.5, 0.6, 0.7))
        );
    }

    #[test]
    fn padded_layout_skips_columns_before_seven() {
        let layout = ColumnLayout::padded();
        assert_eq!(
            decode_atom_line(" C     1.5 2.5 3.5", 3, &layout),
            Ok(Coordinate::new(1.5, 2.5, 3.5))
        );
        assert_eq!(
            decode_atom_line(" C  1.000000   2.000000   3.000000", 3, &layout),
            Ok(Coordinate::new(0.0, 2.0, 3.0))
        );
    }

    #[test]
    fn missing_component_is_reported_with_count() {
        assert_eq!(
            decode(" H  1.0 2.0"),
            Err(ValidationError::MalformedCoordinate {
                line: 3,
                kind: CoordinateErrorKind::ComponentCount { found: 2 }
            })
        );
        assert_eq!(
            decode(" H"),
            Err(ValidationError::MalformedCoordinate {
                line: 3,
                kind: CoordinateErrorKind::ComponentCount { found: 0 }
            })
        );
    }

    #[test]
    fn extra_components_are_rejected() {
        assert_eq!(
            decode(" H  1.0 2.0 3.0 4.0 5.0"),
            Err(ValidationError::MalformedCoordinate {
                line: 3,
                kind: CoordinateErrorKind::ComponentCount { found: 5 }
            })
        );
    }

    #[test]
    fn invalid_token_is_reported_verbatim() {
        assert_eq!(
            decode(" O  1.0 2,5 3.0"),
            Err(ValidationError::MalformedCoordinate {
                line: 3,
                kind: CoordinateErrorKind::InvalidNumber {
                    token: "2,5".to_string()
                }
            })
        );
    }

    #[test]
    fn carriage_return_after_the_last_token_is_accepted() {
        assert_eq!(
            decode(" O  1.0 2.0 3.0\r"),
            Ok(Coordinate::new(1.0, 2.0, 3.0))
        );
        assert_eq!(
            decode(" O  1.0 2.0 3.0 \r"),
            Err(ValidationError::MalformedCoordinate {
                line: 3,
                kind: CoordinateErrorKind::ComponentCount { found: 4 }
            })
        );
    }

    #[test]
    fn decode_frames_fills_table_and_collects_comments() {
        let lines = [
            "1", "t=0", " H  0.0 0.0 0.0", "1", "t=1", " H  1.0 0.0 0.0",
        ];
        let geometry = FrameGeometry::from_line_count(1, lines.len()).unwrap();
        let (table, comments) =
            decode_frames(&lines, &geometry, &[Element::H], &DecodeConfig::default()).unwrap();

        assert_eq!(comments, vec!["t=0".to_string(), "t=1".to_string()]);
        assert_eq!(table[(0, 1)], Coordinate::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn later_frames_are_not_checked_by_default() {
        let lines = ["1", "a", " H  0 0 0", "7", "b", " C  1 1 1"];
        let geometry = FrameGeometry::from_line_count(1, lines.len()).unwrap();
        assert!(decode_frames(&lines, &geometry, &[Element::H], &DecodeConfig::default()).is_ok());
    }

    #[test]
    fn verify_frames_checks_header_and_atom_types() {
        let config = DecodeConfig::builder().verify_frames(true).build().unwrap();

        let lines = ["1", "a", " H  0 0 0", "7", "b", " H  1 1 1"];
        let geometry = FrameGeometry::from_line_count(1, lines.len()).unwrap();
        assert_eq!(
            decode_frames(&lines, &geometry, &[Element::H], &config),
            Err(ValidationError::MalformedFrame {
                line: 4,
                kind: FrameErrorKind::AtomCountMismatch {
                    expected: 1,
                    found: "7".to_string()
                }
            })
        );

        let lines = ["1", "a", " H  0 0 0", "1", "b", " C  1 1 1"];
        assert_eq!(
            decode_frames(&lines, &geometry, &[Element::H], &config),
            Err(ValidationError::MalformedFrame {
                line: 6,
                kind: FrameErrorKind::AtomTypeMismatch {
                    expected: Element::H,
                    found: "C".to_string()
                }
            })
        );
    }
}
