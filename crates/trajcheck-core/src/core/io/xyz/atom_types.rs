use super::error::{FrameErrorKind, ValidationError};
use crate::core::io::config::ColumnLayout;
use crate::core::models::element::Element;
use crate::core::models::trajectory::FrameGeometry;

/// Reads the symbol field of an atom line.
///
/// The first character of the field is always part of the symbol; the second is appended
/// unless it is a space. Returns `None` if the line ends before the field does.
pub(crate) fn symbol_field(line: &str, layout: &ColumnLayout) -> Option<String> {
    let mut chars = line.chars().skip(layout.symbol_column);
    let first = chars.next()?;
    let second = chars.next()?;

    let mut symbol = String::with_capacity(2);
    symbol.push(first);
    if second != ' ' {
        symbol.push(second);
    }
    Some(symbol)
}

pub(crate) fn line_at<'a>(lines: &[&'a str], index: usize) -> Result<&'a str, ValidationError> {
    lines
        .get(index)
        .copied()
        .ok_or(ValidationError::MalformedFrame {
            line: index + 1,
            kind: FrameErrorKind::MissingLine,
        })
}

/// Validates the atom block of the first frame and returns the element of every atom slot.
///
/// Stops at the first line whose symbol is not whitelisted.
pub(crate) fn read_atom_types(
    lines: &[&str],
    geometry: &FrameGeometry,
    layout: &ColumnLayout,
) -> Result<Vec<Element>, ValidationError> {
    (0..geometry.atom_count())
        .map(|atom| {
            let index = geometry.atom_line(0, atom);
            let line = line_at(lines, index)?;
            let symbol =
                symbol_field(line, layout).ok_or_else(|| ValidationError::MalformedFrame {
                    line: index + 1,
                    kind: FrameErrorKind::LineTooShort {
                        min: layout.symbol_end(),
                    },
                })?;
            Element::from_symbol(&symbol).ok_or(ValidationError::InvalidAtomType {
                symbol,
                line: index + 1,
            })
        })
        .collect()
}
