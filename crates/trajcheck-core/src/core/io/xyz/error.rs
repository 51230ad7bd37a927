use crate::core::models::element::Element;
use std::io;
use thiserror::Error;

/// Why a raw text is not a valid trajectory. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Header '{value}' is not a positive atom count")]
    MalformedHeader { value: String },
    #[error("Malformed frame on line {line}: {kind}")]
    MalformedFrame { line: usize, kind: FrameErrorKind },
    #[error("'{symbol}' on line {line} is not a valid atom type")]
    InvalidAtomType { symbol: String, line: usize },
    #[error("Malformed coordinate on line {line}: {kind}")]
    MalformedCoordinate {
        line: usize,
        kind: CoordinateErrorKind,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameErrorKind {
    #[error("the declared atom count requires a line that is not present")]
    MissingLine,
    #[error("line is too short to hold an atom symbol (must be at least {min} chars)")]
    LineTooShort { min: usize },
    #[error("trailing lines do not form a complete frame")]
    IncompleteFrame,
    #[error("frame header '{found}' does not repeat the atom count {expected}")]
    AtomCountMismatch { expected: usize, found: String },
    #[error("atom type '{found}' differs from '{expected}' in the first frame")]
    AtomTypeMismatch { expected: Element, found: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateErrorKind {
    #[error("invalid number '{token}'")]
    InvalidNumber { token: String },
    #[error("expected 3 coordinate components, found {found}")]
    ComponentCount { found: usize },
}

impl ValidationError {
    /// The 1-based line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            ValidationError::MalformedHeader { .. } => 1,
            ValidationError::MalformedFrame { line, .. }
            | ValidationError::InvalidAtomType { line, .. }
            | ValidationError::MalformedCoordinate { line, .. } => *line,
        }
    }
}

#[derive(Debug, Error)]
pub enum TrajectoryFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid trajectory: {0}")]
    Invalid(#[from] ValidationError),
}
