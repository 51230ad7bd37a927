use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

/// Column of the first character of the atom symbol field.
pub const SYMBOL_COLUMN: usize = 1;
/// Width of the atom symbol field; the second character is blank for one-letter symbols.
pub const SYMBOL_WIDTH: usize = 2;
/// Column at which coordinates start in files padded to the classic 7-column atom prefix.
pub const PADDED_COORDINATE_COLUMN: usize = 7;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error(
        "Coordinate column {coordinate_column} overlaps the atom symbol field ending at column {symbol_end}"
    )]
    OverlappingColumns {
        coordinate_column: usize,
        symbol_end: usize,
    },
    #[error("Unknown trailing-lines policy '{0}'. Expected 'ignore' or 'reject'.")]
    UnknownTrailingLines(String),
}

/// Character columns of the fields of an atom line (zero-based, counted in characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub symbol_column: usize,
    pub coordinate_column: usize,
}

impl ColumnLayout {
    /// Coordinates are scanned from the first column after the symbol field.
    pub const fn compact() -> Self {
        Self {
            symbol_column: SYMBOL_COLUMN,
            coordinate_column: SYMBOL_COLUMN + SYMBOL_WIDTH,
        }
    }

    /// Coordinates are scanned from column 7; columns 3-6 are treated as padding and never
    /// read.
    pub const fn padded() -> Self {
        Self {
            symbol_column: SYMBOL_COLUMN,
            coordinate_column: PADDED_COORDINATE_COLUMN,
        }
    }

    /// First column after the symbol field.
    pub fn symbol_end(&self) -> usize {
        self.symbol_column + SYMBOL_WIDTH
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.coordinate_column < self.symbol_end() {
            return Err(ConfigError::OverlappingColumns {
                coordinate_column: self.coordinate_column,
                symbol_end: self.symbol_end(),
            });
        }
        Ok(())
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::compact()
    }
}

/// What to do with lines after the last complete frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrailingLines {
    /// Drop them with a warning, whatever they contain.
    #[default]
    Ignore,
    /// Fail with a malformed-frame error unless they are all blank.
    Reject,
}

impl FromStr for TrailingLines {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ignore" => Ok(TrailingLines::Ignore),
            "reject" => Ok(TrailingLines::Reject),
            _ => Err(ConfigError::UnknownTrailingLines(s.to_string())),
        }
    }
}

/// Options controlling how raw text is validated and decoded.
///
/// The default configuration reproduces the permissive behavior of the format: line feeds
/// only, trailing partial frames dropped, atom types read from the first frame only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeConfig {
    pub layout: ColumnLayout,
    pub trailing_lines: TrailingLines,
    /// Strip one `\r` from the end of every line before parsing.
    pub normalize_line_endings: bool,
    /// Check that every frame repeats the atom count and the atom types of the first frame.
    pub verify_frames: bool,
}

impl DecodeConfig {
    pub fn builder() -> DecodeConfigBuilder {
        DecodeConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct DecodeConfigBuilder {
    coordinate_column: Option<usize>,
    trailing_lines: Option<TrailingLines>,
    normalize_line_endings: Option<bool>,
    verify_frames: Option<bool>,
}

impl DecodeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coordinate_column(mut self, column: usize) -> Self {
        self.coordinate_column = Some(column);
        self
    }

    pub fn trailing_lines(mut self, policy: TrailingLines) -> Self {
        self.trailing_lines = Some(policy);
        self
    }

    pub fn normalize_line_endings(mut self, normalize: bool) -> Self {
        self.normalize_line_endings = Some(normalize);
        self
    }

    pub fn verify_frames(mut self, verify: bool) -> Self {
        self.verify_frames = Some(verify);
        self
    }

    pub fn build(self) -> Result<DecodeConfig, ConfigError> {
        let mut layout = ColumnLayout::default();
        if let Some(column) = self.coordinate_column {
            layout.coordinate_column = column;
        }
        layout.validate()?;

        Ok(DecodeConfig {
            layout,
            trailing_lines: self.trailing_lines.unwrap_or_default(),
            normalize_line_endings: self.normalize_line_endings.unwrap_or(false),
            verify_frames: self.verify_frames.unwrap_or(false),
        })
    }
}
