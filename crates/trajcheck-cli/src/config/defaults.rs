use std::path::PathBuf;
use trajcheck::TrailingLines;

pub const DEFAULT_BASE_URL: &str = "http://people.missouristate.edu/riqbal/data";

pub struct DefaultsConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub output_directory: PathBuf,
    pub overwrite: bool,
    pub coordinate_column: usize,
    pub trailing_lines: TrailingLines,
    pub normalize_line_endings: bool,
    pub verify_frames: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let layout = trajcheck::ColumnLayout::default();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            output_directory: PathBuf::from("."),
            overwrite: false,
            coordinate_column: layout.coordinate_column,
            trailing_lines: TrailingLines::default(),
            normalize_line_endings: false,
            verify_frames: false,
        }
    }
}
