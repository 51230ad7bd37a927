use crate::core::io::config::DecodeConfig;
use crate::core::io::xyz::{ValidationError, validate_and_decode_with};
use crate::workflows::progress::{Progress, ProgressReporter};
use std::fmt;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// What the transport layer produced for one requested file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    Text(String),
    TransportError(String),
}

/// Persists validated trajectory text under a file name.
pub trait TrajectoryStore {
    type Error: std::error::Error;

    /// Saves `content` verbatim under `file_name`.
    fn save(&mut self, file_name: &str, content: &str) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("File name must not be empty")]
    EmptyName,
    #[error("File name '{0}' must be a plain file name without path components")]
    UnsafeName(String),
}

/// A validated request for one file on a data server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequest {
    base_url: String,
    file_name: String,
}

impl ImportRequest {
    /// Creates a request, rejecting names that could escape the output location.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::EmptyName`] for an empty name and [`ImportError::UnsafeName`]
    /// for names containing path separators or equal to `.` or `..`.
    pub fn new(base_url: impl Into<String>, file_name: impl Into<String>) -> Result<Self, ImportError> {
        let file_name = file_name.into();
        if file_name.is_empty() {
            return Err(ImportError::EmptyName);
        }
        if file_name.contains(['/', '\\']) || file_name == "." || file_name == ".." {
            return Err(ImportError::UnsafeName(file_name));
        }
        Ok(Self {
            base_url: base_url.into(),
            file_name,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The base URL and the file name joined by exactly one `/`.
    pub fn url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.file_name)
    }
}

/// The user-facing result of one import attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    Saved {
        file_name: String,
        atom_count: usize,
        frame_count: usize,
    },
    TransportFailed {
        file_name: String,
        reason: String,
    },
    Rejected {
        file_name: String,
        error: ValidationError,
    },
    StoreFailed {
        file_name: String,
        reason: String,
    },
}

impl ImportOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ImportOutcome::Saved { .. })
    }

    pub fn file_name(&self) -> &str {
        match self {
            ImportOutcome::Saved { file_name, .. }
            | ImportOutcome::TransportFailed { file_name, .. }
            | ImportOutcome::Rejected { file_name, .. }
            | ImportOutcome::StoreFailed { file_name, .. } => file_name,
        }
    }
}

impl fmt::Display for ImportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportOutcome::Saved { file_name, .. } => {
                write!(f, "{file_name} pulled from server and added to the output directory")
            }
            ImportOutcome::TransportFailed { file_name, .. } => {
                write!(f, "{file_name} failed to access site")
            }
            ImportOutcome::Rejected {
                file_name,
                error: ValidationError::InvalidAtomType { .. },
            } => write!(
                f,
                "{file_name} has invalid atom types so no new file will be created"
            ),
            ImportOutcome::Rejected { file_name, .. } => write!(
                f,
                "Attempted to parse {file_name} but ran into errors so no new file will be created"
            ),
            ImportOutcome::StoreFailed { file_name, reason } => {
                write!(f, "{file_name} passed validation but could not be saved: {reason}")
            }
        }
    }
}

/// Validates fetched text and saves it only if it decodes as a trajectory.
///
/// The parser is not invoked on a transport failure, and the store is not touched unless
/// validation succeeds. Nothing here panics; every failure becomes an [`ImportOutcome`].
#[instrument(skip_all, name = "import_workflow", fields(file = request.file_name()))]
pub fn run<S: TrajectoryStore>(
    request: &ImportRequest,
    fetched: FetchResult,
    store: &mut S,
    config: &DecodeConfig,
    reporter: &ProgressReporter,
) -> ImportOutcome {
    let file_name = request.file_name().to_string();

    let text = match fetched {
        FetchResult::Text(text) => text,
        FetchResult::TransportError(reason) => {
            warn!(url = %request.url(), %reason, "Fetch failed.");
            return ImportOutcome::TransportFailed { file_name, reason };
        }
    };

    reporter.report(Progress::PhaseStart { name: "Validation" });
    let decoded = validate_and_decode_with(&text, config);
    reporter.report(Progress::PhaseFinish);

    let trajectory = match decoded {
        Ok(trajectory) => trajectory,
        Err(error) => {
            warn!(%error, "Fetched text is not a valid trajectory.");
            return ImportOutcome::Rejected { file_name, error };
        }
    };
    reporter.report(Progress::Message(format!(
        "{} atom(s), {} frame(s)",
        trajectory.atom_count(),
        trajectory.frame_count()
    )));

    reporter.report(Progress::PhaseStart { name: "Saving" });
    let saved = store.save(&file_name, &text);
    reporter.report(Progress::PhaseFinish);

    match saved {
        Ok(()) => {
            info!(
                atoms = trajectory.atom_count(),
                frames = trajectory.frame_count(),
                "Trajectory saved."
            );
            ImportOutcome::Saved {
                file_name,
                atom_count: trajectory.atom_count(),
                frame_count: trajectory.frame_count(),
            }
        }
        Err(e) => ImportOutcome::StoreFailed {
            file_name,
            reason: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    const VALID: &str = "1\nmethane fragment\n C  0.0 0.0 0.0\n";

    #[derive(Default)]
    struct MemoryStore {
        files: HashMap<String, String>,
        fail: bool,
    }

    #[derive(Debug, Error)]
    #[error("disk full")]
    struct DiskFull;

    impl TrajectoryStore for MemoryStore {
        type Error = DiskFull;

        fn save(&mut self, file_name: &str, content: &str) -> Result<(), DiskFull> {
            if self.fail {
                return Err(DiskFull);
            }
            self.files.insert(file_name.to_string(), content.to_string());
            Ok(())
        }
    }

    fn import(fetched: FetchResult, store: &mut MemoryStore) -> ImportOutcome {
        let request = ImportRequest::new("http://example.org/data/", "run.xyz").unwrap();
        run(
            &request,
            fetched,
            store,
            &DecodeConfig::default(),
            &ProgressReporter::new(),
        )
    }

    #[test]
    fn request_rejects_unsafe_names() {
        assert_eq!(ImportRequest::new("http://x", ""), Err(ImportError::EmptyName));
        for name in ["..", ".", "a/b.xyz", "..\\b.xyz"] {
            assert_eq!(
                ImportRequest::new("http://x", name),
                Err(ImportError::UnsafeName(name.to_string()))
            );
        }
    }

    #[test]
    fn url_joins_with_a_single_slash() {
        let with_slash = ImportRequest::new("http://example.org/data/", "a.xyz").unwrap();
        let without = ImportRequest::new("http://example.org/data", "a.xyz").unwrap();
        assert_eq!(with_slash.url(), "http://example.org/data/a.xyz");
        assert_eq!(without.url(), with_slash.url());
    }

    #[test]
    fn valid_text_is_saved_verbatim() {
        let mut store = MemoryStore::default();
        let outcome = import(FetchResult::Text(VALID.to_string()), &mut store);

        assert_eq!(
            outcome,
            ImportOutcome::Saved {
                file_name: "run.xyz".into(),
                atom_count: 1,
                frame_count: 1
            }
        );
        assert!(outcome.is_success());
        assert_eq!(store.files.get("run.xyz").map(String::as_str), Some(VALID));
        assert_eq!(
            outcome.to_string(),
            "run.xyz pulled from server and added to the output directory"
        );
    }

    #[test]
    fn transport_failure_skips_parsing_and_saving() {
        let mut store = MemoryStore::default();
        let outcome = import(FetchResult::TransportError("timeout".into()), &mut store);

        assert!(!outcome.is_success());
        assert!(store.files.is_empty());
        assert_eq!(outcome.to_string(), "run.xyz failed to access site");
    }

    #[test]
    fn invalid_atom_types_get_their_own_message() {
        let mut store = MemoryStore::default();
        let outcome = import(
            FetchResult::Text("1\nx\n Xe 0.0 0.0 0.0\n".into()),
            &mut store,
        );

        assert!(store.files.is_empty());
        assert_eq!(
            outcome.to_string(),
            "run.xyz has invalid atom types so no new file will be created"
        );
    }

    #[test]
    fn other_parse_errors_leave_store_untouched() {
        let mut store = MemoryStore::default();
        let outcome = import(FetchResult::Text("abc\nframe0\n".into()), &mut store);

        assert!(matches!(
            outcome,
            ImportOutcome::Rejected {
                error: ValidationError::MalformedHeader { .. },
                ..
            }
        ));
        assert!(store.files.is_empty());
        assert_eq!(
            outcome.to_string(),
            "Attempted to parse run.xyz but ran into errors so no new file will be created"
        );
    }

    #[test]
    fn store_failure_is_reported() {
        let mut store = MemoryStore {
            fail: true,
            ..MemoryStore::default()
        };
        let outcome = import(FetchResult::Text(VALID.to_string()), &mut store);

        assert_eq!(
            outcome,
            ImportOutcome::StoreFailed {
                file_name: "run.xyz".into(),
                reason: "disk full".into()
            }
        );
    }

    #[test]
    fn progress_summarizes_the_trajectory_between_phases() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            let label = match event {
                Progress::PhaseStart { name } => format!("start {name}"),
                Progress::PhaseFinish => "finish".to_string(),
                Progress::Message(message) => message,
            };
            events.lock().unwrap().push(label);
        }));
        let request = ImportRequest::new("http://example.org", "run.xyz").unwrap();
        let mut store = MemoryStore::default();

        let text = format!("{VALID}1\nsecond\n C  1.0 0.0 0.0\n");
        let outcome = run(
            &request,
            FetchResult::Text(text),
            &mut store,
            &DecodeConfig::default(),
            &reporter,
        );
        drop(reporter);

        assert!(outcome.is_success());
        assert_eq!(
            events.into_inner().unwrap(),
            vec![
                "start Validation",
                "finish",
                "1 atom(s), 2 frame(s)",
                "start Saving",
                "finish"
            ]
        );
    }

    #[test]
    fn rejected_text_reports_no_summary() {
        let messages = Mutex::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::Message(_) = event {
                *messages.lock().unwrap() += 1;
            }
        }));
        let request = ImportRequest::new("http://example.org", "run.xyz").unwrap();

        run(
            &request,
            FetchResult::Text("abc\nframe0\n".into()),
            &mut MemoryStore::default(),
            &DecodeConfig::default(),
            &reporter,
        );
        drop(reporter);

        assert_eq!(messages.into_inner().unwrap(), 0);
    }
}
