use crate::remote::DownloadProgress;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;
use trajcheck::workflows::progress::{Progress, ProgressCallback};

const SPINNER_TICK_MS: u64 = 80;

/// Drives a single spinner from workflow phase events.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    pub fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::new(0)
            .with_style(spinner_style())
            .with_message("Initializing...");
        pb.set_draw_target(target);
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::PhaseStart { name } => {
                    pb_guard.reset();
                    pb_guard.set_style(spinner_style());
                    pb_guard.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    pb_guard.set_message(name.to_string());
                }
                Progress::PhaseFinish => {
                    pb_guard.disable_steady_tick();
                    pb_guard.finish_and_clear();
                }
                Progress::Message(msg) => {
                    pb_guard.println(format!("  {}", msg));
                }
            }
        })
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg}")
        .expect("Failed to create spinner style template")
}

fn download_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})",
    )
    .expect("Failed to create download style template")
    .progress_chars("#>-")
}

/// A byte-counting bar for one HTTP download.
pub struct DownloadBar {
    pb: ProgressBar,
}

impl DownloadBar {
    pub fn new(name: &str) -> Self {
        Self::with_draw_target(name, ProgressDrawTarget::stderr_with_hz(4))
    }

    pub fn with_draw_target(name: &str, target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::new(0).with_style(download_style());
        pb.set_draw_target(target);
        pb.set_message(name.to_string());
        Self { pb }
    }

    pub fn update(&self, progress: DownloadProgress) {
        match progress {
            DownloadProgress::Started { total_size } => {
                if let Some(size) = total_size {
                    self.pb.set_length(size);
                }
            }
            DownloadProgress::Downloading { downloaded } => {
                if self.pb.length().unwrap_or(0) < downloaded {
                    self.pb.set_length(downloaded);
                }
                self.pb.set_position(downloaded);
            }
            DownloadProgress::Finished => self.pb.finish_and_clear(),
        }
    }

    pub fn abandon(&self) {
        self.pb.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn hidden_handler() -> CliProgressHandler {
        CliProgressHandler::with_draw_target(ProgressDrawTarget::hidden())
    }

    #[test]
    fn handler_initializes_in_a_clean_state() {
        let handler = hidden_handler();
        let pb = handler.pb.lock().unwrap();
        assert_eq!(pb.length(), Some(0));
        assert!(pb.is_finished());
    }

    #[test]
    fn callback_follows_phases() {
        let handler = hidden_handler();
        let callback = handler.get_callback();

        callback(Progress::PhaseStart { name: "Validation" });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.message(), "Validation");
            assert!(!pb.is_finished());
        }

        callback(Progress::Message("3 atoms".into()));
        callback(Progress::PhaseFinish);
        assert!(handler.pb.lock().unwrap().is_finished());
    }

    #[test]
    fn callback_is_thread_safe() {
        let handler = hidden_handler();
        let callback = handler.get_callback();

        thread::spawn(move || {
            callback(Progress::PhaseStart { name: "Saving" });
            callback(Progress::PhaseFinish);
        })
        .join()
        .unwrap();

        assert!(handler.pb.lock().unwrap().is_finished());
    }

    #[test]
    fn download_bar_tracks_bytes() {
        let bar = DownloadBar::with_draw_target("run.xyz", ProgressDrawTarget::hidden());

        bar.update(DownloadProgress::Started { total_size: Some(100) });
        bar.update(DownloadProgress::Downloading { downloaded: 40 });
        assert_eq!(bar.pb.length(), Some(100));
        assert_eq!(bar.pb.position(), 40);

        bar.update(DownloadProgress::Downloading { downloaded: 140 });
        assert_eq!(bar.pb.length(), Some(140));

        bar.update(DownloadProgress::Finished);
        assert!(bar.pb.is_finished());
    }
}
