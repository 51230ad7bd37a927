use crate::cli::FetchArgs;
use crate::config::{AppConfig, ConfigOverrides, build_config};
use crate::error::{CliError, Result};
use crate::remote::RemoteClient;
use crate::store::DirectoryStore;
use crate::utils::progress::{CliProgressHandler, DownloadBar};
use std::path::Path;
use tracing::info;
use trajcheck::workflows::import::{self, FetchResult, ImportOutcome, ImportRequest};
use trajcheck::workflows::progress::ProgressReporter;

pub async fn run(args: FetchArgs, config_path: Option<&Path>, set_values: &[String]) -> Result<()> {
    let config = build_config(config_path, set_values, &ConfigOverrides::from(&args))?;
    let request = ImportRequest::new(config.base_url.clone(), args.name)?;

    let client = RemoteClient::new(config.timeout)?;
    let bar = DownloadBar::new(request.file_name());
    let fetched = client.fetch(&request.url(), |p| bar.update(p)).await;
    if matches!(fetched, FetchResult::TransportError(_)) {
        bar.abandon();
    }

    let outcome = import_fetched(&request, fetched, &config);
    finish(outcome, &config)
}

fn import_fetched(request: &ImportRequest, fetched: FetchResult, config: &AppConfig) -> ImportOutcome {
    let mut store = DirectoryStore::new(&config.output_directory, config.overwrite);
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the import workflow...");
    import::run(request, fetched, &mut store, &config.decode, &reporter)
}

fn finish(outcome: ImportOutcome, config: &AppConfig) -> Result<()> {
    match &outcome {
        ImportOutcome::Saved {
            file_name,
            atom_count,
            frame_count,
        } => {
            println!("{}", outcome);
            println!(
                "  {} atom(s), {} frame(s) -> {}",
                atom_count,
                frame_count,
                config.output_directory.join(file_name).display()
            );
            Ok(())
        }
        ImportOutcome::Rejected { error, .. } => {
            Err(CliError::ImportFailed(format!("{} ({})", outcome, error)))
        }
        ImportOutcome::TransportFailed { reason, .. }
        | ImportOutcome::StoreFailed { reason, .. } => {
            Err(CliError::ImportFailed(format!("{} ({})", outcome, reason)))
        }
    }
}
