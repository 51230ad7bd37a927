use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::{DecodeArgs, ExportArgs, FetchArgs, ValidateArgs};
use crate::error::{CliError, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use trajcheck::DecodeConfig;
use trajcheck::core::io::config::PADDED_COORDINATE_COLUMN;

/// Values given explicitly on the command line. They win over every other layer.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub output_directory: Option<PathBuf>,
    pub overwrite: bool,
    pub decode: DecodeArgs,
}

impl From<&FetchArgs> for ConfigOverrides {
    fn from(args: &FetchArgs) -> Self {
        Self {
            base_url: args.base_url.clone(),
            output_directory: args.output_dir.clone(),
            overwrite: args.force,
            decode: args.decode.clone(),
        }
    }
}

impl From<&ValidateArgs> for ConfigOverrides {
    fn from(args: &ValidateArgs) -> Self {
        Self {
            decode: args.decode.clone(),
            ..Self::default()
        }
    }
}

impl From<&ExportArgs> for ConfigOverrides {
    fn from(args: &ExportArgs) -> Self {
        Self {
            decode: args.decode.clone(),
            ..Self::default()
        }
    }
}

pub fn build_config(
    config_path: Option<&Path>,
    set_values: &[String],
    overrides: &ConfigOverrides,
) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();
    let file_config = FileConfig::load(config_path)?;
    let mut file_config = apply_set_values(file_config, set_values)?;

    let server = file_config.server.take().unwrap_or_default();
    let base_url = overrides
        .base_url
        .clone()
        .or(server.base_url)
        .unwrap_or_else(|| defaults.base_url.clone());
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(CliError::Config(format!(
            "Base URL '{}' must start with http:// or https://",
            base_url
        )));
    }

    let timeout_secs = server.timeout_secs.unwrap_or(defaults.timeout_secs);
    if timeout_secs == 0 {
        return Err(CliError::Config(
            "`server.timeout-secs` must be greater than zero".to_string(),
        ));
    }

    let output = file_config.output.take().unwrap_or_default();
    let output_directory = overrides
        .output_directory
        .clone()
        .or(output.directory)
        .unwrap_or_else(|| defaults.output_directory.clone());
    let overwrite = overrides.overwrite || output.overwrite.unwrap_or(defaults.overwrite);

    let decode = merge_decode(&overrides.decode, file_config, &defaults)?;

    Ok(AppConfig {
        base_url,
        timeout: Duration::from_secs(timeout_secs),
        output_directory,
        overwrite,
        decode,
    })
}

fn merge_decode(
    args: &DecodeArgs,
    mut file_config: FileConfig,
    defaults: &DefaultsConfig,
) -> Result<DecodeConfig> {
    let file_decode = file_config.decode.take().unwrap_or_default();

    let coordinate_column = if args.padded {
        PADDED_COORDINATE_COLUMN
    } else {
        args.coordinate_column
            .or(file_decode.coordinate_column)
            .unwrap_or(defaults.coordinate_column)
    };
    let trailing_lines = args
        .trailing_lines
        .or(file_decode.trailing_lines)
        .unwrap_or(defaults.trailing_lines);
    let normalize_line_endings = args.normalize_line_endings
        || file_decode
            .normalize_line_endings
            .unwrap_or(defaults.normalize_line_endings);
    let verify_frames =
        args.verify_frames || file_decode.verify_frames.unwrap_or(defaults.verify_frames);

    DecodeConfig::builder()
        .coordinate_column(coordinate_column)
        .trailing_lines(trailing_lines)
        .normalize_line_endings(normalize_line_endings)
        .verify_frames(verify_frames)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "server.base-url" => {
                config.server.get_or_insert_with(Default::default).base_url =
                    Some(value_str.to_string());
            }
            "server.timeout-secs" => {
                config.server.get_or_insert_with(Default::default).timeout_secs =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "output.directory" => {
                config.output.get_or_insert_with(Default::default).directory =
                    Some(PathBuf::from(value_str));
            }
            "output.overwrite" => {
                config.output.get_or_insert_with(Default::default).overwrite =
                    Some(parse_value(key, value_str, "boolean")?);
            }
            "decode.coordinate-column" => {
                config
                    .decode
                    .get_or_insert_with(Default::default)
                    .coordinate_column = Some(parse_value(key, value_str, "integer")?);
            }
            "decode.trailing-lines" => {
                config.decode.get_or_insert_with(Default::default).trailing_lines =
                    Some(value_str.parse().map_err(|e| {
                        CliError::Config(format!("Invalid value for {}: {}", key, e))
                    })?);
            }
            "decode.normalize-line-endings" => {
                config
                    .decode
                    .get_or_insert_with(Default::default)
                    .normalize_line_endings = Some(parse_value(key, value_str, "boolean")?);
            }
            "decode.verify-frames" => {
                config.decode.get_or_insert_with(Default::default).verify_frames =
                    Some(parse_value(key, value_str, "boolean")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
