//! Layered configuration: built-in defaults, then the TOML file, then `-S key=value`
//! overrides, then explicit command-line flags.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;

pub use builder::{ConfigOverrides, build_config};
pub use models::AppConfig;
