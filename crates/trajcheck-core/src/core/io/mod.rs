//! Provides input/output functionality for trajectory files.
//!
//! The [`xyz`] module implements the fixed-column XYZ codec: validation and decoding of raw
//! text, and encoding of decoded trajectories back into the same layout. [`config`] holds the
//! options that control decoding, [`traits`] the reader/writer interface shared by file
//! formats, and [`export`] tabular CSV output.

pub mod config;
pub mod export;
pub mod traits;
pub mod xyz;
