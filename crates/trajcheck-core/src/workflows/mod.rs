//! # Workflows Module
//!
//! High-level entry points that connect the trajectory codec to the world around it.
//!
//! - **Import Workflow** ([`import`]) - Takes the result of fetching a named trajectory from
//!   a remote data server, validates it, and persists the verbatim text through a
//!   [`import::TrajectoryStore`] only if validation succeeds.
//! - **Progress Reporting** ([`progress`]) - Phase events a front end can turn into
//!   spinners or progress bars.

pub mod import;
pub mod progress;
