//! # trajcheck Core Library
//!
//! Validation and decoding of fixed-column, multi-frame XYZ atomic trajectories.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a strict downstream dependency:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`DecodedTrajectory`,
//!   `TrajectoryTable`, `Element`) and the pure, I/O-free trajectory codec: frame geometry,
//!   atom-type validation, coordinate decoding, encoding and CSV export.
//!
//! - **[`workflows`]: The Public API.** Ties the codec to its collaborators. The import
//!   workflow takes the result of a remote fetch, validates it and hands the verbatim text to
//!   a [`workflows::import::TrajectoryStore`], producing a user-facing outcome.
//!
//! ## Quick Start
//!
//! ```
//! let text = "2\nframe0\n C  1.000000   2.000000   3.000000\n H  0.500000   0.600000   0.700000\n";
//! let trajectory = trajcheck::validate_and_decode(text).unwrap();
//!
//! assert_eq!(trajectory.atom_count(), 2);
//! assert_eq!(trajectory.frame_count(), 1);
//! assert_eq!(trajectory.coordinates()[(1, 0)].x, 0.5);
//! ```

pub mod core;
pub mod workflows;

pub use crate::core::io::config::{ColumnLayout, DecodeConfig, DecodeConfigBuilder, TrailingLines};
pub use crate::core::io::xyz::{
    ValidationError, XyzFile, is_valid, validate_and_decode, validate_and_decode_with,
};
pub use crate::core::models::element::Element;
pub use crate::core::models::trajectory::{Coordinate, DecodedTrajectory, TrajectoryTable};
