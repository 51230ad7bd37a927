//! # Core Models Module
//!
//! Data structures describing a decoded trajectory.
//!
//! ## Key Components
//!
//! - [`element`] - The whitelisted element vocabulary used to type atom slots
//! - [`trajectory`] - Frame geometry, the atom × frame coordinate table and the decoded
//!   trajectory that bundles them with the atom types
//!
//! ## Usage
//!
//! ```
//! use nalgebra::Point3;
//! use trajcheck::core::models::{element::Element, trajectory::{DecodedTrajectory, TrajectoryTable}};
//!
//! let table = TrajectoryTable::from_frames(vec![vec![Point3::new(0.0, 0.0, 0.0)]]).unwrap();
//! let trajectory = DecodedTrajectory::new(vec![Element::O], vec!["water oxygen".into()], table).unwrap();
//! assert_eq!(trajectory.atom_count(), 1);
//! ```

pub mod element;
pub mod trajectory;
