//! # Core Module
//!
//! This module provides the data models and the trajectory codec of trajcheck.
//!
//! ## Overview
//!
//! A trajectory file is a sequence of frames. Every frame starts with a line holding the
//! atom count and a free-form comment line, followed by one fixed-column line per atom: the
//! element symbol in columns 1-2 and three space-separated coordinates after it. The atom
//! ordering, and therefore the element of each atom slot, is the same in every frame.
//!
//! ## Architecture
//!
//! - **Trajectory Representation** ([`models`]) - Element vocabulary, coordinate table and the
//!   decoded trajectory
//! - **File I/O** ([`io`]) - Fixed-column XYZ decoding and encoding, decode configuration and
//!   CSV export
//!
//! Decoding is a pure function over a borrowed text buffer. It is fail-fast: the first
//! violation aborts the pipeline with a typed [`io::xyz::ValidationError`] and no partially
//! filled trajectory is ever exposed.

pub mod io;
pub mod models;
