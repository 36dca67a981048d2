//! # Core Module
//!
//! Stateless data models and pure functions shared by the rest of the crate.
//!
//! - **Species and features** ([`species`], [`lode`]) - ordered species lists and the
//!   pooling of per-atom LODE descriptors into fixed-length structure features
//! - **Structures and files** ([`models`], [`io`], [`utils`]) - frames with periodic cells,
//!   triclinic cell parameters, and XYZ writers
//! - **Numerics** ([`statistics`], [`potentials`], [`constants`]) - error metrics, the
//!   Lennard-Jones formula, and energy unit conversions
//! - **Validation** ([`error`]) - the error raised for malformed shapes, labels, and indices

pub mod constants;
pub mod error;
pub mod io;
pub mod lode;
pub mod models;
pub mod potentials;
pub mod species;
pub mod statistics;
pub mod utils;
