//! # snips
//!
//! Utilities for a machine-learning-potential workflow: pooling LODE descriptors into
//! per-structure feature vectors, measuring learning curves of ridge and kernel ridge
//! models, and writing simulation frames.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless data models and pure functions: species
//!   lists, LODE feature aggregation, statistics, the Lennard-Jones potential, unit
//!   constants, frames and their XYZ writers.
//!
//! - **[`engine`]: The Numerics.** Kernel-matrix construction, ridge and kernel ridge
//!   solvers, learning-curve configuration and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Learning-curve harnesses that combine the two
//!   layers into complete procedures.
//!
//! [`logging`] installs a `tracing` subscriber for programs that want log output.

pub mod core;
pub mod engine;
pub mod logging;
pub mod workflows;
