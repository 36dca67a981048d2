//! # Engine Module
//!
//! Numerical machinery shared by the learning-curve workflows.
//!
//! - **Kernel matrices** ([`kernel`], [`kernels`]) - Gram matrix construction over any
//!   sample dimensionality, with a symmetric shortcut for self kernels and optional
//!   rayon parallelism behind the `parallel` feature.
//! - **Solvers** ([`solvers`]) - ridge regression with intercept and kernel ridge
//!   regression on precomputed kernels.
//! - **Configuration** ([`config`]) - learning-curve settings, built in code or loaded
//!   from TOML.
//! - **Progress Monitoring** ([`progress`]) - callback-based progress events and a
//!   terminal progress bar that renders them.
//! - **Error Handling** ([`error`]) - solver failures.

pub mod config;
pub mod error;
pub mod kernel;
pub mod kernels;
pub mod progress;
pub mod solvers;
