//! Writers for plain-text coordinate files.
//!
//! Both supported formats are XYZ variants: an extended XYZ file carrying the cell in a
//! `Lattice=` comment line, and the i-PI flavour carrying `CELL(abcABC)` parameters
//! together with a step and bead index.

pub mod traits;
pub mod xyz;
