//! Feature construction from Long-Distance Equivariant (LODE) descriptors.
//!
//! A LODE calculator produces, for every atom of a structure, a block of coefficients
//! binned by neighbor species, radial channel, and angular channel. This module pools
//! those per-atom blocks into one fixed-length vector per structure:
//!
//! - [`aggregate_structure`] sums the blocks of all atoms sharing a center species into
//!   a dense (center, neighbor, channel) array, [`PairFeatures`].
//! - [`build_feature_matrix`] flattens the pooled features of a batch of structures into
//!   the rows of a feature matrix suitable for ridge or kernel ridge regression.
//!
//! The flattening order is fixed: center species in species-list order, then neighbor
//! species in species-list order, then radial channels with angular channels innermost.

mod matrix;
mod pairs;

pub use matrix::build_feature_matrix;
pub use pairs::{PairFeatures, aggregate_structure};
