use crate::core::error::ValidationError;
use crate::core::species::SpeciesList;
use itertools::iproduct;
use ndarray::{Array1, Array3, ArrayView1, ArrayView3, ArrayView4, Axis, s};
use tracing::trace;

/// LODE features of one structure, pooled per (center species, neighbor species) pair.
///
/// Values live in a dense `(n_species, n_species, n_channels)` array, where the first
/// axis is the center species, the second the neighbor species (both in species-list
/// order), and the last the flattened radial/angular channels. Every pair is present,
/// whether or not the center species occurs in the structure.
#[derive(Debug, Clone, PartialEq)]
pub struct PairFeatures<'a> {
    species: &'a SpeciesList,
    values: Array3<f64>,
}

impl<'a> PairFeatures<'a> {
    pub fn zeros(species: &'a SpeciesList, channels: usize) -> Self {
        let n = species.len();
        Self {
            species,
            values: Array3::zeros((n, n, channels)),
        }
    }

    pub fn species(&self) -> &SpeciesList {
        self.species
    }

    /// Length of each pair vector (`n_radial * n_angular`).
    pub fn channels(&self) -> usize {
        self.values.len_of(Axis(2))
    }

    /// Number of (center, neighbor) pairs, always `n_species²`.
    pub fn len(&self) -> usize {
        self.species.len() * self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn pair(&self, center: usize, neighbor: usize) -> ArrayView1<'_, f64> {
        self.values.slice(s![center, neighbor, ..])
    }

    pub fn get(&self, center: &str, neighbor: &str) -> Option<ArrayView1<'_, f64>> {
        let c = self.species.index_of(center)?;
        let n = self.species.index_of(neighbor)?;
        Some(self.pair(c, n))
    }

    /// Pair keys in canonical order: center species outer, neighbor species inner.
    pub fn keys(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        let labels = self.species.labels();
        iproduct!(labels.iter(), labels.iter()).map(|(c, n)| (c.as_str(), n.as_str()))
    }

    pub fn as_array(&self) -> ArrayView3<'_, f64> {
        self.values.view()
    }

    /// Concatenates all pair vectors in canonical key order.
    pub fn flatten(&self) -> Array1<f64> {
        self.values.iter().copied().collect()
    }
}

/// Sums the per-atom LODE features of one structure into [`PairFeatures`].
///
/// `raw` has shape `(n_atoms, n_species, n_radial, n_angular)`, where the second axis
/// follows `species`. Atom `i` contributes `raw[i, j, .., ..]` (flattened row-major) to
/// the pair `(atom_labels[i], species[j])`. No normalization is applied.
pub fn aggregate_structure<'a, L: AsRef<str>>(
    raw: ArrayView4<'_, f64>,
    species: &'a SpeciesList,
    atom_labels: &[L],
) -> Result<PairFeatures<'a>, ValidationError> {
    let (n_atoms, n_slots, n_radial, n_angular) = raw.dim();

    if n_slots != species.len() {
        return Err(ValidationError::SpeciesSlotMismatch {
            expected: species.len(),
            found: n_slots,
        });
    }
    if atom_labels.len() != n_atoms {
        return Err(ValidationError::AtomLabelCountMismatch {
            expected: n_atoms,
            found: atom_labels.len(),
        });
    }
    let centers = species.resolve_all(atom_labels)?;

    let mut features = PairFeatures::zeros(species, n_radial * n_angular);
    for (atom, &center) in centers.iter().enumerate() {
        for neighbor in 0..n_slots {
            let block = raw.slice(s![atom, neighbor, .., ..]);
            let mut target = features.values.slice_mut(s![center, neighbor, ..]);
            target
                .iter_mut()
                .zip(block.iter())
                .for_each(|(acc, &value)| *acc += value);
        }
    }

    trace!(
        n_atoms,
        n_species = n_slots,
        n_radial,
        n_angular,
        "Aggregated LODE features for one structure."
    );
    Ok(features)
}
