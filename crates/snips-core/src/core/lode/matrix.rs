use super::pairs::aggregate_structure;
use crate::core::error::ValidationError;
use crate::core::species::{SpeciesLabels, SpeciesList};
use ndarray::{Array2, ArrayView5, Axis};
use tracing::debug;

/// Builds the per-structure LODE feature matrix of a batch.
///
/// `raw_batch` has shape `(n_structures, n_atoms, n_species, n_radial, n_angular)` and
/// `structures[i]` supplies the atom labels of structure `i`. Row `i` of the result is
/// the flattened [`PairFeatures`](super::PairFeatures) of structure `i`, so every row has
/// length `n_species² * n_radial * n_angular` regardless of which species it contains.
pub fn build_feature_matrix<S: SpeciesLabels>(
    raw_batch: ArrayView5<'_, f64>,
    structures: &[S],
    species: &SpeciesList,
) -> Result<Array2<f64>, ValidationError> {
    let (n_structures, _, n_slots, n_radial, n_angular) = raw_batch.dim();

    if n_structures != structures.len() {
        return Err(ValidationError::StructureCountMismatch {
            expected: n_structures,
            found: structures.len(),
        });
    }
    if n_slots != species.len() {
        return Err(ValidationError::SpeciesSlotMismatch {
            expected: species.len(),
            found: n_slots,
        });
    }

    let width = n_slots * n_slots * n_radial * n_angular;
    let mut matrix = Array2::zeros((n_structures, width));

    for (i, (structure, mut row)) in structures
        .iter()
        .zip(matrix.axis_iter_mut(Axis(0)))
        .enumerate()
    {
        let features = aggregate_structure(
            raw_batch.index_axis(Axis(0), i),
            species,
            structure.species_labels(),
        )?;
        row.assign(&features.flatten());
    }

    debug!(n_structures, width, "Built LODE feature matrix.");
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array5, s};

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn feature_matrix_rows_have_fixed_width_for_any_composition() {
        let species = SpeciesList::new(["O", "H", "Na"]).unwrap();
        let raw = Array5::from_elem((3, 2, 3, 2, 4), 1.0);
        let structures = vec![
            labels(&["O", "H"]),
            labels(&["H", "H"]),
            labels(&["Na", "Na"]),
        ];

        let matrix = build_feature_matrix(raw.view(), &structures, &species).unwrap();

        assert_eq!(matrix.dim(), (3, 9 * 2 * 4));
    }

    #[test]
    fn feature_matrix_row_matches_flattened_single_structure() {
        let species = SpeciesList::new(["O", "H"]).unwrap();
        let raw = Array5::from_shape_fn((2, 3, 2, 2, 2), |(f, i, j, k, l)| {
            (f * 10_000 + i * 1000 + j * 100 + k * 10 + l) as f64
        });
        let structures = vec![labels(&["O", "H", "H"]), labels(&["H", "H", "H"])];

        let matrix = build_feature_matrix(raw.view(), &structures, &species).unwrap();

        for (f, structure) in structures.iter().enumerate() {
            let single = aggregate_structure(raw.slice(s![f, .., .., .., ..]), &species, structure)
                .unwrap();
            assert_eq!(matrix.row(f).to_vec(), single.flatten().to_vec());
        }
    }

    #[test]
    fn feature_matrix_zero_pads_absent_center_species() {
        let species = SpeciesList::new(["O", "H"]).unwrap();
        let raw = Array5::from_elem((1, 2, 2, 1, 1), 1.0);
        let structures = vec![labels(&["H", "H"])];

        let matrix = build_feature_matrix(raw.view(), &structures, &species).unwrap();

        // (O, O), (O, H) are zero; (H, O), (H, H) each sum two atoms.
        assert_eq!(matrix.row(0).to_vec(), vec![0.0, 0.0, 2.0, 2.0]);
    }

    #[test]
    fn feature_matrix_rejects_structure_count_mismatch() {
        let species = SpeciesList::new(["O", "H"]).unwrap();
        let raw = Array5::<f64>::zeros((3, 1, 2, 1, 1));
        let structures = vec![labels(&["O"]), labels(&["H"])];

        let result = build_feature_matrix(raw.view(), &structures, &species);

        assert_eq!(
            result,
            Err(ValidationError::StructureCountMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn feature_matrix_rejects_species_slot_mismatch() {
        let species = SpeciesList::new(["O", "H"]).unwrap();
        let raw = Array5::<f64>::zeros((1, 1, 3, 1, 1));
        let structures = vec![labels(&["O"])];

        let result = build_feature_matrix(raw.view(), &structures, &species);

        assert_eq!(
            result,
            Err(ValidationError::SpeciesSlotMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn feature_matrix_of_empty_batch_has_zero_rows() {
        let species = SpeciesList::new(["O", "H"]).unwrap();
        let raw = Array5::<f64>::zeros((0, 4, 2, 3, 2));
        let structures: Vec<Vec<String>> = Vec::new();

        let matrix = build_feature_matrix(raw.view(), &structures, &species).unwrap();

        assert_eq!(matrix.dim(), (0, 4 * 3 * 2));
    }
}
