use crate::core::error::ValidationError;
use crate::core::species::SpeciesLabels;
use crate::core::utils::cell::CellParameters;
use nalgebra::{Matrix3, Point3};

/// A single configuration: atom positions, chemical symbols, and the periodic cell.
///
/// The rows of `cell` are the three lattice vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    positions: Vec<Point3<f64>>,
    symbols: Vec<String>,
    cell: Matrix3<f64>,
}

impl Frame {
    pub fn new<S: Into<String>>(
        positions: Vec<Point3<f64>>,
        symbols: impl IntoIterator<Item = S>,
        cell: Matrix3<f64>,
    ) -> Result<Self, ValidationError> {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        if positions.len() != symbols.len() {
            return Err(ValidationError::AtomCountMismatch {
                positions: positions.len(),
                symbols: symbols.len(),
            });
        }
        Ok(Self {
            positions,
            symbols,
            cell,
        })
    }

    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn cell(&self) -> &Matrix3<f64> {
        &self.cell
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn atoms(&self) -> impl Iterator<Item = (&str, &Point3<f64>)> {
        self.symbols.iter().map(String::as_str).zip(&self.positions)
    }

    pub fn cell_parameters(&self) -> CellParameters {
        CellParameters::from_cell(&self.cell)
    }
}

impl SpeciesLabels for Frame {
    fn species_labels(&self) -> &[String] {
        &self.symbols
    }
}
