use nalgebra::{Matrix3, Vector3};
use tracing::warn;

/// Triclinic cell in `(a, b, c, alpha, beta, gamma)` form.
///
/// Lengths are in the units of the cell matrix, angles in degrees. `alpha` is the angle
/// between `b` and `c`, `beta` between `a` and `c`, and `gamma` between `a` and `b`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CellParameters {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl CellParameters {
    /// Converts a cell matrix whose rows are the lattice vectors.
    ///
    /// A degenerate cell (a zero-length vector, or an angle outside `(0°, 180°)`) yields
    /// all-zero parameters.
    pub fn from_cell(cell: &Matrix3<f64>) -> Self {
        let va: Vector3<f64> = cell.row(0).transpose();
        let vb: Vector3<f64> = cell.row(1).transpose();
        let vc: Vector3<f64> = cell.row(2).transpose();

        let params = Self {
            a: va.norm(),
            b: vb.norm(),
            c: vc.norm(),
            alpha: vb.angle(&vc).to_degrees(),
            beta: va.angle(&vc).to_degrees(),
            gamma: va.angle(&vb).to_degrees(),
        };

        if params.is_valid() {
            params
        } else {
            warn!(?params, "Degenerate cell; returning zero cell parameters.");
            Self::default()
        }
    }

    pub fn is_valid(&self) -> bool {
        let lengths_ok = [self.a, self.b, self.c].iter().all(|&l| l > 0.0);
        let angles_ok = [self.alpha, self.beta, self.gamma]
            .iter()
            .all(|&angle| angle > 0.0 && angle < 180.0);
        lengths_ok && angles_ok
    }

    pub fn to_array(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.alpha, self.beta, self.gamma]
    }
}
