use super::error::SolverError;
use nalgebra::{DMatrix, DVector};
use ndarray::ArrayView2;
use tracing::debug;

/// Ridge regression with an unpenalized intercept.
#[derive(Debug, Clone, PartialEq)]
pub struct RidgeRegression {
    pub coefficients: DVector<f64>,
    pub intercept: f64,
}

impl RidgeRegression {
    /// Fits `y ≈ X w + b` minimizing `‖y − Xw − b‖² + alpha ‖w‖²`.
    ///
    /// The data are centered first, which removes the intercept from the penalty. With
    /// at most as many features as samples the primal normal equations are solved,
    /// otherwise the dual (sample-space) system.
    pub fn fit(x: &DMatrix<f64>, y: &DVector<f64>, alpha: f64) -> Result<Self, SolverError> {
        check_regularization(alpha)?;
        let (n_samples, n_features) = x.shape();
        if n_samples == 0 {
            return Err(SolverError::NoSamples);
        }
        if y.len() != n_samples {
            return Err(SolverError::Dimension {
                context: "ridge targets",
                expected: n_samples,
                found: y.len(),
            });
        }

        let x_mean = x.row_mean();
        let y_mean = y.mean();
        let mut x_centered = x.clone();
        for mut row in x_centered.row_iter_mut() {
            row -= &x_mean;
        }
        let y_centered = y.add_scalar(-y_mean);

        let coefficients = if n_features <= n_samples {
            let gram = x_centered.tr_mul(&x_centered);
            let rhs = x_centered.tr_mul(&y_centered);
            solve_regularized(gram, alpha, &rhs)?
        } else {
            let gram = &x_centered * x_centered.transpose();
            let dual = solve_regularized(gram, alpha, &y_centered)?;
            x_centered.tr_mul(&dual)
        };
        let intercept = y_mean - x_mean.transpose().dot(&coefficients);

        Ok(Self {
            coefficients,
            intercept,
        })
    }

    pub fn predict(&self, x: &DMatrix<f64>) -> Result<DVector<f64>, SolverError> {
        if x.ncols() != self.coefficients.len() {
            return Err(SolverError::Dimension {
                context: "ridge features",
                expected: self.coefficients.len(),
                found: x.ncols(),
            });
        }
        Ok((x * &self.coefficients).add_scalar(self.intercept))
    }
}

/// Kernel ridge regression on a precomputed kernel, without intercept.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelRidge {
    pub dual_coefficients: DVector<f64>,
}

impl KernelRidge {
    /// Solves `(K + alpha I) a = y` for the training kernel `K`.
    pub fn fit(kernel: &DMatrix<f64>, y: &DVector<f64>, alpha: f64) -> Result<Self, SolverError> {
        check_regularization(alpha)?;
        let (rows, cols) = kernel.shape();
        if rows == 0 {
            return Err(SolverError::NoSamples);
        }
        if rows != cols {
            return Err(SolverError::Dimension {
                context: "square training kernel",
                expected: rows,
                found: cols,
            });
        }
        if y.len() != rows {
            return Err(SolverError::Dimension {
                context: "kernel ridge targets",
                expected: rows,
                found: y.len(),
            });
        }

        let dual_coefficients = solve_regularized(kernel.clone(), alpha, y)?;
        Ok(Self { dual_coefficients })
    }

    /// Predicts from a kernel between new samples (rows) and the training samples (columns).
    pub fn predict(&self, kernel: &DMatrix<f64>) -> Result<DVector<f64>, SolverError> {
        if kernel.ncols() != self.dual_coefficients.len() {
            return Err(SolverError::Dimension {
                context: "prediction kernel columns",
                expected: self.dual_coefficients.len(),
                found: kernel.ncols(),
            });
        }
        Ok(kernel * &self.dual_coefficients)
    }
}

/// Copies a 2-D ndarray view into an owned nalgebra matrix.
pub fn to_dmatrix(array: ArrayView2<'_, f64>) -> DMatrix<f64> {
    let (rows, cols) = array.dim();
    DMatrix::from_fn(rows, cols, |i, j| array[[i, j]])
}

fn check_regularization(alpha: f64) -> Result<(), SolverError> {
    if alpha.is_finite() && alpha > 0.0 {
        Ok(())
    } else {
        Err(SolverError::InvalidRegularization(alpha))
    }
}

fn solve_regularized(
    gram: DMatrix<f64>,
    alpha: f64,
    rhs: &DVector<f64>,
) -> Result<DVector<f64>, SolverError> {
    let size = gram.nrows();
    let system = gram + DMatrix::<f64>::identity(size, size) * alpha;

    if let Some(cholesky) = system.clone().cholesky() {
        let solution = cholesky.solve(rhs);
        if solution.iter().all(|v| v.is_finite()) {
            return Ok(solution);
        }
    }

    debug!(size, "Cholesky solve failed; falling back to SVD least squares.");
    let solution = system
        .svd(true, true)
        .solve(rhs, f64::EPSILON)
        .map_err(|_| SolverError::Singular { size })?;
    if solution.iter().all(|v| v.is_finite()) {
        Ok(solution)
    } else {
        Err(SolverError::Singular { size })
    }
}
