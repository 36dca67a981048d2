use super::WorkflowError;
use crate::core::error::ValidationError;
use crate::core::statistics::{rmse, variance};
use crate::engine::config::LearningCurveConfig;
use crate::engine::kernel::{KernelOperands, build_kernel_matrix};
use crate::engine::progress::ProgressReporter;
use crate::engine::solvers::{KernelRidge, RidgeRegression, to_dmatrix};
use nalgebra::DVector;
use ndarray::{ArrayView, ArrayView1, ArrayView2, Axis, RemoveAxis, Slice};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{info, instrument, warn};

/// Sample indices of the training and test partitions.
///
/// Training subsets are always prefixes of `train`, in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainTestSplit {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

impl TrainTestSplit {
    pub fn new(train: Vec<usize>, test: Vec<usize>) -> Self {
        Self { train, test }
    }

    fn validate(&self, n_samples: usize) -> Result<(), ValidationError> {
        if self.test.is_empty() {
            return Err(ValidationError::EmptyTestSplit);
        }
        if let Some(&index) = self
            .train
            .iter()
            .chain(&self.test)
            .find(|&&i| i >= n_samples)
        {
            return Err(ValidationError::IndexOutOfBounds {
                index,
                len: n_samples,
            });
        }

        let train: HashSet<usize> = self.train.iter().copied().collect();
        if let Some(&index) = self.test.iter().find(|i| train.contains(i)) {
            return Err(ValidationError::OverlappingSplit { index });
        }
        Ok(())
    }
}

/// RMSE percentages per training-subset size, aligned by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LearningCurve {
    pub train_sizes: Vec<usize>,
    pub rmse_train: Vec<f64>,
    pub rmse_test: Vec<f64>,
}

impl LearningCurve {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            train_sizes: Vec::with_capacity(capacity),
            rmse_train: Vec::with_capacity(capacity),
            rmse_test: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, train_size: usize, rmse_train: f64, rmse_test: f64) {
        self.train_sizes.push(train_size);
        self.rmse_train.push(rmse_train);
        self.rmse_test.push(rmse_test);
    }

    pub fn len(&self) -> usize {
        self.train_sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.train_sizes.is_empty()
    }

    /// `(train_size, rmse_train, rmse_test)` triples in fitting order.
    pub fn points(&self) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        self.train_sizes
            .iter()
            .zip(&self.rmse_train)
            .zip(&self.rmse_test)
            .map(|((&n, &train), &test)| (n, train, test))
    }
}

/// Learning curve of ridge regression (with intercept) on a feature matrix.
///
/// For each size `n` in `config.train_sizes` the model is fitted on the first `n`
/// training samples and evaluated on that subset and on the whole test split. Both
/// RMSE values are reported as `100 * rmse / var(y_subset)`, using the population
/// variance of the *training subset* targets for the test error as well.
#[instrument(skip_all, name = "linear_learning_curve")]
pub fn train_predict_linear(
    x: ArrayView2<'_, f64>,
    y: ArrayView1<'_, f64>,
    split: &TrainTestSplit,
    config: &LearningCurveConfig,
) -> Result<LearningCurve, WorkflowError> {
    validate_inputs(x.nrows(), y.len(), split, config)?;

    let x_train = to_dmatrix(x.select(Axis(0), &split.train).view());
    let x_test = to_dmatrix(x.select(Axis(0), &split.test).view());
    let y_train = gather_targets(y, &split.train);
    let y_test = gather_targets(y, &split.test);

    info!(
        n_train = split.train.len(),
        n_test = split.test.len(),
        n_features = x.ncols(),
        "Starting ridge regression learning curve."
    );

    let mut curve = LearningCurve::with_capacity(config.train_sizes.len());
    for &n in &config.train_sizes {
        let x_subset = x_train.rows(0, n).into_owned();
        let y_subset = y_train.rows(0, n).into_owned();

        let model = RidgeRegression::fit(&x_subset, &y_subset, config.regularization)?;
        let predicted_train = model.predict(&x_subset)?;
        let predicted_test = model.predict(&x_test)?;

        let (rmse_train, rmse_test) =
            relative_rmse(&predicted_train, &y_subset, &predicted_test, &y_test)?;
        info!(
            train_size = n,
            rmse_train, rmse_test, "Fitted ridge regression."
        );
        curve.push(n, rmse_train, rmse_test);
    }

    Ok(curve)
}

/// Learning curve of kernel ridge regression with a user-supplied kernel.
///
/// Samples lie along axis 0 of `x` and may have any shape. For each size `n` the
/// training kernel is built as a self kernel over the first `n` training samples and
/// the test kernel as a cross kernel between the test split and that subset; both
/// builds report progress through `reporter`. Normalization follows
/// [`train_predict_linear`].
#[instrument(skip_all, name = "kernel_learning_curve")]
pub fn train_predict_kernel<D, F>(
    x: ArrayView<'_, f64, D>,
    y: ArrayView1<'_, f64>,
    split: &TrainTestSplit,
    config: &LearningCurveConfig,
    kernel: F,
    reporter: &ProgressReporter,
) -> Result<LearningCurve, WorkflowError>
where
    D: RemoveAxis,
    F: Fn(ArrayView<'_, f64, D::Smaller>, ArrayView<'_, f64, D::Smaller>) -> f64 + Sync,
{
    validate_inputs(x.len_of(Axis(0)), y.len(), split, config)?;

    let x_train = x.select(Axis(0), &split.train);
    let x_test = x.select(Axis(0), &split.test);
    let y_train = gather_targets(y, &split.train);
    let y_test = gather_targets(y, &split.test);

    info!(
        n_train = split.train.len(),
        n_test = split.test.len(),
        "Starting kernel ridge regression learning curve."
    );

    let mut curve = LearningCurve::with_capacity(config.train_sizes.len());
    for &n in &config.train_sizes {
        let x_subset = x_train.slice_axis(Axis(0), Slice::from(..n));
        let y_subset = y_train.rows(0, n).into_owned();

        let train_kernel = build_kernel_matrix(
            &kernel,
            KernelOperands::SelfKernel(x_subset.view()),
            &format!("Build train kernel for {} sets", n),
            reporter,
        )?;
        let test_kernel = build_kernel_matrix(
            &kernel,
            KernelOperands::CrossKernel(x_test.view(), x_subset.view()),
            &format!("Build test kernel for {} sets", n),
            reporter,
        )?;

        let model = KernelRidge::fit(&train_kernel, &y_subset, config.regularization)?;
        let predicted_train = model.predict(&train_kernel)?;
        let predicted_test = model.predict(&test_kernel)?;

        let (rmse_train, rmse_test) =
            relative_rmse(&predicted_train, &y_subset, &predicted_test, &y_test)?;
        info!(
            train_size = n,
            rmse_train, rmse_test, "Fitted kernel ridge regression."
        );
        curve.push(n, rmse_train, rmse_test);
    }

    Ok(curve)
}

fn validate_inputs(
    n_samples: usize,
    n_targets: usize,
    split: &TrainTestSplit,
    config: &LearningCurveConfig,
) -> Result<(), ValidationError> {
    if n_targets != n_samples {
        return Err(ValidationError::TargetCountMismatch {
            expected: n_samples,
            found: n_targets,
        });
    }
    split.validate(n_samples)?;

    for &requested in &config.train_sizes {
        if requested == 0 {
            return Err(ValidationError::EmptyTrainingSubset);
        }
        if requested > split.train.len() {
            return Err(ValidationError::TrainingSizeExceeded {
                requested,
                available: split.train.len(),
            });
        }
    }
    Ok(())
}

fn gather_targets(y: ArrayView1<'_, f64>, indices: &[usize]) -> DVector<f64> {
    DVector::from_iterator(indices.len(), indices.iter().map(|&i| y[i]))
}

fn relative_rmse(
    predicted_train: &DVector<f64>,
    y_train: &DVector<f64>,
    predicted_test: &DVector<f64>,
    y_test: &DVector<f64>,
) -> Result<(f64, f64), ValidationError> {
    let reference = variance(y_train.as_slice())?;
    if reference == 0.0 {
        warn!(
            train_size = y_train.len(),
            "Training targets have zero variance; relative RMSE is not finite."
        );
    }

    let rmse_train = 100.0 * rmse(predicted_train.as_slice(), y_train.as_slice())? / reference;
    let rmse_test = 100.0 * rmse(predicted_test.as_slice(), y_test.as_slice())? / reference;
    Ok((rmse_train, rmse_test))
}
