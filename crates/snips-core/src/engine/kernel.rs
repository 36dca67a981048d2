use super::progress::{Progress, ProgressReporter};
use crate::core::error::ValidationError;
use itertools::iproduct;
use nalgebra::DMatrix;
use ndarray::{ArrayView, Axis, Dimension, RemoveAxis};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The sample collections a Gram matrix is built from. Samples lie along axis 0.
#[derive(Debug, Clone)]
pub enum KernelOperands<'a, D: Dimension> {
    /// One collection against itself. Only the upper triangle is evaluated and the
    /// result is mirrored, so the kernel function must be symmetric.
    SelfKernel(ArrayView<'a, f64, D>),
    /// Two distinct collections. Every cell is evaluated, even if both views hold
    /// identical data.
    CrossKernel(ArrayView<'a, f64, D>, ArrayView<'a, f64, D>),
}

impl<D: RemoveAxis> KernelOperands<'_, D> {
    /// Shape `(n_x, n_y)` of the resulting Gram matrix.
    pub fn output_shape(&self) -> (usize, usize) {
        match self {
            Self::SelfKernel(x) => (x.len_of(Axis(0)), x.len_of(Axis(0))),
            Self::CrossKernel(x, y) => (x.len_of(Axis(0)), y.len_of(Axis(0))),
        }
    }

    fn index_pairs(&self) -> Vec<(usize, usize)> {
        let (n_x, n_y) = self.output_shape();
        match self {
            Self::SelfKernel(_) => (0..n_x)
                .flat_map(|n| (n..n_x).map(move |m| (n, m)))
                .collect(),
            Self::CrossKernel(..) => iproduct!(0..n_x, 0..n_y).collect(),
        }
    }
}

/// Builds the Gram matrix `G[n, m] = kernel(x[n], y[m])`.
///
/// For [`KernelOperands::SelfKernel`] only pairs with `n <= m` are evaluated; the
/// triangle is then mirrored and the diagonal halved back, so `G` is exactly symmetric
/// and each diagonal entry equals a single evaluation.
///
/// One [`Progress::TaskIncrement`] is reported per kernel evaluation, bracketed by a
/// phase named `description`.
#[instrument(skip_all, name = "build_kernel_matrix", fields(description = %description))]
pub fn build_kernel_matrix<D, F>(
    kernel: F,
    operands: KernelOperands<'_, D>,
    description: &str,
    reporter: &ProgressReporter,
) -> Result<DMatrix<f64>, ValidationError>
where
    D: RemoveAxis,
    F: Fn(ArrayView<'_, f64, D::Smaller>, ArrayView<'_, f64, D::Smaller>) -> f64 + Sync,
{
    let (x, y) = match &operands {
        KernelOperands::SelfKernel(x) => (x.view(), x.view()),
        KernelOperands::CrossKernel(x, y) => {
            if x.shape()[1..] != y.shape()[1..] {
                return Err(ValidationError::SampleShapeMismatch {
                    left: x.shape()[1..].to_vec(),
                    right: y.shape()[1..].to_vec(),
                });
            }
            (x.view(), y.view())
        }
    };

    let (n_x, n_y) = operands.output_shape();
    let pairs = operands.index_pairs();

    reporter.report(Progress::PhaseStart {
        name: description.to_string(),
    });
    reporter.report(Progress::TaskStart {
        total: pairs.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = pairs.iter();

    #[cfg(feature = "parallel")]
    let iterator = pairs.par_iter();

    let values: Vec<f64> = iterator
        .map(|&(n, m)| {
            let value = kernel(x.index_axis(Axis(0), n), y.index_axis(Axis(0), m));
            reporter.report(Progress::TaskIncrement { amount: 1 });
            value
        })
        .collect();

    let mut gram = DMatrix::zeros(n_x, n_y);
    for (&(n, m), value) in pairs.iter().zip(values) {
        gram[(n, m)] = value;
    }

    if let KernelOperands::SelfKernel(_) = operands {
        let mirrored = gram.transpose();
        gram += mirrored;
        let doubled_diagonal = DMatrix::from_diagonal(&gram.diagonal()) / 2.0;
        gram -= doubled_diagonal;
    }

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    debug!(
        rows = n_x,
        cols = n_y,
        evaluations = pairs.len(),
        "Built kernel matrix."
    );
    Ok(gram)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::kernels::{dot, summed_linear};
    use ndarray::{Array2, Array3, ArrayView1, arr2};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn quiet() -> ProgressReporter<'static> {
        ProgressReporter::new()
    }

    #[test]
    fn self_kernel_of_ones_is_all_twos() {
        let x = Array2::<f64>::ones((3, 2));
        let gram =
            build_kernel_matrix(dot, KernelOperands::SelfKernel(x.view()), "ones", &quiet())
                .unwrap();

        assert_eq!(gram.shape(), (3, 3));
        assert!(gram.iter().all(|&v| v == 2.0));
    }

    #[test]
    fn self_kernel_is_symmetric_with_single_evaluation_diagonal() {
        let x = arr2(&[[1.0, 0.0], [0.0, 2.0], [1.0, 1.0]]);
        let gram = build_kernel_matrix(dot, KernelOperands::SelfKernel(x.view()), "", &quiet())
            .unwrap();

        let expected = DMatrix::from_row_slice(
            3,
            3,
            &[1.0, 0.0, 1.0, 0.0, 4.0, 2.0, 1.0, 2.0, 2.0],
        );
        assert_eq!(gram, expected);
        assert_eq!(gram, gram.transpose());
    }

    #[test]
    fn cross_kernel_has_shape_of_both_collections() {
        let x = arr2(&[[1.0, 2.0], [3.0, 4.0]]);
        let y = arr2(&[[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]);

        let gram = build_kernel_matrix(
            dot,
            KernelOperands::CrossKernel(x.view(), y.view()),
            "",
            &quiet(),
        )
        .unwrap();

        assert_eq!(gram.shape(), (2, 3));
        for n in 0..2 {
            for m in 0..3 {
                assert_eq!(gram[(n, m)], dot(x.row(n), y.row(m)));
            }
        }
    }

    #[test]
    fn self_kernel_evaluates_only_upper_triangle() {
        let x = Array2::<f64>::ones((4, 3));
        let calls = AtomicUsize::new(0);
        let counting = |a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>| {
            calls.fetch_add(1, Ordering::Relaxed);
            a.dot(&b)
        };

        build_kernel_matrix(&counting, KernelOperands::SelfKernel(x.view()), "", &quiet())
            .unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), 10);

        calls.store(0, Ordering::Relaxed);
        build_kernel_matrix(
            &counting,
            KernelOperands::CrossKernel(x.view(), x.view()),
            "",
            &quiet(),
        )
        .unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), 16);
    }

    #[test]
    fn self_and_cross_kernel_agree_for_identical_data() {
        let x = arr2(&[[0.5, -1.0, 2.0], [1.5, 0.25, -0.75], [3.0, 1.0, 0.0]]);

        let self_gram =
            build_kernel_matrix(dot, KernelOperands::SelfKernel(x.view()), "", &quiet())
                .unwrap();
        let cross_gram = build_kernel_matrix(
            dot,
            KernelOperands::CrossKernel(x.view(), x.view()),
            "",
            &quiet(),
        )
        .unwrap();

        assert_eq!(self_gram, cross_gram);
    }

    #[test]
    fn cross_kernel_rejects_mismatched_sample_shapes() {
        let x = Array2::<f64>::zeros((2, 3));
        let y = Array2::<f64>::zeros((2, 4));

        let result = build_kernel_matrix(
            dot,
            KernelOperands::CrossKernel(x.view(), y.view()),
            "",
            &quiet(),
        );

        assert_eq!(
            result,
            Err(ValidationError::SampleShapeMismatch {
                left: vec![3],
                right: vec![4]
            })
        );
    }

    #[test]
    fn summed_linear_kernel_works_on_per_atom_samples() {
        let x = Array3::from_shape_fn((2, 3, 2), |(s, a, f)| (s + a + f) as f64);

        let gram = build_kernel_matrix(
            summed_linear,
            KernelOperands::SelfKernel(x.view()),
            "",
            &quiet(),
        )
        .unwrap();

        assert_eq!(gram.shape(), (2, 2));
        assert_eq!(
            gram[(0, 1)],
            summed_linear(x.index_axis(Axis(0), 0), x.index_axis(Axis(0), 1))
        );
        assert_eq!(gram[(0, 1)], gram[(1, 0)]);
    }

    #[test]
    fn reports_one_increment_per_evaluation() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter =
            ProgressReporter::with_callback(Box::new(move |p| sink.lock().unwrap().push(p)));
        let x = Array2::<f64>::ones((3, 2));

        build_kernel_matrix(
            dot,
            KernelOperands::SelfKernel(x.view()),
            "Build train kernel for 3 sets",
            &reporter,
        )
        .unwrap();

        let events = events.lock().unwrap();
        assert_eq!(
            events.first(),
            Some(&Progress::PhaseStart {
                name: "Build train kernel for 3 sets".to_string()
            })
        );
        assert_eq!(events[1], Progress::TaskStart { total: 6 });
        let increments = events
            .iter()
            .filter(|e| matches!(e, Progress::TaskIncrement { amount: 1 }))
            .count();
        assert_eq!(increments, 6);
        assert_eq!(
            &events[events.len() - 2..],
            &[Progress::TaskFinish, Progress::PhaseFinish]
        );
    }

    #[test]
    fn empty_collection_yields_empty_matrix() {
        let x = Array2::<f64>::zeros((0, 5));
        let gram = build_kernel_matrix(dot, KernelOperands::SelfKernel(x.view()), "", &quiet())
            .unwrap();
        assert_eq!(gram.shape(), (0, 0));
    }
}
