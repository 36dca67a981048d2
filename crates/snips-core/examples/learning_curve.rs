//! Kernel ridge learning curve on synthetic per-atom features.
//!
//! Run with `cargo run --example learning_curve`.

use ndarray::{Array1, Array3, Axis};
use snips::engine::config::LearningCurveConfig;
use snips::engine::kernels::summed_linear;
use snips::engine::progress::ProgressBarHandler;
use snips::logging::setup_logging;
use snips::workflows::learning_curve::{TrainTestSplit, train_predict_kernel};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logging(1, false, None)?;

    let n_structures = 60;
    let features = Array3::from_shape_fn((n_structures, 8, 4), |(s, a, f)| {
        ((s * 7 + a * 3 + f) % 11) as f64 / 11.0
    });
    let targets: Array1<f64> = features
        .axis_iter(Axis(0))
        .map(|atoms| atoms.sum() + 0.1 * atoms.column(0).sum())
        .collect();

    let split = TrainTestSplit::new((0..48).collect(), (48..n_structures).collect());
    let config = LearningCurveConfig::builder()
        .train_sizes(vec![6, 12, 24, 48])
        .regularization(1e-8)
        .build()?;

    let progress = ProgressBarHandler::new();
    let curve = train_predict_kernel(
        features.view(),
        targets.view(),
        &split,
        &config,
        summed_linear,
        &progress.reporter(),
    )?;

    for (n, train, test) in curve.points() {
        println!("{n:>4}  train {train:>10.4}%  test {test:>10.4}%");
    }
    Ok(())
}
