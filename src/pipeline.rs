//! The full run: check the untrained model, train, check again.

use serde::Serialize;

use crate::artifacts::writer::ArtifactWriter;
use crate::config::PerceptronConfig;
use crate::error::Result;
use crate::eval::check::{check_pass, fail_rate};
use crate::math::layer::Layer;
use crate::model::perceptron::Perceptron;
use crate::shapes::stream::SampleStream;
use crate::train::loop_fn::{train_loop, TrainReport};
use crate::train::pass_stats::PassStats;

/// Progress reported while a run is under way, in this order: the untrained
/// check, one `Pass` per training pass, the trained check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunEvent<'a> {
    Untrained { fail_rate: f64 },
    Pass(&'a PassStats),
    Trained { fail_rate: f64 },
}

/// What a run measured. `weights` is the trained weight layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub untrained_failures: usize,
    pub untrained_fail_rate: f64,
    pub trained_failures: usize,
    pub trained_fail_rate: f64,
    pub training: TrainReport,
    #[serde(skip)]
    pub weights: Layer,
}

#[derive(Serialize)]
struct RunSummary<'a> {
    config: &'a PerceptronConfig,
    report: &'a RunReport,
}

/// Runs the check → train → check pipeline with fresh zero weights.
///
/// With a `writer`, training snapshots follow `config.snapshot`, and the final
/// weights (`weights.<ext>`, `weights.bin`) plus `run.json` are written once
/// the second check is done.
pub fn run(config: &PerceptronConfig, writer: Option<&ArtifactWriter>) -> Result<RunReport> {
    run_with_events(config, writer, |_| {})
}

/// Same as `run`, reporting each check and training pass to `on_event` as
/// soon as it completes.
pub fn run_with_events<E>(
    config: &PerceptronConfig,
    writer: Option<&ArtifactWriter>,
    mut on_event: E,
) -> Result<RunReport>
where
    E: FnMut(RunEvent<'_>),
{
    config.validate()?;

    let mut perceptron = Perceptron::new(config.rows, config.cols, config.bias);
    let mut input = Layer::zeros(config.rows, config.cols);
    let mut stream = SampleStream::new(config.check_seed);

    let untrained_failures = check_pass(&perceptron, &mut input, &mut stream, config.sample_size, config.check_seed);
    let untrained_fail_rate = fail_rate(untrained_failures, config.sample_size);
    tracing::debug!(untrained_failures, "untrained check done");
    on_event(RunEvent::Untrained { fail_rate: untrained_fail_rate });

    let train_config = config.train_config();
    let training = train_loop(&mut perceptron, &mut input, &mut stream, &train_config, |point, weights| {
        match writer {
            Some(w) => w.snapshot(point, weights).map(|_| ()),
            None => Ok(()),
        }
    }, |stats| on_event(RunEvent::Pass(stats)))?;

    let trained_failures = check_pass(&perceptron, &mut input, &mut stream, config.sample_size, config.check_seed);
    let trained_fail_rate = fail_rate(trained_failures, config.sample_size);
    tracing::debug!(trained_failures, "trained check done");
    on_event(RunEvent::Trained { fail_rate: trained_fail_rate });

    let report = RunReport {
        untrained_failures,
        untrained_fail_rate,
        trained_failures,
        trained_fail_rate,
        training,
        weights: perceptron.weights,
    };

    if let Some(w) = writer {
        w.write_image("weights", &report.weights)?;
        w.write_raw("weights", &report.weights)?;
        w.write_json("run.json", &RunSummary { config, report: &report })?;
    }

    Ok(report)
}
