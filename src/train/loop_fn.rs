use std::time::Instant;

use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::eval::check::fail_rate;
use crate::math::layer::Layer;
use crate::model::perceptron::Perceptron;
use crate::shapes::stream::SampleStream;
use crate::train::pass_stats::PassStats;
use crate::train::train_config::{SnapshotPolicy, SnapshotPoint, TrainConfig};
use crate::train::trainer::train_pass;

/// Outcome of a `train_loop` run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    /// Number of passes that actually ran.
    pub passes_run: usize,
    /// Whether the loop stopped because a pass made no adjustments.
    pub converged: bool,
    /// 0-based index of the pass the loop exited on, `None` if no pass ran.
    pub last_pass: Option<usize>,
    /// Adjustment count of every pass, in order.
    pub adjustments: Vec<usize>,
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `perceptron` for up to `config.passes` passes.
///
/// # Arguments
/// - `perceptron`  — modified in place
/// - `input`       — scratch layer every sample is drawn into
/// - `stream`      — reseeded with `config.train_seed` before every pass, so
///                   each pass replays the same samples
/// - `config`      — pass budget, sample size, seed, snapshot policy
/// - `on_snapshot` — receives the weights at the points chosen by
///                   `config.snapshot`
/// - `on_pass`     — called with the stats of every completed pass
///
/// # Early termination
/// The loop stops after the first pass that makes zero adjustments. There is
/// no other early exit.
pub fn train_loop<F, P>(
    perceptron: &mut Perceptron,
    input: &mut Layer,
    stream: &mut SampleStream,
    config: &TrainConfig,
    mut on_snapshot: F,
    mut on_pass: P,
) -> Result<TrainReport>
where
    F: FnMut(SnapshotPoint, &Layer) -> Result<()>,
    P: FnMut(&PassStats),
{
    let mut report = TrainReport {
        passes_run: 0,
        converged: false,
        last_pass: None,
        adjustments: Vec::new(),
    };
    let mut updates = 0;

    for pass in 0..config.passes {
        let t_start = Instant::now();

        stream.reseed(config.train_seed);
        let adjustments = train_pass(perceptron, input, stream, config.sample_size, |weights| {
            updates += 1;
            if config.snapshot == SnapshotPolicy::EveryUpdate {
                let point = SnapshotPoint { pass: pass + 1, update: Some(updates) };
                on_snapshot(point, weights)?;
            }
            Ok(())
        })?;

        let stats = PassStats {
            pass: pass + 1,
            total_passes: config.passes,
            adjustments,
            fail_rate: fail_rate(adjustments, config.sample_size),
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };
        tracing::debug!(pass = stats.pass, adjustments, elapsed_ms = stats.elapsed_ms, "pass done");
        on_pass(&stats);

        if config.snapshot == SnapshotPolicy::EveryPass {
            on_snapshot(SnapshotPoint { pass: pass + 1, update: None }, &perceptron.weights)?;
        }

        if let Some(ref tx) = config.progress_tx {
            // Progress is best effort; a gone receiver must not change training.
            let _ = tx.send(stats);
        }

        report.passes_run += 1;
        report.last_pass = Some(pass);
        report.adjustments.push(adjustments);

        if adjustments == 0 {
            report.converged = true;
            break;
        }
    }

    if report.converged {
        tracing::debug!(passes = report.passes_run, "training converged");
    } else if config.passes > 0 {
        tracing::warn!(passes = report.passes_run, "training hit the pass cap without converging");
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn fresh() -> (Perceptron, Layer, SampleStream) {
        (Perceptron::new(20, 20, 20.0), Layer::zeros(20, 20), SampleStream::new(0))
    }

    #[test]
    fn zero_passes_runs_nothing() {
        let (mut p, mut input, mut stream) = fresh();
        let config = TrainConfig::new(0, 25, 69);
        let report = train_loop(&mut p, &mut input, &mut stream, &config, |_, _| Ok(()), |_| {}).unwrap();
        assert_eq!(report.passes_run, 0);
        assert_eq!(report.last_pass, None);
        assert!(!report.converged);
        assert_eq!(p.weights, Layer::zeros(20, 20));
    }

    #[test]
    fn stops_at_first_quiet_pass() {
        let (mut p, mut input, mut stream) = fresh();
        let config = TrainConfig::new(2000, 25, 69);
        let report = train_loop(&mut p, &mut input, &mut stream, &config, |_, _| Ok(()), |_| {}).unwrap();

        assert_eq!(report.adjustments.len(), report.passes_run);
        if report.converged {
            assert_eq!(*report.adjustments.last().unwrap(), 0);
            assert_eq!(report.last_pass, Some(report.passes_run - 1));
            assert!(report.adjustments[..report.passes_run - 1].iter().all(|&a| a > 0));
        } else {
            assert_eq!(report.passes_run, 2000);
            assert!(report.adjustments.iter().all(|&a| a > 0));
        }
    }

    #[test]
    fn quiet_first_pass_exits_at_index_zero() {
        // With a zero bias and zero weights every score sits exactly on the
        // bias, which is correct for both classes.
        let (mut p, mut input, mut stream) = fresh();
        p.bias = 0.0;
        let config = TrainConfig::new(2000, 25, 69);
        let report = train_loop(&mut p, &mut input, &mut stream, &config, |_, _| Ok(()), |_| {}).unwrap();
        assert!(report.converged);
        assert_eq!(report.passes_run, 1);
        assert_eq!(report.last_pass, Some(0));
        assert_eq!(report.adjustments, vec![0]);
    }

    #[test]
    fn unreachable_bias_runs_every_pass() {
        let (mut p, mut input, mut stream) = fresh();
        p.bias = 1.0e9;
        let config = TrainConfig::new(10, 25, 69);
        let report = train_loop(&mut p, &mut input, &mut stream, &config, |_, _| Ok(()), |_| {}).unwrap();
        assert!(!report.converged);
        assert_eq!(report.passes_run, 10);
        assert_eq!(report.last_pass, Some(9));
    }

    #[test]
    fn empty_passes_report_a_zero_fail_rate() {
        let (mut p, mut input, mut stream) = fresh();
        let config = TrainConfig::new(3, 0, 69);
        let mut stats = Vec::new();
        let report = train_loop(&mut p, &mut input, &mut stream, &config, |_, _| Ok(()), |s| {
            stats.push(s.clone())
        })
        .unwrap();
        assert!(report.converged);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].fail_rate, 0.0);
    }

    #[test]
    fn on_pass_sees_every_pass_in_order() {
        let (mut p, mut input, mut stream) = fresh();
        let config = TrainConfig::new(5, 25, 69);
        let mut seen = Vec::new();
        let report = train_loop(&mut p, &mut input, &mut stream, &config, |_, _| Ok(()), |s| {
            seen.push((s.pass, s.adjustments))
        })
        .unwrap();
        let expected: Vec<(usize, usize)> =
            report.adjustments.iter().enumerate().map(|(i, &a)| (i + 1, a)).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn passes_replay_the_same_samples() {
        let (mut p1, mut input, mut stream) = fresh();
        let config = TrainConfig::new(1, 25, 69);
        train_loop(&mut p1, &mut input, &mut stream, &config, |_, _| Ok(()), |_| {}).unwrap();
        // Draw from the stream so the second run starts from a different state.
        let _ = crate::shapes::generator::rand_range(&mut stream, 0, 10);
        let (mut p2, _, _) = fresh();
        train_loop(&mut p2, &mut input, &mut stream, &config, |_, _| Ok(()), |_| {}).unwrap();
        assert_eq!(p1.weights, p2.weights);
    }

    #[test]
    fn progress_and_snapshots_follow_policy() {
        let (mut p, mut input, mut stream) = fresh();
        let (tx, rx) = mpsc::channel();
        let mut config = TrainConfig::new(3, 25, 69);
        config.snapshot = SnapshotPolicy::EveryPass;
        config.progress_tx = Some(tx);

        let mut points = Vec::new();
        let report = train_loop(&mut p, &mut input, &mut stream, &config, |point, _| {
            points.push(point);
            Ok(())
        }, |_| {})
        .unwrap();
        drop(config);

        let stats: Vec<PassStats> = rx.iter().collect();
        assert_eq!(stats.len(), report.passes_run);
        assert_eq!(points.len(), report.passes_run);
        assert!(points.iter().all(|pt| pt.update.is_none()));
        for (i, s) in stats.iter().enumerate() {
            assert_eq!(s.pass, i + 1);
            assert_eq!(s.adjustments, report.adjustments[i]);
            assert_eq!(s.fail_rate, s.adjustments as f64 / 50.0);
        }
    }

    #[test]
    fn every_update_snapshots_count_all_adjustments() {
        let (mut p, mut input, mut stream) = fresh();
        let mut config = TrainConfig::new(4, 25, 69);
        config.snapshot = SnapshotPolicy::EveryUpdate;

        let mut points = Vec::new();
        let report = train_loop(&mut p, &mut input, &mut stream, &config, |point, _| {
            points.push(point);
            Ok(())
        }, |_| {})
        .unwrap();

        let total: usize = report.adjustments.iter().sum();
        assert_eq!(points.len(), total);
        for (i, pt) in points.iter().enumerate() {
            assert_eq!(pt.update, Some(i + 1));
        }
    }
}
