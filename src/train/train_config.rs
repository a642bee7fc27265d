use std::sync::mpsc;
use serde::{Serialize, Deserialize};
use crate::train::pass_stats::PassStats;

/// When the weight layer is written out as an image during training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotPolicy {
    #[default]
    Never,
    /// After every single weight adjustment.
    EveryUpdate,
    /// Once at the end of every pass.
    EveryPass,
}

/// Identifies one snapshot: the 1-based pass and, for `EveryUpdate`, the
/// 1-based adjustment counter across the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotPoint {
    pub pass: usize,
    pub update: Option<usize>,
}

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `passes`      — upper bound on training passes; the loop stops earlier
///                   as soon as a pass makes no adjustments
/// - `sample_size` — rectangle+circle pairs drawn per pass
/// - `train_seed`  — the sample stream is reseeded with this before every pass
/// - `snapshot`    — when to hand the weights to the snapshot callback
/// - `progress_tx` — optional channel sender; one `PassStats` is sent per
///                   completed pass. A dropped receiver does not stop training.
pub struct TrainConfig {
    pub passes: usize,
    pub sample_size: usize,
    pub train_seed: u64,
    pub snapshot: SnapshotPolicy,
    pub progress_tx: Option<mpsc::Sender<PassStats>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with no snapshots and no progress channel.
    pub fn new(passes: usize, sample_size: usize, train_seed: u64) -> Self {
        TrainConfig {
            passes,
            sample_size,
            train_seed,
            snapshot: SnapshotPolicy::Never,
            progress_tx: None,
        }
    }
}
