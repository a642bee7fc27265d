use serde::{Serialize, Deserialize};

/// Per-pass training statistics emitted by `train_loop`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the training
/// loop sends one `PassStats` value at the end of every completed pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassStats {
    /// 1-based pass number.
    pub pass: usize,
    /// Maximum number of passes for this run.
    pub total_passes: usize,
    /// Weight adjustments made during this pass.
    pub adjustments: usize,
    /// `adjustments / (2 * sample_size)`: the share of this pass's samples
    /// that were misclassified when they were scored.
    pub fail_rate: f64,
    /// Wall-clock duration of this pass in milliseconds.
    pub elapsed_ms: u64,
}
