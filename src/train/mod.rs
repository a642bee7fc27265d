pub mod trainer;
pub mod pass_stats;
pub mod train_config;
pub mod loop_fn;

pub use trainer::train_pass;
pub use pass_stats::PassStats;
pub use train_config::{TrainConfig, SnapshotPolicy, SnapshotPoint};
pub use loop_fn::{train_loop, TrainReport};
