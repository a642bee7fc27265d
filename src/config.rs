//! Run configuration.
//!
//! There is no command line: `PerceptronConfig::default()` carries the
//! reference constants, and a config can be saved to / loaded from JSON the
//! same way the run summary is recorded.

use std::path::PathBuf;

use serde::{Serialize, Deserialize};

use crate::artifacts::writer::ArtifactFormat;
use crate::error::{PerceptronError, Result};
use crate::render::ppm::ColorRamp;
use crate::train::train_config::{SnapshotPolicy, TrainConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerceptronConfig {
    /// Grid height.
    pub rows: usize,
    /// Grid width.
    pub cols: usize,
    /// Decision threshold for the raw weighted sum.
    pub bias: f32,
    /// Rectangle+circle pairs per training or check pass.
    pub sample_size: usize,
    /// Upper bound on training passes.
    pub train_passes: usize,
    pub train_seed: u64,
    pub check_seed: u64,
    /// Output pixels per grid cell along each axis.
    pub ppm_scale: u32,
    pub ramp: ColorRamp,
    pub data_folder: PathBuf,
    pub snapshot: SnapshotPolicy,
    pub format: ArtifactFormat,
}

impl Default for PerceptronConfig {
    fn default() -> Self {
        PerceptronConfig {
            rows: 20,
            cols: 20,
            bias: 20.0,
            sample_size: 75,
            train_passes: 2000,
            train_seed: 69,
            check_seed: 420,
            ppm_scale: 25,
            ramp: ColorRamp::MinMax,
            data_folder: PathBuf::from("data"),
            snapshot: SnapshotPolicy::Never,
            format: ArtifactFormat::Ppm,
        }
    }
}

impl PerceptronConfig {
    /// Rejects values the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(PerceptronError::Config(format!(
                "grid must be at least 1x1, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.rows > i32::MAX as usize || self.cols > i32::MAX as usize {
            return Err(PerceptronError::Config("grid dimensions overflow i32".into()));
        }
        if self.sample_size == 0 {
            return Err(PerceptronError::Config("sample_size must be at least 1".into()));
        }
        if self.ppm_scale == 0 {
            return Err(PerceptronError::Config("ppm_scale must be at least 1".into()));
        }
        let fits = |cells: usize| {
            u32::try_from(cells).ok().and_then(|c| c.checked_mul(self.ppm_scale)).is_some()
        };
        if !fits(self.cols) || !fits(self.rows) {
            return Err(PerceptronError::Config(format!(
                "{}x{} grid at scale {} does not fit a u32 image size",
                self.rows, self.cols, self.ppm_scale
            )));
        }
        if self.train_seed == self.check_seed {
            return Err(PerceptronError::Config(format!(
                "train_seed and check_seed must differ, both are {}",
                self.train_seed
            )));
        }
        if let ColorRamp::Fixed { range } = self.ramp {
            if !(range > 0.0) {
                return Err(PerceptronError::Config(format!(
                    "fixed colour range must be positive, got {range}"
                )));
            }
        }
        Ok(())
    }

    /// Training parameters for `train_loop`.
    pub fn train_config(&self) -> TrainConfig {
        let mut config = TrainConfig::new(self.train_passes, self.sample_size, self.train_seed);
        config.snapshot = self.snapshot;
        config
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path).map_err(|e| PerceptronError::io(path, e))?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a config from a JSON file. Missing fields take their
    /// default values.
    pub fn load_json(path: &str) -> Result<PerceptronConfig> {
        let file = std::fs::File::open(path).map_err(|e| PerceptronError::io(path, e))?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
