use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use serde::{Serialize, Deserialize};

use crate::config::PerceptronConfig;
use crate::error::{PerceptronError, Result};
use crate::math::layer::Layer;
use crate::render::ppm::{render_ppm, render_rgb, ColorRamp};
use crate::render::raw;
use crate::train::train_config::SnapshotPoint;

/// Image container used for rendered layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactFormat {
    /// Binary PPM (`P6`).
    #[default]
    Ppm,
    Png,
}

impl ArtifactFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ArtifactFormat::Ppm => "ppm",
            ArtifactFormat::Png => "png",
        }
    }
}

/// Writes rendered layers, raw dumps and JSON records into one output folder.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    dir: PathBuf,
    scale: u32,
    ramp: ColorRamp,
    format: ArtifactFormat,
}

impl ArtifactWriter {
    /// Creates the output folder (and any missing parents) if needed. An
    /// existing folder is reused.
    pub fn create(
        dir: impl Into<PathBuf>,
        scale: u32,
        ramp: ColorRamp,
        format: ArtifactFormat,
    ) -> Result<ArtifactWriter> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| PerceptronError::io(&dir, e))?;
        tracing::debug!(dir = %dir.display(), "output folder ready");
        Ok(ArtifactWriter { dir, scale, ramp, format })
    }

    pub fn from_config(config: &PerceptronConfig) -> Result<ArtifactWriter> {
        Self::create(&config.data_folder, config.ppm_scale, config.ramp, config.format)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write_bytes(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.dir.join(file_name);
        fs::write(&path, bytes).map_err(|e| PerceptronError::io(&path, e))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "artifact written");
        Ok(path)
    }

    /// Renders `layer` and writes it as `<stem>.<ext>`.
    pub fn write_image(&self, stem: &str, layer: &Layer) -> Result<PathBuf> {
        let file_name = format!("{stem}.{}", self.format.extension());
        match self.format {
            ArtifactFormat::Ppm => self.write_bytes(&file_name, &render_ppm(layer, self.scale, self.ramp)),
            ArtifactFormat::Png => {
                let path = self.dir.join(&file_name);
                render_rgb(layer, self.scale, self.ramp)
                    .save_with_format(&path, ImageFormat::Png)
                    .map_err(|source| PerceptronError::Image { path: path.clone(), source })?;
                tracing::debug!(path = %path.display(), "artifact written");
                Ok(path)
            }
        }
    }

    /// Writes the raw cell dump of `layer` as `<stem>.bin`.
    pub fn write_raw(&self, stem: &str, layer: &Layer) -> Result<PathBuf> {
        self.write_bytes(&format!("{stem}.bin"), &raw::serialize(layer))
    }

    /// Writes one training snapshot of the weights.
    pub fn snapshot(&self, point: SnapshotPoint, weights: &Layer) -> Result<PathBuf> {
        let stem = match point.update {
            Some(update) => format!("weights-p{:04}-u{:06}", point.pass, update),
            None => format!("weights-p{:04}", point.pass),
        };
        self.write_image(&stem, weights)
    }

    /// Writes `value` as pretty-printed JSON to `file_name`.
    pub fn write_json<T: Serialize>(&self, file_name: &str, value: &T) -> Result<PathBuf> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.write_bytes(file_name, &bytes)
    }
}
