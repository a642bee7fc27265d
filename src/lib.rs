pub mod math;
pub mod shapes;
pub mod model;
pub mod train;
pub mod eval;
pub mod render;
pub mod artifacts;
pub mod config;
pub mod error;
pub mod pipeline;

// Convenience re-exports
pub use math::layer::Layer;
pub use shapes::generator::ShapeKind;
pub use shapes::stream::SampleStream;
pub use model::perceptron::Perceptron;
pub use train::{train_loop, train_pass, TrainConfig, TrainReport};
pub use eval::check::{check_pass, fail_rate};
pub use artifacts::writer::{ArtifactWriter, ArtifactFormat};
pub use config::PerceptronConfig;
pub use error::{PerceptronError, Result};
pub use pipeline::{run, run_with_events, RunEvent, RunReport};
