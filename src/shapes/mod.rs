pub mod generator;
pub mod stream;

pub use generator::{ShapeKind, random_rect, random_circle, rand_range};
pub use stream::SampleStream;
