use crate::{
    error::Result,
    math::layer::Layer,
    model::perceptron::Perceptron,
    shapes::{generator::ShapeKind, stream::SampleStream},
};

/// Runs one training pass of `sample_size` rectangle+circle pairs drawn from
/// `stream` and returns the number of weight adjustments made.
///
/// Each sample is written into `input`, scored, and if it lands on the wrong
/// side of the bias the weights are moved by the raw pattern. `on_update` is
/// called with the new weights after every adjustment; its error aborts the
/// pass.
///
/// The caller is responsible for seeding `stream`.
pub fn train_pass<F>(
    perceptron: &mut Perceptron,
    input: &mut Layer,
    stream: &mut SampleStream,
    sample_size: usize,
    mut on_update: F,
) -> Result<usize>
where
    F: FnMut(&Layer) -> Result<()>,
{
    let mut adjusted = 0;

    for _ in 0..sample_size {
        for kind in [ShapeKind::Rect, ShapeKind::Circle] {
            kind.sample(input, stream);
            if perceptron.adjust(input, kind) {
                adjusted += 1;
                on_update(&perceptron.weights)?;
            }
        }
    }

    Ok(adjusted)
}
