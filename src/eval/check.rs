use crate::math::layer::Layer;
use crate::model::perceptron::Perceptron;
use crate::shapes::generator::ShapeKind;
use crate::shapes::stream::SampleStream;

/// Counts how many of `sample_size` rectangle+circle pairs the perceptron
/// gets wrong. The weights are left untouched.
///
/// The stream is reseeded with `seed` first, so two checks with the same seed
/// score exactly the same shapes regardless of what training did in between.
pub fn check_pass(
    perceptron: &Perceptron,
    input: &mut Layer,
    stream: &mut SampleStream,
    sample_size: usize,
    seed: u64,
) -> usize {
    stream.reseed(seed);
    let mut failed = 0;

    for _ in 0..sample_size {
        for kind in [ShapeKind::Rect, ShapeKind::Circle] {
            kind.sample(input, stream);
            if perceptron.is_misclassified(kind, perceptron.feed_forward(input)) {
                failed += 1;
            }
        }
    }

    failed
}

/// Fraction of the `2 * sample_size` trials of a pass that failed.
pub fn fail_rate(failed: usize, sample_size: usize) -> f64 {
    if sample_size == 0 {
        return 0.0;
    }
    failed as f64 / (2 * sample_size) as f64
}
