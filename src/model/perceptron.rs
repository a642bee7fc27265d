use serde::{Serialize, Deserialize};

use crate::math::layer::Layer;
use crate::shapes::generator::ShapeKind;

/// Single-layer perceptron: one weight per grid cell and a fixed bias that
/// the raw weighted sum is compared against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Perceptron {
    pub weights: Layer,
    pub bias: f32,
}

impl Perceptron {
    /// All-zero weights of the given size.
    pub fn new(rows: usize, cols: usize, bias: f32) -> Perceptron {
        Perceptron {
            weights: Layer::zeros(rows, cols),
            bias,
        }
    }

    /// Raw weighted sum of `input`. No activation, no normalisation.
    pub fn feed_forward(&self, input: &Layer) -> f32 {
        input.dot(&self.weights)
    }

    /// Whether `score` lands on the wrong side of the bias for `kind`.
    pub fn is_misclassified(&self, kind: ShapeKind, score: f32) -> bool {
        match kind {
            ShapeKind::Rect   => score > self.bias,
            ShapeKind::Circle => score < self.bias,
        }
    }

    /// Scores `input` as an example of `kind` and, if it is misclassified,
    /// moves the weights by the raw input pattern: subtract for rectangles,
    /// add for circles. Returns whether the weights changed.
    pub fn adjust(&mut self, input: &Layer, kind: ShapeKind) -> bool {
        let score = self.feed_forward(input);
        if !self.is_misclassified(kind, score) {
            return false;
        }
        match kind {
            ShapeKind::Rect   => self.weights -= input,
            ShapeKind::Circle => self.weights += input,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(value: f32) -> Layer {
        let mut layer = Layer::zeros(4, 4);
        layer.fill_rect(0, 0, 2, 2, value);
        layer
    }

    #[test]
    fn zero_weights_score_zero() {
        let p = Perceptron::new(4, 4, 20.0);
        assert_eq!(p.feed_forward(&block(1.0)), 0.0);
        assert!(!p.is_misclassified(ShapeKind::Rect, 0.0));
        assert!(p.is_misclassified(ShapeKind::Circle, 0.0));
    }

    #[test]
    fn circle_below_bias_is_added() {
        let mut p = Perceptron::new(4, 4, 2.0);
        let input = block(1.0);
        assert!(p.adjust(&input, ShapeKind::Circle));
        assert_eq!(p.weights, input);
        // Score is now 4.0, above the bias.
        assert!(!p.adjust(&input, ShapeKind::Circle));
    }

    #[test]
    fn rect_above_bias_is_subtracted() {
        let input = block(1.0);
        let mut p = Perceptron {
            weights: block(3.0),
            bias: 2.0,
        };
        assert!(p.adjust(&input, ShapeKind::Rect));
        assert_eq!(p.weights, block(2.0));
        assert_eq!(p.feed_forward(&input), 8.0);
    }

    #[test]
    fn scores_exactly_at_bias_are_correct_for_both_classes() {
        let p = Perceptron {
            weights: block(1.0),
            bias: 4.0,
        };
        let input = block(1.0);
        assert!(!p.is_misclassified(ShapeKind::Rect, p.feed_forward(&input)));
        assert!(!p.is_misclassified(ShapeKind::Circle, p.feed_forward(&input)));
    }
}
