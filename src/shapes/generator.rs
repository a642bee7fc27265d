use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::math::layer::Layer;

/// The two classes the perceptron learns to tell apart.
///
/// Rectangles are the class that should score at or below the bias, circles
/// the class that should score at or above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rect,
    Circle,
}

impl ShapeKind {
    /// Clears `layer` and draws one random shape of this kind into it.
    pub fn sample<R: Rng + ?Sized>(self, layer: &mut Layer, rng: &mut R) {
        match self {
            ShapeKind::Rect   => random_rect(layer, rng),
            ShapeKind::Circle => random_circle(layer, rng),
        }
    }
}

/// Uniform integer in `[low, high)`.
///
/// # Panics
/// Panics if `low >= high`.
pub fn rand_range<R: Rng + ?Sized>(rng: &mut R, low: i32, high: i32) -> i32 {
    assert!(low < high, "empty sampling range [{low}, {high})");
    rng.gen_range(low..high)
}

/// Clears `layer` and fills one randomly placed, randomly sized rectangle
/// with 1.0. Width is drawn below `cols - x`, height below `rows - x`, each
/// bound floored to 2.
pub fn random_rect<R: Rng + ?Sized>(layer: &mut Layer, rng: &mut R) {
    let cols = layer.cols as i32;
    let rows = layer.rows as i32;
    layer.fill(0.0);

    let x = rand_range(rng, 0, cols);
    let y = rand_range(rng, 0, rows);

    let w = (cols - x).max(2);
    let w = rand_range(rng, 1, w);

    // The height bound is taken from the column, not the row; a rectangle
    // that runs past the bottom edge is clipped by `fill_rect`.
    let h = (rows - x).max(2);
    let h = rand_range(rng, 1, h);

    layer.fill_rect(x, y, w, h, 1.0);
}

/// Clears `layer` and fills one randomly placed circle with 1.0. The radius
/// is drawn below the largest value that keeps the circle inside all four
/// edges (floored to 2 so the draw range is never empty).
pub fn random_circle<R: Rng + ?Sized>(layer: &mut Layer, rng: &mut R) {
    let cols = layer.cols as i32;
    let rows = layer.rows as i32;
    layer.fill(0.0);

    let cx = rand_range(rng, 0, cols);
    let cy = rand_range(rng, 0, rows);

    let r = cx.min(cy).min(cols - cx).min(rows - cy).max(2);
    let r = rand_range(rng, 1, r);

    layer.fill_circle(cx, cy, r, 1.0);
}
