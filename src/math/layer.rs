use serde::{Serialize, Deserialize};
use std::ops::{AddAssign, SubAssign};

/// A dense rows×cols grid of `f32` activations, stored row-major.
///
/// The same type holds both the sampled input pattern and the perceptron's
/// weights. Every fill operation clamps to the grid bounds, so a shape that
/// hangs off an edge only touches the in-bounds cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub rows: usize,
    pub cols: usize,
    data: Vec<f32>,
}

impl Layer {
    pub fn zeros(rows: usize, cols: usize) -> Layer {
        assert!(rows > 0 && cols > 0, "Layer must have at least one row and one column");
        Layer {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    pub fn from_data(rows: usize, cols: usize, data: Vec<f32>) -> Layer {
        assert_eq!(
            data.len(),
            rows * cols,
            "Layer data length mismatch: expected {}, got {}",
            rows * cols,
            data.len()
        );
        Layer { rows, cols, data }
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    /// Value at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.index(x, y)]
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, value: f32) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn fill(&mut self, value: f32) {
        self.data.iter_mut().for_each(|cell| *cell = value);
    }

    // Extents are widened to i64 so corners plus sizes never overflow.
    fn clamp_x(&self, x: i64) -> usize {
        x.clamp(0, self.cols as i64 - 1) as usize
    }

    fn clamp_y(&self, y: i64) -> usize {
        y.clamp(0, self.rows as i64 - 1) as usize
    }

    /// Writes `value` into the rectangle with top-left corner `(x, y)` and
    /// size `w`×`h`, clipped to the layer.
    ///
    /// # Panics
    /// Panics if `w` or `h` is not positive.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, value: f32) {
        assert!(w > 0, "rectangle width must be positive, got {w}");
        assert!(h > 0, "rectangle height must be positive, got {h}");
        let x0 = self.clamp_x(x as i64);
        let y0 = self.clamp_y(y as i64);
        let x1 = self.clamp_x(x0 as i64 + w as i64 - 1);
        let y1 = self.clamp_y(y0 as i64 + h as i64 - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.set(x, y, value);
            }
        }
    }

    /// Writes `value` into every cell whose centre lies within distance `r`
    /// of `(cx, cy)`, i.e. `dx² + dy² <= r²`.
    ///
    /// # Panics
    /// Panics if `r` is not positive.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, r: i32, value: f32) {
        assert!(r > 0, "circle radius must be positive, got {r}");
        let (cx, cy, r) = (cx as i64, cy as i64, r as i64);
        let x0 = self.clamp_x(cx - r);
        let y0 = self.clamp_y(cy - r);
        let x1 = self.clamp_x(cx + r);
        let y1 = self.clamp_y(cy + r);
        let r2 = r * r;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as i64 - cx;
                let dy = y as i64 - cy;
                if dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy)) <= r2 {
                    self.set(x, y, value);
                }
            }
        }
    }

    /// Sum of the elementwise product with `other`.
    pub fn dot(&self, other: &Layer) -> f32 {
        self.assert_same_shape(other);
        self.data.iter().zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Smallest and largest cell values.
    pub fn min_max(&self) -> (f32, f32) {
        self.data.iter().fold((f32::MAX, f32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }

    /// Number of cells that are not exactly zero.
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0.0).count()
    }

    fn assert_same_shape(&self, other: &Layer) {
        if self.rows != other.rows || self.cols != other.cols {
            panic!(
                "Layers are of incorrect sizes: {}x{} vs {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )
        }
    }
}

impl AddAssign<&Layer> for Layer {
    fn add_assign(&mut self, rhs: &Layer) {
        self.assert_same_shape(rhs);
        for (dst, src) in self.data.iter_mut().zip(rhs.data.iter()) {
            *dst += src;
        }
    }
}

impl SubAssign<&Layer> for Layer {
    fn sub_assign(&mut self, rhs: &Layer) {
        self.assert_same_shape(rhs);
        for (dst, src) in self.data.iter_mut().zip(rhs.data.iter()) {
            *dst -= src;
        }
    }
}
