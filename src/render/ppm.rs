//! Pseudo-colour rendering of a `Layer`.
//!
//! Each cell becomes a `scale`×`scale` block of identical pixels
//! (nearest-neighbour upsampling). The cell value is mapped to a colour by a
//! `ColorRamp`; the result is an `image::RgbImage` that can be written as a
//! binary PPM (`P6`) or handed to the `image` crate for PNG encoding.

use image::{Rgb, RgbImage};
use serde::{Serialize, Deserialize};

use crate::math::layer::Layer;

/// Maps cell values to colours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColorRamp {
    /// Stretches `[min, max]` of the layer onto red (min) → green (max).
    MinMax,
    /// Maps `[-range, range]` linearly: negative values shade towards red,
    /// positive towards blue, zero is black. Values outside saturate.
    Fixed { range: f32 },
}

impl ColorRamp {
    fn pixel(&self, value: f32, min: f32, max: f32) -> Rgb<u8> {
        match *self {
            ColorRamp::MinMax => {
                let span = max - min;
                let s = if span > 0.0 { (value - min) / span } else { 0.0 };
                Rgb([
                    (255.0 * (1.0 - s)).floor() as u8,
                    (255.0 * s).floor() as u8,
                    0,
                ])
            }
            ColorRamp::Fixed { range } => {
                let s = (value / range).clamp(-1.0, 1.0);
                let c = (255.0 * s.abs()).floor() as u8;
                if s < 0.0 {
                    Rgb([c, 0, 0])
                } else {
                    Rgb([0, 0, c])
                }
            }
        }
    }
}

/// Renders `layer` to an RGB image of `(cols * scale) × (rows * scale)`.
///
/// # Panics
/// Panics if `scale` is zero.
pub fn render_rgb(layer: &Layer, scale: u32, ramp: ColorRamp) -> RgbImage {
    assert!(scale > 0, "render scale must be positive");
    let (min, max) = layer.min_max();
    let width = layer.cols as u32 * scale;
    let height = layer.rows as u32 * scale;
    RgbImage::from_fn(width, height, |x, y| {
        let value = layer.get((x / scale) as usize, (y / scale) as usize);
        ramp.pixel(value, min, max)
    })
}

/// Encodes an RGB image as binary PPM: `P6\n<W> <H> 255\n` followed by the
/// raw pixel triples.
pub fn encode_ppm(img: &RgbImage) -> Vec<u8> {
    let header = format!("P6\n{} {} 255\n", img.width(), img.height());
    let mut bytes = Vec::with_capacity(header.len() + img.as_raw().len());
    bytes.extend_from_slice(header.as_bytes());
    bytes.extend_from_slice(img.as_raw());
    bytes
}

/// Renders `layer` straight to PPM bytes.
pub fn render_ppm(layer: &Layer, scale: u32, ramp: ColorRamp) -> Vec<u8> {
    encode_ppm(&render_rgb(layer, scale, ramp))
}
