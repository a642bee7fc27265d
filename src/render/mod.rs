pub mod ppm;
pub mod raw;

pub use ppm::{ColorRamp, render_ppm, render_rgb};
