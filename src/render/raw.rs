use std::path::Path;

use crate::math::layer::Layer;

/// Row-major dump of every cell as a native-endian `f32`, no header.
pub fn serialize(layer: &Layer) -> Vec<u8> {
    layer.as_slice()
        .iter()
        .flat_map(|v| v.to_ne_bytes())
        .collect()
}

/// Loading a raw dump back into a layer is not supported.
///
/// # Panics
/// Always.
pub fn load_raw(_layer: &mut Layer, path: &Path) {
    unimplemented!("loading raw weights from {} is not implemented", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_is_row_major_native_endian() {
        let layer = Layer::from_data(2, 2, vec![1.0, 2.0, 3.0, -0.5]);
        let bytes = serialize(&layer);
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[4..8], &2.0f32.to_ne_bytes());
        assert_eq!(&bytes[12..16], &(-0.5f32).to_ne_bytes());
    }

    #[test]
    #[should_panic(expected = "not implemented")]
    fn load_aborts() {
        let mut layer = Layer::zeros(2, 2);
        load_raw(&mut layer, Path::new("weights.bin"));
    }
}
