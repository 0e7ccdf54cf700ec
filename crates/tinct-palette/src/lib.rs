//! Dominant color extraction through median-cut quantization.

pub mod error;
pub mod quantize;

pub use error::PaletteError;
pub use quantize::dominant_color;

/// Formats an RGB triple as a lowercase `#rrggbb` string.
pub fn hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_and_zero_padded() {
        assert_eq!(hex([0, 0, 0]), "#000000");
        assert_eq!(hex([255, 255, 255]), "#ffffff");
        assert_eq!(hex([1, 10, 100]), "#010a64");
        assert_eq!(hex([0xab, 0xcd, 0xef]), "#abcdef");
    }
}
