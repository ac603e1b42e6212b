//! Hex color string encoding and decoding
//!
//! The canonical form everywhere in this crate is lowercase `#rrggbb`.
//! Parsing is lenient about case and a missing leading `#`; output is
//! always canonical.

use crate::error::{ColorError, Result};
use crate::RgbPixel;

/// Encode an RGB triple as a canonical lowercase hex string
pub fn rgb_to_hex(rgb: RgbPixel) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Decode a hex color string to an RGB triple
///
/// Accepts `#rrggbb` or `rrggbb`, any case.
///
/// # Errors
///
/// Returns `ColorError::DataFormat` if the string is not exactly six hex
/// digits after the optional `#`.
pub fn hex_to_rgb(hex: &str) -> Result<RgbPixel> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(ColorError::data_format(
            "hex",
            hex,
            format!("expected 6 hex digits, got {}", digits.len()),
        ));
    }

    let channel = |range: std::ops::Range<usize>, name: &str| -> Result<u8> {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|e| ColorError::data_format(name, hex, e.to_string()))
    };

    Ok([
        channel(0..2, "hex.red")?,
        channel(2..4, "hex.green")?,
        channel(4..6, "hex.blue")?,
    ])
}

/// Canonicalize a hex color string to lowercase `#rrggbb`
///
/// # Errors
///
/// Returns `ColorError::DataFormat` on anything that does not decode.
pub fn canonicalize(hex: &str) -> Result<String> {
    Ok(rgb_to_hex(hex_to_rgb(hex)?))
}
