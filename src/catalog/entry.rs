//! Reference color entries and their load-time validation
//!
//! Raw rows arrive from whatever storage the surrounding application uses
//! (CSV file, embedded table, database) and are validated here exactly once.
//! Malformed rows fail with `ColorError::DataFormat` naming the field and
//! value; the catalog never coerces silently.

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};
use crate::hex;
use crate::RgbPixel;

/// One untyped reference-color row, prior to validation
///
/// Numeric fields are carried as `i64` so that out-of-range values survive
/// long enough to be reported instead of wrapping at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawColorRow {
    pub name: String,
    pub hex: String,
    pub r: i64,
    pub g: i64,
    pub b: i64,
}

impl RawColorRow {
    /// Convenience constructor for programmatic rows
    pub fn new(name: &str, hex: &str, r: i64, g: i64, b: i64) -> Self {
        Self {
            name: name.to_string(),
            hex: hex.to_string(),
            r,
            g,
            b,
        }
    }
}

/// One validated reference color
///
/// Invariant: `hex` is canonical lowercase `#rrggbb` and always encodes the
/// same color as `rgb`. Entries are immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// Human-readable color name
    pub name: String,
    /// Canonical lowercase hex representation
    pub hex: String,
    /// RGB channels, each in [0, 255]
    pub rgb: RgbPixel,
}

impl ColorEntry {
    /// Validate a raw row into a typed entry
    ///
    /// # Errors
    ///
    /// Returns `ColorError::DataFormat` if the name is empty, a channel is
    /// outside [0, 255], the hex string does not parse, or the hex and RGB
    /// fields disagree about the color.
    pub fn from_row(row: &RawColorRow) -> Result<Self> {
        if row.name.trim().is_empty() {
            return Err(ColorError::data_format("name", &row.name, "empty name"));
        }

        let rgb = [
            validate_channel("R", row.r)?,
            validate_channel("G", row.g)?,
            validate_channel("B", row.b)?,
        ];

        let canonical = hex::canonicalize(&row.hex)?;
        let from_hex = hex::hex_to_rgb(&canonical)?;
        if from_hex != rgb {
            return Err(ColorError::data_format(
                "hex",
                &row.hex,
                format!(
                    "hex decodes to ({}, {}, {}) but row has ({}, {}, {})",
                    from_hex[0], from_hex[1], from_hex[2], row.r, row.g, row.b
                ),
            ));
        }

        Ok(Self {
            name: row.name.clone(),
            hex: canonical,
            rgb,
        })
    }

    /// L1 (Manhattan) distance from this entry to a query pixel
    ///
    /// Chosen for cheapness over perceptual accuracy; the whole catalog is
    /// scanned per query so the metric must stay trivial.
    pub fn distance(&self, pixel: RgbPixel) -> u32 {
        let d = |a: u8, b: u8| (i32::from(a) - i32::from(b)).unsigned_abs();
        d(self.rgb[0], pixel[0]) + d(self.rgb[1], pixel[1]) + d(self.rgb[2], pixel[2])
    }
}

fn validate_channel(field: &str, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| {
        ColorError::data_format(field, value.to_string(), "channel outside [0, 255]")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_row_valid() {
        let row = RawColorRow::new("red", "#FF0000", 255, 0, 0);
        let entry = ColorEntry::from_row(&row).unwrap();
        assert_eq!(entry.name, "red");
        assert_eq!(entry.hex, "#ff0000");
        assert_eq!(entry.rgb, [255, 0, 0]);
    }

    #[test]
    fn test_from_row_rejects_empty_name() {
        let row = RawColorRow::new("  ", "#ff0000", 255, 0, 0);
        assert!(matches!(
            ColorEntry::from_row(&row),
            Err(ColorError::DataFormat { .. })
        ));
    }

    #[test]
    fn test_from_row_rejects_out_of_range_channel() {
        for row in [
            RawColorRow::new("bad", "#ff0000", 256, 0, 0),
            RawColorRow::new("bad", "#ff0000", 255, -1, 0),
            RawColorRow::new("bad", "#ff0000", 255, 0, 1000),
        ] {
            let err = ColorEntry::from_row(&row).unwrap_err();
            assert!(matches!(err, ColorError::DataFormat { .. }), "{:?}", err);
        }
    }

    #[test]
    fn test_from_row_rejects_hex_rgb_mismatch() {
        let row = RawColorRow::new("red", "#ff0001", 255, 0, 0);
        let err = ColorEntry::from_row(&row).unwrap_err();
        assert!(err.to_string().contains("hex"), "{}", err);
    }

    #[test]
    fn test_distance_is_manhattan() {
        let row = RawColorRow::new("red", "#ff0000", 255, 0, 0);
        let entry = ColorEntry::from_row(&row).unwrap();
        assert_eq!(entry.distance([255, 0, 0]), 0);
        assert_eq!(entry.distance([250, 10, 5]), 5 + 10 + 5);
        assert_eq!(entry.distance([0, 255, 255]), 255 * 3);
    }
}
