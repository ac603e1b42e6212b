//! Dominant-color summarization and alternative-color suggestions
//!
//! Quantize-and-count over a subsampled image region: channels are snapped
//! to a bucket grid, buckets are counted, and the heaviest buckets become
//! the palette. This intentionally stays a cheap histogram rather than a
//! clustering pass; the contract is only an ordered `(hex, proportion)`
//! list with proportions summing to at most 1.0.

use std::collections::BTreeMap;

use image::RgbImage;
use palette::{FromColor, Hsl, Srgb};
use serde::{Deserialize, Serialize};

use crate::config::DominantColorConfig;
use crate::error::{ColorError, Result};
use crate::hex;
use crate::RgbPixel;

/// Rectangular region of an image buffer, in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    /// Region covering the whole buffer
    pub fn full(image: &RgbImage) -> Self {
        Self {
            x: 0,
            y: 0,
            width: image.width(),
            height: image.height(),
        }
    }

    /// Check the region against buffer dimensions
    ///
    /// # Errors
    ///
    /// Returns `ColorError::OutOfBounds` for zero-area regions or regions
    /// extending past the buffer; the histogram never reads out of range.
    pub fn validate(&self, image: &RgbImage) -> Result<()> {
        let out_of_bounds = || ColorError::OutOfBounds {
            x: self.x,
            y: self.y,
            width: image.width(),
            height: image.height(),
        };

        if self.width == 0 || self.height == 0 {
            return Err(out_of_bounds());
        }
        let right = self.x.checked_add(self.width).ok_or_else(out_of_bounds)?;
        let bottom = self.y.checked_add(self.height).ok_or_else(out_of_bounds)?;
        if right > image.width() || bottom > image.height() {
            return Err(out_of_bounds());
        }
        Ok(())
    }
}

/// One palette entry: a representative color and its share of the region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominantColor {
    /// Canonical lowercase hex color of the bucket
    pub hex: String,
    /// Fraction of sampled pixels falling in the bucket, in (0.0, 1.0]
    pub proportion: f64,
}

/// Extract the dominant colors of an image region
///
/// The region is subsampled on a uniform grid so that at most roughly
/// `sample_edge^2` pixels are counted, each channel is quantized to the
/// configured step, and the top-K buckets are reported in descending order
/// of coverage. Equal counts order by color value so output is
/// deterministic.
///
/// # Errors
///
/// Returns `ColorError::OutOfBounds` if the region does not lie within the
/// buffer.
pub fn dominant_colors(
    image: &RgbImage,
    region: Region,
    config: &DominantColorConfig,
) -> Result<Vec<DominantColor>> {
    region.validate(image)?;

    let step_x = sample_stride(region.width, config.sample_edge);
    let step_y = sample_stride(region.height, config.sample_edge);
    let quantization = config.quantization_step.max(1);

    let mut counts: BTreeMap<RgbPixel, u64> = BTreeMap::new();
    let mut total: u64 = 0;
    let mut y = region.y;
    while y < region.y + region.height {
        let mut x = region.x;
        while x < region.x + region.width {
            let pixel = image.get_pixel(x, y).0;
            let bucket = [
                quantize(pixel[0], quantization),
                quantize(pixel[1], quantization),
                quantize(pixel[2], quantization),
            ];
            *counts.entry(bucket).or_insert(0) += 1;
            total += 1;
            x += step_x;
        }
        y += step_y;
    }

    let mut buckets: Vec<(RgbPixel, u64)> = counts.into_iter().collect();
    buckets.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    buckets.truncate(config.top_k);

    Ok(buckets
        .into_iter()
        .map(|(rgb, count)| DominantColor {
            hex: hex::rgb_to_hex(rgb),
            proportion: count as f64 / total as f64,
        })
        .collect())
}

/// Suggest a higher-contrast alternative for each color
///
/// Rotates the hue by 180 degrees at unchanged lightness and saturation,
/// yielding the complementary color. Returns `(original, suggested)` hex
/// pairs in input order.
///
/// # Errors
///
/// Returns `ColorError::DataFormat` for any hex string that does not parse.
pub fn suggest_alternatives(colors: &[String]) -> Result<Vec<(String, String)>> {
    colors
        .iter()
        .map(|color| {
            let rgb = hex::hex_to_rgb(color)?;
            Ok((hex::canonicalize(color)?, hex::rgb_to_hex(complement(rgb))))
        })
        .collect()
}

fn complement(rgb: RgbPixel) -> RgbPixel {
    let srgb = Srgb::new(
        f32::from(rgb[0]) / 255.0,
        f32::from(rgb[1]) / 255.0,
        f32::from(rgb[2]) / 255.0,
    );
    let mut hsl = Hsl::from_color(srgb);
    hsl.hue += 180.0;
    let rotated = Srgb::from_color(hsl);
    [
        (rotated.red.clamp(0.0, 1.0) * 255.0) as u8,
        (rotated.green.clamp(0.0, 1.0) * 255.0) as u8,
        (rotated.blue.clamp(0.0, 1.0) * 255.0) as u8,
    ]
}

fn quantize(value: u8, step: u8) -> u8 {
    (value / step) * step
}

fn sample_stride(extent: u32, sample_edge: u32) -> u32 {
    (extent / sample_edge.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid_image(width: u32, height: u32, rgb: RgbPixel) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb(rgb))
    }

    #[test]
    fn test_solid_image_is_one_bucket() {
        // 200 snaps down to the 192 bucket; 16 and 48 are already on the grid.
        let image = solid_image(20, 20, [200, 16, 48]);
        let palette =
            dominant_colors(&image, Region::full(&image), &DominantColorConfig::default())
                .unwrap();
        assert_eq!(palette.len(), 1);
        assert_eq!(palette[0].hex, "#c01030");
        assert!((palette[0].proportion - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_bucket_hex_reports_quantized_color() {
        // Channels on the grid pass through unchanged.
        let image = solid_image(8, 8, [192, 16, 48]);
        let palette =
            dominant_colors(&image, Region::full(&image), &DominantColorConfig::default())
                .unwrap();
        assert_eq!(palette[0].hex, "#c01030");
    }

    #[test]
    fn test_two_color_split_ordered_by_coverage() {
        // Left three quarters one color, right quarter another.
        let mut image = solid_image(40, 10, [0, 0, 0]);
        for y in 0..10 {
            for x in 30..40 {
                image.put_pixel(x, y, Rgb([240, 240, 240]));
            }
        }
        let palette =
            dominant_colors(&image, Region::full(&image), &DominantColorConfig::default())
                .unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette[0].hex, "#000000");
        assert_eq!(palette[1].hex, "#f0f0f0");
        assert!(palette[0].proportion > palette[1].proportion);
        let sum: f64 = palette.iter().map(|c| c.proportion).sum();
        assert!(sum <= 1.0 + 1e-9);
    }

    #[test]
    fn test_quantization_merges_nearby_colors() {
        // 5 and 12 both land in the [0, 16) bucket.
        let mut image = solid_image(10, 10, [5, 5, 5]);
        for x in 0..10 {
            image.put_pixel(x, 0, Rgb([12, 12, 12]));
        }
        let palette =
            dominant_colors(&image, Region::full(&image), &DominantColorConfig::default())
                .unwrap();
        assert_eq!(palette.len(), 1);
        assert_eq!(palette[0].hex, "#000000");
    }

    #[test]
    fn test_top_k_truncation() {
        // Ten distinct rows of ten distinct bucket colors each.
        let mut image = RgbImage::new(10, 10);
        for y in 0..10 {
            for x in 0..10 {
                image.put_pixel(x, y, Rgb([(y * 24) as u8, 0, 0]));
            }
        }
        let config = DominantColorConfig {
            top_k: 3,
            ..DominantColorConfig::default()
        };
        let palette = dominant_colors(&image, Region::full(&image), &config).unwrap();
        assert_eq!(palette.len(), 3);
        let sum: f64 = palette.iter().map(|c| c.proportion).sum();
        assert!(sum < 1.0);
    }

    #[test]
    fn test_subregion_only_counts_region_pixels() {
        let mut image = solid_image(20, 20, [0, 0, 0]);
        for y in 5..10 {
            for x in 5..10 {
                image.put_pixel(x, y, Rgb([255, 255, 255]));
            }
        }
        let region = Region {
            x: 5,
            y: 5,
            width: 5,
            height: 5,
        };
        let palette = dominant_colors(&image, region, &DominantColorConfig::default()).unwrap();
        assert_eq!(palette.len(), 1);
        assert_eq!(palette[0].hex, "#f0f0f0");
    }

    #[test]
    fn test_region_out_of_bounds() {
        let image = solid_image(10, 10, [0, 0, 0]);
        for region in [
            Region { x: 5, y: 0, width: 6, height: 1 },
            Region { x: 0, y: 10, width: 1, height: 1 },
            Region { x: 0, y: 0, width: 0, height: 5 },
            Region { x: u32::MAX, y: 0, width: 2, height: 2 },
        ] {
            let result = dominant_colors(&image, region, &DominantColorConfig::default());
            assert!(
                matches!(result, Err(ColorError::OutOfBounds { .. })),
                "{:?}",
                region
            );
        }
    }

    #[test]
    fn test_large_region_is_subsampled() {
        let image = solid_image(1000, 800, [64, 64, 64]);
        let palette =
            dominant_colors(&image, Region::full(&image), &DominantColorConfig::default())
                .unwrap();
        assert_eq!(palette.len(), 1);
        assert!((palette[0].proportion - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_suggest_alternatives_complements_primaries() {
        let input = vec!["#FF0000".to_string(), "#00ffff".to_string()];
        let pairs = suggest_alternatives(&input).unwrap();
        assert_eq!(pairs.len(), 2);
        // Red complements to cyan and back.
        assert_eq!(pairs[0].0, "#ff0000");
        let red_alt = hex::hex_to_rgb(&pairs[0].1).unwrap();
        assert!(red_alt[0] < 10 && red_alt[1] > 245 && red_alt[2] > 245);
        let cyan_alt = hex::hex_to_rgb(&pairs[1].1).unwrap();
        assert!(cyan_alt[0] > 245 && cyan_alt[1] < 10 && cyan_alt[2] < 10);
    }

    #[test]
    fn test_suggest_alternatives_rejects_bad_hex() {
        let input = vec!["#nothex".to_string()];
        assert!(suggest_alternatives(&input).is_err());
    }
}
