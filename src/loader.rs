//! Image loading and bounds-checked pixel access
//!
//! Decoding goes through the `image` crate; everything downstream works on
//! plain `RgbImage` buffers. The extension gate mirrors the upload
//! whitelist of the surrounding applications plus the common formats the
//! decoder handles anyway.

use std::path::Path;

use image::{ImageReader, RgbImage};

use crate::error::{ColorError, Result};
use crate::RgbPixel;

/// File extensions accepted by [`load_image`]
pub const SUPPORTED_EXTENSIONS: &[&str] =
    &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff", "tif"];

/// Check whether a file extension is accepted
pub fn is_supported_extension(ext: &str) -> bool {
    let lower = ext.to_lowercase();
    SUPPORTED_EXTENSIONS.contains(&lower.as_str())
}

/// Load an image from disk as an RGB8 buffer
///
/// # Errors
///
/// Returns `ColorError::ImageLoad` if the extension is not supported, the
/// file cannot be opened, or decoding fails.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(is_supported_extension);
    if !supported {
        return Err(ColorError::ImageLoad {
            message: format!("Unsupported image format: {}", path.display()),
            source: None,
        });
    }

    let reader = ImageReader::open(path).map_err(|e| {
        ColorError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;
    let img = reader.decode().map_err(|e| {
        ColorError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    Ok(img.to_rgb8())
}

/// Read one pixel with explicit bounds checking
///
/// Callers are expected to validate coordinates themselves; this fails
/// loudly instead of reading out of range when they do not.
///
/// # Errors
///
/// Returns `ColorError::OutOfBounds` when `(x, y)` lies outside the buffer.
pub fn pixel_at(image: &RgbImage, x: u32, y: u32) -> Result<RgbPixel> {
    if x >= image.width() || y >= image.height() {
        return Err(ColorError::OutOfBounds {
            x,
            y,
            width: image.width(),
            height: image.height(),
        });
    }
    Ok(image.get_pixel(x, y).0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_extension("png"));
        assert!(is_supported_extension("JPEG"));
        assert!(is_supported_extension("webp"));
        assert!(!is_supported_extension("exe"));
        assert!(!is_supported_extension("heic"));
    }

    #[test]
    fn test_load_image_rejects_unknown_extension() {
        let result = load_image(Path::new("document.pdf"));
        assert!(matches!(result, Err(ColorError::ImageLoad { .. })));
    }

    #[test]
    fn test_load_image_missing_file() {
        let result = load_image(Path::new("does_not_exist.png"));
        assert!(matches!(result, Err(ColorError::ImageLoad { .. })));
    }

    #[test]
    fn test_pixel_at_in_bounds() {
        let mut image = RgbImage::new(3, 2);
        image.put_pixel(2, 1, Rgb([9, 8, 7]));
        assert_eq!(pixel_at(&image, 2, 1).unwrap(), [9, 8, 7]);
        assert_eq!(pixel_at(&image, 0, 0).unwrap(), [0, 0, 0]);
    }

    #[test]
    fn test_pixel_at_out_of_bounds() {
        let image = RgbImage::new(3, 2);
        for (x, y) in [(3, 0), (0, 2), (100, 100)] {
            assert!(matches!(
                pixel_at(&image, x, y),
                Err(ColorError::OutOfBounds { .. })
            ));
        }
    }
}
