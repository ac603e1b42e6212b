//! # color_sense
//!
//! A Rust crate for color-related image analysis:
//! - Naming the color of a pixel by nearest match against a reference
//!   catalog (L1 distance, earliest-entry tie-break)
//! - Simulating colorblindness (protanopia, deuteranopia, tritanopia) on a
//!   pixel or a whole image buffer
//! - Extracting a dominant-color palette from an image region
//! - Locating simple colored objects by hue range
//!
//! The catalog and the simulation matrices are immutable after startup, and
//! every query path is a pure, synchronous computation, so concurrent
//! callers need no coordination.
//!
//! ## Example
//!
//! ```rust
//! use color_sense::{lookup, simulate, SimulationMode};
//!
//! let result = lookup([250, 10, 5])?;
//! println!("{} ({}) at distance {}", result.name, result.hex, result.distance);
//!
//! let seen = simulate([255, 0, 0], SimulationMode::Deuteranopia);
//! assert_eq!(seen, [159, 178, 0]);
//! # Ok::<(), color_sense::ColorError>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod config;
pub mod constants;
pub mod detect;
pub mod dominant;
pub mod error;
pub mod hex;
pub mod loader;
pub mod simulate;

pub use catalog::{ColorCatalog, ColorEntry, NearestMatch, RawColorRow};
pub use config::DominantColorConfig;
pub use dominant::{dominant_colors, suggest_alternatives, DominantColor, Region};
pub use error::{ColorError, Result};
pub use loader::{load_image, pixel_at};
pub use simulate::{simulate_image, simulate_pixel, SimulationMode};

/// Three RGB channels, each in [0, 255]; the query unit for lookup and
/// simulation
pub type RgbPixel = [u8; 3];

/// Result of a named-color lookup, in serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    /// Name of the nearest catalog entry
    pub name: String,
    /// Canonical lowercase hex of the nearest entry
    pub hex: String,
    /// L1 distance between the query pixel and the entry
    pub distance: u32,
}

/// Name a pixel's color against the built-in catalog
///
/// Applications with their own reference table use
/// [`ColorCatalog::nearest_match`] directly.
///
/// # Errors
///
/// Never fails against the built-in catalog in practice; the `Result`
/// mirrors the catalog contract, which reports `EmptyCatalog` on zero
/// entries.
pub fn lookup(pixel: RgbPixel) -> Result<LookupResult> {
    let m = catalog::builtin().nearest_match(pixel)?;
    Ok(LookupResult {
        name: m.entry.name.clone(),
        hex: m.entry.hex.clone(),
        distance: m.distance,
    })
}

/// Simulate a pixel under a color-vision deficiency
///
/// Convenience alias for [`simulate_pixel`] matching the lookup call shape.
pub fn simulate(pixel: RgbPixel, mode: SimulationMode) -> RgbPixel {
    simulate_pixel(pixel, mode)
}
