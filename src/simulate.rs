//! Colorblindness simulation
//!
//! Applies one of three fixed 3x3 linear transforms to an RGB pixel or a
//! whole image buffer, approximating how the color is perceived under a
//! named color-vision deficiency. The pipeline per pixel:
//!
//! 1. normalize each channel to [0.0, 1.0]
//! 2. matrix-vector product with the mode's coefficient table
//! 3. clamp each channel to [0.0, 1.0] (truncated, never wrapped)
//! 4. scale back to [0, 255] and truncate to an integer
//!
//! Pixels are spatially independent, the transform has no bias term, and
//! inputs are never mutated in place.

use std::fmt;
use std::str::FromStr;

use image::RgbImage;
use serde::{Deserialize, Serialize};

use crate::constants::matrices;
use crate::error::ColorError;
use crate::RgbPixel;

/// Color-vision deficiency being simulated
///
/// The set is closed and fixed by clinical convention; each variant maps to
/// one coefficient table in [`crate::constants::matrices`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationMode {
    Protanopia,
    Deuteranopia,
    Tritanopia,
}

impl SimulationMode {
    /// All modes, in conventional order
    pub const ALL: [SimulationMode; 3] = [
        SimulationMode::Protanopia,
        SimulationMode::Deuteranopia,
        SimulationMode::Tritanopia,
    ];

    /// The mode's fixed coefficient table
    pub fn matrix(self) -> &'static [[f32; 3]; 3] {
        match self {
            SimulationMode::Protanopia => &matrices::PROTANOPIA,
            SimulationMode::Deuteranopia => &matrices::DEUTERANOPIA,
            SimulationMode::Tritanopia => &matrices::TRITANOPIA,
        }
    }

    /// Lowercase clinical name
    pub fn name(self) -> &'static str {
        match self {
            SimulationMode::Protanopia => "protanopia",
            SimulationMode::Deuteranopia => "deuteranopia",
            SimulationMode::Tritanopia => "tritanopia",
        }
    }
}

impl fmt::Display for SimulationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SimulationMode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "protanopia" => Ok(SimulationMode::Protanopia),
            "deuteranopia" => Ok(SimulationMode::Deuteranopia),
            "tritanopia" => Ok(SimulationMode::Tritanopia),
            other => Err(ColorError::UnknownMode(other.to_string())),
        }
    }
}

/// Simulate a single pixel under a color-vision deficiency
///
/// Deterministic and pure; every output channel lies in [0, 255].
pub fn simulate_pixel(pixel: RgbPixel, mode: SimulationMode) -> RgbPixel {
    let matrix = mode.matrix();
    let input = [
        f32::from(pixel[0]) / 255.0,
        f32::from(pixel[1]) / 255.0,
        f32::from(pixel[2]) / 255.0,
    ];

    let mut out = [0u8; 3];
    for (channel, row) in out.iter_mut().zip(matrix.iter()) {
        let value = row[0] * input[0] + row[1] * input[1] + row[2] * input[2];
        *channel = (value.clamp(0.0, 1.0) * 255.0) as u8;
    }
    out
}

/// Simulate an entire image buffer under a color-vision deficiency
///
/// Applies the same matrix to every pixel independently and returns a new
/// buffer of identical dimensions; the input is untouched.
pub fn simulate_image(image: &RgbImage, mode: SimulationMode) -> RgbImage {
    let mut output = RgbImage::new(image.width(), image.height());
    for (source, target) in image.pixels().zip(output.pixels_mut()) {
        target.0 = simulate_pixel(source.0, mode);
    }
    output
}
