//! Fixed domain constants for color analysis
//!
//! The colorblindness matrices are the clinically conventional linear
//! approximations for the three dichromatic deficiencies. They are not
//! configurable: callers select a mode, never a matrix.

/// Colorblindness simulation matrices
///
/// Each matrix maps a unit-range RGB column vector to the simulated
/// perception: `out[i] = sum_j M[i][j] * in[j]`. No bias term, so black
/// always maps to black. Rows sum to 1.0, so white stays white after
/// clamping.
pub mod matrices {
    /// Protanopia (missing long-wavelength cones)
    pub const PROTANOPIA: [[f32; 3]; 3] = [
        [0.567, 0.433, 0.000],
        [0.558, 0.442, 0.000],
        [0.000, 0.242, 0.758],
    ];

    /// Deuteranopia (missing medium-wavelength cones)
    pub const DEUTERANOPIA: [[f32; 3]; 3] = [
        [0.625, 0.375, 0.000],
        [0.700, 0.300, 0.000],
        [0.000, 0.300, 0.700],
    ];

    /// Tritanopia (missing short-wavelength cones)
    pub const TRITANOPIA: [[f32; 3]; 3] = [
        [0.950, 0.050, 0.000],
        [0.000, 0.433, 0.567],
        [0.000, 0.475, 0.525],
    ];
}

/// Dominant-color extraction defaults
pub mod defaults {
    /// Number of palette entries reported
    pub const TOP_K: usize = 5;

    /// Channel quantization step for histogram buckets
    pub const QUANTIZATION_STEP: u8 = 16;

    /// Maximum sampling grid edge; regions larger than
    /// `SAMPLE_EDGE x SAMPLE_EDGE` are subsampled to roughly that many pixels
    pub const SAMPLE_EDGE: u32 = 100;
}
