//! Configuration for the dominant-color utility
//!
//! The core lookup and simulation paths take no configuration at all; only
//! palette extraction has tunable knobs. Values can be loaded from JSON for
//! reproducible runs or constructed programmatically.
//!
//! ```no_run
//! use color_sense::DominantColorConfig;
//! use std::path::Path;
//!
//! let config = DominantColorConfig::from_json_file(Path::new("palette.json"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::defaults;

/// Parameters for dominant-color extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominantColorConfig {
    /// Number of palette entries reported (call sites use 5 or 10)
    pub top_k: usize,

    /// Channel quantization step; larger steps merge nearby colors into
    /// one histogram bucket
    pub quantization_step: u8,

    /// Sampling grid edge; the region is subsampled to at most roughly
    /// `sample_edge^2` pixels before counting
    pub sample_edge: u32,
}

impl Default for DominantColorConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::TOP_K,
            quantization_step: defaults::QUANTIZATION_STEP,
            sample_edge: defaults::SAMPLE_EDGE,
        }
    }
}

impl DominantColorConfig {
    /// Load configuration from a JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
