//! Built-in reference color table
//!
//! A modest set of common named colors so that lookup works without an
//! external CSV table. Applications with a richer reference set (the
//! original tooling shipped a ~900 row table) load it through
//! `ColorCatalog::from_csv_file` instead.

use lazy_static::lazy_static;

use super::{ColorCatalog, RawColorRow};

/// (name, hex, R, G, B) rows; hex and channels must stay in agreement,
/// which the load-time validation enforces.
const BUILTIN_ROWS: &[(&str, &str, i64, i64, i64)] = &[
    ("black", "#000000", 0, 0, 0),
    ("white", "#ffffff", 255, 255, 255),
    ("red", "#ff0000", 255, 0, 0),
    ("lime", "#00ff00", 0, 255, 0),
    ("blue", "#0000ff", 0, 0, 255),
    ("yellow", "#ffff00", 255, 255, 0),
    ("cyan", "#00ffff", 0, 255, 255),
    ("magenta", "#ff00ff", 255, 0, 255),
    ("silver", "#c0c0c0", 192, 192, 192),
    ("gray", "#808080", 128, 128, 128),
    ("maroon", "#800000", 128, 0, 0),
    ("olive", "#808000", 128, 128, 0),
    ("green", "#008000", 0, 128, 0),
    ("purple", "#800080", 128, 0, 128),
    ("teal", "#008080", 0, 128, 128),
    ("navy", "#000080", 0, 0, 128),
    ("orange", "#ffa500", 255, 165, 0),
    ("pink", "#ffc0cb", 255, 192, 203),
    ("brown", "#a52a2a", 165, 42, 42),
    ("gold", "#ffd700", 255, 215, 0),
    ("violet", "#ee82ee", 238, 130, 238),
    ("indigo", "#4b0082", 75, 0, 130),
    ("turquoise", "#40e0d0", 64, 224, 208),
    ("salmon", "#fa8072", 250, 128, 114),
    ("khaki", "#f0e68c", 240, 230, 140),
    ("lavender", "#e6e6fa", 230, 230, 250),
    ("coral", "#ff7f50", 255, 127, 80),
    ("crimson", "#dc143c", 220, 20, 60),
    ("beige", "#f5f5dc", 245, 245, 220),
    ("chocolate", "#d2691e", 210, 105, 30),
];

lazy_static! {
    static ref BUILTIN: ColorCatalog = ColorCatalog::load(
        BUILTIN_ROWS
            .iter()
            .map(|&(name, hex, r, g, b)| RawColorRow::new(name, hex, r, g, b)),
    )
    .expect("builtin color table is well-formed");
}

/// The process-wide built-in catalog, loaded once on first use
pub fn builtin() -> &'static ColorCatalog {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_validates() {
        // Forces the lazy load; a hex/rgb mismatch in the table would panic.
        let catalog = builtin();
        assert_eq!(catalog.len(), BUILTIN_ROWS.len());
    }

    #[test]
    fn test_builtin_primaries_match_exactly() {
        let catalog = builtin();
        for (pixel, name) in [
            ([255, 0, 0], "red"),
            ([0, 255, 0], "lime"),
            ([0, 0, 255], "blue"),
            ([0, 0, 0], "black"),
            ([255, 255, 255], "white"),
        ] {
            let m = catalog.nearest_match(pixel).unwrap();
            assert_eq!(m.entry.name, name);
            assert_eq!(m.distance, 0);
        }
    }

    #[test]
    fn test_builtin_near_miss_resolves() {
        let m = builtin().nearest_match([250, 10, 5]).unwrap();
        assert_eq!(m.entry.name, "red");
        assert_eq!(m.distance, 20);
    }
}
