//! Named-color catalog and nearest-match lookup
//!
//! The catalog is an ordered, immutable table of reference colors loaded
//! once before any query. Lookup is a full linear scan under L1 distance:
//! catalogs are small (tens to low hundreds of entries) and queries are
//! interactive, so no index structure is used. Replacing the scan with a
//! spatial index would change tie-break order and is deliberately avoided.

pub mod builtin;
pub mod entry;

use std::io::Read;
use std::path::Path;

use crate::error::{ColorError, Result};

pub use builtin::builtin;
pub use entry::{ColorEntry, RawColorRow};

/// Result of a nearest-color lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearestMatch<'a> {
    /// Winning catalog entry
    pub entry: &'a ColorEntry,
    /// L1 distance between the query pixel and the entry
    pub distance: u32,
}

/// Ordered, immutable table of reference colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCatalog {
    entries: Vec<ColorEntry>,
}

impl ColorCatalog {
    /// Validate raw rows into a query-ready catalog
    ///
    /// Rows are validated in order; the first malformed row fails the whole
    /// load so the calling context can decide whether to abort or drop it.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::DataFormat` for the first invalid row.
    pub fn load<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = RawColorRow>,
    {
        let entries = rows
            .into_iter()
            .map(|row| ColorEntry::from_row(&row))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// Load a catalog from headerless CSV rows `slug,name,hex,R,G,B`
    ///
    /// This is the layout of the reference table the original color
    /// identification tooling shipped (`c.csv`): a slug column, a display
    /// name, a hex string and three integer channels.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::DataFormat` for short records, unparsable
    /// channels or rows that fail entry validation.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for (index, record) in csv_reader.records().enumerate() {
            // 1-based row numbers in diagnostics; the first CSV line is row 1.
            let line = index + 1;
            let record = record.map_err(|e| {
                ColorError::data_format("row", line.to_string(), e.to_string())
            })?;
            rows.push(parse_csv_record(&record, line)?);
        }
        Self::load(rows)
    }

    /// Load a catalog from a headerless CSV file
    ///
    /// # Errors
    ///
    /// Returns `ColorError::DataFormat` if the file cannot be opened, plus
    /// any row validation error from `from_csv_reader`.
    pub fn from_csv_file(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| {
            ColorError::data_format("path", path.display().to_string(), e.to_string())
        })?;
        Self::from_csv_reader(file)
    }

    /// Find the catalog entry closest to a pixel under L1 distance
    ///
    /// Ties break to the earliest entry in load order: a later entry with an
    /// equal distance never replaces an earlier best (strict less-than
    /// comparison). O(n) per query by design.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::EmptyCatalog` when the catalog has no entries;
    /// a default or sentinel entry is never returned.
    pub fn nearest_match(&self, pixel: crate::RgbPixel) -> Result<NearestMatch<'_>> {
        let mut best: Option<NearestMatch<'_>> = None;
        for entry in &self.entries {
            let distance = entry.distance(pixel);
            match best {
                Some(ref b) if distance >= b.distance => {}
                _ => best = Some(NearestMatch { entry, distance }),
            }
        }
        best.ok_or(ColorError::EmptyCatalog)
    }

    /// Number of entries in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in load order
    pub fn iter(&self) -> impl Iterator<Item = &ColorEntry> {
        self.entries.iter()
    }
}

fn parse_csv_record(record: &csv::StringRecord, line: usize) -> Result<RawColorRow> {
    if record.len() < 6 {
        return Err(ColorError::data_format(
            "row",
            line.to_string(),
            format!("expected 6 fields, got {}", record.len()),
        ));
    }

    let channel = |idx: usize, field: &str| -> Result<i64> {
        record[idx].parse::<i64>().map_err(|e| {
            ColorError::data_format(field, &record[idx], format!("row {}: {}", line, e))
        })
    };

    Ok(RawColorRow {
        name: record[1].to_string(),
        hex: record[2].to_string(),
        r: channel(3, "R")?,
        g: channel(4, "G")?,
        b: channel(5, "B")?,
    })
}
