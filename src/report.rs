use std::io::{self, Write};

use crate::data::model::{InventoryDataset, Record};

// ---------------------------------------------------------------------------
// Console listing
// ---------------------------------------------------------------------------

/// Title printed above every listing.
pub const LISTING_TITLE: &str = "=== Mars base inventory ===";

/// Print every record of `dataset` as one numbered line.
///
/// Numbers are shown with two decimals (see `FieldValue`'s `Display`).
/// An empty dataset prints a notice instead.
pub fn print_inventory<W: Write>(dataset: &InventoryDataset, console: &mut W) -> io::Result<()> {
    if dataset.is_empty() {
        writeln!(console, "No data to display.")?;
        return Ok(());
    }

    writeln!(console, "{LISTING_TITLE}")?;
    for (i, record) in dataset.records.iter().enumerate() {
        writeln!(console, "{:2}. {}", i + 1, format_record(record))?;
    }
    writeln!(console)
}

/// `key: value` pairs joined by `, `.
pub fn format_record(record: &Record) -> String {
    record
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join(", ")
}
