use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Writer, WriterBuilder};
use log::info;

use super::model::InventoryDataset;
use crate::error::Result;

/// Write `dataset` to `path` as CSV, replacing any existing file.
///
/// The header is the key order of the first record. Numbers are written
/// with two decimals and nothing is quoted. An empty dataset writes nothing
/// and returns `Ok(0)`; otherwise the number of rows written is returned.
pub fn save_csv(dataset: &InventoryDataset, path: &Path) -> Result<usize> {
    if dataset.is_empty() {
        return Ok(0);
    }
    let file = File::create(path)?;
    let written = write_csv(dataset, file)?;
    info!("Wrote {written} records to {}", path.display());
    Ok(written)
}

/// Serialize `dataset` to any writer. See [`save_csv`].
pub fn write_csv<W: Write>(dataset: &InventoryDataset, mut out: W) -> Result<usize> {
    let Some(first) = dataset.records.first() else {
        return Ok(0);
    };
    let headers: Vec<String> = first.keys().map(str::to_string).collect();
    let rows = dataset.records.iter().map(|record| {
        headers
            .iter()
            .map(|h| record.get(h).map(|v| v.to_string()).unwrap_or_default())
            .collect::<Vec<String>>()
    });

    let mut writer = plain_writer(&mut out);
    for row in std::iter::once(headers.clone()).chain(rows) {
        if is_lone_empty_field(&row) {
            // csv quotes a lone empty field as `""`; plain output is a bare line.
            writer.flush()?;
            drop(writer);
            out.write_all(b"\n")?;
            writer = plain_writer(&mut out);
            continue;
        }
        writer.write_record(&row)?;
    }
    writer.flush()?;

    Ok(dataset.len())
}

fn plain_writer<W: Write>(out: W) -> Writer<W> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(out)
}

fn is_lone_empty_field(row: &[String]) -> bool {
    matches!(row, [only] if only.is_empty())
}
