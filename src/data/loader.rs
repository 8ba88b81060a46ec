use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, error, info};

use super::model::{is_flammability_column, FieldValue, InventoryDataset, Record};
use crate::error::{InventoryError, Result};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load an inventory CSV.
///
/// Layout: the first line is a comma-separated header; every later line is
/// one material. Fields are split on commas only (quotes are ordinary
/// characters) and trimmed.
///
/// * blank lines are skipped;
/// * rows whose field count differs from the header are dropped;
/// * a repeated header name keeps its first position and its last value;
/// * the flammability column is parsed as `f64`, falling back to `0.0` for
///   anything that is not a finite number.
pub fn load_file(path: &Path) -> Result<InventoryDataset> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => InventoryError::NotFound(path.to_path_buf()),
        _ => InventoryError::Io(e),
    })?;

    let dataset = load_from_reader(file)?;
    info!(
        "Loaded {} records ({} columns) from {}",
        dataset.len(),
        dataset.column_names.len(),
        path.display()
    );
    Ok(dataset)
}

/// Parse inventory CSV from any reader. See [`load_file`].
pub fn load_from_reader<R: Read>(reader: R) -> Result<InventoryDataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = reader.records();

    let headers: Vec<String> = match rows.next() {
        Some(result) => result?.iter().map(|h| h.to_string()).collect(),
        None => return Ok(InventoryDataset::default()),
    };

    let mut records = Vec::new();

    for (row_no, result) in rows.enumerate() {
        let row = result?;

        if is_blank(&row) {
            continue;
        }
        if row.len() != headers.len() {
            debug!(
                "Skipping row {}: {} fields, header has {}",
                row_no + 1,
                row.len(),
                headers.len()
            );
            continue;
        }

        records.push(build_record(&headers, &row, row_no + 1));
    }

    Ok(InventoryDataset::new(unique_columns(headers), records))
}

/// Load an inventory for display, reporting problems on `console`.
///
/// Never fails: any error is printed and an empty dataset is returned, which
/// callers treat as "nothing to do". On success the header columns are
/// listed first.
pub fn read_inventory<W: Write>(path: &Path, console: &mut W) -> io::Result<InventoryDataset> {
    match load_file(path) {
        Ok(dataset) => {
            writeln!(console, "CSV columns: {:?}", dataset.column_names)?;
            writeln!(console, "{}", "-".repeat(50))?;
            Ok(dataset)
        }
        Err(InventoryError::NotFound(p)) => {
            error!("Inventory file missing: {}", p.display());
            writeln!(console, "Error: cannot find file {}.", p.display())?;
            Ok(InventoryDataset::default())
        }
        Err(e) => {
            error!("Failed to read {}: {e}", path.display());
            writeln!(console, "Error: problem while reading the file. {e}")?;
            Ok(InventoryDataset::default())
        }
    }
}

// ---------------------------------------------------------------------------
// Row helpers
// ---------------------------------------------------------------------------

/// A whitespace-only line comes through as a single empty field.
fn is_blank(row: &StringRecord) -> bool {
    row.len() == 1 && row.get(0).map_or(true, str::is_empty)
}

/// Header names with repeats removed, first occurrence wins.
fn unique_columns(headers: Vec<String>) -> Vec<String> {
    let mut columns: Vec<String> = Vec::with_capacity(headers.len());
    for header in headers {
        if !columns.contains(&header) {
            columns.push(header);
        }
    }
    columns
}

fn build_record(headers: &[String], row: &StringRecord, row_no: usize) -> Record {
    let mut record = Record::new();
    for (column, raw) in headers.iter().zip(row.iter()) {
        let value = if is_flammability_column(column) {
            FieldValue::Number(parse_flammability(raw, row_no))
        } else {
            FieldValue::Text(raw.to_string())
        };
        record.insert(column.clone(), value);
    }
    record
}

fn parse_flammability(raw: &str, row_no: usize) -> f64 {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            debug!("Row {row_no}: flammability '{raw}' is not a finite number, using 0.0");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn load_str(text: &str) -> InventoryDataset {
        load_from_reader(text.as_bytes()).unwrap()
    }

    fn names(ds: &InventoryDataset) -> Vec<String> {
        ds.records
            .iter()
            .map(|r| r.get("Substance").unwrap().to_string())
            .collect()
    }

    #[test]
    fn loads_header_and_rows_in_file_order() {
        let ds = load_str(
            "Substance,Flammability\nAl,0.1\nO2,0.9\nH2,0.7\n",
        );
        assert_eq!(ds.column_names, vec!["Substance", "Flammability"]);
        assert_eq!(names(&ds), vec!["Al", "O2", "H2"]);
        assert_eq!(ds.records[1].number("Flammability"), Some(0.9));
        assert_eq!(
            ds.records[0].get("Substance"),
            Some(&FieldValue::Text("Al".into()))
        );
    }

    #[test]
    fn trims_header_and_values() {
        let ds = load_str(" Substance , Weight ,Flammability \n  Ethanol , 0.789 ,  0.8  \n");
        assert_eq!(ds.column_names, vec!["Substance", "Weight", "Flammability"]);
        let rec = &ds.records[0];
        assert_eq!(rec.get("Substance"), Some(&FieldValue::Text("Ethanol".into())));
        assert_eq!(rec.get("Weight"), Some(&FieldValue::Text("0.789".into())));
        assert_eq!(rec.number("Flammability"), Some(0.8));
    }

    #[test]
    fn drops_only_the_mismatched_row() {
        let ds = load_str(
            "Substance,Flammability\nAl,0.1\nBroken,0.5,extra\nO2,0.9\nShort\n",
        );
        assert_eq!(names(&ds), vec!["Al", "O2"]);
    }

    #[test]
    fn non_numeric_flammability_becomes_zero() {
        let ds = load_str("Substance,Flammability\nMystery,abc\nBlank,\n");
        assert_eq!(ds.records[0].number("Flammability"), Some(0.0));
        assert_eq!(ds.records[1].number("Flammability"), Some(0.0));
    }

    #[test]
    fn non_finite_flammability_becomes_zero() {
        let ds = load_str("Substance,Flammability\nA,NaN\nB,inf\nC,-infinity\nD,0.9\n");
        let scores: Vec<f64> = ds
            .records
            .iter()
            .map(|r| r.number("Flammability").unwrap())
            .collect();
        assert_eq!(scores, vec![0.0, 0.0, 0.0, 0.9]);
    }

    #[test]
    fn repeated_header_keeps_first_position_and_last_value() {
        let ds = load_str("Substance,Flammability,Flammability\nA,0.1,0.9\nB,0.5,0.2\n");

        assert_eq!(ds.column_names, vec!["Substance", "Flammability"]);
        let keys: Vec<&str> = ds.records[0].keys().collect();
        assert_eq!(keys, vec!["Substance", "Flammability"]);
        assert_eq!(ds.records[0].number("Flammability"), Some(0.9));
        assert_eq!(ds.records[1].number("Flammability"), Some(0.2));
    }

    #[test]
    fn repeated_header_still_counts_every_field() {
        let ds = load_str("Substance,Flammability,Flammability\nA,0.1,0.9\nShort,0.3\n");
        assert_eq!(names(&ds), vec!["A"]);
    }

    #[test]
    fn only_flammability_column_is_numeric() {
        let ds = load_str("Substance,Weight,Flammability\nWater,1.0,0.0\n");
        assert_eq!(ds.records[0].get("Weight"), Some(&FieldValue::Text("1.0".into())));
        assert_eq!(ds.records[0].number("Flammability"), Some(0.0));
    }

    #[test]
    fn localized_and_uppercase_column_names_are_numeric() {
        let ds = load_str("물질,인화성\n수소,0.95\n");
        assert_eq!(ds.records[0].number("인화성"), Some(0.95));

        let ds = load_str("Substance,FLAMMABILITY\nH2,0.95\n");
        assert_eq!(ds.records[0].number("FLAMMABILITY"), Some(0.95));
    }

    #[test]
    fn skips_blank_lines() {
        let ds = load_str("Substance,Flammability\n\nAl,0.1\n   \nO2,0.9\n\n");
        assert_eq!(names(&ds), vec!["Al", "O2"]);
    }

    #[test]
    fn quotes_are_not_special() {
        let ds = load_str("Substance,Flammability\n\"Salt, rock\",0.1\n\"Salt\",0.2\n");
        assert_eq!(ds.len(), 1);
        assert_eq!(
            ds.records[0].get("Substance"),
            Some(&FieldValue::Text("\"Salt\"".into()))
        );
    }

    #[test]
    fn handles_crlf_line_endings() {
        let ds = load_str("Substance,Flammability\r\nAl,0.1\r\nO2,0.9\r\n");
        assert_eq!(names(&ds), vec!["Al", "O2"]);
        assert_eq!(ds.records[1].number("Flammability"), Some(0.9));
    }

    #[test]
    fn empty_input_gives_empty_dataset() {
        let ds = load_str("");
        assert!(ds.is_empty());
        assert!(ds.column_names.is_empty());

        let ds = load_str("Substance,Flammability\n");
        assert!(ds.is_empty());
        assert_eq!(ds.column_names.len(), 2);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        match load_file(&path) {
            Err(InventoryError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, b"Substance,Flammability\n\xff\xfe,0.1\n").unwrap();
        assert!(matches!(load_file(&path), Err(InventoryError::Csv(_))));
    }

    #[test]
    fn read_inventory_reports_missing_file_and_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Mars_Base_Inventory_List.csv");
        let mut console = Vec::new();

        let ds = read_inventory(&path, &mut console).unwrap();

        assert!(ds.is_empty());
        let out = String::from_utf8(console).unwrap();
        assert!(out.contains("cannot find file"));
        assert!(out.contains("Mars_Base_Inventory_List.csv"));
    }

    #[test]
    fn read_inventory_lists_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        fs::write(&path, "Substance,Flammability\nAl,0.1\n").unwrap();
        let mut console = Vec::new();

        let ds = read_inventory(&path, &mut console).unwrap();

        assert_eq!(ds.len(), 1);
        let out = String::from_utf8(console).unwrap();
        assert!(out.starts_with("CSV columns: [\"Substance\", \"Flammability\"]\n"));
        assert!(out.contains(&"-".repeat(50)));
    }
}
