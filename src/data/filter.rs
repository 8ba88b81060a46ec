use log::debug;

use super::model::{InventoryDataset, Record};
use crate::error::{InventoryError, Result};

// ---------------------------------------------------------------------------
// Ranking and danger filtering
// ---------------------------------------------------------------------------

fn flammability(record: &Record, column: &str) -> f64 {
    record.number(column).unwrap_or(0.0)
}

/// Return a copy of `dataset` ordered by flammability, highest first.
///
/// The sort is stable: materials with equal scores keep their input order.
pub fn sort_by_flammability(dataset: &InventoryDataset) -> Result<InventoryDataset> {
    let column = dataset
        .flammability_column()
        .ok_or(InventoryError::MissingFlammabilityColumn)?;

    let mut records = dataset.records.clone();
    records.sort_by(|a, b| flammability(b, column).total_cmp(&flammability(a, column)));

    debug!("Sorted {} records by '{column}'", records.len());
    Ok(dataset.with_records(records))
}

/// Return the materials whose flammability is at least `threshold`
/// (inclusive), in input order.
pub fn filter_dangerous(dataset: &InventoryDataset, threshold: f64) -> Result<InventoryDataset> {
    let column = dataset
        .flammability_column()
        .ok_or(InventoryError::MissingFlammabilityColumn)?;

    let records: Vec<Record> = dataset
        .records
        .iter()
        .filter(|r| flammability(r, column) >= threshold)
        .cloned()
        .collect();

    debug!(
        "{} of {} records at or above {threshold}",
        records.len(),
        dataset.len()
    );
    Ok(dataset.with_records(records))
}
