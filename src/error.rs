use std::path::PathBuf;

/// Errors produced by the inventory stages.
///
/// Each stage returns these to the pipeline, which turns them into console
/// notices instead of aborting the process.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("flammability column not found")]
    MissingFlammabilityColumn,
}

pub type Result<T> = std::result::Result<T, InventoryError>;
