//! Flammability ranking for the Mars base inventory list.
//!
//! Loads the inventory CSV, ranks materials by flammability, and writes the
//! dangerous subset (flammability ≥ 0.7 by default) to a separate CSV.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod report;

pub use app::{InventoryAnalyzer, RunSummary};
pub use config::AnalyzerConfig;
pub use error::InventoryError;
