use std::io::{self, Write};

use log::{info, warn};

use crate::config::AnalyzerConfig;
use crate::data::filter::{filter_dangerous, sort_by_flammability};
use crate::data::loader::read_inventory;
use crate::data::model::InventoryDataset;
use crate::data::writer::save_csv;
use crate::report::print_inventory;

// ---------------------------------------------------------------------------
// Analyzer pipeline
// ---------------------------------------------------------------------------

/// Counts from one run, mostly for tests and the final log line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub loaded: usize,
    pub dangerous: usize,
    pub written: usize,
}

/// Runs load → print → sort → print → filter → print → save.
pub struct InventoryAnalyzer {
    pub config: AnalyzerConfig,
}

impl Default for InventoryAnalyzer {
    fn default() -> Self {
        Self {
            config: AnalyzerConfig::default(),
        }
    }
}

impl InventoryAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Run the whole pipeline, writing user-facing output to `console`.
    ///
    /// Stage failures are reported on `console` and never returned; only a
    /// failure to write to `console` itself is an error.
    pub fn run<W: Write>(&self, console: &mut W) -> io::Result<RunSummary> {
        let mut summary = RunSummary::default();
        writeln!(console, "=== Mars base flammable material classifier ===\n")?;

        let inventory = read_inventory(&self.config.input, console)?;
        if inventory.is_empty() {
            writeln!(console, "Exiting program.")?;
            return Ok(summary);
        }
        summary.loaded = inventory.len();

        print_inventory(&inventory, console)?;

        let sorted = match sort_by_flammability(&inventory) {
            Ok(sorted) => sorted,
            Err(e) => {
                warn!("Sort skipped: {e}");
                writeln!(console, "Cannot find the flammability column.")?;
                inventory.clone()
            }
        };
        writeln!(console, "=== Sorted by flammability (highest first) ===")?;
        print_inventory(&sorted, console)?;

        let threshold = self.config.threshold;
        let dangerous = match filter_dangerous(&sorted, threshold) {
            Ok(dangerous) => dangerous,
            Err(e) => {
                warn!("Filter skipped: {e}");
                writeln!(console, "Cannot find the flammability column.")?;
                sorted.with_records(Vec::new())
            }
        };
        summary.dangerous = dangerous.len();

        writeln!(console, "=== Dangerous materials (flammability >= {threshold}) ===")?;
        if dangerous.is_empty() {
            writeln!(console, "No materials with flammability >= {threshold}.")?;
        } else {
            writeln!(console, "Found {} dangerous material(s).", dangerous.len())?;
            print_inventory(&dangerous, console)?;
            summary.written = self.save(&dangerous, console)?;
        }

        writeln!(console, "\nProgram finished.")?;
        info!(
            "Run complete: {} loaded, {} dangerous, {} written",
            summary.loaded, summary.dangerous, summary.written
        );
        Ok(summary)
    }

    fn save<W: Write>(&self, dangerous: &InventoryDataset, console: &mut W) -> io::Result<usize> {
        let output = &self.config.output;
        match save_csv(dangerous, output) {
            Ok(n) => {
                writeln!(console, "Data saved to {}.", output.display())?;
                Ok(n)
            }
            Err(e) => {
                warn!("Saving {} failed: {e}", output.display());
                writeln!(console, "Error: problem while saving the file. {e}")?;
                Ok(0)
            }
        }
    }
}
