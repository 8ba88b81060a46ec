use std::path::PathBuf;

/// Inventory list read at startup.
pub const DEFAULT_INPUT: &str = "Mars_Base_Inventory_List.csv";

/// Where the dangerous subset is written.
pub const DEFAULT_OUTPUT: &str = "Mars_Base_Inventory_danger.csv";

/// Inclusive minimum flammability for a dangerous material.
pub const DEFAULT_DANGER_THRESHOLD: f64 = 0.7;

// ---------------------------------------------------------------------------
// Analyzer configuration
// ---------------------------------------------------------------------------

/// Paths and threshold used by one analyzer run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub threshold: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            threshold: DEFAULT_DANGER_THRESHOLD,
        }
    }
}

impl AnalyzerConfig {
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}
