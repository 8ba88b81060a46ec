use std::fmt;

/// Column names (lower-cased) that identify the flammability field.
pub const FLAMMABILITY_ALIASES: &[&str] = &["flammability", "인화성"];

/// Whether `column` names the flammability field, ignoring case and
/// surrounding whitespace.
pub fn is_flammability_column(column: &str) -> bool {
    let lowered = column.trim().to_lowercase();
    FLAMMABILITY_ALIASES.contains(&lowered.as_str())
}

// ---------------------------------------------------------------------------
// FieldValue – a single cell of the inventory
// ---------------------------------------------------------------------------

/// A cell value. Only the flammability column is numeric; every other
/// column is kept as trimmed text.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::Number(v) => write!(f, "{v:.2}"),
        }
    }
}

impl FieldValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(v) => Some(*v),
            FieldValue::Text(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the inventory
// ---------------------------------------------------------------------------

/// One inventory row: column name → value, in header order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `column` to `value`. A new column goes last; a column already
    /// present keeps its position and takes the new value.
    pub fn insert(&mut self, column: impl Into<String>, value: FieldValue) {
        let column = column.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Column names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Numeric value of `column`, if present and numeric.
    pub fn number(&self, column: &str) -> Option<f64> {
        self.get(column).and_then(FieldValue::as_f64)
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}

// ---------------------------------------------------------------------------
// InventoryDataset – the loaded inventory
// ---------------------------------------------------------------------------

/// Records in file order (or sort order after ranking) plus the header.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventoryDataset {
    /// All rows.
    pub records: Vec<Record>,
    /// Ordered column names from the source header.
    pub column_names: Vec<String>,
}

impl InventoryDataset {
    pub fn new(column_names: Vec<String>, records: Vec<Record>) -> Self {
        InventoryDataset {
            records,
            column_names,
        }
    }

    /// Build a dataset that shares `self`'s header but holds other rows.
    pub fn with_records(&self, records: Vec<Record>) -> Self {
        InventoryDataset {
            records,
            column_names: self.column_names.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Name of the flammability column as it appears in the first record.
    /// `None` for an empty dataset or when no column matches an alias.
    pub fn flammability_column(&self) -> Option<&str> {
        self.records
            .first()?
            .keys()
            .find(|key| is_flammability_column(key))
    }
}
