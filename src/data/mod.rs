/// Data layer: inventory types, loading, ranking, and saving.
///
/// Architecture:
/// ```text
///  Mars_Base_Inventory_List.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → InventoryDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ InventoryDataset  │  Vec<Record>, header columns
///   └──────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  sort by flammability, keep ≥ threshold
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  InventoryDataset → Mars_Base_Inventory_danger.csv
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
pub mod writer;
