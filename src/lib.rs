// Bid Ledger - Core Library
// Exposes the load/normalize/sort engine for use in the CLI, the TUI and tests

pub mod loader;
pub mod model;
pub mod normalize;
pub mod persist;
pub mod sort;

// Re-export commonly used types
pub use loader::{load_bids, CsvSource, LoadOutcome, TabularSource};
pub use model::{columns, Bid};
pub use normalize::normalize_amount;
pub use persist::append_bid;
pub use sort::{partition, quick_sort, quick_sort_range, selection_sort};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
