//! Catalog Logic
//!
//! Filter/sort composition, list state and inventory actions behind the
//! catalog pages.

mod filter;
mod sort;
mod compose;
mod sequencer;
mod state;
mod stats;
mod actions;

pub use filter::FilterSpec;
pub use sort::{SortKey, SortSpec};
pub use compose::compose;
pub use sequencer::{RequestSequencer, Ticket};
pub use state::{ListPhase, ViewMode};
pub use stats::{InventoryStats, StockLevel};
pub use actions::{load_sweets, purchase, restock};
