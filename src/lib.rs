//! Three hash tables sharing one contract ([`HashTable`]):
//!
//! - [`ChainedTable`]: separate chaining with multiply-shift hashing, growing by doubling.
//! - [`UniversalTable`]: the same chaining engine with a per-instance random universal hash.
//! - [`OpenAddressTable`]: double hashing over a fixed number of slots.

pub mod chained;
pub mod error;
pub mod hash;
pub mod open_addressing;
pub mod puzzles;
pub mod store;
pub mod table;

pub use chained::{ChainedTable, UniversalTable};
pub use error::{Result, TableError};
pub use open_addressing::OpenAddressTable;
pub use table::HashTable;

/// The number of slots of a table built without an explicit capacity.
pub const DEFAULT_CAPACITY: usize = 16;
