//! Row Table Module
//!
//! In-memory table of encoded entries.
//!
//! ## Responsibilities
//! - Hold every entry as (key, encoded row)
//! - Track the modification counter across all mutations
//! - Snapshot key enumeration and typed iteration
//!
//! ## Data Structure Choice
//! BTreeMap keyed by the entry string:
//! - Sorted keys give deterministic enumeration and commit order
//! - No interior locking: mutation requires `&mut`, so exclusive
//!   ownership is a compile-time fact, matching the single-owner contract

mod iter;
mod table;

pub use iter::TypedEntries;
pub use table::RowTable;
