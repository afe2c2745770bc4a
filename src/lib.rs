//! # flatkv
//!
//! An embeddable, typed key-value store with:
//! - A closed tagged value model (int/uint/float/bool/str/record/map)
//! - Whole-store serialization to a line-oriented quoted-field text format
//! - Dirty tracking so callers commit only when something changed
//! - Single-owner semantics: no internal locking, no file management
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Store                                │
//! │        (typed API + persistence controller)                  │
//! └───────────┬───────────────────────────┬─────────────────────┘
//!             │                           │
//!             ▼                           ▼
//!      ┌─────────────┐             ┌─────────────┐
//!      │ Value Codec │             │  Row Table  │
//!      │ (tag+text)  │             │  (BTreeMap) │
//!      └─────────────┘             └──────┬──────┘
//!                                         │ commit / load
//!                                         ▼
//!                                  ┌─────────────┐
//!                                  │ Row Framing │
//!                                  │ (Read/Write)│
//!                                  └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use flatkv::Store;
//!
//! let mut store = Store::new();
//! store.set("int:1", 42i64).unwrap();
//! store.set("str:1", "hello").unwrap();
//!
//! let mut buf = Vec::new();
//! store.commit_to(&mut buf).unwrap();
//!
//! let mut restored = Store::new();
//! restored.load_from_reader(buf.as_slice()).unwrap();
//! assert_eq!(restored.get::<i64>("int:1").unwrap(), Some(42));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod value;
pub mod table;
pub mod persist;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FlatKvError, Result};
pub use config::Config;
pub use store::Store;
pub use value::{FromValue, IntoValue, Kind, Row, Value};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of flatkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
