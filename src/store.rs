//! Store Module
//!
//! The public typed store and its persistence controller.
//!
//! ## Responsibilities
//! - Typed set/get against the row table via the value codec
//! - Key enumeration, single-key delete, and bulk clear
//! - Whole-store commit to a sink and load from a source
//! - Dirty tracking so callers can skip redundant commits

use std::collections::BTreeMap;
use std::io::{Read, Write};

use tracing::{debug, trace};

use crate::config::Config;
use crate::error::Result;
use crate::persist::{RowReader, RowWriter};
use crate::table::{RowTable, TypedEntries};
use crate::value::{decode, encode, FromValue, IntoValue, Row};

/// An in-memory typed key-value store with text persistence
///
/// ## Concurrency Model: Single Owner
///
/// The store performs no internal locking. Every mutating operation takes
/// `&mut self`, so exclusive access is enforced by the borrow checker;
/// callers sharing a store across threads wrap it in their own
/// synchronization. `commit_to` and `load_from_reader` are the only
/// operations that block on I/O, and only against the sink/source the
/// caller supplies; the store never opens, closes, or locks files.
///
/// ## Dirty Tracking
///
/// Every mutation advances a monotonic modification counter. A successful
/// commit records the counter value as the clean watermark; `is_dirty`
/// compares the two. The counter itself never rewinds, so sequences of
/// mutations are observable even across commits.
pub struct Store {
    /// Store configuration
    config: Config,

    /// Encoded entries plus the modification counter
    table: RowTable,

    /// Counter value at the last successful commit
    committed_at: u64,
}

impl Store {
    /// Create an empty store with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an empty store with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            table: RowTable::new(),
            committed_at: 0,
        }
    }

    // =========================================================================
    // Typed Access
    // =========================================================================

    /// Store a value under `key`, overwriting any prior entry
    ///
    /// The value is validated (finite floats, bounded nesting) and encoded
    /// before it touches the table, so a failed `set` leaves the store
    /// unchanged.
    pub fn set<V: IntoValue>(&mut self, key: &str, value: V) -> Result<()> {
        let value = value.into_value()?;
        value.validate(self.config.max_depth)?;
        let row = encode(&value)?;

        trace!(key, kind = %row.kind, "set");
        self.table.insert(key.to_string(), row);
        Ok(())
    }

    /// Look up `key` and decode it into `T`
    ///
    /// Returns `Ok(None)` when the key is absent or when the stored kind
    /// does not fit `T` (the skippable mismatch path, so callers can probe
    /// several types). A payload that is malformed for its recorded kind
    /// is an error.
    pub fn get<T: FromValue>(&self, key: &str) -> Result<Option<T>> {
        let row = match self.table.get(key) {
            Some(row) => row,
            None => return Ok(None),
        };

        let value = decode(row)?;
        Ok(T::from_value(&value))
    }

    /// Snapshot of all current keys in sorted order
    pub fn key_set(&self) -> Vec<String> {
        self.table.key_set()
    }

    /// Whether `key` currently has an entry
    pub fn contains_key(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    /// Remove a single key, reporting whether it was present
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.table.remove(key);
        if removed {
            trace!(key, "delete");
        }
        removed
    }

    /// Remove every entry
    ///
    /// Always counts as one mutation, even on an empty store: the explicit
    /// clear is recorded so a subsequent dirty-gated commit persists it.
    pub fn delete_all(&mut self) {
        trace!(entries = self.table.len(), "delete_all");
        self.table.clear();
    }

    /// Iterate entries that decode into `T`, in sorted key order
    ///
    /// Entries of other kinds are skipped. The iterator borrows the store,
    /// so the sequence it observes cannot change underneath it.
    pub fn typed_entries<T: FromValue>(&self) -> TypedEntries<'_, T> {
        self.table.typed_entries()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    // =========================================================================
    // Persistence Controller
    // =========================================================================

    /// Serialize the whole store to `sink`
    ///
    /// Entries are written in sorted key order, header first. The snapshot
    /// is staged in memory and handed to the sink as a single write: a
    /// failure while staging leaves the sink untouched, and a failure
    /// inside the final write means the sink holds a torn snapshot that
    /// callers must treat as corrupt and re-commit from the still-intact
    /// in-memory state.
    ///
    /// On success the store is marked clean.
    pub fn commit_to<W: Write>(&mut self, mut sink: W) -> Result<()> {
        let mut staging = RowWriter::new(Vec::with_capacity(self.config.commit_buffer_capacity));
        staging.write_header()?;
        for (key, row) in self.table.iter() {
            staging.write_entry(key, row)?;
        }

        let buf = staging.into_inner();
        sink.write_all(&buf)?;
        sink.flush()?;

        self.committed_at = self.table.mod_count();
        debug!(
            entries = self.table.len(),
            bytes = buf.len(),
            "committed store"
        );
        Ok(())
    }

    /// Commit only when the store changed since the last commit
    ///
    /// Returns whether a commit was performed.
    pub fn commit_if_dirty<W: Write>(&mut self, sink: W) -> Result<bool> {
        if !self.is_dirty() {
            return Ok(false);
        }
        self.commit_to(sink)?;
        Ok(true)
    }

    /// Replace the store's contents with the entries read from `source`
    ///
    /// All-or-nothing: the whole source is read and parsed into a staging
    /// table first, and the live contents are swapped only when every
    /// record framed correctly. Any I/O or `CorruptRecord` error leaves
    /// the store untouched. Duplicate keys in the source resolve last-wins,
    /// mirroring `set`.
    ///
    /// Replacing the contents is a mutation: the store is dirty afterwards
    /// until the next commit.
    pub fn load_from_reader<R: Read>(&mut self, mut source: R) -> Result<()> {
        let mut text = String::new();
        source.read_to_string(&mut text)?;

        let mut reader = RowReader::new(&text);
        reader.expect_header()?;

        let mut staging: BTreeMap<String, Row> = BTreeMap::new();
        while let Some((key, row)) = reader.next_entry()? {
            staging.insert(key, row);
        }

        debug!(entries = staging.len(), bytes = text.len(), "loaded store");
        self.table.replace(staging);
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current value of the modification counter
    ///
    /// Advances on `set`, successful `delete`, `delete_all`, and
    /// `load_from_reader`; reads never move it.
    pub fn mod_count(&self) -> u64 {
        self.table.mod_count()
    }

    /// Whether the store changed since the last successful commit
    pub fn is_dirty(&self) -> bool {
        self.table.mod_count() != self.committed_at
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
