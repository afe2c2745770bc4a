//! Typed iteration over table entries
//!
//! A restartable, finite iterator over every entry whose row decodes into
//! the requested destination type. Entries of a different kind, or whose
//! payload fails to decode, are skipped rather than reported: iteration is
//! the multi-type probing path, and mismatches there are expected.
//!
//! Snapshot semantics are structural: the iterator borrows the table, so
//! no mutation can interleave with a live iteration.

use std::collections::btree_map;
use std::marker::PhantomData;

use crate::value::{decode, FromValue, Row};

/// Iterator over `(key, T)` for entries representable as `T`
pub struct TypedEntries<'a, T> {
    inner: btree_map::Iter<'a, String, Row>,
    _marker: PhantomData<T>,
}

impl<'a, T> TypedEntries<'a, T> {
    pub(crate) fn new(inner: btree_map::Iter<'a, String, Row>) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: FromValue> Iterator for TypedEntries<'a, T> {
    type Item = (&'a str, T);

    fn next(&mut self) -> Option<Self::Item> {
        for (key, row) in self.inner.by_ref() {
            if let Ok(value) = decode(row) {
                if let Some(typed) = T::from_value(&value) {
                    return Some((key.as_str(), typed));
                }
            }
        }
        None
    }
}
