// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Insertion-Ordered Groups
//!
//! `Grouped<K, V>` is a multimap that keeps its groups in
//! first-occurrence key order. Group storage is a dense `Vec`; an
//! `FxHashMap` maps each key to its group position, so appends stay O(1)
//! while iteration order is deterministic and testable.
//!
//! ## Motivation
//!
//! Grouping operations must be reproducible: the same input must produce
//! the same group order, whatever hasher the index happens to use. Keeping
//! the groups themselves in a `Vec` makes order a structural property
//! instead of a hasher accident.
//!
//! ## Usage
//!
//! ```rust
//! use cordage_core::grouped::Grouped;
//!
//! let mut groups = Grouped::new();
//! groups.push("odd", 1);
//! groups.push("even", 2);
//! groups.push("odd", 3);
//!
//! assert_eq!(groups.get("odd"), Some(&[1, 3][..]));
//! assert_eq!(groups.keys().collect::<Vec<_>>(), vec![&"odd", &"even"]);
//! ```

use rustc_hash::FxHashMap;
use std::{borrow::Borrow, collections::hash_map::Entry, hash::Hash};

/// A multimap whose groups iterate in first-occurrence key order.
///
/// Values are appended to their group in insertion order; a group is
/// created the first time its key is pushed.
#[derive(Clone, Debug)]
pub struct Grouped<K, V> {
    groups: Vec<(K, Vec<V>)>,
    index: FxHashMap<K, usize>,
}

impl<K, V> Default for Grouped<K, V> {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<K, V> Grouped<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty `Grouped`.
    #[inline]
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Appends `value` to the group stored under `key`, creating the
    /// group if the key has not been seen before.
    pub fn push(&mut self, key: K, value: V) {
        match self.index.entry(key) {
            Entry::Occupied(slot) => {
                let position = *slot.get();
                debug_assert!(position < self.groups.len());
                self.groups[position].1.push(value);
            }
            Entry::Vacant(slot) => {
                let position = self.groups.len();
                self.groups.push((slot.key().clone(), vec![value]));
                slot.insert(position);
            }
        }
    }

    /// Returns the group stored under `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&[V]>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index
            .get(key)
            .map(|&position| self.groups[position].1.as_slice())
    }

    /// Returns `true` if a group exists under `key`.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Returns the number of groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if there are no groups.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates over group keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.iter().map(|(key, _)| key)
    }

    /// Iterates over `(key, group)` pairs in first-occurrence key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.groups.iter().map(|(key, values)| (key, values.as_slice()))
    }
}
