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

//! # Criteria Selection
//!
//! `Criteria` lists the property/value requirements an element must meet;
//! `where_matches` returns the elements meeting all of them, in traversal
//! order. An element matches when every required key is an own key of the
//! element and the stored value compares equal to the required value — no
//! coercion, missing keys never match.
//!
//! ## Usage
//!
//! ```rust
//! use cordage_ops::criteria::{Criteria, where_matches};
//! use std::collections::BTreeMap;
//!
//! let crew = vec![
//!     BTreeMap::from([("deck", 1), ("watch", 2)]),
//!     BTreeMap::from([("deck", 1), ("watch", 3)]),
//! ];
//!
//! let on_deck_one = where_matches(Some(&crew), &Criteria::new().require("deck", 1));
//! assert_eq!(on_deck_one.len(), 2);
//!
//! let second_watch =
//!     where_matches(Some(&crew), &Criteria::new().require("deck", 1).require("watch", 2));
//! assert_eq!(second_watch, vec![&crew[0]]);
//! ```

use cordage_core::{collection::Collection, flow::Flow, keyed::Keyed};
use smallvec::SmallVec;

/// Property/value requirements built up one `require` at a time.
///
/// Requirements are stored inline while they stay small, which they
/// almost always do.
#[derive(Clone, Debug)]
pub struct Criteria<'a, V> {
    required: SmallVec<[(&'a str, V); 4]>,
}

impl<'a, V> Criteria<'a, V> {
    /// Creates an empty requirement list. Every element matches empty
    /// criteria.
    #[inline]
    pub fn new() -> Self {
        Self {
            required: SmallVec::new(),
        }
    }

    /// Adds the requirement that an element stores `value` under the own
    /// key `name`.
    #[must_use]
    pub fn require(mut self, name: &'a str, value: V) -> Self {
        self.required.push((name, value));
        self
    }

    /// Returns the number of requirements.
    #[inline]
    pub fn len(&self) -> usize {
        self.required.len()
    }

    /// Returns `true` if there are no requirements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }

    /// Returns `true` if `item` meets every requirement.
    pub fn matches<T>(&self, item: &T) -> bool
    where
        T: Keyed<Value = V>,
        V: PartialEq,
    {
        self.required
            .iter()
            .all(|(name, required)| item.get(name) == Some(required))
    }
}

impl<V> Default for Criteria<'_, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the elements of `collection` meeting every requirement of
/// `criteria`, by reference, in traversal order.
///
/// Elements missing a required key, or storing a different value under
/// it, are excluded. An absent collection yields an empty result.
pub fn where_matches<'a, C, V>(
    collection: Option<&'a C>,
    criteria: &Criteria<'_, V>,
) -> Vec<&'a C::Item>
where
    C: Collection + ?Sized,
    C::Item: Keyed<Value = V>,
    V: PartialEq,
{
    let mut matching = Vec::new();
    if let Some(collection) = collection {
        collection.traverse(|_, value| {
            if criteria.matches(value) {
                matching.push(value);
            }
            Flow::Continue
        });
    }
    matching
}
