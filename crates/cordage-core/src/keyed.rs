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

//! # Own-Key Property Lookup
//!
//! `Keyed` gives record-like elements a uniform property interface:
//! look up an own key by name, `None` when the key is not present.
//! Criteria matching and property-based key selection are built on it.

use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

/// An element whose own properties can be looked up by name.
///
/// # Examples
///
/// ```rust
/// use cordage_core::keyed::Keyed;
/// use std::collections::BTreeMap;
///
/// let record = BTreeMap::from([("draft", 7), ("beam", 12)]);
/// assert_eq!(record.get("draft"), Some(&7));
/// assert_eq!(Keyed::get(&record, "length"), None);
/// ```
pub trait Keyed {
    /// The property value type.
    type Value;

    /// Returns the value stored under the own key `name`, if present.
    fn get(&self, name: &str) -> Option<&Self::Value>;
}

impl<K, V, S> Keyed for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    S: BuildHasher,
{
    type Value = V;

    #[inline]
    fn get(&self, name: &str) -> Option<&V> {
        HashMap::get(self, name)
    }
}

impl<K, V> Keyed for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
{
    type Value = V;

    #[inline]
    fn get(&self, name: &str) -> Option<&V> {
        BTreeMap::get(self, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_btreemap_lookup() {
        let record = BTreeMap::from([("a", 1), ("b", 2)]);
        assert_eq!(Keyed::get(&record, "a"), Some(&1));
        assert_eq!(Keyed::get(&record, "missing"), None);
    }

    #[test]
    fn test_hashmap_lookup() {
        let record: HashMap<String, &str> = HashMap::from([("flag".to_string(), "blue")]);
        assert_eq!(Keyed::get(&record, "flag"), Some(&"blue"));
        assert_eq!(Keyed::get(&record, "pennant"), None);
    }
}
