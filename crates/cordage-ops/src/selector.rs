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

//! # Key Selection
//!
//! The seam shared by the key-driven operations (`max_by_key`,
//! `group_by`): a `KeySelector` computes a comparison or grouping key per
//! element. Any `FnMut(&T) -> K` closure selects by computation;
//! [`Property`] selects by own-key lookup on [`Keyed`] elements.

use cordage_core::keyed::Keyed;

/// Computes a key for an element.
///
/// Implemented for every `FnMut(&T) -> K` closure, so most call sites
/// simply pass a closure. [`Property`] implements it for name-based
/// lookup on record-like elements.
pub trait KeySelector<T> {
    /// The computed key type.
    type Key;

    /// Computes the key for `item`.
    fn key(&mut self, item: &T) -> Self::Key;
}

impl<T, K, F> KeySelector<T> for F
where
    F: FnMut(&T) -> K,
{
    type Key = K;

    #[inline]
    fn key(&mut self, item: &T) -> K {
        self(item)
    }
}

/// Selects the value stored under an own key as the element's key.
///
/// A missing key yields `None`, which orders below every present key and
/// groups such elements together.
///
/// # Examples
///
/// ```rust
/// use cordage_ops::selector::{KeySelector, Property};
/// use std::collections::BTreeMap;
///
/// let record = BTreeMap::from([("age", 40)]);
/// let mut by_age = Property::new("age");
/// assert_eq!(by_age.key(&record), Some(40));
///
/// let mut by_name = Property::new("name");
/// assert_eq!(by_name.key(&record), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Property<'a> {
    name: &'a str,
}

impl<'a> Property<'a> {
    /// Creates a selector for the own key `name`.
    #[inline]
    pub const fn new(name: &'a str) -> Self {
        Self { name }
    }

    /// Returns the selected key name.
    #[inline]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

impl<T> KeySelector<T> for Property<'_>
where
    T: Keyed,
    T::Value: Clone,
{
    type Key = Option<T::Value>;

    #[inline]
    fn key(&mut self, item: &T) -> Option<T::Value> {
        item.get(self.name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_closure_selector() {
        let mut selector = |value: &i32| value % 2;
        assert_eq!(selector.key(&4), 0);
        assert_eq!(selector.key(&5), 1);
    }

    #[test]
    fn test_property_present_key() {
        let record = BTreeMap::from([("draft", 7)]);
        let mut selector = Property::new("draft");
        assert_eq!(selector.key(&record), Some(7));
        assert_eq!(selector.name(), "draft");
    }

    #[test]
    fn test_property_missing_key_is_none() {
        let record: BTreeMap<&str, i32> = BTreeMap::new();
        let mut selector = Property::new("draft");
        assert_eq!(selector.key(&record), None);
    }
}
