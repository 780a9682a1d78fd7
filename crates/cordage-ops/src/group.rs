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

//! Grouping of elements under a computed key.

use crate::selector::KeySelector;
use cordage_core::{collection::Collection, flow::Flow, grouped::Grouped};
use std::hash::Hash;

/// Groups the entries of `collection` by the key `selector` computes for
/// each of them.
///
/// Elements are appended to their group in traversal order; groups
/// iterate in first-occurrence key order. Select by closure, or by own
/// key with [`Property`](crate::selector::Property). An absent collection
/// yields an empty [`Grouped`].
///
/// # Examples
///
/// ```rust
/// use cordage_ops::group::group_by;
///
/// let numbers = vec![1, 2, 3, 4, 5, 6];
/// let by_parity = group_by(Some(&numbers), |value: &i32| {
///     if value % 2 == 0 { "even" } else { "odd" }
/// });
///
/// assert_eq!(by_parity.get("odd"), Some(&[&1, &3, &5][..]));
/// assert_eq!(by_parity.get("even"), Some(&[&2, &4, &6][..]));
/// assert_eq!(by_parity.keys().collect::<Vec<_>>(), vec![&"odd", &"even"]);
/// ```
pub fn group_by<'a, C, S>(collection: Option<&'a C>, mut selector: S) -> Grouped<S::Key, &'a C::Item>
where
    C: Collection + ?Sized,
    S: KeySelector<C::Item>,
    S::Key: Eq + Hash + Clone,
{
    let mut groups = Grouped::new();
    if let Some(collection) = collection {
        collection.traverse(|_, value| {
            groups.push(selector.key(value), value);
            Flow::Continue
        });
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::Property;
    use std::collections::BTreeMap;

    #[test]
    fn test_groups_by_parity() {
        let numbers = vec![1, 2, 3, 4, 5, 6];
        let by_parity = group_by(Some(&numbers), |value: &i32| {
            if value % 2 == 0 { "even" } else { "odd" }
        });

        assert_eq!(by_parity.get("odd"), Some(&[&1, &3, &5][..]));
        assert_eq!(by_parity.get("even"), Some(&[&2, &4, &6][..]));
    }

    #[test]
    fn test_group_keys_in_first_occurrence_order() {
        let values = ["cutter", "sloop", "ketch", "cat", "skiff"];
        let by_initial = group_by(Some(&values[..]), |value: &&str| {
            value.chars().next().unwrap()
        });
        let keys: Vec<char> = by_initial.keys().copied().collect();
        assert_eq!(keys, vec!['c', 's', 'k']);
    }

    #[test]
    fn test_group_by_property_name() {
        let records = vec![
            BTreeMap::from([("kind", "buoy")]),
            BTreeMap::from([("kind", "beacon")]),
            BTreeMap::from([("kind", "buoy")]),
        ];
        let by_kind = group_by(Some(&records), Property::new("kind"));

        let buoys = by_kind.get(&Some("buoy")).unwrap();
        assert_eq!(buoys, &[&records[0], &records[2]][..]);
        assert_eq!(by_kind.len(), 2);
    }

    #[test]
    fn test_absent_collection_yields_empty() {
        let groups = group_by(None::<&Vec<i32>>, |value: &i32| *value);
        assert!(groups.is_empty());
    }
}
