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

//! Order-preserving element transformation over one traversal.

use cordage_core::{collection::Collection, flow::Flow, key::Key};

/// Transforms every entry of `collection` and collects the results in
/// traversal order, one output element per input entry.
///
/// An absent collection (`None`) yields an empty `Vec` rather than an
/// error. The input is never mutated.
///
/// # Examples
///
/// ```rust
/// use cordage_ops::map::map;
///
/// let tripled = map(Some(&[1, 2, 3][..]), |_, value| value * 3);
/// assert_eq!(tripled, vec![3, 6, 9]);
///
/// assert_eq!(map(None::<&[i32]>, |_, value| value * 3), vec![]);
/// ```
pub fn map<'a, C, F, U>(collection: Option<&'a C>, mut transform: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(Key<'a>, &'a C::Item) -> U,
{
    let Some(collection) = collection else {
        return Vec::new();
    };
    let mut result = Vec::with_capacity(collection.len());
    collection.traverse(|key, value| {
        result.push(transform(key, value));
        Flow::Continue
    });
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_map_preserves_length_and_order() {
        let values = vec![1, 2, 3, 4];
        let doubled = map(Some(&values), |_, value| value * 2);
        assert_eq!(doubled.len(), values.len());
        assert_eq!(doubled, vec![2, 4, 6, 8]);
    }

    #[test]
    fn test_map_passes_entry_keys() {
        let values = ["a", "b", "c"];
        let indexed = map(Some(&values), |key, value| {
            format!("{}:{}", key.index().unwrap(), value)
        });
        assert_eq!(indexed, vec!["0:a", "1:b", "2:c"]);
    }

    #[test]
    fn test_map_over_mapping_visits_every_entry() {
        let mapping = BTreeMap::from([("one", 1), ("three", 3), ("two", 2)]);
        let tripled = map(Some(&mapping), |_, value| value * 3);
        let mut sorted = tripled.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![3, 6, 9]);
    }

    #[test]
    fn test_map_absent_yields_empty() {
        let result: Vec<i32> = map(None::<&Vec<i32>>, |_, value| *value);
        assert!(result.is_empty());
    }

    #[test]
    fn test_map_agrees_with_std_iterator() {
        let values: Vec<i64> = (0..100).collect();
        let ours = map(Some(&values), |_, value| value + 7);
        let std_result: Vec<i64> = values.iter().map(|value| value + 7).collect();
        assert_eq!(ours, std_result);
    }
}
