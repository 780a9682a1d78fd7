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

//! # Maximum Selection
//!
//! `max` and `max_by_key` return the greatest element of a collection,
//! by the element's own ordering or by a computed key. The incumbent is
//! replaced only on a strictly greater key, so the first of equal maxima
//! wins; keys that do not compare (such as NaN against a number) never
//! replace it. An empty or absent collection has no maximum and yields
//! `None`.

use crate::selector::KeySelector;
use cordage_core::{collection::Collection, flow::Flow};

/// Returns the greatest element by the element's own ordering.
///
/// # Examples
///
/// ```rust
/// use cordage_ops::extremes::max;
///
/// assert_eq!(max(Some(&[3, 9, 4][..])), Some(&9));
/// assert_eq!(max(None::<&[i32]>), None);
/// ```
pub fn max<'a, C>(collection: Option<&'a C>) -> Option<&'a C::Item>
where
    C: Collection + ?Sized,
    C::Item: PartialOrd,
{
    let mut best: Option<&'a C::Item> = None;
    if let Some(collection) = collection {
        collection.traverse(|_, value| {
            let improved = match best {
                None => true,
                Some(incumbent) => value > incumbent,
            };
            if improved {
                best = Some(value);
            }
            Flow::Continue
        });
    }
    best
}

/// Returns the element whose computed key is greatest.
///
/// The key is computed once per element. Replacement requires a strictly
/// greater key, so the first element achieving the maximum wins ties.
///
/// # Examples
///
/// ```rust
/// use cordage_ops::extremes::max_by_key;
/// use std::collections::BTreeMap;
///
/// let ages = vec![
///     BTreeMap::from([("age", 40)]),
///     BTreeMap::from([("age", 60)]),
///     BTreeMap::from([("age", 50)]),
/// ];
/// let oldest = max_by_key(Some(&ages), |record: &BTreeMap<&str, i32>| {
///     record["age"]
/// });
/// assert_eq!(oldest, Some(&ages[1]));
/// ```
pub fn max_by_key<'a, C, S>(collection: Option<&'a C>, mut selector: S) -> Option<&'a C::Item>
where
    C: Collection + ?Sized,
    S: KeySelector<C::Item>,
    S::Key: PartialOrd,
{
    let mut best: Option<(S::Key, &'a C::Item)> = None;
    if let Some(collection) = collection {
        collection.traverse(|_, value| {
            let key = selector.key(value);
            let improved = match &best {
                None => true,
                Some((incumbent, _)) => key > *incumbent,
            };
            if improved {
                best = Some((key, value));
            }
            Flow::Continue
        });
    }
    best.map(|(_, value)| value)
}
