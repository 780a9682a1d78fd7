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

//! First-match search that stops the traversal at the match.

use cordage_core::{collection::Collection, flow::Flow};

/// Returns the first entry, in traversal order, for which `predicate` is
/// true.
///
/// The traversal stops at the match; entries after it are never visited.
/// Returns `None` when nothing matches, the collection is empty, or the
/// collection is absent.
///
/// # Examples
///
/// ```rust
/// use cordage_ops::find::find;
///
/// let first_even = find(Some(&[1, 2, 3, 4][..]), |value| value % 2 == 0);
/// assert_eq!(first_even, Some(&2));
///
/// assert_eq!(find(Some(&[1, 3][..]), |value| value % 2 == 0), None);
/// ```
pub fn find<'a, C, P>(collection: Option<&'a C>, mut predicate: P) -> Option<&'a C::Item>
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    let mut found = None;
    if let Some(collection) = collection {
        collection.traverse(|_, value| {
            if predicate(value) {
                found = Some(value);
                Flow::Stop
            } else {
                Flow::Continue
            }
        });
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_first_match_in_order() {
        let values = [1, 2, 3, 4];
        assert_eq!(find(Some(&values[..]), |value| value % 2 == 0), Some(&2));
    }

    #[test]
    fn test_short_circuits_after_match() {
        // The predicate must run exactly twice: for 1 and for 2.
        let mut calls = 0;
        let values = [1, 2, 3, 4];
        let found = find(Some(&values[..]), |value| {
            calls += 1;
            value % 2 == 0
        });
        assert_eq!(found, Some(&2));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_no_match_is_none() {
        let values = [1, 3, 5];
        assert_eq!(find(Some(&values[..]), |value| value % 2 == 0), None);
    }

    #[test]
    fn test_empty_and_absent_are_none() {
        assert_eq!(find(Some(&[][..]), |value: &i32| *value > 0), None);
        assert_eq!(find(None::<&[i32]>, |value| *value > 0), None);
    }
}
