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

//! # Nested Sequence Flattening
//!
//! `Nested<T>` models sequences whose elements are values or further
//! sequences, to any depth. `flatten` expands them into a single sequence,
//! preserving left-to-right order: recursively with [`Depth::Deep`], or
//! exactly one level with [`Depth::Shallow`]. Plain values pass through
//! unchanged in both modes.
//!
//! ## Usage
//!
//! ```rust
//! use cordage_ops::flatten::{Depth, Nested, flatten};
//!
//! // [1, [2, [3]]]
//! let nested = vec![
//!     Nested::from(1),
//!     Nested::from(vec![Nested::from(2), Nested::from(vec![Nested::from(3)])]),
//! ];
//!
//! let deep = flatten(&nested, Depth::Deep);
//! assert_eq!(deep, vec![Nested::from(1), Nested::from(2), Nested::from(3)]);
//! ```

/// An element of an arbitrarily nested sequence: a plain value or a
/// sequence of further elements.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Nested<T> {
    /// A plain value.
    Value(T),
    /// A nested sequence.
    Sequence(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Returns the plain value, if this element is one.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Sequence(_) => None,
        }
    }

    /// Returns `true` if this element is a nested sequence.
    #[inline]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }
}

impl<T> From<T> for Nested<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    #[inline]
    fn from(sequence: Vec<Nested<T>>) -> Self {
        Self::Sequence(sequence)
    }
}

/// How far [`flatten`] expands nested sequences.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Depth {
    /// Expand only the immediate nested sequences; sequences nested
    /// inside those are kept as-is.
    Shallow,
    /// Expand recursively until only plain values remain.
    Deep,
}

/// Expands the nested sequences of `sequence` into a single flat
/// sequence, preserving left-to-right order.
///
/// With [`Depth::Deep`] the result contains only `Nested::Value`
/// elements. The input is never mutated.
///
/// # Examples
///
/// ```rust
/// use cordage_ops::flatten::{Depth, Nested, flatten};
///
/// // [1, [2, [3, [4]], 5]]
/// let nested = vec![
///     Nested::from(1),
///     Nested::from(vec![
///         Nested::from(2),
///         Nested::from(vec![Nested::from(3), Nested::from(vec![Nested::from(4)])]),
///         Nested::from(5),
///     ]),
/// ];
///
/// // Deep: [1, 2, 3, 4, 5]
/// let deep = flatten(&nested, Depth::Deep);
/// let values: Vec<i32> = deep.iter().filter_map(|e| e.value().copied()).collect();
/// assert_eq!(values, vec![1, 2, 3, 4, 5]);
///
/// // Shallow: [1, 2, [3, [4]], 5]
/// let shallow = flatten(&nested, Depth::Shallow);
/// assert_eq!(shallow.len(), 4);
/// assert!(shallow[2].is_sequence());
/// ```
pub fn flatten<T>(sequence: &[Nested<T>], depth: Depth) -> Vec<Nested<T>>
where
    T: Clone,
{
    let mut flat = Vec::new();
    match depth {
        Depth::Shallow => {
            for element in sequence {
                match element {
                    Nested::Sequence(inner) => flat.extend(inner.iter().cloned()),
                    Nested::Value(value) => flat.push(Nested::Value(value.clone())),
                }
            }
        }
        Depth::Deep => flatten_into(sequence, &mut flat),
    }
    flat
}

fn flatten_into<T>(sequence: &[Nested<T>], flat: &mut Vec<Nested<T>>)
where
    T: Clone,
{
    for element in sequence {
        match element {
            Nested::Sequence(inner) => flatten_into(inner, flat),
            Nested::Value(value) => flat.push(Nested::Value(value.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(value: i32) -> Nested<i32> {
        Nested::Value(value)
    }

    fn s(sequence: Vec<Nested<i32>>) -> Nested<i32> {
        Nested::Sequence(sequence)
    }

    // [1, [2, [3, [4]], 5]]
    fn sample() -> Vec<Nested<i32>> {
        vec![v(1), s(vec![v(2), s(vec![v(3), s(vec![v(4)])]), v(5)])]
    }

    #[test]
    fn test_deep_flatten_yields_all_values_in_order() {
        let deep = flatten(&sample(), Depth::Deep);
        assert_eq!(deep, vec![v(1), v(2), v(3), v(4), v(5)]);
    }

    #[test]
    fn test_shallow_flatten_expands_one_level() {
        let shallow = flatten(&sample(), Depth::Shallow);
        assert_eq!(
            shallow,
            vec![v(1), v(2), s(vec![v(3), s(vec![v(4)])]), v(5)]
        );
    }

    #[test]
    fn test_plain_values_pass_through() {
        let flat = vec![v(1), v(2), v(3)];
        assert_eq!(flatten(&flat, Depth::Deep), flat);
        assert_eq!(flatten(&flat, Depth::Shallow), flat);
    }

    #[test]
    fn test_empty_sequences_vanish() {
        let nested = vec![v(1), s(vec![]), v(2)];
        assert_eq!(flatten(&nested, Depth::Deep), vec![v(1), v(2)]);
        assert_eq!(flatten(&nested, Depth::Shallow), vec![v(1), v(2)]);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(v(7).value(), Some(&7));
        assert!(s(vec![]).is_sequence());
        assert_eq!(s(vec![]).value(), None);
        assert_eq!(Nested::from(3), v(3));
        assert_eq!(Nested::from(vec![v(1)]), s(vec![v(1)]));
    }
}
