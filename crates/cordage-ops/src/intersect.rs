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

//! # Sequence Intersection
//!
//! Values present in every input sequence, each reported once. Equality
//! is exact (`Eq + Hash`) over the original value type; nothing is
//! coerced through a string form, so `1` and `"1"` can never collide.
//!
//! ## Highlights
//!
//! - Candidates are the first sequence's values, deduplicated in
//!   first-occurrence order; the result preserves that order.
//! - Each further sequence is indexed once as an `FxHashSet`; candidate
//!   survival is tracked in a dense `FixedBitSet`.
//! - The scan stops as soon as no candidate survives.

use fixedbitset::FixedBitSet;
use rustc_hash::FxHashSet;

/// Returns the values that occur in every sequence of `sequences`, each
/// once, in first-occurrence order of the first sequence.
///
/// With no input sequences the result is empty.
///
/// # Examples
///
/// ```rust
/// use cordage_ops::intersect::intersection;
///
/// let a = [1, 2, 3];
/// let b = [2, 3, 4];
/// let c = [2, 3, 5];
/// assert_eq!(intersection(&[&a[..], &b[..], &c[..]]), vec![2, 3]);
///
/// assert_eq!(intersection::<i32>(&[]), vec![]);
/// ```
pub fn intersection<T>(sequences: &[&[T]]) -> Vec<T>
where
    T: Eq + std::hash::Hash + Clone,
{
    let Some((first, rest)) = sequences.split_first() else {
        return Vec::new();
    };

    // Deduplicate the first sequence, keeping first-occurrence order.
    let mut seen = FxHashSet::default();
    let mut candidates: Vec<&T> = Vec::new();
    for value in *first {
        if seen.insert(value) {
            candidates.push(value);
        }
    }

    let mut alive = FixedBitSet::with_capacity(candidates.len());
    alive.insert_range(..);

    for sequence in rest {
        if alive.is_clear() {
            break;
        }
        let present: FxHashSet<&T> = sequence.iter().collect();
        for (position, candidate) in candidates.iter().enumerate() {
            if alive.contains(position) && !present.contains(candidate) {
                alive.set(position, false);
            }
        }
    }

    candidates
        .into_iter()
        .enumerate()
        .filter(|(position, _)| alive.contains(*position))
        .map(|(_, value)| value.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_common_to_all_sequences() {
        let a = [1, 2, 3];
        let b = [2, 3, 4];
        let c = [2, 3, 5];
        let common = intersection(&[&a[..], &b[..], &c[..]]);
        assert_eq!(common, vec![2, 3]);
    }

    #[test]
    fn test_each_value_reported_once() {
        let a = [2, 2, 3, 2];
        let b = [3, 2, 2];
        assert_eq!(intersection(&[&a[..], &b[..]]), vec![2, 3]);
    }

    #[test]
    fn test_disjoint_sequences_are_empty() {
        let a = [1, 2];
        let b = [3, 4];
        assert!(intersection(&[&a[..], &b[..]]).is_empty());
    }

    #[test]
    fn test_single_sequence_dedups() {
        let a = [5, 1, 5, 2, 1];
        assert_eq!(intersection(&[&a[..]]), vec![5, 1, 2]);
    }

    #[test]
    fn test_no_sequences_is_empty() {
        assert_eq!(intersection::<i32>(&[]), Vec::<i32>::new());
    }

    #[test]
    fn test_agrees_with_naive_reference_on_random_input() {
        use rand::Rng;

        let mut rng = rand::rng();
        for _ in 0..64 {
            let mut sequences: Vec<Vec<u8>> = Vec::new();
            for _ in 0..3 {
                let len: usize = rng.random_range(0..12);
                sequences.push((0..len).map(|_| rng.random_range(0..6)).collect());
            }
            let borrowed: Vec<&[u8]> = sequences.iter().map(Vec::as_slice).collect();

            // Naive reference: first-occurrence dedup of the first
            // sequence, kept only when every other sequence contains it.
            let mut expected: Vec<u8> = Vec::new();
            if let Some(first) = sequences.first() {
                for value in first {
                    if !expected.contains(value)
                        && sequences[1..].iter().all(|s| s.contains(value))
                    {
                        expected.push(*value);
                    }
                }
            }

            assert_eq!(intersection(&borrowed), expected);
        }
    }

    #[test]
    fn test_exact_equality_over_strings() {
        let a = ["1".to_string(), "2".to_string()];
        let b = ["2".to_string(), "02".to_string()];
        // "2" and "02" are distinct values; nothing is coerced.
        assert_eq!(intersection(&[&a[..], &b[..]]), vec!["2".to_string()]);
    }
}
