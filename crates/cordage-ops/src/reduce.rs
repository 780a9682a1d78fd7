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

//! # Fold Over One Traversal
//!
//! `reduce` folds a collection into a single accumulated value, visiting
//! entries in traversal order. Seeding is explicit: the accumulator starts
//! from a supplied value (`Seed::Value`) or from the first visited entry
//! (`Seed::FromFirst`), never from call-site arity inspection.
//!
//! ## Highlights
//!
//! - The accumulator is an explicitly scoped local; no state outlives the
//!   call.
//! - `Seed::Value` counts as seeded whatever the value is — a supplied
//!   "empty" seed is still a seed.
//! - The absent-collection and empty-unseeded edges are explicit
//!   [`ReduceError`] variants rather than silent non-values.
//!
//! ## Usage
//!
//! ```rust
//! use cordage_ops::reduce::{Seed, reduce};
//!
//! let sum = reduce(Some(&[1, 2, 3][..]), Seed::Value(0), |memo, _, value| {
//!     memo + value
//! });
//! assert_eq!(sum, Ok(6));
//! ```

use cordage_core::{collection::Collection, flow::Flow, key::Key};

/// How the accumulator of a [`reduce`] is initialized.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Seed<A> {
    /// Start folding from this value; every entry is folded.
    Value(A),
    /// Seed the accumulator from the first visited entry; folding starts
    /// at the second entry.
    FromFirst,
}

/// The error type for [`reduce`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ReduceError {
    /// The collection argument was absent.
    MissingCollection,
    /// The collection was empty and no seed value was supplied, so there
    /// is no value the fold could produce.
    EmptyUnseeded,
}

impl std::fmt::Display for ReduceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCollection => write!(f, "reduce requires a collection"),
            Self::EmptyUnseeded => {
                write!(f, "cannot reduce an empty collection without a seed value")
            }
        }
    }
}

impl std::error::Error for ReduceError {}

/// Folds `collection` into a single value, in traversal order.
///
/// The fold callback receives the running accumulator, the entry key, and
/// the entry value. With `Seed::FromFirst` the first visited entry becomes
/// the initial accumulator (`C::Item: Into<A>` covers the identity case
/// where the accumulator type is the element type) and folding starts at
/// the second entry.
///
/// # Errors
///
/// - [`ReduceError::MissingCollection`] if `collection` is `None`.
/// - [`ReduceError::EmptyUnseeded`] if the collection is empty and the
///   seed is `Seed::FromFirst`.
///
/// # Examples
///
/// ```rust
/// use cordage_ops::reduce::{Seed, ReduceError, reduce};
///
/// // Seeded fold.
/// let sum = reduce(Some(&[1, 2, 3][..]), Seed::Value(0), |memo, _, value| {
///     memo + value
/// });
/// assert_eq!(sum, Ok(6));
///
/// // The first entry seeds the accumulator.
/// let sum = reduce(Some(&[1, 2, 3][..]), Seed::FromFirst, |memo, _, value| {
///     memo + value
/// });
/// assert_eq!(sum, Ok(6));
///
/// // An absent collection is an error.
/// let missing = reduce(None::<&[i32]>, Seed::Value(0), |memo, _, value| {
///     memo + value
/// });
/// assert_eq!(missing, Err(ReduceError::MissingCollection));
/// ```
pub fn reduce<'a, C, A, F>(
    collection: Option<&'a C>,
    seed: Seed<A>,
    mut fold: F,
) -> Result<A, ReduceError>
where
    C: Collection + ?Sized,
    C::Item: Clone + Into<A>,
    F: FnMut(A, Key<'a>, &'a C::Item) -> A,
{
    let collection = collection.ok_or(ReduceError::MissingCollection)?;
    let mut accumulator = match seed {
        Seed::Value(value) => Some(value),
        Seed::FromFirst => None,
    };
    collection.traverse(|key, value| {
        accumulator = Some(match accumulator.take() {
            Some(memo) => fold(memo, key, value),
            // First visited entry seeds the accumulator.
            None => value.clone().into(),
        });
        Flow::Continue
    });
    accumulator.ok_or(ReduceError::EmptyUnseeded)
}
