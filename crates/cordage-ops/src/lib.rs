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

//! # Cordage Operations
//!
//! The single-pass collection operations built on the `cordage-core`
//! traversal primitive. Every operation is a pure free function: it is
//! invoked, computes over one borrowing traversal, and returns; nothing is
//! retained across calls.
//!
//! ## Modules
//!
//! - `map`: Order-preserving element transformation into a `Vec`.
//! - `reduce`: Seeded or first-element fold with an explicit error
//!   surface (`ReduceError`).
//! - `find`: First matching element, short-circuiting the traversal.
//! - `criteria`: Property/value requirements (`Criteria`) and
//!   `where_matches` selection over record-like elements.
//! - `selector`: The `KeySelector` seam shared by key-driven operations,
//!   selecting by closure or by `Property` name.
//! - `extremes`: `max` and `max_by_key` with strict-improvement
//!   replacement.
//! - `group`: `group_by` into first-occurrence-ordered groups.
//! - `flatten`: The `Nested` value tree and deep/shallow flattening.
//! - `intersect`: Values present in every input sequence.
//!
//! ## Motivation
//!
//! Centralizing the walk in `cordage-core` leaves each operation to state
//! only what it does per entry. Operations that can stop early (`find`)
//! do so through the traversal's control value, never by panicking or by
//! sentinel comparison.

pub mod criteria;
pub mod extremes;
pub mod find;
pub mod flatten;
pub mod group;
pub mod intersect;
pub mod map;
pub mod reduce;
pub mod selector;
