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

//! # Cordage Core
//!
//! Traversal primitives and shared structures for the cordage collection
//! utilities. This crate defines the vocabulary every operation builds on:
//! a single-pass, borrowing traversal over ordered sequences and keyed
//! mappings, with explicit early-stop control and no hidden state.
//!
//! ## Modules
//!
//! - `flow`: The `Flow` control value (`Continue`/`Stop`) returned by
//!   traversal callbacks to end a traversal early.
//! - `key`: Per-entry keys (`Key::Index` for sequences, `Key::Name` for
//!   mappings) and the `CollectionKind` discriminator.
//! - `collection`: The `Collection` trait with implementations for slices,
//!   `Vec<T>`, `HashMap`, and `BTreeMap`, plus the `each` and
//!   `is_sequence` entry points.
//! - `keyed`: Own-key property lookup (`Keyed`) for record-like elements.
//! - `grouped`: `Grouped<K, V>`, an insertion-ordered multimap that keeps
//!   groups in first-occurrence key order.
//!
//! ## Purpose
//!
//! Higher-level operation crates stay generic over the collection shape by
//! programming against `Collection` and `Keyed` rather than concrete
//! containers. All traversal is synchronous and single-threaded; nothing
//! here suspends, performs I/O, or retains state across calls.
//!
//! Refer to each module for detailed APIs and examples.

pub mod collection;
pub mod flow;
pub mod grouped;
pub mod key;
pub mod keyed;
