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

//! # Entry Keys
//!
//! The key handed to a traversal callback for every visited entry:
//! a zero-based position for ordered sequences, a borrowed name for keyed
//! mappings. `CollectionKind` is the matching collection-level
//! discriminator.

/// The key of a single collection entry.
///
/// Sequences yield `Key::Index`, mappings yield `Key::Name`. The name
/// borrows from the traversed collection and is valid as long as the
/// collection borrow is.
///
/// # Examples
///
/// ```rust
/// use cordage_core::key::Key;
///
/// let index = Key::Index(2);
/// assert_eq!(index.index(), Some(2));
/// assert_eq!(index.name(), None);
///
/// let name = Key::Name("port");
/// assert_eq!(name.name(), Some("port"));
/// assert_eq!(format!("{}", name), "port");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Key<'a> {
    /// Zero-based position within an ordered sequence.
    Index(usize),
    /// Own key within a keyed mapping.
    Name(&'a str),
}

impl<'a> Key<'a> {
    /// Returns the sequence position, if this key came from a sequence.
    #[inline(always)]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(index),
            Self::Name(_) => None,
        }
    }

    /// Returns the mapping key, if this key came from a mapping.
    #[inline(always)]
    pub const fn name(self) -> Option<&'a str> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(name),
        }
    }
}

impl std::fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

/// The two collection shapes the traversal primitive distinguishes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CollectionKind {
    /// Integer-indexed, length-bearing collection.
    Sequence,
    /// Collection of own key/value entries.
    Mapping,
}

impl std::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sequence => write!(f, "Sequence"),
            Self::Mapping => write!(f, "Mapping"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_accessors() {
        let key = Key::Index(4);
        assert_eq!(key.index(), Some(4));
        assert_eq!(format!("{}", key), "4");
    }

    #[test]
    fn test_name_display() {
        let key = Key::Name("draft");
        assert_eq!(format!("{}", key), "draft");
        assert_eq!(key.index(), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", CollectionKind::Sequence), "Sequence");
        assert_eq!(format!("{}", CollectionKind::Mapping), "Mapping");
    }
}
