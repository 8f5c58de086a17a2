#![forbid(unsafe_code)]

//! Extended render sequence with boundary clones.
//!
//! The rendering layer lays the items out on a horizontal track and slides
//! it by [`offset_percent`](crate::ViewportMode::offset_percent). To keep the
//! window populated past the last logical item the track holds the items,
//! a full repeat, and a short prefix of a third copy:
//!
//! ```text
//! N = 4, tail = 3:  A B C D | A B C D | A B C
//! ```
//!
//! The sequence stores logical indices only; items are never cloned.

/// Physical slot layout of the render track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedSequence {
    slots: Vec<usize>,
    logical_len: usize,
}

impl ExtendedSequence {
    /// Build the slot layout for `logical_len` items with `tail` leading
    /// items appended after the repeated copy.
    ///
    /// The tail is capped at `logical_len`.
    #[must_use]
    pub fn new(logical_len: usize, tail: usize) -> Self {
        let tail = tail.min(logical_len);
        let mut slots = Vec::with_capacity(logical_len * 2 + tail);
        slots.extend(0..logical_len);
        slots.extend(0..logical_len);
        slots.extend(0..tail);
        Self { slots, logical_len }
    }

    /// Number of physical slots.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no slots.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of logical items the sequence was built for.
    #[inline]
    #[must_use]
    pub fn logical_len(&self) -> usize {
        self.logical_len
    }

    /// Logical index rendered in physical `slot`.
    #[must_use]
    pub fn logical_index(&self, slot: usize) -> Option<usize> {
        self.slots.get(slot).copied()
    }

    /// Logical indices in physical order.
    #[must_use]
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    /// Resolve the slots against the item list.
    ///
    /// `items` must be the list the sequence was built for.
    pub fn resolve<'a, T>(&'a self, items: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        debug_assert_eq!(items.len(), self.logical_len);
        self.slots.iter().map(move |&i| &items[i])
    }
}
