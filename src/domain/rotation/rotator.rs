//! MessageRotator - endless cyclic reader over a fixed list.

use crate::domain::foundation::ValidationError;

/// Cycles through a non-empty list, wrapping back to the first item.
///
/// The index always stays in `[0, len)`; exhausting the list is not an
/// error, the rotator simply starts over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRotator<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> MessageRotator<T> {
    /// Creates a rotator over `items`, starting at the first one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if `items` is empty.
    pub fn new(items: Vec<T>) -> Result<Self, ValidationError> {
        if items.is_empty() {
            return Err(ValidationError::empty_field("rotator_items"));
        }
        Ok(Self { items, index: 0 })
    }

    /// Creates a rotator from a fixed-size array known to be non-empty.
    pub fn from_array<const N: usize>(items: [T; N]) -> Self {
        const { assert!(N > 0, "a rotator needs at least one item") };
        Self {
            items: Vec::from(items),
            index: 0,
        }
    }

    /// Returns the current item and moves to the next one.
    pub fn advance(&mut self) -> &T {
        let current = self.index;
        self.index = (current + 1) % self.items.len();
        &self.items[current]
    }

    /// Returns the item the next `advance` will produce.
    pub fn peek(&self) -> &T {
        &self.items[self.index]
    }

    /// Returns to the first item.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Infinite iterator: `next` never returns `None`.
impl<T: Clone> Iterator for MessageRotator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.advance().clone())
    }
}
