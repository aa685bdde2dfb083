use crate::Reflect;

// -----------------------------------------------------------------------------
// Sequence

/// A growable, ordered, homogeneous container such as `Vec<T>`.
pub trait Sequence: Reflect {
    /// Returns the number of items.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence contains no items.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the item at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the item at `index`.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Appends a default-constructed item and returns it.
    fn push_default(&mut self) -> &mut dyn Reflect;

    /// Removes all items.
    fn clear(&mut self);

    /// Returns the items as raw bytes, if this is a byte sequence.
    #[inline]
    fn as_bytes(&self) -> Option<&[u8]> {
        None
    }

    /// Appends raw bytes, returns `false` if this is not a byte sequence.
    #[inline]
    fn extend_from_bytes(&mut self, _bytes: &[u8]) -> bool {
        false
    }
}

// -----------------------------------------------------------------------------
// Array

/// A fixed-capacity, ordered, homogeneous container such as `[T; N]`.
pub trait Array: Reflect {
    /// Returns the fixed number of items.
    fn len(&self) -> usize;

    /// Returns `true` if the capacity is zero.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the item at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the item at `index`.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the items as raw bytes, if this is a byte array.
    #[inline]
    fn as_bytes(&self) -> Option<&[u8]> {
        None
    }

    /// Returns the items as mutable raw bytes, if this is a byte array.
    #[inline]
    fn as_bytes_mut(&mut self) -> Option<&mut [u8]> {
        None
    }
}
