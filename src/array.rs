//! Growable contiguous buffer with power-of-two capacity management
//!
//! `DynArray<T>` is the collection primitive backing the simulation: asteroid
//! lists, collision flags, and polygon vertex sequences all live in one.
//! Capacity is always zero or a power of two. Appending doubles the allocation
//! when full; removing halves it when the array is at most half full, never
//! truncating live elements. Allocation is fallible and leaves the array
//! untouched on failure.

use std::collections::TryReserveError;
use std::slice::{Iter, IterMut};

use thiserror::Error;

/// Failure modes for array operations
#[derive(Debug, Error)]
pub enum ArrayError {
    /// Index-based access outside the live range
    #[error("index {index} out of bounds (len {len})")]
    OutOfBounds { index: usize, len: usize },
    /// The allocator could not satisfy a growth request
    #[error("allocation failed")]
    Alloc(#[from] TryReserveError),
}

/// Growable contiguous buffer of `T`
#[derive(Debug)]
pub struct DynArray<T> {
    buf: Vec<T>,
    /// Logical capacity; zero or a power of two, always >= buf.len()
    cap: usize,
}

impl<T> DynArray<T> {
    /// Create an empty array with no allocation
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            cap: 0,
        }
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if the array holds no elements
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Current logical capacity (zero or a power of two)
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Ensure room for at least `additional` more elements, rounding the
    /// target capacity up to a power of two. The array is unchanged on
    /// allocation failure.
    pub fn reserve(&mut self, additional: usize) -> Result<(), ArrayError> {
        let needed = self.buf.len() + additional;
        if needed <= self.cap {
            return Ok(());
        }
        let new_cap = needed.next_power_of_two();
        self.buf.try_reserve_exact(new_cap - self.buf.len())?;
        self.cap = new_cap;
        Ok(())
    }

    /// Append an element, growing the buffer if full
    pub fn push(&mut self, element: T) -> Result<(), ArrayError> {
        if self.buf.len() == self.cap {
            self.reserve(1)?;
        }
        self.buf.push(element);
        Ok(())
    }

    /// Remove and return the last element, or `None` if empty
    pub fn pop(&mut self) -> Option<T> {
        let element = self.buf.pop()?;
        self.maybe_shrink();
        Some(element)
    }

    /// Bounds-checked shared access
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buf.get(index)
    }

    /// Bounds-checked mutable access
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buf.get_mut(index)
    }

    /// First element, if any
    pub fn first(&self) -> Option<&T> {
        self.buf.first()
    }

    /// Last element, if any
    pub fn last(&self) -> Option<&T> {
        self.buf.last()
    }

    /// Insert an element at `index`, shifting later elements right.
    /// `index == len` appends.
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), ArrayError> {
        if index > self.buf.len() {
            return Err(ArrayError::OutOfBounds {
                index,
                len: self.buf.len(),
            });
        }
        if self.buf.len() == self.cap {
            self.reserve(1)?;
        }
        self.buf.insert(index, element);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements left
    pub fn remove(&mut self, index: usize) -> Result<T, ArrayError> {
        if index >= self.buf.len() {
            return Err(ArrayError::OutOfBounds {
                index,
                len: self.buf.len(),
            });
        }
        let element = self.buf.remove(index);
        self.maybe_shrink();
        Ok(element)
    }

    /// Remove elements in `[from, to)`, shifting later elements left
    pub fn remove_range(&mut self, from: usize, to: usize) -> Result<(), ArrayError> {
        if from > to || to > self.buf.len() {
            return Err(ArrayError::OutOfBounds {
                index: to,
                len: self.buf.len(),
            });
        }
        self.buf.drain(from..to);
        self.maybe_shrink();
        Ok(())
    }

    /// Drop all elements, keeping a single-slot allocation at most
    pub fn clear(&mut self) {
        self.buf.clear();
        self.maybe_shrink();
    }

    /// Iterate over the live elements in order
    pub fn iter(&self) -> Iter<'_, T> {
        self.buf.iter()
    }

    /// Iterate mutably over the live elements in order
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.buf.iter_mut()
    }

    /// View the live elements as a slice
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// Halve the capacity while the array is at most half full
    fn maybe_shrink(&mut self) {
        while self.cap >= 2 && self.buf.len() <= self.cap / 2 {
            self.cap /= 2;
        }
        self.buf.shrink_to(self.cap);
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> DynArray<T> {
    /// Clone the array, preserving element order. Fails only on allocation.
    pub fn try_clone(&self) -> Result<Self, ArrayError> {
        let mut copy = Self::new();
        copy.reserve(self.buf.len())?;
        for element in &self.buf {
            copy.push(element.clone())?;
        }
        Ok(copy)
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(n: usize) -> DynArray<u32> {
        let mut array = DynArray::new();
        for i in 0..n {
            array.push(i as u32).unwrap();
        }
        array
    }

    #[test]
    fn test_push_pop_net_length() {
        let mut array = DynArray::new();
        for i in 0..10 {
            array.push(i).unwrap();
        }
        for _ in 0..4 {
            array.pop().unwrap();
        }
        assert_eq!(array.len(), 6);
        assert_eq!(array.last(), Some(&5));
    }

    #[test]
    fn test_capacity_is_power_of_two() {
        let mut array = DynArray::new();
        assert_eq!(array.capacity(), 0);
        for i in 0..100 {
            array.push(i).unwrap();
            let cap = array.capacity();
            assert!(cap.is_power_of_two());
            assert!(cap >= array.len());
        }
    }

    #[test]
    fn test_pop_empty_returns_none() {
        let mut array: DynArray<u32> = DynArray::new();
        assert!(array.pop().is_none());
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), 0);
    }

    #[test]
    fn test_shrink_on_remove() {
        let mut array = filled(16);
        assert_eq!(array.capacity(), 16);
        while array.len() > 4 {
            array.pop();
        }
        // 4 live elements fit in a capacity of 4
        assert_eq!(array.capacity(), 4);
    }

    #[test]
    fn test_shrink_never_truncates() {
        let mut array = filled(9);
        array.pop();
        // 8 live elements halve 16 down to 8 and no further.
        assert_eq!(array.capacity(), 8);
        assert_eq!(array.len(), 8);
        assert_eq!(*array.get(7).unwrap(), 7);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let array = filled(3);
        assert!(array.get(3).is_none());
        assert!(array.get(2).is_some());
    }

    #[test]
    fn test_insert_and_remove() {
        let mut array = filled(3);
        array.insert(1, 99).unwrap();
        assert_eq!(array.as_slice(), &[0, 99, 1, 2]);
        let removed = array.remove(1).unwrap();
        assert_eq!(removed, 99);
        assert_eq!(array.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_insert_past_end_fails() {
        let mut array = filled(2);
        assert!(matches!(
            array.insert(3, 7),
            Err(ArrayError::OutOfBounds { index: 3, len: 2 })
        ));
        assert_eq!(array.len(), 2);
    }

    #[test]
    fn test_remove_range() {
        let mut array = filled(6);
        array.remove_range(1, 4).unwrap();
        assert_eq!(array.as_slice(), &[0, 4, 5]);
        assert!(array.remove_range(2, 5).is_err());
    }

    #[test]
    fn test_try_clone() {
        let array = filled(5);
        let copy = array.try_clone().unwrap();
        assert_eq!(copy.as_slice(), array.as_slice());
    }
}
