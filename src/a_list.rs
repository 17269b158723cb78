//! A growable array backed list

use alloc::boxed::Box;
use alloc::vec::Vec;

use core::{cmp, fmt, iter};

use crate::collection::{validate_sortable, Collection};
use crate::error::check_index;
use crate::{order, CollectionError, Orderable};

/// Capacity of a freshly created or cleared [`ArrayCollection`].
pub const DEFAULT_CAPACITY: usize = 10;

fn empty_buffer<T>(capacity: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(capacity).collect()
}

/// Array backed list.
///
/// Live elements occupy `buffer[..size]` without gaps, every slot after them is `None`.
pub struct ArrayCollection<T> {
    buffer: Box<[Option<T>]>,
    size: usize,
}

impl<T> Default for ArrayCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayCollection<T> {
    /// Creates an empty collection with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty collection with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: empty_buffer(capacity),
            size: 0,
        }
    }

    /// Number of elements the collection holds before it has to grow.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    fn live(&self) -> &[Option<T>] {
        &self.buffer[..self.size]
    }

    fn ensure_room(&mut self) {
        if self.size == self.buffer.len() {
            self.grow();
        }
    }

    // grows by half of the current size, at least by one slot
    fn grow(&mut self) {
        let old_capacity = self.buffer.len();
        let new_capacity = cmp::max(self.size + self.size / 2, self.size + 1);
        let mut buffer = empty_buffer(new_capacity);
        for (dst, src) in buffer.iter_mut().zip(self.buffer.iter_mut()) {
            *dst = src.take();
        }
        self.buffer = buffer;
        tracing::trace!(old_capacity, new_capacity, "array collection grown");
    }
}

impl<T> Collection<T> for ArrayCollection<T> {
    type Ref<'a>
        = &'a T
    where
        Self: 'a;

    fn add(&mut self, value: T) {
        self.ensure_room();
        self.buffer[self.size] = Some(value);
        self.size += 1;
    }

    fn add_at(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        check_index(index, self.size)?;
        self.ensure_room();
        // the empty slot at `size` ends up at `index`
        self.buffer[index..=self.size].rotate_right(1);
        self.buffer[index] = Some(value);
        self.size += 1;
        Ok(())
    }

    fn get(&self, index: usize) -> Result<&T, CollectionError> {
        check_index(index, self.size)?;
        self.buffer[index]
            .as_ref()
            .ok_or(CollectionError::NullElement(index))
    }

    fn remove(&mut self, index: usize) -> Result<(), CollectionError> {
        check_index(index, self.size)?;
        self.buffer[index..self.size].rotate_left(1);
        self.size -= 1;
        self.buffer[self.size] = None;
        Ok(())
    }

    fn clear(&mut self) {
        tracing::debug!(size = self.size, "array collection cleared");
        self.buffer = empty_buffer(DEFAULT_CAPACITY);
        self.size = 0;
    }

    fn sorted(&mut self) -> Result<(), CollectionError>
    where
        T: Orderable,
    {
        validate_sortable(self.live().iter().flatten())?;
        tracing::trace!(size = self.size, "sorting array collection");
        self.buffer[..self.size].sort_unstable_by(|a, b| match (a, b) {
            (Some(a), Some(b)) => order::compare(a, b),
            _ => cmp::Ordering::Equal,
        });
        Ok(())
    }

    fn size(&self) -> usize {
        self.size
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.live().iter().flatten()).finish()
    }
}

impl<T> FromIterator<T> for ArrayCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let buffer: Vec<Option<T>> = iter.into_iter().map(Some).collect();
        let size = buffer.len();
        let mut list = Self::with_capacity(cmp::max(size, DEFAULT_CAPACITY));
        for (dst, src) in list.buffer.iter_mut().zip(buffer) {
            *dst = src;
        }
        list.size = size;
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;

    #[test]
    fn test_list() {
        let mut list = ArrayCollection::new();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);

        list.add(1);
        list.add(2);
        list.add(3);
        list.add(4);
        assert_eq!(list.size(), 4);
        assert_eq!(*list.get(3).unwrap(), 4);
        assert_eq!(
            list.get(5),
            Err(CollectionError::IndexOutOfRange { index: 5, size: 4 })
        );

        list.remove(2).unwrap();
        assert_eq!(list.size(), 3);
        assert_eq!(*list.get(2).unwrap(), 4);
        assert!(list.get(3).is_err());
        assert_eq!(format!("{list:?}"), "[1, 2, 4]");
    }

    #[test]
    fn test_add_at() {
        let mut list: ArrayCollection<i32> = (0..3).collect();
        list.add_at(0, 10).unwrap();
        list.add_at(2, 20).unwrap();
        assert_eq!(format!("{list:?}"), "[10, 0, 20, 1, 2]");

        // appending goes through `add`
        assert_eq!(
            list.add_at(5, 30),
            Err(CollectionError::IndexOutOfRange { index: 5, size: 5 })
        );
        assert_eq!(list.size(), 5);

        let mut empty = ArrayCollection::new();
        assert!(empty.add_at(0, 1).is_err());
    }

    #[test]
    fn test_grow() {
        let mut list = ArrayCollection::with_capacity(0);
        list.add(0);
        assert_eq!(list.capacity(), 1);
        list.add(1);
        assert_eq!(list.capacity(), 2);
        list.add(2);
        assert_eq!(list.capacity(), 3);
        list.add(3);
        assert_eq!(list.capacity(), 4);
        list.add(4);
        assert_eq!(list.capacity(), 6);

        for i in 5..DEFAULT_CAPACITY * 4 {
            list.add(i);
        }
        for i in 0..DEFAULT_CAPACITY * 4 {
            assert_eq!(*list.get(i).unwrap(), i);
        }
    }

    #[test]
    fn test_add_at_when_full() {
        let mut list = ArrayCollection::with_capacity(2);
        list.add('b');
        list.add('c');
        list.add_at(0, 'a').unwrap();
        assert_eq!(list.capacity(), 3);
        assert_eq!(format!("{list:?}"), "['a', 'b', 'c']");
    }

    #[test]
    fn test_remove_keeps_capacity() {
        let mut list: ArrayCollection<usize> = (0..20).collect();
        let capacity = list.capacity();
        while !list.is_empty() {
            list.remove(0).unwrap();
        }
        assert_eq!(list.capacity(), capacity);
        assert!(list.remove(0).is_err());
    }

    #[test]
    fn test_clear() {
        let mut list: ArrayCollection<usize> = (0..50).collect();
        list.clear();
        assert_eq!(list.size(), 0);
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);
        assert!(list.get(0).is_err());
        list.add(7);
        assert_eq!(*list.get(0).unwrap(), 7);
    }

    #[test]
    fn test_sorted() {
        let mut list: ArrayCollection<String> =
            ["d", "c", "b", "a"].into_iter().map(String::from).collect();
        list.sorted().unwrap();
        assert_eq!(format!("{list:?}"), r#"["a", "b", "c", "d"]"#);
        list.sorted().unwrap();
        assert_eq!(format!("{list:?}"), r#"["a", "b", "c", "d"]"#);
    }

    #[test]
    fn test_sorted_rejects() {
        let mut list = ArrayCollection::new();
        list.add(Some(2));
        list.add(None);
        list.add(Some(1));
        assert_eq!(list.sorted(), Err(CollectionError::NullElement(1)));
        assert_eq!(format!("{list:?}"), "[Some(2), None, Some(1)]");

        let mut list: ArrayCollection<f64> = [3.0, f64::NAN, 1.0].into_iter().collect();
        assert_eq!(list.sorted(), Err(CollectionError::UnorderableElement(1)));
        assert_eq!(*list.get(0).unwrap(), 3.0);
    }
}
