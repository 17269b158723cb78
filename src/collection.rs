use core::ops::Deref;

use crate::{CollectionError, Orderable};

/// An ordered, zero-indexed sequence of `T` with a mutable length.
///
/// Valid indices are always `0..size()`. Every failing operation returns a
/// [`CollectionError`] and leaves the collection as it was.
pub trait Collection<T> {
    /// Read access to a stored element, returned by [`get`](Collection::get).
    type Ref<'a>: Deref<Target = T>
    where
        Self: 'a;

    /// Appends `value` at the end.
    fn add(&mut self, value: T);

    /// Inserts `value` before the element at `index`.
    ///
    /// `index` must address a live element, so `index == size()` is rejected;
    /// use [`add`](Collection::add) to append.
    fn add_at(&mut self, index: usize, value: T) -> Result<(), CollectionError>;

    /// Returns the element at `index`.
    fn get(&self, index: usize) -> Result<Self::Ref<'_>, CollectionError>;

    /// Removes the element at `index`, shifting later elements one position down.
    fn remove(&mut self, index: usize) -> Result<(), CollectionError>;

    /// Removes all elements.
    fn clear(&mut self);

    /// Sorts the collection in place by the elements' natural order.
    ///
    /// Fails with [`CollectionError::NullElement`] if an element is absent
    /// and with [`CollectionError::UnorderableElement`] if an element has no
    /// total order. Nothing is moved when it fails.
    fn sorted(&mut self) -> Result<(), CollectionError>
    where
        T: Orderable;

    /// Number of elements in the collection.
    fn size(&self) -> usize;

    /// Returns true if the collection holds no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Finds the first element that cannot be sorted, in index order.
pub(crate) fn validate_sortable<'a, T, I>(elements: I) -> Result<(), CollectionError>
where
    T: Orderable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for (index, elt) in elements.into_iter().enumerate() {
        if !elt.is_present() {
            return Err(CollectionError::NullElement(index));
        }
        if !elt.is_orderable() {
            return Err(CollectionError::UnorderableElement(index));
        }
    }
    Ok(())
}
