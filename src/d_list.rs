//! A doubly linked list

use alloc::sync::{Arc, Weak};
use alloc::vec::Vec;
use rcu_cell::RcuCell;

use core::cell::RefCell;
use core::ops::Deref;
use core::{cmp, fmt};

use crate::collection::{validate_sortable, Collection};
use crate::error::check_index;
use crate::{order, CollectionError, Orderable};

struct Node<T> {
    next: RcuCell<Node<T>>,
    // we use Weak to avoid reference cycles, only `next` owns the neighbour
    prev: RefCell<Weak<Node<T>>>,
    data: T,
}

impl<T> Node<T> {
    fn new(data: T) -> Arc<Self> {
        Arc::new(Node {
            next: RcuCell::none(),
            prev: RefCell::new(Weak::new()),
            data,
        })
    }

    fn set_prev(&self, prev: Option<&Arc<Node<T>>>) {
        *self.prev.borrow_mut() = prev.map_or_else(Weak::new, Arc::downgrade);
    }

    fn prev(&self) -> Option<Arc<Node<T>>> {
        self.prev.borrow().upgrade()
    }
}

/// An element stored in a `LinkedCollection`. You can `deref` it to get the value.
///
/// The entry keeps its element alive even after it is removed from the list.
pub struct Entry<T>(Arc<Node<T>>);

impl<T> Clone for Entry<T> {
    fn clone(&self) -> Self {
        Entry(self.0.clone())
    }
}

impl<T> Deref for Entry<T> {
    type Target = T;
    fn deref(&self) -> &T {
        &self.0.data
    }
}

impl<T: fmt::Debug> fmt::Debug for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entry({:?})", self.0.data)
    }
}

impl<T: PartialEq> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.data == other.0.data
    }
}

impl<T> AsRef<T> for Entry<T> {
    fn as_ref(&self) -> &T {
        self.deref()
    }
}

impl<T: PartialOrd> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Entry<T>) -> Option<cmp::Ordering> {
        (**self).partial_cmp(&**other)
    }
}

impl<T: Ord> Ord for Entry<T> {
    fn cmp(&self, other: &Entry<T>) -> cmp::Ordering {
        (**self).cmp(&**other)
    }
}

impl<T: Eq> Eq for Entry<T> {}

/// Doubly linked list
///
/// Each node owns its successor and keeps a weak link to its predecessor.
/// Positional operations always walk from the head.
pub struct LinkedCollection<T> {
    head: Option<Arc<Node<T>>>,
    tail: Option<Arc<Node<T>>>,
    size: usize,
}

impl<T> Default for LinkedCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedCollection<T> {
    /// Creates a new, empty `LinkedCollection`.
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            size: 0,
        }
    }

    /// Insert an element to the front of the list.
    pub fn add_first(&mut self, elt: T) {
        self.link_front(Node::new(elt));
    }

    /// Returns the first element of the list.
    pub fn get_first(&self) -> Result<Entry<T>, CollectionError> {
        self.head
            .clone()
            .map(Entry)
            .ok_or(CollectionError::EmptyCollection)
    }

    /// Returns the last element of the list.
    pub fn get_last(&self) -> Result<Entry<T>, CollectionError> {
        self.tail
            .clone()
            .map(Entry)
            .ok_or(CollectionError::EmptyCollection)
    }

    /// Removes the first element of the list and returns it, or None if the list is empty.
    pub fn pop_front(&mut self) -> Option<Entry<T>> {
        let old_head = self.head.take()?;
        match old_head.next.take() {
            Some(new_head) => {
                new_head.set_prev(None);
                self.head = Some(new_head);
            }
            None => self.tail = None,
        }
        self.size -= 1;
        Some(Entry(old_head))
    }

    /// Removes the last element of the list and returns it, or None if the list is empty.
    pub fn pop_back(&mut self) -> Option<Entry<T>> {
        let old_tail = self.tail.take()?;
        match old_tail.prev() {
            Some(new_tail) => {
                old_tail.set_prev(None);
                new_tail.next.take();
                self.tail = Some(new_tail);
            }
            None => self.head = None,
        }
        self.size -= 1;
        Some(Entry(old_tail))
    }

    fn link_front(&mut self, node: Arc<Node<T>>) {
        node.set_prev(None);
        match self.head.take() {
            Some(old_head) => {
                old_head.set_prev(Some(&node));
                node.next.write(old_head);
            }
            None => self.tail = Some(node.clone()),
        }
        self.head = Some(node);
        self.size += 1;
    }

    fn link_back(&mut self, node: Arc<Node<T>>) {
        node.set_prev(self.tail.as_ref());
        match self.tail.take() {
            Some(old_tail) => {
                old_tail.next.write(node.clone());
            }
            None => self.head = Some(node.clone()),
        }
        self.tail = Some(node);
        self.size += 1;
    }

    /// Walks `index` steps forward from the head.
    fn walk(&self, index: usize) -> Result<Arc<Node<T>>, CollectionError> {
        let out_of_range = CollectionError::IndexOutOfRange {
            index,
            size: self.size,
        };
        let mut node = self.head.clone().ok_or(out_of_range)?;
        for _ in 0..index {
            node = node.next.read().ok_or(out_of_range)?;
        }
        Ok(node)
    }

    fn nodes(&self) -> Nodes<T> {
        Nodes {
            curr: self.head.clone(),
        }
    }

    // drops the chain node by node, so a long list can't overflow the stack
    fn unlink_all(&mut self) {
        self.tail = None;
        let mut curr = self.head.take();
        while let Some(node) = curr {
            node.set_prev(None);
            curr = node.next.take();
        }
        self.size = 0;
    }
}

/// Forward walk over the nodes of a list.
struct Nodes<T> {
    curr: Option<Arc<Node<T>>>,
}

impl<T> Iterator for Nodes<T> {
    type Item = Arc<Node<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.curr.take()?;
        self.curr = curr.next.read();
        Some(curr)
    }
}

impl<T> Collection<T> for LinkedCollection<T> {
    type Ref<'a>
        = Entry<T>
    where
        Self: 'a;

    /// Appends an element to the back of the list
    fn add(&mut self, elt: T) {
        self.link_back(Node::new(elt));
    }

    fn add_at(&mut self, index: usize, elt: T) -> Result<(), CollectionError> {
        check_index(index, self.size)?;
        if index == 0 {
            self.add_first(elt);
            return Ok(());
        }
        // the last position appends instead of going before the tail
        if index == self.size - 1 {
            self.add(elt);
            return Ok(());
        }

        let prev_node = self.walk(index - 1)?;
        // prev_node is never the tail here, since index < size - 1
        let next_node = prev_node
            .next
            .read()
            .ok_or(CollectionError::IndexOutOfRange {
                index,
                size: self.size,
            })?;
        let new_node = Node::new(elt);
        new_node.set_prev(Some(&prev_node));
        next_node.set_prev(Some(&new_node));
        new_node.next.write(next_node);
        prev_node.next.write(new_node);
        self.size += 1;
        Ok(())
    }

    fn get(&self, index: usize) -> Result<Entry<T>, CollectionError> {
        check_index(index, self.size)?;
        if index == 0 {
            return self.get_first();
        }
        if index == self.size - 1 {
            return self.get_last();
        }
        self.walk(index).map(Entry)
    }

    fn remove(&mut self, index: usize) -> Result<(), CollectionError> {
        check_index(index, self.size)?;
        if index == 0 {
            self.pop_front();
            return Ok(());
        }
        if index == self.size - 1 {
            self.pop_back();
            return Ok(());
        }

        let curr_node = self.walk(index)?;
        let out_of_range = CollectionError::IndexOutOfRange {
            index,
            size: self.size,
        };
        // an inner node always has both neighbours
        let prev_node = curr_node.prev().ok_or(out_of_range)?;
        let next_node = curr_node.next.read().ok_or(out_of_range)?;
        next_node.set_prev(Some(&prev_node));
        prev_node.next.write(next_node);
        curr_node.next.take();
        curr_node.set_prev(None);
        self.size -= 1;
        Ok(())
    }

    fn clear(&mut self) {
        tracing::debug!(size = self.size, "linked collection cleared");
        self.unlink_all();
    }

    fn sorted(&mut self) -> Result<(), CollectionError>
    where
        T: Orderable,
    {
        let mut nodes: Vec<Arc<Node<T>>> = Vec::with_capacity(self.size);
        nodes.extend(self.nodes());
        validate_sortable(nodes.iter().map(|node| &node.data))?;

        tracing::trace!(size = self.size, "sorting linked collection");
        nodes.sort_unstable_by(|a, b| order::compare(&a.data, &b.data));
        self.unlink_all();
        for node in nodes {
            self.link_back(node);
        }
        Ok(())
    }

    fn size(&self) -> usize {
        self.size
    }
}

impl<T> Drop for LinkedCollection<T> {
    fn drop(&mut self) {
        self.unlink_all();
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.nodes().map(Entry)).finish()
    }
}

impl<T> FromIterator<T> for LinkedCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for elt in iter {
            list.add(elt);
        }
        list
    }
}
