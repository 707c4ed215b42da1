use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};
use std::mem;

use crate::error::{ListError, Result};
use crate::{Iter, IterMut};

pub mod iterator;

mod algorithms;

/// The `OrderedList` is a singly-linked list with owned nodes.
/// Every node exclusively owns its successor, and the list owns the front node.
/// Reading, writing, inserting or removing at a given index takes *O*(*index*)
/// time, since the chain can only be walked forward from the front.
///
/// The `OrderedList` contains:
/// - an owning link `front` to the first node, `None` if the list is empty;
/// - a length field `len`, equal to the number of nodes reachable from `front`.
///
/// # Naming Conventions
///
/// - a *link* is an `Option<Box<Node<T>>>` slot: either `front` or some
///   node's `next`. The link at index `i` owns the node at index `i`, and the
///   link at index `len` is the trailing `None`;
/// - *detaching* takes a node out of its link and closes the gap, *attaching*
///   puts a detached node into a link and shifts the rest of the chain back.
pub struct OrderedList<T> {
    front: Link<T>,
    /// the length of the list
    pub(crate) len: usize,
}

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) next: Link<T>,
}

// private methods
impl<T> OrderedList<T> {
    pub(crate) fn front_node(&self) -> Option<&Node<T>> {
        self.front.as_deref()
    }
    pub(crate) fn front_node_mut(&mut self) -> Option<&mut Node<T>> {
        self.front.as_deref_mut()
    }

    fn out_of_range(&self, index: usize) -> ListError {
        ListError::IndexOutOfRange {
            index,
            len: self.len,
        }
    }

    fn check_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(ListError::EmptyContainer);
        }
        Ok(())
    }

    /// Check that `at` names an existing element, i.e. `at < len`.
    fn check_element_index(&self, at: usize) -> Result<()> {
        if at >= self.len {
            return Err(self.out_of_range(at));
        }
        Ok(())
    }

    /// Check that `at` is a valid insertion point, i.e. `at <= len`.
    fn check_insert_index(&self, at: usize) -> Result<()> {
        if at > self.len {
            return Err(self.out_of_range(at));
        }
        Ok(())
    }

    /// Returns the node at index `at`, or an `IndexOutOfRange` error if
    /// `at >= len`.
    ///
    /// Every positional read is built on this forward traversal.
    pub(crate) fn node_at(&self, at: usize) -> Result<&Node<T>> {
        self.check_element_index(at)?;
        let mut node = self.front_node();
        for _ in 0..at {
            node = node.and_then(|node| node.next.as_deref());
        }
        node.ok_or_else(|| self.out_of_range(at))
    }

    pub(crate) fn node_at_mut(&mut self, at: usize) -> Result<&mut Node<T>> {
        self.check_element_index(at)?;
        let len = self.len;
        let mut node = self.front_node_mut();
        for _ in 0..at {
            node = node.and_then(|node| node.next.as_deref_mut());
        }
        node.ok_or(ListError::IndexOutOfRange { index: at, len })
    }

    /// Returns the link at index `at`, in `0..=len`.
    ///
    /// It does not check `at`; callers validate it first.
    fn link_mut(&mut self, at: usize) -> &mut Link<T> {
        walk_mut(&mut self.front, at)
    }

    /// Detach the node at index `at` from the list, and return it as a box.
    ///
    /// `at` must be in `0..len`.
    fn detach_node(&mut self, at: usize) -> Box<Node<T>> {
        let link = self.link_mut(at);
        let mut node = link
            .take()
            .expect("Cannot detach a node outside of the list bounds");
        *link = node.next.take();
        self.len -= 1;
        node
    }

    /// Attach a detached node at index `at`, so that it becomes the node at
    /// `at` and the former nodes `at..len` follow it.
    ///
    /// `at` must be in `0..=len`.
    fn attach_node(&mut self, at: usize, mut node: Box<Node<T>>) {
        let link = self.link_mut(at);
        node.next = link.take();
        *link = Some(node);
        self.len += 1;
    }

    /// Drop every node from index `len` on. Does nothing if the list is not
    /// longer than `len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        drop_chain(self.link_mut(len).take());
        self.len = len;
    }

    /// Attach new nodes for all `elements` at index `at`, each one after the
    /// previous, so that they keep their order.
    ///
    /// The nodes are chained up while detached and spliced in at once, so the
    /// list is untouched if `elements` panics.
    ///
    /// `at` must be in `0..=len`.
    pub(crate) fn attach_elements<I>(&mut self, at: usize, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut chain: Link<T> = None;
        let mut tail = &mut chain;
        let mut attached = 0;
        for element in elements {
            tail = &mut tail.insert(Node::new(element)).next;
            attached += 1;
        }
        if attached == 0 {
            return;
        }
        let link = self.link_mut(at);
        *tail = link.take();
        *link = chain;
        self.len += attached;
    }
}

impl<T> OrderedList<T> {
    /// Create an empty `OrderedList`
    ///
    /// # Examples
    /// ```
    /// use ordered_list::OrderedList;
    /// let list: OrderedList<u32> = OrderedList::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            front: None,
            len: 0,
        }
    }

    /// Returns `true` if the `OrderedList` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// assert!(list.is_empty());
    ///
    /// list.add_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length of the `OrderedList`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    ///
    /// list.add_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.add_end(3);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `OrderedList`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    ///
    /// list.add_front(2);
    /// list.add_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn clear(&mut self) {
        trace_op!(len = self.len, "clear");
        drop_chain(self.front.take());
        self.len = 0;
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.add_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.front_node().map(|node| &node.element)
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.add_end(1);
    /// list.add_end(2);
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn back(&self) -> Option<&T> {
        let at = self.len.checked_sub(1)?;
        self.node_at(at).ok().map(|node| &node.element)
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    ///
    /// list.add_front(2);
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// list.add_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn add_front(&mut self, element: T) {
        trace_op!(len = self.len, "add_front");
        self.attach_node(0, Node::new(element));
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// list.add_end(1);
    /// list.add_end(3);
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn add_end(&mut self, element: T) {
        trace_op!(len = self.len, "add_end");
        self.attach_node(self.len, Node::new(element));
    }

    /// Removes the first element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyContainer`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::{ListError, OrderedList};
    ///
    /// let mut list = OrderedList::new();
    /// assert_eq!(list.remove_front(), Err(ListError::EmptyContainer));
    ///
    /// list.add_front(1);
    /// list.add_front(3);
    /// assert_eq!(list.remove_front(), Ok(3));
    /// assert_eq!(list.remove_front(), Ok(1));
    /// ```
    pub fn remove_front(&mut self) -> Result<T> {
        self.check_not_empty()?;
        trace_op!(len = self.len, "remove_front");
        Ok(self.detach_node(0).into_element())
    }

    /// Removes the last element and returns it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyContainer`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::{ListError, OrderedList};
    ///
    /// let mut list = OrderedList::new();
    /// assert_eq!(list.remove_end(), Err(ListError::EmptyContainer));
    /// list.add_end(1);
    /// list.add_end(3);
    /// assert_eq!(list.remove_end(), Ok(3));
    /// ```
    pub fn remove_end(&mut self) -> Result<T> {
        self.check_not_empty()?;
        trace_op!(len = self.len, "remove_end");
        Ok(self.detach_node(self.len - 1).into_element())
    }

    /// Adds an element at the given index, which may be `len` to append.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = OrderedList::from_iter([1, 2, 3]);
    ///
    /// list.insert(2, 4)?;
    /// list.insert(4, 5)?;
    /// assert!(list.insert(6, 6).is_err());
    ///
    /// assert_eq!(list.into_vec(), vec![1, 2, 4, 3, 5]);
    /// # Ok::<(), ordered_list::ListError>(())
    /// ```
    pub fn insert(&mut self, at: usize, element: T) -> Result<()> {
        self.check_insert_index(at)?;
        trace_op!(at, len = self.len, "insert");
        self.attach_node(at, Node::new(element));
        Ok(())
    }

    /// Removes the element at the given index and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyContainer`] if the list is empty, or
    /// [`ListError::IndexOutOfRange`] if `at >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = OrderedList::from_iter([3, 2, 1]);
    ///
    /// assert_eq!(list.remove(1), Ok(2));
    /// assert_eq!(list.remove(0), Ok(3));
    /// assert_eq!(list.remove(0), Ok(1));
    /// ```
    pub fn remove(&mut self, at: usize) -> Result<T> {
        self.check_not_empty()?;
        self.check_element_index(at)?;
        trace_op!(at, len = self.len, "remove");
        Ok(self.detach_node(at).into_element())
    }

    /// Returns a reference to the element at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyContainer`] if the list is empty, or
    /// [`ListError::IndexOutOfRange`] if `at >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::{ListError, OrderedList};
    /// use std::iter::FromIterator;
    ///
    /// let list = OrderedList::from_iter(['a', 'b', 'c']);
    /// assert_eq!(list.get(1), Ok(&'b'));
    /// assert_eq!(list.get(3), Err(ListError::IndexOutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn get(&self, at: usize) -> Result<&T> {
        self.check_not_empty()?;
        trace_op!(at, len = self.len, "get");
        self.node_at(at).map(|node| &node.element)
    }

    /// Returns a mutable reference to the element at the given index.
    ///
    /// # Errors
    ///
    /// The same as [`get`](OrderedList::get).
    pub fn get_mut(&mut self, at: usize) -> Result<&mut T> {
        self.check_not_empty()?;
        trace_op!(at, len = self.len, "get_mut");
        self.node_at_mut(at).map(|node| &mut node.element)
    }

    /// Overwrites the element at the given index, and returns the element
    /// it replaced.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyContainer`] if the list is empty, or
    /// [`ListError::IndexOutOfRange`] if `at >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = OrderedList::from_iter(['a', 'b', 'c']);
    /// assert_eq!(list.set(2, 'x'), Ok('c'));
    /// assert_eq!(list.render(), "a b x");
    /// ```
    pub fn set(&mut self, at: usize, element: T) -> Result<T> {
        self.check_not_empty()?;
        trace_op!(at, len = self.len, "set");
        let node = self.node_at_mut(at)?;
        Ok(mem::replace(&mut node.element, element))
    }

    /// Swaps the nodes at index `a` and `b`.
    ///
    /// The nodes themselves change places by relinking the chain; no element is
    /// moved out of its node and no node is allocated. Depending on the
    /// positions, two to four links change:
    /// - `a == b`: nothing changes;
    /// - adjacent nodes `A → B`: the link of `A`, `A.next` and `B.next`;
    /// - otherwise: the links owning `A` and `B`, and both `next` links.
    ///
    /// When `A` is the front node, the list's own `front` link plays the role
    /// of its predecessor.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(max(*a*, *b*)) time.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyContainer`] if the list is empty, or
    /// [`ListError::IndexOutOfRange`] if `a` or `b` is not less than `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = OrderedList::from_iter([0, 1, 2, 3, 4]);
    /// list.swap(3, 0)?;
    /// assert_eq!(list.render(), "3 1 2 0 4");
    /// list.swap(1, 2)?;
    /// assert_eq!(list.render(), "3 2 1 0 4");
    /// # Ok::<(), ordered_list::ListError>(())
    /// ```
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_not_empty()?;
        self.check_element_index(a)?;
        self.check_element_index(b)?;
        trace_op!(a, b, len = self.len, "swap");
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        if a == b {
            return Ok(());
        }
        let link_a = self.link_mut(a);
        let mut node_a = link_a
            .take()
            .expect("Cannot swap a node outside of the list bounds");
        // The nodes strictly between `A` and `B`, followed by `B` and the rest.
        let mut between = node_a.next.take();
        let link_b = walk_mut(&mut between, b - a - 1);
        let mut node_b = link_b
            .take()
            .expect("Cannot swap a node outside of the list bounds");
        node_a.next = node_b.next.take();
        *link_b = Some(node_a);
        node_b.next = between;
        *link_a = Some(node_b);
        Ok(())
    }

    /// Rotates the list by `n` positions.
    ///
    /// A positive `n` rotates towards the end: the last `n` elements move to
    /// the front, keeping their order. A negative `n` rotates towards the
    /// front: the first `|n|` elements move to the end. Rotating by `0` or by
    /// `±len` leaves the list unchanged and does no work; otherwise exactly
    /// `|n|` nodes are detached from one end and attached at the other.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyContainer`] if the list is empty, or
    /// [`ListError::IndexOutOfRange`] if `|n| > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = OrderedList::from_iter([1, 2, 3, 4, 5]);
    /// list.shift(2)?;
    /// assert_eq!(list.render(), "4 5 1 2 3");
    /// list.shift(-3)?;
    /// assert_eq!(list.render(), "2 3 4 5 1");
    /// assert!(list.shift(6).is_err());
    /// # Ok::<(), ordered_list::ListError>(())
    /// ```
    pub fn shift(&mut self, n: isize) -> Result<()> {
        self.check_not_empty()?;
        let steps = n.unsigned_abs();
        if steps > self.len {
            return Err(self.out_of_range(steps));
        }
        trace_op!(n, len = self.len, "shift");
        // A full rotation ends where it started.
        if steps == self.len {
            return Ok(());
        }
        for _ in 0..steps {
            if n > 0 {
                let node = self.detach_node(self.len - 1);
                self.attach_node(0, node);
            } else {
                let node = self.detach_node(0);
                self.attach_node(self.len, node);
            }
        }
        Ok(())
    }

    /// Removes every element equal to `target`, and returns how many were
    /// removed. Survivors keep their relative order.
    ///
    /// Equality is decided by [`Ord::cmp`] returning [`Ordering::Equal`].
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyContainer`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = OrderedList::from_iter(['x', 'x', 'a', 'x', 'b', 'x']);
    /// assert_eq!(list.remove_matching(&'x'), Ok(4));
    /// assert_eq!(list.render(), "a b");
    /// ```
    pub fn remove_matching(&mut self, target: &T) -> Result<usize>
    where
        T: Ord,
    {
        self.check_not_empty()?;
        trace_op!(len = self.len, "remove_matching");
        let mut unvisited = self.front.take();
        // `kept` is the link at index `at`, the position the next survivor
        // takes. `at` only advances when a node is kept, so after a removal
        // the node sliding into the vacated position is examined next.
        let mut kept = &mut self.front;
        let mut at = 0_usize;
        let mut removed = 0;
        while let Some(mut node) = unvisited {
            unvisited = node.next.take();
            if node.element.cmp(target) == Ordering::Equal {
                trace_op!(at, "remove matching element");
                removed += 1;
            } else {
                kept = &mut kept.insert(node).next;
                at += 1;
            }
        }
        self.len = at;
        Ok(removed)
    }

    /// Removes `count` consecutive elements starting at index `at`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyContainer`] if the list is empty,
    /// [`ListError::IndexOutOfRange`] if `at..at + count` does not lie within
    /// `0..len`, or [`ListError::InvalidArgument`] if `count` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::{ListError, OrderedList};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = OrderedList::from_iter(0..6);
    /// list.erase(1, 3)?;
    /// assert_eq!(list.render(), "0 4 5");
    /// assert_eq!(list.erase(2, 2), Err(ListError::IndexOutOfRange { index: 4, len: 3 }));
    /// # Ok::<(), ListError>(())
    /// ```
    pub fn erase(&mut self, at: usize, count: usize) -> Result<()> {
        self.check_not_empty()?;
        self.check_element_index(at)?;
        match at.checked_add(count) {
            Some(end) if end <= self.len => {}
            _ => return Err(self.out_of_range(at.saturating_add(count))),
        }
        if count == 0 {
            return Err(ListError::InvalidArgument("erase count must be positive"));
        }
        trace_op!(at, count, len = self.len, "erase");
        let link = self.link_mut(at);
        let mut erased = link.take();
        *link = walk_mut(&mut erased, count).take();
        self.len -= count;
        drop_chain(erased);
        Ok(())
    }

    /// Inserts all `items` starting at index `at`, which may be `len` to
    /// append. The inserted elements keep the order of `items`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*at* + *k*) time, where *k* is the
    /// number of inserted items.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = OrderedList::from_iter(['A', 'D']);
    /// list.insert_list(1, vec!['M', 'A', 'Z', 'E'])?;
    /// assert_eq!(list.render(), "A M A Z E D");
    /// # Ok::<(), ordered_list::ListError>(())
    /// ```
    pub fn insert_list<I>(&mut self, at: usize, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_insert_index(at)?;
        trace_op!(at, len = self.len, "insert_list");
        self.attach_elements(at, items);
        Ok(())
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    ///
    /// list.add_end(0);
    /// list.add_end(1);
    /// list.add_end(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    ///
    /// list.add_end(0);
    /// list.add_end(1);
    /// list.add_end(2);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// assert_eq!(iter.next(), Some(&12));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Moves all elements into a `Vec`, front to back.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T: Debug> Debug for OrderedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element.
    pub(crate) fn new(element: T) -> Box<Self> {
        Box::new(Node {
            element,
            next: None,
        })
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

/// Walk `steps` links forward from `link`, and return the link reached.
///
/// # Panics
///
/// Panics if the chain starting at `link` has fewer than `steps` nodes.
fn walk_mut<T>(mut link: &mut Link<T>, steps: usize) -> &mut Link<T> {
    for _ in 0..steps {
        link = &mut link
            .as_mut()
            .expect("Cannot walk past the end of the list")
            .next;
    }
    link
}

/// Drop a detached chain node by node, instead of recursing through the
/// nested `Box` destructors.
fn drop_chain<T>(mut link: Link<T>) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

impl<T> Drop for OrderedList<T> {
    fn drop(&mut self) {
        drop_chain(self.front.take());
    }
}
