use std::fmt::{Debug, Formatter};
use std::ptr::NonNull;

pub mod iterator;

mod algorithms;
mod merge;

pub use merge::QueueSet;

use crate::Iter;

/// The `Queue` is a deque of owned string payloads, implemented as a cyclic
/// doubly-linked list with a payload-free sentinel (the "ghost" node).
/// Inserting and removing at either end take *O*(1) time; counting the
/// elements takes *O*(*n*) time.
///
/// Contents never move between queues by copying: sub-ranges of nodes are
/// detached from one ring and attached to another, and both rings are
/// restored to a valid circular state before any such operation returns.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the ghost node).
pub struct Queue {
    ghost: Box<Link>,
}

#[repr(C)]
pub(crate) struct Node {
    pub(crate) next: NonNull<Node>,
    pub(crate) prev: NonNull<Node>,
    pub(crate) value: String,
}

/// The link prefix common to every node. The ghost node is allocated as a
/// bare `Link` and pointer-cast to `Node` for ring navigation; its payload
/// field does not exist and must never be read or written.
#[repr(C)]
struct Link {
    next: NonNull<Node>,
    prev: NonNull<Node>,
}

/// Nodes fragment detached from a queue, used in splitting or splicing.
///
/// When detached, reading of `front.prev` and `back.next` is invalid.
pub(crate) struct DetachedNodes {
    pub(crate) front: NonNull<Node>,
    pub(crate) back: NonNull<Node>,
}

pub(crate) unsafe fn connect(mut prev: NonNull<Node>, mut next: NonNull<Node>) {
    prev.as_mut().next = next;
    next.as_mut().prev = prev;
}

// private methods
impl Queue {
    pub(crate) fn ghost_node(&self) -> NonNull<Node> {
        NonNull::from(self.ghost.as_ref()).cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node> {
        // SAFETY: `ghost.next` is always valid (either the ghost itself, or
        // the first node in the ring).
        unsafe { self.ghost_node().as_ref().next }
    }
    pub(crate) fn back_node(&self) -> NonNull<Node> {
        // SAFETY: `ghost.prev` is always valid (either the ghost itself, or
        // the last node in the ring).
        unsafe { self.ghost_node().as_ref().prev }
    }

    /// Detach a single node `node` from the queue, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the
    /// queue, or whether it is the ghost node. If either is violated, this
    /// call will make the ring ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node>) -> Box<Node> {
        let node = Box::from_raw(node.as_ptr());
        connect(node.prev, node.next);
        node
    }

    /// Attach a single node `node` to the queue, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to the queue, or whether they are adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node>,
        next: NonNull<Node>,
        node: NonNull<Node>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }

    /// Detach a range of nodes `front..=back` from the queue, and return the
    /// detached nodes.
    ///
    /// It is unsafe because it does not check whether `front..=back` is a
    /// valid range (i.e. `front` must **NOT** be at the right of `back`), or
    /// whether it belongs to the queue.
    pub(crate) unsafe fn detach_nodes(
        &mut self,
        front: NonNull<Node>,
        back: NonNull<Node>,
    ) -> DetachedNodes {
        connect(front.as_ref().prev, back.as_ref().next);
        DetachedNodes { front, back }
    }

    /// Attach a range of detached nodes to the queue, between `prev` and
    /// `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to the queue, or whether they are adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    pub(crate) unsafe fn attach_nodes(
        &mut self,
        prev: NonNull<Node>,
        next: NonNull<Node>,
        detached: DetachedNodes,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, detached.front);
        connect(detached.back, next);
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, detached.front);
            assert_adjacent(detached.back, next);
        }
    }

    /// Detach all nodes from the queue, and return the detached nodes, or
    /// return `None` if the queue is empty.
    ///
    /// It is safe because `self.front_node()..=self.back_node()` is a valid
    /// range.
    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedNodes> {
        if self.is_empty() {
            return None;
        }
        unsafe { Some(self.detach_nodes(self.front_node(), self.back_node())) }
    }

    /// Construct a queue from detached nodes.
    ///
    /// It is safe because the detached nodes are guaranteed to be a valid
    /// range at construction.
    pub(crate) fn from_detached(detached: DetachedNodes) -> Self {
        let mut queue = Queue::new();
        unsafe {
            queue.attach_nodes(queue.ghost_node(), queue.ghost_node(), detached);
        }
        queue
    }

    /// Unlink the front node and return it as a box, or return `None` if
    /// the queue is empty. The node keeps its payload; no copy happens.
    pub(crate) fn pop_front_node(&mut self) -> Option<Box<Node>> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the queue is non-empty, so the front node is a non-ghost
        // node of this queue.
        Some(unsafe { self.detach_node(self.front_node()) })
    }

    /// Link an owned node at the back of the queue.
    pub(crate) fn push_back_node(&mut self, node: Box<Node>) {
        let node = NonNull::from(Box::leak(node));
        // SAFETY: `back_node` and `ghost_node` are adjacent nodes of this
        // queue, and `node` is exclusively owned here.
        unsafe { self.attach_node(self.back_node(), self.ghost_node(), node) };
    }
}

impl Queue {
    /// Create an empty `Queue`.
    ///
    /// # Examples
    /// ```
    /// use strqueue::Queue;
    /// let queue = Queue::new();
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self { ghost: new_ghost() }
    }

    /// Returns `true` if the `Queue` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use strqueue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert!(queue.is_empty());
    ///
    /// queue.push_front("foo");
    /// assert!(!queue.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.ghost_node()
    }

    /// Returns the number of elements in the `Queue`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time; the length is counted
    /// by a full traversal of the ring rather than cached.
    ///
    /// # Examples
    ///
    /// ```
    /// use strqueue::Queue;
    ///
    /// let mut queue = Queue::new();
    ///
    /// queue.push_front("b");
    /// assert_eq!(queue.len(), 1);
    ///
    /// queue.push_front("a");
    /// queue.push_back("c");
    /// assert_eq!(queue.len(), 3);
    /// ```
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Removes all elements from the `Queue`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a view of the front element, or `None` if the queue is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use strqueue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.front(), None);
    ///
    /// queue.push_front("a");
    /// assert_eq!(queue.front(), Some("a"));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&str> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the queue is non-empty, so the front node is a non-ghost
        // node and holds a valid payload.
        Some(unsafe { &self.front_node().as_ref().value })
    }

    /// Provides a view of the back element, or `None` if the queue is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use strqueue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.back(), None);
    ///
    /// queue.push_back("a");
    /// assert_eq!(queue.back(), Some("a"));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&str> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the queue is non-empty, so the back node is a non-ghost
        // node and holds a valid payload.
        Some(unsafe { &self.back_node().as_ref().value })
    }

    /// Adds an element first in the queue. The caller's string data is
    /// copied into an owned payload.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use strqueue::Queue;
    ///
    /// let mut queue = Queue::new();
    ///
    /// queue.push_front("b");
    /// assert_eq!(queue.front(), Some("b"));
    ///
    /// queue.push_front("a");
    /// assert_eq!(queue.front(), Some("a"));
    /// ```
    pub fn push_front<S: Into<String>>(&mut self, value: S) {
        let node = Node::new_detached(value.into());
        // SAFETY: `ghost_node` and `front_node` are adjacent nodes of this
        // queue, and `node` is freshly allocated.
        unsafe { self.attach_node(self.ghost_node(), self.front_node(), node) };
    }

    /// Appends an element to the back of the queue. The caller's string
    /// data is copied into an owned payload.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use strqueue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.push_back("a");
    /// queue.push_back("b");
    /// assert_eq!(queue.back(), Some("b"));
    /// ```
    pub fn push_back<S: Into<String>>(&mut self, value: S) {
        let node = Node::new_detached(value.into());
        // SAFETY: `back_node` and `ghost_node` are adjacent nodes of this
        // queue, and `node` is freshly allocated.
        unsafe { self.attach_node(self.back_node(), self.ghost_node(), node) };
    }

    /// Removes the first element and returns its payload, or `None` if the
    /// queue is empty. Ownership of the string moves to the caller.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use strqueue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.pop_front(), None);
    ///
    /// queue.push_front("a");
    /// queue.push_front("b");
    /// assert_eq!(queue.pop_front(), Some("b".to_string()));
    /// assert_eq!(queue.pop_front(), Some("a".to_string()));
    /// assert_eq!(queue.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<String> {
        self.pop_front_node().map(|node| node.value)
    }

    /// Removes the last element and returns its payload, or `None` if the
    /// queue is empty. Ownership of the string moves to the caller.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use strqueue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.pop_back(), None);
    /// queue.push_back("a");
    /// queue.push_back("b");
    /// assert_eq!(queue.pop_back(), Some("b".to_string()));
    /// ```
    pub fn pop_back(&mut self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the queue is non-empty, so the back node is a non-ghost
        // node of this queue.
        let node = unsafe { self.detach_node(self.back_node()) };
        Some(node.value)
    }

    /// Provides a forward iterator over the payloads.
    ///
    /// # Examples
    ///
    /// ```
    /// use strqueue::Queue;
    ///
    /// let queue = Queue::from_iter(["a", "b", "c"]);
    ///
    /// let mut iter = queue.iter();
    /// assert_eq!(iter.next(), Some("a"));
    /// assert_eq!(iter.next(), Some("b"));
    /// assert_eq!(iter.next(), Some("c"));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Moves all elements from `other` to the end of the queue.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`.
    /// After this operation, `other` becomes empty. No payload is copied
    /// and no node is reallocated.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use strqueue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["a"]);
    /// let mut other = Queue::from_iter(["b", "c"]);
    ///
    /// queue.append(&mut other);
    ///
    /// assert_eq!(Vec::from_iter(queue), vec!["a", "b", "c"]);
    /// assert!(other.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // `self.back_node()` and `self.ghost_node()` are valid nodes in
            // the queue and they are adjacent, so it is safe.
            unsafe { self.attach_nodes(self.back_node(), self.ghost_node(), detached) }
        }
    }
}

impl Debug for Queue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Queue {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for Queue {}

impl Clone for Queue {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl Node {
    /// Create a detached node with the given payload. The links are
    /// dangling until the node is attached to a ring.
    pub(crate) fn new_detached(value: String) -> NonNull<Node> {
        NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            value,
        })))
    }
}

fn new_ghost() -> Box<Link> {
    let mut ghost = Box::new(Link {
        next: NonNull::dangling(),
        prev: NonNull::dangling(),
    });
    // An empty ring is the ghost node linked to itself.
    let ghost_ptr = NonNull::from(ghost.as_ref()).cast();
    ghost.next = ghost_ptr;
    ghost.prev = ghost_ptr;
    ghost
}

#[cfg(debug_assertions)]
fn assert_adjacent(prev: NonNull<Node>, next: NonNull<Node>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

impl Drop for Queue {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl Send for Queue {}

unsafe impl Sync for Queue {}

#[cfg(test)]
mod tests {
    use crate::Queue;

    fn queue_eq<'a, I>(queue: &Queue, expected: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        assert_eq!(
            Vec::from_iter(queue.iter()),
            Vec::from_iter(expected),
            "queue contents mismatch"
        );
    }

    #[test]
    fn queue_create() {
        let mut queue = Queue::new();
        assert!(queue.is_empty());
        queue.push_back("1");
        assert!(!queue.is_empty());
        assert_eq!(queue.pop_back(), Some("1".to_string()));
        assert!(queue.is_empty());
    }

    #[test]
    fn queue_push_and_pop() {
        let mut queue = Queue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);

        assert_eq!(queue.front(), None);
        assert_eq!(queue.back(), None);
        assert_eq!(queue.pop_front(), None);
        assert_eq!(queue.pop_back(), None);

        queue.push_back("1");
        assert_eq!(queue.back(), Some("1"));
        assert_eq!(queue.pop_front(), Some("1".to_string()));
        assert_eq!(queue.pop_back(), None);
        assert!(queue.is_empty());

        queue.push_front("1");
        queue.push_front("2");
        queue.push_back("3");
        queue_eq(&queue, ["2", "1", "3"]);
        assert_eq!(queue.pop_front(), Some("2".to_string()));
        assert_eq!(queue.pop_back(), Some("3".to_string()));

        assert_eq!(queue.front(), Some("1"));
        assert_eq!(queue.pop_front(), Some("1".to_string()));
        assert_eq!(queue.front(), None);
        assert_eq!(queue.back(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn queue_size_accounting() {
        // After n inserts and m removes, the length is n - m.
        let mut queue = Queue::new();
        for i in 0..10 {
            queue.push_back(i.to_string());
        }
        assert_eq!(queue.len(), 10);
        for _ in 0..4 {
            assert!(queue.pop_front().is_some());
        }
        assert_eq!(queue.len(), 6);
        for _ in 0..6 {
            assert!(queue.pop_back().is_some());
        }
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.pop_back(), None);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn queue_round_trip() {
        // insert then remove returns the value unchanged.
        let mut queue = Queue::new();
        queue.push_back("it has spaces and \u{1f980} too");
        assert_eq!(
            queue.pop_front(),
            Some("it has spaces and \u{1f980} too".to_string())
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn queue_append() {
        fn test_append<'a, I1, I2, I3>(queue: I1, other: I2, appended: I3)
        where
            I1: IntoIterator<Item = &'a str>,
            I2: IntoIterator<Item = &'a str>,
            I3: IntoIterator<Item = &'a str>,
        {
            let mut queue = Queue::from_iter(queue);
            let mut other = Queue::from_iter(other);
            let total = queue.len() + other.len();

            queue.append(&mut other);
            assert!(other.is_empty());
            assert_eq!(queue.len(), total);
            queue_eq(&queue, appended);
        }
        test_append(["a", "b"], ["c", "d"], ["a", "b", "c", "d"]);
        test_append([], ["c", "d"], ["c", "d"]);
        test_append(["a", "b"], [], ["a", "b"]);
        test_append([], [], []);
        test_append(["a"], ["a"], ["a", "a"]);
    }

    #[test]
    fn queue_clear_and_clone() {
        let mut queue = Queue::from_iter(["a", "b", "c"]);
        let cloned = queue.clone();
        queue.clear();
        assert!(queue.is_empty());
        queue_eq(&cloned, ["a", "b", "c"]);
        assert_ne!(queue, cloned);
    }
}
