use crate::queue::{Node, Queue};
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// An iterator over the payloads of a `Queue`.
///
/// It uses a pair of nodes `start..end` to represent a half-open subrange
/// of the ring, where `start` is inclusive and `end` is not.
///
/// Though the `Iter` does not hold a reference from the queue, it actually
/// *borrows* (immutably) from the queue, so a phantom marker of
/// `&'a Queue` is added to protect the queue from being written.
///
/// # Examples
///
/// ```compile_fail
/// use strqueue::Queue;
///
/// let mut queue = Queue::from_iter(["a", "b", "c"]);
/// let mut iter = queue.iter();
///
/// // Won't compile, because the queue is already borrowed immutably.
/// queue.push_back("d");
/// println!("{:?}", iter.next());
/// ```
#[derive(Clone)]
pub struct Iter<'a> {
    start: NonNull<Node>,
    end: NonNull<Node>,
    _marker: PhantomData<&'a Queue>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(queue: &'a Queue) -> Self {
        let start = queue.front_node();
        let end = queue.ghost_node();
        let _marker = PhantomData;
        Self {
            start,
            end,
            _marker,
        }
    }
}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        // SAFETY: `start..end` is always a valid range of a ring, so every
        // node strictly before `end` is a non-ghost node.
        let mut ptr = self.start;
        while ptr != self.end {
            let current = unsafe { ptr.as_ref() };
            f.field(&current.value);
            ptr = current.next;
        }
        f.finish()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    /// Return `*start` and reset the iterating range to `(start.next)..end`,
    /// or return `None` if `start..end` is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start..end` is always a valid range of a ring, and it is
        // not empty here, so `start` is a non-ghost node.
        let current = unsafe { self.start.as_ref() };
        self.start = current.next;
        Some(&current.value)
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    /// Reset the iterating range to `start..(end.prev)` and return `*end`,
    /// or return `None` if `start..end` is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start..end` is always a valid range of a ring, and it is
        // not empty here, so `end.prev` is a non-ghost node.
        self.end = unsafe { self.end.as_ref().prev };
        let current = unsafe { self.end.as_ref() };
        Some(&current.value)
    }
}

impl FusedIterator for Iter<'_> {}

/// An owning iterator over the payloads of a `Queue`.
///
/// This `struct` is created by the [`into_iter`] method on [`Queue`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: Queue::into_iter
pub struct IntoIter {
    queue: Queue,
}

impl fmt::Debug for IntoIter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("queue", &self.queue)
            .finish()
    }
}

impl Iterator for IntoIter {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front()
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.queue.pop_back()
    }
}

impl FusedIterator for IntoIter {}

impl IntoIterator for Queue {
    type Item = String;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for Queue {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<S: Into<String>> Extend<S> for Queue {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push_back(value));
    }
}

unsafe impl Send for Iter<'_> {}

unsafe impl Sync for Iter<'_> {}

#[cfg(test)]
mod tests {
    use crate::Queue;

    #[test]
    fn test_iter() {
        let values = ["a", "b", "c", "d", "e"];
        let queue = Queue::from_iter(values);

        let mut iter = queue.iter();
        for item in values {
            assert_eq!(iter.next(), Some(item));
        }
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);

        let mut iter = queue.iter().rev();
        for item in values.iter().rev() {
            assert_eq!(iter.next(), Some(*item));
        }
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iter_meet_in_the_middle() {
        let queue = Queue::from_iter(["a", "b", "c", "d"]);
        let mut iter = queue.iter();
        assert_eq!(iter.next(), Some("a"));
        assert_eq!(iter.next_back(), Some("d"));
        assert_eq!(iter.next(), Some("b"));
        assert_eq!(iter.next_back(), Some("c"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_into_iter() {
        let queue = Queue::from_iter(["a", "b", "c"]);
        let collected: Vec<String> = queue.into_iter().collect();
        assert_eq!(collected, vec!["a", "b", "c"]);

        let queue = Queue::from_iter(["a", "b", "c"]);
        let collected: Vec<String> = queue.into_iter().rev().collect();
        assert_eq!(collected, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_extend() {
        let mut queue = Queue::from_iter(["a"]);
        queue.extend(["b", "c"]);
        queue.extend(vec!["d".to_string()]);
        assert_eq!(Vec::from_iter(queue.iter()), vec!["a", "b", "c", "d"]);
    }
}
