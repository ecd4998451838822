use crate::queue::Queue;
use std::fmt;

/// An ordered collection of queues with recorded sizes, used as the k-way
/// merge context.
///
/// Each queue is exclusively owned by the set; [`merge`](QueueSet::merge)
/// transfers every donor's contents into the first queue by splicing, so
/// no payload is ever copied between queues.
///
/// # Examples
///
/// ```
/// use strqueue::{Queue, QueueSet};
///
/// let mut set = QueueSet::new();
/// set.push(Queue::from_iter(["1", "3"]));
/// set.push(Queue::from_iter(["2", "4"]));
///
/// assert_eq!(set.merge(false), 4);
/// let merged = set.into_first().unwrap();
/// assert_eq!(Vec::from_iter(merged.iter()), vec!["1", "2", "3", "4"]);
/// ```
pub struct QueueSet {
    entries: Vec<Entry>,
}

struct Entry {
    queue: Queue,
    /// Element count recorded when the queue was added, refreshed for the
    /// accumulator after a merge.
    size: usize,
}

impl QueueSet {
    /// Create an empty `QueueSet`.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of queues held by the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set holds no queues.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a queue to the set, recording its current size.
    pub fn push(&mut self, queue: Queue) {
        let size = queue.len();
        self.entries.push(Entry { queue, size });
    }

    /// Provides a view of the queue at the given position, or `None` if it
    /// does not exist.
    pub fn get(&self, at: usize) -> Option<&Queue> {
        self.entries.get(at).map(|entry| &entry.queue)
    }

    /// Returns the size recorded for the queue at the given position, or
    /// `None` if it does not exist.
    pub fn recorded_size(&self, at: usize) -> Option<usize> {
        self.entries.get(at).map(|entry| entry.size)
    }

    /// Provides a view of the first queue, or `None` if the set is empty.
    pub fn first(&self) -> Option<&Queue> {
        self.get(0)
    }

    /// Consumes the set and returns the first queue, or `None` if the set
    /// is empty.
    pub fn into_first(mut self) -> Option<Queue> {
        if self.entries.is_empty() {
            return None;
        }
        Some(self.entries.swap_remove(0).queue)
    }

    /// Merges every queue into the first one and sorts the union,
    /// ascending or descending per `descending`.
    ///
    /// The first queue acts as the accumulator: each other queue's entire
    /// contents are spliced onto its tail without allocation or payload
    /// copy, leaving the donor empty, and the accumulator is then sorted
    /// once. The result is correct whatever order the inputs were in; for
    /// pre-sorted inputs this trades the optimal *O*(*n* * log(*k*)) heap
    /// merge for an *O*(*n* * log(*n*)) sort.
    ///
    /// Returns the final size of the accumulator and refreshes its
    /// recorded size. An empty set yields 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use strqueue::{Queue, QueueSet};
    ///
    /// let mut set = QueueSet::new();
    /// set.push(Queue::from_iter(["4", "2"]));
    /// set.push(Queue::from_iter(["3", "1"]));
    /// set.push(Queue::new());
    ///
    /// // Inputs need not be pre-sorted; the final sort makes it correct.
    /// assert_eq!(set.merge(true), 4);
    /// assert_eq!(
    ///     Vec::from_iter(set.first().unwrap().iter()),
    ///     vec!["4", "3", "2", "1"],
    /// );
    /// assert!(set.get(1).unwrap().is_empty());
    /// ```
    pub fn merge(&mut self, descending: bool) -> usize {
        let (first, rest) = match self.entries.split_first_mut() {
            Some(split) => split,
            None => return 0,
        };
        for donor in rest.iter_mut() {
            first.queue.append(&mut donor.queue);
            donor.size = 0;
        }
        first.queue.sort(descending);
        first.size = first.queue.len();
        first.size
    }
}

impl Default for QueueSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for QueueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|entry| &entry.queue))
            .finish()
    }
}

impl Extend<Queue> for QueueSet {
    fn extend<I: IntoIterator<Item = Queue>>(&mut self, iter: I) {
        iter.into_iter().for_each(|queue| self.push(queue));
    }
}

impl FromIterator<Queue> for QueueSet {
    fn from_iter<I: IntoIterator<Item = Queue>>(iter: I) -> Self {
        let mut set = QueueSet::new();
        set.extend(iter);
        set
    }
}
