use crate::queue::Queue;

impl Queue {
    /// Sort the queue by lexical byte comparison of the payloads, ascending
    /// by default or descending when `descending` is set.
    ///
    /// This sort is stable (i.e., does not reorder equal elements) and
    /// idempotent.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time.
    ///
    /// # Current Implementation
    ///
    /// A recursive merge sort over the ring: the queue is cut in half at
    /// the midpoint found by a slow/fast pointer walk, both halves are
    /// sorted recursively, and the halves are merged by splicing whole
    /// nodes into a scratch queue. No payload is copied at any point.
    ///
    /// # Examples
    ///
    /// ```
    /// use strqueue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["5", "2", "4", "3", "1"]);
    ///
    /// queue.sort(false);
    /// assert_eq!(Vec::from_iter(queue.iter()), vec!["1", "2", "3", "4", "5"]);
    ///
    /// queue.sort(true);
    /// assert_eq!(Vec::from_iter(queue.iter()), vec!["5", "4", "3", "2", "1"]);
    /// ```
    pub fn sort(&mut self, descending: bool) {
        if self.is_empty() || self.front_node() == self.back_node() {
            return;
        }
        let mut left = self.split_in_half();
        left.sort(descending);
        self.sort(descending);

        let mut merged = Queue::new();
        merge_sorted(&mut merged, &mut left, self, descending);
        self.append(&mut merged);
    }

    /// Cut the queue at the midpoint found by a slow/fast pointer walk
    /// (the fast cursor advances two links per step, the slow one link),
    /// returning the head-side half and leaving the tail-side half in
    /// `self`.
    ///
    /// The queue must hold at least 2 elements, so that both halves are
    /// non-empty.
    fn split_in_half(&mut self) -> Queue {
        let ghost = self.ghost_node();
        // SAFETY: with at least 2 elements the midpoint is never the front
        // node, so `front..=mid.prev` is a valid non-empty range.
        unsafe {
            let mut slow = self.front_node();
            let mut fast = self.front_node();
            while fast != ghost && fast.as_ref().next != ghost {
                fast = fast.as_ref().next.as_ref().next;
                slow = slow.as_ref().next;
            }
            let detached = self.detach_nodes(self.front_node(), slow.as_ref().prev);
            Queue::from_detached(detached)
        }
    }
}

/// Merge two sorted queues into the tail of `dest` by repeatedly splicing
/// the lexically smaller front node (larger if `descending`) out of its
/// queue; ties take the node from `left`, which keeps the sort stable.
/// Whichever side remains non-empty is appended wholesale.
///
/// Both inputs are left empty.
fn merge_sorted(dest: &mut Queue, left: &mut Queue, right: &mut Queue, descending: bool) {
    loop {
        let take_left = match (left.front(), right.front()) {
            (Some(l), Some(r)) => {
                if descending {
                    l >= r
                } else {
                    l <= r
                }
            }
            _ => break,
        };
        let taken = if take_left {
            left.pop_front_node()
        } else {
            right.pop_front_node()
        };
        if let Some(node) = taken {
            dest.push_back_node(node);
        }
    }
    dest.append(left);
    dest.append(right);
}

#[cfg(test)]
mod tests {
    use crate::Queue;

    fn sorted(queue: &Queue, descending: bool) -> bool {
        let values = Vec::from_iter(queue.iter());
        values.windows(2).all(|pair| {
            if descending {
                pair[0] >= pair[1]
            } else {
                pair[0] <= pair[1]
            }
        })
    }

    fn test_sort<'a, I>(input: I)
    where
        I: IntoIterator<Item = &'a str> + Clone,
    {
        for descending in [false, true] {
            let mut queue = Queue::from_iter(input.clone());

            let mut expected = Vec::from_iter(input.clone());
            expected.sort();
            if descending {
                expected.reverse();
            }

            queue.sort(descending);
            assert!(sorted(&queue, descending));
            // The output is a permutation of the input multiset.
            assert_eq!(Vec::from_iter(queue.iter()), expected);

            // Sorting again changes nothing.
            queue.sort(descending);
            assert_eq!(Vec::from_iter(queue.iter()), expected);
        }
    }

    #[test]
    fn sort_basic() {
        test_sort([]);
        test_sort(["1"]);
        test_sort(["2", "1"]);
        test_sort(["1", "2"]);
        test_sort(["5", "2", "4", "3", "1"]);
        test_sort(["3", "3", "1", "2", "2", "1"]);
        test_sort(["b", "ab", "a", "ba", "aa", "b"]);
    }

    #[test]
    fn sort_many() {
        // A deterministic shuffle large enough to exercise the recursion.
        let values: Vec<String> = (0..200).map(|i| format!("{:03}", i * 7919 % 200)).collect();
        test_sort(values.iter().map(String::as_str));
    }

    #[test]
    fn sort_keeps_duplicates() {
        // No value may be lost or duplicated, ties included.
        let mut queue = Queue::from_iter(["b", "a", "b", "a", "a"]);
        queue.sort(false);
        assert_eq!(queue.len(), 5);
        assert_eq!(Vec::from_iter(queue.iter()), vec!["a", "a", "a", "b", "b"]);
    }

    #[test]
    fn sort_then_dedup() {
        // The intended pipeline: sorting makes duplicates adjacent, so the
        // contiguous-run deletion removes them all.
        let mut queue = Queue::from_iter(["c", "a", "b", "a", "c", "c"]);
        queue.sort(false);
        queue.delete_duplicates();
        assert_eq!(Vec::from_iter(queue.iter()), vec!["b"]);
    }
}
