use crate::queue::{Node, Queue};
use std::mem;
use std::ptr::NonNull;

mod sort;

impl Queue {
    /// Removes the element at index ⌊n/2⌋ (0-indexed from the head) and
    /// releases it. For a single-element queue this removes the sole
    /// element.
    ///
    /// The midpoint is located by a slow/fast pointer walk, not by random
    /// access.
    ///
    /// Returns `false` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use strqueue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["a", "b", "c", "d"]);
    /// assert!(queue.delete_middle());
    /// assert_eq!(Vec::from_iter(queue.iter()), vec!["a", "b", "d"]);
    /// ```
    pub fn delete_middle(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        let ghost = self.ghost_node();
        // SAFETY: `slow` and `fast` only ever walk `next` links of this
        // ring, and `slow` stops on a non-ghost node, so detaching it is
        // valid.
        unsafe {
            let mut slow = self.front_node();
            let mut fast = self.front_node();
            while fast != ghost && fast.as_ref().next != ghost {
                fast = fast.as_ref().next.as_ref().next;
                slow = slow.as_ref().next;
            }
            drop(self.detach_node(slow));
        }
        true
    }

    /// Removes every maximal run of two or more adjacent elements with
    /// identical payloads, including the first element of the run, and
    /// releases them.
    ///
    /// Non-adjacent duplicates are *not* detected; this matches the
    /// intended use after sorting, where equal payloads are contiguous.
    ///
    /// Returns `false` if the queue has fewer than two elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use strqueue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["a", "a", "b", "c", "c", "c"]);
    /// assert!(queue.delete_duplicates());
    /// assert_eq!(Vec::from_iter(queue.iter()), vec!["b"]);
    /// ```
    pub fn delete_duplicates(&mut self) -> bool {
        let ghost = self.ghost_node();
        // SAFETY: the scan follows `next` links of this ring only; every
        // detached node is a non-ghost node of this queue.
        unsafe {
            let mut cur = self.front_node();
            if cur == ghost || cur.as_ref().next == ghost {
                return false;
            }
            while cur != ghost {
                let mut next = cur.as_ref().next;
                let mut run = false;
                while next != ghost && next.as_ref().value == cur.as_ref().value {
                    let dup = next;
                    next = next.as_ref().next;
                    drop(self.detach_node(dup));
                    run = true;
                }
                // The first element of a duplicate run goes too.
                if run {
                    drop(self.detach_node(cur));
                }
                cur = next;
            }
        }
        true
    }

    /// Exchanges the payloads of consecutive index pairs (0,1), (2,3), …
    /// A trailing unpaired last element is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use strqueue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["1", "2", "3"]);
    /// queue.swap_pairs();
    /// assert_eq!(Vec::from_iter(queue.iter()), vec!["2", "1", "3"]);
    /// ```
    pub fn swap_pairs(&mut self) {
        let ghost = self.ghost_node();
        // SAFETY: `first` and `second` are distinct non-ghost nodes of this
        // ring whenever the swap happens.
        unsafe {
            let mut first = self.front_node();
            while first != ghost {
                let mut second = first.as_ref().next;
                if second == ghost {
                    break;
                }
                mem::swap(&mut first.as_mut().value, &mut second.as_mut().value);
                first = second.as_ref().next;
            }
        }
    }

    /// Reverses the order of all payloads in place, with two cursors
    /// closing in from both ends. A single remaining middle element is
    /// untouched. Applying `reverse` twice restores the original order.
    ///
    /// # Examples
    ///
    /// ```
    /// use strqueue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["1", "2", "3", "4"]);
    /// queue.reverse();
    /// assert_eq!(Vec::from_iter(queue.iter()), vec!["4", "3", "2", "1"]);
    /// ```
    pub fn reverse(&mut self) {
        if self.is_empty() {
            return;
        }
        // SAFETY: `front..=back` is the full range of a non-empty ring.
        unsafe { reverse_range(self.front_node(), self.back_node()) }
    }

    /// Partitions the queue into consecutive blocks of exactly `k` elements
    /// from the head and reverses the payload order inside each complete
    /// block. A final incomplete block (fewer than `k` elements) is left
    /// unreversed. `k <= 1` is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use strqueue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["1", "2", "3", "4", "5"]);
    /// queue.reverse_k(2);
    /// assert_eq!(Vec::from_iter(queue.iter()), vec!["2", "1", "4", "3", "5"]);
    /// ```
    pub fn reverse_k(&mut self, k: usize) {
        if k <= 1 {
            return;
        }
        let ghost = self.ghost_node();
        // SAFETY: `block..=back` is a valid non-ghost range of this ring
        // whenever a complete block is found.
        unsafe {
            let mut block = self.front_node();
            while block != ghost {
                let mut back = block;
                let mut len = 1;
                while len < k && back.as_ref().next != ghost {
                    back = back.as_ref().next;
                    len += 1;
                }
                if len < k {
                    break;
                }
                let next_block = back.as_ref().next;
                reverse_range(block, back);
                block = next_block;
            }
        }
    }

    /// Single right-to-left pass keeping only elements strictly greater
    /// than the running maximum seen so far from the right; every other
    /// element is removed and released.
    ///
    /// Returns the resulting element count. An empty queue yields 0, a
    /// singleton yields 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use strqueue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["2", "1", "5"]);
    /// assert_eq!(queue.ascend(), 1);
    /// assert_eq!(Vec::from_iter(queue.iter()), vec!["5"]);
    /// ```
    pub fn ascend(&mut self) -> usize {
        self.monotonic(|candidate, running| candidate > running)
    }

    /// The mirror of [`ascend`](Queue::ascend): keeps only elements
    /// strictly less than the running minimum seen so far from the right.
    ///
    /// Returns the resulting element count.
    ///
    /// # Examples
    ///
    /// ```
    /// use strqueue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["2", "1", "5"]);
    /// assert_eq!(queue.descend(), 2);
    /// assert_eq!(Vec::from_iter(queue.iter()), vec!["1", "5"]);
    /// ```
    pub fn descend(&mut self) -> usize {
        self.monotonic(|candidate, running| candidate < running)
    }

    fn monotonic<F>(&mut self, keep: F) -> usize
    where
        F: Fn(&str, &str) -> bool,
    {
        let ghost = self.ghost_node();
        // SAFETY: the pass follows `prev` links of this ring only; the
        // running extremum node is never detached, so reading its payload
        // stays valid, and every detached node is a non-ghost node.
        unsafe {
            let mut cur = self.back_node();
            if cur == ghost {
                return 0;
            }
            let mut running = cur;
            let mut count = 1;
            cur = cur.as_ref().prev;
            while cur != ghost {
                let prev = cur.as_ref().prev;
                if keep(&cur.as_ref().value, &running.as_ref().value) {
                    running = cur;
                    count += 1;
                } else {
                    drop(self.detach_node(cur));
                }
                cur = prev;
            }
            count
        }
    }
}

/// Reverse the payload order of the closed range `front..=back` by
/// swapping owned payloads pairwise from both ends.
///
/// It is unsafe because it does not check whether `front..=back` is a
/// valid range of non-ghost nodes.
unsafe fn reverse_range(mut front: NonNull<Node>, mut back: NonNull<Node>) {
    while front != back && back.as_ref().next != front {
        mem::swap(&mut front.as_mut().value, &mut back.as_mut().value);
        front = front.as_ref().next;
        back = back.as_ref().prev;
    }
}

#[cfg(test)]
mod tests {
    use crate::Queue;

    fn queue_eq<'a, I>(queue: &Queue, expected: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        assert_eq!(Vec::from_iter(queue.iter()), Vec::from_iter(expected));
    }

    #[test]
    fn delete_middle() {
        fn test_delete_middle<'a, I1, I2>(input: I1, expected: I2)
        where
            I1: IntoIterator<Item = &'a str>,
            I2: IntoIterator<Item = &'a str>,
        {
            let mut queue = Queue::from_iter(input);
            assert!(queue.delete_middle());
            queue_eq(&queue, expected);
        }
        test_delete_middle(["a"], []);
        test_delete_middle(["a", "b"], ["a"]);
        test_delete_middle(["a", "b", "c"], ["a", "c"]);
        test_delete_middle(["a", "b", "c", "d"], ["a", "b", "d"]);
        test_delete_middle(["a", "b", "c", "d", "e"], ["a", "b", "d", "e"]);

        let mut empty = Queue::new();
        assert!(!empty.delete_middle());
        assert!(empty.is_empty());
    }

    #[test]
    fn delete_duplicates() {
        fn test_dedup<'a, I1, I2>(input: I1, expected: I2)
        where
            I1: IntoIterator<Item = &'a str>,
            I2: IntoIterator<Item = &'a str>,
        {
            let mut queue = Queue::from_iter(input);
            queue.delete_duplicates();
            queue_eq(&queue, expected);
        }
        test_dedup(["a", "a", "b", "c", "c", "c"], ["b"]);
        test_dedup(["a", "b", "c"], ["a", "b", "c"]);
        test_dedup(["a", "a"], []);
        test_dedup(["a", "a", "a", "b"], ["b"]);
        test_dedup(["b", "a", "a", "a"], ["b"]);
        // Non-adjacent duplicates survive; only contiguous runs go.
        test_dedup(["a", "b", "a"], ["a", "b", "a"]);

        assert!(!Queue::new().delete_duplicates());
        assert!(!Queue::from_iter(["a"]).delete_duplicates());
    }

    #[test]
    fn swap_pairs() {
        fn test_swap<'a, I1, I2>(input: I1, expected: I2)
        where
            I1: IntoIterator<Item = &'a str>,
            I2: IntoIterator<Item = &'a str>,
        {
            let mut queue = Queue::from_iter(input);
            queue.swap_pairs();
            queue_eq(&queue, expected);
        }
        test_swap([], []);
        test_swap(["1"], ["1"]);
        test_swap(["1", "2"], ["2", "1"]);
        test_swap(["1", "2", "3"], ["2", "1", "3"]);
        test_swap(["1", "2", "3", "4"], ["2", "1", "4", "3"]);
    }

    #[test]
    fn reverse() {
        fn test_reverse<'a, I1, I2>(input: I1, expected: I2)
        where
            I1: IntoIterator<Item = &'a str> + Clone,
            I2: IntoIterator<Item = &'a str>,
        {
            let mut queue = Queue::from_iter(input.clone());
            queue.reverse();
            queue_eq(&queue, expected);
            // Reversal is an involution.
            queue.reverse();
            queue_eq(&queue, input);
        }
        test_reverse([], []);
        test_reverse(["1"], ["1"]);
        test_reverse(["1", "2"], ["2", "1"]);
        test_reverse(["1", "2", "3"], ["3", "2", "1"]);
        test_reverse(["1", "2", "3", "4"], ["4", "3", "2", "1"]);
    }

    #[test]
    fn reverse_k() {
        fn test_reverse_k<'a, I1, I2>(input: I1, k: usize, expected: I2)
        where
            I1: IntoIterator<Item = &'a str>,
            I2: IntoIterator<Item = &'a str>,
        {
            let mut queue = Queue::from_iter(input);
            queue.reverse_k(k);
            queue_eq(&queue, expected);
        }
        test_reverse_k(["1", "2", "3", "4", "5"], 2, ["2", "1", "4", "3", "5"]);
        test_reverse_k(["1", "2", "3", "4", "5", "6"], 3, ["3", "2", "1", "6", "5", "4"]);
        test_reverse_k(["1", "2", "3", "4", "5"], 3, ["3", "2", "1", "4", "5"]);
        test_reverse_k(["1", "2"], 3, ["1", "2"]);
        test_reverse_k(["1", "2", "3"], 1, ["1", "2", "3"]);
        test_reverse_k(["1", "2", "3"], 0, ["1", "2", "3"]);
        test_reverse_k([], 2, []);
    }

    #[test]
    fn ascend() {
        let mut queue = Queue::from_iter(["2", "1", "5"]);
        assert_eq!(queue.ascend(), 1);
        queue_eq(&queue, ["5"]);

        let mut queue = Queue::from_iter(["5", "2", "4", "3", "1"]);
        assert_eq!(queue.ascend(), 4);
        queue_eq(&queue, ["5", "4", "3", "1"]);

        // Equal values are not strictly greater, so only one survives.
        let mut queue = Queue::from_iter(["3", "3", "3"]);
        assert_eq!(queue.ascend(), 1);
        queue_eq(&queue, ["3"]);

        assert_eq!(Queue::new().ascend(), 0);
        let mut singleton = Queue::from_iter(["7"]);
        assert_eq!(singleton.ascend(), 1);
        queue_eq(&singleton, ["7"]);
    }

    #[test]
    fn descend() {
        let mut queue = Queue::from_iter(["2", "1", "5"]);
        assert_eq!(queue.descend(), 2);
        queue_eq(&queue, ["1", "5"]);

        let mut queue = Queue::from_iter(["1", "4", "2", "3", "5"]);
        assert_eq!(queue.descend(), 4);
        queue_eq(&queue, ["1", "2", "3", "5"]);

        assert_eq!(Queue::new().descend(), 0);
        let mut singleton = Queue::from_iter(["7"]);
        assert_eq!(singleton.descend(), 1);
        queue_eq(&singleton, ["7"]);
    }
}
