//! This crate provides a queue/deque of owned string payloads, implemented
//! as a cyclic doubly-linked list, together with a library of whole-list
//! transformation algorithms.
//!
//! The [`Queue`] allows inserting and removing elements at both ends in
//! constant time, and transfers sub-ranges between queues by splicing nodes
//! instead of copying payloads. On top of the ring it builds:
//!
//! - structural editors: [`delete_middle`], [`delete_duplicates`],
//!   [`swap_pairs`], [`reverse`], [`reverse_k`];
//! - a stable in-place merge [`sort`] with a slow/fast midpoint split;
//! - the monotonic filters [`ascend`] and [`descend`];
//! - a k-way merge of queues via [`QueueSet`].
//!
//! Here is a quick example showing how the queue works.
//!
//! ```
//! use strqueue::Queue;
//!
//! let mut queue = Queue::from_iter(["5", "2", "4", "3", "1"]);
//!
//! queue.sort(false);
//! assert_eq!(Vec::from_iter(queue.iter()), vec!["1", "2", "3", "4", "5"]);
//!
//! queue.reverse_k(2);
//! assert_eq!(Vec::from_iter(queue.iter()), vec!["2", "1", "4", "3", "5"]);
//!
//! assert_eq!(queue.pop_front(), Some("2".to_string()));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the queue is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) Node N  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║  String   ║           ║  String   ║                        ┊No payload ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║   ghost   ║ ──────────────────────────────────────────────────────────┘
//! ╚═══════════╝
//!     Queue
//! ```
//!
//! Each node of the queue is allocated on the heap and contains:
//! - the `next` pointer that points to the next node (or the ghost node if
//!   it is the last element in the queue);
//! - the `prev` pointer that points to the previous node (or the ghost node
//!   if it is the first element in the queue);
//! - the owned `String` payload, except the ghost node.
//!
//! Note that the ghost node has *NO* payload: it is allocated as a bare
//! link pair, so the sentinel never carries a dead string.
//!
//! Initially, there is a ghost node in an empty queue, of which the `next`
//! and `prev` pointers point to itself. As elements are inserted,
//! `ghost.next` points to the first element, and `ghost.prev` points to the
//! last element of the queue.
//!
//! # Iteration
//!
//! Iterating over a queue is by the [`Iter`] and [`IntoIter`] iterators.
//! These are double-ended and iterate the queue like an array (fused and
//! non-cyclic).
//!
//! ```
//! use strqueue::Queue;
//!
//! let queue = Queue::from_iter(["a", "b", "c"]);
//! let mut iter = queue.iter();
//! assert_eq!(iter.next(), Some("a"));
//! assert_eq!(iter.next_back(), Some("c"));
//! assert_eq!(iter.next(), Some("b"));
//! assert_eq!(iter.next(), None);
//! ```
//!
//! # Ownership
//!
//! Every node is exclusively owned by exactly one queue at a time. The
//! algorithms that move elements between queues (the sort engine's split
//! and merge, [`Queue::append`], [`QueueSet::merge`]) transfer whole node
//! ranges as detached fragments, and both rings are restored to a valid
//! circular state before any operation returns.
//!
//! [`delete_middle`]: Queue::delete_middle
//! [`delete_duplicates`]: Queue::delete_duplicates
//! [`swap_pairs`]: Queue::swap_pairs
//! [`reverse`]: Queue::reverse
//! [`reverse_k`]: Queue::reverse_k
//! [`sort`]: Queue::sort
//! [`ascend`]: Queue::ascend
//! [`descend`]: Queue::descend

#[doc(inline)]
pub use queue::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use queue::{Queue, QueueSet};

pub mod harness;
pub mod queue;
