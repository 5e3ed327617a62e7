//! Frontier backends: stack, FIFO queue, and a stable priority queue.
//!
//! The frontier stores node ids only; nodes live in the
//! [`NodeArena`](crate::node::NodeArena).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::node::{FrontierKey, NodeId};
use crate::problem::Cost;
use crate::strategy::Discipline;

/// A heap entry wrapping an item with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest priority first).
#[derive(Debug)]
struct HeapEntry<T> {
    key: Reverse<FrontierKey>,
    item: T,
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority queue with stable tie-breaking.
///
/// Every push is stamped with a monotonically increasing sequence number;
/// among equal priorities the earliest push pops first.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<HeapEntry<T>>,
    next_seq: u64,
}

impl<T> PriorityQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, item: T, priority: Cost) {
        let key = FrontierKey {
            priority,
            creation_order: self.next_seq,
        };
        self.next_seq += 1;
        self.heap.push(HeapEntry {
            key: Reverse(key),
            item,
        });
    }

    /// Remove the lowest-priority item.
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }

    /// Remove the lowest-priority item together with its priority.
    pub fn pop_with_priority(&mut self) -> Option<(T, Cost)> {
        self.heap.pop().map(|e| (e.item, e.key.0.priority))
    }

    /// Priority of the item [`PriorityQueue::pop`] would return.
    #[must_use]
    pub fn peek_priority(&self) -> Option<Cost> {
        self.heap.peek().map(|e| e.key.0.priority)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T: PartialEq> PriorityQueue<T> {
    /// Decrease-key or insert.
    ///
    /// - `item` present with a higher priority: lower it to `priority`,
    ///   keeping its original sequence number.
    /// - `item` present with an equal or lower priority: no change.
    /// - `item` absent: push it.
    ///
    /// Returns `true` if the queue changed. Linear in the queue length.
    pub fn update(&mut self, item: T, priority: Cost) -> bool {
        let mut entries = std::mem::take(&mut self.heap).into_vec();
        let position = entries.iter().position(|e| e.item == item);
        let changed = match position {
            Some(i) if entries[i].key.0.priority > priority => {
                entries[i].key.0.priority = priority;
                true
            }
            _ => false,
        };
        self.heap = BinaryHeap::from(entries);
        if position.is_none() {
            self.push(item, priority);
            return true;
        }
        changed
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The pending-node container for one search, in one of three disciplines.
#[derive(Debug)]
pub enum Frontier {
    Stack(Vec<NodeId>),
    Fifo(VecDeque<NodeId>),
    Priority(PriorityQueue<NodeId>),
}

impl Frontier {
    /// An empty frontier ordered by `discipline`.
    #[must_use]
    pub fn for_discipline(discipline: Discipline) -> Self {
        match discipline {
            Discipline::Stack => Self::Stack(Vec::new()),
            Discipline::Fifo => Self::Fifo(VecDeque::new()),
            Discipline::Priority(_) => Self::Priority(PriorityQueue::new()),
        }
    }

    /// Add a node. `priority` is ignored by the stack and FIFO backends.
    pub fn push(&mut self, node: NodeId, priority: Cost) {
        match self {
            Self::Stack(stack) => stack.push(node),
            Self::Fifo(queue) => queue.push_back(node),
            Self::Priority(queue) => queue.push(node, priority),
        }
    }

    /// Remove the next node under this frontier's discipline.
    pub fn pop(&mut self) -> Option<NodeId> {
        match self {
            Self::Stack(stack) => stack.pop(),
            Self::Fifo(queue) => queue.pop_front(),
            Self::Priority(queue) => queue.pop(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Stack(stack) => stack.len(),
            Self::Fifo(queue) => queue.len(),
            Self::Priority(queue) => queue.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
