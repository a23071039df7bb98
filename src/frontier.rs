//! Per-query working storage for the traversals.

use std::collections::VecDeque;

/// FIFO queue of vertex ids, used as the BFS frontier.
#[derive(Debug, Default)]
pub struct IdQueue {
    items: VecDeque<usize>,
}

impl IdQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` at the back.
    pub fn enqueue(&mut self, id: usize) {
        self.items.push_back(id);
    }

    /// Removes and returns the id at the front.
    pub fn dequeue(&mut self) -> Option<usize> {
        self.items.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// LIFO stack of vertex ids.
///
/// Shortest-path reconstruction pushes ids from the destination back to the
/// origin and pops them in forward order.
#[derive(Debug, Default)]
pub struct IdStack {
    items: Vec<usize>,
}

impl IdStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: usize) {
        self.items.push(id);
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.items.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Drains the stack head-first.
impl Iterator for IdStack {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.pop()
    }
}
