use std::fmt::Display;

use tracing::{debug, trace};

use super::{LinkedList, Queue, Stack, StructureKind};

/// Owns the three visualized structures.
///
/// Every operation is total: "not found" and "empty" are ordinary return
/// values so the host can keep running and report a status message.
#[derive(Debug)]
pub struct StructureEngine<T> {
    linked_list: LinkedList<T>,
    stack: Stack<T>,
    queue: Queue<T>,
}

impl<T> Default for StructureEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StructureEngine<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            linked_list: LinkedList::new(),
            stack: Stack::new(),
            queue: Queue::new(),
        }
    }

    pub fn insert_linked_list(&mut self, value: T) {
        self.linked_list.insert(value);
        trace!(size = self.linked_list.len(), "insert linked list node");
    }

    pub fn remove_linked_list(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let removed = self.linked_list.remove(value);
        trace!(removed, size = self.linked_list.len(), "remove linked list node");
        removed
    }

    pub fn push_stack(&mut self, value: T) {
        self.stack.push(value);
        trace!(len = self.stack.len(), "push stack");
    }

    /// Pops the top; `None` is the empty-signal and leaves state unchanged.
    pub fn pop_stack(&mut self) -> Option<T> {
        let popped = self.stack.pop();
        trace!(
            empty = popped.is_none(),
            len = self.stack.len(),
            "pop stack"
        );
        popped
    }

    pub fn enqueue_queue(&mut self, value: T) {
        self.queue.enqueue(value);
        trace!(len = self.queue.len(), "enqueue queue");
    }

    /// Dequeues the front; `None` is the empty-signal and leaves state unchanged.
    pub fn dequeue_queue(&mut self) -> Option<T> {
        let dequeued = self.queue.dequeue();
        trace!(
            empty = dequeued.is_none(),
            len = self.queue.len(),
            "dequeue queue"
        );
        dequeued
    }

    #[must_use]
    pub fn peek_stack(&self) -> Option<&T> {
        self.stack.peek()
    }

    #[must_use]
    pub fn front_queue(&self) -> Option<&T> {
        self.queue.front()
    }

    #[must_use]
    pub fn is_empty(&self, kind: StructureKind) -> bool {
        self.len(kind) == 0
    }

    #[must_use]
    pub fn len(&self, kind: StructureKind) -> usize {
        match kind {
            StructureKind::LinkedList => self.linked_list.len(),
            StructureKind::Stack => self.stack.len(),
            StructureKind::Queue => self.queue.len(),
        }
    }

    /// Reinitializes all three structures to empty. Idempotent.
    pub fn reset(&mut self) {
        self.linked_list = LinkedList::new();
        self.stack.clear();
        self.queue.clear();
        debug!("reset all structures");
    }

    #[must_use]
    pub fn linked_list(&self) -> &LinkedList<T> {
        &self.linked_list
    }

    #[must_use]
    pub fn stack(&self) -> &Stack<T> {
        &self.stack
    }

    #[must_use]
    pub fn queue(&self) -> &Queue<T> {
        &self.queue
    }

    /// Ordered contents of one structure: head-to-tail, top-to-bottom or
    /// front-to-back.
    #[must_use]
    pub fn values(&self, kind: StructureKind) -> Vec<&T> {
        match kind {
            StructureKind::LinkedList => self.linked_list.iter().collect(),
            StructureKind::Stack => self.stack.iter().collect(),
            StructureKind::Queue => self.queue.iter().collect(),
        }
    }

    /// Display labels in the same order as [`StructureEngine::values`].
    #[must_use]
    pub fn labels(&self, kind: StructureKind) -> Vec<String>
    where
        T: Display,
    {
        self.values(kind)
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }
}
