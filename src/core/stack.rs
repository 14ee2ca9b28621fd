use std::collections::VecDeque;

/// LIFO sequence whose top is index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: VecDeque<T>,
}

impl<T> Stack<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.items.push_front(value);
    }

    /// Removes the top element. `None` means the stack was empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Elements from top to bottom.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.items.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Stack;

    #[test]
    fn push_places_value_on_top() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.peek(), Some(&2));
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn pop_distinguishes_falsy_values_from_empty() {
        let mut stack = Stack::new();
        stack.push(0);
        assert_eq!(stack.pop(), Some(0));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }
}
