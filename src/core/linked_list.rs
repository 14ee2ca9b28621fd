use std::fmt;

/// One link of a [`LinkedList`]. Owns the rest of the chain.
#[derive(Debug)]
pub struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[must_use]
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }
}

/// Singly linked list with head insertion.
///
/// Every node is exclusively owned by its predecessor (or by `head`), so
/// unlinking moves ownership instead of leaving a dangling link. `size` is
/// kept equal to the number of nodes reachable from `head`.
#[derive(Debug)]
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    size: usize,
}

impl<T> LinkedList<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            size: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[must_use]
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Prepends `value`; the newest value is always traversed first.
    pub fn insert(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.size += 1;
    }

    /// Unlinks the first node (head-to-tail) whose payload equals `target`.
    ///
    /// Returns `false` and leaves the chain untouched when nothing matches.
    pub fn remove(&mut self, target: &T) -> bool
    where
        T: PartialEq,
    {
        let mut link = &mut self.head;
        loop {
            match link {
                None => return false,
                Some(node) if node.value == *target => {
                    *link = node.next.take();
                    self.size -= 1;
                    return true;
                }
                Some(node) => link = &mut node.next,
            }
        }
    }

    #[must_use]
    pub fn contains(&self, target: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|value| value == target)
    }

    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.size = 0;
    }

    /// Payloads in head-to-tail order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.size,
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Iterative so long chains don't recurse through `Box` drops.
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Head")?;
        for value in self.iter() {
            write!(f, " -> {value}")?;
        }
        write!(f, " Size: {}", self.size)
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining = self.remaining.saturating_sub(1);
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
