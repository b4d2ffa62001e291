use std::fmt;

use crate::SegmentedDeque;

/// A first-in, first-out queue backed by a [`SegmentedDeque`].
///
/// Elements enter at the back and leave from the front.
///
/// ```
/// use segmented_deque::Queue;
///
/// let mut queue = Queue::new();
/// queue.push('a');
/// queue.push('b');
/// assert_eq!(queue.pop(), Some('a'));
/// assert_eq!(queue.front(), Some(&'b'));
/// ```
pub struct Queue<T> {
    deque: SegmentedDeque<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Queue {
            deque: SegmentedDeque::new(),
        }
    }

    /// Returns the number of queued elements.
    pub fn len(&self) -> usize {
        self.deque.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// The element that the next [`pop`](Queue::pop) returns.
    pub fn front(&self) -> Option<&T> {
        self.deque.front()
    }

    /// The most recently pushed element.
    pub fn back(&self) -> Option<&T> {
        self.deque.back()
    }

    /// Adds an element at the back of the queue.
    pub fn push(&mut self, elem: T) {
        self.deque.push_back(elem);
    }

    /// Removes the element at the front of the queue, or returns `None` if
    /// the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.deque.pop_front()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        if !self.is_empty() {
            self.deque.clear();
        }
    }

    /// Exchanges the contents of two queues.
    pub fn swap_with(&mut self, other: &mut Self) {
        self.deque.swap_with(&mut other.deque);
    }

    /// Iterates from the front (oldest) to the back (newest) element.
    pub fn iter(&self) -> crate::Iter<'_, T> {
        self.deque.iter()
    }
}

impl<T: Clone> Queue<T> {
    /// Copies the elements, front to back, into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.deque.to_vec()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Queue {
            deque: self.deque.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.deque == other.deque
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.deque.iter()).finish()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            deque: SegmentedDeque::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.deque.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::Queue;

    #[test]
    fn fifo_order() {
        let mut queue = Queue::new();
        for i in 0..300 {
            queue.push(i);
        }

        assert_eq!(queue.len(), 300);
        assert_eq!(queue.front(), Some(&0));
        assert_eq!(queue.back(), Some(&299));
        for i in 0..300 {
            assert_eq!(queue.pop(), Some(i));
        }
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn empty_peeks() {
        let queue: Queue<u8> = Queue::default();

        assert_eq!(queue.front(), None);
        assert_eq!(queue.back(), None);
        assert_eq!(queue.to_vec(), Vec::<u8>::new());
    }

    #[test]
    fn clear_and_reuse() {
        let mut queue: Queue<_> = (0..10).collect();

        queue.clear();
        assert!(queue.is_empty());

        queue.push(42);
        assert_eq!(queue.front(), Some(&42));
        assert_eq!(queue.back(), Some(&42));
    }

    #[test]
    fn swap_and_clone() {
        let mut a: Queue<_> = (0..3).collect();
        let mut b: Queue<_> = (10..12).collect();

        a.swap_with(&mut b);
        assert_eq!(a.to_vec(), [10, 11]);
        assert_eq!(b.to_vec(), [0, 1, 2]);

        let mut c = b.clone();
        assert_eq!(c, b);
        c.pop();
        assert_ne!(c, b);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn debug() {
        let queue: Queue<_> = [1, 2].into_iter().collect();

        assert_eq!(format!("{queue:?}"), "[1, 2]");
    }
}
