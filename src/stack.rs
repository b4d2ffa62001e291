use std::fmt;

use crate::SegmentedDeque;

/// A last-in, first-out stack backed by a [`SegmentedDeque`].
///
/// ```
/// use segmented_deque::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.top(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
pub struct Stack<T> {
    deque: SegmentedDeque<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Stack {
            deque: SegmentedDeque::new(),
        }
    }

    /// Returns the number of elements on the stack.
    pub fn len(&self) -> usize {
        self.deque.len()
    }

    /// Returns `true` if the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// The most recently pushed element, or `None` if the stack is empty.
    pub fn top(&self) -> Option<&T> {
        self.deque.back()
    }

    /// Mutable access to the most recently pushed element.
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.deque.back_mut()
    }

    /// Pushes an element on top of the stack.
    pub fn push(&mut self, elem: T) {
        self.deque.push_back(elem);
    }

    /// Removes the top element, or returns `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.deque.pop_back()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.deque.clear();
    }

    /// Exchanges the contents of two stacks.
    pub fn swap_with(&mut self, other: &mut Self) {
        self.deque.swap_with(&mut other.deque);
    }
}

impl<T: Clone> Stack<T> {
    /// Copies the elements, bottom to top, into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.deque.to_vec()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Stack {
            deque: self.deque.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.deque == other.deque
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.deque.iter()).finish()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes the items in order, so the last one ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            deque: SegmentedDeque::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.deque.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::Stack;

    #[test]
    fn lifo_order() {
        let mut stack = Stack::new();
        for i in 0..300 {
            stack.push(i);
        }

        assert_eq!(stack.len(), 300);
        for i in (0..300).rev() {
            assert_eq!(stack.top(), Some(&i));
            assert_eq!(stack.pop(), Some(i));
        }
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.top(), None);
    }

    #[test]
    fn top_mut() {
        let mut stack: Stack<_> = [1, 2, 3].into_iter().collect();

        if let Some(top) = stack.top_mut() {
            *top = 30;
        }
        assert_eq!(stack.to_vec(), [1, 2, 30]);
    }

    #[test]
    fn swap_clone_and_eq() {
        let mut a: Stack<_> = (0..4).collect();
        let mut b = Stack::new();

        a.swap_with(&mut b);
        assert!(a.is_empty());
        assert_eq!(b.to_vec(), [0, 1, 2, 3]);

        let c = b.clone();
        assert_eq!(b, c);
        b.clear();
        assert_ne!(b, c);
        assert_eq!(c.len(), 4);
    }
}
