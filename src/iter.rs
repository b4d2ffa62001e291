use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::SegmentedDeque;

/// An iterator over the elements of a `SegmentedDeque`.
///
/// This `struct` is created by the [`iter`] method on [`SegmentedDeque`]. See
/// its documentation for more.
///
/// [`iter`]: SegmentedDeque::iter
pub struct Iter<'a, T> {
    deque: &'a SegmentedDeque<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(deque: &'a SegmentedDeque<T>) -> Self {
        Iter {
            deque,
            front: 0,
            back: deque.len(),
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let elem = self.deque.at(self.front);
        self.front += 1;
        Some(elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.deque.at(self.back))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `SegmentedDeque`.
///
/// This `struct` is created by the [`iter_mut`] method on [`SegmentedDeque`].
/// See its documentation for more.
///
/// [`iter_mut`]: SegmentedDeque::iter_mut
pub struct IterMut<'a, T> {
    deque: NonNull<SegmentedDeque<T>>,
    front: usize,
    back: usize,
    marker: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(deque: &'a mut SegmentedDeque<T>) -> Self {
        let back = deque.len();
        IterMut {
            deque: NonNull::from(deque),
            front: 0,
            back,
            marker: PhantomData,
        }
    }

    fn slot(&self, index: usize) -> *mut T {
        // Each index in `front..back` is handed out at most once, so the
        // returned references never alias.
        unsafe { self.deque.as_ref().slot_ptr(index) }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let ptr = self.slot(self.front);
        self.front += 1;
        unsafe { Some(&mut *ptr) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        let ptr = self.slot(self.back);
        unsafe { Some(&mut *ptr) }
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `SegmentedDeque`.
///
/// This `struct` is created by the [`into_iter`] method on [`SegmentedDeque`]
/// (provided by the [`IntoIterator`] trait) and by [`drain`]. See their
/// documentation for more.
///
/// [`into_iter`]: SegmentedDeque::into_iter
/// [`drain`]: SegmentedDeque::drain
/// [`IntoIterator`]: core::iter::IntoIterator
pub struct IntoIter<T> {
    deque: SegmentedDeque<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(deque: SegmentedDeque<T>) -> Self {
        IntoIter { deque }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.deque.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
