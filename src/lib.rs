#![warn(missing_docs)]
#![doc(test(attr(deny(warnings))))]

//! A double-ended queue stored in fixed-size blocks.
//!
//! # [`SegmentedDeque`] vs [`VecDeque`]
//!
//! ## Growth
//!
//! The standard [`VecDeque`] keeps its elements in a single ring buffer.
//! When it fills up, every element is moved to a new, larger buffer.
//!
//! The [`SegmentedDeque`] provided by this lib keeps its elements in blocks of
//! [`BLOCK_SIZE`] slots. The blocks are addressed through a small *map* of
//! block references, and only that map is ever reallocated. Elements never
//! move when the deque grows at either end, so pushing is O(1) with no
//! occasional full copy of the contents.
//!
//! ## Slicing
//!
//! The contents are split across blocks, so unlike [`VecDeque`] the deque can
//! never be viewed as one or two slices. Elements are reached by index in
//! O(1), or through [`iter`] and [`iter_mut`].
//!
//! ## Adapters
//!
//! [`Queue`] and [`Stack`] restrict a deque to FIFO and LIFO access.
//!
//! [`VecDeque`]: std::collections::VecDeque
//! [`iter`]: SegmentedDeque::iter
//! [`iter_mut`]: SegmentedDeque::iter_mut

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Bound, Index, IndexMut, RangeBounds};
use std::ptr;

/// Emits a `tracing` debug event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

use block::Block;

pub use error::Error;
pub use iter::{IntoIter, Iter, IterMut};
pub use queue::Queue;
pub use stack::Stack;

mod block;
mod error;
mod iter;
mod queue;
mod stack;

#[cfg(test)]
mod drop_tracker;

/// Number of element slots in every block.
pub const BLOCK_SIZE: usize = 128;

/// Number of block slots in the map of a new deque.
pub const INITIAL_MAP_SIZE: usize = 8;

/// A position inside the map, relative to the first valid map slot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Cursor {
    block: usize,
    offset: usize,
}

impl Cursor {
    /// Where both cursors rest while the deque is empty.
    const CANONICAL: Cursor = Cursor {
        block: 0,
        offset: BLOCK_SIZE / 2,
    };
}

/// A double-ended queue implemented with a map of fixed-size blocks.
///
/// A `SegmentedDeque` with a known list of items can be initialized from an
/// array:
///
/// ```
/// use segmented_deque::SegmentedDeque;
///
/// let deq = SegmentedDeque::from([-1, 0, 1]);
/// assert_eq!(deq, [-1, 0, 1]);
/// ```
///
/// Blocks are allocated lazily as the contents reach them, and are released
/// only when the map is rebuilt or the deque is dropped or cleared.
pub struct SegmentedDeque<T> {
    map: Vec<Option<Block<T>>>,
    /// First map slot of the valid range. Cursors are relative to it.
    map_start: usize,
    /// One past the last map slot of the valid range.
    map_end: usize,
    head: Cursor,
    tail: Cursor,
    len: usize,
}

impl<T> SegmentedDeque<T> {
    /// Creates an empty deque.
    ///
    /// The first block is allocated in the middle of the map, and both ends
    /// start in the middle of that block.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let deque: SegmentedDeque<u32> = SegmentedDeque::new();
    /// assert!(deque.is_empty());
    /// ```
    pub fn new() -> Self {
        let mut map = empty_map(INITIAL_MAP_SIZE);
        let map_start = INITIAL_MAP_SIZE / 2;
        map[map_start] = Some(Block::new());

        SegmentedDeque {
            map,
            map_start,
            map_end: map_start + 1,
            head: Cursor::CANONICAL,
            tail: Cursor::CANONICAL,
            len: 0,
        }
    }

    /// Returns the number of elements in the deque.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let mut deque = SegmentedDeque::new();
    /// assert_eq!(deque.len(), 0);
    /// deque.push_back(1);
    /// assert_eq!(deque.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of block slots in the map.
    pub fn map_size(&self) -> usize {
        self.map.len()
    }

    /// Returns the number of blocks currently allocated.
    pub fn allocated_blocks(&self) -> usize {
        self.map.iter().filter(|slot| slot.is_some()).count()
    }

    /// Provides a reference to the front element, or `None` if the deque is
    /// empty.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let mut d = SegmentedDeque::new();
    /// assert_eq!(d.front(), None);
    ///
    /// d.push_back(1);
    /// d.push_back(2);
    /// assert_eq!(d.front(), Some(&1));
    /// ```
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// deque is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Provides a reference to the back element, or `None` if the deque is
    /// empty.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let mut d = SegmentedDeque::new();
    /// assert_eq!(d.back(), None);
    ///
    /// d.push_back(1);
    /// d.push_back(2);
    /// assert_eq!(d.back(), Some(&2));
    /// ```
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// deque is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let mut d = SegmentedDeque::new();
    /// d.push_back(1);
    /// d.push_back(2);
    /// if let Some(x) = d.back_mut() {
    ///     *x = 9;
    /// }
    /// assert_eq!(d.back(), Some(&9));
    /// ```
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.len.checked_sub(1)?;
        self.get_mut(last)
    }

    /// Prepends an element to the deque.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let mut d = SegmentedDeque::new();
    /// d.push_front(1);
    /// d.push_front(2);
    /// assert_eq!(d.front(), Some(&2));
    /// ```
    pub fn push_front(&mut self, elem: T) {
        if self.len > 0 {
            self.retreat_head();
        }
        unsafe {
            ptr::write(self.cursor_ptr(self.head), elem);
        }
        self.len += 1;
    }

    /// Appends an element to the back of the deque.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let mut buf = SegmentedDeque::new();
    /// buf.push_back(1);
    /// buf.push_back(3);
    /// assert_eq!(buf.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, elem: T) {
        if self.len > 0 {
            self.advance_tail();
        }
        unsafe {
            ptr::write(self.cursor_ptr(self.tail), elem);
        }
        self.len += 1;
    }

    /// Removes the first element and returns it, or `None` if the deque is
    /// empty.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let mut d = SegmentedDeque::new();
    /// d.push_back(1);
    /// d.push_back(2);
    ///
    /// assert_eq!(d.pop_front(), Some(1));
    /// assert_eq!(d.pop_front(), Some(2));
    /// assert_eq!(d.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let elem = unsafe { ptr::read(self.cursor_ptr(self.head)) };
        self.len -= 1;

        if self.len == 0 {
            self.reset_cursors();
        } else if self.head.offset + 1 < BLOCK_SIZE {
            self.head.offset += 1;
        } else {
            self.head.block += 1;
            self.head.offset = 0;
        }

        Some(elem)
    }

    /// Removes the last element from the deque and returns it, or `None` if
    /// it is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let mut buf = SegmentedDeque::new();
    /// assert_eq!(buf.pop_back(), None);
    /// buf.push_back(1);
    /// buf.push_back(3);
    /// assert_eq!(buf.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let elem = unsafe { ptr::read(self.cursor_ptr(self.tail)) };
        self.len -= 1;

        if self.len == 0 {
            self.reset_cursors();
        } else if self.tail.offset > 0 {
            self.tail.offset -= 1;
        } else {
            self.tail.block -= 1;
            self.tail.offset = BLOCK_SIZE - 1;
        }

        Some(elem)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds. Use [`get`] to probe an index that
    /// may be invalid.
    ///
    /// [`get`]: SegmentedDeque::get
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let deque = SegmentedDeque::from(['a', 'b', 'c']);
    /// assert_eq!(*deque.at(1), 'b');
    /// ```
    pub fn at(&self, index: usize) -> &T {
        assert!(index < self.len, "index out of bounds");
        unsafe { &*self.slot_ptr(index) }
    }

    /// Provides a reference to the element at `index`, or `None` if `index`
    /// is out of bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let deque = SegmentedDeque::from([3, 4, 5]);
    /// assert_eq!(deque.get(1), Some(&4));
    /// assert_eq!(deque.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            unsafe { Some(&*self.slot_ptr(index)) }
        } else {
            None
        }
    }

    /// Provides a mutable reference to the element at `index`, or `None` if
    /// `index` is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            unsafe { Some(&mut *self.slot_ptr(index)) }
        } else {
            None
        }
    }

    /// Replaces the element at `index` and returns the previous one.
    ///
    /// The length never changes and no block is allocated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= len`; `value` is
    /// dropped and the deque is unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::{Error, SegmentedDeque};
    ///
    /// let mut deque = SegmentedDeque::from([1, 2, 3]);
    /// assert_eq!(deque.set(1, 20), Ok(2));
    /// assert_eq!(deque, [1, 20, 3]);
    ///
    /// assert_eq!(deque.set(3, 40), Err(Error::IndexOutOfBounds { index: 3, len: 3 }));
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<T, Error> {
        let len = self.len;
        match self.get_mut(index) {
            Some(slot) => Ok(mem::replace(slot, value)),
            None => Err(Error::IndexOutOfBounds { index, len }),
        }
    }

    /// Swaps the elements at indices `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let mut deque = SegmentedDeque::from([1, 2, 3]);
    /// deque.swap(0, 2);
    /// assert_eq!(deque, [3, 2, 1]);
    /// ```
    pub fn swap(&mut self, i: usize, j: usize) {
        assert!(i < self.len && j < self.len, "index out of bounds");
        if i != j {
            unsafe { ptr::swap(self.slot_ptr(i), self.slot_ptr(j)) }
        }
    }

    /// Inserts an element at `index` within the deque, shifting all elements
    /// before or after the index.
    ///
    /// If `index` is nearer to the front, the elements with indices lower than
    /// `index` are moved towards the front; otherwise, the elements from
    /// `index` on are moved towards the back. An `index` equal to the length
    /// appends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index > len`; `elem` is dropped
    /// and the deque is unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let mut deque = SegmentedDeque::from(['a', 'b', 'c']);
    /// deque.insert(1, 'd').unwrap();
    /// assert_eq!(deque, ['a', 'd', 'b', 'c']);
    ///
    /// assert!(deque.insert(9, 'x').is_err());
    /// ```
    pub fn insert(&mut self, index: usize, elem: T) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        if index == 0 {
            self.push_front(elem);
        } else if index == self.len {
            self.push_back(elem);
        } else if index < self.len / 2 {
            // near front
            self.push_front(elem);
            for i in 0..index {
                self.swap(i, i + 1);
            }
        } else {
            // near back
            self.push_back(elem);
            for i in (index..self.len - 1).rev() {
                self.swap(i, i + 1);
            }
        }

        Ok(())
    }

    /// Removes the elements in `range`, shifting whichever side of the gap
    /// holds fewer elements.
    ///
    /// The range must be non-empty and lie within the deque.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if the range is empty, reversed or
    /// reaches past the end; the deque is unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let mut deque: SegmentedDeque<_> = (0..10).collect();
    /// deque.erase(2..4).unwrap();
    /// assert_eq!(deque, [0, 1, 4, 5, 6, 7, 8, 9]);
    ///
    /// assert!(deque.erase(3..3).is_err());
    /// ```
    pub fn erase<R: RangeBounds<usize>>(&mut self, range: R) -> Result<(), Error> {
        let (start, end) = resolve_range(range, self.len);
        if start >= end || end > self.len {
            return Err(Error::InvalidRange {
                start,
                end,
                len: self.len,
            });
        }

        let count = end - start;
        if start < self.len - end {
            // the removed elements travel to the front
            for i in (0..start).rev() {
                self.swap(i, i + count);
            }
            for _ in 0..count {
                self.pop_front();
            }
        } else {
            // the removed elements travel to the back
            for i in end..self.len {
                self.swap(i, i - count);
            }
            for _ in 0..count {
                self.pop_back();
            }
        }

        Ok(())
    }

    /// Removes and returns the element at `index` from the deque.
    /// Whichever end is closer to the removal point will be moved to make
    /// room. Returns `None` if `index` is out of bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let mut buf = SegmentedDeque::from([1, 2, 3]);
    /// assert_eq!(buf.remove(1), Some(2));
    /// assert_eq!(buf, [1, 3]);
    /// assert_eq!(buf.remove(2), None);
    /// ```
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        if index < self.len / 2 {
            for i in (0..index).rev() {
                self.swap(i, i + 1);
            }
            self.pop_front()
        } else {
            for i in index..self.len - 1 {
                self.swap(i, i + 1);
            }
            self.pop_back()
        }
    }

    /// Shortens the deque, keeping the first `len` elements and dropping
    /// the rest.
    ///
    /// If `len` is greater than the deque's current length, this has no
    /// effect.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let mut buf = SegmentedDeque::from([5, 10, 15]);
    /// buf.truncate(1);
    /// assert_eq!(buf, [5]);
    /// ```
    pub fn truncate(&mut self, len: usize) {
        while self.len > len {
            self.pop_back();
        }
    }

    /// Resizes the deque in place so that its length equals `new_len`.
    ///
    /// Grows by appending the values returned by `f`, shrinks by dropping
    /// elements from the back.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let mut buf = SegmentedDeque::from([5, 10]);
    /// buf.resize_with(4, Default::default);
    /// assert_eq!(buf, [5, 10, 0, 0]);
    ///
    /// let mut state = 100;
    /// buf.resize_with(6, || {
    ///     state += 1;
    ///     state
    /// });
    /// assert_eq!(buf, [5, 10, 0, 0, 101, 102]);
    /// ```
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) {
        if new_len > self.len {
            for _ in self.len..new_len {
                self.push_back(f());
            }
        } else {
            self.truncate(new_len);
        }
    }

    /// Clears the deque, removing all values.
    ///
    /// The map is rebuilt from scratch, so the deque is left exactly as
    /// [`new`] creates it.
    ///
    /// [`new`]: SegmentedDeque::new
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let mut deque = SegmentedDeque::new();
    /// deque.push_back(1);
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// ```
    pub fn clear(&mut self) {
        trace_event!(len = self.len, map_size = self.map.len(), "clearing deque");
        *self = Self::new();
    }

    /// Removes all elements from the deque in bulk, returning them front to
    /// back as an iterator.
    ///
    /// The deque is left exactly as [`new`] creates it.
    ///
    /// [`new`]: SegmentedDeque::new
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let mut deque = SegmentedDeque::from([1, 2, 3]);
    /// let drained: Vec<_> = deque.drain().collect();
    /// assert_eq!(drained, [1, 2, 3]);
    /// assert!(deque.is_empty());
    /// ```
    pub fn drain(&mut self) -> IntoIter<T> {
        IntoIter::new(mem::replace(self, Self::new()))
    }

    /// Reverses the order of the elements in place.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let mut deque = SegmentedDeque::from([1, 2, 3, 4]);
    /// deque.reverse();
    /// assert_eq!(deque, [4, 3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        let len = self.len;
        for i in 0..len / 2 {
            self.swap(i, len - 1 - i);
        }
    }

    /// Exchanges the whole contents of two deques without moving any element.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let mut a = SegmentedDeque::from([1, 2]);
    /// let mut b = SegmentedDeque::from([3]);
    /// a.swap_with(&mut b);
    /// assert_eq!(a, [3]);
    /// assert_eq!(b, [1, 2]);
    /// ```
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Returns `true` if the deque contains an element equal to `x`.
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|elem| elem == x)
    }

    /// Returns the index of the first element equal to `x`, or `None` if
    /// there is none.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let deque = SegmentedDeque::from(['x', 'y', 'x']);
    /// assert_eq!(deque.index_of(&'x'), Some(0));
    /// assert_eq!(deque.index_of(&'z'), None);
    /// ```
    pub fn index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|elem| elem == x)
    }

    /// Returns a front-to-back iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let mut deque = SegmentedDeque::from([1, 2, 3]);
    /// for x in deque.iter_mut() {
    ///     *x *= 10;
    /// }
    /// assert_eq!(deque, [10, 20, 30]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Translates a logical index into a pointer to its slot.
    ///
    /// This is the only place where an index is mapped to a block and offset.
    pub(crate) fn slot_ptr(&self, index: usize) -> *mut T {
        let absolute = self.head.offset + index;
        let block = self.head.block + absolute / BLOCK_SIZE;
        self.block(block).slot(absolute % BLOCK_SIZE)
    }

    fn cursor_ptr(&self, cursor: Cursor) -> *mut T {
        self.block(cursor.block).slot(cursor.offset)
    }

    fn block(&self, block: usize) -> &Block<T> {
        let slot = self.map_start + block;
        match self.map.get(slot) {
            Some(Some(block)) => block,
            _ => panic!(
                "map slot {slot} holds no block (map size {}, valid range {}..{})",
                self.map.len(),
                self.map_start,
                self.map_end
            ),
        }
    }

    fn reset_cursors(&mut self) {
        self.head = Cursor::CANONICAL;
        self.tail = Cursor::CANONICAL;
    }

    /// Moves the head cursor one slot towards the front.
    fn retreat_head(&mut self) {
        if self.head.offset > 0 {
            self.head.offset -= 1;
            return;
        }

        if self.map_start + self.head.block == 0 {
            self.grow_map();
        }

        if self.head.block == 0 {
            // the valid range grows downwards; cursors follow `map_start`
            self.map_start -= 1;
            self.tail.block += 1;
        } else {
            self.head.block -= 1;
        }
        self.head.offset = BLOCK_SIZE - 1;
        self.ensure_block(self.map_start + self.head.block);
    }

    /// Moves the tail cursor one slot towards the back.
    fn advance_tail(&mut self) {
        if self.tail.offset + 1 < BLOCK_SIZE {
            self.tail.offset += 1;
            return;
        }

        if self.map_start + self.tail.block + 1 >= self.map.len() {
            self.grow_map();
        }

        self.tail.block += 1;
        self.tail.offset = 0;
        self.ensure_block(self.map_start + self.tail.block);
    }

    fn ensure_block(&mut self, slot: usize) {
        assert!(
            slot < self.map.len(),
            "map slot {slot} outside map of size {}",
            self.map.len()
        );

        if self.map[slot].is_none() {
            self.map[slot] = Some(Block::new());
            trace_event!(slot, "allocated block");
        }
        self.map_end = self.map_end.max(slot + 1);
    }

    /// Rebuilds the map with the occupied blocks centered in it.
    ///
    /// The map doubles unless the occupied blocks fit in half of it. Blocks
    /// outside the occupied span hold no element and are released.
    fn grow_map(&mut self) {
        let first = self.map_start + self.head.block;
        let last = self.map_start + self.tail.block;
        let occupied = last - first + 1;

        let old_size = self.map.len();
        let new_size = if occupied * 2 <= old_size {
            old_size
        } else {
            old_size * 2
        };
        let new_start = (new_size - occupied) / 2;

        let mut map = empty_map(new_size);
        for (i, block) in self.map.drain(first..=last).enumerate() {
            map[new_start + i] = block;
        }

        self.map = map;
        self.map_start = new_start;
        self.map_end = new_start + occupied;
        self.tail.block -= self.head.block;
        self.head.block = 0;

        trace_event!(old_size, new_size, occupied, "re-centered block map");
    }
}

impl<T: Clone> SegmentedDeque<T> {
    /// Resizes the deque in place so that its length equals `new_len`,
    /// appending clones of `value` when growing.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let mut buf = SegmentedDeque::from([5, 10, 15]);
    /// buf.resize(2, 0);
    /// assert_eq!(buf, [5, 10]);
    ///
    /// buf.resize(5, 20);
    /// assert_eq!(buf, [5, 10, 20, 20, 20]);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T) {
        self.resize_with(new_len, || value.clone());
    }

    /// Copies the elements, front to back, into a new `Vec`.
    ///
    /// # Example
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let mut deque = SegmentedDeque::new();
    /// assert_eq!(deque.to_vec(), Vec::<i32>::new());
    ///
    /// deque.push_back(2);
    /// deque.push_front(1);
    /// assert_eq!(deque.to_vec(), vec![1, 2]);
    /// ```
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

fn empty_map<T>(size: usize) -> Vec<Option<Block<T>>> {
    (0..size).map(|_| None).collect()
}

fn resolve_range<R: RangeBounds<usize>>(range: R, len: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };
    (start, end)
}

impl<T> Default for SegmentedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SegmentedDeque<T> {
    fn drop(&mut self) {
        while self.pop_back().is_some() {}
    }
}

impl<T: Clone> Clone for SegmentedDeque<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for SegmentedDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Index<usize> for SegmentedDeque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.at(index)
    }
}

impl<T> IndexMut<usize> for SegmentedDeque<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Some(elem) => elem,
            None => panic!("index out of bounds"),
        }
    }
}

impl<T> IntoIterator for SegmentedDeque<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a SegmentedDeque<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SegmentedDeque<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

macro_rules! impl_partial_eq {
    ([$($n:tt)*] $rhs:ty) => {
        impl<T, U, $($n)*> PartialEq<$rhs> for SegmentedDeque<T>
        where
            T: PartialEq<U>,
        {
            fn eq(&self, other: & $rhs) -> bool {
                self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
            }
        }
    };
}

impl_partial_eq!([const N: usize] [U; N]);
impl_partial_eq!([const N: usize] &[U; N]);
impl_partial_eq!([const N: usize] &mut [U; N]);
impl_partial_eq!([] & [U]);
impl_partial_eq!([] &mut [U]);
impl_partial_eq!([] Vec<U>);
impl_partial_eq!([] SegmentedDeque<U>);

impl<T: Eq> Eq for SegmentedDeque<T> {}

impl<T: PartialOrd> PartialOrd for SegmentedDeque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for SegmentedDeque<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for SegmentedDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        self.iter().for_each(|elem| elem.hash(state));
    }
}

impl<T, const N: usize> From<[T; N]> for SegmentedDeque<T> {
    /// Converts a `[T; N]` into a `SegmentedDeque<T>`.
    ///
    /// ```
    /// use segmented_deque::SegmentedDeque;
    ///
    /// let deq = SegmentedDeque::from([1, 2, 3, 4]);
    /// assert_eq!(deq, [1, 2, 3, 4]);
    /// ```
    fn from(value: [T; N]) -> Self {
        Self::from_iter(value)
    }
}

impl<T> From<Vec<T>> for SegmentedDeque<T> {
    /// Turn a [`Vec<T>`] into a [`SegmentedDeque<T>`].
    fn from(value: Vec<T>) -> Self {
        Self::from_iter(value)
    }
}

impl<T> FromIterator<T> for SegmentedDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for SegmentedDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push_back(elem);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SegmentedDeque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
