use std::alloc::{self, Layout};
use std::mem;
use std::ptr::NonNull;

use crate::BLOCK_SIZE;

/// A fixed-capacity run of `BLOCK_SIZE` element slots.
///
/// The block never tracks which of its slots are initialised; the owning
/// deque's cursors do. Dropping a block only releases its memory, so every
/// live element must be moved out or dropped before that happens.
#[derive(Debug)]
pub struct Block<T> {
    ptr: NonNull<T>,
}

unsafe impl<T: Send> Send for Block<T> {}
unsafe impl<T: Sync> Sync for Block<T> {}

impl<T> Block<T> {
    pub fn new() -> Self {
        if mem::size_of::<T>() == 0 {
            return Block {
                ptr: NonNull::dangling(),
            };
        }

        let layout = Self::layout();
        let ptr = unsafe { alloc::alloc(layout) };

        match NonNull::new(ptr as *mut T) {
            Some(ptr) => Block { ptr },
            None => alloc::handle_alloc_error(layout),
        }
    }

    /// Pointer to the slot at `offset`.
    ///
    /// The slot may be uninitialised; reading through it is up to the caller.
    #[inline]
    pub fn slot(&self, offset: usize) -> *mut T {
        debug_assert!(offset < BLOCK_SIZE, "block offset {offset} out of range");
        unsafe { self.ptr.as_ptr().add(offset) }
    }

    fn layout() -> Layout {
        match Layout::array::<T>(BLOCK_SIZE) {
            Ok(layout) => layout,
            Err(_) => panic!("capacity overflow"),
        }
    }
}

impl<T> Drop for Block<T> {
    fn drop(&mut self) {
        if mem::size_of::<T>() != 0 {
            unsafe {
                alloc::dealloc(self.ptr.as_ptr() as *mut u8, Self::layout());
            }
        }
    }
}
