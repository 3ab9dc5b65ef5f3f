use std::{alloc::Layout, ptr::NonNull};

use crate::{align::checked_align_to, source::BlockSource};

/// One backing buffer plus its bump offset.
pub struct Block {
  data: NonNull<u8>,
  layout: Layout,
  offset: usize,
}

impl Block {
  /// Obtains a `capacity` byte buffer aligned to `align` from `source`.
  pub fn new<S: BlockSource>(
    source: &S,
    capacity: usize,
    align: usize,
  ) -> Option<Self> {
    let layout = Layout::from_size_align(capacity, align).ok()?;
    let data = source.acquire(layout)?;

    Some(Self {
      data,
      layout,
      offset: 0,
    })
  }

  pub fn capacity(&self) -> usize {
    self.layout.size()
  }

  pub fn offset(&self) -> usize {
    self.offset
  }

  /// Carves `size` bytes aligned to `align` off the end of the used part, or
  /// `None` when they do not fit.
  pub fn try_bump(
    &mut self,
    size: usize,
    align: usize,
  ) -> Option<NonNull<u8>> {
    let base = self.data.as_ptr() as usize;
    let start = checked_align_to(base.checked_add(self.offset)?, align)? - base;
    let end = start.checked_add(size)?;

    if end > self.capacity() {
      return None;
    }

    self.offset = end;

    // start <= capacity, so this stays inside (or one past) the buffer.
    Some(unsafe { self.data.add(start) })
  }

  pub fn contains(
    &self,
    ptr: *const u8,
  ) -> bool {
    let base = self.data.as_ptr() as usize;
    let addr = ptr as usize;

    addr >= base && addr < base + self.capacity()
  }

  /// Hands the buffer back to `source`.
  ///
  /// # Safety
  ///
  /// `source` must be the one the block was created from, and no pointer into
  /// the buffer may be used afterwards.
  pub unsafe fn release<S: BlockSource>(
    self,
    source: &S,
  ) {
    unsafe { source.release(self.data, self.layout) }
  }
}
