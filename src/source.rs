use std::{alloc::Layout, mem, ptr::NonNull};

use libc::c_void;

/// Where a region's block buffers come from.
///
/// A region keeps its block table borrowed while it calls `acquire`, so
/// calling back into the same region from a source panics.
///
/// # Safety
///
/// `acquire` must return either `None` or a pointer to a fresh buffer of at
/// least `layout.size()` bytes, aligned to `layout.align()`, that nothing else
/// uses until it is handed back through `release` with the same layout.
pub unsafe trait BlockSource {
  fn acquire(
    &self,
    layout: Layout,
  ) -> Option<NonNull<u8>>;

  /// # Safety
  ///
  /// `ptr` must come from `acquire` on this source with the same `layout`, and
  /// must not be released twice.
  unsafe fn release(
    &self,
    ptr: NonNull<u8>,
    layout: Layout,
  );
}

/// The C heap: `malloc`, `posix_memalign` and `free` from `libc`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Malloc;

// malloc only promises alignment for fundamental types; be conservative and
// route anything stricter than a machine word through posix_memalign.
const MALLOC_ALIGN: usize = mem::size_of::<usize>();

unsafe impl BlockSource for Malloc {
  fn acquire(
    &self,
    layout: Layout,
  ) -> Option<NonNull<u8>> {
    let size = layout.size().max(1);

    let address = if layout.align() <= MALLOC_ALIGN {
      unsafe { libc::malloc(size) }
    } else {
      let mut out: *mut c_void = std::ptr::null_mut();
      match unsafe { libc::posix_memalign(&mut out, layout.align(), size) } {
        0 => out,
        _ => std::ptr::null_mut(),
      }
    };

    NonNull::new(address as *mut u8)
  }

  unsafe fn release(
    &self,
    ptr: NonNull<u8>,
    _layout: Layout,
  ) {
    unsafe { libc::free(ptr.as_ptr() as *mut c_void) }
  }
}

unsafe impl<S: BlockSource + ?Sized> BlockSource for &S {
  fn acquire(
    &self,
    layout: Layout,
  ) -> Option<NonNull<u8>> {
    (**self).acquire(layout)
  }

  unsafe fn release(
    &self,
    ptr: NonNull<u8>,
    layout: Layout,
  ) {
    unsafe { (**self).release(ptr, layout) }
  }
}
