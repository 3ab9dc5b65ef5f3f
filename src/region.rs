use std::{
  alloc::Layout,
  cell::RefCell,
  fmt,
  mem::{self, MaybeUninit},
  ptr::{self, NonNull},
  slice, str,
};

use tracing::{debug, trace};

use crate::{
  block::Block,
  config::RegionConfig,
  error::{AllocError, Result},
  source::{BlockSource, Malloc},
};

// Blocks are at least word aligned so small requests never pad at offset 0.
const BLOCK_ALIGN: usize = mem::align_of::<usize>();

/// Snapshot of a region's footprint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionStats {
  /// Number of blocks in the chain.
  pub blocks: usize,
  /// Sum of the blocks' capacities.
  pub capacity: usize,
  /// Bytes consumed in all blocks, alignment padding included.
  pub used: usize,
}

/// A region-based allocator.
///
/// Allocations are bumped out of a chain of blocks and are only ever released
/// all together, by [`deinit`](Region::deinit) or when the region is dropped.
/// Only the last block receives new allocations; when a request does not fit
/// there, a new block of `max(size, block_size)` bytes is appended and the old
/// block's remaining space is abandoned.
///
/// Typed allocations borrow the region, so the compiler rejects any use of
/// them after teardown. Destructors of values placed in the region never run.
///
/// ```rust
/// use rarena::Region;
///
/// let mut region = Region::new();
///
/// let answer = region.alloc(42u64).unwrap();
/// let name = region.alloc_str("Bob").unwrap();
/// assert_eq!((*answer, &*name), (42, "Bob"));
///
/// region.deinit();
/// assert!(region.is_empty());
/// ```
pub struct Region<S: BlockSource = Malloc> {
  blocks: RefCell<Vec<Block>>,
  config: RegionConfig,
  source: S,
}

impl Region {
  /// An empty region backed by the C heap. Nothing is allocated until the
  /// first request.
  pub fn new() -> Self {
    Self::with_config(RegionConfig::default())
  }

  pub fn with_config(config: RegionConfig) -> Self {
    Self::with_source(Malloc, config)
  }
}

impl Default for Region {
  fn default() -> Self {
    Self::new()
  }
}

impl<S: BlockSource> Region<S> {
  pub fn with_source(
    source: S,
    config: RegionConfig,
  ) -> Self {
    Self {
      blocks: RefCell::new(Vec::new()),
      config,
      source,
    }
  }

  pub fn config(&self) -> RegionConfig {
    self.config
  }

  /// Returns `layout.size()` uninitialized bytes aligned to `layout.align()`.
  ///
  /// The pointer stays valid, at the same address, until the region is
  /// deinitialized or dropped. Fails only when a new block is needed and the
  /// system allocator cannot provide it; the region is left untouched then.
  pub fn allocate(
    &self,
    layout: Layout,
  ) -> Result<NonNull<u8>> {
    let (size, align) = (layout.size(), layout.align());
    let mut blocks = self.blocks.borrow_mut();

    if let Some(ptr) = blocks.last_mut().and_then(|tail| tail.try_bump(size, align)) {
      return Ok(ptr);
    }

    self.grow(&mut blocks, size, align)
  }

  /// Like [`allocate`](Region::allocate), from a raw size and alignment.
  ///
  /// # Safety
  ///
  /// `align` must be a non-zero power of two, and `size` rounded up to `align`
  /// must not exceed `isize::MAX`.
  pub unsafe fn allocate_raw(
    &self,
    size: usize,
    align: usize,
  ) -> Result<NonNull<u8>> {
    debug_assert!(align.is_power_of_two(), "alignment must be a power of two");

    self.allocate(unsafe { Layout::from_size_align_unchecked(size, align) })
  }

  fn grow(
    &self,
    blocks: &mut Vec<Block>,
    size: usize,
    align: usize,
  ) -> Result<NonNull<u8>> {
    let capacity = size.max(self.config.block_size());
    let block_align = align.max(BLOCK_ALIGN);

    blocks.try_reserve(1).map_err(|_| {
      debug!(blocks = blocks.len(), "failed to reserve a block record");
      AllocError::BlockTable {
        blocks: blocks.len(),
      }
    })?;

    let refused = || {
      debug!(capacity, align = block_align, "block source refused a buffer");
      AllocError::BlockBuffer {
        capacity,
        align: block_align,
      }
    };

    let mut block = Block::new(&self.source, capacity, block_align).ok_or_else(refused)?;

    match block.try_bump(size, align) {
      Some(ptr) => {
        blocks.push(block);
        trace!(capacity, align = block_align, blocks = blocks.len(), "grew region");
        Ok(ptr)
      }
      None => {
        unsafe { block.release(&self.source) };
        Err(refused())
      }
    }
  }

  /// Moves `value` into the region.
  #[allow(clippy::mut_from_ref)]
  pub fn alloc<T>(
    &self,
    value: T,
  ) -> Result<&mut T> {
    Ok(self.alloc_uninit::<T>()?.write(value))
  }

  /// Room for one `T`, not initialized.
  #[allow(clippy::mut_from_ref)]
  pub fn alloc_uninit<T>(&self) -> Result<&mut MaybeUninit<T>> {
    let ptr = self.allocate(Layout::new::<T>())?;

    Ok(unsafe { &mut *ptr.as_ptr().cast::<MaybeUninit<T>>() })
  }

  /// Room for `count` consecutive `T`s, not initialized.
  #[allow(clippy::mut_from_ref)]
  pub fn alloc_array_uninit<T>(
    &self,
    count: usize,
  ) -> Result<&mut [MaybeUninit<T>]> {
    let layout = Layout::array::<T>(count).map_err(|_| AllocError::ArrayOverflow {
      count,
      elem_size: mem::size_of::<T>(),
    })?;
    let ptr = self.allocate(layout)?;

    Ok(unsafe { slice::from_raw_parts_mut(ptr.as_ptr().cast::<MaybeUninit<T>>(), count) })
  }

  #[allow(clippy::mut_from_ref)]
  pub fn alloc_slice_copy<T: Copy>(
    &self,
    src: &[T],
  ) -> Result<&mut [T]> {
    let ptr = self.allocate(Layout::for_value(src))?.cast::<T>();

    unsafe {
      ptr::copy_nonoverlapping(src.as_ptr(), ptr.as_ptr(), src.len());
      Ok(slice::from_raw_parts_mut(ptr.as_ptr(), src.len()))
    }
  }

  #[allow(clippy::mut_from_ref)]
  pub fn alloc_str(
    &self,
    src: &str,
  ) -> Result<&mut str> {
    let bytes = self.alloc_slice_copy(src.as_bytes())?;

    Ok(unsafe { str::from_utf8_unchecked_mut(bytes) })
  }

  /// Releases every block and returns the region to its freshly created
  /// state. Raw pointers obtained from [`allocate`](Region::allocate) dangle
  /// from here on.
  pub fn deinit(&mut self) {
    let blocks = mem::take(self.blocks.get_mut());

    if blocks.is_empty() {
      return;
    }

    trace!(blocks = blocks.len(), "releasing region");

    for block in blocks {
      unsafe { block.release(&self.source) };
    }
  }

  pub fn is_empty(&self) -> bool {
    self.blocks.borrow().is_empty()
  }

  pub fn block_count(&self) -> usize {
    self.blocks.borrow().len()
  }

  pub fn stats(&self) -> RegionStats {
    self
      .blocks
      .borrow()
      .iter()
      .fold(RegionStats::default(), |stats, block| RegionStats {
        blocks: stats.blocks + 1,
        capacity: stats.capacity + block.capacity(),
        used: stats.used + block.offset(),
      })
  }

  /// Whether `ptr` points inside one of the region's blocks.
  pub fn contains<T: ?Sized>(
    &self,
    ptr: *const T,
  ) -> bool {
    let ptr = ptr.cast::<u8>();

    self.blocks.borrow().iter().any(|block| block.contains(ptr))
  }
}

impl<S: BlockSource> Drop for Region<S> {
  fn drop(&mut self) {
    self.deinit();
  }
}

impl<S: BlockSource> fmt::Debug for Region<S> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    f.debug_struct("Region")
      .field("config", &self.config)
      .field("stats", &self.stats())
      .finish()
  }
}
