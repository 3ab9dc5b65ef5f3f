use thiserror::Error;

/// Why a region could not serve an allocation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocError {
  #[error("failed to reserve a block record ({blocks} blocks live)")]
  BlockTable { blocks: usize },

  #[error("system allocator refused a {capacity} byte block (align {align})")]
  BlockBuffer { capacity: usize, align: usize },

  #[error("array of {count} elements of {elem_size} bytes overflows isize::MAX")]
  ArrayOverflow { count: usize, elem_size: usize },
}

impl AllocError {
  /// True when the underlying allocator ran out of memory, as opposed to a
  /// request that could never be satisfied.
  pub fn is_out_of_memory(&self) -> bool {
    matches!(self, Self::BlockTable { .. } | Self::BlockBuffer { .. })
  }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
  #[error("block size must be non-zero")]
  ZeroBlockSize,

  #[error("block size {block_size} does not fit in a memory layout")]
  BlockSizeTooLarge { block_size: usize },
}

pub type Result<T, E = AllocError> = std::result::Result<T, E>;
