use std::alloc::Layout;

use crate::error::ConfigError;

/// Minimum capacity of a freshly grown block, in bytes.
pub const DEFAULT_BLOCK_SIZE: usize = 4096;

/// Tunables of a [`Region`](crate::Region).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionConfig {
  block_size: usize,
}

impl RegionConfig {
  /// Builds a config whose blocks hold at least `block_size` bytes.
  ///
  /// ```rust
  /// use rarena::{ConfigError, RegionConfig};
  ///
  /// assert_eq!(RegionConfig::new(64 * 1024).unwrap().block_size(), 65536);
  /// assert_eq!(RegionConfig::new(0), Err(ConfigError::ZeroBlockSize));
  /// ```
  pub fn new(block_size: usize) -> Result<Self, ConfigError> {
    if block_size == 0 {
      return Err(ConfigError::ZeroBlockSize);
    }

    if Layout::from_size_align(block_size, 1).is_err() {
      return Err(ConfigError::BlockSizeTooLarge { block_size });
    }

    Ok(Self { block_size })
  }

  pub fn block_size(&self) -> usize {
    self.block_size
  }
}

impl Default for RegionConfig {
  fn default() -> Self {
    Self {
      block_size: DEFAULT_BLOCK_SIZE,
    }
  }
}
