//! # rarena - A Region (Arena) Allocator
//!
//! This crate provides a **region allocator**: many small allocations are
//! bumped out of a few large blocks, and all of them are released together
//! when the region goes away.
//!
//! ## Overview
//!
//! ```text
//!   Region with three blocks:
//!
//!   ┌─────────────────────────────┐   ┌────────────────┐   ┌─────────────────────────────┐
//!   │ A1 │ A2 │pad│ A3 │  unused  │ → │      A4        │ → │ A5 │ A6 │      free         │
//!   └─────────────────────────────┘   └────────────────┘   └─────────────────────────────┘
//!     block 0 (4096 bytes)              block 1 (sized       block 2 (tail)   ▲
//!     abandoned tail is never reused    for one big A4)                       │
//!                                                                        Bump offset
//!                                                                        (next alloc)
//!
//!   Each allocation "bumps" the tail block's offset forward: O(1).
//!   Teardown releases every block at once: no per-allocation free.
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   rarena
//!   ├── align      - Alignment helpers (align_to!, checked_align_to)
//!   ├── block      - One buffer plus its bump offset (internal)
//!   ├── config     - RegionConfig, DEFAULT_BLOCK_SIZE
//!   ├── error      - AllocError, ConfigError
//!   ├── region     - Region implementation
//!   └── source     - BlockSource trait and the libc-backed Malloc source
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rarena::Region;
//!
//! struct User<'a> {
//!     name: &'a str,
//!     scores: &'a [u32],
//! }
//!
//! let mut region = Region::new();
//!
//! let user = region
//!     .alloc(User {
//!         name: region.alloc_str("Bob").unwrap(),
//!         scores: region.alloc_slice_copy(&[90, 85, 92]).unwrap(),
//!     })
//!     .unwrap();
//! assert_eq!(user.name, "Bob");
//! assert_eq!(user.scores.iter().sum::<u32>(), 267);
//!
//! // One call frees everything.
//! region.deinit();
//! ```
//!
//! ## How It Works
//!
//! A request for `size` bytes aligned to `align` looks only at the last block:
//!
//! ```text
//!   tail block:  ┌──────────────┬───┬──────────┬──────────────┐
//!                │     used     │pad│   size   │     free     │
//!                └──────────────┴───┴──────────┴──────────────┘
//!                               ▲   ▲          ▲              ▲
//!                          offset   start      new offset     capacity
//!                                   (multiple of align)
//! ```
//!
//! If `start + size` does not fit, a new block of `max(size, block_size)`
//! bytes is requested from the [`BlockSource`] and appended; the default block
//! size is [`DEFAULT_BLOCK_SIZE`]. Blocks never move or grow, so every pointer
//! handed out stays put until the region is torn down.
//!
//! ## Limitations
//!
//! - **Single-threaded only**: a `Region` is neither `Send` nor `Sync`
//! - **No individual frees**: memory comes back only with the whole region
//! - **No destructors**: values placed in a region are never dropped
//! - **No reuse of abandoned space** in blocks before the tail
//!
//! ## Safety
//!
//! The typed API (`alloc`, `alloc_str`, ...) hands out references that borrow
//! the region, so they cannot outlive it or survive [`Region::deinit`]. The raw
//! API ([`Region::allocate`]) returns pointers whose validity ends at teardown;
//! dereferencing them is `unsafe` and up to the caller.

pub mod align;
mod block;
mod config;
mod error;
mod region;
mod source;

pub use config::{DEFAULT_BLOCK_SIZE, RegionConfig};
pub use error::{AllocError, ConfigError, Result};
pub use region::{Region, RegionStats};
pub use source::{BlockSource, Malloc};
