/// Rounds `value` up to the next multiple of `align`.
///
/// `align` must be a power of two. The arithmetic is unchecked, so use
/// [`checked_align_to`](crate::align::checked_align_to) when `value` may be
/// close to `usize::MAX`.
///
/// # Examples
///
/// ```rust
/// use rarena::align_to;
///
/// assert_eq!(align_to!(13, 8), 16);
/// assert_eq!(align_to!(16, 8), 16);
/// assert_eq!(align_to!(5, 1), 5);
/// ```
#[macro_export]
macro_rules! align_to {
  ($value:expr, $align:expr) => {
    ($value + ($align - 1)) & !($align - 1)
  };
}

/// Rounds `value` up to a multiple of `align`, or `None` on overflow.
#[inline]
pub const fn checked_align_to(
  value: usize,
  align: usize,
) -> Option<usize> {
  debug_assert!(align.is_power_of_two());

  match value.checked_add(align - 1) {
    Some(bumped) => Some(bumped & !(align - 1)),
    None => None,
  }
}

#[inline]
pub const fn is_aligned(
  addr: usize,
  align: usize,
) -> bool {
  addr & (align - 1) == 0
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_align_to() {
    for align in [1usize, 2, 4, 8, 16, 4096] {
      for i in 0..4 {
        let sizes = (align * i + 1)..=(align * (i + 1));

        for size in sizes {
          assert_eq!(align * (i + 1), align_to!(size, align));
        }
      }

      assert_eq!(0, align_to!(0usize, align));
    }
  }

  #[test]
  fn test_checked_align_to() {
    assert_eq!(checked_align_to(0, 8), Some(0));
    assert_eq!(checked_align_to(1, 8), Some(8));
    assert_eq!(checked_align_to(9, 8), Some(16));
    assert_eq!(checked_align_to(7, 1), Some(7));
    assert_eq!(checked_align_to(usize::MAX, 1), Some(usize::MAX));
    assert_eq!(checked_align_to(usize::MAX - 2, 8), None);
  }

  #[test]
  fn test_is_aligned() {
    assert!(is_aligned(0, 16));
    assert!(is_aligned(4096, 4096));
    assert!(!is_aligned(4100, 8));
    assert!(is_aligned(4100, 4));
  }
}
