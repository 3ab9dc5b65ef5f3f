use std::alloc::Layout;

use rarena::{Region, RegionConfig, align_to};

/// Prints where an allocation landed and how the region looks afterwards.
fn print_alloc(
  region: &Region,
  layout: Layout,
  addr: *const u8,
) {
  println!(
    "Allocated {} bytes (align {}), address = {:?}, {:?}",
    layout.size(),
    layout.align(),
    addr,
    region.stats(),
  );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  // RUST_LOG=trace shows every block the region grows.
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  // Small blocks make growth easy to observe.
  let mut region = Region::with_config(RegionConfig::new(256)?);

  // --------------------------------------------------------------------
  // 1) A u32: the first request creates the first block.
  // --------------------------------------------------------------------
  let layout_u32 = Layout::new::<u32>();
  let first = region.allocate(layout_u32)?;
  println!("\n[1] Allocate u32");
  print_alloc(&region, layout_u32, first.as_ptr());

  unsafe {
    let first_ptr = first.cast::<u32>().as_ptr();
    first_ptr.write(0xDEADBEEF);
    println!("[1] Value written = 0x{:X}", first_ptr.read());
  }

  // --------------------------------------------------------------------
  // 2) 12 odd-sized bytes, then a u64 that must be padded to 8.
  // --------------------------------------------------------------------
  let layout_12_bytes = Layout::array::<u8>(12)?;
  let second = region.allocate(layout_12_bytes)?;
  println!("\n[2] Allocate [u8; 12]");
  print_alloc(&region, layout_12_bytes, second.as_ptr());

  let layout_u64 = Layout::new::<u64>();
  let third = region.allocate(layout_u64)?;
  println!("\n[3] Allocate u64 (observe alignment)");
  print_alloc(&region, layout_u64, third.as_ptr());

  let end_of_second = second.as_ptr() as usize + layout_12_bytes.size();
  println!(
    "[3] [u8; 12] ends at {:#X}, u64 starts at {:#X} = align_to!({:#X}, 8)",
    end_of_second,
    third.as_ptr() as usize,
    end_of_second,
  );
  assert_eq!(third.as_ptr() as usize, align_to!(end_of_second, 8));

  // --------------------------------------------------------------------
  // 4) Typed helpers: sizes and alignments come from the types.
  // --------------------------------------------------------------------
  {
    let name = region.alloc_str("Bob")?;
    let scores = region.alloc_slice_copy(&[90u16, 85, 92])?;
    println!("\n[4] name = {name}, scores = {scores:?}, {:?}", region.stats());
  }

  // --------------------------------------------------------------------
  // 5) More than a block's worth: the tail's free space is abandoned and a
  //    block sized for the request is appended.
  // --------------------------------------------------------------------
  let layout_big = Layout::array::<u8>(1024)?;
  let big = region.allocate(layout_big)?;
  println!("\n[5] Allocate [u8; 1024]");
  print_alloc(&region, layout_big, big.as_ptr());

  let small = region.allocate(layout_u32)?;
  println!("\n[6] Allocate u32 after the big block (a third block appears)");
  print_alloc(&region, layout_u32, small.as_ptr());

  // --------------------------------------------------------------------
  // 7) One call frees everything.
  // --------------------------------------------------------------------
  region.deinit();
  println!("\n[7] After deinit: {:?}", region.stats());

  Ok(())
}
