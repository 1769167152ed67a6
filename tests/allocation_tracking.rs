// Allocation tracking for the mirror read path.
//
// dhat only allows one profiler per process, so this file holds a single test.
//
// cargo test --test allocation_tracking -- --nocapture

use mikey_mirror::{MikeyCacheType, MikeyPayloadPke, NativeHandle, NativeMirror};
use std::hint::black_box;

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[test]
fn test_mirror_read_path_does_not_allocate() {
    let _profiler = dhat::Profiler::builder().testing().build();

    let mut data = vec![0u8; 64];
    let native = Box::new(MikeyPayloadPke::new(
        NativeHandle::from_addr(0x8000),
        MikeyCacheType::ALWAYS,
        data.as_mut_ptr(),
        data.len() as u16,
    ));
    let raw: *const MikeyPayloadPke = &*native;

    let before = dhat::HeapStats::get();
    let mut acc = 0u64;
    for _ in 0..1000 {
        let pke = unsafe { MikeyPayloadPke::from_raw(black_box(raw)) };
        let zero = unsafe { MikeyPayloadPke::from_raw(black_box(std::ptr::null())) };
        acc ^= pke.hash_code() ^ zero.hash_code();
        acc = acc.wrapping_add((pke == *native) as u64);
    }
    let after = dhat::HeapStats::get();

    println!("Accumulated: {acc}");
    println!("Heap blocks before: {}, after: {}", before.total_blocks, after.total_blocks);
    println!("✓ from_raw, equality and hash_code are zero-allocation.");
    assert_eq!(after.total_blocks, before.total_blocks);
}
