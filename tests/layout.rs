// Layout conformance tests for ABI stability with the native library.
// These tests assert sizes, alignments, and field offsets for the MIKEY
// payload mirrors against a local copy of the native C declarations.
// They also print the observed values to aid debugging when a mismatch
// occurs on a given platform.
use libc::{c_int, c_void};
use memoffset::offset_of;
use mikey_mirror::{MikeyCacheType, MikeyPayloadPke, MikeyPayloadRand, NativeHandle};
use std::mem::{align_of, size_of};

// struct _GstMIKEYPayloadPKE, with the payload header taken by pointer
#[repr(C)]
#[allow(dead_code)]
struct GstMikeyPayloadPke {
    pt: *mut c_void,
    c: c_int,
    data_len: u16,
    data: *mut u8,
}

// struct _GstMIKEYPayloadRAND, with the payload header taken by pointer
#[repr(C)]
#[allow(dead_code)]
struct GstMikeyPayloadRand {
    pt: *mut c_void,
    len: u8,
    rand: *mut u8,
}

#[test]
fn test_native_handle_layout() {
    assert_eq!(size_of::<NativeHandle>(), size_of::<*mut c_void>());
    assert_eq!(align_of::<NativeHandle>(), align_of::<*mut c_void>());
    assert_eq!(size_of::<MikeyCacheType>(), size_of::<c_int>());
    assert_eq!(align_of::<MikeyCacheType>(), align_of::<c_int>());
}

#[test]
fn test_payload_pke_layout() {
    let ptr_size = size_of::<usize>();
    let raw = ptr_size + 4 + 2; // pt, C, data_len
    let off_data_expected = (raw + ptr_size - 1) & !(ptr_size - 1); // data is pointer aligned
    let size_expected = off_data_expected + ptr_size;

    let size = size_of::<MikeyPayloadPke>();
    let align = align_of::<MikeyPayloadPke>();
    let off_c = offset_of!(MikeyPayloadPke, c);
    let off_data_len = offset_of!(MikeyPayloadPke, data_len);

    println!(
        "MikeyPayloadPke => size: {size}, expected: {size_expected}, align: {align}, offsets: [c:{off_c}, data_len:{off_data_len}, data:{off_data_expected}]"
    );

    assert_eq!(size, size_expected);
    assert_eq!(size, size_of::<GstMikeyPayloadPke>());
    assert_eq!(align, align_of::<GstMikeyPayloadPke>());
    assert_eq!(off_c, offset_of!(GstMikeyPayloadPke, c));
    assert_eq!(off_c, ptr_size);
    assert_eq!(off_data_len, offset_of!(GstMikeyPayloadPke, data_len));
    assert_eq!(off_data_len, ptr_size + 4);
    assert_eq!(offset_of!(GstMikeyPayloadPke, data), off_data_expected);
}

#[test]
fn test_payload_rand_layout() {
    let ptr_size = size_of::<usize>();
    let size_expected = 3 * ptr_size; // pt, len padded up to a pointer, rand

    let size = size_of::<MikeyPayloadRand>();
    let off_len = offset_of!(MikeyPayloadRand, len);

    println!("MikeyPayloadRand => size: {size}, expected: {size_expected}, offsets: [len:{off_len}]");

    assert_eq!(size, size_expected);
    assert_eq!(size, size_of::<GstMikeyPayloadRand>());
    assert_eq!(align_of::<MikeyPayloadRand>(), align_of::<GstMikeyPayloadRand>());
    assert_eq!(off_len, offset_of!(GstMikeyPayloadRand, len));
    assert_eq!(offset_of!(GstMikeyPayloadRand, rand), 2 * ptr_size);
}
