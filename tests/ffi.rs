// C ABI entry point tests, called the way a native caller would.

use mikey_mirror::ffi::{
    mikey_payload_pke_copy, mikey_payload_pke_equal, mikey_payload_pke_hash, mikey_payload_pke_new,
    mikey_payload_rand_equal, mikey_payload_rand_new, mikey_registry_purge, MIRROR_ERROR_NULL_POINTER,
    MIRROR_SUCCESS,
};
use mikey_mirror::{MikeyCacheType, MikeyPayload, MikeyPayloadPke, MikeyPayloadRand, NativeHandle, NativeMirror};
use serial_test::serial;
use std::ptr;

#[test]
fn test_pke_new() {
    let mut data = [3u8; 10];
    let native = MikeyPayloadPke::new(
        NativeHandle::from_addr(0x4000),
        MikeyCacheType::ALWAYS,
        data.as_mut_ptr(),
        10,
    );

    unsafe {
        assert!(mikey_payload_pke_new(ptr::null()) == MikeyPayloadPke::ZERO);
        let copy = mikey_payload_pke_new(&native);
        assert!(copy == native);
        assert_eq!(copy.data(), &data[..]);
    }
}

#[test]
fn test_pke_copy() {
    let native = MikeyPayloadPke::new(NativeHandle::from_addr(0x4000), MikeyCacheType::FOR_CSB, ptr::null_mut(), 0);
    let mut dst = MikeyPayloadPke::ZERO;

    unsafe {
        assert_eq!(mikey_payload_pke_copy(&native, ptr::null_mut()), MIRROR_ERROR_NULL_POINTER);
        assert!(dst.is_zero());

        assert_eq!(mikey_payload_pke_copy(&native, &mut dst), MIRROR_SUCCESS);
        assert!(dst == native);

        // A NULL source copies the zero struct.
        assert_eq!(mikey_payload_pke_copy(ptr::null(), &mut dst), MIRROR_SUCCESS);
        assert!(dst.is_zero());
    }
}

#[test]
fn test_pke_equal_and_hash() {
    let a = MikeyPayloadPke::new(NativeHandle::from_addr(0x4000), MikeyCacheType::ALWAYS, ptr::null_mut(), 4);
    let b = a;
    let c = MikeyPayloadPke::new(NativeHandle::from_addr(0x5000), MikeyCacheType::ALWAYS, ptr::null_mut(), 4);

    unsafe {
        assert!(mikey_payload_pke_equal(&a, &b));
        assert!(!mikey_payload_pke_equal(&a, &c));
        assert!(mikey_payload_pke_equal(ptr::null(), ptr::null()));
        assert!(mikey_payload_pke_equal(ptr::null(), &MikeyPayloadPke::ZERO));
        assert!(!mikey_payload_pke_equal(ptr::null(), &a));

        assert_eq!(mikey_payload_pke_hash(&a), mikey_payload_pke_hash(&b));
        assert_eq!(mikey_payload_pke_hash(&a), a.hash_code());
        assert_eq!(mikey_payload_pke_hash(ptr::null()), MikeyPayloadPke::ZERO.hash_code());
    }
}

#[test]
fn test_rand_new_and_equal() {
    let mut rand = [0x5Au8; 16];
    let native = MikeyPayloadRand::new(NativeHandle::from_addr(0x6000), rand.as_mut_ptr(), 16);

    unsafe {
        assert!(mikey_payload_rand_new(ptr::null()) == MikeyPayloadRand::ZERO);
        let copy = mikey_payload_rand_new(&native);
        assert!(mikey_payload_rand_equal(&copy, &native));
        assert!(!mikey_payload_rand_equal(&copy, ptr::null()));
        assert_eq!(copy.rand(), &rand[..]);
    }
}

#[test]
#[serial]
fn test_registry_purge() {
    let mut header = Box::new([0u64; 4]);
    drop(MikeyPayload::resolve(header.as_mut_ptr()));
    assert!(mikey_registry_purge() >= 1);
    assert_eq!(mikey_registry_purge(), 0);
}
