use crate::Core::mirror::NativeMirror;
use crate::Core::registry;
use crate::Sdp::Structs::{MikeyPayloadPke, MikeyPayloadRand};

// Error codes
pub const MIRROR_SUCCESS: i32 = 0;
pub const MIRROR_ERROR_NULL_POINTER: i32 = -1;

// -----------------------------------------------------------------------------
// PKE payload API
// -----------------------------------------------------------------------------

/// Copy a PKE payload struct into a mirror, returned by value.
///
/// The struct at `raw` must use the mirror layout, with the payload header
/// referenced by pointer. A real `GstMIKEYPayloadPKE`, which embeds the header
/// by value, must not be passed here.
///
/// # Arguments
/// * `raw` - Pointer to the struct, may be NULL.
///
/// # Returns
/// * The copied struct, or the all-zero struct when `raw` is NULL.
///
/// # Safety
/// A non-NULL `raw` must point to a readable native struct.
#[no_mangle]
pub unsafe extern "C" fn mikey_payload_pke_new(raw: *const MikeyPayloadPke) -> MikeyPayloadPke {
    MikeyPayloadPke::from_raw(raw)
}

/// Copy one PKE struct into another.
///
/// # Arguments
/// * `src` - Source struct, NULL reads as the all-zero struct.
/// * `dst` - Destination struct.
///
/// # Returns
/// * 0 on success, negative error code otherwise.
///
/// # Safety
/// Non-NULL pointers must be valid for a read (`src`) or write (`dst`) of the struct.
#[no_mangle]
pub unsafe extern "C" fn mikey_payload_pke_copy(
    src: *const MikeyPayloadPke,
    dst: *mut MikeyPayloadPke,
) -> i32 {
    if dst.is_null() {
        return MIRROR_ERROR_NULL_POINTER;
    }
    MikeyPayloadPke::from_raw(src).write_raw(dst);
    MIRROR_SUCCESS
}

/// Compare two PKE structs field by field. NULL reads as the all-zero struct.
///
/// # Safety
/// Non-NULL pointers must point to readable native structs.
#[no_mangle]
pub unsafe extern "C" fn mikey_payload_pke_equal(
    a: *const MikeyPayloadPke,
    b: *const MikeyPayloadPke,
) -> bool {
    MikeyPayloadPke::from_raw(a) == MikeyPayloadPke::from_raw(b)
}

/// Hash of a PKE struct, consistent with `mikey_payload_pke_equal`.
///
/// # Safety
/// A non-NULL `raw` must point to a readable native struct.
#[no_mangle]
pub unsafe extern "C" fn mikey_payload_pke_hash(raw: *const MikeyPayloadPke) -> u64 {
    MikeyPayloadPke::from_raw(raw).hash_code()
}

// -----------------------------------------------------------------------------
// RAND payload API
// -----------------------------------------------------------------------------

/// Copy a RAND payload struct into a mirror, returned by value.
///
/// Same layout caveat as `mikey_payload_pke_new`: the payload header is
/// referenced by pointer, not embedded as in `GstMIKEYPayloadRAND`.
///
/// # Safety
/// A non-NULL `raw` must point to a readable native struct.
#[no_mangle]
pub unsafe extern "C" fn mikey_payload_rand_new(raw: *const MikeyPayloadRand) -> MikeyPayloadRand {
    MikeyPayloadRand::from_raw(raw)
}

/// # Safety
/// Non-NULL pointers must point to readable native structs.
#[no_mangle]
pub unsafe extern "C" fn mikey_payload_rand_equal(
    a: *const MikeyPayloadRand,
    b: *const MikeyPayloadRand,
) -> bool {
    MikeyPayloadRand::from_raw(a) == MikeyPayloadRand::from_raw(b)
}

// -----------------------------------------------------------------------------
// Registry API
// -----------------------------------------------------------------------------

/// Drop registry entries whose wrapper is gone.
///
/// # Returns
/// * Number of entries removed.
#[no_mangle]
pub extern "C" fn mikey_registry_purge() -> usize {
    registry::global().purge()
}
