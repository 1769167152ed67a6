use std::fmt;
use crate::Core::handle::{NativeHandle, Opaque};
use crate::Core::registry::OpaqueRegistry;
use crate::Sdp::payload::MikeyPayload;
use crate::Sdp::Structs::{MikeyPayloadPke, MikeyPayloadRand};

/// Debug function for NativeHandle
///
/// Prints the address only; the pointee is never read
pub fn debug_native_handle(handle: &NativeHandle, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if handle.is_null() {
        f.write_str("NativeHandle(NULL)")
    } else {
        write!(f, "NativeHandle(0x{:x})", handle.addr())
    }
}

pub fn debug_mikey_payload(payload: &MikeyPayload, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MikeyPayload")
        .field("handle", &payload.handle())
        .finish()
}

/// Debug function for MikeyPayloadPke
///
/// Shows:
/// - Payload header address
/// - Cache type (by name when known)
/// - Data length and buffer address, without dereferencing it
pub fn debug_payload_pke(pke: &MikeyPayloadPke, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MikeyPayloadPke")
        .field("pt", &pke.pt_handle())
        .field("c", &format_args!("{}", pke.c.name().unwrap_or("<unknown>")))
        .field("data_len", &pke.data_len)
        .field("data", &format_args!("0x{:x}", pke.data_ptr() as usize))
        .finish()
}

pub fn debug_payload_rand(rand: &MikeyPayloadRand, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MikeyPayloadRand")
        .field("pt", &rand.pt_handle())
        .field("len", &rand.len)
        .field("rand", &format_args!("0x{:x}", rand.rand_ptr() as usize))
        .finish()
}

/// Debug function for OpaqueRegistry
///
/// Shows table size and counters, not the entries themselves
pub fn debug_opaque_registry(registry: &OpaqueRegistry, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("OpaqueRegistry")
        .field("entries", &registry.len())
        .field("live", &registry.live_count())
        .field("hits", &registry.hits())
        .field("misses", &registry.misses())
        .field("sweeps", &registry.sweeps())
        .field("sweep_threshold", &registry.sweep_threshold())
        .finish()
}
