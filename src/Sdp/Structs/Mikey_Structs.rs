// Mirrors of the MIKEY payload structs.
//
// The native structs embed the common `GstMIKEYPayload` header by value as
// their first member. These mirrors follow the binding layout instead, where
// that member is a pointer to the header; every field after it keeps the
// native order and width. Pointer fields are non-owning: the native side owns
// the payload header and the data buffers, the mirror only copies their
// addresses.

use crate::Core::handle::{NativeHandle, Opaque};
use crate::Core::mirror::{field_hash_at, NativeMirror};
use crate::Core::registry;
use crate::Sdp::payload::{MikeyCacheType, MikeyPayload};
use std::hash::{Hash, Hasher};
use std::ptr;
use std::slice;
use std::sync::Arc;

/// Mirror of `GstMIKEYPayloadPKE`, the envelope-data payload, with the
/// payload header held by pointer (`pt`) rather than embedded. A pointer to a
/// real `GstMIKEYPayloadPKE` does not have this layout.
///
/// Equality is shallow: `pt` and `data` compare by address, never by the
/// bytes they point at.
#[repr(C)]
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct MikeyPayloadPke {
    pt: NativeHandle,
    /// Envelope key cache indicator.
    pub c: MikeyCacheType,
    /// Length of the buffer behind `data`.
    pub data_len: u16,
    data: *mut u8,
}

// A snapshot of addresses; nothing here is dereferenced without an unsafe call.
unsafe impl Send for MikeyPayloadPke {}
unsafe impl Sync for MikeyPayloadPke {}

#[cfg(target_pointer_width = "64")]
const _: () = {
    assert!(std::mem::size_of::<MikeyPayloadPke>() == 24);
    assert!(std::mem::align_of::<MikeyPayloadPke>() == 8);
};

#[cfg(target_pointer_width = "32")]
const _: () = {
    assert!(std::mem::size_of::<MikeyPayloadPke>() == 16);
    assert!(std::mem::align_of::<MikeyPayloadPke>() == 4);
};

impl MikeyPayloadPke {
    pub const fn new(pt: NativeHandle, c: MikeyCacheType, data: *mut u8, data_len: u16) -> Self {
        Self {
            pt,
            c,
            data_len,
            data,
        }
    }

    /// The payload header, resolved through the global registry.
    /// `None` when the native pointer is null.
    pub fn pt(&self) -> Option<Arc<MikeyPayload>> {
        registry::global().get::<MikeyPayload>(self.pt)
    }

    /// Store the wrapper's address, or null. Ownership stays where it was.
    pub fn set_pt(&mut self, pt: Option<&MikeyPayload>) {
        self.pt = pt.map_or(NativeHandle::NULL, |payload| payload.handle());
    }

    pub fn pt_handle(&self) -> NativeHandle {
        self.pt
    }

    pub fn set_pt_handle(&mut self, handle: NativeHandle) {
        self.pt = handle;
    }

    pub fn data_ptr(&self) -> *mut u8 {
        self.data
    }

    pub fn set_data(&mut self, data: *mut u8, data_len: u16) {
        self.data = data;
        self.data_len = data_len;
    }

    /// The encrypted envelope data.
    ///
    /// # Safety
    /// A non-null `data` must point to at least `data_len` readable bytes that
    /// stay alive and unmodified for the returned lifetime.
    pub unsafe fn data(&self) -> &[u8] {
        if self.data.is_null() || self.data_len == 0 {
            return &[];
        }
        slice::from_raw_parts(self.data, self.data_len as usize)
    }
}

unsafe impl NativeMirror for MikeyPayloadPke {
    const TYPE_NAME: &'static str = "Gst.Sdp.MIKEYPayloadPKE";

    const ZERO: Self = Self {
        pt: NativeHandle::NULL,
        c: MikeyCacheType::NONE,
        data_len: 0,
        data: ptr::null_mut(),
    };

    fn fields_hash(&self) -> u64 {
        field_hash_at(0, &self.pt)
            ^ field_hash_at(1, &self.c)
            ^ field_hash_at(2, &self.data_len)
            ^ field_hash_at(3, &(self.data as usize))
    }
}

impl Default for MikeyPayloadPke {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Hash for MikeyPayloadPke {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

/// Mirror of `GstMIKEYPayloadRAND`, the random-value payload, with the
/// payload header held by pointer (`pt`) rather than embedded.
#[repr(C)]
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct MikeyPayloadRand {
    pt: NativeHandle,
    /// Length of the buffer behind `rand`.
    pub len: u8,
    rand: *mut u8,
}

unsafe impl Send for MikeyPayloadRand {}
unsafe impl Sync for MikeyPayloadRand {}

#[cfg(target_pointer_width = "64")]
const _: () = {
    assert!(std::mem::size_of::<MikeyPayloadRand>() == 24);
    assert!(std::mem::align_of::<MikeyPayloadRand>() == 8);
};

#[cfg(target_pointer_width = "32")]
const _: () = {
    assert!(std::mem::size_of::<MikeyPayloadRand>() == 12);
    assert!(std::mem::align_of::<MikeyPayloadRand>() == 4);
};

impl MikeyPayloadRand {
    pub const fn new(pt: NativeHandle, rand: *mut u8, len: u8) -> Self {
        Self { pt, len, rand }
    }

    pub fn pt(&self) -> Option<Arc<MikeyPayload>> {
        registry::global().get::<MikeyPayload>(self.pt)
    }

    pub fn set_pt(&mut self, pt: Option<&MikeyPayload>) {
        self.pt = pt.map_or(NativeHandle::NULL, |payload| payload.handle());
    }

    pub fn pt_handle(&self) -> NativeHandle {
        self.pt
    }

    pub fn rand_ptr(&self) -> *mut u8 {
        self.rand
    }

    pub fn set_rand(&mut self, rand: *mut u8, len: u8) {
        self.rand = rand;
        self.len = len;
    }

    /// # Safety
    /// A non-null `rand` must point to at least `len` readable bytes that stay
    /// alive and unmodified for the returned lifetime.
    pub unsafe fn rand(&self) -> &[u8] {
        if self.rand.is_null() || self.len == 0 {
            return &[];
        }
        slice::from_raw_parts(self.rand, self.len as usize)
    }
}

unsafe impl NativeMirror for MikeyPayloadRand {
    const TYPE_NAME: &'static str = "Gst.Sdp.MIKEYPayloadRAND";

    const ZERO: Self = Self {
        pt: NativeHandle::NULL,
        len: 0,
        rand: ptr::null_mut(),
    };

    fn fields_hash(&self) -> u64 {
        field_hash_at(0, &self.pt) ^ field_hash_at(1, &self.len) ^ field_hash_at(2, &(self.rand as usize))
    }
}

impl Default for MikeyPayloadRand {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Hash for MikeyPayloadRand {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}
