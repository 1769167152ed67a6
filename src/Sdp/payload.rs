// Opaque wrapper for the common MIKEY payload header and the enum types used
// by the payload mirrors.

use crate::Core::handle::{NativeHandle, Opaque};
use crate::Core::registry;
use libc::c_int;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Managed wrapper around a native `GstMIKEYPayload`.
///
/// Only the address is kept. The native side owns the payload; dropping the
/// wrapper never frees it.
pub struct MikeyPayload {
    handle: NativeHandle,
}

impl Opaque for MikeyPayload {
    const TYPE_NAME: &'static str = "Gst.Sdp.MIKEYPayload";

    fn from_handle(handle: NativeHandle) -> Self {
        Self { handle }
    }

    fn handle(&self) -> NativeHandle {
        self.handle
    }
}

impl MikeyPayload {
    /// Resolve a native payload pointer to its interned wrapper through the
    /// global registry. Null yields `None`.
    pub fn resolve<T>(raw: *mut T) -> Option<Arc<Self>> {
        registry::global().get::<Self>(NativeHandle::from_ptr(raw))
    }

    pub fn as_ptr<T>(&self) -> *mut T {
        self.handle.as_ptr()
    }
}

// Identity of a wrapper is the address it wraps.
impl PartialEq for MikeyPayload {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl Eq for MikeyPayload {}

impl Hash for MikeyPayload {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.handle.hash(state);
    }
}

/// `GstMIKEYCacheType`: the cache policy of a PKE envelope key.
///
/// A transparent newtype instead of a Rust `enum` so that any value read from
/// native memory is valid, including ones this crate does not name.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MikeyCacheType(pub c_int);

impl MikeyCacheType {
    /// The envelope key must not be cached.
    pub const NONE: MikeyCacheType = MikeyCacheType(0);
    /// The envelope key must be cached.
    pub const ALWAYS: MikeyCacheType = MikeyCacheType(1);
    /// The envelope key must be cached, but only used for the current CSB.
    pub const FOR_CSB: MikeyCacheType = MikeyCacheType(2);

    pub fn is_known(&self) -> bool {
        matches!(*self, Self::NONE | Self::ALWAYS | Self::FOR_CSB)
    }

    pub fn name(&self) -> Option<&'static str> {
        match *self {
            Self::NONE => Some("none"),
            Self::ALWAYS => Some("always"),
            Self::FOR_CSB => Some("for-csb"),
            _ => None,
        }
    }
}

impl From<c_int> for MikeyCacheType {
    fn from(value: c_int) -> Self {
        MikeyCacheType(value)
    }
}

impl From<MikeyCacheType> for c_int {
    fn from(value: MikeyCacheType) -> Self {
        value.0
    }
}
