// Non-owning handles to native objects.
// A handle is just an address: it never frees, never mutates, never keeps the pointee alive.

use libc::c_void;
use std::ptr;

/// Address of an object owned by the native side.
///
/// `#[repr(transparent)]` so it can stand in for a `void *` field inside a
/// mirrored struct without changing the layout.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeHandle(*mut c_void);

// Only the address travels between threads; the pointee is never touched.
unsafe impl Send for NativeHandle {}
unsafe impl Sync for NativeHandle {}

impl NativeHandle {
    pub const NULL: NativeHandle = NativeHandle(ptr::null_mut());

    #[inline]
    pub fn from_ptr<T>(raw: *mut T) -> Self {
        NativeHandle(raw as *mut c_void)
    }

    #[inline]
    pub fn from_addr(addr: usize) -> Self {
        NativeHandle(addr as *mut c_void)
    }

    #[inline]
    pub fn as_ptr<T>(&self) -> *mut T {
        self.0 as *mut T
    }

    #[inline]
    pub fn addr(&self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }
}

impl Default for NativeHandle {
    fn default() -> Self {
        Self::NULL
    }
}

/// A managed wrapper around a native object it does not own.
///
/// Wrappers are handed out through the [`OpaqueRegistry`](crate::Core::registry::OpaqueRegistry),
/// which keeps at most one live wrapper per `(type, address)` pair.
pub trait Opaque: Send + Sync + 'static {
    /// Name recorded as the `type_name` field of registry tracing events.
    const TYPE_NAME: &'static str;

    /// Wrap `handle` without taking ownership. `handle` is never null here.
    fn from_handle(handle: NativeHandle) -> Self;

    fn handle(&self) -> NativeHandle;
}

impl std::fmt::Debug for NativeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::Debug::StructDebug::debug_native_handle(self, f)
    }
}
