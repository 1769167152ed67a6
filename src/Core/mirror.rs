// Fixed-layout mirrors of native structs.
//
// A mirror is read out of native memory as a plain value copy. It never owns
// what its pointer fields point at, and it has no teardown of its own.

use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io;
use std::mem::size_of;
use std::ptr;

/// A `#[repr(C)]` record whose layout is identical to a native struct.
///
/// # Safety
/// Implementors must be `#[repr(C)]` (or `transparent`) with fields in the
/// exact order and width of the native declaration, and every bit pattern must
/// be a valid value of `Self` (integers, integer newtypes and raw pointers
/// only; no Rust enums, references or `bool`).
pub unsafe trait NativeMirror: Copy + PartialEq + 'static {
    /// Fully qualified name, seeds [`hash_code`](NativeMirror::hash_code).
    const TYPE_NAME: &'static str;

    /// The mirror of a null native pointer: all fields zero or null.
    const ZERO: Self;

    /// Combines every field's [`field_hash_at`], one per field in declaration
    /// order. Called by [`hash_code`](NativeMirror::hash_code).
    fn fields_hash(&self) -> u64;

    /// Copy a native struct out of `raw`.
    ///
    /// A null `raw` yields [`ZERO`](NativeMirror::ZERO) without touching memory.
    /// The result holds no reference back to `raw`.
    ///
    /// # Safety
    /// A non-null `raw` must point to at least `size_of::<Self>()` readable
    /// bytes of the native struct. Alignment is not required.
    #[inline]
    unsafe fn from_raw(raw: *const Self) -> Self {
        if raw.is_null() {
            return Self::ZERO;
        }
        ptr::read_unaligned(raw)
    }

    /// Write this value back into native memory.
    ///
    /// # Safety
    /// `dst` must be non-null and valid for `size_of::<Self>()` bytes of writes.
    #[inline]
    unsafe fn write_raw(&self, dst: *mut Self) {
        ptr::write_unaligned(dst, *self);
    }

    /// Copy a native struct out of a byte buffer, e.g. one received from a
    /// native callback as `(ptr, len)`.
    fn from_bytes(bytes: &[u8]) -> io::Result<Self> {
        let needed = size_of::<Self>();
        if bytes.len() < needed {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "{}::from_bytes(): buffer too small. Got: {}, Needed: {}",
                    Self::TYPE_NAME,
                    bytes.len(),
                    needed
                ),
            ));
        }
        // Safety: length checked above, and the trait contract makes any bit pattern valid.
        Ok(unsafe { ptr::read_unaligned(bytes.as_ptr() as *const Self) })
    }

    /// Type seed XOR the positional hash of every field. Equal values hash equal.
    #[inline]
    fn hash_code(&self) -> u64 {
        type_seed::<Self>() ^ self.fields_hash()
    }

    /// Equality against a value of unknown type. Values of another type are
    /// never equal, even when their bytes match.
    fn equals_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .map_or(false, |other| self == other)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Hash of a single field value.
#[inline]
pub fn field_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Hash of the field at `position` in declaration order.
///
/// The position is hashed along with the value, so XOR-folding these stays
/// order sensitive: two pointer fields holding swapped addresses, or the same
/// address, do not cancel out.
#[inline]
pub fn field_hash_at<T: Hash + ?Sized>(position: u32, value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    position.hash(&mut hasher);
    value.hash(&mut hasher);
    hasher.finish()
}

/// Per-type seed mixed into every [`NativeMirror::hash_code`].
#[inline]
pub fn type_seed<M: NativeMirror>() -> u64 {
    field_hash(M::TYPE_NAME)
}
