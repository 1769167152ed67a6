pub mod handle;
pub mod mirror;
pub mod registry;

pub use handle::{NativeHandle, Opaque};
pub use mirror::{field_hash, field_hash_at, type_seed, NativeMirror};
pub use registry::{OpaqueRegistry, RegistryBuilder};
