// Module naming follows project convention (Sdp = SDP/MIKEY payload mirrors)
#[allow(non_snake_case)]
pub mod Core;
#[allow(non_snake_case)]
pub mod Sdp;
#[allow(non_snake_case)]
pub mod Debug {
    pub mod StructDebug;
}
pub mod ffi;

pub use Core::{NativeHandle, NativeMirror, Opaque, OpaqueRegistry, RegistryBuilder};
pub use Sdp::Structs::{MikeyPayloadPke, MikeyPayloadRand};
pub use Sdp::{MikeyCacheType, MikeyPayload};
