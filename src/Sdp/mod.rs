mod debug;
pub mod payload;

pub use payload::{MikeyCacheType, MikeyPayload};

pub mod Structs {
    pub mod Mikey_Structs;
    pub use Mikey_Structs::{MikeyPayloadPke, MikeyPayloadRand}; // re-export for stable path
}
