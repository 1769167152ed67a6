use super::payload::MikeyPayload;
use super::Structs::{MikeyPayloadPke, MikeyPayloadRand};
use std::fmt;

// Debug proxy implementations that call the standalone debug functions
impl fmt::Debug for MikeyPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::Debug::StructDebug::debug_mikey_payload(self, f)
    }
}

impl fmt::Debug for MikeyPayloadPke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::Debug::StructDebug::debug_payload_pke(self, f)
    }
}

impl fmt::Debug for MikeyPayloadRand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::Debug::StructDebug::debug_payload_rand(self, f)
    }
}
