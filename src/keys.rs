// src/keys.rs
//! Ephemeral secret types with zeroize-on-drop semantics
//!
//! Master key bytes and derived key/IV pairs live on the call stack of a
//! single lookup. Both wipe their memory when dropped instead of waiting
//! for the allocator to reuse it.

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::consts::AES_KEY_LEN;

/// Key/IV pair produced by a key derivation, consumed by one decrypt.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKeyMaterial {
    pub key: [u8; AES_KEY_LEN],
    pub iv: [u8; AES_KEY_LEN],
}

/// Raw master key recovered from an `EncryptionKeyRecord`.
///
/// Owned exclusively by the unlock call that produced it; this crate never
/// caches one across lookups. Callers wanting a cache own that trade-off.
pub struct MasterKey(Zeroizing<Vec<u8>>);

impl MasterKey {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(Zeroizing::new(bytes))
    }

    /// Borrow the key bytes. Use immediately; do not store the slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// No Debug derive: key material must not end up in log output.
impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MasterKey({} bytes)", self.0.len())
    }
}
