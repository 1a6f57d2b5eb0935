// src/records.rs
//! Typed data model consumed by the unlock pipeline
//!
//! These records are produced by the keychain loader (or any other
//! collaborator that parses the vault's JSON) with base64 already decoded
//! and the `Salted__` marker already stripped. The core never touches
//! positionally-indexed JSON.

/// One password-protected master key, one per security level in a vault.
#[derive(Debug, Clone)]
pub struct EncryptionKeyRecord {
    /// Level tag referenced by items, e.g. "SL3" / "SL5"
    pub identifier: String,
    /// Salted blob: salt(8) ‖ ciphertext of the master key
    pub data: Vec<u8>,
    /// PBKDF2 iteration count; must be positive
    pub iterations: u32,
    /// Opaque validation blob carried by the format; not interpreted here
    pub validation: String,
}

/// One vault entry and its encrypted payload.
#[derive(Debug, Clone)]
pub struct VaultItemDescriptor {
    pub uuid: String,
    pub title: String,
    /// References an `EncryptionKeyRecord::identifier`
    pub key_id: String,
    pub security_level: String,
    /// Salted blob: salt(8) ‖ ciphertext of the item payload
    pub encrypted: Vec<u8>,
}
