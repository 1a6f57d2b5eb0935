// src/lib.rs
//! agilekeychain-vault — read-only unlocking of legacy AgileKeychain vaults
//!
//! Features:
//! - PBKDF2-HMAC-SHA1 master key unlocking
//! - Two-round MD5 legacy derivation for item keys
//! - AES-128-CBC with strict padding validation
//! - Zeroized ephemeral key material
//!
//! The crypto core is pure and I/O-free; [`keychain`] is the collaborator
//! that reads the vault directory and feeds it typed records.

pub mod consts;
pub mod crypto;
pub mod error;
pub mod keychain;
pub mod keys;
pub mod lookup;
pub mod records;
pub mod unlock;

// Re-export everything users need at the crate root
pub use crypto::{decrypt_cbc, legacy_derive, pbkdf2_sha1, unpad, Result, SaltedBlob};
pub use error::CoreError;
pub use keychain::AgileKeychain;
pub use keys::{DerivedKeyMaterial, MasterKey};
pub use lookup::{decrypt_entry, lookup};
pub use records::{EncryptionKeyRecord, VaultItemDescriptor};
pub use unlock::{decrypt_item, unlock_master_key};
