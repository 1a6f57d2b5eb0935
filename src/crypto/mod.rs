// src/crypto/mod.rs
//! Pure cryptographic primitives — no I/O, no JSON
//!
//! Everything here works on in-memory buffers and is deterministic for a
//! given input. The byte layout is externally fixed; nothing in this
//! module may be "strengthened" without breaking real vaults.

pub mod blob;
pub mod cipher;
pub mod kdf;

pub use blob::SaltedBlob;
pub use cipher::{decrypt_cbc, unpad};
pub use kdf::{legacy_derive, pbkdf2_sha1};

pub type Result<T> = std::result::Result<T, crate::error::CoreError>;
