// src/crypto/blob.rs
//! Salted blob layout: salt(8 bytes) ‖ ciphertext(N × 16 bytes)

use crate::consts::{MIN_SALTED_BLOB_LEN, SALT_LEN};
use crate::error::CoreError;

use super::Result;

/// Borrowed view over a salted ciphertext blob.
///
/// The legacy ecosystem conventionally prefixes an 8-byte `Salted__`
/// marker; callers strip it before parsing and this type never verifies
/// it — offsets are trusted as given.
#[derive(Debug, Clone, Copy)]
pub struct SaltedBlob<'a> {
    pub salt: &'a [u8],
    pub ciphertext: &'a [u8],
}

impl<'a> SaltedBlob<'a> {
    /// Split `raw` into salt and ciphertext.
    ///
    /// Fails with `MalformedBlob` when `raw` cannot hold the 8-byte salt
    /// plus at least one full cipher block.
    pub fn parse(raw: &'a [u8]) -> Result<Self> {
        if raw.len() < MIN_SALTED_BLOB_LEN {
            return Err(CoreError::MalformedBlob(raw.len()));
        }
        Ok(Self {
            salt: &raw[..SALT_LEN],
            ciphertext: &raw[SALT_LEN..],
        })
    }
}
