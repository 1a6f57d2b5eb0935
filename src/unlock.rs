// src/unlock.rs
//! Master key unlocking and item decryption
//!
//! Two pure pipelines over the crypto primitives:
//! record + password → master key, and payload + master key → plaintext.

use zeroize::Zeroizing;

use crate::consts::{AES_KEY_LEN, DERIVED_KEY_LEN};
use crate::crypto::{decrypt_cbc, legacy_derive, pbkdf2_sha1, Result, SaltedBlob};
use crate::keys::MasterKey;
use crate::records::EncryptionKeyRecord;

/// Recover the raw master key protected by `record`.
///
/// The format provides no authentication of the result: a wrong password
/// almost always fails padding validation, but can in rare cases decrypt
/// to padding-valid garbage that is returned as if correct. Callers that
/// need certainty must verify against data encrypted under the key; the
/// record's `validation` field is carried opaquely and not interpreted.
pub fn unlock_master_key(record: &EncryptionKeyRecord, password: &[u8]) -> Result<MasterKey> {
    let blob = SaltedBlob::parse(&record.data)?;

    let derived = pbkdf2_sha1(password, blob.salt, record.iterations, DERIVED_KEY_LEN)?;
    let (aes_key, aes_iv) = derived.split_at(AES_KEY_LEN);

    let plaintext = decrypt_cbc(blob.ciphertext, aes_key, aes_iv)?;
    Ok(MasterKey::new(plaintext.to_vec()))
}

/// Decrypt one item payload with an unlocked master key.
pub fn decrypt_item(payload: &[u8], master_key: &MasterKey) -> Result<Zeroizing<Vec<u8>>> {
    let blob = SaltedBlob::parse(payload)?;
    let material = legacy_derive(master_key.as_bytes(), blob.salt)?;
    decrypt_cbc(blob.ciphertext, &material.key, &material.iv)
}
