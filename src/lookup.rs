// src/lookup.rs
//! Title-based vault lookup
//!
//! Single-pass, stateless orchestration: find the item, resolve its key
//! record, unlock the master key, decrypt. Safe to call concurrently over
//! shared immutable slices; PBKDF2 cost makes each call CPU-bound, so
//! bounding parallelism is the caller's job.

use zeroize::Zeroizing;

use crate::crypto::Result;
use crate::error::CoreError;
use crate::records::{EncryptionKeyRecord, VaultItemDescriptor};
use crate::unlock::{decrypt_item, unlock_master_key};

/// Decrypt `item` by resolving its key record from `keys`.
///
/// The master key lives only for the duration of this call.
pub fn decrypt_entry(
    item: &VaultItemDescriptor,
    keys: &[EncryptionKeyRecord],
    password: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let record = keys
        .iter()
        .find(|k| k.identifier == item.key_id)
        .ok_or_else(|| CoreError::NotFound(format!("key record {:?}", item.key_id)))?;

    let master_key = unlock_master_key(record, password)?;
    decrypt_item(&item.encrypted, &master_key)
}

/// Decrypt the first item whose title equals `title` (exact,
/// case-sensitive).
///
/// Duplicate titles are not disambiguated — first match in list order
/// wins, deterministically. That is inherited behavior; callers wanting
/// UUID-level precision should select the item themselves and call
/// [`decrypt_entry`].
pub fn lookup(
    items: &[VaultItemDescriptor],
    keys: &[EncryptionKeyRecord],
    title: &str,
    password: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let item = items
        .iter()
        .find(|i| i.title == title)
        .ok_or_else(|| CoreError::NotFound(format!("item {title:?}")))?;

    decrypt_entry(item, keys, password)
}
