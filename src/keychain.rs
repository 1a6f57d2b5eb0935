// src/keychain.rs
//! `.agilekeychain` directory reader
//!
//! The collaborator layer in front of the pure core: it walks the vault's
//! `data/default/` files, parses their JSON, decodes base64 and strips the
//! `Salted__` marker, and hands typed records to the unlock pipeline.
//! The contents index is a positionally-indexed JSON array; that indexing
//! is confined to this module and converted to named fields immediately.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{debug, warn};
use serde::Deserialize;
use zeroize::Zeroizing;

use crate::consts::{CONTENTS_FILE, DATA_SUBDIR, ITEM_FILE_EXT, KEYS_FILE, SALTED_MARKER};
use crate::crypto::Result;
use crate::error::CoreError;
use crate::lookup::decrypt_entry;
use crate::records::{EncryptionKeyRecord, VaultItemDescriptor};

/// One row of the contents index: uuid + display title.
#[derive(Debug, Clone)]
pub struct ContentsEntry {
    pub uuid: String,
    pub title: String,
}

/// JSON shape of `<uuid>.1password`.
///
/// Field names follow the on-disk format; aliases cover the capitalization
/// variants seen in vaults written by different tools.
#[derive(Debug, Deserialize)]
struct ItemFile {
    #[serde(rename = "keyID", default)]
    key_id: String,
    #[serde(rename = "uuid", alias = "UUID", default)]
    uuid: String,
    #[serde(rename = "securityLevel", default)]
    security_level: String,
    #[serde(default)]
    title: String,
    #[serde(rename = "encrypted", alias = "Encrypted", default)]
    encrypted: String,
}

/// JSON shape of `encryptionKeys.js`.
#[derive(Debug, Deserialize)]
struct KeysFile {
    #[serde(rename = "List", alias = "list", default)]
    list: Vec<KeyFileRecord>,
}

#[derive(Debug, Deserialize)]
struct KeyFileRecord {
    identifier: String,
    data: String,
    iterations: u32,
    #[serde(default)]
    validation: String,
}

/// Handle on an unopened (locked) AgileKeychain vault directory.
pub struct AgileKeychain {
    base_dir: PathBuf,
}

impl AgileKeychain {
    /// Point at a vault directory without unlocking anything.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let base_dir = path.as_ref().to_path_buf();
        if !base_dir.is_dir() {
            return Err(CoreError::InvalidVault(base_dir));
        }
        Ok(Self { base_dir })
    }

    fn data_dir(&self) -> PathBuf {
        DATA_SUBDIR.iter().fold(self.base_dir.clone(), |p, s| p.join(s))
    }

    /// Read the contents index into typed entries.
    ///
    /// Rows are positionally-indexed arrays (index 0 = uuid, 2 = title);
    /// rows that don't fit that shape are skipped with a warning rather
    /// than failing the whole vault.
    pub fn load_contents(&self) -> Result<Vec<ContentsEntry>> {
        let raw = std::fs::read_to_string(self.data_dir().join(CONTENTS_FILE))?;
        let rows: Vec<serde_json::Value> = serde_json::from_str(&raw)?;

        let mut entries = Vec::with_capacity(rows.len());
        for row in &rows {
            match (
                row.get(0).and_then(|v| v.as_str()),
                row.get(2).and_then(|v| v.as_str()),
            ) {
                (Some(uuid), Some(title)) => entries.push(ContentsEntry {
                    uuid: uuid.to_owned(),
                    title: title.to_owned(),
                }),
                _ => warn!("skipping malformed contents row: {row}"),
            }
        }

        debug!("loaded {} contents entries", entries.len());
        Ok(entries)
    }

    /// Load one item descriptor by uuid, decoding its encrypted payload.
    pub fn load_item(&self, uuid: &str) -> Result<VaultItemDescriptor> {
        let path = self.data_dir().join(format!("{uuid}{ITEM_FILE_EXT}"));
        let raw = std::fs::read_to_string(path)?;
        let item: ItemFile = serde_json::from_str(&raw)?;

        Ok(VaultItemDescriptor {
            uuid: item.uuid,
            title: item.title,
            key_id: item.key_id,
            security_level: item.security_level,
            encrypted: decode_salted_blob(&item.encrypted)?,
        })
    }

    /// Load every master key record in the vault.
    pub fn load_keys(&self) -> Result<Vec<EncryptionKeyRecord>> {
        let raw = std::fs::read_to_string(self.data_dir().join(KEYS_FILE))?;
        let keys: KeysFile = serde_json::from_str(&raw)?;

        let mut records = Vec::with_capacity(keys.list.len());
        for key in keys.list {
            records.push(EncryptionKeyRecord {
                identifier: key.identifier,
                data: decode_salted_blob(&key.data)?,
                iterations: key.iterations,
                validation: key.validation,
            });
        }

        debug!("loaded {} key records", records.len());
        Ok(records)
    }

    /// Find the first item titled `title`, unlock its key level with
    /// `password`, and return the decrypted payload.
    ///
    /// First match in contents-file order wins, same as the core lookup.
    pub fn lookup(&self, title: &str, password: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        let contents = self.load_contents()?;
        let entry = contents
            .iter()
            .find(|e| e.title == title)
            .ok_or_else(|| CoreError::NotFound(format!("item {title:?}")))?;

        debug!("title {:?} matched item {}", title, entry.uuid);

        let item = self.load_item(&entry.uuid)?;
        let keys = self.load_keys()?;
        decrypt_entry(&item, &keys, password)
    }
}

/// Decode a base64 salted blob and strip the leading 8-byte marker.
///
/// The marker bytes are discarded without being compared against
/// `Salted__` — the original reader trusts the offsets, and so does this
/// one. Vaults in the wild pad these strings with trailing NULs.
fn decode_salted_blob(b64: &str) -> Result<Vec<u8>> {
    let raw = STANDARD.decode(b64.trim_end_matches(&['\0', '\n', '\r', ' '][..]))?;
    if raw.len() < SALTED_MARKER.len() {
        return Err(CoreError::MalformedBlob(raw.len()));
    }
    Ok(raw[SALTED_MARKER.len()..].to_vec())
}
