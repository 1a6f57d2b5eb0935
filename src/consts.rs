// src/consts.rs
//! Shared constants — the externally fixed AgileKeychain byte format

/// Length of the salt prefix in a salted blob
pub const SALT_LEN: usize = 8;

/// AES block size; the format uses AES-128-CBC throughout
pub const AES_BLOCK_SIZE: usize = 16;

/// AES-128 key and IV length
pub const AES_KEY_LEN: usize = 16;

/// PBKDF2 output consumed per key record: aesKey(16) ‖ aesIv(16)
pub const DERIVED_KEY_LEN: usize = 32;

/// Smallest salted blob the codec can decrypt: salt + one full block
pub const MIN_SALTED_BLOB_LEN: usize = SALT_LEN + AES_BLOCK_SIZE;

/// ASCII marker OpenSSL-style tools prefix to salted data.
// Stripped but never verified — matches the original reader.
pub const SALTED_MARKER: &[u8; 8] = b"Salted__";

/// Vault data files live under `<vault>/data/default/`
pub const DATA_SUBDIR: &[&str] = &["data", "default"];

/// Index of all items in a vault
pub const CONTENTS_FILE: &str = "contents.js";

/// Password-protected master key records
pub const KEYS_FILE: &str = "encryptionKeys.js";

/// Per-item file extension
pub const ITEM_FILE_EXT: &str = ".1password";
