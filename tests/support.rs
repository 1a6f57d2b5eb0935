// tests/support.rs
//! Shared fixture builders for the integration tests
//!
//! The crate is decrypt-only, so tests build their own ciphertext with a
//! CBC encryptor and the same derivations the vault format prescribes.
//! KDF correctness itself is pinned by the RFC vectors in crypto_tests.

use aes::Aes128;
use cbc::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};

use agilekeychain_vault::{legacy_derive, pbkdf2_sha1, EncryptionKeyRecord, VaultItemDescriptor};

type Aes128CbcEnc = cbc::Encryptor<Aes128>;

/// AES-128-CBC encrypt with PKCS#7 padding — the inverse of the codec.
pub fn encrypt_cbc(plaintext: &[u8], key: &[u8], iv: &[u8]) -> Vec<u8> {
    Aes128CbcEnc::new_from_slices(key, iv)
        .expect("16-byte key and iv")
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

/// Build a key record protecting `master_key` under `password`.
pub fn make_key_record(
    identifier: &str,
    master_key: &[u8],
    password: &[u8],
    salt: &[u8; 8],
    iterations: u32,
) -> EncryptionKeyRecord {
    let derived = pbkdf2_sha1(password, salt, iterations, 32).expect("fixture derivation");
    let (key, iv) = derived.split_at(16);

    let mut data = salt.to_vec();
    data.extend_from_slice(&encrypt_cbc(master_key, key, iv));

    EncryptionKeyRecord {
        identifier: identifier.to_owned(),
        data,
        iterations,
        validation: String::new(),
    }
}

/// Build an item whose payload is `plaintext` encrypted under `master_key`.
pub fn make_item(
    uuid: &str,
    title: &str,
    key_id: &str,
    plaintext: &[u8],
    master_key: &[u8],
    salt: &[u8; 8],
) -> VaultItemDescriptor {
    let material = legacy_derive(master_key, salt).expect("fixture derivation");

    let mut encrypted = salt.to_vec();
    encrypted.extend_from_slice(&encrypt_cbc(plaintext, &material.key, &material.iv));

    VaultItemDescriptor {
        uuid: uuid.to_owned(),
        title: title.to_owned(),
        key_id: key_id.to_owned(),
        security_level: "SL5".to_owned(),
        encrypted,
    }
}
