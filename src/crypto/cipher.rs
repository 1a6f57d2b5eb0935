// src/crypto/cipher.rs
//! AES-128-CBC decryption with strict PKCS#7-style unpadding
//!
//! Unpadding is unconditional: every decrypt in this format ends with a
//! padded block, and a padding failure is the usual symptom of a wrong
//! password (the format has no integrity tag to say otherwise).

use aes::cipher::{block_padding::NoPadding, BlockDecryptMut, KeyIvInit};
use aes::Aes128;
use zeroize::Zeroizing;

use crate::consts::AES_BLOCK_SIZE;
use crate::error::CoreError;

use super::Result;

type Aes128CbcDec = cbc::Decryptor<Aes128>;

/// Decrypt `ciphertext` in CBC mode and strip padding.
///
/// Fails with `BadBlockSize` before touching the cipher when the length
/// is zero or not a multiple of 16.
pub fn decrypt_cbc(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_SIZE != 0 {
        return Err(CoreError::BadBlockSize(ciphertext.len()));
    }

    let decryptor = Aes128CbcDec::new_from_slices(key, iv)
        .map_err(|_| CoreError::InvalidParameter("key and iv must be 16 bytes"))?;

    let mut buf = Zeroizing::new(ciphertext.to_vec());
    decryptor
        .decrypt_padded_mut::<NoPadding>(&mut buf)
        .map_err(|_| CoreError::BadBlockSize(ciphertext.len()))?;

    let kept = unpad(&buf)?.len();
    buf.truncate(kept);
    Ok(buf)
}

/// Strip OpenSSL-style PKCS#7 padding.
///
/// The pad size is the last byte; it may legally run up to the full
/// buffer length, not just one block — that matches the tools that wrote
/// these vaults.
pub fn unpad(data: &[u8]) -> Result<&[u8]> {
    let last = *data.last().ok_or(CoreError::BadPadSize { pad: 0, len: 0 })?;
    let pad = last as usize;

    if pad == 0 || pad > data.len() {
        return Err(CoreError::BadPadSize {
            pad,
            len: data.len(),
        });
    }
    if data[data.len() - pad..].iter().any(|&b| b != last) {
        return Err(CoreError::BadPadding);
    }

    Ok(&data[..data.len() - pad])
}
