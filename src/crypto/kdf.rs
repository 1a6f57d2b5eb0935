// src/crypto/kdf.rs
//! Both key derivations used by the format
//!
//! - `pbkdf2_sha1`: the standards-based KDF protecting master key records.
//! - `legacy_derive`: the fixed two-round MD5 scheme (OpenSSL
//!   `EVP_BytesToKey` with one hash application per round) deriving
//!   per-item key/IV pairs from the master key. Known-weak, reproduced
//!   bit-exactly for compatibility.

use md5::{Digest, Md5};
use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use zeroize::Zeroizing;

use crate::error::CoreError;
use crate::keys::DerivedKeyMaterial;

use super::Result;

/// PBKDF2-HMAC-SHA1 with an explicit, validated iteration count.
///
/// `out_len` is a parameter so published RFC vectors stay testable; the
/// unlock path always asks for 32 bytes and splits them key(16) ‖ iv(16).
pub fn pbkdf2_sha1(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    out_len: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    if iterations == 0 {
        return Err(CoreError::InvalidParameter("iterations must be positive"));
    }
    if password.is_empty() {
        return Err(CoreError::InvalidParameter("password must not be empty"));
    }
    if salt.is_empty() {
        return Err(CoreError::InvalidParameter("salt must not be empty"));
    }
    if out_len == 0 {
        return Err(CoreError::InvalidParameter("output length must be positive"));
    }

    let mut out = Zeroizing::new(vec![0u8; out_len]);
    pbkdf2_hmac::<Sha1>(password, salt, iterations, &mut out);
    Ok(out)
}

/// Two-round MD5 key/IV derivation: `D0 = MD5(secret‖salt)`,
/// `D1 = MD5(D0‖secret‖salt)`, key = D0, iv = D1.
///
/// Exactly two rounds, hard-coded. A third round is never computed; the
/// format only ever consumes 32 bytes and this is not a general fill loop.
pub fn legacy_derive(secret: &[u8], salt: &[u8]) -> Result<DerivedKeyMaterial> {
    if secret.is_empty() {
        return Err(CoreError::InvalidParameter("secret must not be empty"));
    }
    if salt.is_empty() {
        return Err(CoreError::InvalidParameter("salt must not be empty"));
    }

    let mut hasher = Md5::new();
    hasher.update(secret);
    hasher.update(salt);
    let d0 = hasher.finalize();

    let mut hasher = Md5::new();
    hasher.update(&d0);
    hasher.update(secret);
    hasher.update(salt);
    let d1 = hasher.finalize();

    Ok(DerivedKeyMaterial {
        key: d0.into(),
        iv: d1.into(),
    })
}
