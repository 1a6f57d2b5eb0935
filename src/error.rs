// src/error.rs
//! Public error type for the entire crate
//!
//! The legacy format carries no integrity tag, so a wrong password is
//! indistinguishable from corruption at this layer: both surface as
//! `BadPadSize` / `BadPadding`. None of these variants is ever folded
//! into a catch-all.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("salted blob too short: {0} bytes (need 8-byte salt + one cipher block)")]
    MalformedBlob(usize),

    #[error("ciphertext length {0} is not a multiple of the 16-byte block size")]
    BadBlockSize(usize),

    #[error("pad size {pad} invalid for a {len}-byte buffer")]
    BadPadSize { pad: usize, len: usize },

    #[error("padding bytes are inconsistent")]
    BadPadding,

    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("not an agilekeychain directory: {}", .0.display())]
    InvalidVault(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
}
