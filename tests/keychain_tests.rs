// tests/keychain_tests.rs
mod support;
use support::{make_item, make_key_record};

use agilekeychain_vault::{AgileKeychain, CoreError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::json;
use std::fs;
use std::path::Path;

const MASTER_KEY: &[u8; 32] = b"fedcba9876543210fedcba9876543210";
const PASSWORD: &[u8] = b"correcthorse";
const ITEM_PLAINTEXT: &[u8] = br#"{"password":"hunter2"}"#;

/// Re-create the on-disk form: `Salted__` marker + salt + ciphertext, base64.
fn to_disk_blob(marker_stripped: &[u8], marker: &[u8; 8]) -> String {
    STANDARD.encode([marker.as_slice(), marker_stripped].concat())
}

/// Lay out a minimal vault under `dir/data/default/`.
fn write_vault(dir: &Path, marker: &[u8; 8], b64_suffix: &str) {
    let data_dir = dir.join("data").join("default");
    fs::create_dir_all(&data_dir).unwrap();

    let record = make_key_record("SL5", MASTER_KEY, PASSWORD, b"NaClNaCl", 1000);
    let keys = json!({
        "List": [{
            "identifier": "SL5",
            "level": "SL5",
            "data": format!("{}{}", to_disk_blob(&record.data, marker), b64_suffix),
            "iterations": 1000,
            "validation": "",
        }]
    });
    fs::write(data_dir.join("encryptionKeys.js"), keys.to_string()).unwrap();

    let item = make_item("u1", "Github", "SL5", ITEM_PLAINTEXT, MASTER_KEY, b"8bytesal");
    let item_json = json!({
        "keyID": "SL5",
        "uuid": "u1",
        "securityLevel": "SL5",
        "title": "Github",
        "encrypted": format!("{}{}", to_disk_blob(&item.encrypted, marker), b64_suffix),
    });
    fs::write(data_dir.join("u1.1password"), item_json.to_string()).unwrap();

    let contents = json!([
        ["u1", "webforms.WebForm", "Github", "github.com", 1296772400, "", 0, "N"],
    ]);
    fs::write(data_dir.join("contents.js"), contents.to_string()).unwrap();
}

#[test]
fn test_keychain_lookup_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    write_vault(dir.path(), b"Salted__", "");

    let keychain = AgileKeychain::open(dir.path()).unwrap();
    let plaintext = keychain.lookup("Github", PASSWORD).unwrap();
    assert_eq!(&*plaintext, ITEM_PLAINTEXT);
}

#[test]
fn test_keychain_ignores_marker_bytes() {
    // The 8-byte prefix is stripped, never compared against "Salted__" —
    // inherited reader behavior, pinned deliberately.
    let dir = tempfile::tempdir().unwrap();
    write_vault(dir.path(), b"NotSalty", "");

    let keychain = AgileKeychain::open(dir.path()).unwrap();
    let plaintext = keychain.lookup("Github", PASSWORD).unwrap();
    assert_eq!(&*plaintext, ITEM_PLAINTEXT);
}

#[test]
fn test_keychain_tolerates_trailing_nul_in_base64() {
    // Vaults written by the original tools pad base64 strings with NULs
    let dir = tempfile::tempdir().unwrap();
    write_vault(dir.path(), b"Salted__", "\u{0}");

    let keychain = AgileKeychain::open(dir.path()).unwrap();
    let plaintext = keychain.lookup("Github", PASSWORD).unwrap();
    assert_eq!(&*plaintext, ITEM_PLAINTEXT);
}

#[test]
fn test_keychain_loads_typed_records() {
    let dir = tempfile::tempdir().unwrap();
    write_vault(dir.path(), b"Salted__", "");

    let keychain = AgileKeychain::open(dir.path()).unwrap();

    let contents = keychain.load_contents().unwrap();
    assert_eq!(contents.len(), 1);
    assert_eq!(contents[0].uuid, "u1");
    assert_eq!(contents[0].title, "Github");

    let keys = keychain.load_keys().unwrap();
    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0].identifier, "SL5");
    assert_eq!(keys[0].iterations, 1000);

    let item = keychain.load_item("u1").unwrap();
    assert_eq!(item.key_id, "SL5");
    assert_eq!(item.security_level, "SL5");
}

#[test]
fn test_keychain_open_rejects_non_directory() {
    assert!(matches!(
        AgileKeychain::open("/nonexistent/vault.agilekeychain"),
        Err(CoreError::InvalidVault(_))
    ));
}

#[test]
fn test_keychain_lookup_unknown_title_not_found() {
    let dir = tempfile::tempdir().unwrap();
    write_vault(dir.path(), b"Salted__", "");

    let keychain = AgileKeychain::open(dir.path()).unwrap();
    assert!(matches!(
        keychain.lookup("Sourcehut", PASSWORD),
        Err(CoreError::NotFound(_))
    ));
}

#[test]
fn test_keychain_skips_malformed_contents_rows() {
    let dir = tempfile::tempdir().unwrap();
    write_vault(dir.path(), b"Salted__", "");

    // Prepend a row that is not [uuid, type, title, ...]
    let data_dir = dir.path().join("data").join("default");
    let contents = json!([
        [42, null],
        ["u1", "webforms.WebForm", "Github", "github.com", 1296772400, "", 0, "N"],
    ]);
    fs::write(data_dir.join("contents.js"), contents.to_string()).unwrap();

    let keychain = AgileKeychain::open(dir.path()).unwrap();
    let plaintext = keychain.lookup("Github", PASSWORD).unwrap();
    assert_eq!(&*plaintext, ITEM_PLAINTEXT);
}
