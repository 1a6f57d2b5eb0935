// src/bin/lookup_item.rs
//! Look up one vault item by title and print its decrypted payload

use anyhow::{bail, Context, Result};
use agilekeychain_vault::AgileKeychain;
use rpassword::read_password;
use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        bail!("usage: {} <vault.agilekeychain> <title>", args[0]);
    }
    let (vault_path, title) = (&args[1], &args[2]);

    let keychain = AgileKeychain::open(vault_path)
        .with_context(|| format!("failed to open vault at {vault_path}"))?;

    print!("Master password: ");
    std::io::stdout().flush()?;
    let password = read_password()?;

    let plaintext = keychain
        .lookup(title, password.as_bytes())
        .with_context(|| format!("failed to decrypt item {title:?}"))?;

    // Payloads are JSON in practice, but the core hands back raw bytes;
    // write them as-is and let the caller interpret.
    std::io::stdout().write_all(&plaintext)?;
    println!();

    Ok(())
}
