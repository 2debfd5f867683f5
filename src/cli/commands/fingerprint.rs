//! `pwseal fingerprint` — confirm a shared password without revealing it.

use crate::cli::output;
use crate::cli::{prompt_password, resolve_cipher, Cli};
use crate::crypto::BlobFormat;
use crate::errors::Result;

/// Execute the `fingerprint` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let cipher = resolve_cipher(cli)?;
    if cipher.format() == BlobFormat::EmbeddedSalt {
        output::warning(
            "Embedded-salt blobs carry their own salt; this fingerprint uses the configured one.",
        );
    }

    let password = prompt_password()?;
    let key = cipher.derive_key(&password)?;
    println!("{}", key.fingerprint());

    Ok(())
}
