//! `pwseal decrypt` — open a sealed blob.

use crate::cli::armor::read_blob;
use crate::cli::output;
use crate::cli::{prompt_password, read_input, resolve_cipher, write_output, Cli};
use crate::errors::{PwSealError, Result};

/// Execute the `decrypt` command.
pub fn execute(cli: &Cli, input: &str, output_path: Option<&str>, aad: Option<&str>) -> Result<()> {
    let cipher = resolve_cipher(cli)?;
    let blob = read_blob(read_input(input)?)?;

    // Check the length before asking for a password.
    if blob.len() < cipher.format().min_len() {
        return Err(PwSealError::MalformedInput {
            len: blob.len(),
            min: cipher.format().min_len(),
        });
    }

    let password = prompt_password()?;
    let plaintext = match cipher.decrypt_with_aad(
        &blob,
        &password,
        aad.map(str::as_bytes).unwrap_or_default(),
    ) {
        Ok(plaintext) => plaintext,
        Err(PwSealError::AuthenticationFailed) => {
            output::tip("Check the password, --aad, --format and --iterations used to seal it.");
            return Err(PwSealError::AuthenticationFailed);
        }
        Err(e) => return Err(e),
    };

    let is_text = std::str::from_utf8(&plaintext).is_ok();
    write_output(output_path, &plaintext, is_text)?;

    if let Some(path) = output_path {
        output::success(&format!("Decrypted {} bytes into {path}", plaintext.len()));
    }

    Ok(())
}
