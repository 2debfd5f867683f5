//! `pwseal encrypt` — seal a file under a password.

use crate::cli::armor::armor;
use crate::cli::output;
use crate::cli::{cipher_from, load_settings, prompt_new_password, read_input, write_output, Cli};
use crate::errors::Result;

/// Execute the `encrypt` command.
pub fn execute(
    cli: &Cli,
    input: &str,
    output_path: Option<&str>,
    aad: Option<&str>,
    armor_flag: bool,
) -> Result<()> {
    let settings = load_settings()?;
    let cipher = cipher_from(&settings, cli)?;
    let plaintext = read_input(input)?;
    let password = prompt_new_password()?;

    let blob = cipher.encrypt_with_aad(
        &plaintext,
        &password,
        aad.map(str::as_bytes).unwrap_or_default(),
    )?;

    let armored = armor_flag || settings.armor;
    if armored {
        write_output(output_path, armor(&blob).as_bytes(), true)?;
    } else {
        write_output(output_path, &blob, false)?;
    }

    if let Some(path) = output_path {
        output::success(&format!(
            "Encrypted {} bytes into {path} ({} layout)",
            plaintext.len(),
            cipher.format().name()
        ));
    }

    Ok(())
}
