//! CLI module — Clap argument parser, I/O helpers, and command implementations.

pub mod armor;
pub mod commands;
pub mod output;

use std::fs;
use std::io::{Read, Write};

use clap::Parser;

use zeroize::Zeroizing;

use crate::config::Settings;
use crate::crypto::{BlobFormat, KdfParams, PasswordCipher};
use crate::errors::{PwSealError, Result};

/// Passwords shorter than this get a warning when sealing.
const WEAK_PASSWORD_LEN: usize = 8;

/// Environment variable consulted before prompting.
pub const PASSWORD_ENV: &str = "PWSEAL_PASSWORD";

/// pwseal CLI: seal and open files with a password.
#[derive(Parser)]
#[command(
    name = "pwseal",
    about = "Password-based authenticated encryption for files",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// PBKDF2 iteration count (overrides .pwseal.toml)
    #[arg(long, global = true, env = "PWSEAL_ITERATIONS")]
    pub iterations: Option<u32>,

    /// Blob layout: fixed-salt or embedded-salt (overrides .pwseal.toml)
    #[arg(long, global = true, env = "PWSEAL_FORMAT")]
    pub format: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Encrypt a file into a sealed blob
    Encrypt {
        /// File to encrypt (`-` for stdin)
        input: String,

        /// Output file path (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Associated data to bind the blob to (e.g. a record ID)
        #[arg(long)]
        aad: Option<String>,

        /// Write base64 text instead of raw bytes
        #[arg(short, long)]
        armor: bool,
    },

    /// Decrypt a sealed blob (raw or armored)
    Decrypt {
        /// Blob to decrypt (`-` for stdin)
        input: String,

        /// Output file path (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Associated data the blob was sealed with
        #[arg(long)]
        aad: Option<String>,
    },

    /// Show the layout of a sealed blob (no password needed)
    Inspect {
        /// Blob to inspect (`-` for stdin)
        input: String,
    },

    /// Print a fingerprint of the key derived from the password
    Fingerprint,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the password, trying in order:
/// 1. `PWSEAL_PASSWORD` env var (scripts/CI); set-but-empty means the
///    empty password
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env()? {
        return Ok(pw);
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter password")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| PwSealError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a sealing password with confirmation.
///
/// Also respects `PWSEAL_PASSWORD`.  Short passwords are accepted but
/// draw a warning.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    let password = match password_from_env()? {
        Some(pw) => pw,
        None => {
            let pw = dialoguer::Password::new()
                .with_prompt("Choose password")
                .with_confirmation("Confirm password", "Passwords do not match, try again")
                .allow_empty_password(true)
                .interact()
                .map_err(|e| PwSealError::CommandFailed(format!("password prompt: {e}")))?;
            Zeroizing::new(pw)
        }
    };

    if password.chars().count() < WEAK_PASSWORD_LEN {
        output::warning(&format!(
            "Password is shorter than {WEAK_PASSWORD_LEN} characters and easy to guess."
        ));
    }

    Ok(password)
}

/// `None` only when the variable is unset.  Non-UTF-8 values are an error
/// rather than a silent fall-through to the prompt.
fn password_from_env() -> Result<Option<Zeroizing<String>>> {
    std::env::var_os(PASSWORD_ENV)
        .map(|raw| {
            raw.into_string().map(Zeroizing::new).map_err(|_| {
                PwSealError::CommandFailed(format!("{PASSWORD_ENV} is not valid UTF-8"))
            })
        })
        .transpose()
}

/// Load `.pwseal.toml` from the working directory.
pub fn load_settings() -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    Settings::load(&cwd)
}

/// Build the cipher from `.pwseal.toml` in the working directory, with
/// command-line overrides applied on top.
pub fn resolve_cipher(cli: &Cli) -> Result<PasswordCipher> {
    cipher_from(&load_settings()?, cli)
}

/// Merge `settings` with the global flags in `cli`.
pub fn cipher_from(settings: &Settings, cli: &Cli) -> Result<PasswordCipher> {
    let mut params = settings.kdf_params()?;
    if let Some(iterations) = cli.iterations {
        params = KdfParams::new(params.salt, iterations)?;
    }

    let format = match &cli.format {
        Some(name) => BlobFormat::from_name(name)?,
        None => settings.blob_format()?,
    };

    Ok(PasswordCipher::new(params).with_format(format))
}

/// Read all bytes from `path`, or from stdin when `path` is `-`.
pub fn read_input(path: &str) -> Result<Vec<u8>> {
    if path == "-" {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }

    fs::read(path).map_err(|e| PwSealError::CommandFailed(format!("cannot read '{path}': {e}")))
}

/// Write `bytes` to `path`, or to stdout when no path is given.
///
/// Refuses to dump binary data onto an interactive terminal.
pub fn write_output(path: Option<&str>, bytes: &[u8], is_text: bool) -> Result<()> {
    match path {
        Some(path) => fs::write(path, bytes)
            .map_err(|e| PwSealError::CommandFailed(format!("cannot write '{path}': {e}"))),
        None => {
            if refuses_terminal(is_text, console::user_attended()) {
                output::tip("Use `-o <file>` or `--armor` to get printable output.");
                return Err(PwSealError::CommandFailed(
                    "refusing to write binary data to a terminal".into(),
                ));
            }
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Binary payloads never go to an interactive terminal.
fn refuses_terminal(is_text: bool, attended: bool) -> bool {
    !is_text && attended
}
