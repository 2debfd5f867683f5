use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;

use crate::crypto::kdf::{KdfParams, DEFAULT_ITERATIONS, DEFAULT_SALT, SALT_LEN};
use crate::crypto::{BlobFormat, PasswordCipher};
use crate::errors::{PwSealError, Result};

/// Project-level configuration, loaded from `.pwseal.toml`.
///
/// Every field has a default so pwseal works out-of-the-box without any
/// config file at all.  The defaults read every blob written by earlier
/// deployments.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// PBKDF2 iteration count (default: 100 000).
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// Base64 of the 16-byte fixed salt.
    #[serde(default = "default_salt")]
    pub salt: String,

    /// Blob layout: "fixed-salt" or "embedded-salt".
    #[serde(default = "default_format")]
    pub format: String,

    /// Write base64 text instead of raw bytes.
    #[serde(default)]
    pub armor: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

fn default_salt() -> String {
    BASE64.encode(DEFAULT_SALT)
}

fn default_format() -> String {
    BlobFormat::FixedSalt.name().to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            salt: default_salt(),
            format: default_format(),
            armor: false,
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".pwseal.toml";

    /// Load settings from `<project_dir>/.pwseal.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PwSealError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Decode the configured salt.
    pub fn salt_bytes(&self) -> Result<[u8; SALT_LEN]> {
        let bytes = BASE64
            .decode(self.salt.trim())
            .map_err(|e| PwSealError::ConfigError(format!("salt is not valid base64: {e}")))?;
        bytes.as_slice().try_into().map_err(|_| {
            PwSealError::ConfigError(format!(
                "salt must decode to exactly {SALT_LEN} bytes, got {}",
                bytes.len()
            ))
        })
    }

    /// Convert the KDF settings into crypto-layer params.
    pub fn kdf_params(&self) -> Result<KdfParams> {
        KdfParams::new(self.salt_bytes()?, self.iterations)
    }

    pub fn blob_format(&self) -> Result<BlobFormat> {
        BlobFormat::from_name(&self.format)
    }

    /// Build the cipher these settings describe.
    pub fn cipher(&self) -> Result<PasswordCipher> {
        Ok(PasswordCipher::new(self.kdf_params()?).with_format(self.blob_format()?))
    }
}

// ── Tests ────────────────────────────────────────────────────────────
