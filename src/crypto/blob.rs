//! Encrypted blob layouts.
//!
//! ```text
//! fixed-salt:    [ nonce: 12 | ciphertext: N | tag: 16 ]
//! embedded-salt: [ salt: 16 | nonce: 12 | ciphertext: N | tag: 16 ]
//! ```
//!
//! The fixed-salt layout is the wire format every existing blob uses.
//! The embedded-salt layout carries its own random salt so identical
//! passwords no longer produce identical keys across blobs.

use super::kdf::SALT_LEN;
use crate::errors::{PwSealError, Result};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Which blob layout to read or write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlobFormat {
    /// Key derived with the configured salt; nothing but the nonce is stored.
    #[default]
    FixedSalt,
    /// A random per-blob salt is stored in front of the nonce.
    EmbeddedSalt,
}

impl BlobFormat {
    /// Length of the header that precedes the ciphertext.
    pub fn header_len(self) -> usize {
        match self {
            Self::FixedSalt => NONCE_LEN,
            Self::EmbeddedSalt => SALT_LEN + NONCE_LEN,
        }
    }

    /// Shortest valid blob: header plus a tag over empty plaintext.
    pub fn min_len(self) -> usize {
        self.header_len() + TAG_LEN
    }

    /// Parse a config/CLI name (`fixed-salt`, `embedded-salt`).
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "fixed-salt" | "fixed" => Ok(Self::FixedSalt),
            "embedded-salt" | "embedded" => Ok(Self::EmbeddedSalt),
            other => Err(PwSealError::ConfigError(format!(
                "unknown blob format '{other}' — use 'fixed-salt' or 'embedded-salt'"
            ))),
        }
    }

    /// Canonical name, the inverse of `from_name`.
    pub fn name(self) -> &'static str {
        match self {
            Self::FixedSalt => "fixed-salt",
            Self::EmbeddedSalt => "embedded-salt",
        }
    }
}

/// Borrowed views into the fields of a blob.
///
/// Only `parse` builds one, so the payload always holds a nonce and a
/// full tag.
#[derive(Debug, Clone, Copy)]
pub struct BlobLayout<'a> {
    format: BlobFormat,
    salt: Option<&'a [u8]>,
    /// nonce || ciphertext || tag
    payload: &'a [u8],
}

impl<'a> BlobLayout<'a> {
    /// Split `blob` into its fields.
    ///
    /// Fails with `MalformedInput` when the blob is shorter than the
    /// format minimum, before any key derivation happens.
    pub fn parse(format: BlobFormat, blob: &'a [u8]) -> Result<Self> {
        let min = format.min_len();
        if blob.len() < min {
            return Err(PwSealError::MalformedInput {
                len: blob.len(),
                min,
            });
        }

        let (salt, payload) = match format {
            BlobFormat::FixedSalt => (None, blob),
            BlobFormat::EmbeddedSalt => {
                let (salt, rest) = blob.split_at(SALT_LEN);
                (Some(salt), rest)
            }
        };

        Ok(Self {
            format,
            salt,
            payload,
        })
    }

    pub fn format(&self) -> BlobFormat {
        self.format
    }

    /// Per-blob salt; present only for `EmbeddedSalt`.
    pub fn salt(&self) -> Option<&'a [u8]> {
        self.salt
    }

    /// Everything after the salt, laid out as a fixed-salt blob.
    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }

    pub fn nonce(&self) -> &'a [u8] {
        &self.payload[..NONCE_LEN]
    }

    /// Ciphertext followed by the tag, as the AEAD consumes it.
    pub fn sealed(&self) -> &'a [u8] {
        &self.payload[NONCE_LEN..]
    }

    /// Ciphertext without the trailing tag.
    pub fn ciphertext(&self) -> &'a [u8] {
        &self.payload[NONCE_LEN..self.payload.len() - TAG_LEN]
    }

    /// The trailing authentication tag.
    pub fn tag(&self) -> &'a [u8] {
        &self.payload[self.payload.len() - TAG_LEN..]
    }

    /// Total length of the blob this layout was parsed from.
    pub fn total_len(&self) -> usize {
        self.salt.map_or(0, <[u8]>::len) + self.payload.len()
    }
}
