//! Password-based sealing: key derivation plus AEAD framing in one call.
//!
//! Every operation re-derives the key; nothing is cached between calls,
//! so a `PasswordCipher` can be shared freely across threads.

use super::blob::{BlobFormat, BlobLayout};
use super::encryption;
use super::kdf::{derive_key_with_params, generate_salt, KdfParams, SALT_LEN};
use super::keys::DerivedKey;
use crate::errors::{PwSealError, Result};

/// KDF parameters and blob layout used to seal and open blobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordCipher {
    params: KdfParams,
    format: BlobFormat,
}

impl PasswordCipher {
    /// Fixed-salt cipher with the given parameters.
    pub fn new(params: KdfParams) -> Self {
        Self {
            params,
            format: BlobFormat::FixedSalt,
        }
    }

    /// Switch the blob layout.
    pub fn with_format(self, format: BlobFormat) -> Self {
        Self { format, ..self }
    }

    pub fn params(&self) -> &KdfParams {
        &self.params
    }

    pub fn format(&self) -> BlobFormat {
        self.format
    }

    /// Derive the key for `password` with the configured salt.
    pub fn derive_key(&self, password: &str) -> Result<DerivedKey> {
        derive_key_with_params(password, &self.params)
    }

    /// Seal `plaintext` with no associated data.
    pub fn encrypt(&self, plaintext: &[u8], password: &str) -> Result<Vec<u8>> {
        self.encrypt_with_aad(plaintext, password, &[])
    }

    /// Open a blob sealed with no associated data.
    pub fn decrypt(&self, blob: &[u8], password: &str) -> Result<Vec<u8>> {
        self.decrypt_with_aad(blob, password, &[])
    }

    /// Seal `plaintext`, binding `aad` into the tag.
    ///
    /// The same `aad` must be supplied to open the blob.
    pub fn encrypt_with_aad(&self, plaintext: &[u8], password: &str, aad: &[u8]) -> Result<Vec<u8>> {
        match self.format {
            BlobFormat::FixedSalt => {
                let key = self.derive_key(password)?;
                encryption::encrypt(&key, plaintext, aad)
            }
            BlobFormat::EmbeddedSalt => {
                let salt = generate_salt()?;
                let key = derive_key_with_params(password, &self.params.with_salt(salt))?;
                let sealed = encryption::encrypt(&key, plaintext, aad)?;

                let mut output = Vec::with_capacity(SALT_LEN + sealed.len());
                output.extend_from_slice(&salt);
                output.extend_from_slice(&sealed);
                Ok(output)
            }
        }
    }

    /// Open a blob sealed with `aad`.
    ///
    /// Length is checked before the key is derived.  A wrong password, a
    /// wrong `aad` and a tampered blob all yield `AuthenticationFailed`.
    pub fn decrypt_with_aad(&self, blob: &[u8], password: &str, aad: &[u8]) -> Result<Vec<u8>> {
        let layout = BlobLayout::parse(self.format, blob)?;

        let params = match layout.salt() {
            None => self.params,
            Some(salt) => {
                let salt: [u8; SALT_LEN] =
                    salt.try_into().map_err(|_| PwSealError::MalformedInput {
                        len: blob.len(),
                        min: self.format.min_len(),
                    })?;
                self.params.with_salt(salt)
            }
        };

        let key = derive_key_with_params(password, &params)?;
        encryption::decrypt(&key, layout.payload(), aad)
    }
}

/// Derive the 32-byte key for `password` with the default salt and
/// iteration count.
pub fn derive_key(password: &str) -> Result<DerivedKey> {
    PasswordCipher::default().derive_key(password)
}

/// Seal `plaintext` under `password` into `nonce || ciphertext || tag`.
pub fn encrypt(plaintext: &[u8], password: &str) -> Result<Vec<u8>> {
    PasswordCipher::default().encrypt(plaintext, password)
}

/// Open a blob produced by `encrypt`.
pub fn decrypt(blob: &[u8], password: &str) -> Result<Vec<u8>> {
    PasswordCipher::default().decrypt(blob, password)
}
