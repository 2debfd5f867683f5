//! AES-256-GCM authenticated encryption under an already-derived key.
//!
//! Each call to `encrypt` generates a fresh random 12-byte nonce and
//! prepends it to the ciphertext.  `decrypt` splits the nonce back out
//! before decrypting.
//!
//! Layout of the returned byte buffer:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::TryRngCore;

use super::blob::{BlobFormat, BlobLayout, NONCE_LEN};
use super::keys::DerivedKey;
use crate::errors::{PwSealError, Result};

/// Encrypt `plaintext` under `key`, binding the optional `aad`.
///
/// Returns the nonce prepended to the ciphertext (nonce || ciphertext || tag).
pub fn encrypt(key: &DerivedKey, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| PwSealError::FatalEnvironment(format!("invalid key length: {e}")))?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    rand::rngs::OsRng
        .try_fill_bytes(&mut nonce_bytes)
        .map_err(|e| PwSealError::FatalEnvironment(format!("OS random source unavailable: {e}")))?;
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(
            nonce,
            Payload {
                msg: plaintext,
                aad,
            },
        )
        .map_err(|e| PwSealError::FatalEnvironment(format!("encryption error: {e}")))?;

    let mut output = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&nonce_bytes);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Decrypt data that was produced by `encrypt`.
///
/// Inputs shorter than nonce + tag are rejected as malformed.  Every
/// verification failure maps to the same `AuthenticationFailed`.
pub fn decrypt(key: &DerivedKey, ciphertext_with_nonce: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
    let layout = BlobLayout::parse(BlobFormat::FixedSalt, ciphertext_with_nonce)?;

    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| PwSealError::FatalEnvironment(format!("invalid key length: {e}")))?;

    cipher
        .decrypt(
            Nonce::from_slice(layout.nonce()),
            Payload {
                msg: layout.sealed(),
                aad,
            },
        )
        .map_err(|_| PwSealError::AuthenticationFailed)
}
