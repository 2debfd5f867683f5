//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The salt and iteration count travel together in `KdfParams` so the
//! caller always states which parameters a key came from.  The defaults
//! (fixed deployment salt, 100 000 iterations) match every blob written
//! by earlier deployments, so changing them breaks decryption of old data.

use hmac::Hmac;
use rand::TryRngCore;
use sha2::Sha256;

use super::keys::{DerivedKey, KEY_LEN};
use crate::errors::{PwSealError, Result};

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Default PBKDF2 iteration count.
pub const DEFAULT_ITERATIONS: u32 = 100_000;

/// Lowest iteration count we accept from configuration.
pub const MIN_ITERATIONS: u32 = 1_000;

/// Salt shared by every derivation in a fixed-salt deployment.
pub const DEFAULT_SALT: [u8; SALT_LEN] = [
    0x8d, 0x09, 0xf1, 0x15, 0xca, 0x9f, 0x2d, 0xe0, 0xf5, 0xc8, 0xbf, 0x9a, 0x22, 0xe8, 0xb6, 0xf2,
];

/// PBKDF2 parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// Salt mixed into every derivation.
    pub salt: [u8; SALT_LEN],
    /// Number of HMAC-SHA256 rounds.
    pub iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            salt: DEFAULT_SALT,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl KdfParams {
    /// Build params after checking the iteration floor.
    pub fn new(salt: [u8; SALT_LEN], iterations: u32) -> Result<Self> {
        let params = Self { salt, iterations };
        params.validate()?;
        Ok(params)
    }

    /// Same iteration count, different salt.
    pub fn with_salt(self, salt: [u8; SALT_LEN]) -> Self {
        Self { salt, ..self }
    }

    /// Reject iteration counts too low to slow down guessing.
    pub fn validate(&self) -> Result<()> {
        if self.iterations < MIN_ITERATIONS {
            return Err(PwSealError::InvalidKdfParams(format!(
                "iterations must be at least {MIN_ITERATIONS} (got {})",
                self.iterations
            )));
        }
        Ok(())
    }
}

/// Derive a 32-byte key from `password` with the default parameters.
pub fn derive_key(password: &str) -> Result<DerivedKey> {
    derive_key_with_params(password, &KdfParams::default())
}

/// Derive a 32-byte key with explicit PBKDF2 parameters.
///
/// Any string, including the empty one, is a valid password.  Errors are
/// limited to rejected parameters and a failing HMAC backend; the latter
/// is reported as `FatalEnvironment` rather than handing back a key.
pub fn derive_key_with_params(password: &str, params: &KdfParams) -> Result<DerivedKey> {
    params.validate()?;

    let mut key = [0u8; KEY_LEN];
    pbkdf2::pbkdf2::<Hmac<Sha256>>(password.as_bytes(), &params.salt, params.iterations, &mut key)
        .map_err(|e| PwSealError::FatalEnvironment(format!("PBKDF2 derivation failed: {e}")))?;

    Ok(DerivedKey::new(key))
}

/// Generate a random salt from the OS entropy source.
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| PwSealError::FatalEnvironment(format!("OS random source unavailable: {e}")))?;
    Ok(salt)
}
