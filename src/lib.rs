//! Password-sealed blobs.
//!
//! A password is stretched with PBKDF2-HMAC-SHA256 into a 32-byte key,
//! which seals data with AES-256-GCM into `nonce || ciphertext || tag`.
//!
//! ```no_run
//! let blob = pwseal::encrypt(b"question bank", "hunter2")?;
//! assert_eq!(pwseal::decrypt(&blob, "hunter2")?, b"question bank");
//! # Ok::<(), pwseal::PwSealError>(())
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;

pub use crypto::{decrypt, derive_key, encrypt, BlobFormat, KdfParams, PasswordCipher};
pub use errors::{PwSealError, Result};
