//! Cryptographic primitives for pwseal.
//!
//! This module provides:
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)
//! - A zeroizing derived-key container (`keys`)
//! - AES-256-GCM encryption under a derived key (`encryption`)
//! - Blob layouts and length validation (`blob`)
//! - Password-in, blob-out sealing (`cipher`)

pub mod blob;
pub mod cipher;
pub mod encryption;
pub mod kdf;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use pwseal::crypto::{encrypt, decrypt, derive_key, ...};
pub use blob::{BlobFormat, BlobLayout, NONCE_LEN, TAG_LEN};
pub use cipher::{decrypt, derive_key, encrypt, PasswordCipher};
pub use kdf::{derive_key_with_params, generate_salt, KdfParams, DEFAULT_SALT, SALT_LEN};
pub use keys::DerivedKey;
