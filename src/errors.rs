use thiserror::Error;

/// All errors that can occur in pwseal.
#[derive(Debug, Error)]
pub enum PwSealError {
    // --- Crypto errors ---
    #[error("Malformed input: blob is {len} bytes, expected at least {min}")]
    MalformedInput { len: usize, min: usize },

    /// Wrong password and corrupted data are reported identically.
    #[error("Authentication failed — wrong password or corrupted data")]
    AuthenticationFailed,

    #[error("Cryptographic environment failure: {0}")]
    FatalEnvironment(String),

    #[error("Invalid key derivation parameters: {0}")]
    InvalidKdfParams(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Encoding errors ---
    #[error("Encoding error: {0}")]
    EncodingError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for pwseal results.
pub type Result<T> = std::result::Result<T, PwSealError>;
