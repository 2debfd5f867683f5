//! Project configuration (`.pwseal.toml`).

pub mod settings;

pub use settings::Settings;
