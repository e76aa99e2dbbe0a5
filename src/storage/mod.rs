//! # Storage Layer
//!
//! Loading and saving of search configuration files.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Config | JSON (default) or TOML (`.toml` extension) | `--config PATH` or `$KNIGHT_PATHS_CONFIG` |
//!
//! ## Key Types
//!
//! - [`Config`] - Start/end squares, board size and path cap
//! - [`ConfigFormat`] - File format picked from the extension

mod config;

pub use config::{Config, ConfigError, ConfigFormat};
