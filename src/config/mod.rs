//! Configuration management for yastt.
//!
//! Configuration is a single TOML file in the user's config directory. The API
//! key may also come from the environment so it never has to be written to disk.

pub mod file;

pub use file::{get_config_path, YandexConfig, YasttConfig, API_KEY_ENV, DEFAULT_MAX_AUDIO_BYTES};
