//! Application command handlers for yastt.
//!
//! # Commands
//! - `transcribe`: Send an audio file to the configured provider
//! - `capabilities`: Show what the configured provider accepts
//! - `config`: Open configuration file in user's preferred editor
//! - `logs`: Display recent log entries

pub mod capabilities;
pub mod config;
pub mod logs;
pub mod transcribe;

pub use capabilities::handle_capabilities;
pub use config::handle_config;
pub use logs::handle_logs;
pub use transcribe::handle_transcribe;
