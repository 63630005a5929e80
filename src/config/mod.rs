//! Configuration module for Pocketbook
//!
//! - path resolution for settings, data, audit log and exports
//! - user settings persistence

pub mod paths;
pub mod settings;

pub use paths::PocketbookPaths;
pub use settings::Settings;
