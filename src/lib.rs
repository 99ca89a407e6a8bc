// Segment Bar Library
// Terminal host for segmented controls built on segment-components

// Core infrastructure - application state, events, compiled settings
pub mod core;

// Runtime configuration loading and validation
pub mod config;
pub mod config_validation;

// Rendering of the application frame
pub mod render;

// Application constants
pub mod constants;

// Re-export commonly used items for convenience
pub use self::core::{App, AppEvent, EventHandler, UiSettings};
pub use config::{load_config, AppConfig, ConfigLoadError};
pub use config_validation::load_and_validate_config;
pub use constants::*;
