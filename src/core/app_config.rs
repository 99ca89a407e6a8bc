// Application Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

use std::time::Duration;

use ratatui::style::Color;

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// UI and display settings compiled into the binary
#[derive(Debug, Clone)]
pub struct UiSettings {
    /// Event poll interval; also the animation frame interval
    pub tick_rate: Duration,

    /// Enable mouse support
    pub mouse_enabled: bool,

    /// Animate highlight moves instead of jumping
    pub animate_highlight: bool,

    /// Rows occupied by the segment control
    pub control_height: u16,

    /// Log file written by the tracing subscriber
    pub log_file: String,

    /// Border color of the control box
    pub border_fg: Color,

    /// Status line color
    pub status_fg: Color,
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(compiled::TICK_RATE_MS),
            mouse_enabled: compiled::MOUSE_ENABLED,
            animate_highlight: compiled::ANIMATE_HIGHLIGHT,
            control_height: compiled::CONTROL_HEIGHT,
            log_file: compiled::LOG_FILE.to_string(),
            border_fg: rgb(compiled::BORDER_FG),
            status_fg: rgb(compiled::STATUS_FG),
        }
    }
}
