// Render module - UI rendering functions

pub mod chrome;
pub mod content;

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::core::App;

pub use chrome::{render_bindings, render_status_bar, render_title};
pub use content::render_content;

/// Render one full application frame
pub fn render_app(f: &mut Frame, app: &mut App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_title(f, app, chunks[0]);
    render_content(f, app, chunks[1], now);
    render_status_bar(f, app, chunks[2]);
    render_bindings(f, app, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use crate::core::UiSettings;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_full_frame_shows_control_and_chrome() {
        let config = load_config(None).unwrap();
        let mut app = App::from_config(&config, UiSettings::default()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();

        terminal.draw(|f| render_app(f, &mut app, Instant::now())).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("SEGMENT BAR"));
        assert!(text.contains("periods"));
        assert!(text.contains("Day"));
        assert!(text.contains("Year"));
        assert!(text.contains("Click a segment"));
        assert!(text.contains("Quit"));
    }
}
