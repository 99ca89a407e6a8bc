// Content rendering
// Bordered box holding the active segment control and its settings

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use segment_components::SegmentBar;

use crate::core::App;

/// Render the active control inside a bordered box
pub fn render_content(f: &mut Frame, app: &mut App, area: Rect, now: Instant) {
    let title = match app.active_control() {
        Some(control) => format!(" {} ({}/{}) ", control.name, app.active_index() + 1, app.controls().len()),
        None => " no controls ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(app.settings.border_fg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 3 || inner.height == 0 {
        return;
    }

    // One column of padding each side, details line below the control
    let control_area = Rect {
        x: inner.x + 1,
        y: inner.y,
        width: inner.width - 2,
        height: app.settings.control_height.min(inner.height),
    };
    app.layout_for(control_area);

    let Some(control) = app.active_control() else {
        return;
    };
    match control.engine.frame() {
        Some(frame) => {
            let mut bar = SegmentBar::new(frame);
            if let Some(rect) = app.animated_highlight(now) {
                bar = bar.with_highlight(rect);
            }
            f.render_widget(bar, control_area);
        }
        None => {
            let empty = Paragraph::new("(no segments)").alignment(Alignment::Center);
            f.render_widget(empty, control_area);
        }
    }

    let details_y = control_area.y + control_area.height;
    if details_y < inner.y + inner.height {
        let engine = &control.engine;
        let details = format!(
            "{}  {:?}  {:?} / {:?}  segment {}/{}",
            control.hwnd,
            engine.content_kind(),
            engine.config().distribution,
            engine.config().highlight_style,
            engine.selected_index() + 1,
            engine.segment_count(),
        );
        let details_area = Rect {
            y: details_y,
            height: 1,
            ..control_area
        };
        f.render_widget(Paragraph::new(details).alignment(Alignment::Center), details_area);
    }
}
