// Chrome rendering
// Title, status and key binding lines around the control box

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::App;

pub fn render_title(f: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        app.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status = Paragraph::new(app.status_text()).style(Style::default().fg(app.settings.status_fg));
    f.render_widget(status, area);
}

pub fn render_bindings(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::with_capacity(app.bindings.len() * 2);
    for (i, (key, description)) in app.bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(key.clone(), Style::default().add_modifier(Modifier::BOLD)));
        spans.push(Span::raw(format!(" {description}")));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
