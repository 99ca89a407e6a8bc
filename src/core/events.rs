// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Application events that can be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Move the selection one segment left (wraps)
    SelectPrevious,

    /// Move the selection one segment right (wraps)
    SelectNext,

    /// Select a segment directly (zero-based)
    SelectIndex(usize),

    /// Show the next configured control
    NextControl,

    /// Cycle background / top edge / bottom edge
    CycleHighlightStyle,

    /// Cycle flexible / fixed / half fixed
    CycleDistribution,

    /// Left click at a terminal cell
    Click { column: u16, row: u16 },

    /// Terminal was resized
    Resize,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            Event::Resize(_, _) => AppEvent::Resize,
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            // Navigation
            KeyCode::Left | KeyCode::Char('h') => AppEvent::SelectPrevious,
            KeyCode::Right | KeyCode::Char('l') => AppEvent::SelectNext,
            KeyCode::Char(c @ '1'..='9') => AppEvent::SelectIndex(c as usize - '1' as usize),

            // Controls and styles
            KeyCode::Tab => AppEvent::NextControl,
            KeyCode::Char('s') => AppEvent::CycleHighlightStyle,
            KeyCode::Char('d') => AppEvent::CycleDistribution,

            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => AppEvent::Click {
                column: mouse.column,
                row: mouse.row,
            },
            MouseEventKind::ScrollUp => AppEvent::SelectPrevious,
            MouseEventKind::ScrollDown => AppEvent::SelectNext,
            _ => AppEvent::None,
        }
    }
}
