// Segment Bar Component Example
// Standalone example showing a text segment control driven by the layout engine
//
// Usage: segment_bar_example [TITLE]...
// Left/Right or a click selects, q quits. The last selection is printed on exit.

use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use segment_components::{cell_to_point, ContentSpec, HighlightStyle, SegmentBar, SegmentLayoutEngine, SelectionChanged};
use std::cell::Cell;
use std::io;
use std::rc::Rc;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

const POINTS_PER_COLUMN: f64 = 10.0;
const CONTROL_HEIGHT: f64 = 44.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Segment titles from the command line
    let args: Vec<String> = std::env::args().skip(1).collect();
    let titles = if args.is_empty() {
        vec!["First".to_string(), "Second".to_string(), "Third".to_string()]
    } else {
        args
    };

    let mut engine = SegmentLayoutEngine::with_content(0.0, CONTROL_HEIGHT, ContentSpec::text(titles), HighlightStyle::BottomEdge);
    let last = Rc::new(Cell::new(None));
    let sink = Rc::clone(&last);
    engine.set_listener(move |event: SelectionChanged| sink.set(Some(event.index())));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut control_area = Rect::default();

    // Render loop
    loop {
        terminal.draw(|f| {
            let chunks = Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).split(f.area());
            let block = Block::default().borders(Borders::ALL).title(" segments ");
            let inner = block.inner(chunks[0]);
            f.render_widget(block, chunks[0]);

            if inner != control_area {
                control_area = inner;
                engine.set_size(f64::from(inner.width) * POINTS_PER_COLUMN, CONTROL_HEIGHT);
                let _ = engine.recompute();
            }
            if let Some(frame) = engine.frame() {
                f.render_widget(SegmentBar::new(frame), inner);
            }

            let status = match last.get() {
                Some(index) => format!("selected segment {}", index + 1),
                None => "nothing selected yet".to_string(),
            };
            f.render_widget(Paragraph::new(status), chunks[1]);
        })?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Left => {
                    let _ = engine.select_previous();
                }
                KeyCode::Right => {
                    let _ = engine.select_next();
                }
                _ => {}
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let bounds = engine.frame().map(|frame| frame.bounds);
                if let Some((x, y)) = bounds.and_then(|b| cell_to_point(control_area, b, mouse.column, mouse.row)) {
                    engine.activate_at(x, y);
                }
            }
            _ => {}
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Some(index) = last.get() {
        println!("{}", index + 1);
    }
    Ok(())
}
