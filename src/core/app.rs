// Application State
// Hosts the configured segment controls and routes input into them

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use ratatui::layout::Rect;
use segment_components::{
    cell_to_point, create_engine_from_config, ConfigError, DistributionPolicy, HighlightAnimator, HighlightStyle,
    SegmentLayoutEngine, SegmentRect, SelectionChanged,
};
use tracing::{debug, info};

use super::{AppEvent, UiSettings};
use crate::config::AppConfig;
use crate::constants::{CONTROL_POINTS_HEIGHT, NOTIFICATION_HISTORY, POINTS_PER_COLUMN};

/// A selection change reported by one of the controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub hwnd: String,
    pub index: usize,
}

/// One configured control and its engine
#[derive(Debug)]
pub struct SegmentControl {
    pub name: String,
    pub hwnd: String,
    pub engine: SegmentLayoutEngine,
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Compiled-in UI settings
    pub settings: UiSettings,

    pub title: String,

    /// (key, description) pairs for the bindings line
    pub bindings: Vec<(String, String)>,

    default_status: String,

    /// Transient status message, replaced by the next notification
    status_message: Option<String>,

    controls: Vec<SegmentControl>,

    active: usize,

    /// Filled by the controls' selection listeners
    notifications: Rc<RefCell<Vec<Notification>>>,

    animator: Option<HighlightAnimator>,

    /// Cells the active control was last laid out into
    control_area: Option<Rect>,

    /// Active control needs a layout pass before the next draw
    needs_layout: bool,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Build the application from the runtime configuration
    /// Controls are laid out on the first draw, once their width is known
    pub fn from_config(config: &AppConfig, settings: UiSettings) -> Result<Self, ConfigError> {
        let notifications = Rc::new(RefCell::new(Vec::new()));

        let mut controls = Vec::with_capacity(config.segment_controls.len());
        for (name, control_config) in &config.segment_controls {
            let mut engine = create_engine_from_config(control_config, 0.0, CONTROL_POINTS_HEIGHT)?;
            engine.set_listener(Self::listener_for(&control_config.hwnd, &notifications));
            controls.push(SegmentControl {
                name: name.clone(),
                hwnd: control_config.hwnd.clone(),
                engine,
            });
        }

        Ok(Self {
            settings,
            title: config.application.title.clone(),
            bindings: config
                .application
                .bindings
                .iter()
                .map(|b| (b.key.clone(), b.description.clone()))
                .collect(),
            default_status: config.application.status_bar.default_text.clone(),
            status_message: None,
            controls,
            active: 0,
            notifications,
            animator: None,
            control_area: None,
            needs_layout: true,
            should_quit: false,
        })
    }

    fn listener_for(
        hwnd: &str,
        notifications: &Rc<RefCell<Vec<Notification>>>,
    ) -> impl FnMut(SelectionChanged) + 'static {
        let hwnd = hwnd.to_string();
        let notifications = Rc::clone(notifications);
        move |event: SelectionChanged| {
            info!(hwnd = %hwnd, index = event.index(), "selection changed");
            let mut log = notifications.borrow_mut();
            log.push(Notification {
                hwnd: hwnd.clone(),
                index: event.index(),
            });
            if log.len() > NOTIFICATION_HISTORY {
                let excess = log.len() - NOTIFICATION_HISTORY;
                log.drain(..excess);
            }
        }
    }

    // ── Accessors ──────────────────────────────────────────────────────────────────────────────

    pub fn controls(&self) -> &[SegmentControl] {
        &self.controls
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_control(&self) -> Option<&SegmentControl> {
        self.controls.get(self.active)
    }

    fn active_engine_mut(&mut self) -> Option<&mut SegmentLayoutEngine> {
        self.controls.get_mut(self.active).map(|control| &mut control.engine)
    }

    /// Selection notifications received so far, oldest first
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.borrow().clone()
    }

    pub fn status_text(&self) -> String {
        if let Some(message) = &self.status_message {
            return message.clone();
        }
        match self.notifications.borrow().last() {
            Some(last) => format!("{} selected segment {}", last.hwnd, last.index + 1),
            None => self.default_status.clone(),
        }
    }

    // ── Layout ─────────────────────────────────────────────────────────────────────────────────

    /// Lay the active control out into `area` if the area or its configuration changed
    pub fn layout_for(&mut self, area: Rect) {
        if !self.needs_layout && self.control_area == Some(area) {
            return;
        }
        self.control_area = Some(area);
        self.needs_layout = false;

        if let Some(engine) = self.active_engine_mut() {
            engine.set_size(f64::from(area.width) * POINTS_PER_COLUMN, CONTROL_POINTS_HEIGHT);
            // Failures are logged by the engine and leave no frame to draw
            let _ = engine.recompute();
        }
    }

    /// Highlight position while an animation is running
    pub fn animated_highlight(&self, now: Instant) -> Option<SegmentRect> {
        self.animator
            .as_ref()
            .filter(|animator| !animator.is_finished(now))
            .map(|animator| animator.rect_at(now))
    }

    /// Drop a finished animation
    pub fn tick(&mut self, now: Instant) {
        if self.animator.as_ref().is_some_and(|animator| animator.is_finished(now)) {
            self.animator = None;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_some()
    }

    // ── Events ─────────────────────────────────────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Quit => self.should_quit = true,
            AppEvent::SelectPrevious => {
                if let Some(engine) = self.active_engine_mut() {
                    let _ = engine.select_previous();
                }
                self.after_selection(now);
            }
            AppEvent::SelectNext => {
                if let Some(engine) = self.active_engine_mut() {
                    let _ = engine.select_next();
                }
                self.after_selection(now);
            }
            AppEvent::SelectIndex(index) => {
                let result = self.active_engine_mut().map(|engine| engine.select_index(index));
                match result {
                    Some(Err(_)) => self.status_message = Some(format!("No segment {}", index + 1)),
                    _ => self.after_selection(now),
                }
            }
            AppEvent::NextControl => {
                if !self.controls.is_empty() {
                    self.active = (self.active + 1) % self.controls.len();
                }
                self.reset_view();
                debug!(active = self.active, "switched control");
            }
            AppEvent::CycleHighlightStyle => {
                if let Some(engine) = self.active_engine_mut() {
                    let next = match engine.config().highlight_style {
                        HighlightStyle::Background => HighlightStyle::TopEdge,
                        HighlightStyle::TopEdge => HighlightStyle::BottomEdge,
                        HighlightStyle::BottomEdge => HighlightStyle::Background,
                    };
                    engine.set_highlight_style(next);
                }
                self.reset_view();
            }
            AppEvent::CycleDistribution => {
                if let Some(engine) = self.active_engine_mut() {
                    let next = match engine.config().distribution {
                        DistributionPolicy::Flexible => DistributionPolicy::Fixed,
                        DistributionPolicy::Fixed => DistributionPolicy::HalfFixed,
                        DistributionPolicy::HalfFixed => DistributionPolicy::Flexible,
                    };
                    engine.set_distribution(next);
                }
                self.reset_view();
            }
            AppEvent::Click { column, row } => self.handle_click(column, row, now),
            AppEvent::Resize => self.needs_layout = true,
            AppEvent::None => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16, now: Instant) {
        let Some(area) = self.control_area else {
            return;
        };
        let Some(engine) = self.active_engine_mut() else {
            return;
        };
        let Some(bounds) = engine.frame().map(|frame| frame.bounds) else {
            return;
        };
        if let Some((x, y)) = cell_to_point(area, bounds, column, row) {
            if engine.activate_at(x, y).is_some() {
                self.after_selection(now);
            }
        }
    }

    fn after_selection(&mut self, now: Instant) {
        self.status_message = None;
        let animate = self.settings.animate_highlight;
        let transition = self.active_engine_mut().and_then(|engine| engine.take_transition());
        self.animator = match transition {
            Some(transition) if animate => Some(HighlightAnimator::start(transition, now)),
            _ => None,
        };
    }

    /// Configuration or control changed: relayout on the next draw, drop any animation
    fn reset_view(&mut self) {
        self.status_message = None;
        self.animator = None;
        self.needs_layout = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use segment_components::{ContentKind, HIGHLIGHT_ANIMATION_DURATION};

    fn app() -> App {
        let config = load_config(None).unwrap();
        let settings = UiSettings {
            animate_highlight: true,
            ..UiSettings::default()
        };
        App::from_config(&config, settings).unwrap()
    }

    fn area() -> Rect {
        Rect::new(0, 5, 40, 3)
    }

    #[test]
    fn test_controls_follow_config_order() {
        let app = app();
        let names: Vec<&str> = app.controls().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["periods", "sections", "stacked", "toolbar"]);
        assert_eq!(app.active_control().unwrap().hwnd, "hwndPeriods");
        assert_eq!(app.controls()[2].engine.selected_index(), 1);
        assert_eq!(app.controls()[2].engine.content_kind(), ContentKind::HybridVertical);
    }

    #[test]
    fn test_layout_uses_area_width() {
        let mut app = app();
        assert!(app.active_control().unwrap().engine.frame().is_none());
        app.layout_for(area());
        let frame = app.active_control().unwrap().engine.frame().unwrap();
        assert_eq!(frame.bounds.width, 400.0);
        assert_eq!(frame.layout.slot_width, 100.0);
    }

    #[test]
    fn test_click_selects_segment_and_notifies() {
        let mut app = app();
        app.layout_for(area());
        let now = Instant::now();
        app.handle_event(AppEvent::Click { column: 25, row: 6 }, now);

        assert_eq!(app.active_control().unwrap().engine.selected_index(), 2);
        assert_eq!(
            app.notifications(),
            vec![Notification { hwnd: "hwndPeriods".to_string(), index: 2 }]
        );
        assert_eq!(app.status_text(), "hwndPeriods selected segment 3");
        assert!(app.is_animating());
    }

    #[test]
    fn test_click_outside_control_ignored() {
        let mut app = app();
        app.layout_for(area());
        app.handle_event(AppEvent::Click { column: 25, row: 1 }, Instant::now());
        assert!(app.notifications().is_empty());
    }

    #[test]
    fn test_animation_settles_on_target() {
        let mut app = app();
        app.layout_for(area());
        let start = Instant::now();
        app.handle_event(AppEvent::SelectNext, start);

        let midway = app.animated_highlight(start).unwrap();
        assert_eq!(midway.x, 0.0);

        let done = start + HIGHLIGHT_ANIMATION_DURATION;
        assert!(app.animated_highlight(done).is_none());
        app.tick(done);
        assert!(!app.is_animating());
        let frame = app.active_control().unwrap().engine.frame().unwrap();
        assert_eq!(frame.layout.highlight.rect.x, 100.0);
    }

    #[test]
    fn test_out_of_range_index_reports_status() {
        let mut app = app();
        app.layout_for(area());
        app.handle_event(AppEvent::SelectIndex(5), Instant::now());
        assert!(app.notifications().is_empty());
        assert_eq!(app.status_text(), "No segment 6");
        assert_eq!(app.active_control().unwrap().engine.selected_index(), 0);
    }

    #[test]
    fn test_next_control_and_cycles() {
        let mut app = app();
        app.layout_for(area());
        app.handle_event(AppEvent::NextControl, Instant::now());
        assert_eq!(app.active_control().unwrap().hwnd, "hwndSections");

        app.handle_event(AppEvent::CycleHighlightStyle, Instant::now());
        assert_eq!(
            app.active_control().unwrap().engine.config().highlight_style,
            HighlightStyle::BottomEdge
        );
        app.handle_event(AppEvent::CycleDistribution, Instant::now());
        assert_eq!(
            app.active_control().unwrap().engine.config().distribution,
            DistributionPolicy::Flexible
        );

        // Same area, but the configuration changed
        app.layout_for(area());
        let frame = app.active_control().unwrap().engine.frame().unwrap();
        assert_eq!(frame.layout.slot_width, 200.0);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_event(AppEvent::Quit, Instant::now());
        assert!(app.should_quit);
    }
}
