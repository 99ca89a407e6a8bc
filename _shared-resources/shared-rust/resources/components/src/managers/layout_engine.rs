// Segment Layout Engine
// Owns content, configuration and selection of one segment control

use ratatui::style::Color;
use tracing::{debug, warn};

use crate::core::{
    Appearance, ContentError, ContentKind, ContentSpec, FontSpec, IconImage, SelectionChanged,
    SelectionError, SelectionListener, SelectionState, Size,
};
use crate::elements::{HighlightTransition, SegmentFrame};
use crate::utilities::{compute_layout, DistributionPolicy, HighlightStyle, LayoutConfig};

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                  Segment Layout Engine                                         │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Segment control state machine and layout driver
///
/// Mutators only store values. The host calls [`recompute`](Self::recompute)
/// after changing content, configuration or geometry, then renders
/// [`frame`](Self::frame). Activation refreshes the frame itself and notifies
/// the registered listener.
///
/// ```rust,ignore
/// let mut engine = SegmentLayoutEngine::new(360.0, 44.0);
/// engine.set_titles(["Day", "Week", "Month"])?;
/// engine.set_listener(|event: SelectionChanged| println!("selected {}", event.index()));
/// engine.recompute()?;
/// engine.activate(2)?;
/// ```
pub struct SegmentLayoutEngine {
    content: ContentSpec,
    config: LayoutConfig,
    appearance: Appearance,
    selection: SelectionState,
    listener: Option<Box<dyn SelectionListener>>,
    frame: Option<SegmentFrame>,
    transition: Option<HighlightTransition>,
}

impl std::fmt::Debug for SegmentLayoutEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentLayoutEngine")
            .field("content", &self.content)
            .field("config", &self.config)
            .field("appearance", &self.appearance)
            .field("selection", &self.selection)
            .field("has_listener", &self.listener.is_some())
            .field("frame", &self.frame)
            .field("transition", &self.transition)
            .finish()
    }
}

impl SegmentLayoutEngine {
    /// Empty text control of the given size
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            content: ContentSpec::default(),
            config: LayoutConfig {
                width,
                height,
                ..LayoutConfig::default()
            },
            appearance: Appearance::default(),
            selection: SelectionState::new(),
            listener: None,
            frame: None,
            transition: None,
        }
    }

    /// Control with initial content and highlight style
    /// Invalid content is logged and leaves the control empty
    pub fn with_content(width: f64, height: f64, content: ContentSpec, highlight_style: HighlightStyle) -> Self {
        let mut engine = Self::new(width, height);
        engine.config.highlight_style = highlight_style;
        // Rejection is already logged by set_content
        let _ = engine.set_content(content);
        engine
    }

    // ── Content ────────────────────────────────────────────────────────────────────────────────

    /// Replace the content; on error the previous content is kept
    pub fn set_content(&mut self, content: ContentSpec) -> Result<(), ContentError> {
        let content = match content.validated() {
            Ok(content) => content,
            Err(err) => {
                warn!(error = %err, "segment content rejected, keeping previous content");
                return Err(err);
            }
        };
        self.content = content;
        let count = self.content.len();
        if self.selection.clamp_to(count) {
            debug!(count, selected = self.selection.selected(), "selection clamped to new content");
        }
        Ok(())
    }

    pub fn set_titles<I, S>(&mut self, titles: I) -> Result<(), ContentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_content(ContentSpec::text(titles))
    }

    pub fn set_icons(&mut self, icons: Vec<IconImage>) -> Result<(), ContentError> {
        self.set_content(ContentSpec::IconOnly(icons))
    }

    /// Icon left of label
    pub fn set_hybrid(&mut self, labels: Vec<String>, icons: Vec<IconImage>) -> Result<(), ContentError> {
        self.set_content(ContentSpec::Hybrid { labels, icons })
    }

    /// Icon above label
    pub fn set_hybrid_vertical(&mut self, labels: Vec<String>, icons: Vec<IconImage>) -> Result<(), ContentError> {
        self.set_content(ContentSpec::HybridVertical { labels, icons })
    }

    // ── Appearance & configuration ────────────────────────────────────────────────────────────

    pub fn set_highlight_color(&mut self, color: Color) {
        self.appearance.highlight_color = color;
    }

    pub fn set_tint(&mut self, color: Color) {
        self.appearance.tint = color;
    }

    pub fn set_highlight_tint(&mut self, color: Color) {
        self.appearance.highlight_tint = color;
    }

    pub fn set_background(&mut self, color: Color) {
        self.appearance.background = color;
    }

    pub fn set_font(&mut self, font: FontSpec) {
        self.appearance.font = font;
    }

    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
    }

    pub fn set_highlight_style(&mut self, style: HighlightStyle) {
        self.config.highlight_style = style;
    }

    pub fn set_distribution(&mut self, policy: DistributionPolicy) {
        self.config.distribution = policy;
    }

    pub fn set_edge_highlight_height(&mut self, height: f64) {
        self.config.edge_highlight_height = height;
    }

    /// New geometry, e.g. after a resize; selection is preserved
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.config.width = width;
        self.config.height = height;
    }

    pub fn set_listener<L>(&mut self, listener: L)
    where
        L: SelectionListener + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    // ── Layout ─────────────────────────────────────────────────────────────────────────────────

    fn build_frame(&self) -> Result<SegmentFrame, ContentError> {
        let layout = compute_layout(&self.content, &self.config, self.selection.selected())?;
        Ok(SegmentFrame {
            layout,
            emphasis: self.selection.emphasis(self.content.len()),
            appearance: self.appearance.clone(),
            bounds: Size::new(self.config.width, self.config.height),
        })
    }

    /// Full layout pass over the current content and configuration
    /// Empty content skips layout and clears the frame
    pub fn recompute(&mut self) -> Result<(), ContentError> {
        match self.build_frame() {
            Ok(frame) => {
                self.frame = Some(frame);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "segment layout skipped");
                self.frame = None;
                Err(err)
            }
        }
    }

    // ── Selection ──────────────────────────────────────────────────────────────────────────────

    /// Select segment `index`, refresh highlight and emphasis, notify the listener
    /// Re-selecting the current segment notifies again
    pub fn activate(&mut self, index: usize) -> Result<SelectionChanged, SelectionError> {
        let count = self.content.len();
        let event = match self.selection.activate(index, count) {
            Ok(event) => event,
            Err(err) => {
                warn!(error = %err, "segment activation rejected");
                return Err(err);
            }
        };

        // Pending mutations stay pending: only the last frame's highlight moves
        if let Some(frame) = self.frame.as_mut() {
            let from = frame.layout.highlight.rect;
            frame.select(index);
            self.transition = Some(HighlightTransition::new(from, frame.layout.highlight.rect));
        }

        debug!(index, "segment selected");
        if let Some(listener) = self.listener.as_mut() {
            listener.selection_changed(event);
        }
        Ok(event)
    }

    /// Programmatic selection; identical to a user activation
    pub fn select_index(&mut self, index: usize) -> Result<SelectionChanged, SelectionError> {
        self.activate(index)
    }

    pub fn select_next(&mut self) -> Result<SelectionChanged, SelectionError> {
        self.step(1)
    }

    pub fn select_previous(&mut self) -> Result<SelectionChanged, SelectionError> {
        self.step(-1)
    }

    fn step(&mut self, direction: i32) -> Result<SelectionChanged, SelectionError> {
        let count = self.content.len();
        match self.selection.neighbor(direction, count) {
            Some(index) => self.activate(index),
            None => {
                warn!("segment navigation on empty control");
                Err(SelectionError::NoSegments)
            }
        }
    }

    /// Segment under a point of the last computed layout
    pub fn slot_at(&self, x: f64, y: f64) -> Option<usize> {
        self.frame.as_ref().and_then(|frame| frame.layout.slot_at(x, y))
    }

    /// Activate the segment under a point (tap routing)
    pub fn activate_at(&mut self, x: f64, y: f64) -> Option<SelectionChanged> {
        let index = self.slot_at(x, y)?;
        self.activate(index).ok()
    }

    /// Highlight movement caused by the last activation, if not yet consumed
    pub fn take_transition(&mut self) -> Option<HighlightTransition> {
        self.transition.take()
    }

    // ── Accessors ──────────────────────────────────────────────────────────────────────────────

    pub fn content(&self) -> &ContentSpec {
        &self.content
    }

    pub fn content_kind(&self) -> ContentKind {
        self.content.kind()
    }

    pub fn segment_count(&self) -> usize {
        self.content.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selection.selected()
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// Result of the last successful layout pass
    pub fn frame(&self) -> Option<&SegmentFrame> {
        self.frame.as_ref()
    }
}
