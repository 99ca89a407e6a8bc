// Segment Bar Component
// Paints a computed segment layout into a ratatui buffer

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::core::{Appearance, Emphasis, SegmentRect, Size};
use crate::utilities::{centered_in, Arrangement, SegmentLayout, SegmentSlot};

/// Everything a renderer needs for one pass: layout, per-slot emphasis and colors
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentFrame {
    pub layout: SegmentLayout,
    pub emphasis: Vec<Emphasis>,
    pub appearance: Appearance,
    /// Point-space size the layout was computed for
    pub bounds: Size,
}

impl SegmentFrame {
    pub fn emphasis_of(&self, index: usize) -> Emphasis {
        self.emphasis.get(index).copied().unwrap_or(Emphasis::Normal)
    }

    /// Move highlight and emphasis to slot `index` within this frame's geometry
    /// Index past the last slot selects the last slot
    pub fn select(&mut self, index: usize) {
        let count = self.layout.slots.len();
        if count == 0 {
            return;
        }
        let index = index.min(count - 1);
        self.layout.highlight.rect.x = self.layout.origin_x + index as f64 * self.layout.slot_width;
        self.emphasis = (0..count)
            .map(|i| if i == index { Emphasis::Highlight } else { Emphasis::Normal })
            .collect();
    }
}

/// Terminal widget for a `SegmentFrame`
pub struct SegmentBar<'a> {
    frame: &'a SegmentFrame,
    /// Highlight drawn instead of the frame's own (used while animating)
    highlight: Option<SegmentRect>,
}

impl<'a> SegmentBar<'a> {
    pub fn new(frame: &'a SegmentFrame) -> Self {
        Self { frame, highlight: None }
    }

    pub fn with_highlight(mut self, rect: SegmentRect) -> Self {
        self.highlight = Some(rect);
        self
    }

    fn label_style(&self, emphasis: Emphasis) -> Style {
        let appearance = &self.frame.appearance;
        let style = Style::default().fg(appearance.tint_for(emphasis));
        if appearance.font.family.contains("Bold") {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Lines drawn inside a slot, top to bottom
    fn slot_lines(slot: &SegmentSlot) -> Vec<String> {
        let icon = slot.icon.as_ref().map(|icon| format!("[{}]", icon.name));
        match (icon, slot.label.as_ref()) {
            (Some(icon), Some(label)) => match slot.arrangement {
                Arrangement::Horizontal => vec![format!("{icon} {label}")],
                Arrangement::Vertical => vec![icon, label.clone()],
            },
            (Some(icon), None) => vec![icon],
            (None, Some(label)) => vec![label.clone()],
            (None, None) => Vec::new(),
        }
    }

    fn render_slot(&self, slot: &SegmentSlot, area: Rect, buf: &mut Buffer) {
        let cells = slot.rect.to_cells(area, self.frame.bounds);
        if cells.width == 0 || cells.height == 0 {
            return;
        }
        let lines = Self::slot_lines(slot);
        let style = self.label_style(self.frame.emphasis_of(slot.index));

        let block = centered_in(cells.width, lines.len() as u16, cells);
        for (row, line) in lines.iter().enumerate().take(block.height as usize) {
            let width = (line.chars().count() as u16).min(cells.width);
            let line_area = centered_in(width, 1, cells);
            buf.set_stringn(line_area.x, block.y + row as u16, line, width as usize, style);
        }
    }
}

impl Widget for SegmentBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let appearance = &self.frame.appearance;
        buf.set_style(area, Style::default().bg(appearance.background));

        let highlight = self.highlight.unwrap_or(self.frame.layout.highlight.rect);
        let highlight_cells = highlight.to_cells(area, self.frame.bounds).intersection(area);
        buf.set_style(highlight_cells, Style::default().bg(appearance.highlight_color));

        for slot in &self.frame.layout.slots {
            self.render_slot(slot, area, buf);
        }
    }
}

/// Convert a terminal cell inside `area` to the point at its centre
/// Returns None when the cell lies outside the area
pub fn cell_to_point(area: Rect, bounds: Size, column: u16, row: u16) -> Option<(f64, f64)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    if column < area.x || column >= area.x + area.width || row < area.y || row >= area.y + area.height {
        return None;
    }
    let x = (f64::from(column - area.x) + 0.5) * bounds.width / f64::from(area.width);
    let y = (f64::from(row - area.y) + 0.5) * bounds.height / f64::from(area.height);
    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ContentSpec, IconImage, SelectionState};
    use crate::utilities::{compute_layout, HighlightStyle, LayoutConfig};
    use ratatui::style::Color;

    fn frame_for(spec: &ContentSpec, config: LayoutConfig, selected: usize) -> SegmentFrame {
        let layout = compute_layout(spec, &config, selected).unwrap();
        let mut selection = SelectionState::new();
        selection.activate(selected, spec.len()).unwrap();
        SegmentFrame {
            layout,
            emphasis: selection.emphasis(spec.len()),
            appearance: Appearance {
                tint: Color::Gray,
                highlight_tint: Color::Yellow,
                ..Appearance::default()
            },
            bounds: Size::new(config.width, config.height),
        }
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn test_frame_select_moves_highlight_within_geometry() {
        let spec = ContentSpec::text(["One", "Two", "Three"]);
        let config = LayoutConfig { width: 30.0, height: 3.0, ..LayoutConfig::default() };
        let mut frame = frame_for(&spec, config, 0);

        frame.select(2);
        assert_eq!(frame.layout.highlight.rect, SegmentRect::new(20.0, 0.0, 10.0, 3.0));
        assert_eq!(frame.emphasis_of(2), Emphasis::Highlight);
        assert_eq!(frame.emphasis_of(0), Emphasis::Normal);

        // Past the end selects the last slot
        frame.select(7);
        assert_eq!(frame.layout.highlight.rect.x, 20.0);
    }

    #[test]
    fn test_background_highlight_paints_selected_slot() {
        let spec = ContentSpec::text(["One", "Two", "Three"]);
        let config = LayoutConfig { width: 30.0, height: 3.0, ..LayoutConfig::default() };
        let frame = frame_for(&spec, config, 1);

        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        SegmentBar::new(&frame).render(area, &mut buf);

        let highlight = frame.appearance.highlight_color;
        let background = frame.appearance.background;
        assert_eq!(buf[(0, 0)].bg, background);
        assert_eq!(buf[(10, 0)].bg, highlight);
        assert_eq!(buf[(19, 2)].bg, highlight);
        assert_eq!(buf[(20, 1)].bg, background);

        let middle = row_text(&buf, 1);
        assert!(middle.contains("One"));
        assert!(middle.contains("Two"));
        assert!(middle.contains("Three"));
        let two_at = middle.find("Two").unwrap() as u16;
        assert_eq!(buf[(two_at, 1)].fg, Color::Yellow);
        let one_at = middle.find("One").unwrap() as u16;
        assert_eq!(buf[(one_at, 1)].fg, Color::Gray);
    }

    #[test]
    fn test_bottom_edge_highlight_uses_last_row() {
        let spec = ContentSpec::text(["A", "B"]);
        let config = LayoutConfig {
            width: 20.0,
            height: 44.0,
            highlight_style: HighlightStyle::BottomEdge,
            ..LayoutConfig::default()
        };
        let frame = frame_for(&spec, config, 0);

        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        SegmentBar::new(&frame).render(area, &mut buf);

        let highlight = frame.appearance.highlight_color;
        assert_eq!(buf[(0, 2)].bg, highlight);
        assert_eq!(buf[(0, 0)].bg, frame.appearance.background);
        assert_eq!(buf[(15, 2)].bg, frame.appearance.background);
    }

    #[test]
    fn test_vertical_hybrid_stacks_icon_over_label() {
        let spec = ContentSpec::HybridVertical {
            labels: vec!["Home".into()],
            icons: vec![IconImage::new("h", 10.0, 10.0)],
        };
        let config = LayoutConfig { width: 12.0, height: 4.0, ..LayoutConfig::default() };
        let frame = frame_for(&spec, config, 0);

        let area = Rect::new(0, 0, 12, 4);
        let mut buf = Buffer::empty(area);
        SegmentBar::new(&frame).render(area, &mut buf);

        assert!(row_text(&buf, 1).contains("[h]"));
        assert!(row_text(&buf, 2).contains("Home"));
    }

    #[test]
    fn test_highlight_override_while_animating() {
        let spec = ContentSpec::text(["A", "B"]);
        let config = LayoutConfig { width: 20.0, height: 1.0, ..LayoutConfig::default() };
        let frame = frame_for(&spec, config, 0);

        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        SegmentBar::new(&frame)
            .with_highlight(SegmentRect::new(5.0, 0.0, 10.0, 1.0))
            .render(area, &mut buf);

        assert_eq!(buf[(0, 0)].bg, frame.appearance.background);
        assert_eq!(buf[(5, 0)].bg, frame.appearance.highlight_color);
        assert_eq!(buf[(14, 0)].bg, frame.appearance.highlight_color);
    }

    #[test]
    fn test_cell_to_point() {
        let area = Rect::new(10, 5, 36, 3);
        let bounds = Size::new(360.0, 30.0);
        assert_eq!(cell_to_point(area, bounds, 10, 5), Some((5.0, 5.0)));
        assert_eq!(cell_to_point(area, bounds, 45, 7), Some((355.0, 25.0)));
        assert_eq!(cell_to_point(area, bounds, 9, 5), None);
        assert_eq!(cell_to_point(area, bounds, 46, 5), None);
    }
}
