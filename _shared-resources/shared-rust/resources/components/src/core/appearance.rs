// Segment Appearance
// Colors and font handed to renderers alongside the computed layout

use ratatui::style::Color;

use crate::core::selection::Emphasis;

/// Font requested for segment labels
/// Terminal renderers ignore the family and use the size only as a bold hint
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f64,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "AvenirNext-DemiBold".to_string(),
            size: 15.0,
        }
    }
}

/// Visual settings for a segment control
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    /// Fill of the highlight indicator
    pub highlight_color: Color,
    /// Label/icon tint of unselected segments
    pub tint: Color,
    /// Label/icon tint of the selected segment
    pub highlight_tint: Color,
    /// Control background
    pub background: Color,
    /// Label font
    pub font: FontSpec,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            highlight_color: Color::Rgb(42, 132, 210),
            tint: Color::White,
            highlight_tint: Color::White,
            background: Color::Rgb(45, 62, 100),
            font: FontSpec::default(),
        }
    }
}

impl Appearance {
    /// Tint to apply to a segment with the given emphasis
    pub fn tint_for(&self, emphasis: Emphasis) -> Color {
        match emphasis {
            Emphasis::Highlight => self.highlight_tint,
            Emphasis::Normal => self.tint,
        }
    }
}
