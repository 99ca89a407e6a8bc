// Segment Control Configuration
// YAML configuration structures and conversion into layout engines

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::core::{Appearance, ContentError, ContentKind, ContentSpec, FontSpec, IconImage};
use crate::managers::layout_engine::SegmentLayoutEngine;
use crate::utilities::{parse_color, DistributionPolicy, HighlightStyle, LayoutConfig};

/// Errors converting YAML configuration into a segment control
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown content kind '{kind}' for segment control '{hwnd}'")]
    UnknownContentKind { hwnd: String, kind: String },
    #[error("invalid content for segment control '{hwnd}': {source}")]
    Content {
        hwnd: String,
        #[source]
        source: ContentError,
    },
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    YAML Configuration Structures                               │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Icon handle from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct IconConfigYaml {
    pub name: String,
    pub width: f64,
    pub height: f64,
}

/// Segment content from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentContentYaml {
    /// "text", "icon", "hybrid" or "hybrid_vertical"
    pub kind: String,
    #[serde(default)]
    pub titles: Vec<String>,
    #[serde(default)]
    pub icons: Vec<IconConfigYaml>,
}

/// Segment colors from YAML (named colors or #RRGGBB)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SegmentColorsYaml {
    pub highlight: Option<String>,
    pub tint: Option<String>,
    pub highlight_tint: Option<String>,
    pub background: Option<String>,
}

/// Label font from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct FontConfigYaml {
    pub family: Option<String>,
    pub size: Option<f64>,
}

/// Segment control configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentControlConfigYaml {
    /// Handle name of the control
    pub hwnd: String,
    pub content: SegmentContentYaml,
    /// "fixed", "half_fixed" or "flexible" (defaults to flexible)
    pub distribution: Option<String>,
    /// "background", "top_edge" or "bottom_edge" (defaults to background)
    pub highlight_style: Option<String>,
    /// Edge highlight thickness (defaults to 5.0)
    pub edge_highlight_height: Option<f64>,
    pub colors: Option<SegmentColorsYaml>,
    pub font: Option<FontConfigYaml>,
    /// Initially selected segment (defaults to 0)
    pub selected: Option<usize>,
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Configuration Conversion Functions                          │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Convert YAML content into an unvalidated content spec
pub fn convert_content(hwnd: &str, content: &SegmentContentYaml) -> Result<ContentSpec, ConfigError> {
    let kind = ContentKind::from_str(&content.kind).ok_or_else(|| ConfigError::UnknownContentKind {
        hwnd: hwnd.to_string(),
        kind: content.kind.clone(),
    })?;
    let labels = content.titles.clone();
    let icons: Vec<IconImage> = content
        .icons
        .iter()
        .map(|icon| IconImage::new(icon.name.clone(), icon.width, icon.height))
        .collect();

    let spec = match kind {
        ContentKind::Text => {
            if !icons.is_empty() {
                warn!(hwnd, "'icons' ignored for text content");
            }
            ContentSpec::TextOnly(labels)
        }
        ContentKind::Icon => {
            if !labels.is_empty() {
                warn!(hwnd, "'titles' ignored for icon content");
            }
            ContentSpec::IconOnly(icons)
        }
        ContentKind::Hybrid => ContentSpec::Hybrid { labels, icons },
        ContentKind::HybridVertical => ContentSpec::HybridVertical { labels, icons },
    };
    Ok(spec)
}

fn color_or(hwnd: &str, field: &str, value: Option<&String>, fallback: ratatui::style::Color) -> ratatui::style::Color {
    match value {
        Some(raw) => parse_color(raw).unwrap_or_else(|| {
            warn!(hwnd, field, value = %raw, "unrecognized color, using default");
            fallback
        }),
        None => fallback,
    }
}

/// Convert YAML colors and font into an appearance
pub fn convert_appearance(config: &SegmentControlConfigYaml) -> Appearance {
    let defaults = Appearance::default();
    let colors = config.colors.clone().unwrap_or_default();
    let hwnd = config.hwnd.as_str();

    let font = match &config.font {
        Some(font) => FontSpec {
            family: font.family.clone().unwrap_or(defaults.font.family.clone()),
            size: font.size.unwrap_or(defaults.font.size),
        },
        None => defaults.font.clone(),
    };

    Appearance {
        highlight_color: color_or(hwnd, "highlight", colors.highlight.as_ref(), defaults.highlight_color),
        tint: color_or(hwnd, "tint", colors.tint.as_ref(), defaults.tint),
        highlight_tint: color_or(hwnd, "highlight_tint", colors.highlight_tint.as_ref(), defaults.highlight_tint),
        background: color_or(hwnd, "background", colors.background.as_ref(), defaults.background),
        font,
    }
}

/// Convert YAML layout settings into a layout config of the given size
pub fn convert_layout_config(config: &SegmentControlConfigYaml, width: f64, height: f64) -> LayoutConfig {
    let defaults = LayoutConfig::default();
    let hwnd = config.hwnd.as_str();

    let distribution = match config.distribution.as_deref() {
        Some(raw) => DistributionPolicy::from_str(raw).unwrap_or_else(|| {
            warn!(hwnd, value = raw, "unknown distribution, using flexible");
            defaults.distribution
        }),
        None => defaults.distribution,
    };
    let highlight_style = match config.highlight_style.as_deref() {
        Some(raw) => HighlightStyle::from_str(raw).unwrap_or_else(|| {
            warn!(hwnd, value = raw, "unknown highlight style, using background");
            defaults.highlight_style
        }),
        None => defaults.highlight_style,
    };

    LayoutConfig {
        width,
        height,
        distribution,
        highlight_style,
        edge_highlight_height: config.edge_highlight_height.unwrap_or(defaults.edge_highlight_height),
    }
}

/// Create a layout engine from YAML configuration
/// The engine has no listener yet and its layout has not been computed
pub fn create_engine_from_config(
    config: &SegmentControlConfigYaml,
    width: f64,
    height: f64,
) -> Result<SegmentLayoutEngine, ConfigError> {
    let content = convert_content(&config.hwnd, &config.content)?;
    let layout = convert_layout_config(config, width, height);

    let mut engine = SegmentLayoutEngine::new(width, height);
    engine.set_content(content).map_err(|source| ConfigError::Content {
        hwnd: config.hwnd.clone(),
        source,
    })?;
    engine.set_distribution(layout.distribution);
    engine.set_highlight_style(layout.highlight_style);
    engine.set_edge_highlight_height(layout.edge_highlight_height);
    engine.set_appearance(convert_appearance(config));

    if let Some(selected) = config.selected {
        if engine.select_index(selected).is_err() {
            warn!(hwnd = %config.hwnd, selected, "initial selection out of range, using 0");
        }
    }
    Ok(engine)
}
