// Layout calculator for segment controls
// Partitions the control width into segment slots and places the highlight

use crate::core::{ContentError, ContentKind, ContentSpec, IconImage, SegmentRect, MAX_SEGMENTS};
use crate::utilities::image_fit::fit_icon;

/// Rule for sizing and positioning segment slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistributionPolicy {
    /// Every slot is a sixth of the width; slots are centred
    Fixed,
    /// A quarter of the width for one or two slots, otherwise like `Fixed`
    HalfFixed,
    /// Slots share the full width equally
    #[default]
    Flexible,
}

impl DistributionPolicy {
    pub fn from_str(policy: &str) -> Option<Self> {
        match policy.to_lowercase().as_str() {
            "fixed" => Some(DistributionPolicy::Fixed),
            "half_fixed" | "halffixed" => Some(DistributionPolicy::HalfFixed),
            "flexible" => Some(DistributionPolicy::Flexible),
            _ => None,
        }
    }
}

/// Where the selected segment's indicator is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightStyle {
    /// Full slot background
    #[default]
    Background,
    /// Bar along the top edge
    TopEdge,
    /// Bar along the bottom edge
    BottomEdge,
}

impl HighlightStyle {
    pub fn from_str(style: &str) -> Option<Self> {
        match style.to_lowercase().as_str() {
            "background" => Some(HighlightStyle::Background),
            "top_edge" | "topedge" | "top" => Some(HighlightStyle::TopEdge),
            "bottom_edge" | "bottomedge" | "bottom" => Some(HighlightStyle::BottomEdge),
            _ => None,
        }
    }
}

/// How icon and label share a hybrid slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    Horizontal,
    Vertical,
}

/// Geometry and style inputs of a layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub width: f64,
    pub height: f64,
    pub distribution: DistributionPolicy,
    pub highlight_style: HighlightStyle,
    /// Thickness of `TopEdge`/`BottomEdge` highlights
    pub edge_highlight_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            distribution: DistributionPolicy::default(),
            highlight_style: HighlightStyle::default(),
            edge_highlight_height: 5.0,
        }
    }
}

/// One laid out segment
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSlot {
    pub index: usize,
    pub rect: SegmentRect,
    pub label: Option<String>,
    /// Icon at its display size (fitted for hybrid content)
    pub icon: Option<IconImage>,
    pub arrangement: Arrangement,
}

/// Placed highlight indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightRect {
    pub rect: SegmentRect,
    pub style: HighlightStyle,
}

/// Result of a layout pass
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentLayout {
    pub slots: Vec<SegmentSlot>,
    pub highlight: HighlightRect,
    pub slot_width: f64,
    pub origin_x: f64,
}

impl SegmentLayout {
    /// Index of the slot containing the point, if any
    pub fn slot_at(&self, x: f64, y: f64) -> Option<usize> {
        self.slots.iter().find(|slot| slot.rect.contains(x, y)).map(|slot| slot.index)
    }
}

/// Layout calculator for segment slot and highlight computations
#[derive(Debug, Clone, Copy)]
pub struct LayoutCalculator {
    config: LayoutConfig,
}

impl LayoutCalculator {
    pub const fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Starting x and slot width for `count` segments of `kind`
    /// Text content always shares the full width, whatever the policy
    pub fn partition(&self, kind: ContentKind, count: usize) -> (f64, f64) {
        let total = self.config.width;
        if count == 0 {
            return (0.0, 0.0);
        }
        let policy = if kind == ContentKind::Text {
            DistributionPolicy::Flexible
        } else {
            self.config.distribution
        };
        match policy {
            DistributionPolicy::Flexible => (0.0, total / count as f64),
            DistributionPolicy::Fixed => {
                let width = total / MAX_SEGMENTS as f64;
                (Self::capacity_origin(width, count), width)
            }
            DistributionPolicy::HalfFixed => {
                let width = if count <= 2 { total / 4.0 } else { total / MAX_SEGMENTS as f64 };
                (Self::capacity_origin(width, count), width)
            }
        }
    }

    /// Offset of the first slot: half the width of the unused capacity slots
    fn capacity_origin(width: f64, count: usize) -> f64 {
        width * MAX_SEGMENTS.saturating_sub(count) as f64 / 2.0
    }

    /// Highlight rectangle for a slot starting at `slot_x`
    pub fn highlight_rect(&self, slot_x: f64, slot_width: f64) -> HighlightRect {
        let height = self.config.height;
        let edge = self.config.edge_highlight_height;
        let style = self.config.highlight_style;
        let rect = match style {
            HighlightStyle::Background => SegmentRect::new(slot_x, 0.0, slot_width, height),
            HighlightStyle::TopEdge => SegmentRect::new(slot_x, 0.0, slot_width, edge),
            HighlightStyle::BottomEdge => SegmentRect::new(slot_x, height - edge, slot_width, edge),
        };
        HighlightRect { rect, style }
    }

    /// Lay out every segment of `spec` and the highlight for `selected`
    pub fn compute(&self, spec: &ContentSpec, selected: usize) -> Result<SegmentLayout, ContentError> {
        let count = spec.len();
        if count == 0 {
            return Err(ContentError::EmptyContent);
        }
        let kind = spec.kind();
        let (origin_x, slot_width) = self.partition(kind, count);
        let height = self.config.height;
        let arrangement = if kind == ContentKind::HybridVertical {
            Arrangement::Vertical
        } else {
            Arrangement::Horizontal
        };
        let fit_icons = matches!(kind, ContentKind::Hybrid | ContentKind::HybridVertical);

        let slots = (0..count)
            .map(|index| SegmentSlot {
                index,
                rect: SegmentRect::new(origin_x + index as f64 * slot_width, 0.0, slot_width, height),
                label: spec.label(index).map(str::to_string),
                icon: spec.icon(index).map(|icon| {
                    if fit_icons {
                        fit_icon(icon, height)
                    } else {
                        icon.clone()
                    }
                }),
                arrangement,
            })
            .collect();

        let selected = selected.min(count - 1);
        let highlight = self.highlight_rect(origin_x + selected as f64 * slot_width, slot_width);

        Ok(SegmentLayout {
            slots,
            highlight,
            slot_width,
            origin_x,
        })
    }
}

/// Pure layout pass: slots and highlight for `spec` under `config`
pub fn compute_layout(
    spec: &ContentSpec,
    config: &LayoutConfig,
    selected: usize,
) -> Result<SegmentLayout, ContentError> {
    LayoutCalculator::new(*config).compute(spec, selected)
}
