// Segment Content Model
// Validated description of what each segment displays

use thiserror::Error;

use crate::core::geometry::Size;

/// Maximum number of segments a control displays; extra entries are dropped
pub const MAX_SEGMENTS: usize = 6;

/// Errors raised while accepting or laying out content
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// Hybrid content needs exactly one icon per label
    #[error("label and icon counts out of sync ({labels} labels, {icons} icons)")]
    MismatchedContent { labels: usize, icons: usize },
    /// Layout was requested for a control without segments
    #[error("segment control has no content to lay out")]
    EmptyContent,
}

/// Opaque image handle; the engine only needs its intrinsic size
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    pub name: String,
    pub size: Size,
}

impl IconImage {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            size: Size::new(width, height),
        }
    }

    /// Copy of this handle with a different display size
    pub fn with_size(&self, size: Size) -> Self {
        Self {
            name: self.name.clone(),
            size,
        }
    }
}

/// Kind of content, without the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Text,
    Icon,
    Hybrid,
    HybridVertical,
}

impl ContentKind {
    pub fn from_str(kind: &str) -> Option<Self> {
        match kind.to_lowercase().as_str() {
            "text" => Some(ContentKind::Text),
            "icon" => Some(ContentKind::Icon),
            "hybrid" => Some(ContentKind::Hybrid),
            "hybrid_vertical" | "hybridvertical" => Some(ContentKind::HybridVertical),
            _ => None,
        }
    }
}

/// What the segments display
#[derive(Debug, Clone, PartialEq)]
pub enum ContentSpec {
    TextOnly(Vec<String>),
    IconOnly(Vec<IconImage>),
    /// Icon left of the label
    Hybrid { labels: Vec<String>, icons: Vec<IconImage> },
    /// Icon above the label
    HybridVertical { labels: Vec<String>, icons: Vec<IconImage> },
}

impl Default for ContentSpec {
    fn default() -> Self {
        ContentSpec::TextOnly(Vec::new())
    }
}

impl ContentSpec {
    pub fn text<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ContentSpec::TextOnly(labels.into_iter().map(Into::into).collect())
    }

    /// Check pairing and truncate every sequence to `MAX_SEGMENTS`
    pub fn validated(self) -> Result<Self, ContentError> {
        let spec = match self {
            ContentSpec::TextOnly(mut labels) => {
                labels.truncate(MAX_SEGMENTS);
                ContentSpec::TextOnly(labels)
            }
            ContentSpec::IconOnly(mut icons) => {
                icons.truncate(MAX_SEGMENTS);
                ContentSpec::IconOnly(icons)
            }
            ContentSpec::Hybrid { labels, icons } => {
                let (labels, icons) = paired(labels, icons)?;
                ContentSpec::Hybrid { labels, icons }
            }
            ContentSpec::HybridVertical { labels, icons } => {
                let (labels, icons) = paired(labels, icons)?;
                ContentSpec::HybridVertical { labels, icons }
            }
        };
        Ok(spec)
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        match self {
            ContentSpec::TextOnly(labels) => labels.len(),
            ContentSpec::IconOnly(icons) => icons.len(),
            ContentSpec::Hybrid { labels, .. } | ContentSpec::HybridVertical { labels, .. } => labels.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            ContentSpec::TextOnly(_) => ContentKind::Text,
            ContentSpec::IconOnly(_) => ContentKind::Icon,
            ContentSpec::Hybrid { .. } => ContentKind::Hybrid,
            ContentSpec::HybridVertical { .. } => ContentKind::HybridVertical,
        }
    }

    /// Label of segment `index`, if this content has labels
    pub fn label(&self, index: usize) -> Option<&str> {
        match self {
            ContentSpec::TextOnly(labels)
            | ContentSpec::Hybrid { labels, .. }
            | ContentSpec::HybridVertical { labels, .. } => labels.get(index).map(String::as_str),
            ContentSpec::IconOnly(_) => None,
        }
    }

    /// Icon of segment `index`, if this content has icons
    pub fn icon(&self, index: usize) -> Option<&IconImage> {
        match self {
            ContentSpec::IconOnly(icons)
            | ContentSpec::Hybrid { icons, .. }
            | ContentSpec::HybridVertical { icons, .. } => icons.get(index),
            ContentSpec::TextOnly(_) => None,
        }
    }
}

fn paired(
    mut labels: Vec<String>,
    mut icons: Vec<IconImage>,
) -> Result<(Vec<String>, Vec<IconImage>), ContentError> {
    if labels.len() != icons.len() {
        return Err(ContentError::MismatchedContent {
            labels: labels.len(),
            icons: icons.len(),
        });
    }
    labels.truncate(MAX_SEGMENTS);
    icons.truncate(MAX_SEGMENTS);
    Ok((labels, icons))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icons(n: usize) -> Vec<IconImage> {
        (0..n).map(|i| IconImage::new(format!("icon{i}"), 20.0, 20.0)).collect()
    }

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("L{i}")).collect()
    }

    #[test]
    fn test_text_truncated_to_first_six_in_order() {
        let spec = ContentSpec::text(["a", "b", "c", "d", "e", "f", "g", "h"]).validated().unwrap();
        assert_eq!(spec, ContentSpec::text(["a", "b", "c", "d", "e", "f"]));
    }

    #[test]
    fn test_icons_truncated() {
        let spec = ContentSpec::IconOnly(icons(9)).validated().unwrap();
        assert_eq!(spec.len(), MAX_SEGMENTS);
        assert_eq!(spec.icon(5).unwrap().name, "icon5");
        assert!(spec.icon(6).is_none());
    }

    #[test]
    fn test_hybrid_mismatch_rejected() {
        let err = ContentSpec::Hybrid { labels: labels(3), icons: icons(2) }
            .validated()
            .unwrap_err();
        assert_eq!(err, ContentError::MismatchedContent { labels: 3, icons: 2 });

        let err = ContentSpec::HybridVertical { labels: labels(1), icons: icons(4) }
            .validated()
            .unwrap_err();
        assert_eq!(err, ContentError::MismatchedContent { labels: 1, icons: 4 });
    }

    #[test]
    fn test_hybrid_equal_lengths_truncated_together() {
        let spec = ContentSpec::Hybrid { labels: labels(7), icons: icons(7) }.validated().unwrap();
        assert_eq!(spec.len(), 6);
        assert_eq!(spec.label(5), Some("L5"));
        assert_eq!(spec.icon(5).unwrap().name, "icon5");
    }

    #[test]
    fn test_accessors_by_kind() {
        let text = ContentSpec::text(["One"]);
        assert_eq!(text.kind(), ContentKind::Text);
        assert_eq!(text.label(0), Some("One"));
        assert!(text.icon(0).is_none());

        let icon = ContentSpec::IconOnly(icons(1));
        assert_eq!(icon.kind(), ContentKind::Icon);
        assert!(icon.label(0).is_none());

        let vertical = ContentSpec::HybridVertical { labels: labels(2), icons: icons(2) };
        assert_eq!(vertical.kind(), ContentKind::HybridVertical);
        assert_eq!(vertical.len(), 2);
    }

    #[test]
    fn test_empty_content_is_accepted() {
        let spec = ContentSpec::default().validated().unwrap();
        assert!(spec.is_empty());
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(ContentKind::from_str("Text"), Some(ContentKind::Text));
        assert_eq!(ContentKind::from_str("hybrid_vertical"), Some(ContentKind::HybridVertical));
        assert_eq!(ContentKind::from_str("sideways"), None);
    }
}
