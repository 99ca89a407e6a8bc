// Core data model
// Geometry, content, selection and appearance types the other modules build on

pub mod appearance;
pub mod content;
pub mod geometry;
pub mod selection;

pub use appearance::{Appearance, FontSpec};
pub use content::{ContentError, ContentKind, ContentSpec, IconImage, MAX_SEGMENTS};
pub use geometry::{SegmentRect, Size};
pub use selection::{Emphasis, SelectionChanged, SelectionError, SelectionListener, SelectionState};
