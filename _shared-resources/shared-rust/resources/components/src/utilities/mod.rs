// Utilities module
// Layout arithmetic and quality of life helpers

pub mod helpers;
pub mod image_fit;
pub mod layout_calculator;

pub use helpers::*;
pub use image_fit::{fit_bound, fit_icon, fit_size};
pub use layout_calculator::{
    compute_layout, Arrangement, DistributionPolicy, HighlightRect, HighlightStyle, LayoutCalculator,
    LayoutConfig, SegmentLayout, SegmentSlot,
};
