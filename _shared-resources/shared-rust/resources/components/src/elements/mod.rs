// GUI Elements module
// Visual components that render segment controls

pub mod highlight_animation;
pub mod segment_bar;

pub use highlight_animation::*;
pub use segment_bar::*;
