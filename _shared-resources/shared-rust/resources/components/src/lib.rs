// Shared segmented control components
// Layout engine, selection state and terminal widgets for segment bars

// Core data model (geometry, content, selection, appearance)
pub mod core;
// GUI elements (visual components)
pub mod elements;
// OOP-style manager wrappers
pub mod managers;
// Utilities and helpers
pub mod utilities;

// Re-export commonly used items
pub use self::core::*;
pub use elements::*;
pub use managers::*;
pub use utilities::*;
