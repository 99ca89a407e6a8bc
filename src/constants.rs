// Application constants

/// Point width of one terminal column in the segment layout space
pub const POINTS_PER_COLUMN: f64 = 10.0;

/// Point height of the segment control regardless of its row count
pub const CONTROL_POINTS_HEIGHT: f64 = 44.0;

/// Number of notifications kept for the status line
pub const NOTIFICATION_HISTORY: usize = 8;
