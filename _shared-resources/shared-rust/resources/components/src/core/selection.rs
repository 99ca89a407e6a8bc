// Selection State Machine
// Tracks the selected segment and validates activations

use thiserror::Error;

/// Activation rejected by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("segment index {index} out of range (control has {count} segments)")]
    OutOfRange { index: usize, count: usize },
    #[error("control has no segments to step through")]
    NoSegments,
}

/// Notification raised after every completed activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChanged(pub usize);

impl SelectionChanged {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Receives selection notifications from a segment control
pub trait SelectionListener {
    fn selection_changed(&mut self, event: SelectionChanged);
}

impl<F> SelectionListener for F
where
    F: FnMut(SelectionChanged),
{
    fn selection_changed(&mut self, event: SelectionChanged) {
        self(event)
    }
}

/// Per-segment tint emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Normal,
    Highlight,
}

/// Currently selected segment index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    selected: usize,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move the selection to `index`
    /// Selecting the current index again is still a completed activation
    pub fn activate(&mut self, index: usize, count: usize) -> Result<SelectionChanged, SelectionError> {
        if index >= count {
            return Err(SelectionError::OutOfRange { index, count });
        }
        self.selected = index;
        Ok(SelectionChanged(index))
    }

    /// Index one step away from the current selection, wrapping at both ends
    pub fn neighbor(&self, direction: i32, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        let current = self.selected.min(count - 1);
        let next = if direction < 0 {
            if current > 0 {
                current - 1
            } else {
                count - 1
            }
        } else {
            (current + 1) % count
        };
        Some(next)
    }

    /// Pull the selection back inside `[0, count)` after content shrank
    /// Returns true if the index changed
    pub fn clamp_to(&mut self, count: usize) -> bool {
        let limit = count.saturating_sub(1);
        if self.selected > limit {
            self.selected = limit;
            true
        } else {
            false
        }
    }

    /// Emphasis for every segment: the selected one is highlighted
    pub fn emphasis(&self, count: usize) -> Vec<Emphasis> {
        (0..count)
            .map(|i| if i == self.selected { Emphasis::Highlight } else { Emphasis::Normal })
            .collect()
    }
}
