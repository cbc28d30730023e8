use carousel_model::{SlideKey, SlideSet};
use serde::{Deserialize, Serialize};

use crate::window::WindowEntry;

/// Navigation state handed to renderers after every mutating operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Slide currently shown.
    pub current_index: usize,
    /// Effective (clamped) radius the window was built with.
    pub offset_radius: usize,
    /// See [`crate::window::presentable_window`].
    pub window: Vec<WindowEntry>,
    /// Normalized destination of an in-flight go-to.
    pub pending_target: Option<usize>,
}

impl Snapshot {
    /// Whether no go-to is in flight.
    pub fn is_settled(&self) -> bool {
        self.pending_target.is_none()
    }

    /// Slide indices of the window, in display order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.window.iter().map(|entry| entry.slide_index)
    }

    /// Resolve the window to slide keys, in display order.
    pub fn keys<'a, T>(&self, slides: &'a SlideSet<T>) -> Vec<&'a SlideKey> {
        self.window
            .iter()
            .filter_map(|entry| slides.key(entry.slide_index))
            .collect()
    }
}
