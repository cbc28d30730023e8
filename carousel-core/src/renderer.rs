//! Seam towards whatever draws the slides.

use std::sync::Arc;

use carousel_model::SlideSet;
use parking_lot::Mutex;

use crate::snapshot::Snapshot;

/// Consumer of navigation snapshots.
///
/// Implementations own everything visual: positioning slides by their
/// display offset, easing between snapshots, and turning user gestures into
/// previous/next requests.
pub trait SlideRenderer<T>: Send {
    /// Draw `snapshot`. Called once at startup and after every operation,
    /// from the task that owns the controller.
    fn render(&mut self, slides: &SlideSet<T>, snapshot: &Snapshot);
}

/// Renderer that discards every snapshot.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderer;

impl<T> SlideRenderer<T> for NoopRenderer {
    fn render(&mut self, _slides: &SlideSet<T>, _snapshot: &Snapshot) {}
}

/// Renderer that keeps every snapshot it receives.
///
/// Clones share the same history, so one clone can be handed to a carousel
/// actor while another is inspected.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    history: Arc<Mutex<Vec<Snapshot>>>,
}

impl RecordingRenderer {
    /// Recorder with an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every snapshot received so far.
    pub fn history(&self) -> Vec<Snapshot> {
        self.history.lock().clone()
    }

    /// Current index of every recorded snapshot, oldest first.
    pub fn visited(&self) -> Vec<usize> {
        self.history
            .lock()
            .iter()
            .map(|snapshot| snapshot.current_index)
            .collect()
    }

    /// Number of snapshots recorded.
    pub fn len(&self) -> usize {
        self.history.lock().len()
    }

    /// Whether nothing was recorded yet.
    pub fn is_empty(&self) -> bool {
        self.history.lock().is_empty()
    }
}

impl<T> SlideRenderer<T> for RecordingRenderer {
    fn render(&mut self, _slides: &SlideSet<T>, snapshot: &Snapshot) {
        self.history.lock().push(snapshot.clone());
    }
}
