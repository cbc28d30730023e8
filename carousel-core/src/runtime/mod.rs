//! Tokio runtime for a carousel controller.
//!
//! A single actor task owns the controller, so every entry point runs to
//! completion before the next one starts, no matter how many handles are
//! sending. The actor also owns the one hop timer task that may exist at any
//! time.

mod actor;
mod handle;

pub use actor::spawn_carousel;
pub use handle::CarouselHandle;

use carousel_model::{SlideSet, Step};
use tokio::sync::oneshot;

use crate::snapshot::Snapshot;

/// Capacity of the actor's command mailbox.
pub const MAILBOX_CAPACITY: usize = 64;

#[derive(Debug)]
pub(crate) enum CarouselCommand<T> {
    Move {
        step: Step,
        reply: oneshot::Sender<Snapshot>,
    },
    SetTarget {
        target: Option<i64>,
        reply: oneshot::Sender<Snapshot>,
    },
    ReplaceSlides {
        slides: SlideSet<T>,
        reply: oneshot::Sender<Snapshot>,
    },
    SetOffsetRadius {
        radius: i64,
        reply: oneshot::Sender<Snapshot>,
    },
    Shutdown {
        reply: oneshot::Sender<Snapshot>,
    },
}
