//! Navigation core for circular carousels.
//!
//! The crate is layered bottom-up:
//! - [`ring`]: modular index arithmetic and shortest-arc resolution,
//! - [`window`]: which neighbours are presentable around the current slide,
//! - [`goto`]: the pure go-to state machine,
//! - [`controller`]: slides + state machine + hop timer tokens,
//! - [`runtime`]: a tokio actor that owns a controller and drives its timer.

pub mod controller;
pub mod error;
pub mod goto;
pub mod renderer;
pub mod ring;
pub mod runtime;
pub mod snapshot;
pub mod window;

pub use carousel_model as model;

pub use controller::{
    CarouselController, CarouselOptions, GOTO_INTERVAL, HopToken, ScheduledHop,
    TimerAction, Transition,
};
pub use error::{CarouselError, Result};
pub use goto::{GotoEvent, GotoMachine, GotoPhase, Hop, HopEffect};
pub use renderer::{NoopRenderer, RecordingRenderer, SlideRenderer};
pub use ring::{
    HopPath, hop_path, hops, neighbour, shift, shortest_direction, wrap,
    wrap_index,
};
pub use runtime::{CarouselHandle, spawn_carousel};
pub use snapshot::Snapshot;
pub use window::{
    DEFAULT_OFFSET_RADIUS, WindowEntry, clamp_offset_radius, presentable_window,
};
