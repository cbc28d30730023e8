//! The carousel controller: owns the slides, the go-to machine and the single
//! outstanding hop timer token.
//!
//! The controller is synchronous and runtime-agnostic. Each entry point
//! mutates state, then returns a [`Transition`] carrying the new snapshot and
//! the instruction for the hop timer. Whoever owns the controller (the tokio
//! actor in [`crate::runtime`], a UI event loop, a test) arms the timer and
//! later calls [`CarouselController::fire_hop`] with the token it was given.
//! Tokens are generation-stamped, so a fire that lost a race against a newer
//! request is dropped instead of hopping twice.

use std::time::Duration;

use carousel_model::{SlideSet, Step};
use tracing::{debug, trace};

use crate::goto::{GotoEvent, GotoMachine, GotoPhase, HopEffect};
use crate::snapshot::Snapshot;
use crate::window::{
    DEFAULT_OFFSET_RADIUS, clamp_offset_radius, presentable_window,
};

/// Delay between two hops of an animated go-to.
pub const GOTO_INTERVAL: Duration = Duration::from_millis(200);

/// Tunables for a controller instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselOptions {
    /// Requested neighbours per side; clamped against the slide count on use.
    pub offset_radius: i64,
    /// Delay between two go-to hops.
    pub goto_interval: Duration,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            offset_radius: DEFAULT_OFFSET_RADIUS,
            goto_interval: GOTO_INTERVAL,
        }
    }
}

/// Identifies one scheduled hop. Only the most recently issued token is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HopToken(u64);

impl HopToken {
    /// Monotonic counter value; later tokens supersede earlier ones.
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// A hop the owner must run after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledHop {
    /// Hand back to [`CarouselController::fire_hop`] when the delay elapses.
    pub token: HopToken,
    pub delay: Duration,
}

/// Instruction for the owner's hop timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Keep whatever timer is outstanding.
    Unchanged,
    /// Drop any outstanding timer and arm this one.
    Schedule(ScheduledHop),
    /// Drop the outstanding timer.
    Cancel,
}

/// Outcome of a controller entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State right after the entry point ran.
    pub snapshot: Snapshot,
    pub timer: TimerAction,
}

/// Owns a slide set and its navigation state.
///
/// The controller is synchronous and clock-free: every entry point mutates
/// state, then tells the caller what to do with the hop timer through
/// [`Transition::timer`]. [`crate::runtime`] wires that up on tokio.
#[derive(Debug)]
pub struct CarouselController<T> {
    slides: SlideSet<T>,
    machine: GotoMachine,
    options: CarouselOptions,
    outstanding: Option<HopToken>,
    next_generation: u64,
    shut_down: bool,
}

impl<T> CarouselController<T> {
    /// Start at slide 0 with no pending go-to.
    pub fn new(slides: SlideSet<T>, options: CarouselOptions) -> Self {
        Self {
            slides,
            machine: GotoMachine::new(),
            options,
            outstanding: None,
            next_generation: 0,
            shut_down: false,
        }
    }

    /// [`CarouselController::new`] with [`CarouselOptions::default`].
    pub fn with_defaults(slides: SlideSet<T>) -> Self {
        Self::new(slides, CarouselOptions::default())
    }

    /// Slides being navigated.
    pub fn slides(&self) -> &SlideSet<T> {
        &self.slides
    }

    /// Index of the slide currently shown, always in `0..slides().len()`.
    pub fn current_index(&self) -> usize {
        self.machine.current()
    }

    /// Normalized go-to destination, if one is in flight.
    pub fn pending_target(&self) -> Option<usize> {
        self.machine.pending_target()
    }

    /// Where the go-to state machine currently is.
    pub fn phase(&self) -> GotoPhase {
        self.machine.phase()
    }

    /// Effective radius, after clamping against the slide count.
    pub fn offset_radius(&self) -> usize {
        clamp_offset_radius(self.options.offset_radius, self.slides.len())
    }

    /// Delay applied to every scheduled hop.
    pub fn goto_interval(&self) -> Duration {
        self.options.goto_interval
    }

    /// Options as configured, radius unclamped.
    pub fn options(&self) -> CarouselOptions {
        self.options
    }

    /// Token of the hop currently waiting on the timer, if any.
    pub fn outstanding_hop(&self) -> Option<HopToken> {
        self.outstanding
    }

    /// Whether [`CarouselController::shutdown`] ran.
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Renderer-facing view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        let current = self.machine.current();
        Snapshot {
            current_index: current,
            offset_radius: self.offset_radius(),
            window: presentable_window(
                current,
                self.options.offset_radius,
                self.slides.len(),
            ),
            pending_target: self.machine.pending_target(),
        }
    }

    /// Feed the external target signal for this update cycle.
    ///
    /// Only a value different from the previously observed one starts (or
    /// withdraws) a go-to; repeating the same value is a no-op.
    pub fn observe_target(&mut self, target: Option<i64>) -> Transition {
        self.dispatch(GotoEvent::ObserveTarget(target))
    }

    /// Move one slide back or forward, abandoning any in-flight go-to.
    pub fn move_slide(&mut self, step: Step) -> Transition {
        self.dispatch(GotoEvent::Move(step))
    }

    /// Run the hop scheduled under `token`.
    ///
    /// Superseded tokens, and every token after shutdown, are ignored.
    pub fn fire_hop(&mut self, token: HopToken) -> Transition {
        if self.shut_down || self.outstanding != Some(token) {
            trace!(
                generation = token.generation(),
                shut_down = self.shut_down,
                "dropping stale hop"
            );
            return self.unchanged();
        }

        self.outstanding = None;
        self.dispatch(GotoEvent::HopTimerFired)
    }

    /// Swap in a new slide set. The current index is wrapped into the new
    /// range and any in-flight go-to is dropped.
    pub fn replace_slides(&mut self, slides: SlideSet<T>) -> Transition {
        if self.shut_down {
            return self.unchanged();
        }

        debug!(
            previous_len = self.slides.len(),
            len = slides.len(),
            "replacing slides"
        );
        self.slides = slides;
        self.dispatch(GotoEvent::Reset {
            len: self.slides.len(),
        })
    }

    /// Change the requested window radius. The timer is left alone.
    pub fn set_offset_radius(&mut self, radius: i64) -> Transition {
        if !self.shut_down {
            self.options.offset_radius = radius;
        }
        self.unchanged()
    }

    /// Tear the controller down. Returns the hop token that was still
    /// outstanding so the owner can cancel its timer.
    pub fn shutdown(&mut self) -> Option<HopToken> {
        self.shut_down = true;
        let outstanding = self.outstanding.take();
        debug!(
            current = self.machine.current(),
            cancelled_hop = outstanding.map(|token| token.generation()),
            "carousel controller shut down"
        );
        outstanding
    }

    fn dispatch(&mut self, event: GotoEvent) -> Transition {
        if self.shut_down {
            return self.unchanged();
        }

        let effect = self.machine.step(event, self.slides.len());
        let timer = self.apply(effect);
        Transition {
            snapshot: self.snapshot(),
            timer,
        }
    }

    fn apply(&mut self, effect: HopEffect) -> TimerAction {
        match effect {
            HopEffect::None => TimerAction::Unchanged,
            HopEffect::Schedule => {
                self.next_generation += 1;
                let token = HopToken(self.next_generation);
                self.outstanding = Some(token);
                TimerAction::Schedule(ScheduledHop {
                    token,
                    delay: self.options.goto_interval,
                })
            }
            HopEffect::Cancel => match self.outstanding.take() {
                Some(_) => TimerAction::Cancel,
                None => TimerAction::Unchanged,
            },
        }
    }

    fn unchanged(&self) -> Transition {
        Transition {
            snapshot: self.snapshot(),
            timer: TimerAction::Unchanged,
        }
    }
}
