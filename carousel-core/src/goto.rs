//! Go-to state machine.
//!
//! Jumping to an arbitrary slide is animated: the carousel walks the shortest
//! arc one hop at a time. The first hop happens as soon as a new target is
//! observed; every following hop waits for the hop timer. The machine itself
//! never touches a clock. [`GotoMachine::step`] applies an event and reports
//! what the timer should do next, leaving the actual scheduling to the owner.

use carousel_model::{Direction, Step};
use tracing::debug;

use crate::ring::{neighbour, shortest_direction, wrap, wrap_index};

/// Where the machine is in a go-to sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GotoPhase {
    /// No pending target.
    Idle,
    /// A new target was just observed; the next settle hops without waiting.
    Arrived,
    /// Mid-sequence, waiting for the hop timer.
    InProgress,
}

/// Stimuli the machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GotoEvent {
    /// The externally supplied target as seen in this update cycle.
    ObserveTarget(Option<i64>),
    /// A previous/next request.
    Move(Step),
    /// The hop timer elapsed.
    HopTimerFired,
    /// The slide set was replaced with one of `len` slides.
    Reset { len: usize },
}

/// What the owner must do with the hop timer after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HopEffect {
    /// Leave any outstanding timer alone.
    None,
    /// Cancel any outstanding timer and arm a new one.
    Schedule,
    /// Cancel any outstanding timer.
    Cancel,
}

/// Result of a single hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hop {
    /// Index before the hop.
    pub from: usize,
    /// Index after the hop.
    pub to: usize,
    /// Never [`Direction::Stay`]; a hop always moves.
    pub direction: Direction,
    /// Whether `to` is the go-to destination.
    pub arrived: bool,
}

/// Current index plus the bookkeeping of an in-flight go-to.
///
/// Starts at slide 0, idle, with no target observed yet. Slide 0 as the first
/// observed target therefore counts as a change.
#[derive(Debug, Clone, Default)]
pub struct GotoMachine {
    current: usize,
    pending_target: Option<usize>,
    fresh: bool,
    last_observed: Option<i64>,
}

impl GotoMachine {
    /// Machine at slide 0 with no target observed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the current slide.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Normalized pending destination, if a go-to is underway.
    pub fn pending_target(&self) -> Option<usize> {
        self.pending_target
    }

    /// Raw external target value from the last update cycle that changed it.
    pub fn last_observed(&self) -> Option<i64> {
        self.last_observed
    }

    /// Derived from the pending target and whether it was observed in the
    /// current step.
    pub fn phase(&self) -> GotoPhase {
        match (self.pending_target, self.fresh) {
            (None, _) => GotoPhase::Idle,
            (Some(_), true) => GotoPhase::Arrived,
            (Some(_), false) => GotoPhase::InProgress,
        }
    }

    /// Apply `event` against a ring of `len` slides and settle.
    pub fn step(&mut self, event: GotoEvent, len: usize) -> HopEffect {
        match event {
            GotoEvent::ObserveTarget(target) => {
                if target == self.last_observed {
                    return HopEffect::None;
                }
                self.last_observed = target;
                match target {
                    Some(raw) => {
                        let normalized = wrap(raw, len);
                        debug!(
                            target = raw,
                            normalized,
                            current = self.current,
                            "go-to target observed"
                        );
                        self.pending_target = Some(normalized);
                        self.fresh = true;
                    }
                    None => {
                        debug!(current = self.current, "go-to target withdrawn");
                        self.clear_target();
                    }
                }
            }
            GotoEvent::Move(step) => {
                let from = self.current;
                self.current = neighbour(from, step.direction(), len);
                debug!(from, to = self.current, ?step, "relative move");
                self.clear_target();
            }
            GotoEvent::HopTimerFired => {
                self.hop(len);
            }
            GotoEvent::Reset { len } => {
                self.current = wrap_index(self.current, len);
                self.clear_target();
            }
        }

        self.settle(len)
    }

    /// Move one step toward the pending target.
    ///
    /// Returns `None` when there is nothing to do: no target, or the target is
    /// already the current slide (the go-to is then considered satisfied).
    pub fn hop(&mut self, len: usize) -> Option<Hop> {
        let target = wrap_index(self.pending_target?, len);

        if target == self.current {
            self.clear_target();
            return None;
        }

        let from = self.current;
        let direction = shortest_direction(from, target, len);
        let to = neighbour(from, direction, len);
        let arrived = to == target;

        self.current = to;
        if arrived {
            self.clear_target();
        } else {
            self.pending_target = Some(target);
            self.fresh = false;
        }

        debug!(from, to, %direction, target, arrived, "go-to hop");
        Some(Hop {
            from,
            to,
            direction,
            arrived,
        })
    }

    fn settle(&mut self, len: usize) -> HopEffect {
        loop {
            match self.pending_target {
                None => return HopEffect::Cancel,
                Some(_) if self.fresh => {
                    // A fresh hop either arrives or clears `fresh`, so this
                    // runs at most once per settle.
                    self.hop(len);
                }
                Some(target) if target != self.current => {
                    return HopEffect::Schedule;
                }
                Some(_) => {
                    self.clear_target();
                    return HopEffect::Cancel;
                }
            }
        }
    }

    fn clear_target(&mut self) {
        self.pending_target = None;
        self.fresh = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(machine: &mut GotoMachine, len: usize) -> Vec<usize> {
        let mut visited = vec![machine.current()];
        let mut guard = 0;
        while machine.pending_target().is_some() {
            machine.step(GotoEvent::HopTimerFired, len);
            visited.push(machine.current());
            guard += 1;
            assert!(guard <= len, "go-to did not converge");
        }
        visited
    }

    #[test]
    fn new_target_hops_immediately_then_schedules() {
        let mut machine = GotoMachine::new();
        let effect = machine.step(GotoEvent::ObserveTarget(Some(3)), 6);

        assert_eq!(effect, HopEffect::Schedule);
        assert_eq!(machine.current(), 1);
        assert_eq!(machine.pending_target(), Some(3));
        assert_eq!(machine.phase(), GotoPhase::InProgress);
    }

    #[test]
    fn tie_goes_forward_and_terminates_after_three_hops() {
        let mut machine = GotoMachine::new();
        machine.step(GotoEvent::ObserveTarget(Some(3)), 6);
        let mut visited = vec![0];
        visited.extend(run_to_completion(&mut machine, 6));

        assert_eq!(visited, [0, 1, 2, 3]);
        assert_eq!(machine.phase(), GotoPhase::Idle);
    }

    #[test]
    fn adjacent_target_arrives_without_scheduling() {
        let mut machine = GotoMachine::new();
        let effect = machine.step(GotoEvent::ObserveTarget(Some(-1)), 5);

        assert_eq!(effect, HopEffect::Cancel);
        assert_eq!(machine.current(), 4);
        assert_eq!(machine.pending_target(), None);
    }

    #[test]
    fn nothing_is_observed_before_the_first_target() {
        let mut machine = GotoMachine::new();
        assert_eq!(machine.last_observed(), None);

        for _ in 0..3 {
            machine.step(GotoEvent::Move(Step::Next), 6);
        }
        assert_eq!(machine.current(), 3);

        // slide 0 as the very first target is a real request
        let effect = machine.step(GotoEvent::ObserveTarget(Some(0)), 6);
        assert_eq!(effect, HopEffect::Schedule);
        assert_eq!(machine.current(), 4);
        assert_eq!(machine.pending_target(), Some(0));
        assert_eq!(machine.last_observed(), Some(0));
        assert_eq!(run_to_completion(&mut machine, 6), [4, 5, 0]);
    }

    #[test]
    fn unchanged_observation_is_ignored() {
        let mut machine = GotoMachine::new();
        machine.step(GotoEvent::ObserveTarget(Some(3)), 6);
        let effect = machine.step(GotoEvent::ObserveTarget(Some(3)), 6);

        assert_eq!(effect, HopEffect::None);
        assert_eq!(machine.current(), 1);
    }

    #[test]
    fn target_equal_to_current_is_satisfied() {
        let mut machine = GotoMachine::new();
        let effect = machine.step(GotoEvent::ObserveTarget(Some(12)), 6);

        assert_eq!(effect, HopEffect::Cancel);
        assert_eq!(machine.current(), 0);
        assert_eq!(machine.phase(), GotoPhase::Idle);
    }

    #[test]
    fn relative_move_overrides_goto() {
        let mut machine = GotoMachine::new();
        machine.step(GotoEvent::ObserveTarget(Some(3)), 6);
        let effect = machine.step(GotoEvent::Move(Step::Previous), 6);

        assert_eq!(effect, HopEffect::Cancel);
        assert_eq!(machine.current(), 0);
        assert_eq!(machine.pending_target(), None);

        // a stray timer after the move changes nothing
        machine.step(GotoEvent::HopTimerFired, 6);
        assert_eq!(machine.current(), 0);
    }

    #[test]
    fn new_target_mid_sequence_restarts_from_current() {
        let mut machine = GotoMachine::new();
        machine.step(GotoEvent::ObserveTarget(Some(3)), 8);
        machine.step(GotoEvent::HopTimerFired, 8);
        assert_eq!(machine.current(), 2);

        let effect = machine.step(GotoEvent::ObserveTarget(Some(7)), 8);
        assert_eq!(effect, HopEffect::Schedule);
        assert_eq!(machine.current(), 1);
        assert_eq!(machine.pending_target(), Some(7));

        let visited = run_to_completion(&mut machine, 8);
        assert_eq!(visited, [1, 0, 7]);
    }

    #[test]
    fn withdrawn_target_stops_sequence() {
        let mut machine = GotoMachine::new();
        machine.step(GotoEvent::ObserveTarget(Some(4)), 10);
        let effect = machine.step(GotoEvent::ObserveTarget(None), 10);

        assert_eq!(effect, HopEffect::Cancel);
        assert_eq!(machine.current(), 1);
        assert_eq!(machine.phase(), GotoPhase::Idle);
    }

    #[test]
    fn reset_rewraps_and_clears() {
        let mut machine = GotoMachine::new();
        machine.step(GotoEvent::ObserveTarget(Some(5)), 10);
        machine.step(GotoEvent::HopTimerFired, 10);
        machine.step(GotoEvent::HopTimerFired, 10);
        machine.step(GotoEvent::HopTimerFired, 10);
        assert_eq!(machine.current(), 4);

        let effect = machine.step(GotoEvent::Reset { len: 3 }, 3);
        assert_eq!(effect, HopEffect::Cancel);
        assert_eq!(machine.current(), 1);
        assert_eq!(machine.pending_target(), None);
    }

    #[test]
    fn single_slide_is_inert() {
        let mut machine = GotoMachine::new();
        machine.step(GotoEvent::Move(Step::Next), 1);
        assert_eq!(machine.current(), 0);
        let effect = machine.step(GotoEvent::ObserveTarget(Some(7)), 1);
        assert_eq!(effect, HopEffect::Cancel);
        assert_eq!(machine.current(), 0);
    }
}
