//! Navigation behaviour through the public controller API, without a runtime.

use carousel_core::model::{Direction, SlideSet, Step};
use carousel_core::{
    CarouselController, GotoPhase, TimerAction, presentable_window,
    shortest_direction, wrap,
};

fn controller(len: usize) -> CarouselController<()> {
    let keys = (0..len).map(|i| format!("slide-{i}"));
    CarouselController::with_defaults(SlideSet::from_keys(keys).unwrap())
}

/// Fire every scheduled hop immediately, as if the timer elapsed each time.
fn settle(carousel: &mut CarouselController<()>, mut timer: TimerAction) -> Vec<usize> {
    let mut visited = Vec::new();
    while let TimerAction::Schedule(hop) = timer {
        let transition = carousel.fire_hop(hop.token);
        visited.push(transition.snapshot.current_index);
        timer = transition.timer;
    }
    visited
}

#[test]
fn wrap_covers_negative_and_large_values() {
    for len in 1..=12usize {
        for value in [-1_000i64, -13, -1, 0, 1, 11, 12, 1_000] {
            assert!(wrap(value, len) < len);
        }
    }
}

#[test]
fn shortest_direction_examples() {
    assert_eq!(shortest_direction(5, 1, 6), Direction::Forward);
    assert_eq!(shortest_direction(0, 2, 4), Direction::Forward);
    assert_eq!(shortest_direction(0, 0, 1), Direction::Stay);
}

#[test]
fn goto_on_six_slides_walks_forward_on_tie() {
    let mut carousel = controller(6);
    let transition = carousel.observe_target(Some(3));

    let mut visited = vec![0, transition.snapshot.current_index];
    visited.extend(settle(&mut carousel, transition.timer));

    assert_eq!(visited, [0, 1, 2, 3]);
    assert_eq!(carousel.pending_target(), None);
    assert_eq!(carousel.phase(), GotoPhase::Idle);
}

#[test]
fn out_of_range_target_is_normalized() {
    let mut carousel = controller(5);
    let transition = carousel.observe_target(Some(-8));
    // -8 wraps to 2
    assert_eq!(transition.snapshot.pending_target, Some(2));

    let visited = settle(&mut carousel, transition.timer);
    assert_eq!(visited, [2]);
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn snapshot_window_matches_presentable_window() {
    let mut carousel = controller(7);
    carousel.move_slide(Step::Previous);
    let snapshot = carousel.snapshot();

    assert_eq!(snapshot.current_index, 6);
    assert_eq!(snapshot.window, presentable_window(6, 2, 7));
    assert_eq!(snapshot.indices().collect::<Vec<_>>(), [4, 5, 6, 0, 1]);

    let keys: Vec<String> = snapshot
        .keys(carousel.slides())
        .into_iter()
        .map(|key| key.to_string())
        .collect();
    assert_eq!(keys, ["slide-4", "slide-5", "slide-6", "slide-0", "slide-1"]);
}

#[test]
fn single_slide_carousel_never_moves() {
    let mut carousel = controller(1);
    carousel.move_slide(Step::Next);
    carousel.move_slide(Step::Previous);
    let transition = carousel.observe_target(Some(4));

    assert_eq!(transition.timer, TimerAction::Unchanged);
    assert_eq!(transition.snapshot.current_index, 0);
    assert_eq!(transition.snapshot.window.len(), 1);
}

#[test]
fn snapshot_serializes_for_renderers() {
    let carousel = controller(3);
    let json = serde_json::to_value(carousel.snapshot()).unwrap();

    assert_eq!(json["current_index"], 0);
    assert_eq!(json["offset_radius"], 1);
    assert_eq!(json["window"][0]["slide_index"], 2);
    assert_eq!(json["window"][0]["display_offset"], -1);
    assert!(json["pending_target"].is_null());
}
