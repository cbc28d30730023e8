//! Presentable window: which slides sit around the current one.

use serde::{Deserialize, Serialize};

use crate::ring::shift;

/// Default number of neighbours shown on each side of the current slide.
pub const DEFAULT_OFFSET_RADIUS: i64 = 2;

/// One presentable slide and where it sits relative to the current slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowEntry {
    /// Index into the slide set.
    pub slide_index: usize,
    /// Signed distance from the current slide; 0 is the current slide itself.
    pub display_offset: i64,
}

/// Clamp a requested radius to `0..=(len - 1) / 2`.
///
/// The upper bound keeps a slide from showing up on both sides of the window
/// when the set is small. Anything that needs the effective radius must use
/// this so the window and its consumers agree.
pub fn clamp_offset_radius(radius: i64, len: usize) -> usize {
    let upper_bound = len.saturating_sub(1) / 2;
    if radius < 0 {
        return 0;
    }
    (radius as u64).min(upper_bound as u64) as usize
}

/// Slides around `current`, ordered from the furthest left to the furthest
/// right neighbour.
pub fn presentable_window(
    current: usize,
    radius: i64,
    len: usize,
) -> Vec<WindowEntry> {
    let radius = clamp_offset_radius(radius, len) as i64;

    (-radius..=radius)
        .map(|offset| WindowEntry {
            slide_index: shift(current, offset, len),
            display_offset: offset,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp_offset_radius(-3, 10), 0);
        assert_eq!(clamp_offset_radius(2, 10), 2);
        assert_eq!(clamp_offset_radius(9, 10), 4);
        assert_eq!(clamp_offset_radius(2, 4), 1);
        assert_eq!(clamp_offset_radius(2, 2), 0);
        assert_eq!(clamp_offset_radius(5, 1), 0);
        assert_eq!(clamp_offset_radius(i64::MAX, 7), 3);
    }

    #[test]
    fn window_is_centered_and_ordered() {
        let window = presentable_window(0, 2, 6);
        let indices: Vec<usize> = window.iter().map(|e| e.slide_index).collect();
        let offsets: Vec<i64> = window.iter().map(|e| e.display_offset).collect();
        assert_eq!(indices, [4, 5, 0, 1, 2]);
        assert_eq!(offsets, [-2, -1, 0, 1, 2]);
    }

    #[test]
    fn window_wraps_on_a_huge_ring() {
        let indices: Vec<usize> = presentable_window(0, 2, usize::MAX)
            .iter()
            .map(|e| e.slide_index)
            .collect();
        assert_eq!(indices, [usize::MAX - 2, usize::MAX - 1, 0, 1, 2]);
    }

    #[test]
    fn window_never_repeats_an_index() {
        for len in 1..=9usize {
            for radius in -2i64..=10 {
                for current in 0..len {
                    let window = presentable_window(current, radius, len);
                    let clamped = clamp_offset_radius(radius, len);
                    assert_eq!(window.len(), 2 * clamped + 1);

                    let unique: HashSet<usize> =
                        window.iter().map(|e| e.slide_index).collect();
                    assert_eq!(unique.len(), window.len());
                    assert!(window.iter().all(|e| e.slide_index < len));
                    assert_eq!(window[clamped].slide_index, current);
                }
            }
        }
    }

    #[test]
    fn single_slide_window() {
        assert_eq!(
            presentable_window(0, 2, 1),
            vec![WindowEntry {
                slide_index: 0,
                display_offset: 0
            }]
        );
    }
}
