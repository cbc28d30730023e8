//! Circular index arithmetic.
//!
//! Every index computation in the carousel goes through [`wrap`], so the
//! current index can never leave `0..len` regardless of how far a relative
//! move or an external target strays.

use carousel_model::Direction;

/// Reduce any integer onto the ring `0..len`.
///
/// `len` must be at least 1; slide sets guarantee this. The reduction is done
/// in `i128`, so every `i64` value and every `usize` length are accepted.
#[inline]
pub fn wrap(value: i64, len: usize) -> usize {
    wrap_wide(i128::from(value), len)
}

/// Reduce an index that may sit outside `0..len`, e.g. after the slide set
/// shrank.
#[inline]
pub fn wrap_index(index: usize, len: usize) -> usize {
    debug_assert!(len > 0, "ring length must be non-zero");
    index % len
}

fn wrap_wide(value: i128, len: usize) -> usize {
    debug_assert!(len > 0, "ring length must be non-zero");
    // 0 <= result < len <= usize::MAX
    value.rem_euclid(len as i128) as usize
}

/// Index `by` slides away from `index`, either way round.
#[inline]
pub fn shift(index: usize, by: i64, len: usize) -> usize {
    wrap_wide(index as i128 + i128::from(by), len)
}

/// Index one step away from `index` in `direction`.
#[inline]
pub fn neighbour(index: usize, direction: Direction, len: usize) -> usize {
    shift(index, direction.offset(), len)
}

/// Direction that reaches `to` from `from` in the fewest hops.
///
/// When both arcs are the same length the forward direction wins. That
/// tie-break decides which slides a go-to animation passes through, so it has
/// to stay stable.
pub fn shortest_direction(from: usize, to: usize, len: usize) -> Direction {
    if from == to {
        return Direction::Stay;
    }

    let forward = wrap_wide(to as i128 - from as i128, len);
    let backward = len - forward;

    if backward < forward {
        Direction::Backward
    } else {
        Direction::Forward
    }
}

/// Lazily yields every index visited when hopping from `from` to `target`,
/// both inclusive.
#[derive(Debug, Clone)]
pub struct HopPath {
    next: Option<usize>,
    target: usize,
    len: usize,
}

impl Iterator for HopPath {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.next?;
        self.next = (current != self.target).then(|| {
            let direction = shortest_direction(current, self.target, self.len);
            neighbour(current, direction, self.len)
        });
        Some(current)
    }
}

/// Walk from `from` to `target` one hop at a time. `target` may be any
/// integer; it is wrapped first.
pub fn hops(from: usize, target: i64, len: usize) -> HopPath {
    HopPath {
        next: Some(wrap_index(from, len)),
        target: wrap(target, len),
        len,
    }
}

/// Every index visited when hopping from `from` to `target`, both inclusive.
///
/// Collects [`hops`]; the path holds at most `len / 2 + 1` entries.
pub fn hop_path(from: usize, target: i64, len: usize) -> Vec<usize> {
    hops(from, target, len).collect()
}
