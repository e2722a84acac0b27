//! Capacity policy: the clamping, growth, and shrink rules.
//!
//! All rules are pure functions over `(len, capacity)` so they can be
//! tested in isolation; [`crate::vec::SeqVec`] applies them around its
//! reallocation primitive.

/// Capacity used when none is requested at construction.
pub const DEFAULT_CAPACITY: usize = 64;

/// Smallest capacity the container ever holds.
///
/// Construction requests below this are clamped up, and the shrink
/// policy never reduces capacity beneath it.
pub const MINIMUM_CAPACITY: usize = 8;

/// Clamp a requested construction capacity to the minimum floor.
pub(crate) fn clamp_request(requested: usize) -> usize {
    requested.max(MINIMUM_CAPACITY)
}

/// Capacity after one growth step.
///
/// Doubling keeps amortized append cost constant. Capacity is never
/// zero (see [`MINIMUM_CAPACITY`]), so the target always exceeds the
/// current capacity.
pub(crate) fn grow_target(capacity: usize) -> usize {
    capacity * 2
}

/// Whether occupancy has dropped low enough to shrink.
///
/// True when `len < capacity / 3` (integer division). The gap between
/// the one-third trigger and the one-half target prevents a
/// grow/shrink oscillation at the boundary.
pub(crate) fn should_shrink(len: usize, capacity: usize) -> bool {
    len < capacity / 3
}

/// Capacity after one shrink step, floored at [`MINIMUM_CAPACITY`].
pub(crate) fn shrink_target(capacity: usize) -> usize {
    let half = capacity / 2;
    if half > MINIMUM_CAPACITY {
        half
    } else {
        MINIMUM_CAPACITY
    }
}
