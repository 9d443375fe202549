//! Board coordinates.

use std::fmt;
use std::hash::{Hash, Hasher};

/// An (x, y) coordinate on the board.
///
/// Carries no bounds invariant of its own: coordinates may be negative or
/// past the edge, and are validated against a concrete board size by
/// [`GoState::in_bounds`](crate::state::GoState::in_bounds). This lets
/// callers probe arbitrary candidates through `is_legal_move` without a
/// separate range check.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // 31*x + y; collisions only cost lookup speed, never correctness.
        state.write_i32(self.x.wrapping_mul(31).wrapping_add(self.y));
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
