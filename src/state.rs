//! Go game state and rules.
//!
//! This module provides the core rules kernel:
//! - Board state as a flat `Vec<Space>` indexed `y * size + x`
//! - Breadth-first liberty/group search
//! - Capture resolution after stone placement
//! - Move legality (bounds, occupancy, suicide, positional superko)
//! - Pass handling and the repeated-position signal
//!
//! The state is single-owner and synchronous: every operation runs to
//! completion, and legality checking simulates moves on a scratch copy that
//! shares no mutable storage with the live state.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GoError, Result};
use crate::point::Point;
use crate::size::BoardSize;
use crate::stone::{Space, Stone};

/// Largest board side accepted by [`GoState::new`].
pub const MAX_SIDE: usize = 25;

/// A candidate move: placing a stone, or passing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Place(Point),
    Pass,
}

/// A history entry: board contents plus the color to move.
///
/// Snapshots are value-typed and never mutated once inserted into the
/// history set; hashing combines the deep grid hash with the turn, matching
/// [`GoState`] equality. Capture counts are deliberately excluded.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    pub(crate) size: usize,
    pub(crate) cells: Vec<Space>,
    pub(crate) turn: Stone,
}

/// A Go game state: board, capture tallies, turn, and position history.
#[derive(Clone, Debug)]
pub struct GoState {
    pub(crate) size: usize,
    pub(crate) cells: Vec<Space>,
    pub(crate) black_captures: u32,
    pub(crate) white_captures: u32,
    pub(crate) turn: Stone,
    pub(crate) history: HashSet<Snapshot>,
}

impl GoState {
    /// Create an empty board of the given side length, Black to move.
    ///
    /// # Errors
    /// Returns [`GoError::InvalidSide`] for a side of 0 or above
    /// [`MAX_SIDE`].
    pub fn new(side: usize) -> Result<GoState> {
        if side == 0 || side > MAX_SIDE {
            return Err(GoError::InvalidSide(side));
        }
        Ok(Self::empty(side))
    }

    /// Create an empty board for one of the conventional sizes.
    pub fn with_size(size: BoardSize) -> GoState {
        Self::empty(size.side())
    }

    fn empty(side: usize) -> GoState {
        GoState {
            size: side,
            cells: vec![Space::Empty; side * side],
            black_captures: 0,
            white_captures: 0,
            turn: Stone::Black,
            history: HashSet::new(),
        }
    }

    /// Side length of the square board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The color to move.
    pub fn turn(&self) -> Stone {
        self.turn
    }

    /// Stones captured by Black (white stones removed from the board).
    pub fn black_captures(&self) -> u32 {
        self.black_captures
    }

    /// Stones captured by White (black stones removed from the board).
    pub fn white_captures(&self) -> u32 {
        self.white_captures
    }

    /// Previously recorded positions, keyed by board contents and turn.
    pub fn history(&self) -> &HashSet<Snapshot> {
        &self.history
    }

    /// Whether a point lies on the board.
    pub fn in_bounds(&self, p: Point) -> bool {
        let side = self.size as i32;
        p.x >= 0 && p.x < side && p.y >= 0 && p.y < side
    }

    fn idx(&self, p: Point) -> usize {
        p.y as usize * self.size + p.x as usize
    }

    /// The contents of the cell at `p`.
    ///
    /// # Panics
    /// Panics if `p` is out of bounds; check [`in_bounds`](Self::in_bounds)
    /// first when probing arbitrary coordinates.
    pub fn space(&self, p: Point) -> Space {
        self.cells[self.idx(p)]
    }

    fn set_space(&mut self, p: Point, space: Space) {
        let i = self.idx(p);
        self.cells[i] = space;
    }

    /// The on-board orthogonal neighbors of `p`, in up, right, down, left
    /// order. Off-board candidates are clipped.
    pub fn neighbors(&self, p: Point) -> Vec<Point> {
        let candidates = [
            Point::new(p.x, p.y - 1),
            Point::new(p.x + 1, p.y),
            Point::new(p.x, p.y + 1),
            Point::new(p.x - 1, p.y),
        ];
        candidates
            .into_iter()
            .filter(|&n| self.in_bounds(n))
            .collect()
    }

    /// Breadth-first liberty and group search.
    ///
    /// Returns the set of liberties (empty points adjacent to the connected
    /// `stone`-colored group containing `start`) and the group itself. The
    /// starting point is always expanded regardless of its own contents, so
    /// rooting the search at an empty point reports the liberties a stone
    /// placed there would join; the legality check relies on this.
    pub fn liberties(&self, stone: Stone, start: Point) -> (HashSet<Point>, HashSet<Point>) {
        let mut to_scan = VecDeque::new();
        let mut liberties = HashSet::new();
        let mut group = HashSet::new();
        let mut discovered = HashSet::new();

        to_scan.push_back(start);
        while let Some(current) = to_scan.pop_front() {
            discovered.insert(current);
            let space = self.space(current);
            if space == Space::Empty && current != start {
                liberties.insert(current);
                continue;
            }
            if space.stone() == Some(stone) {
                group.insert(current);
            } else if current != start {
                continue;
            }
            // Same-colored stones and the start itself are expanded; the
            // discovered set keeps any point from being enqueued twice.
            for n in self.neighbors(current) {
                if discovered.insert(n) {
                    to_scan.push_back(n);
                }
            }
        }
        (liberties, group)
    }

    /// Remove the group at `p` if it has no liberties, crediting its size
    /// to the opposing color's capture tally. No-op on an empty point.
    fn check_captured(&mut self, p: Point) {
        let Some(stone) = self.space(p).stone() else {
            return;
        };
        let (liberties, group) = self.liberties(stone, p);
        if liberties.is_empty() {
            for &q in &group {
                self.set_space(q, Space::Empty);
            }
            let captured = group.len() as u32;
            match stone {
                Stone::Black => self.white_captures += captured,
                Stone::White => self.black_captures += captured,
            }
        }
    }

    /// Place a stone of the current color at `p`, resolve captures among
    /// the neighboring groups, and flip the turn.
    ///
    /// Assumes legality has already been established (or is deliberately
    /// bypassed, as in test setup). The placed stone's own group is never
    /// re-checked here: opponent groups are captured first, and the suicide
    /// condition was validated before placement.
    pub fn place_stone(&mut self, p: Point) {
        self.set_space(p, Space::from(self.turn));
        for n in self.neighbors(p) {
            self.check_captured(n);
        }
        self.turn = self.turn.opposite();
    }

    /// Whether placing the current color at `p` is legal.
    ///
    /// Legal iff `p` is on the board and empty, the placed stone would have
    /// at least one liberty or capture an adjacent opponent group whose
    /// last liberty is `p`, and the resulting position does not repeat any
    /// recorded (board, turn) pair.
    pub fn is_legal_move(&self, p: Point) -> bool {
        if !self.in_bounds(p) || self.space(p) != Space::Empty {
            return false;
        }

        let (liberties, _) = self.liberties(self.turn, p);
        if liberties.is_empty() && !self.captures_a_neighbor(p) {
            return false;
        }

        // Positional superko, checked last: it needs a full simulated
        // placement on a scratch copy.
        !self.history.contains(&self.simulate(p))
    }

    /// Whether some adjacent opponent group's liberty set is exactly `{p}`.
    fn captures_a_neighbor(&self, p: Point) -> bool {
        let opponent = self.turn.opposite();
        self.neighbors(p).into_iter().any(|n| {
            self.space(n).stone() == Some(opponent) && {
                let (liberties, _) = self.liberties(opponent, n);
                liberties.len() == 1 && liberties.contains(&p)
            }
        })
    }

    /// Play the simulated move on a throwaway copy and return the
    /// resulting position. The copy owns its grid outright.
    fn simulate(&self, p: Point) -> Snapshot {
        let mut scratch = GoState {
            size: self.size,
            cells: self.cells.clone(),
            black_captures: self.black_captures,
            white_captures: self.white_captures,
            turn: self.turn,
            history: HashSet::new(),
        };
        scratch.place_stone(p);
        scratch.snapshot()
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            size: self.size,
            cells: self.cells.clone(),
            turn: self.turn,
        }
    }

    /// Apply a move.
    ///
    /// A pass records the current position in history and flips the turn.
    /// A placement is first validated with [`is_legal_move`]; if illegal,
    /// nothing is mutated and `false` is returned. Otherwise the current
    /// position is recorded and the stone placed.
    ///
    /// The return value reports whether the *resulting* position already
    /// occurred in history. Two consecutive passes reproduce the same
    /// (board, turn) pair, so callers conventionally read `true` as the
    /// game-over signal; the engine itself has no terminal state and keeps
    /// accepting moves.
    ///
    /// [`is_legal_move`]: Self::is_legal_move
    pub fn make_move(&mut self, mv: Move) -> bool {
        match mv {
            Move::Pass => {
                self.history.insert(self.snapshot());
                self.turn = self.turn.opposite();
            }
            Move::Place(p) => {
                if !self.is_legal_move(p) {
                    return false;
                }
                self.history.insert(self.snapshot());
                self.place_stone(p);
            }
        }
        self.history.contains(&self.snapshot())
    }
}

/// Structural equality for superko purposes: board contents and turn.
/// Capture counts and history are excluded.
impl PartialEq for GoState {
    fn eq(&self, other: &GoState) -> bool {
        self.size == other.size && self.cells == other.cells && self.turn == other.turn
    }
}

impl Eq for GoState {}

impl fmt::Display for GoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size as i32 {
            for x in 0..self.size as i32 {
                let ch = match self.space(Point::new(x, y)) {
                    Space::Black => 'X',
                    Space::White => 'O',
                    Space::Empty => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Black captured: {}", self.black_captures)?;
        write!(f, "White captured: {}", self.white_captures)
    }
}
