//! Stone colors and board cell contents.

use serde::{Deserialize, Serialize};

/// A player color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    /// The other color. Involutive: `s.opposite().opposite() == s`.
    pub fn opposite(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }
}

/// The contents of a single board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Space {
    Empty,
    Black,
    White,
}

impl Space {
    /// The stone occupying this cell, if any.
    pub fn stone(self) -> Option<Stone> {
        match self {
            Space::Empty => None,
            Space::Black => Some(Stone::Black),
            Space::White => Some(Stone::White),
        }
    }
}

impl From<Stone> for Space {
    fn from(stone: Stone) -> Space {
        match stone {
            Stone::Black => Space::Black,
            Stone::White => Space::White,
        }
    }
}
