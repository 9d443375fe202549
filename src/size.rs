//! Supported board sizes.

use std::fmt;
use std::str::FromStr;

use crate::error::GoError;

/// The conventional square board sizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoardSize {
    Nine,
    Thirteen,
    Nineteen,
}

impl BoardSize {
    pub const ALL: [BoardSize; 3] = [BoardSize::Nine, BoardSize::Thirteen, BoardSize::Nineteen];

    /// Side length of the square board.
    pub fn side(self) -> usize {
        match self {
            BoardSize::Nine => 9,
            BoardSize::Thirteen => 13,
            BoardSize::Nineteen => 19,
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.side())
    }
}

impl FromStr for BoardSize {
    type Err = GoError;

    /// Parses the `"9x9"` / `"13x13"` / `"19x19"` labels produced by
    /// [`Display`](fmt::Display).
    fn from_str(s: &str) -> Result<Self, GoError> {
        BoardSize::ALL
            .into_iter()
            .find(|size| size.to_string() == s)
            .ok_or_else(|| GoError::UnsupportedSize(s.to_string()))
    }
}
