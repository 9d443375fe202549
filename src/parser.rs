//! Textual board fixtures.
//!
//! Parses board descriptions of the form used throughout the test suite:
//! one row per line, cells separated by commas, `_` for empty, `B` for a
//! black stone, `W` for a white stone. The number of rows fixes the board
//! side. The resulting state has Black to move, zero captures, and empty
//! history.

use crate::error::{GoError, Result};
use crate::stone::Space;
use crate::state::GoState;

/// Parse a comma-separated board description into a state.
///
/// # Errors
/// Returns [`GoError::InvalidFixture`] for unknown cell tokens or ragged
/// rows, and [`GoError::InvalidSide`] if the row count is not a usable
/// board side.
pub fn parse_state(input: &str) -> Result<GoState> {
    let lines: Vec<&str> = input.trim().lines().map(str::trim).collect();
    let mut state = GoState::new(lines.len())?;

    for (y, line) in lines.iter().enumerate() {
        let row: Vec<&str> = line.split(',').map(str::trim).collect();
        if row.len() != state.size() {
            return Err(GoError::InvalidFixture(format!(
                "row {y} has {} cells, expected {}",
                row.len(),
                state.size()
            )));
        }
        for (x, token) in row.iter().enumerate() {
            let space = match *token {
                "_" => Space::Empty,
                "B" => Space::Black,
                "W" => Space::White,
                other => {
                    return Err(GoError::InvalidFixture(format!(
                        "invalid cell {other:?} at row {y}, column {x}"
                    )));
                }
            };
            state.cells[y * state.size + x] = space;
        }
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;
    use crate::stone::Stone;

    #[test]
    fn test_parses_cells_by_row_and_column() {
        let state = parse_state(
            "_,B,_\n\
             W,_,B\n\
             _,_,W",
        )
        .unwrap();
        assert_eq!(state.size(), 3);
        assert_eq!(state.turn(), Stone::Black);
        assert_eq!(state.space(Point::new(1, 0)), Space::Black);
        assert_eq!(state.space(Point::new(0, 1)), Space::White);
        assert_eq!(state.space(Point::new(2, 1)), Space::Black);
        assert_eq!(state.space(Point::new(2, 2)), Space::White);
        assert_eq!(state.space(Point::new(0, 0)), Space::Empty);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_rejects_unknown_token() {
        let err = parse_state("_,X\n_,_").unwrap_err();
        assert!(matches!(err, GoError::InvalidFixture(_)));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = parse_state("_,_\n_").unwrap_err();
        assert!(matches!(err, GoError::InvalidFixture(_)));
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(parse_state("").is_err());
    }
}
