//! Goban-Rust: a Go rules kernel.
//!
//! This crate tracks Go board state and enforces the rules of play: move
//! legality (bounds, occupancy, suicide, positional superko), capture
//! resolution, and the consecutive-pass game-over signal. There is no UI,
//! scoring, or move-suggestion logic; the crate is the rules engine a CLI,
//! GUI, or test harness builds on.
//!
//! ## Modules
//!
//! - [`point`] - Board coordinates
//! - [`stone`] - Player colors and cell contents
//! - [`size`] - Supported board sizes
//! - [`state`] - Core game logic (board state, moves, captures, superko)
//! - [`persist`] - Saved-game serialization
//! - [`parser`] - Textual board fixtures
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use goban_rust::point::Point;
//! use goban_rust::state::{GoState, Move};
//!
//! let mut state = GoState::new(9)?;
//!
//! // Black opens, White answers.
//! state.make_move(Move::Place(Point::new(2, 2)));
//! state.make_move(Move::Place(Point::new(6, 6)));
//!
//! // Two consecutive passes signal the end of the game.
//! assert!(!state.make_move(Move::Pass));
//! assert!(state.make_move(Move::Pass));
//! # Ok::<(), goban_rust::error::GoError>(())
//! ```

pub mod error;
pub mod parser;
pub mod persist;
pub mod point;
pub mod size;
pub mod state;
pub mod stone;
