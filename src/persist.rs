//! Saved-game persistence.
//!
//! The whole state (grid, capture tallies, turn, position history) is
//! written as one bincode record tagged with a magic number and a format
//! version. Compatibility across format versions is not attempted: a
//! version mismatch is a load failure.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GoError, Result};
use crate::state::{GoState, Snapshot, MAX_SIDE};
use crate::stone::{Space, Stone};

/// Magic number identifying saved-game files ("GOGM" in ASCII).
const MAGIC: u32 = 0x474F_474D;

/// Current saved-game format version.
const FORMAT_VERSION: u16 = 1;

#[derive(Serialize, Deserialize)]
struct SavedGame {
    magic: u32,
    version: u16,
    size: u32,
    cells: Vec<Space>,
    black_captures: u32,
    white_captures: u32,
    turn: Stone,
    history: HashSet<Snapshot>,
}

impl GoState {
    /// Save the complete state to `path`.
    ///
    /// # Errors
    /// Returns [`GoError::Save`] if the destination cannot be written. On
    /// error no success is claimed; the destination contents are whatever
    /// the filesystem left behind and will not load as a valid game.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let record = SavedGame {
            magic: MAGIC,
            version: FORMAT_VERSION,
            size: self.size as u32,
            cells: self.cells.clone(),
            black_captures: self.black_captures,
            white_captures: self.white_captures,
            turn: self.turn,
            history: self.history.clone(),
        };
        let bytes = bincode::serialize(&record).map_err(|e| GoError::Save {
            path: path.to_owned(),
            source: io::Error::other(e),
        })?;
        fs::write(path, bytes).map_err(|source| GoError::Save {
            path: path.to_owned(),
            source,
        })
    }

    /// Load a complete state from `path`.
    ///
    /// # Errors
    /// Returns [`GoError::Load`] if the source cannot be read, was not
    /// produced by [`save`](Self::save), is truncated, or fails validation.
    /// A failed load constructs nothing; any existing state the caller
    /// holds is untouched.
    pub fn load(path: impl AsRef<Path>) -> Result<GoState> {
        let path = path.as_ref();
        let fail = |reason: String| GoError::Load {
            path: path.to_owned(),
            reason,
        };

        let bytes = fs::read(path).map_err(|e| fail(e.to_string()))?;
        let record: SavedGame =
            bincode::deserialize(&bytes).map_err(|e| fail(format!("not a saved game: {e}")))?;

        if record.magic != MAGIC {
            return Err(fail("not a saved game: bad magic number".into()));
        }
        if record.version != FORMAT_VERSION {
            return Err(fail(format!(
                "unsupported format version {}",
                record.version
            )));
        }
        let size = record.size as usize;
        if size == 0 || size > MAX_SIDE || record.cells.len() != size * size {
            return Err(fail("corrupt board data".into()));
        }
        for snapshot in &record.history {
            if snapshot.cells.len() != snapshot.size * snapshot.size {
                return Err(fail("corrupt history entry".into()));
            }
        }

        Ok(GoState {
            size,
            cells: record.cells,
            black_captures: record.black_captures,
            white_captures: record.white_captures,
            turn: record.turn,
            history: record.history,
        })
    }
}
