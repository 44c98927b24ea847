//! # dotnexus
//!
//! A dots-and-boxes game engine: players take turns drawing edges on a grid
//! of dots; completing the fourth edge of a cell claims that box and grants
//! an extra turn; when every box is claimed, the highest score wins.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: no rendering, input handling, or persistence. The
//!    presentation layer consumes [`GameSession`] snapshots and observer
//!    notifications.
//!
//! 2. **N-Player First**: 2-6 players with integer ids; every rule is a
//!    bounded loop over `1..=player_count`, never a pair of special cases.
//!
//! 3. **Errors are values**: illegal moves come back as [`MoveError`], the
//!    board untouched. Out-of-range configuration is clamped, not rejected.
//!
//! ## Modules
//!
//! - `core`: player ids, per-player maps, configuration, errors
//! - `board`: the line and box matrices with bounds-checked access
//! - `rules`: move application, scoring, turn rotation, winner resolution
//! - `session`: the stateful API and observer notifications

pub mod board;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigUpdate, GridConfig, MoveError, PlayerId, PlayerMap, MAX_PLAYERS, MAX_SIZE, MIN_PLAYERS,
    MIN_SIZE,
};

pub use crate::board::{BoxCoord, Grid, LineKind};

pub use crate::rules::{GameResult, ScoreBoard, TurnOrder};

pub use crate::session::{GameSession, GameStatus, MoveOutcome, SessionObserver, Snapshot};
