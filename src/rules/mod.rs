//! Game rules: move application, scoring, turn rotation, completion.
//!
//! The rules layer is pure logic over [`crate::board::Grid`] and the score
//! and turn state. It never owns state; [`crate::session::GameSession`]
//! orchestrates these pieces in a fixed order per move:
//!
//! 1. [`moves::apply_move`] - validate, draw, detect completed boxes
//! 2. [`scoring::ScoreBoard::record`] - credit the mover
//! 3. [`outcome::evaluate`] - completion check on post-record scores
//! 4. [`turns::TurnOrder::advance`] - keep or pass the turn

pub mod moves;
pub mod outcome;
pub mod scoring;
pub mod turns;

pub use moves::apply_move;
pub use outcome::{evaluate, GameResult};
pub use scoring::ScoreBoard;
pub use turns::TurnOrder;
