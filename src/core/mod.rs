//! Core types: players, configuration, errors.

pub mod config;
pub mod error;
pub mod player;

pub use config::{ConfigUpdate, GridConfig, MAX_PLAYERS, MAX_SIZE, MIN_PLAYERS, MIN_SIZE};
pub use error::MoveError;
pub use player::{PlayerId, PlayerMap};
