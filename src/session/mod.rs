//! The stateful game session consumed by presentation layers.
//!
//! `GameSession` owns the board, scores, and turn order outright; nothing
//! outside it can write to the matrices. Every call runs to completion
//! before returning - validation, mutation, scoring, evaluation, turn
//! decision - so observers only ever see committed post-move snapshots.
//! Reconfiguration discards the whole board (no incremental resize), which
//! keeps the never-overwrite line invariant trivially true on a fresh board.

pub mod events;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::board::{BoxCoord, Grid, LineKind};
use crate::core::{ConfigUpdate, GridConfig, MoveError, PlayerId};
use crate::rules::{self, GameResult, ScoreBoard, TurnOrder};

pub use events::SessionObserver;

/// Session status. A session is `InProgress` from creation or
/// reconfiguration until the last box is claimed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Complete,
}

/// Read-only copy of the full game state.
///
/// Snapshots are plain data: comparing the snapshots taken before and after
/// a rejected move shows them identical.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: usize,
    pub player_count: usize,
    pub horizontal_lines: Vec<Vec<Option<PlayerId>>>,
    pub vertical_lines: Vec<Vec<Option<PlayerId>>>,
    pub boxes: Vec<Vec<Option<PlayerId>>>,
    /// Scores in player-id order.
    pub scores: Vec<(PlayerId, u32)>,
    pub current_player: PlayerId,
    pub status: GameStatus,
    /// Winners, present once status is `Complete`.
    pub result: Option<GameResult>,
}

impl Snapshot {
    /// Sum of all claimed boxes.
    #[must_use]
    pub fn total_claimed(&self) -> u32 {
        self.scores.iter().map(|(_, score)| score).sum()
    }

    /// Number of boxes not yet claimed.
    #[must_use]
    pub fn boxes_remaining(&self) -> usize {
        self.size * self.size - self.total_claimed() as usize
    }
}

/// Everything a caller learns from one applied move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Committed state after the move.
    pub snapshot: Snapshot,
    /// Boxes claimed by this move, 0-2, in {above/left, below/right} order.
    pub completed: SmallVec<[BoxCoord; 2]>,
    /// Active player after the turn rule fired. Equals the mover when any
    /// box was completed.
    pub current_player: PlayerId,
    /// Whether this move ended the game.
    pub game_over: bool,
    /// Winners, when `game_over`.
    pub result: Option<GameResult>,
}

/// A dots-and-boxes game.
///
/// ```
/// use dotnexus::{GameSession, GridConfig, LineKind};
///
/// let mut session = GameSession::new(GridConfig::new(3, 2));
/// let outcome = session.apply_move(LineKind::Horizontal, 0, 0).unwrap();
/// assert!(outcome.completed.is_empty());
/// ```
pub struct GameSession {
    config: GridConfig,
    grid: Grid,
    scores: ScoreBoard,
    turns: TurnOrder,
    status: GameStatus,
    result: Option<GameResult>,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl GameSession {
    /// Start a session with the given configuration.
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        info!(
            size = config.size(),
            player_count = config.player_count(),
            "session started"
        );
        Self {
            config,
            grid: Grid::new(config.size()),
            scores: ScoreBoard::new(config.player_count()),
            turns: TurnOrder::new(config.player_count()),
            status: GameStatus::InProgress,
            result: None,
            observers: Vec::new(),
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> GridConfig {
        self.config
    }

    /// The active player.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turns.current()
    }

    /// Session status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// A player's claimed-box count.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores.score(player)
    }

    /// Register an observer for move and game-over notifications.
    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    /// Apply a configuration change and start a fresh game.
    ///
    /// Out-of-range values are clamped, never rejected. The old board and
    /// scores are discarded outright, even mid-game; player 1 opens.
    pub fn configure(&mut self, update: ConfigUpdate) -> Snapshot {
        self.config = self.config.apply(update);
        info!(
            size = self.config.size(),
            player_count = self.config.player_count(),
            "board reconfigured"
        );
        self.reinitialize();
        self.snapshot()
    }

    /// Start a fresh game with the current configuration.
    pub fn reset(&mut self) -> Snapshot {
        debug!("game reset");
        self.reinitialize();
        self.snapshot()
    }

    fn reinitialize(&mut self) {
        self.grid = Grid::new(self.config.size());
        self.scores = ScoreBoard::new(self.config.player_count());
        self.turns = TurnOrder::new(self.config.player_count());
        self.status = GameStatus::InProgress;
        self.result = None;
    }

    /// Draw a line for the active player.
    ///
    /// Runs the full pipeline - validate, draw, claim boxes, record score,
    /// evaluate completion, decide the turn - and notifies observers of the
    /// committed outcome. Rejected moves change nothing and notify nobody.
    pub fn apply_move(
        &mut self,
        kind: LineKind,
        row: usize,
        col: usize,
    ) -> Result<MoveOutcome, MoveError> {
        if self.status == GameStatus::Complete {
            return Err(MoveError::GameAlreadyOver);
        }

        let player = self.turns.current();
        let completed = rules::apply_move(&mut self.grid, kind, row, col, player)?;

        self.scores.record(player, completed.len());

        // Completion check reads the scores just recorded, so a move that
        // closes the final two boxes at once ends the game on this move.
        self.result = rules::evaluate(&self.scores, self.config.size());
        if self.result.is_some() {
            self.status = GameStatus::Complete;
        }

        let current_player = self.turns.advance(!completed.is_empty());

        debug!(
            %player,
            ?kind,
            row,
            col,
            completed = completed.len(),
            "move applied"
        );

        let outcome = MoveOutcome {
            snapshot: self.snapshot(),
            completed,
            current_player,
            game_over: self.status == GameStatus::Complete,
            result: self.result.clone(),
        };

        self.notify(&outcome);
        Ok(outcome)
    }

    /// Read-only snapshot of the full state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            size: self.config.size(),
            player_count: self.config.player_count(),
            horizontal_lines: self.grid.horizontal_lines().to_vec(),
            vertical_lines: self.grid.vertical_lines().to_vec(),
            boxes: self.grid.boxes().to_vec(),
            scores: self.scores.iter().collect(),
            current_player: self.turns.current(),
            status: self.status,
            result: self.result.clone(),
        }
    }

    fn notify(&mut self, outcome: &MoveOutcome) {
        for observer in &mut self.observers {
            observer.on_move_applied(outcome);
        }
        if let Some(result) = &outcome.result {
            info!(?result, "game over");
            for observer in &mut self.observers {
                observer.on_game_over(result);
            }
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}
