//! Game state: players, the move ledger and turn orchestration

use crate::board::{Board, Hex};
use crate::win;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Player mark
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X = 0,
    O = 1,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Terminal result for a win by this player
    pub fn wins(self) -> GameResult {
        match self {
            Player::X => GameResult::XWins,
            Player::O => GameResult::OWins,
        }
    }
}

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    XWins,
    OWins,
    Draw,
}

impl GameResult {
    pub fn is_terminal(self) -> bool {
        self != GameResult::Ongoing
    }
}

/// The move ledger: which player marked which cell
pub type Marks = FxHashMap<Hex, Player>;

/// Move rejection
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The cell already carries a mark; pick another cell
    #[error("cell {0:?} is already marked")]
    OccupiedCell(Hex),

    /// The game has reached a terminal result; start a new game
    #[error("the game is over")]
    GameOver,

    /// The cell is not part of the board; a caller bug, not recoverable
    #[error("cell {0:?} is not on the board")]
    InvalidCell(Hex),
}

/// Game state for one match (clone to fork)
///
/// Single-threaded and synchronous; callers serialize access. The result is
/// recomputed from the ledger after every move, never tracked independently.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    marks: Marks,
    moves_made: usize,
    current_player: Player,
    result: GameResult,
    win_line: Vec<Hex>,
}

impl GameState {
    /// Fresh game: generated topology, empty ledger, X to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            marks: Marks::default(),
            moves_made: 0,
            current_player: Player::X,
            result: GameResult::Ongoing,
            win_line: Vec::new(),
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Board topology, computed once for the lifetime of the game
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Recorded occupant of a cell, if any
    pub fn occupant(&self, cell: Hex) -> Option<Player> {
        self.marks.get(&cell).copied()
    }

    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Cells of the winning line, empty unless a win was detected
    pub fn win_line(&self) -> &[Hex] {
        &self.win_line
    }

    /// Player to move, `None` once the game is over
    pub fn current_player(&self) -> Option<Player> {
        if self.result.is_terminal() {
            None
        } else {
            Some(self.current_player)
        }
    }

    /// All cells with their levels, in board order (for rendering)
    pub fn layout(&self) -> Vec<(Hex, i8)> {
        self.board.cells().iter().map(|&c| (c, c.level())).collect()
    }

    /// Public state for the rendering/input layer
    pub fn snapshot(&self) -> Snapshot {
        // board order, not hash order, so the output is deterministic
        let occupancy = self
            .board
            .cells()
            .iter()
            .filter_map(|&c| self.marks.get(&c).map(|&p| (c, p)))
            .collect();

        Snapshot {
            occupancy,
            current_player: self.current_player(),
            result: self.result,
            win_line: self.win_line.clone(),
        }
    }

    // ========================================================================
    // MOVES
    // ========================================================================

    /// Mark a cell for the player to move, then re-evaluate the result.
    ///
    /// Atomic: when an error is returned the ledger, the move count and the
    /// turn are all unchanged.
    pub fn submit_move(&mut self, cell: Hex) -> Result<(), GameError> {
        if self.result.is_terminal() {
            return Err(GameError::GameOver);
        }
        if !self.board.contains(cell) {
            return Err(GameError::InvalidCell(cell));
        }
        if self.marks.contains_key(&cell) {
            return Err(GameError::OccupiedCell(cell));
        }

        let player = self.current_player;
        self.marks.insert(cell, player);
        self.moves_made += 1;
        tracing::debug!("{:?} marks {:?} (move {})", player, cell, self.moves_made);

        let (result, win_line) = win::check_result(&self.board, &self.marks, self.moves_made);
        self.result = result;
        self.win_line = win_line;

        if self.result.is_terminal() {
            // the turn freezes; current_player() reports None from here on
            tracing::info!("game over after {} moves: {:?}", self.moves_made, self.result);
        } else {
            self.current_player = player.opponent();
        }

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Public game state at the core boundary
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Marked cells with their occupants, in board order
    pub occupancy: Vec<(Hex, Player)>,
    /// Player to move, absent once the game is over
    pub current_player: Option<Player>,
    pub result: GameResult,
    pub win_line: Vec<Hex>,
}
