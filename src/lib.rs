//! hexmark - Two-player marking game on a two-ring hexagonal board
//!
//! This crate provides the core game logic:
//! - Board geometry (cube-coordinate hex grid: a center cell and two rings)
//! - Move ledger with strict turn alternation
//! - Win detection: circular runs within a ring, straight runs across it
//!
//! Rendering, input handling and persistence live outside this crate and
//! drive it through [`GameState`].

pub mod board;
pub mod game;
pub mod win;

// Re-exports for convenient access
pub use board::{Board, Hex, BOARD_RADIUS, CELL_COUNT, DIRECTIONS};
pub use game::{GameError, GameResult, GameState, Marks, Player, Snapshot};
pub use win::{check_result, MIN_MOVES_TO_CHECK, WIN_SIZE};
