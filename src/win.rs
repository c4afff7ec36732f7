//! Win detection: circular ring runs and straight diametric runs

use crate::board::{Board, Hex, CELL_COUNT};
use crate::game::{GameResult, Marks, Player};

/// Length of a winning run
pub const WIN_SIZE: usize = 4;

/// Move count below which no win is geometrically possible on this board,
/// so the scans are skipped entirely
pub const MIN_MOVES_TO_CHECK: usize = 7;

/// Evaluate the ledger: ongoing, a win with its line, or a draw.
///
/// Pure function of the marks and the move count. Calling it twice on the
/// same ledger yields the same result and the same win-line cell order.
pub fn check_result(board: &Board, marks: &Marks, moves_made: usize) -> (GameResult, Vec<Hex>) {
    if moves_made < MIN_MOVES_TO_CHECK {
        return (GameResult::Ongoing, Vec::new());
    }

    for ring in [board.inner(), board.outer()] {
        if let Some((player, line)) = scan_ring(marks, ring) {
            return (player.wins(), line);
        }
    }

    if let Some((player, line)) = scan_diametrics(board, marks) {
        return (player.wins(), line);
    }

    if moves_made >= CELL_COUNT {
        (GameResult::Draw, Vec::new())
    } else {
        (GameResult::Ongoing, Vec::new())
    }
}

/// Scan one ring for a run of `WIN_SIZE` consecutive same-player cells.
///
/// The scan is circular: it walks `len + WIN_SIZE - 1` virtual steps with
/// indices taken modulo the ring length, so runs wrapping past the last
/// index are found. Empty cells break a run, they never extend one.
fn scan_ring(marks: &Marks, ring: &[Hex]) -> Option<(Player, Vec<Hex>)> {
    let mut owner = marks.get(&ring[0]).copied();
    let mut run = Vec::new();
    if owner.is_some() {
        run.push(ring[0]);
    }

    for step in 1..ring.len() + WIN_SIZE - 1 {
        let cell = ring[step % ring.len()];
        let occupant = marks.get(&cell).copied();

        if occupant == owner {
            if let Some(player) = owner {
                run.push(cell);
                if run.len() >= WIN_SIZE {
                    return Some((player, run));
                }
            }
        } else {
            owner = occupant;
            run.clear();
            if owner.is_some() {
                run.push(cell);
            }
        }
    }

    None
}

/// Scan the straight lines anchored at the outer ring.
///
/// Each occupied outer cell, together with its radially paired inner cell,
/// fixes a direction; two more steps along it complete a 4-cell line. Even
/// outer indices walk their spoke through the center, odd indices walk the
/// chord grazing the inner ring. Every straight line on the board is reached
/// this way from exactly one outer cell, so nothing is double-processed.
fn scan_diametrics(board: &Board, marks: &Marks) -> Option<(Player, Vec<Hex>)> {
    for (i, &outer) in board.outer().iter().enumerate() {
        let player = match marks.get(&outer) {
            Some(&p) => p,
            None => continue,
        };

        let inner = board.spoke_inner(i);
        if marks.get(&inner) != Some(&player) {
            continue;
        }

        let direction = inner - outer;
        let mut line = vec![outer, inner];
        let mut cell = inner;

        for _ in 0..WIN_SIZE - 2 {
            cell = cell + direction;
            if marks.get(&cell) != Some(&player) {
                break;
            }
            line.push(cell);
        }

        if line.len() >= WIN_SIZE {
            return Some((player, line));
        }
    }

    None
}
