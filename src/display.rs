//! Projection of a [`GameState`] into the data a renderer draws.

use crate::board::{CellGrid, CellState};
use crate::game::{GameState, Side};

/// Everything a renderer needs to redraw the screen. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplaySnapshot {
    pub user_cell_states: CellGrid,
    /// Opponent grid with unhit ships shown as empty water.
    pub computer_cell_states: CellGrid,
    pub is_game_over: bool,
    pub winner: Option<Side>,
    /// Re-randomizing the user's board is offered only before any attack.
    pub can_randomize: bool,
}

/// Snapshot of `state` with the computer's unhit ships hidden.
pub fn project(state: &GameState) -> DisplaySnapshot {
    let winner = state.winner();
    DisplaySnapshot {
        user_cell_states: state.user_board().cell_states(),
        computer_cell_states: mask_opponent_ships(state.computer_board().cell_states()),
        is_game_over: winner.is_some(),
        winner,
        can_randomize: state.can_randomize(),
    }
}

/// Replace every `Ship` cell with `Empty`; other states pass through.
pub fn mask_opponent_ships(mut grid: CellGrid) -> CellGrid {
    for state in grid.iter_mut().flatten() {
        if *state == CellState::Ship {
            *state = CellState::Empty;
        }
    }
    grid
}
