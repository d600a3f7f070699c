// Uniform random targeting for the computer player.

use log::debug;
use rand::Rng;

use crate::{
    board::Board,
    common::{BoardError, Position},
    config::{BOARD_SIZE, MAX_TARGET_ATTEMPTS},
};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Pick a uniformly random cell of `board` that has not been attacked.
///
/// Draws random cells and rejects attacked ones. After
/// [`MAX_TARGET_ATTEMPTS`] rejected draws it picks directly among the open
/// cells, which keeps the choice uniform. Fails with `NoTargetsRemaining`
/// when every cell has already been attacked.
pub fn select_target<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Position, BoardError> {
    let open = board.open_count();
    if open == 0 {
        return Err(BoardError::NoTargetsRemaining);
    }

    for _ in 0..MAX_TARGET_ATTEMPTS {
        let pos = Position::new(
            rng.random_range(0..GRID_SIZE),
            rng.random_range(0..GRID_SIZE),
        )?;
        if !board.is_attacked(pos) {
            return Ok(pos);
        }
    }

    debug!("target sampling exhausted, choosing among {} open cells", open);
    board
        .open_positions()
        .nth(rng.random_range(0..open))
        .ok_or(BoardError::NoTargetsRemaining)
}
