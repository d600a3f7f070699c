//! Common types: positions, attack results and board errors.

use alloc::string::String;
use core::fmt;

use crate::bitboard::BitBoardError;
use crate::config::BOARD_SIZE;
use crate::ship::ShipId;

const GRID: usize = BOARD_SIZE as usize;

/// A cell coordinate; row and column both in `[0, BOARD_SIZE)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Checked constructor. Fails with [`BoardError::OutOfBounds`].
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= GRID || col >= GRID {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(Position {
            row: row as u8,
            col: col as u8,
        })
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// All positions of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..GRID).flat_map(|row| {
            (0..GRID).map(move |col| Position {
                row: row as u8,
                col: col as u8,
            })
        })
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row(), pos.col())
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = BoardError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Position::new(row, col)
    }
}

/// Result of resolving a single attack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackResult {
    /// Nothing covered the cell.
    Miss,
    /// A ship was hit but is still afloat.
    Hit,
    /// The hit sank the ship with this id.
    Sunk(ShipId),
}

/// Coarse classification of a [`BoardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed ship or call made against a broken precondition.
    InvalidArgument,
    /// Coordinates outside the grid.
    OutOfRange,
    /// Clashes with existing board state: overlap, duplicate, re-attack.
    Conflict,
}

/// Errors returned by ship, board and game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoard(BitBoardError),
    /// Ship id was the empty string.
    EmptyShipId,
    /// Ship length outside the allowed range.
    InvalidShipLength(usize),
    /// Position outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Ship run would leave the grid.
    ShipOutOfBounds { id: String },
    /// A ship with this id is already on the board.
    ShipAlreadyPlaced { id: String },
    /// Ship placement overlaps another ship.
    ShipOverlaps { id: String },
    /// Cell has already been attacked.
    AlreadyAttacked { row: usize, col: usize },
    /// Random placement ran out of attempts.
    UnableToPlaceShip { id: String },
    /// Every cell of the target board has been attacked.
    NoTargetsRemaining,
    /// Board can no longer be re-randomized once attacks have started.
    GameAlreadyStarted,
}

impl BoardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::EmptyShipId
            | BoardError::InvalidShipLength(_)
            | BoardError::NoTargetsRemaining => ErrorKind::InvalidArgument,
            BoardError::BitBoard(_)
            | BoardError::OutOfBounds { .. }
            | BoardError::ShipOutOfBounds { .. } => ErrorKind::OutOfRange,
            BoardError::ShipAlreadyPlaced { .. }
            | BoardError::ShipOverlaps { .. }
            | BoardError::AlreadyAttacked { .. }
            | BoardError::UnableToPlaceShip { .. }
            | BoardError::GameAlreadyStarted => ErrorKind::Conflict,
        }
    }
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoard(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            BoardError::EmptyShipId => write!(f, "Ship id must not be empty"),
            BoardError::InvalidShipLength(len) => {
                write!(f, "Ship length {} is outside the allowed range", len)
            }
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is outside the board", row, col)
            }
            BoardError::ShipOutOfBounds { id } => {
                write!(f, "Ship '{}' would extend past the edge of the board", id)
            }
            BoardError::ShipAlreadyPlaced { id } => {
                write!(f, "Ship '{}' is already placed on the board", id)
            }
            BoardError::ShipOverlaps { id } => {
                write!(f, "Ship '{}' overlaps with another ship", id)
            }
            BoardError::AlreadyAttacked { row, col } => {
                write!(f, "Position ({}, {}) has already been attacked", row, col)
            }
            BoardError::UnableToPlaceShip { id } => write!(f, "Unable to place ship '{}'", id),
            BoardError::NoTargetsRemaining => write!(f, "No un-attacked cells remain"),
            BoardError::GameAlreadyStarted => {
                write!(f, "Board cannot be randomized after the first attack")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
