//! Board state: ship registry, occupancy and attack layers.
//!
//! Boards are values. Placement and attacks return a new `Board` and leave
//! the receiver untouched, so callers can keep or discard earlier states
//! freely.

use alloc::collections::BTreeMap;
use core::fmt;

use log::debug;
use rand::Rng;

use crate::common::{AttackResult, BoardError, Position};
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship, ShipId, BB};

const GRID: usize = BOARD_SIZE as usize;

/// What a renderer should draw for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum CellState {
    Empty,
    Ship,
    Hit,
    Miss,
}

/// Row-major grid of cell states.
pub type CellGrid = [[CellState; GRID]; GRID];

/// Read-only view of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell<'a> {
    ship_id: Option<&'a ShipId>,
    is_attacked: bool,
}

impl<'a> Cell<'a> {
    /// Id of the ship covering this cell, if any.
    pub fn ship_id(&self) -> Option<&'a ShipId> {
        self.ship_id
    }

    pub fn is_attacked(&self) -> bool {
        self.is_attacked
    }

    pub fn state(&self) -> CellState {
        match (self.is_attacked, self.ship_id.is_some()) {
            (true, false) => CellState::Miss,
            (true, true) => CellState::Hit,
            (false, true) => CellState::Ship,
            (false, false) => CellState::Empty,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    owners: [[Option<ShipId>; GRID]; GRID],
    ships: BTreeMap<ShipId, Ship>,
    ship_map: BB,
    attacked: BB,
}

impl Board {
    /// Board with no ships and no attacks.
    pub fn new() -> Self {
        Board {
            owners: core::array::from_fn(|_| core::array::from_fn(|_| None)),
            ships: BTreeMap::new(),
            ship_map: BB::new(),
            attacked: BB::new(),
        }
    }

    /// Board holding `ships`, each placed at a random legal spot.
    pub fn random_placement<R: Rng + ?Sized>(ships: &[Ship], rng: &mut R) -> Result<Self, BoardError> {
        ships
            .iter()
            .try_fold(Board::new(), |board, ship| board.place_randomly(ship, rng))
    }

    /// Place `ship` with its first segment at `start`, running right or down.
    ///
    /// Checks, in order: the run stays on the board (`ShipOutOfBounds`), the
    /// id is not registered yet (`ShipAlreadyPlaced`), no covered cell holds
    /// a ship (`ShipOverlaps`).
    pub fn place_ship(
        &self,
        ship: &Ship,
        start: Position,
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        let mask = ship.footprint(start, orientation)?;
        if self.ships.contains_key(ship.id()) {
            return Err(BoardError::ShipAlreadyPlaced {
                id: ship.id().as_str().into(),
            });
        }
        if !(self.ship_map & mask).is_empty() {
            return Err(BoardError::ShipOverlaps {
                id: ship.id().as_str().into(),
            });
        }

        let mut next = self.clone();
        for (row, col) in mask.cells() {
            next.owners[row][col] = Some(ship.id().clone());
        }
        next.ship_map |= mask;
        next.ships.insert(ship.id().clone(), ship.clone());
        debug!(
            "placed {} at ({}, {}) {:?}",
            ship.id(),
            start.row(),
            start.col(),
            orientation
        );
        Ok(next)
    }

    /// Retry uniformly random starts and orientations until `ship` fits.
    ///
    /// Only out-of-bounds and overlap failures are retried. Gives up with
    /// `UnableToPlaceShip` after [`MAX_PLACEMENT_ATTEMPTS`] draws.
    pub fn place_randomly<R: Rng + ?Sized>(&self, ship: &Ship, rng: &mut R) -> Result<Self, BoardError> {
        for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
            let start = Position::new(rng.random_range(0..GRID), rng.random_range(0..GRID))?;
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            match self.place_ship(ship, start, orientation) {
                Ok(board) => {
                    debug!("{} placed after {} draw(s)", ship.id(), attempt);
                    return Ok(board);
                }
                Err(BoardError::ShipOutOfBounds { .. } | BoardError::ShipOverlaps { .. }) => {}
                Err(e) => return Err(e),
            }
        }
        Err(BoardError::UnableToPlaceShip {
            id: ship.id().as_str().into(),
        })
    }

    /// Attack `pos`, returning the new board.
    pub fn receive_attack(&self, pos: Position) -> Result<Self, BoardError> {
        self.attack(pos).map(|(board, _)| board)
    }

    /// Attack `pos`, returning the new board and what the shot did.
    ///
    /// Fails with `AlreadyAttacked` if the cell was attacked before.
    pub fn attack(&self, pos: Position) -> Result<(Self, AttackResult), BoardError> {
        let (row, col): (usize, usize) = pos.into();
        if self.attacked.contains(row, col)? {
            return Err(BoardError::AlreadyAttacked { row, col });
        }

        let mut next = self.clone();
        next.attacked.insert(row, col)?;
        let result = match &self.owners[row][col] {
            None => AttackResult::Miss,
            // owners and the registry are only written together in place_ship
            Some(id) => match next.ships.get_mut(id) {
                Some(ship) => {
                    let was_sunk = ship.is_sunk();
                    *ship = ship.hit();
                    if ship.is_sunk() && !was_sunk {
                        AttackResult::Sunk(id.clone())
                    } else {
                        AttackResult::Hit
                    }
                }
                None => AttackResult::Hit,
            },
        };
        debug!("attack at ({}, {}): {:?}", row, col, result);
        Ok((next, result))
    }

    /// True when every registered ship is sunk; vacuously true with no ships.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.values().all(Ship::is_sunk)
    }

    pub fn has_received_any_attack(&self) -> bool {
        !self.attacked.is_empty()
    }

    pub fn cell(&self, pos: Position) -> Cell<'_> {
        Cell {
            ship_id: self.owners[pos.row()][pos.col()].as_ref(),
            is_attacked: self.is_attacked(pos),
        }
    }

    pub fn is_attacked(&self, pos: Position) -> bool {
        self.attacked.contains(pos.row(), pos.col()).unwrap_or(false)
    }

    /// Per-cell classification of the whole board.
    pub fn cell_states(&self) -> CellGrid {
        let mut grid = [[CellState::Empty; GRID]; GRID];
        for pos in Position::all() {
            grid[pos.row()][pos.col()] = self.cell(pos).state();
        }
        grid
    }

    pub fn ship(&self, id: &str) -> Option<&Ship> {
        self.ships.get(id)
    }

    /// Ship covering `pos`, if any.
    pub fn ship_at(&self, pos: Position) -> Option<&Ship> {
        self.owners[pos.row()][pos.col()]
            .as_ref()
            .and_then(|id| self.ships.get(id))
    }

    /// Registered ships, ordered by id.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.values()
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// Number of cells covered by any ship.
    pub fn ship_cell_count(&self) -> usize {
        self.ship_map.len()
    }

    /// Positions that have not been attacked yet, in row-major order.
    pub fn open_positions(&self) -> impl Iterator<Item = Position> + '_ {
        (!self.attacked)
            .cells()
            .filter_map(|(row, col)| Position::new(row, col).ok())
    }

    pub fn open_count(&self) -> usize {
        (!self.attacked).len()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  attacked: {:?},\n  ships: {:?}\n}}",
            self.ship_map,
            self.attacked,
            self.ships.values().collect::<alloc::vec::Vec<_>>()
        )
    }
}
