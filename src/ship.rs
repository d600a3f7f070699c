//! Ships, fleet definitions and placement footprints.

use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Position};
use crate::config::{BOARD_SIZE, MAX_SHIP_LENGTH, MIN_SHIP_LENGTH, STANDARD_FLEET};

pub(crate) type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Direction a ship extends from its start cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends to the right (increasing column).
    Horizontal,
    /// Extends downward (increasing row).
    Vertical,
}

impl Orientation {
    /// Step applied per segment as (row, col).
    fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// Stable identifier of a ship within a board's registry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShipId(String);

impl ShipId {
    /// Fails with [`BoardError::EmptyShipId`] for an empty string.
    pub fn new(id: impl Into<String>) -> Result<Self, BoardError> {
        let id = id.into();
        if id.is_empty() {
            return Err(BoardError::EmptyShipId);
        }
        Ok(ShipId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ShipId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fleet entry: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDef {
    name: &'static str,
    length: usize,
}

impl ShipDef {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Fresh, unhit ship for this entry.
    pub fn build(&self) -> Result<Ship, BoardError> {
        Ship::new(self.name, self.length)
    }
}

/// Builds one unhit ship per entry of [`STANDARD_FLEET`].
pub fn standard_fleet() -> Result<Vec<Ship>, BoardError> {
    STANDARD_FLEET.iter().map(ShipDef::build).collect()
}

/// A ship's identity, length and accumulated hits.
///
/// Ships are values: [`Ship::hit`] returns a new ship rather than changing
/// the receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    id: ShipId,
    length: usize,
    hits: usize,
}

impl Ship {
    /// New ship with no hits. The id must be non-empty and the length
    /// within [`MIN_SHIP_LENGTH`]..=[`MAX_SHIP_LENGTH`].
    pub fn new(id: impl Into<String>, length: usize) -> Result<Self, BoardError> {
        let id = ShipId::new(id)?;
        if !(MIN_SHIP_LENGTH..=MAX_SHIP_LENGTH).contains(&length) {
            return Err(BoardError::InvalidShipLength(length));
        }
        Ok(Ship { id, length, hits: 0 })
    }

    /// Copy of this ship with one more hit. Not capped at `length`.
    #[must_use]
    pub fn hit(&self) -> Self {
        Ship {
            hits: self.hits + 1,
            ..self.clone()
        }
    }

    pub fn is_sunk(&self) -> bool {
        self.length <= self.hits
    }

    pub fn id(&self) -> &ShipId {
        &self.id
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Cells covered when placed at `start` with `orientation`.
    ///
    /// Fails with [`BoardError::ShipOutOfBounds`] if the last segment falls
    /// outside the board.
    pub fn footprint(&self, start: Position, orientation: Orientation) -> Result<BB, BoardError> {
        let (dr, dc) = orientation.step();
        let end_row = start.row() + dr * (self.length - 1);
        let end_col = start.col() + dc * (self.length - 1);
        if end_row >= BOARD_SIZE as usize || end_col >= BOARD_SIZE as usize {
            return Err(BoardError::ShipOutOfBounds {
                id: self.id.0.clone(),
            });
        }
        let cells = (0..self.length).map(|i| (start.row() + dr * i, start.col() + dc * i));
        Ok(BB::from_cells(cells)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_lengths_outside_range() {
        assert_eq!(
            Ship::new("tug", 1).unwrap_err(),
            BoardError::InvalidShipLength(1)
        );
        assert_eq!(
            Ship::new("ark", 6).unwrap_err(),
            BoardError::InvalidShipLength(6)
        );
        assert!(Ship::new("pt", 2).is_ok());
        assert!(Ship::new("carrier", 5).is_ok());
    }

    #[test]
    fn rejects_empty_id() {
        assert_eq!(Ship::new("", 3).unwrap_err(), BoardError::EmptyShipId);
    }

    #[test]
    fn hit_returns_new_value() {
        let ship = Ship::new("cruiser", 3).unwrap();
        let once = ship.hit();
        let twice = once.hit();
        assert_eq!(ship.hits(), 0);
        assert_eq!(once.hits(), 1);
        assert_eq!(twice.hits(), 2);
        assert!(!twice.is_sunk());
        assert!(twice.hit().is_sunk());
        // extra hits are allowed and stay sunk
        assert!(twice.hit().hit().is_sunk());
    }

    #[test]
    fn footprint_runs_right_or_down() {
        let ship = Ship::new("sub", 3).unwrap();
        let start = Position::new(2, 7).unwrap();
        let across: Vec<_> = ship
            .footprint(start, Orientation::Horizontal)
            .unwrap()
            .cells()
            .collect();
        assert_eq!(across, [(2, 7), (2, 8), (2, 9)]);
        let down: Vec<_> = ship
            .footprint(start, Orientation::Vertical)
            .unwrap()
            .cells()
            .collect();
        assert_eq!(down, [(2, 7), (3, 7), (4, 7)]);
    }

    #[test]
    fn footprint_past_edge_is_out_of_range() {
        let ship = Ship::new("sub", 3).unwrap();
        let err = ship
            .footprint(Position::new(0, 8).unwrap(), Orientation::Horizontal)
            .unwrap_err();
        assert_eq!(err.kind(), crate::common::ErrorKind::OutOfRange);
        assert!(ship
            .footprint(Position::new(8, 0).unwrap(), Orientation::Vertical)
            .is_err());
    }

    #[test]
    fn standard_fleet_matches_config() {
        let fleet = standard_fleet().unwrap();
        let lengths: Vec<_> = fleet.iter().map(Ship::length).collect();
        assert_eq!(lengths, [5, 4, 3, 3, 2]);
        assert_eq!(fleet[0].id().as_str(), "carrier");
    }
}
