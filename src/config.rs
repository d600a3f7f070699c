use crate::ship::ShipDef;

pub const BOARD_SIZE: u8 = 10;

/// Inclusive bounds on a ship's length.
pub const MIN_SHIP_LENGTH: usize = 2;
pub const MAX_SHIP_LENGTH: usize = 5;

pub const NUM_SHIPS: usize = 5;
/// Milton Bradley fleet placed on each board at game start.
pub const STANDARD_FLEET: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("carrier", 5),
    ShipDef::new("battleship", 4),
    ShipDef::new("cruiser", 3),
    ShipDef::new("submarine", 3),
    ShipDef::new("destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Draws allowed per ship during random placement.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Random draws before computer targeting falls back to an exact pick.
pub const MAX_TARGET_ATTEMPTS: usize = 1_000;

/// Pause between the user's move and the computer's reply.
pub const COMPUTER_REPLY_DELAY_MS: u64 = 1_000;
