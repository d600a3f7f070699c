#![cfg(feature = "std")]

//! Terminal rendering of a [`DisplaySnapshot`] and coordinate parsing.

use std::fmt::Write;

use crate::{
    board::{CellGrid, CellState},
    common::Position,
    config::BOARD_SIZE,
    display::DisplaySnapshot,
    game::Side,
};

const GRID: usize = BOARD_SIZE as usize;

/// `A1`-style label for a position.
pub fn coord_to_string(pos: Position) -> String {
    let col = (b'A' + pos.col() as u8) as char;
    format!("{}{}", col, pos.row() + 1)
}

/// Parse `A1`..`J10` (column letter, 1-based row), case-insensitive.
pub fn parse_coord(input: &str) -> Result<Position, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or("No column letter")?
        .to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= GRID {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > GRID {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Position::new(row - 1, col).map_err(|e| e.to_string())
}

fn glyph(state: CellState) -> char {
    match state {
        CellState::Empty => '.',
        CellState::Ship => 'S',
        CellState::Hit => 'X',
        CellState::Miss => 'o',
    }
}

fn render_grid(out: &mut String, title: &str, grid: &CellGrid) {
    let _ = writeln!(out, "    {}", title);
    let _ = writeln!(out, "    ╔═══════════════════════╗");
    out.push_str("    ║   ");
    for c in 0..GRID {
        let _ = write!(out, "{} ", (b'A' + c as u8) as char);
    }
    out.push_str("║\n");
    let _ = writeln!(out, "    ╠═══════════════════════╣");
    for (r, row) in grid.iter().enumerate() {
        let _ = write!(out, "    ║{:2} ", r + 1);
        for state in row {
            let _ = write!(out, "{} ", glyph(*state));
        }
        out.push_str("║\n");
    }
    let _ = writeln!(out, "    ╚═══════════════════════╝");
}

/// Both grids, opponent on top, followed by status lines.
pub fn render(snapshot: &DisplaySnapshot) -> String {
    let mut out = String::new();
    render_grid(&mut out, "Opponent's Grid", &snapshot.computer_cell_states);
    out.push('\n');
    render_grid(&mut out, "Your Grid", &snapshot.user_cell_states);
    out.push_str("    Legend: S=Ship  X=Hit  o=Miss  .=Water\n");

    if snapshot.is_game_over {
        let banner = match snapshot.winner {
            Some(Side::User) => "You win! Every enemy ship is sunk.",
            Some(Side::Computer) => "The computer wins. Your fleet is gone.",
            None => "Game over.",
        };
        let _ = writeln!(out, "\n    *** {} ***", banner);
        out.push_str("    Type 'new' to play again.\n");
    } else if snapshot.can_randomize {
        out.push_str("    Type 'random' to shuffle your ships before the first shot.\n");
    }
    out
}

pub fn print_help() {
    println!("\nCommands:");
    println!("  A1..J10   fire at a cell on the opponent grid");
    println!("  random    shuffle your ships (before the first shot only)");
    println!("  new       start a new game");
    println!("  help      show this help");
    println!("  quit      leave the game");
}
