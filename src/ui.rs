//! Text rendering of grids and shot outcomes. Pure functions; nothing here
//! touches stdout.

use alloc::string::String;
use core::fmt::Write;

use crate::common::ShotOutcome;
use crate::coord::Coordinate;
use crate::grid::{CellState, Grid};

/// Symbol for one cell. Intact vessel cells only show when `reveal` is set.
pub fn cell_symbol(state: CellState, reveal: bool) -> char {
    match state {
        CellState::Empty => 'O',
        CellState::ShipUnhit if reveal => '■',
        CellState::ShipUnhit => 'O',
        CellState::Miss => '*',
        CellState::Hit => 'X',
    }
}

/// Render `grid` as a table with row (`x`) and column (`y`) numbers.
pub fn render_grid(grid: &Grid, reveal: bool) -> String {
    let size = grid.size();
    let mut out = String::new();
    let _ = write!(out, "{:^3}", "x\\y");
    for y in 1..=size {
        let _ = write!(out, " | {:^3}", y);
    }
    out.push_str(" |");
    for x in 1..=size {
        let _ = write!(out, "\n{:^3}", x);
        for y in 1..=size {
            let symbol = cell_symbol(grid.cell_state(Coordinate::new(x, y)), reveal);
            let _ = write!(out, " | {:^3}", symbol);
        }
        out.push_str(" |");
    }
    out
}

/// Key for the symbols used by [`render_grid`].
pub fn legend(reveal: bool) -> &'static str {
    if reveal {
        "Legend: ■=Ship  X=Hit  *=Miss  O=Water"
    } else {
        "Legend: X=Hit  *=Miss  O=Unknown"
    }
}

/// Message shown to the players after a shot.
pub fn describe_outcome(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::OutOfBounds => "Shot is off the board, please repeat...",
        ShotOutcome::AlreadyTried => "That cell was already targeted...",
        ShotOutcome::Missed => "Miss!",
        ShotOutcome::Damaged => "Ship damaged!",
        ShotOutcome::Destroyed => "Ship destroyed!",
    }
}
