use std::fmt;

use super::types::Mark;
use super::win_detector::check_win;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Row-major cell storage: index = row * 3 + col.
pub type Cells = [Mark; CELL_COUNT];

/// The 3x3 grid of a single game.
///
/// `update` writes unconditionally. Keeping moves legal (empty target cell,
/// index in range) is the caller's job.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: Cells,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: Cells) -> Self {
        Self { cells }
    }

    pub fn get(&self) -> &Cells {
        &self.cells
    }

    /// Panics if `index` is outside 0..9.
    pub fn update(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    pub fn check_win(&self, mark: Mark) -> bool {
        check_win(&self.cells, mark)
    }

    /// Full board. A full board that also holds a line is a win, so check
    /// wins first.
    pub fn check_tie(cells: &Cells) -> bool {
        cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        Self::check_tie(&self.cells)
    }

    pub fn available_moves(&self) -> Vec<usize> {
        get_available_moves(&self.cells)
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        self.cells.get(index) == Some(&Mark::Empty)
    }
}

pub fn get_available_moves(cells: &Cells) -> Vec<usize> {
    cells
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            writeln!(f, " {} | {} | {}", cells[0], cells[1], cells[2])?;
        }
        Ok(())
    }
}
