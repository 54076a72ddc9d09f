use super::board::Cells;
use super::types::Mark;

/// Three board indices that win when they all hold the same mark.
pub type WinningLine = [usize; 3];

pub const WINNING_LINES: [WinningLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &Cells, mark: Mark) -> bool {
    check_win_with_line(cells, mark).is_some()
}

/// First line, in `WINNING_LINES` order, fully held by `mark`.
pub fn check_win_with_line(cells: &Cells, mark: Mark) -> Option<WinningLine> {
    if mark == Mark::Empty {
        return None;
    }

    WINNING_LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|&index| cells[index] == mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::CELL_COUNT;

    #[test]
    fn test_every_winning_line_is_detected() {
        for line in WINNING_LINES {
            for mark in [Mark::X, Mark::O] {
                let mut cells = [Mark::Empty; CELL_COUNT];
                for index in line {
                    cells[index] = mark;
                }
                assert!(check_win(&cells, mark), "{:?} on {:?}", mark, line);
                assert!(!check_win(&cells, mark.opponent().unwrap()));
                assert_eq!(check_win_with_line(&cells, mark), Some(line));
            }
        }
    }

    #[test]
    fn test_no_three_in_a_row() {
        use crate::games::tictactoe::Mark::{Empty as E, O, X};
        let boards = [
            [E; CELL_COUNT],
            [X, X, O, O, O, X, X, X, O],
            [X, O, X, E, E, E, O, X, O],
            [X, X, E, O, O, E, E, E, E],
        ];
        for cells in boards {
            assert!(!check_win(&cells, X));
            assert!(!check_win(&cells, O));
        }
    }

    #[test]
    fn test_empty_mark_never_wins() {
        let cells = [Mark::Empty; CELL_COUNT];
        assert!(!check_win(&cells, Mark::Empty));
    }
}
