use crate::debug_log;
use super::board::{Board, Cells, get_available_moves};
use super::game_state::TicTacToeGameState;
use super::types::{Mark, Roles};
use super::win_detector::check_win;

pub const HUMAN_WIN_SCORE: i32 = -1;
pub const TIE_SCORE: i32 = 0;
pub const COMPUTER_WIN_SCORE: i32 = 1;

/// A move together with its value under optimal play from both sides.
///
/// Terminal positions carry no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvaluation {
    pub index: Option<usize>,
    pub score: i32,
}

impl MoveEvaluation {
    fn terminal(score: i32) -> Self {
        Self { index: None, score }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
}

pub struct BotInput {
    pub board: Board,
    pub roles: Roles,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board().clone(),
            roles: state.roles(),
        }
    }
}

/// Picks the computer's reply, or `None` when the position is already decided.
pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let mut cells = *input.board.get();
    let (evaluation, stats) = search_with_stats(&mut cells, input.roles.maximizing, input.roles);

    debug_log!(
        "Minimax visited {} positions, best move {:?} scores {}",
        stats.nodes,
        evaluation.index,
        evaluation.score
    );

    evaluation.index
}

/// Exhaustive minimax over every continuation of `cells` with `mark_to_place`
/// to move.
///
/// Candidates are tried in ascending index order and only a strictly better
/// score replaces the current best, so equal-valued moves resolve to the
/// lowest index. `cells` is written and restored during the search and is
/// unchanged on return.
pub fn search(cells: &mut Cells, mark_to_place: Mark, roles: Roles) -> MoveEvaluation {
    search_with_stats(cells, mark_to_place, roles).0
}

pub fn search_with_stats(
    cells: &mut Cells,
    mark_to_place: Mark,
    roles: Roles,
) -> (MoveEvaluation, SearchStats) {
    let mut stats = SearchStats::default();
    let evaluation = minimax(cells, mark_to_place, roles, &mut stats);
    (evaluation, stats)
}

fn minimax(cells: &mut Cells, mark: Mark, roles: Roles, stats: &mut SearchStats) -> MoveEvaluation {
    stats.nodes += 1;

    if check_win(cells, roles.minimizing) {
        return MoveEvaluation::terminal(HUMAN_WIN_SCORE);
    }
    if check_win(cells, roles.maximizing) {
        return MoveEvaluation::terminal(COMPUTER_WIN_SCORE);
    }

    let available_moves = get_available_moves(cells);
    if available_moves.is_empty() {
        return MoveEvaluation::terminal(TIE_SCORE);
    }

    let mut evaluations = Vec::with_capacity(available_moves.len());
    for index in available_moves {
        cells[index] = mark;
        let result = minimax(cells, roles.other(mark), roles, stats);
        cells[index] = Mark::Empty;

        evaluations.push(MoveEvaluation {
            index: Some(index),
            score: result.score,
        });
    }

    select_best(&evaluations, roles.is_maximizing(mark))
}

fn select_best(evaluations: &[MoveEvaluation], maximizing: bool) -> MoveEvaluation {
    evaluations
        .iter()
        .copied()
        .reduce(|best, candidate| {
            let better = if maximizing {
                candidate.score > best.score
            } else {
                candidate.score < best.score
            };
            if better { candidate } else { best }
        })
        .unwrap_or(MoveEvaluation::terminal(TIE_SCORE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark::{Empty as E, O, X};
    use crate::games::tictactoe::{CELL_COUNT, check_win as has_line};

    fn computer_o() -> Roles {
        Roles::for_computer(O).unwrap()
    }

    #[test]
    fn test_empty_board_is_a_forced_tie_opening_in_the_corner() {
        let mut cells = [E; CELL_COUNT];
        let result = search(&mut cells, O, computer_o());
        assert_eq!(result, MoveEvaluation { index: Some(0), score: TIE_SCORE });
    }

    #[test]
    fn test_full_tree_size_from_empty_board() {
        let mut cells = [E; CELL_COUNT];
        let (_, stats) = search_with_stats(&mut cells, O, computer_o());
        assert_eq!(stats.nodes, 549_946);
    }

    #[test]
    fn test_search_restores_board() {
        let boards = [
            [E; CELL_COUNT],
            [E, E, E, E, X, E, E, E, E],
            [X, O, E, E, X, E, E, E, E],
            [O, X, O, E, X, E, E, E, X],
        ];
        for cells in boards {
            for mark in [X, O] {
                let mut working = cells;
                let _ = search(&mut working, mark, computer_o());
                assert_eq!(working, cells);
            }
        }
    }

    #[test]
    fn test_terminal_positions_have_no_move() {
        let mut human_won = [X, X, X, O, O, E, E, E, E];
        assert_eq!(search(&mut human_won, O, computer_o()), MoveEvaluation { index: None, score: HUMAN_WIN_SCORE });

        let mut computer_won = [O, X, X, O, X, E, O, E, E];
        assert_eq!(
            search(&mut computer_won, X, computer_o()),
            MoveEvaluation { index: None, score: COMPUTER_WIN_SCORE }
        );

        let mut tie = [X, O, X, X, O, O, O, X, X];
        assert_eq!(search(&mut tie, O, computer_o()), MoveEvaluation { index: None, score: TIE_SCORE });
    }

    #[test]
    fn test_minimizing_side_takes_the_immediate_win() {
        let mut cells = [X, X, E, E, E, E, E, E, E];
        let result = search(&mut cells, X, computer_o());
        assert_eq!(result, MoveEvaluation { index: Some(2), score: HUMAN_WIN_SCORE });
    }

    #[test]
    fn test_maximizing_side_takes_the_immediate_win() {
        let mut cells = [O, O, E, X, X, E, E, E, E];
        let result = search(&mut cells, O, computer_o());
        assert_eq!(result, MoveEvaluation { index: Some(2), score: COMPUTER_WIN_SCORE });
    }

    #[test]
    fn test_blocks_the_only_threat() {
        let mut cells = [E, E, E, E, O, E, X, X, E];
        let result = search(&mut cells, O, computer_o());
        assert_eq!(result, MoveEvaluation { index: Some(8), score: TIE_SCORE });
    }

    #[test]
    fn test_replies_to_every_opening() {
        let expected_replies = [4, 0, 4, 0, 0, 2, 4, 1, 4];
        for (opening, expected) in expected_replies.into_iter().enumerate() {
            let mut cells = [E; CELL_COUNT];
            cells[opening] = X;
            let result = search(&mut cells, O, computer_o());
            assert_eq!(result.index, Some(expected), "reply to opening {}", opening);
            assert_eq!(result.score, TIE_SCORE);
        }
    }

    #[test]
    fn test_roles_are_not_tied_to_symbols() {
        let roles = Roles::for_computer(X).unwrap();
        let mut cells = [X, X, E, O, O, E, E, E, E];
        let result = search(&mut cells, X, roles);
        assert_eq!(result, MoveEvaluation { index: Some(2), score: COMPUTER_WIN_SCORE });

        let mut cells = [E; CELL_COUNT];
        assert_eq!(search(&mut cells, X, roles), MoveEvaluation { index: Some(0), score: TIE_SCORE });
    }

    #[test]
    fn test_optimal_self_play_ends_in_a_tie() {
        let roles = computer_o();
        let mut cells = [E; CELL_COUNT];
        let mut mark = X;
        while let Some(index) = search(&mut cells, mark, roles).index {
            cells[index] = mark;
            mark = roles.other(mark);
        }
        assert!(!has_line(&cells, X));
        assert!(!has_line(&cells, O));
        assert!(cells.iter().all(|&cell| cell != E));
    }

    fn assert_computer_never_loses(cells: &mut [Mark; CELL_COUNT], roles: Roles) {
        for human_move in get_available_moves(cells) {
            cells[human_move] = roles.minimizing;
            assert!(!has_line(cells, roles.minimizing), "human won with {:?}", cells);

            let input = BotInput {
                board: Board::from_cells(*cells),
                roles,
            };
            if let Some(reply) = calculate_minimax_move(&input) {
                cells[reply] = roles.maximizing;
                if !has_line(cells, roles.maximizing) {
                    assert_computer_never_loses(cells, roles);
                }
                cells[reply] = E;
            }

            cells[human_move] = E;
        }
    }

    #[test]
    fn test_computer_never_loses_against_any_human_line() {
        let mut cells = [E; CELL_COUNT];
        assert_computer_never_loses(&mut cells, computer_o());
    }
}
