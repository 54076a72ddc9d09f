mod board;
mod bot_controller;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CELL_COUNT, Cells, get_available_moves};
pub use bot_controller::{
    BotInput, COMPUTER_WIN_SCORE, HUMAN_WIN_SCORE, MoveEvaluation, SearchStats, TIE_SCORE,
    calculate_minimax_move, search, search_with_stats,
};
pub use game_state::TicTacToeGameState;
pub use settings::{COMPUTER_NAME, TicTacToeSessionSettings};
pub use types::{FirstPlayerMode, GameStatus, Mark, Player, Roles};
pub use win_detector::{WINNING_LINES, WinningLine, check_win, check_win_with_line};
