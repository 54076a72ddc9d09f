use rand::Rng;

use crate::config::Validate;
use crate::error::GameError;
use crate::{debug_log, log};
use super::board::{Board, CELL_COUNT};
use super::bot_controller::{BotInput, calculate_minimax_move};
use super::settings::{COMPUTER_NAME, TicTacToeSessionSettings};
use super::types::{FirstPlayerMode, GameStatus, Mark, Player, Roles};
use super::win_detector::check_win_with_line;

/// One human-versus-computer game, owning its board exclusively.
///
/// Every confirmed move, from either side, goes through the same path: write
/// the mark, check a win for the mover, then a tie, then pass the turn.
#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    human: Player,
    computer: Player,
    first_player_mode: FirstPlayerMode,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(settings: &TicTacToeSessionSettings) -> Result<Self, GameError> {
        settings.validate().map_err(GameError::InvalidSettings)?;

        let computer_mark = settings
            .human_mark
            .opponent()
            .ok_or_else(|| GameError::InvalidSettings("Human mark must be X or O".to_string()))?;

        let human = Player::new(settings.player_name.trim(), settings.human_mark);
        let computer = Player::new(COMPUTER_NAME, computer_mark);

        let mut state = Self {
            board: Board::new(),
            current_mark: human.mark(),
            human,
            computer,
            first_player_mode: settings.first_player_mode,
            status: GameStatus::InProgress,
            last_move: None,
        };
        state.current_mark = state.pick_first_mark();
        Ok(state)
    }

    fn pick_first_mark(&self) -> Mark {
        match self.first_player_mode {
            FirstPlayerMode::Human => self.human.mark(),
            FirstPlayerMode::Computer => self.computer.mark(),
            FirstPlayerMode::Random => {
                if rand::rng().random() {
                    self.human.mark()
                } else {
                    self.computer.mark()
                }
            }
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn computer(&self) -> &Player {
        &self.computer
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn roles(&self) -> Roles {
        Roles {
            maximizing: self.computer.mark(),
            minimizing: self.human.mark(),
        }
    }

    pub fn current_player(&self) -> &Player {
        if self.current_mark == self.computer.mark() {
            &self.computer
        } else {
            &self.human
        }
    }

    pub fn is_computer_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.computer.mark()
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(mark) if mark == self.human.mark() => Some(&self.human),
            GameStatus::Won(_) => Some(&self.computer),
            _ => None,
        }
    }

    /// Applies the human's move to cell `index`.
    ///
    /// Unlike `Board::update`, this rejects moves after the game ended, out of
    /// turn, off the board or onto a marked cell.
    pub fn place_mark(&mut self, index: usize) -> Result<GameStatus, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }

        if self.current_mark != self.human.mark() {
            return Err(GameError::NotYourTurn);
        }

        if index >= CELL_COUNT {
            return Err(GameError::OutOfBounds { index });
        }

        if !self.board.is_valid_move(index) {
            return Err(GameError::CellOccupied { index });
        }

        self.apply_move(index);
        Ok(self.status)
    }

    /// Lets the computer search the current position and play its choice.
    pub fn computer_move(&mut self) -> Result<usize, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }

        if self.current_mark != self.computer.mark() {
            return Err(GameError::NotYourTurn);
        }

        let index = calculate_minimax_move(&BotInput::from_game_state(self))
            .ok_or(GameError::NoMovesAvailable)?;

        self.apply_move(index);
        Ok(index)
    }

    fn apply_move(&mut self, index: usize) {
        let mover = self.current_mark;
        self.board.update(index, mover);
        self.last_move = Some(index);
        debug_log!("{} placed {} at {}", self.current_player().name(), mover, index);

        self.check_game_over(mover);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }
    }

    fn check_game_over(&mut self, mover: Mark) {
        if let Some(line) = check_win_with_line(self.board.get(), mover) {
            self.status = GameStatus::Won(mover);
            log!("{} wins with line {:?}", self.current_player().name(), line);
            return;
        }

        if Board::check_tie(self.board.get()) {
            self.status = GameStatus::Tie;
            log!("Game ended in a tie");
        }
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == self.human.mark() {
            self.computer.mark()
        } else {
            self.human.mark()
        };
    }

    /// Clears the board and starts a fresh game with the same players.
    pub fn restart(&mut self) {
        self.board.reset();
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.current_mark = self.pick_first_mark();
    }

    pub fn result_message(&self) -> String {
        match self.status {
            GameStatus::Won(_) => match self.winner() {
                Some(player) => format!("{} wins!", player.name()),
                None => "Game over.".to_string(),
            },
            GameStatus::Tie => "It's a tie!".to_string(),
            GameStatus::InProgress if self.is_computer_turn() => {
                format!("{} is thinking...", self.computer.name())
            }
            GameStatus::InProgress => {
                format!("Your turn, {}. Make your move.", self.human.name())
            }
        }
    }
}
