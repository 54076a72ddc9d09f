use std::io::{self, BufRead, Write};

use common::GameError;
use common::games::tictactoe::TicTacToeGameState;
use common::log;

use crate::ui::{UserCommand, help_text, parse_command, render_board};

/// Drives one local game over line-based text input and output.
///
/// The computer answers within the same turn, before the next prompt.
pub struct TicTacToeRunner<R, W> {
    state: TicTacToeGameState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TicTacToeRunner<R, W> {
    pub fn new(state: TicTacToeGameState, input: R, output: W) -> Self {
        Self {
            state,
            input,
            output,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Welcome, {}! You are playing {} against {}. {}",
            self.state.human().name(),
            self.state.human().mark(),
            self.state.computer().name(),
            help_text()
        )?;

        loop {
            self.play_computer_turn()?;

            write!(self.output, "{}", render_board(self.state.board()))?;
            writeln!(self.output, "{}", self.state.result_message())?;
            if self.state.status().is_over() {
                writeln!(self.output, "Type r to play again or q to quit.")?;
            }
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            match parse_command(&line) {
                UserCommand::Quit => break,
                UserCommand::Restart => {
                    self.state.restart();
                    log!("Game restarted");
                    writeln!(self.output, "New game!")?;
                }
                UserCommand::Place(index) => {
                    if let Err(err) = self.state.place_mark(index) {
                        writeln!(self.output, "{}", describe_rejection(&err))?;
                    }
                }
                UserCommand::Help => writeln!(self.output, "{}", help_text())?,
                UserCommand::Invalid(message) => {
                    writeln!(self.output, "{}. {}", message, help_text())?;
                }
            }
        }

        writeln!(self.output, "Goodbye!")
    }

    fn play_computer_turn(&mut self) -> io::Result<()> {
        if !self.state.is_computer_turn() {
            return Ok(());
        }

        match self.state.computer_move() {
            Ok(index) => writeln!(
                self.output,
                "{} plays cell {}.",
                self.state.computer().name(),
                index + 1
            ),
            Err(err) => {
                log!("Computer could not move: {}", err);
                Ok(())
            }
        }
    }
}

fn describe_rejection(err: &GameError) -> String {
    match err {
        GameError::CellOccupied { index } => format!("Cell {} is already taken.", index + 1),
        GameError::GameOver => "The game is over. Type r to play again or q to quit.".to_string(),
        other => format!("Invalid move: {}", other),
    }
}
