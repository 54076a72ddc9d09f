use common::games::tictactoe::{BOARD_SIZE, Board, CELL_COUNT, Mark};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Zero-based cell index.
    Place(usize),
    Restart,
    Quit,
    Help,
    Invalid(String),
}

/// Cells are typed 1-9, matching the numbers shown on empty squares.
pub fn parse_command(line: &str) -> UserCommand {
    let input = line.trim();
    match input.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => UserCommand::Quit,
        "r" | "restart" => UserCommand::Restart,
        "h" | "help" | "?" => UserCommand::Help,
        other => match other.parse::<usize>() {
            Ok(cell @ 1..=CELL_COUNT) => UserCommand::Place(cell - 1),
            Ok(_) => UserCommand::Invalid(format!("Cell must be between 1 and {}", CELL_COUNT)),
            Err(_) => UserCommand::Invalid(format!("Unknown command '{}'", input)),
        },
    }
}

pub fn help_text() -> String {
    format!(
        "Enter a cell number 1-{} to place your mark, r to restart, q to quit.",
        CELL_COUNT
    )
}

/// Renders the board with the number of every free cell as a hint.
pub fn render_board(board: &Board) -> String {
    let labels: Vec<String> = board
        .get()
        .iter()
        .enumerate()
        .map(|(index, &cell)| match cell {
            Mark::Empty => (index + 1).to_string(),
            mark => mark.to_string(),
        })
        .collect();

    labels
        .chunks(BOARD_SIZE)
        .map(|row| format!(" {} | {} | {}\n", row[0], row[1], row[2]))
        .collect::<Vec<_>>()
        .join("---+---+---\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cells_are_one_based() {
        assert_eq!(parse_command("1\n"), UserCommand::Place(0));
        assert_eq!(parse_command(" 9 "), UserCommand::Place(8));
        assert!(matches!(parse_command("0"), UserCommand::Invalid(_)));
        assert!(matches!(parse_command("10"), UserCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_command("q"), UserCommand::Quit);
        assert_eq!(parse_command("QUIT"), UserCommand::Quit);
        assert_eq!(parse_command("r"), UserCommand::Restart);
        assert_eq!(parse_command("?"), UserCommand::Help);
        assert_eq!(
            parse_command("move"),
            UserCommand::Invalid("Unknown command 'move'".to_string())
        );
    }

    #[test]
    fn test_render_empty_board_shows_cell_numbers() {
        let expected = " 1 | 2 | 3\n---+---+---\n 4 | 5 | 6\n---+---+---\n 7 | 8 | 9\n";
        assert_eq!(render_board(&Board::new()), expected);
    }

    #[test]
    fn test_render_marks_replace_numbers() {
        let mut board = Board::new();
        board.update(0, Mark::O);
        board.update(4, Mark::X);
        let expected = " O | 2 | 3\n---+---+---\n 4 | X | 6\n---+---+---\n 7 | 8 | 9\n";
        assert_eq!(render_board(&board), expected);
    }
}
