use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Mark::Empty => " ",
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Mark {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Mark::X),
            "O" | "o" => Ok(Mark::O),
            other => Err(format!("unknown mark '{}' (expected X or O)", other)),
        }
    }
}

/// A named side of the game and the mark it places.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    mark: Mark,
}

impl Player {
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }
}

/// Which mark the search maximizes for (the computer) and which it minimizes
/// for (the human).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roles {
    pub maximizing: Mark,
    pub minimizing: Mark,
}

impl Roles {
    /// Returns `None` for `Mark::Empty`, which cannot own a side.
    pub fn for_computer(computer_mark: Mark) -> Option<Self> {
        Some(Self {
            maximizing: computer_mark,
            minimizing: computer_mark.opponent()?,
        })
    }

    pub fn is_maximizing(&self, mark: Mark) -> bool {
        mark == self.maximizing
    }

    /// The mark that moves after `mark`.
    pub fn other(&self, mark: Mark) -> Mark {
        if self.is_maximizing(mark) {
            self.minimizing
        } else {
            self.maximizing
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Tie,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    #[default]
    Human,
    Computer,
    Random,
}
