mod config;
mod offline;
mod ui;

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::config::Validate;
use common::games::tictactoe::{FirstPlayerMode, Mark, TicTacToeGameState};
use common::{log, logger};

use config::{Config, get_config_manager};
use offline::TicTacToeRunner;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum MarkArg {
    X,
    O,
}

impl From<MarkArg> for Mark {
    fn from(value: MarkArg) -> Self {
        match value {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FirstPlayerArg {
    Human,
    Computer,
    Random,
}

impl From<FirstPlayerArg> for FirstPlayerMode {
    fn from(value: FirstPlayerArg) -> Self {
        match value {
            FirstPlayerArg::Human => FirstPlayerMode::Human,
            FirstPlayerArg::Computer => FirstPlayerMode::Computer,
            FirstPlayerArg::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a minimax computer")]
struct Args {
    /// Your display name
    #[arg(long)]
    name: Option<String>,
    #[arg(long, value_enum)]
    mark: Option<MarkArg>,
    /// Who moves first
    #[arg(long, value_enum)]
    first: Option<FirstPlayerArg>,
    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    use_log_prefix: bool,
    #[arg(long)]
    verbose: bool,
    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply_to(&self, config: &mut Config) {
        if let Some(name) = &self.name {
            config.player.name = name.clone();
        }
        if let Some(mark) = self.mark {
            config.player.mark = mark.into();
        }
        if let Some(first) = self.first {
            config.player.first_player = first.into();
        }
        config.logging.use_prefix |= self.use_log_prefix;
        config.logging.verbose |= self.verbose;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = match &args.config {
        Some(path) => common::config::ConfigManager::from_yaml_file(path),
        None => get_config_manager(),
    };
    let mut config: Config = config_manager.get_config()?;
    args.apply_to(&mut config);
    config.validate()?;

    logger::init_logger(config.logging.prefix(), config.logging.verbose);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved settings for {}", config.player.name);
    }

    let state = TicTacToeGameState::new(&config.player.session_settings())?;
    log!(
        "Starting game: {} ({}) against {} ({})",
        state.human().name(),
        state.human().mark(),
        state.computer().name(),
        state.computer().mark()
    );

    let mut runner = TicTacToeRunner::new(state, io::stdin().lock(), io::stdout().lock());
    runner.run()?;

    Ok(())
}
