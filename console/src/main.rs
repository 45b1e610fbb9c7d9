mod config;
mod console_io;

use std::io;

use clap::{Parser, ValueEnum};
use tictactoe_common::config::Validate;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{MarkAssignment, Seats, SessionEnd, TicTacToeSession};
use tictactoe_common::{log, logger};

use console_io::{ConsoleBroadcaster, ConsoleMoveSource};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MarkArg {
    X,
    O,
    Random,
}

impl From<MarkArg> for MarkAssignment {
    fn from(value: MarkArg) -> Self {
        match value {
            MarkArg::X => MarkAssignment::X,
            MarkArg::O => MarkAssignment::O,
            MarkArg::Random => MarkAssignment::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Path of the YAML config file, defaults to one next to the executable
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    name: Option<String>,

    #[arg(long, value_enum)]
    mark: Option<MarkArg>,

    /// Seed for the random mark assignment
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = config::get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;
    if let Some(name) = args.name {
        config.player_name = name;
    }
    if let Some(mark) = args.mark {
        config.human_mark = mark.into();
    }
    config.validate()?;

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved");
    }

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed {}", rng.seed());

    let seats = Seats::assign(
        config.human_mark,
        config.player_name.clone(),
        config.computer_name.clone(),
        &mut rng,
    );
    println!(
        "{} plays {}, {} plays {}. X moves first.",
        seats.human_name,
        seats.human_mark,
        seats.computer_name,
        seats.human_mark.opponent()
    );

    let stdin = io::stdin();
    let move_source = ConsoleMoveSource::new(stdin.lock(), io::stdout());
    let broadcaster = ConsoleBroadcaster::new(io::stdout());
    let mut session = TicTacToeSession::new(seats, move_source, broadcaster);

    match session.play() {
        SessionEnd::Finished(outcome) => log!("Game finished: {:?}", outcome),
        SessionEnd::Abandoned => println!("Game abandoned."),
    }

    Ok(())
}
