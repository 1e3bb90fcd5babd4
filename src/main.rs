#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use salvo::{
    init_logging, shared_input, BoardView, CliPlayer, GameConfig, GameEngine, PlayerId, Session,
    SharedInput, BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

/// Two-player hot-seat game: place your fleet, then take turns firing.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Ships per player, sizes 1..=N (prompted for if omitted)")]
    ships: Option<usize>,
    #[arg(long, default_value_t = BOARD_SIZE, help = "Side length of the square board")]
    board_size: usize,
    #[arg(long, help = "Fix RNG seed for reproducible random placement (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn prompt_ship_count(input: &SharedInput, board_size: usize) -> anyhow::Result<GameConfig> {
    let mut stdout = io::stdout();
    let most = GameConfig::max_ships(board_size);
    loop {
        write!(stdout, "Enter number of ships per player (1 to {}): ", most)?;
        stdout.flush()?;
        let mut line = String::new();
        if input.borrow_mut().read_line(&mut line)? == 0 {
            anyhow::bail!("input closed before the game started");
        }
        match line.trim().parse::<usize>() {
            Ok(n) => match GameConfig::new(board_size, n) {
                Ok(config) => return Ok(config),
                Err(e) => println!("{}. Please enter a number between 1 and {}.", e, most),
            },
            Err(_) => println!("Invalid input. Please enter a valid number."),
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let input = shared_input(io::stdin().lock());
    let config = match cli.ships {
        Some(n) => GameConfig::new(cli.board_size, n)?,
        None => prompt_ship_count(&input, cli.board_size)?,
    };

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (random placement will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let engine = GameEngine::new(config)?;
    let first = CliPlayer::new(PlayerId::One.to_string(), input.clone(), io::stdout());
    let second = CliPlayer::new(PlayerId::Two.to_string(), input, io::stdout());
    let mut session = Session::new(engine, Box::new(first), Box::new(second));

    let winner = session.run(&mut rng)?;

    println!("\n{} wins after {} shots!", winner, session.shot_count());
    for id in [PlayerId::One, PlayerId::Two] {
        println!("\n{}'s board:", id);
        print!("{}", BoardView::owner(session.engine().board(id)));
    }
    Ok(())
}
