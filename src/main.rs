use std::io::Write;

use clap::{Parser, Subcommand};
use parcheesi::{
    demo,
    parcheesi::{Board, Color, Game, GameConfig, Player, RandomFaces, Throwing, Turn},
    probability::SumTable,
};
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "parcheesi", about = "Console Parcheesi: dice, turns, the board and a small game loop")]
struct Cli {
    /// Seed for the dice, for reproducible output
    #[arg(long, global = true, env = "PARCHEESI_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Exact probability of every sum of two dice
    #[command(name = "p")]
    Probability,

    /// Roll two dice N times and tabulate the sums
    #[command(name = "r")]
    Rolls {
        #[arg(default_value_t = 1000)]
        count: u64,
    },

    /// Draw N dice
    #[command(name = "d")]
    Dice {
        #[arg(default_value_t = Throwing::DEFAULT_DICE)]
        count: usize,
    },

    /// Play one turn, rolling again on doubles
    #[command(name = "t")]
    Turn,

    /// Draw the board with a few pieces on it
    #[command(name = "b")]
    Board {
        #[arg(default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=4))]
        colors: u8,
    },

    /// Walk a piece through its states
    #[command(name = "i")]
    Piece,

    /// Activate and move a player's pieces
    #[command(name = "l")]
    Player,

    /// Play the game loop
    #[command(name = "g")]
    Game {
        /// Number of rounds before the game stops
        #[arg(long, default_value_t = GameConfig::default().max_rounds, env = "PARCHEESI_ROUNDS")]
        rounds: u32,

        /// Do not wait for enter between turns
        #[arg(long)]
        auto: bool,

        /// Name of the player
        #[arg(long, default_value = "Player 1")]
        name: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut faces = RandomFaces::from_rng(rng);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.mode {
        Mode::Probability => write!(out, "{}", SumTable::analytic())?,
        Mode::Rolls { count } => {
            let table = match cli.seed {
                Some(_) => SumTable::simulate(count, &mut faces),
                None => SumTable::simulate_random(count),
            };
            tracing::info!(rolls = table.total(), "simulation finished");
            write!(out, "{}", table)?;
        }
        Mode::Dice { count } => write!(out, "{}", Throwing::roll(&mut faces, count))?,
        Mode::Turn => writeln!(out, "{}", Turn::take(&mut faces))?,
        Mode::Board { colors } => write!(out, "{}", demo::board_with_pieces(colors as usize)?)?,
        Mode::Piece => writeln!(out, "{}", demo::piece_transitions())?,
        Mode::Player => writeln!(out, "{}", demo::player_moves())?,
        Mode::Game { rounds, auto, name } => {
            let config = GameConfig { max_rounds: rounds, auto_continue: auto };
            let players = vec![Player::new(name, Color::A)];
            let mut game = Game::new(Board::new(Color::ALL.len())?, players, config);
            let stdin = std::io::stdin();
            game.run(&mut faces, &mut out, &mut stdin.lock())?;
            writeln!(out, "Game over after {} rounds", game.round())?;
        }
    }

    Ok(())
}
