use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use minimax_connect_four::ai::{Agent, Difficulty, MinimaxAgent, MinimaxSearch};
use minimax_connect_four::config::AppConfig;
use minimax_connect_four::game::{Board, GameResult, Player};
use minimax_connect_four::session::SessionStats;

/// Connect Four minimax engine.
#[derive(Parser)]
#[command(name = "connect4", about = "Connect Four minimax engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Suggest a move for the side to play after a sequence of columns
    Suggest {
        /// Comma-separated columns played so far, Red first (e.g. 3,4,3)
        #[arg(long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Search difficulty: easy, medium or hard
        #[arg(long, default_value = "hard")]
        difficulty: Difficulty,
    },
    /// Play AI-vs-AI games and report the results for Red
    PlayOff {
        #[arg(long, default_value = "medium")]
        red: Difficulty,

        #[arg(long, default_value = "hard")]
        yellow: Difficulty,

        /// Number of games to play
        #[arg(long, default_value_t = 10)]
        games: usize,

        /// Seed for the easy level's random moves
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the default configuration as TOML
    DefaultConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::DefaultConfig => {
            print!("{}", AppConfig::default_toml());
            Ok(())
        }
        Command::Suggest { moves, difficulty } => {
            let config = load_config(&cli.config)?;
            suggest(&config, &moves, difficulty)
        }
        Command::PlayOff {
            red,
            yellow,
            games,
            seed,
        } => {
            if games == 0 {
                bail!("--games must be at least 1");
            }
            let config = load_config(&cli.config)?;
            play_off(&config, red, yellow, games, seed)
        }
    }
}

fn load_config(path: &Path) -> Result<AppConfig> {
    AppConfig::load_or_default(path)
        .with_context(|| format!("loading config from {}", path.display()))
}

fn suggest(config: &AppConfig, moves: &[usize], difficulty: Difficulty) -> Result<()> {
    let board = Board::from_moves(moves).context("replaying --moves")?;
    println!("{board}");

    match board.result() {
        GameResult::Win(player) => bail!("game is already over: {player} has won"),
        GameResult::Draw => bail!("game is already over: draw"),
        GameResult::InProgress => {}
    }

    let player = board.next_player();
    let search_config = config.search_config(difficulty);
    let search = MinimaxSearch::with_weights(search_config.depth, config.heuristic.clone());
    let outcome = search.best_move(&board, player)?;
    println!(
        "{player} to move | difficulty: {difficulty} (depth {}) | best column: {} | score: {} | nodes: {}",
        search.depth(),
        outcome.column,
        outcome.score,
        outcome.nodes
    );
    Ok(())
}

fn play_off(
    config: &AppConfig,
    red: Difficulty,
    yellow: Difficulty,
    games: usize,
    seed: Option<u64>,
) -> Result<()> {
    let mut stats = SessionStats::new();

    println!("Playing {games} games: Red ({red}) vs Yellow ({yellow})");
    println!("-------------------------------------------");

    for game in 0..games {
        let mut red_agent = make_agent(config, red, seed.map(|s| s.wrapping_add(2 * game as u64)));
        let mut yellow_agent =
            make_agent(config, yellow, seed.map(|s| s.wrapping_add(2 * game as u64 + 1)));

        let mut board = Board::new();
        let mut player = Player::Red;
        let mut result = board.result();
        while !result.is_terminal() {
            let agent = match player {
                Player::Red => &mut red_agent,
                Player::Yellow => &mut yellow_agent,
            };
            let col = agent.select_move(&board, player)?;
            board.drop_piece(col, player)?;
            result = board.result();
            player = player.other();
        }

        stats.record(result, Player::Red);
        let summary = match result {
            GameResult::Win(winner) => format!("{winner} wins"),
            _ => "draw".to_string(),
        };
        println!(
            "Game {}/{} | {} in {} moves",
            game + 1,
            games,
            summary,
            board.piece_count()
        );
    }

    println!("-------------------------------------------");
    println!(
        "Red: {} wins, {} losses, {} draws ({:.1}% win rate)",
        stats.wins,
        stats.losses,
        stats.draws,
        stats.win_rate() * 100.0
    );
    Ok(())
}

fn make_agent(config: &AppConfig, difficulty: Difficulty, seed: Option<u64>) -> MinimaxAgent {
    let search_config = config.search_config(difficulty);
    match seed {
        Some(seed) => MinimaxAgent::with_seed(search_config, config.heuristic.clone(), seed),
        None => MinimaxAgent::new(search_config, config.heuristic.clone()),
    }
}
