//! Gomoku engine command line
//!
//! - `serve`: run the AI-move HTTP service
//! - `suggest`: print the engine's move for a board read as JSON
//! - `selfplay`: let the engine play both sides and print the final board

use std::fs;
use std::io::{self, Read};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gomoku::config::Config;
use gomoku::game::{Game, GameStatus};
use gomoku::server::{self, AiMoveResponse};
use gomoku::{Board, Difficulty, Engine, Stone};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML config file with [server] and [engine] tables
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service
    Serve {
        /// Listen address, overrides the config file and PORT
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },
    /// Suggest a move for a board given as a JSON array of 15 rows
    Suggest {
        /// Color to move: black or white
        #[arg(long)]
        color: Stone,
        /// easy, medium (or normal) or hard
        #[arg(short, long)]
        difficulty: Difficulty,
        /// Board file; stdin when omitted
        #[arg(short, long)]
        board: Option<PathBuf>,
        /// Print search statistics instead of the bare move
        #[arg(long)]
        stats: bool,
    },
    /// Engine against engine
    Selfplay {
        #[arg(long, default_value = "medium")]
        black: Difficulty,
        #[arg(long, default_value = "medium")]
        white: Difficulty,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Serve { bind } => {
            config.apply_env();
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            let runtime = tokio::runtime::Runtime::new().context("failed to start runtime")?;
            runtime.block_on(server::run(&config))?;
        }
        Command::Suggest {
            color,
            difficulty,
            board,
            stats,
        } => {
            let board = read_board(board.as_deref())?;
            let engine = Engine::with_config(config.engine);
            let result = engine.select_move_with_stats(&board, color, difficulty)?;
            let output = if stats {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&AiMoveResponse {
                    mv: result.best_move,
                })?
            };
            println!("{output}");
        }
        Command::Selfplay { black, white } => {
            let engine = Engine::with_config(config.engine);
            let game = self_play(&engine, black, white)?;
            println!("{}", game.board());
            println!("{}", serde_json::to_string(&game.status())?);
        }
    }

    Ok(())
}

fn read_board(path: Option<&Path>) -> Result<Board> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read board {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read board from stdin")?;
            text
        }
    };
    serde_json::from_str(&text).context("board must be a JSON array of 15 rows of 15 cells")
}

fn self_play(engine: &Engine, black: Difficulty, white: Difficulty) -> Result<Game> {
    let mut game = Game::new();

    while !game.is_over() {
        let color = game.current_turn();
        let difficulty = if color == Stone::Black { black } else { white };
        let Some(mv) = engine.select_move(game.board(), color, difficulty)? else {
            break;
        };
        let status = game.play_move(mv)?;
        info!(
            ply = game.history().len(),
            %color,
            row = mv.row,
            col = mv.col,
            "selfplay move"
        );
        if let GameStatus::Win { winner, .. } = status {
            info!(%winner, "selfplay finished");
        }
    }

    Ok(game)
}
