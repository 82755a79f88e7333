//! chess-board - print a chess position from a FEN string.
//!
//! With no arguments this prints the standard starting position.

mod config;

use anyhow::{Context, Result};
use chess_board::{fen, Board, Square};
use clap::Parser;
use config::BoardConfig;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Print a chess position from a FEN string.
#[derive(Parser, Debug)]
#[command(name = "chess-board")]
#[command(about = "Print a chess position from a FEN string")]
struct Args {
    /// FEN string, or just its piece placement field
    fen: Option<String>,

    /// Square to look up, e.g. e4 (repeatable)
    #[arg(short, long = "square")]
    squares: Vec<String>,

    /// Also print the re-encoded piece placement
    #[arg(short, long)]
    encode: bool,

    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(BoardConfig::default_path);
    let config = BoardConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    tracing::debug!("Config: {:?}", config);

    let stdout = std::io::stdout();
    run(&args, &config, &mut stdout.lock())
}

fn run(args: &Args, config: &BoardConfig, out: &mut impl Write) -> Result<()> {
    let fen = args.fen.as_deref().unwrap_or(&config.default_fen);
    let (placement, rest) = fen::split_fields(fen);
    tracing::debug!("Placement: {:?}", placement);
    if !rest.is_empty() {
        tracing::debug!("Ignoring remaining FEN fields: {:?}", rest);
    }

    let board = Board::from_fen(fen).with_context(|| format!("parsing FEN {:?}", fen))?;
    tracing::info!("Decoded {} pieces", board.piece_count());

    writeln!(out, "{}", board)?;

    if args.encode || config.encode {
        writeln!(out, "{}", board.to_fen_placement())?;
    }

    for name in &args.squares {
        let sq = Square::from_algebraic(name)
            .with_context(|| format!("invalid square {:?}", name))?;
        match board.piece_at(sq) {
            Some(piece) => writeln!(out, "{}: {}", sq, piece)?,
            None => writeln!(out, "{}: empty", sq)?,
        }
    }

    Ok(())
}
