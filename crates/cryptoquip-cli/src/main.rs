mod puzzle_file;
mod render;
mod words;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use cryptoquip_core::{ShapeDict, Solver, SolverConfig};
use env_logger::Env;

/// Solve a cryptoquip (monoalphabetic substitution cipher) puzzle
/// against a cleartext dictionary.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Cleartext dictionary, one word per line
    #[arg(short, long, default_value = "/usr/share/dict/words")]
    dictionary: PathBuf,

    /// Puzzle file name
    #[arg(short, long)]
    puzzle: PathBuf,

    /// Number of cycles to attempt
    #[arg(short, long, default_value_t = 4)]
    cycles: usize,

    /// Forbid a cipher letter from decoding to itself
    #[arg(long)]
    no_identity: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let word_list = words::load(&args.dictionary)
        .with_context(|| format!("reading dictionary {}", args.dictionary.display()))?;
    let dictionary = ShapeDict::build(word_list);

    let puzzle = puzzle_file::load(&args.puzzle)
        .with_context(|| format!("reading puzzle {}", args.puzzle.display()))?;

    render::preamble(&puzzle);

    let solver = Solver::with_config(SolverConfig {
        max_cycles: args.cycles,
        forbid_identity: args.no_identity,
    });
    let report = solver.solve(&puzzle, &dictionary);

    render::report(&puzzle, &report);

    Ok(())
}
