use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sweeper_core::{CellCount, Coord, GameSession, Reply};

use crate::input::Input;
use crate::settings::Settings;

mod input;
mod render;
mod settings;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Read settings from a TOML file, command line flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board side length
    #[arg(long)]
    size: Option<Coord>,

    /// Fraction of cells holding a mine
    #[arg(long, conflicts_with = "mines")]
    ratio: Option<f64>,

    /// Exact number of mines
    #[arg(long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl From<&Args> for Settings {
    fn from(args: &Args) -> Self {
        Self {
            size: args.size,
            ratio: args.ratio,
            mines: args.mines,
            seed: args.seed,
        }
    }
}

fn init_logging(verbose: &clap_verbosity_flag::Verbosity) {
    use tracing_subscriber::filter::LevelFilter;

    let level = match verbose.log_level_filter() {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };

    // also picks up records from the `log` facade
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose);

    let file_settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let settings = file_settings.merge(Settings::from(&args));
    let config = settings.game_config()?;
    log::debug!("seed: {:?}", settings.seed);

    let mut session = match settings.seed {
        Some(seed) => GameSession::with_seed(seed),
        None => GameSession::new(),
    };
    let started = session.start(config).context("Could not start game")?;
    log::info!(
        "{}x{} board with {} mines",
        config.size,
        config.size,
        started.mine_count
    );

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}\n> ", render::render(&session))?;
    stdout.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read input")?;
        match input::parse(&line) {
            Ok(Input::Quit) => break,
            Ok(Input::Help) => writeln!(stdout, "{}", input::HELP)?,
            Ok(Input::Command(command)) => {
                let reply = session.dispatch(command)?;
                log::debug!("{:?} -> {:?}", command, reply);
                if let Reply::Revealed(reveal) = reply
                    && reveal.status.is_finished()
                    && reveal.has_update()
                {
                    writeln!(stdout, "Game over, type n for a new game")?;
                }
            }
            Err(err) => writeln!(stdout, "{err}")?,
        }
        write!(stdout, "{}\n> ", render::render(&session))?;
        stdout.flush()?;
    }

    Ok(())
}
