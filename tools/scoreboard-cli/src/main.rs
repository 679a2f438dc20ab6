use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use scoreboard::{LoggingInterceptor, Scoreboard, ScoreboardConfig, TieBreak};
use scoreboard_cli::{console::Console, demo, replay};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scoreboard-cli", version, about = "Live scoreboard of ongoing matches")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Ordering among matches with the same total score (overrides the config file)
    #[arg(long, value_enum, global = true)]
    tie_break: Option<TieBreakArg>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the scoreboard with the interactive console (default)
    Console,
    /// Run a seeded demo without user interaction
    Demo,
    /// Apply newline-delimited JSON events from a file and print the summary
    Replay {
        /// Event feed, one JSON event per line
        path: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TieBreakArg {
    MostRecentFirst,
    EarliestFirst,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::MostRecentFirst => TieBreak::MostRecentFirst,
            TieBreakArg::EarliestFirst => TieBreak::EarliestFirst,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the console and summaries own stdout
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let board = build_board(&cli)?;

    match cli.command.unwrap_or(Command::Console) {
        Command::Console => {
            let stdin = io::stdin();
            Console::new(&board, stdin.lock(), io::stdout()).run()?;
        }
        Command::Demo => demo::run_demo(&board, &mut io::stdout())?,
        Command::Replay { path } => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open event feed {}", path.display()))?;
            replay::replay_events(&board, BufReader::new(file))
                .with_context(|| format!("failed to read event feed {}", path.display()))?;
            println!("{}", board.summary());
        }
    }

    Ok(())
}

fn build_board(cli: &Cli) -> Result<Scoreboard> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ScoreboardConfig::default(),
    };
    if let Some(tie_break) = cli.tie_break {
        config = config.with_tie_break(tie_break.into());
    }

    let mut board = Scoreboard::with_config(config);
    board.register_interceptor(LoggingInterceptor);
    Ok(board)
}

fn load_config(path: &Path) -> Result<ScoreboardConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    ScoreboardConfig::from_json_str(&raw)
        .with_context(|| format!("invalid config {}", path.display()))
}
