use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;

use holdem_ranker::engine::run;
use holdem_ranker::infra::{init_logging, OutputFormat, RankerConfig, SortOrder};

/// Читает раздачи построчно и печатает руки в порядке силы.
///
/// Формат строки: `4cKs4h8s7s Ad4s Ac4d As9s KhKd 5d6d`
/// (борд из 5 карт без пробелов, затем руки по 4 символа).
#[derive(Parser, Debug)]
#[command(name = "holdem_ranker")]
#[command(about = "Rank Texas Hold'em hands against a shared board")]
struct Cli {
    /// Print total processing time (seconds) after the last line
    #[arg(long)]
    timed: bool,

    /// JSON config file (see RankerConfig); flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read deals from a file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// One JSON object per deal instead of the text format
    #[arg(long)]
    json: bool,

    /// Strongest hand first (default: weakest first)
    #[arg(long)]
    strongest_first: bool,

    /// Evaluate deals with at least this many hands in parallel
    #[arg(long)]
    parallel_threshold: Option<usize>,

    /// More logging on stderr (-v, -vv, ...)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Флаги CLI поверх конфига.
    fn apply(&self, mut config: RankerConfig) -> RankerConfig {
        if self.timed {
            config.timed = true;
        }
        if self.json {
            config.output = OutputFormat::Json;
        }
        if self.strongest_first {
            config.order = SortOrder::StrongestFirst;
        }
        if let Some(threshold) = self.parallel_threshold {
            config.parallel_threshold = threshold;
        }
        config.log_level = config.log_level.raised_by(self.verbose);
        config
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => RankerConfig::load(path)?,
        None => RankerConfig::default(),
    };
    let config = cli.apply(base);

    if let Err(e) = init_logging(config.log_level) {
        eprintln!("[holdem_ranker] логгер не инициализирован: {e}");
    }
    log::debug!("конфиг: {:?}", config);

    let stdout = io::stdout().lock();
    let stats = match &cli.input {
        Some(path) => run(BufReader::new(File::open(path)?), stdout, &config)?,
        None => run(io::stdin().lock(), stdout, &config)?,
    };

    log::info!("готово: {} строк, {} пропущено", stats.lines, stats.skipped);
    Ok(())
}
