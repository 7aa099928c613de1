use std::collections::BTreeMap;
use std::time::Instant;

use clap::Parser;

use holdem_ranker::domain::Deck;
use holdem_ranker::engine::{Deal, RandomSource};
use holdem_ranker::eval::{compare_display, HandCategory};
use holdem_ranker::infra::{init_logging, DeterministicRng, LogLevel, RankerConfig, SystemRng};

/// Стресс-прогон: случайные раздачи из перемешанной колоды.
#[derive(Parser, Debug)]
#[command(name = "ranker_stress")]
#[command(about = "Rank random deals and report throughput and category counts")]
struct Cli {
    /// Number of deals to generate
    #[arg(long, default_value_t = 100_000)]
    deals: usize,

    /// Hands per deal (2..=23 fit a single deck)
    #[arg(long, default_value_t = 9)]
    players: usize,

    /// Seed for a reproducible run (system RNG otherwise)
    #[arg(long)]
    seed: Option<u64>,

    /// Evaluate deals with at least this many hands in parallel
    #[arg(long)]
    parallel_threshold: Option<usize>,
}

/// Максимум рук из одной колоды: 52 - 5 карт борда, по 2 на руку.
const MAX_PLAYERS: usize = (52 - 5) / 2;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(LogLevel::Info) {
        eprintln!("[STRESS] логгер не инициализирован: {e}");
    }

    let players = cli.players.clamp(1, MAX_PLAYERS);
    let mut config = RankerConfig::default();
    if let Some(threshold) = cli.parallel_threshold {
        config.parallel_threshold = threshold;
    }

    log::info!("[STRESS] {} раздач по {} рук", cli.deals, players);

    let start = Instant::now();
    let histogram = match cli.seed {
        Some(seed) => {
            let mut rng = DeterministicRng::from_seed(seed);
            log::info!("[STRESS] воспроизводимый прогон, seed = {}", rng.seed());
            stress(&mut rng, cli.deals, players, &config)
        }
        None => stress(&mut SystemRng, cli.deals, players, &config),
    };
    let elapsed = start.elapsed();

    let total_hands = (cli.deals * players) as f64;
    println!();
    println!("=========== STRESS TEST SUMMARY ===========");
    println!("Раздач: {}, рук: {}", cli.deals, total_hands);
    println!("Время: {:.3} с", elapsed.as_secs_f64());
    if elapsed.as_secs_f64() > 0.0 {
        println!("Рук в секунду: {:.0}", total_hands / elapsed.as_secs_f64());
    }
    for category in HandCategory::ALL {
        let count = histogram.get(&category.strength()).copied().unwrap_or(0);
        println!(
            "{:<16} {:>10} ({:.3}%)",
            category.describe(),
            count,
            100.0 * count as f64 / total_hands.max(1.0)
        );
    }
    println!("===========================================");
}

/// Прогнать `deals` случайных раздач; вернуть счётчик категорий по силе.
fn stress<R: RandomSource>(
    rng: &mut R,
    deals: usize,
    players: usize,
    config: &RankerConfig,
) -> BTreeMap<u8, u64> {
    let mut histogram: BTreeMap<u8, u64> = BTreeMap::new();

    for n in 0..deals {
        let Some(deal) = random_deal(rng, players) else {
            log::error!("[STRESS] раздача {n}: в колоде не хватило карт");
            continue;
        };

        let ranked = deal.rank(config);

        // порядок вывода строгий — соседей с Equal быть не может
        if ranked
            .hands
            .windows(2)
            .any(|w| compare_display(&w[0], &w[1]).is_ge())
        {
            log::error!("[STRESS] раздача {n}: нарушен порядок вывода ({})", deal.board);
        }

        for hand in &ranked.hands {
            *histogram.entry(hand.evaluated.category().strength()).or_default() += 1;
        }
    }

    histogram
}

fn random_deal<R: RandomSource>(rng: &mut R, players: usize) -> Option<Deal> {
    let mut deck = Deck::standard_52();
    rng.shuffle(&mut deck.cards);

    let board = deck.draw_board()?;
    let holes = (0..players)
        .map(|_| deck.draw_hole())
        .collect::<Option<Vec<_>>>()?;

    Some(Deal { board, holes })
}
