use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four_search::ai::{Agent, RandomAgent, SearchAgent};
use connect_four_search::arena::{Arena, MatchReport};
use connect_four_search::config::AppConfig;
use connect_four_search::error::SearchError;
use connect_four_search::search::{DepthLimit, Strategy};

/// Pit two agents against each other for a number of games.
#[derive(Parser)]
#[command(name = "duel", about = "Play Connect Four agents against each other")]
struct Cli {
    /// First agent: minimax, alphabeta, expectimax or random
    #[arg(long, default_value = "alphabeta")]
    a: AgentKind,

    /// Second agent: minimax, alphabeta, expectimax or random
    #[arg(long, default_value = "random")]
    b: AgentKind,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override search depth (plies)
    #[arg(long, allow_negative_numbers = true)]
    depth: Option<i64>,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override the random agents' seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy)]
enum AgentKind {
    Search(Strategy),
    Random,
}

impl FromStr for AgentKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("random") {
            Ok(AgentKind::Random)
        } else {
            s.parse().map(AgentKind::Search)
        }
    }
}

fn build_agent(kind: AgentKind, config: &AppConfig, seed: Option<u64>) -> Box<dyn Agent> {
    match kind {
        AgentKind::Search(strategy) => Box::new(SearchAgent::with_heuristic(
            strategy,
            config.search.depth_limit(),
            config.search.heuristic(),
        )),
        AgentKind::Random => match seed {
            Some(seed) => Box::new(RandomAgent::with_seed(seed)),
            None => Box::new(RandomAgent::new()),
        },
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        config.search.depth = DepthLimit::try_from(depth)?.get();
    }
    if let Some(games) = cli.games {
        config.arena.games = games;
    }
    if let Some(seed) = cli.seed {
        config.arena.seed = Some(seed);
    }
    config.validate().context("validating overrides")?;

    let board = config.board.build().context("building board")?;
    let arena = Arena::new(config.arena.games, board);

    // Distinct seeds so two random agents do not mirror each other.
    let seed = config.arena.seed;
    let mut a = build_agent(cli.a, &config, seed);
    let mut b = build_agent(cli.b, &config, seed.map(|s| s.wrapping_add(1)));

    if !cli.json {
        println!(
            "{} vs {} on a {}x{} board, {} games",
            a.name(),
            b.name(),
            config.board.rows,
            config.board.cols,
            config.arena.games
        );
        println!("-------------------------------------------");
    }

    let report = arena.run(a.as_mut(), b.as_mut()).context("playing match")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &MatchReport) {
    println!(
        "{:<32} wins: {:>4} ({:.1}%)",
        report.agent_a,
        report.a_wins,
        report.win_rate_a * 100.0
    );
    println!(
        "{:<32} wins: {:>4} ({:.1}%)",
        report.agent_b,
        report.b_wins,
        report.win_rate_b * 100.0
    );
    println!(
        "{:<32}       {:>4} ({:.1}%)",
        "draws",
        report.draws,
        report.draw_rate * 100.0
    );
    if report.forfeits > 0 {
        println!("forfeits: {}", report.forfeits);
    }
    println!("-------------------------------------------");
    println!(
        "{} games, average length {:.1} moves",
        report.games, report.average_game_length
    );
}
