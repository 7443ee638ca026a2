//! Battle arrangement solver.
//!
//! Decides whether an attacking army can be reordered to win a majority
//! of positional pairings against a fixed defending order.
//!
//! # Usage
//!
//! ```bash
//! # Interactive mode: prompt for both armies on stdin
//! cargo run -p phalanx_cli
//!
//! # Self-test against the canonical duel, verdict in the exit code
//! cargo run -p phalanx_cli -- test
//!
//! # Evaluate explicit armies
//! cargo run -p phalanx_cli -- duel \
//!     --attacker "Spearmen#10;Militia#30;FootArcher#20;LightCavalry#1000;HeavyCavalry#120" \
//!     --defender "Militia#10;Spearmen#10;FootArcher#1000;LightCavalry#120;CavalryArcher#100"
//!
//! # Evaluate a scenario file, JSON verdict on stdout
//! cargo run -p phalanx_cli -- duel --scenario duel.ron --json
//! ```
//!
//! # Exit Codes
//!
//! - `0`: a winning arrangement was found and re-verified
//! - `1`: the exhaustive search proved no winning arrangement exists
//! - `2`: no trustworthy verdict (bad input, unreadable scenario, or a
//!   found arrangement that failed its independent re-check)
//!
//! Verdicts go to stdout; logs go to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use phalanx_cli::{
    interactive::InteractiveSession,
    report::{verdict_code, DuelReport, EXIT_EXHAUSTED, EXIT_FOUND, EXIT_NO_VERDICT},
    scenario::Scenario,
};
use phalanx_core::army::Army;
use phalanx_core::battle::{BattleSimulator, SearchOutcome, DEFAULT_ARITY};

#[derive(Parser)]
#[command(name = "phalanx")]
#[command(about = "Decide whether an army can be arranged to win a majority of pairings")]
#[command(version)]
struct Cli {
    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for both armies and search interactively
    Interactive {
        /// Platoons per side, at most one per unit class
        #[arg(short, long, default_value_t = DEFAULT_ARITY)]
        arity: usize,
    },

    /// Run the canonical duel and report through the exit code
    Test,

    /// Evaluate a duel from explicit armies or a scenario file
    Duel {
        /// Attacking army, e.g. "Spearmen#10;Militia#30;..."
        #[arg(short, long, requires = "defender", conflicts_with = "scenario")]
        attacker: Option<String>,

        /// Defending army in its fixed order
        #[arg(short, long, requires = "attacker", conflicts_with = "scenario")]
        defender: Option<String>,

        /// Scenario file (RON) describing the duel
        #[arg(short, long)]
        scenario: Option<PathBuf>,

        /// Platoons per side when armies are given inline
        #[arg(long, default_value_t = DEFAULT_ARITY)]
        arity: usize,

        /// Print a one-line JSON verdict on stdout
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging to stderr (stdout is for verdicts)
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    let code = match cli.command {
        Some(Commands::Interactive { arity }) => cmd_interactive(arity),
        Some(Commands::Test) => cmd_test(),
        Some(Commands::Duel {
            attacker,
            defender,
            scenario,
            arity,
            json,
        }) => cmd_duel(attacker, defender, scenario, arity, json),
        None => {
            // Default: interactive mode
            cmd_interactive(DEFAULT_ARITY)
        }
    };

    std::process::exit(code);
}

/// Prompt for both armies on stdin and search.
fn cmd_interactive(arity: usize) -> i32 {
    tracing::info!(arity, "Starting interactive session");

    match InteractiveSession::stdio(arity).run() {
        Ok(Some(outcome)) => {
            if outcome.is_found() {
                EXIT_FOUND
            } else {
                EXIT_EXHAUSTED
            }
        }
        Ok(None) => EXIT_NO_VERDICT,
        Err(e) => {
            eprintln!("Session aborted: {}", e);
            EXIT_NO_VERDICT
        }
    }
}

/// Run the canonical duel; the exit code is the verdict.
fn cmd_test() -> i32 {
    tracing::info!("Running self-test duel");
    evaluate(&Scenario::sample_duel().to_battle(), false)
}

/// Evaluate one duel from explicit armies, a scenario file, or the
/// canonical sample when neither is given.
fn cmd_duel(
    attacker: Option<String>,
    defender: Option<String>,
    scenario: Option<PathBuf>,
    arity: usize,
    json: bool,
) -> i32 {
    let battle = if let Some(path) = scenario {
        // The scenario carries its own arity; the --arity flag only
        // applies to inline armies.
        match Scenario::load(&path) {
            Ok(scenario) => {
                tracing::info!(name = %scenario.name, "Loaded scenario");
                scenario.to_battle()
            }
            Err(e) => {
                if json {
                    print!("{}", DuelReport::error(e.to_string()).to_json_line());
                } else {
                    eprintln!("{}", e);
                }
                return EXIT_NO_VERDICT;
            }
        }
    } else if let (Some(attacker), Some(defender)) = (&attacker, &defender) {
        BattleSimulator::new(Army::parse(attacker), Army::parse(defender), arity)
    } else {
        tracing::debug!("No armies given, using the canonical duel");
        Scenario::sample_duel().to_battle()
    };

    evaluate(&battle, json)
}

/// Run the search, print the verdict, and map it to an exit code.
fn evaluate(battle: &BattleSimulator, json: bool) -> i32 {
    let outcome = match battle.find_winning_arrangement() {
        Ok(outcome) => outcome,
        Err(e) => {
            if json {
                print!("{}", DuelReport::error(e.to_string()).to_json_line());
            } else {
                eprintln!("{}", e);
            }
            return EXIT_NO_VERDICT;
        }
    };

    if json {
        print!(
            "{}",
            DuelReport::from_outcome(battle, &outcome).to_json_line()
        );
    } else {
        print_verdict(battle, &outcome);
    }

    verdict_code(battle, &outcome)
}

/// Print the human-readable verdict on stdout.
fn print_verdict(battle: &BattleSimulator, outcome: &SearchOutcome) {
    match outcome.arrangement() {
        Some(arrangement) => {
            println!("Winning arrangement found:");
            println!("  attacker: {}", arrangement.ordering);
            println!("  defender: {}", battle.defender());
            println!(
                "  wins: {} of {} pairings (needed {})",
                arrangement.wins,
                battle.arity(),
                battle.threshold()
            );
            println!(
                "  orderings examined: {}",
                outcome.stats.orderings_examined
            );
        }
        None => {
            println!(
                "No winning arrangement: examined all {} orderings, none wins enough pairings.",
                outcome.stats.orderings_examined
            );
        }
    }
}
