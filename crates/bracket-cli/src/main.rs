//! CLI frontend for the seeded bracket simulator.

use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use bracket_sim::{Tournament, TournamentConfig};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bracket",
    about = "Fill out a 64-team single-elimination tournament bracket",
    version
)]
struct Cli {
    /// RNG seed for a reproducible bracket (default: current time in milliseconds)
    seed: Option<u64>,

    /// Print the outcome as JSON instead of the bracket report
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(time_seed);

    if let Err(e) = run(seed, cli.json) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(seed: u64, json: bool) -> Result<(), String> {
    let tournament = Tournament::new(TournamentConfig::default().with_seed(seed));
    let outcome = tournament.run();

    if json {
        let rendered = serde_json::to_string_pretty(&outcome)
            .map_err(|e| format!("cannot serialize outcome: {e}"))?;
        println!("{rendered}");
    } else {
        print!("{}", outcome.report());
    }
    Ok(())
}

/// Wall-clock milliseconds since the Unix epoch, used when no seed is given.
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
