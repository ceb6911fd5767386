//! Full-tournament orchestration: four regions, two halves, one final.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::region::{RoundResults, simulate_region};
use crate::render::render;
use crate::seed::Seed;

/// One of the four regional brackets, named for its quadrant on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quadrant {
    /// Upper left region.
    UpperLeft,
    /// Lower left region.
    LowerLeft,
    /// Upper right region.
    UpperRight,
    /// Lower right region.
    LowerRight,
}

impl Quadrant {
    /// Simulation order, which is also the order RNG draws are consumed.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UpperLeft,
        Quadrant::LowerLeft,
        Quadrant::UpperRight,
        Quadrant::LowerRight,
    ];

    /// Full heading printed above the region's bracket tree.
    pub fn name(self) -> &'static str {
        match self {
            Self::UpperLeft => "Upper left quadrant",
            Self::LowerLeft => "Lower left quadrant",
            Self::UpperRight => "Upper right quadrant",
            Self::LowerRight => "Lower right quadrant",
        }
    }

    /// Short label used when reporting half winners.
    pub fn label(self) -> &'static str {
        match self {
            Self::UpperLeft => "Upper left",
            Self::LowerLeft => "Lower left",
            Self::UpperRight => "Upper right",
            Self::LowerRight => "Lower right",
        }
    }
}

/// The two halves of the draw that meet in the final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Half {
    /// Upper and lower left quadrants.
    Left,
    /// Upper and lower right quadrants.
    Right,
}

impl Half {
    /// Label used when reporting the overall winner.
    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "Left half winner",
            Self::Right => "Right half winner",
        }
    }
}

/// Configuration for a tournament run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// RNG seed; the whole run is a pure function of this value.
    pub seed: u64,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl TournamentConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// A completed region: its quadrant and full round-by-round results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionResult {
    /// Which quadrant this region occupied.
    pub quadrant: Quadrant,
    /// The seeds that advanced out of each round.
    pub rounds: RoundResults,
}

impl RegionResult {
    /// The regional champion seed.
    pub fn champion(&self) -> Option<Seed> {
        self.rounds.champion()
    }
}

/// Everything a single tournament run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentOutcome {
    /// The seed the run was replayed from.
    pub seed: u64,
    /// The four regional brackets, in simulation order.
    pub regions: Vec<RegionResult>,
    /// Winner of the semifinal between the two left quadrants.
    pub left_half: Quadrant,
    /// Winner of the semifinal between the two right quadrants.
    pub right_half: Quadrant,
    /// Winner of the final between the two half winners.
    pub overall: Half,
}

impl TournamentOutcome {
    /// Render the run as the line-oriented bracket report.
    ///
    /// Per region: a heading line, then one line per round. After all four
    /// regions: the two half winners, the overall winner, and the seed used,
    /// so the run can be replayed exactly.
    pub fn report(&self) -> String {
        let mut out = String::new();
        for region in &self.regions {
            out.push_str(&format!("{}:\n", region.quadrant.name()));
            out.push_str(&render(&region.rounds));
        }
        out.push_str(&format!("Left half winner: {}\n", self.left_half.label()));
        out.push_str(&format!("Right half winner: {}\n", self.right_half.label()));
        out.push_str(&format!("Overall winner: {}\n", self.overall.label()));
        out.push_str(&format!("Seed used: {}\n", self.seed));
        out
    }
}

/// Runs a whole tournament from one seed value.
///
/// Owns nothing mutable between runs: each [`Tournament::run`] seeds a fresh
/// RNG from the configured value, so repeated runs are byte-identical.
#[derive(Debug, Clone, Default)]
pub struct Tournament {
    config: TournamentConfig,
}

impl Tournament {
    /// Create a tournament from a configuration.
    pub fn new(config: TournamentConfig) -> Self {
        Self { config }
    }

    /// Simulate the four regions, both half games, and the final.
    ///
    /// The stage order is fixed: upper left, lower left, upper right, lower
    /// right, then the left half game, the right half game, and the final.
    /// Each half game and the final consume one coin-flip draw.
    pub fn run(&self) -> TournamentOutcome {
        let mut rng = StdRng::seed_from_u64(self.config.seed);

        let regions = Quadrant::ALL
            .iter()
            .map(|&quadrant| RegionResult {
                quadrant,
                rounds: simulate_region(&mut rng),
            })
            .collect();

        let left_half = if rng.random_range(0..2) == 0 {
            Quadrant::UpperLeft
        } else {
            Quadrant::LowerLeft
        };
        let right_half = if rng.random_range(0..2) == 0 {
            Quadrant::UpperRight
        } else {
            Quadrant::LowerRight
        };
        let overall = if rng.random_range(0..2) == 0 {
            Half::Left
        } else {
            Half::Right
        };

        TournamentOutcome {
            seed: self.config.seed,
            regions,
            left_half,
            right_half,
            overall,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::ROUND_COUNT;

    fn run_with_seed(seed: u64) -> TournamentOutcome {
        Tournament::new(TournamentConfig::default().with_seed(seed)).run()
    }

    #[test]
    fn same_seed_gives_identical_reports() {
        assert_eq!(run_with_seed(42).report(), run_with_seed(42).report());
    }

    #[test]
    fn repeated_runs_of_one_tournament_are_identical() {
        let tournament = Tournament::new(TournamentConfig::default().with_seed(7));
        assert_eq!(tournament.run().report(), tournament.run().report());
    }

    #[test]
    fn different_seeds_give_different_reports() {
        assert_ne!(run_with_seed(1).report(), run_with_seed(2).report());
    }

    #[test]
    fn four_regions_in_quadrant_order() {
        let outcome = run_with_seed(42);
        let quadrants: Vec<Quadrant> = outcome.regions.iter().map(|r| r.quadrant).collect();
        assert_eq!(quadrants, Quadrant::ALL.to_vec());
    }

    #[test]
    fn every_region_is_played_to_a_champion() {
        let outcome = run_with_seed(3);
        for region in &outcome.regions {
            assert_eq!(region.rounds.len() as u32, ROUND_COUNT + 1);
            assert!(region.champion().is_some());
        }
    }

    #[test]
    fn half_winners_come_from_their_half() {
        let outcome = run_with_seed(5);
        assert!(matches!(
            outcome.left_half,
            Quadrant::UpperLeft | Quadrant::LowerLeft
        ));
        assert!(matches!(
            outcome.right_half,
            Quadrant::UpperRight | Quadrant::LowerRight
        ));
    }

    #[test]
    fn report_structure() {
        let report = run_with_seed(42).report();

        for quadrant in Quadrant::ALL {
            assert!(report.contains(&format!("{}:\n", quadrant.name())));
        }
        assert!(report.contains("Left half winner: Upper left")
            || report.contains("Left half winner: Lower left"));
        assert!(report.contains("Right half winner: Upper right")
            || report.contains("Right half winner: Lower right"));
        assert!(report.contains("Overall winner: Left half winner")
            || report.contains("Overall winner: Right half winner"));
        assert!(report.ends_with("Seed used: 42\n"));

        // 4 regions x (1 heading + 5 round lines) + 3 summary lines + seed line.
        assert_eq!(report.lines().count(), 4 * 6 + 4);
    }

    #[test]
    fn headings_precede_summary_lines() {
        let report = run_with_seed(11).report();
        let last_heading = report
            .rfind("Lower right quadrant:")
            .expect("heading present");
        let first_summary = report.find("Left half winner:").expect("summary present");
        assert!(last_heading < first_summary);
    }
}
