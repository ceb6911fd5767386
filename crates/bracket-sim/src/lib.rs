//! Seeded single-elimination tournament bracket simulation.
//!
//! Simulates four independent 16-seed regions plus a championship phase and
//! renders each region as an indented ASCII tree. Every random draw comes
//! from a single seeded [`rand::rngs::StdRng`], so a whole tournament replays
//! byte-for-byte from one seed value.

/// Matchup win model: decides single games between two seeds.
pub mod game;
/// Round-by-round elimination within one region.
pub mod region;
/// ASCII rendering of a region's round results.
pub mod render;
/// Seed ranks and the fixed first-round bracket order.
pub mod seed;
/// Full-tournament orchestration: four regions, two halves, one final.
pub mod tournament;

/// Re-export of [`game::decide_winner`].
pub use game::decide_winner;
/// Re-exports of [`region::RoundResults`] and the region driver functions.
pub use region::{ROUND_COUNT, RoundResults, play_round, simulate_region};
/// Re-export of [`render::render`].
pub use render::render;
/// Re-exports of [`seed::Seed`] and [`seed::BRACKET_ORDER`].
pub use seed::{BRACKET_ORDER, Seed};
/// Re-exports of the tournament types.
pub use tournament::{
    Half, Quadrant, RegionResult, Tournament, TournamentConfig, TournamentOutcome,
};
