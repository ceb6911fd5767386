//! Round-by-round elimination within one region.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::game::decide_winner;
use crate::seed::{BRACKET_ORDER, Seed};

/// Rounds played in a region: log2 of the field size, so 4 for 16 seeds.
pub const ROUND_COUNT: u32 = (BRACKET_ORDER.len() as u32).ilog2();

/// Per-region record of which seeds advanced out of each round.
///
/// Round 0 is the unplayed bracket order; round `r` holds the winners of the
/// games played among round `r - 1`'s survivors, in pairing order. Rounds are
/// recorded contiguously from 0, and the sequence at round `r` has
/// `16 / 2^r` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundResults {
    rounds: BTreeMap<u32, Vec<Seed>>,
}

impl RoundResults {
    /// Create an empty results table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The advancing seeds for a round, if that round has been recorded.
    pub fn round(&self, round: u32) -> Option<&[Seed]> {
        self.rounds.get(&round).map(Vec::as_slice)
    }

    /// Number of rounds recorded, including round 0.
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// True when no rounds have been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// The regional champion: the sole survivor of the last recorded round.
    ///
    /// Returns `None` until the final round has been played down to one seed.
    pub fn champion(&self) -> Option<Seed> {
        let (_, survivors) = self.rounds.last_key_value()?;
        match survivors.as_slice() {
            [champion] => Some(*champion),
            _ => None,
        }
    }

    /// Record a round's advancing seeds.
    pub(crate) fn record(&mut self, round: u32, seeds: Vec<Seed>) {
        self.rounds.insert(round, seeds);
    }
}

/// Play a region up to and including `round`, filling in earlier rounds that
/// have not been played yet.
///
/// Round 0 just records [`BRACKET_ORDER`]; no games are played. For a later
/// round, the previous round's survivors are paired in order (positions 0-1,
/// 2-3, ...) and each game's winner advances. Once a round holds a single
/// seed the region is decided and deeper rounds are not recorded.
pub fn play_round(results: &mut RoundResults, round: u32, rng: &mut StdRng) {
    if round == 0 {
        if results.round(0).is_none() {
            results.record(0, BRACKET_ORDER.to_vec());
        }
        return;
    }

    if results.round(round - 1).is_none() {
        play_round(results, round - 1, rng);
    }

    let Some(survivors) = results.round(round - 1) else {
        // The region was already decided at an earlier round.
        return;
    };
    if survivors.len() == 1 {
        return;
    }

    let winners: Vec<Seed> = survivors
        .chunks_exact(2)
        .map(|pair| decide_winner(pair[0], pair[1], rng))
        .collect();
    results.record(round, winners);
}

/// Simulate one region from the initial bracket through its final round.
///
/// Starts from a fresh results table each call; the shared `rng` carries its
/// state across regions so a full tournament replays from a single seed.
pub fn simulate_region(rng: &mut StdRng) -> RoundResults {
    let mut results = RoundResults::new();
    play_round(&mut results, ROUND_COUNT, rng);
    results
}
