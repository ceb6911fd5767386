//! Matchup win model.

use rand::Rng;
use rand::rngs::StdRng;

use crate::seed::Seed;

/// Exponent applied to a seed's rank to produce its matchup weight.
pub const STRENGTH_EXPONENT: f64 = 1.5;

/// A seed's weight in the matchup draw: `rank^1.5`.
fn weight(seed: Seed) -> f64 {
    f64::from(seed.rank()).powf(STRENGTH_EXPONENT)
}

/// Decide a single game between two seeds, consuming one draw from `rng`.
///
/// A uniform value is drawn over `[0, weight(a) + weight(b))`; `a` wins when
/// the draw lands at or above its own weight. Since weight grows with rank,
/// the numerically larger seed claims the smaller winning slice:
/// `P(a wins) = weight(b) / total`, so upsets become rarer as the rank gap
/// widens.
pub fn decide_winner(a: Seed, b: Seed, rng: &mut StdRng) -> Seed {
    let weight_a = weight(a);
    let weight_b = weight(b);
    let draw = rng.random::<f64>() * (weight_a + weight_b);
    if draw >= weight_a { a } else { b }
}
