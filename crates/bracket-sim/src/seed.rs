//! Seed ranks and the fixed first-round bracket order.

use serde::{Deserialize, Serialize};

/// A competitor's rank within its region, 1 through 16.
///
/// Seeds are plain identifiers; everything the simulation knows about a
/// competitor is derived from the rank number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seed(u8);

impl Seed {
    /// Create a seed from its rank number.
    pub const fn new(rank: u8) -> Self {
        Self(rank)
    }

    /// The rank number.
    pub const fn rank(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Forward to u8 so width/alignment flags apply to the number itself.
        self.0.fmt(f)
    }
}

/// Standard bracket seeding order for a 16-seed region.
///
/// Adjacent entries are the round-1 matchups: 1v16, 8v9, 4v13, 5v12, 6v11,
/// 3v14, 7v10, 2v15. Shared read-only across all four regions.
pub const BRACKET_ORDER: [Seed; 16] = [
    Seed::new(1),
    Seed::new(16),
    Seed::new(8),
    Seed::new(9),
    Seed::new(4),
    Seed::new(13),
    Seed::new(5),
    Seed::new(12),
    Seed::new(6),
    Seed::new(11),
    Seed::new(3),
    Seed::new(14),
    Seed::new(7),
    Seed::new(10),
    Seed::new(2),
    Seed::new(15),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_honors_width_flags() {
        assert_eq!(format!("{:>2}", Seed::new(1)), " 1");
        assert_eq!(format!("{:>2}", Seed::new(16)), "16");
    }

    #[test]
    fn bracket_order_covers_all_ranks_once() {
        let mut ranks: Vec<u8> = BRACKET_ORDER.iter().map(|s| s.rank()).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (1..=16).collect::<Vec<u8>>());
    }

    #[test]
    fn round_one_matchup_sums() {
        // Standard seeding pairs always sum to 17.
        for pair in BRACKET_ORDER.chunks_exact(2) {
            assert_eq!(pair[0].rank() + pair[1].rank(), 17);
        }
    }
}
