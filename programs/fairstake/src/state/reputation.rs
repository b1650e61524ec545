//! Wallet Reputation Attestations
//!
//! FairScale computes wallet scores off-chain; the protocol's score
//! authority posts them here so stake weighting can read them without
//! trusting the staker. A wallet with no record is unregistered: score 0,
//! Bronze tier, no stake boost.

use anchor_lang::prelude::*;

/// Per-wallet reputation score
///
/// Seeds: ["reputation", wallet]
#[account]
#[derive(InitSpace)]
pub struct ReputationRecord {
    /// Wallet the score belongs to
    pub wallet: Pubkey,

    /// FairScale score, roughly 0..=300+
    pub score: u32,

    /// Unix timestamp of the last refresh
    pub updated_at: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl ReputationRecord {
    pub const SEED: &'static [u8] = b"reputation";
}

/// Reputation bands derived from the configured thresholds
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Tier {
    /// Band a score using the protocol's tier thresholds.
    pub fn from_score(score: u32, thresholds: &[u32; 3]) -> Self {
        if score >= thresholds[2] {
            Tier::Platinum
        } else if score >= thresholds[1] {
            Tier::Gold
        } else if score >= thresholds[0] {
            Tier::Silver
        } else {
            Tier::Bronze
        }
    }

    /// Index into the per-tier multiplier table.
    pub const fn index(self) -> usize {
        match self {
            Tier::Bronze => 0,
            Tier::Silver => 1,
            Tier::Gold => 2,
            Tier::Platinum => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLDS: [u32; 3] = [100, 150, 200];

    #[test]
    fn banding_matches_fairscale_tiers() {
        assert_eq!(Tier::from_score(0, &THRESHOLDS), Tier::Bronze);
        assert_eq!(Tier::from_score(99, &THRESHOLDS), Tier::Bronze);
        assert_eq!(Tier::from_score(100, &THRESHOLDS), Tier::Silver);
        assert_eq!(Tier::from_score(149, &THRESHOLDS), Tier::Silver);
        assert_eq!(Tier::from_score(150, &THRESHOLDS), Tier::Gold);
        assert_eq!(Tier::from_score(199, &THRESHOLDS), Tier::Gold);
        assert_eq!(Tier::from_score(200, &THRESHOLDS), Tier::Platinum);
        assert_eq!(Tier::from_score(350, &THRESHOLDS), Tier::Platinum);
    }
}
