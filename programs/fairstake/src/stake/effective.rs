//! # Effective Stake Calculator
//!
//! Computes the weight a position carries at settlement.
//!
//! ## The Core Formula
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                                                              │
//! │   effective = raw * min(rep * timing, CAP)                  │
//! │                                                              │
//! │   Where (all in basis points, 10_000 = 1.0x):               │
//! │   • rep    = step function of the wallet's FairScale tier   │
//! │   • timing = linear decay over the market window            │
//! │   • CAP    = combined ceiling (default 30_000 = 3x)         │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Reputation Multiplier
//!
//! A step function over the configured tiers:
//!
//! ```text
//! score:       0 ......... 100 ......... 150 ......... 200 .........
//! tier:          Bronze   |   Silver    |    Gold     |  Platinum
//! multiplier:    1.00x    |   1.20x     |   1.50x     |   2.00x      (default policy)
//! ```
//!
//! Monotonic non-decreasing in the score as long as the policy passes
//! [`StakePolicy::validate`].
//!
//! ## Timing Multiplier
//!
//! Rewards early conviction: starts at `1.0x + early_boost` the moment the
//! window opens and decays linearly to exactly 1.0x at `end_ts`:
//!
//! ```text
//! timing(now) = 10_000 + early_boost * (end - now) / (end - start)
//! ```
//!
//! `now` outside `[start_ts, end_ts]` is clamped, so the multiplier is
//! defined (and monotonic non-increasing) for any timestamp.
//!
//! ## Guarantees
//!
//! For any validated policy and `raw > 0`:
//!
//! ```text
//! raw <= effective <= raw * CAP / 10_000
//! ```

use anchor_lang::prelude::*;

use crate::state::Tier;

/// Errors specific to the effective stake calculation
#[error_code]
pub enum StakeError {
    #[msg("Stake amount must be greater than zero")]
    ZeroStake,
    #[msg("Market window is empty or inverted")]
    InvalidWindow,
    #[msg("Arithmetic overflow")]
    Overflow,
    #[msg("Tier thresholds must be strictly increasing")]
    UnsortedThresholds,
    #[msg("Tier multipliers must be at least 1x and non-decreasing")]
    InvalidTierMultipliers,
    #[msg("Early boost exceeds the supported range")]
    BoostTooLarge,
    #[msg("Combined multiplier cap must be at least 1x")]
    CapTooLow,
}

/// Basis point scale: 10_000 = 1.0x
pub const BPS: u64 = 10_000;

/// Tunable multiplier policy, sourced from the global config
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StakePolicy {
    /// Tier boundaries: Bronze below `[0]`, Platinum from `[2]` up
    pub tier_thresholds: [u32; 3],
    /// Multiplier per tier, Bronze through Platinum, basis points
    pub tier_multipliers_bps: [u16; 4],
    /// Extra timing multiplier at market open, basis points
    pub early_boost_bps: u16,
    /// Ceiling on the combined multiplier, basis points
    pub max_multiplier_bps: u16,
}

impl Default for StakePolicy {
    /// Launch policy: Bronze 1.0x, Silver 1.2x, Gold 1.5x, Platinum 2.0x,
    /// up to +0.5x for the earliest stakes, 3x combined ceiling.
    fn default() -> Self {
        Self {
            tier_thresholds: [100, 150, 200],
            tier_multipliers_bps: [10_000, 12_000, 15_000, 20_000],
            early_boost_bps: 5_000,
            max_multiplier_bps: 30_000,
        }
    }
}

impl StakePolicy {
    /// Reputation multiplier for a score: a step over the configured tiers.
    pub fn reputation_multiplier_bps(&self, score: u32) -> u16 {
        self.tier_multipliers_bps[Tier::from_score(score, &self.tier_thresholds).index()]
    }

    /// Check the invariants the calculator relies on. Called whenever the
    /// policy is written on-chain.
    pub fn validate(&self) -> Result<()> {
        require!(
            self.tier_thresholds[0] < self.tier_thresholds[1]
                && self.tier_thresholds[1] < self.tier_thresholds[2],
            StakeError::UnsortedThresholds
        );
        require!(
            self.tier_multipliers_bps[0] as u64 >= BPS
                && self
                    .tier_multipliers_bps
                    .windows(2)
                    .all(|w| w[0] <= w[1]),
            StakeError::InvalidTierMultipliers
        );
        // 10_000 + boost must stay representable in u16.
        require!(
            self.early_boost_bps <= u16::MAX - BPS as u16,
            StakeError::BoostTooLarge
        );
        require!(
            self.max_multiplier_bps as u64 >= BPS,
            StakeError::CapTooLow
        );
        Ok(())
    }
}

/// Result of weighting one stake
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeightedStake {
    pub effective_stake: u64,
    pub reputation_bps: u16,
    pub timing_bps: u16,
}

/// Timing multiplier for a stake placed at `now` within `[start_ts, end_ts]`
///
/// Linear decay from `1.0x + early_boost` at the window open down to exactly
/// 1.0x at `end_ts`. Timestamps outside the window are clamped.
pub fn timing_multiplier_bps(
    start_ts: i64,
    end_ts: i64,
    now: i64,
    early_boost_bps: u16,
) -> Result<u16> {
    require!(end_ts > start_ts, StakeError::InvalidWindow);

    let span = (end_ts - start_ts) as u128;
    let clamped = now.clamp(start_ts, end_ts);
    let remaining = (end_ts - clamped) as u128;

    let boost = (early_boost_bps as u128)
        .checked_mul(remaining)
        .ok_or(StakeError::Overflow)?
        / span;

    u16::try_from(BPS as u128 + boost).map_err(|_| error!(StakeError::Overflow))
}

/// Compute the effective stake for `raw_stake` placed at `now`
///
/// Pure over its inputs: the caller resolves the wallet's score (or the
/// unregistered default) and the market window before calling.
pub fn compute_effective_stake(
    raw_stake: u64,
    score: u32,
    start_ts: i64,
    end_ts: i64,
    now: i64,
    policy: &StakePolicy,
) -> Result<WeightedStake> {
    require!(raw_stake > 0, StakeError::ZeroStake);

    let reputation_bps = policy.reputation_multiplier_bps(score);
    let timing_bps = timing_multiplier_bps(start_ts, end_ts, now, policy.early_boost_bps)?;

    let combined = (reputation_bps as u128)
        .checked_mul(timing_bps as u128)
        .ok_or(StakeError::Overflow)?
        / BPS as u128;
    let combined = combined.min(policy.max_multiplier_bps as u128);

    let effective = (raw_stake as u128)
        .checked_mul(combined)
        .ok_or(StakeError::Overflow)?
        / BPS as u128;

    Ok(WeightedStake {
        effective_stake: u64::try_from(effective).map_err(|_| error!(StakeError::Overflow))?,
        reputation_bps,
        timing_bps,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 1_000;
    const END: i64 = 11_000;

    fn compute(raw: u64, score: u32, now: i64) -> WeightedStake {
        compute_effective_stake(raw, score, START, END, now, &StakePolicy::default()).unwrap()
    }

    #[test]
    fn reputation_multiplier_is_monotonic() {
        let policy = StakePolicy::default();
        let scores = [0u32, 50, 99, 100, 120, 149, 150, 199, 200, 250, 300];
        for pair in scores.windows(2) {
            assert!(
                policy.reputation_multiplier_bps(pair[0])
                    <= policy.reputation_multiplier_bps(pair[1])
            );
        }
        assert_eq!(policy.reputation_multiplier_bps(0), 10_000);
        assert_eq!(policy.reputation_multiplier_bps(120), 12_000);
        assert_eq!(policy.reputation_multiplier_bps(175), 15_000);
        assert_eq!(policy.reputation_multiplier_bps(200), 20_000);
    }

    #[test]
    fn timing_multiplier_decays_to_one() {
        // Non-increasing as now advances, maximal at the open, 1.0x at the end.
        let mut last = u16::MAX;
        for now in (START..=END).step_by(500) {
            let bps = timing_multiplier_bps(START, END, now, 5_000).unwrap();
            assert!(bps <= last);
            last = bps;
        }
        assert_eq!(timing_multiplier_bps(START, END, START, 5_000).unwrap(), 15_000);
        assert_eq!(timing_multiplier_bps(START, END, END, 5_000).unwrap(), 10_000);
    }

    #[test]
    fn timing_clamps_outside_window() {
        // Before the open the multiplier is pinned at its maximum, after the
        // end at exactly 1.0x.
        assert_eq!(
            timing_multiplier_bps(START, END, START - 500, 5_000).unwrap(),
            15_000
        );
        assert_eq!(
            timing_multiplier_bps(START, END, END + 500, 5_000).unwrap(),
            10_000
        );
    }

    #[test]
    fn inverted_window_rejected() {
        assert_eq!(
            timing_multiplier_bps(END, START, START, 5_000),
            Err(StakeError::InvalidWindow.into())
        );
        assert_eq!(
            timing_multiplier_bps(START, START, START, 5_000),
            Err(StakeError::InvalidWindow.into())
        );
    }

    #[test]
    fn zero_stake_rejected() {
        assert_eq!(
            compute_effective_stake(0, 120, START, END, START, &StakePolicy::default()),
            Err(StakeError::ZeroStake.into())
        );
    }

    #[test]
    fn effective_stays_within_bounds() {
        // raw <= effective <= 3 * raw for every score/timing combination.
        for raw in [1u64, 999, 1_000_000_000] {
            for score in [0u32, 100, 150, 200, 300] {
                for now in [START - 10, START, START + 4_000, END - 1, END + 10] {
                    let w = compute(raw, score, now);
                    assert!(w.effective_stake >= raw);
                    assert!(w.effective_stake <= raw * 3);
                }
            }
        }
    }

    #[test]
    fn silver_stake_at_open() {
        // raw 1000, score 120 (Silver 1.2x), placed the moment the window
        // opens (timing 1.5x): effective = 1000 * 1.8 = 1800, under the cap.
        let w = compute(1_000, 120, START);
        assert_eq!(w.reputation_bps, 12_000);
        assert_eq!(w.timing_bps, 15_000);
        assert_eq!(w.effective_stake, 1_800);
    }

    #[test]
    fn platinum_at_open_hits_the_cap() {
        // 2.0x * 1.5x = 3.0x = exactly the default ceiling.
        let w = compute(1_000, 250, START);
        assert_eq!(w.effective_stake, 3_000);

        // A hotter policy clamps instead of exceeding 3x.
        let policy = StakePolicy {
            tier_multipliers_bps: [10_000, 12_000, 15_000, 25_000],
            early_boost_bps: 10_000,
            ..StakePolicy::default()
        };
        let w = compute_effective_stake(1_000, 250, START, END, START, &policy).unwrap();
        assert_eq!(w.effective_stake, 3_000);
    }

    #[test]
    fn late_bronze_stake_is_unscaled() {
        // Minimum tier at the very end of the window: exactly 1.0x.
        let w = compute(1_234, 0, END);
        assert_eq!(w.effective_stake, 1_234);
    }

    #[test]
    fn effective_rounds_down() {
        // 3 * 1.8 = 5.4 -> 5 in integer units.
        let w = compute(3, 120, START);
        assert_eq!(w.effective_stake, 5);
    }

    #[test]
    fn large_stakes_do_not_overflow() {
        let w = compute(u64::MAX / 4, 200, START + 5_000);
        assert!(w.effective_stake >= u64::MAX / 4);
    }

    #[test]
    fn policy_validation() {
        assert!(StakePolicy::default().validate().is_ok());

        let unsorted = StakePolicy {
            tier_thresholds: [150, 100, 200],
            ..StakePolicy::default()
        };
        assert_eq!(
            unsorted.validate(),
            Err(StakeError::UnsortedThresholds.into())
        );

        let sub_one = StakePolicy {
            tier_multipliers_bps: [9_000, 12_000, 15_000, 20_000],
            ..StakePolicy::default()
        };
        assert_eq!(
            sub_one.validate(),
            Err(StakeError::InvalidTierMultipliers.into())
        );

        let decreasing = StakePolicy {
            tier_multipliers_bps: [10_000, 15_000, 12_000, 20_000],
            ..StakePolicy::default()
        };
        assert_eq!(
            decreasing.validate(),
            Err(StakeError::InvalidTierMultipliers.into())
        );

        let low_cap = StakePolicy {
            max_multiplier_bps: 9_999,
            ..StakePolicy::default()
        };
        assert_eq!(low_cap.validate(), Err(StakeError::CapTooLow.into()));
    }
}
