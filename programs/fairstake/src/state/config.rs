//! Global Protocol Configuration
//!
//! This account stores protocol-wide settings that apply to all markets,
//! including the stake multiplier policy. Tier thresholds and multipliers are
//! deliberately data, not code: they can be retuned via `update_policy`
//! without touching the stake calculator.

use anchor_lang::prelude::*;

use crate::stake::StakePolicy;

/// Global configuration account (singleton PDA)
///
/// Seeds: ["config"]
#[account]
#[derive(InitSpace)]
pub struct Config {
    /// Protocol administrator with special privileges
    pub admin: Pubkey,

    /// Treasury receiving protocol fees
    pub treasury: Pubkey,

    /// Authority allowed to post wallet reputation scores.
    /// This is the on-chain attestation point for the FairScale
    /// scoring service, which computes scores off-chain.
    pub score_authority: Pubkey,

    /// Collateral token mint (e.g., USDC)
    pub collateral_mint: Pubkey,

    /// Protocol fee in basis points (100 = 1%, max 10000 = 100%)
    pub protocol_fee_bps: u64,

    /// Total markets created (used as incrementing ID)
    pub market_count: u64,

    /// Reputation tier boundaries. Scores below `tier_thresholds[0]` are
    /// Bronze, then Silver, Gold, and Platinum from `tier_thresholds[2]` up.
    pub tier_thresholds: [u32; 3],

    /// Stake multiplier per tier in basis points (10000 = 1.0x),
    /// Bronze through Platinum
    pub tier_multipliers_bps: [u16; 4],

    /// Extra timing multiplier granted at market open, basis points
    pub early_boost_bps: u16,

    /// Ceiling on the combined reputation x timing multiplier, basis points
    pub max_multiplier_bps: u16,

    /// Whether the protocol is paused
    pub paused: bool,

    /// PDA bump seed
    pub bump: u8,
}

impl Config {
    pub const SEED: &'static [u8] = b"config";

    /// The multiplier policy as seen by the stake calculator.
    pub fn stake_policy(&self) -> StakePolicy {
        StakePolicy {
            tier_thresholds: self.tier_thresholds,
            tier_multipliers_bps: self.tier_multipliers_bps,
            early_boost_bps: self.early_boost_bps,
            max_multiplier_bps: self.max_multiplier_bps,
        }
    }
}
