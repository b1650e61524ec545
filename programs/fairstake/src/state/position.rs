//! User Stake Positions

use anchor_lang::prelude::*;

/// A user's stake in one market
///
/// Seeds: ["position", market, owner]
///
/// Positions are append-only: the stake fields are written exactly once at
/// placement and never edited. The effective stake is always derived from
/// the raw stake, the wallet's reputation and the placement time.
#[account]
#[derive(InitSpace)]
pub struct Position {
    /// Market this position belongs to
    pub market: Pubkey,

    /// Owning wallet
    pub owner: Pubkey,

    /// Selected item, index into the market's option list
    pub item_index: u8,

    /// Stake in base collateral units
    pub raw_stake: u64,

    /// Raw stake scaled by reputation and timing, bounded by the global cap
    pub effective_stake: u64,

    /// Reputation multiplier applied at placement, basis points
    pub reputation_bps: u16,

    /// Timing multiplier applied at placement, basis points
    pub timing_bps: u16,

    /// Unix timestamp of placement
    pub placed_at: i64,

    /// Prevent double-claiming after settlement
    pub claimed: bool,

    /// PDA bump seed
    pub bump: u8,
}

impl Position {
    pub const SEED: &'static [u8] = b"position";
}
