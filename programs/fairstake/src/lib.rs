//! # FairStake: Reputation-Weighted Prediction Markets
//!
//! A prediction market protocol on Solana where a position's weight is its
//! **effective stake**: the raw stake scaled by the wallet's FairScale
//! reputation tier and by how early in the market window the stake was
//! placed, capped at 3x combined.
//!
//! ## Market lifecycle
//!
//! Markets move strictly `Draft -> Open -> Closed -> Settled`. Opening and
//! settlement are admin-gated and time-gated; closing is time-gated only,
//! so anyone may crank a market shut once its window has passed.

use anchor_lang::prelude::*;

pub mod instructions;
pub mod stake;
pub mod state;

pub use instructions::*;
pub use stake::*;

// Replace with your deployed program ID
declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

/// Main FairStake program
#[program]
pub mod fairstake {
    use super::*;

    /// Initialize the protocol with global configuration (idempotent)
    pub fn initialize(
        ctx: Context<Initialize>,
        treasury: Pubkey,
        score_authority: Pubkey,
        protocol_fee_bps: u64,
    ) -> Result<()> {
        ctx.accounts
            .initialize(treasury, score_authority, protocol_fee_bps, &ctx.bumps)
    }

    /// Tune the stake multiplier policy and protocol fee (admin only)
    pub fn update_policy(
        ctx: Context<UpdatePolicy>,
        protocol_fee_bps: Option<u64>,
        tier_thresholds: Option<[u32; 3]>,
        tier_multipliers_bps: Option<[u16; 4]>,
        early_boost_bps: Option<u16>,
        max_multiplier_bps: Option<u16>,
    ) -> Result<()> {
        ctx.accounts.update_policy(
            protocol_fee_bps,
            tier_thresholds,
            tier_multipliers_bps,
            early_boost_bps,
            max_multiplier_bps,
        )
    }

    /// Pause or resume market creation and staking (admin only)
    pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
        ctx.accounts.set_paused(paused)
    }

    /// Create a market in Draft status
    pub fn create_market(
        ctx: Context<CreateMarket>,
        items_hash: [u8; 32],
        item_count: u8,
        start_ts: i64,
        end_ts: i64,
    ) -> Result<()> {
        ctx.accounts
            .create_market(items_hash, item_count, start_ts, end_ts, &ctx.bumps)
    }

    /// Open a Draft market for staking (admin only, once start time passes)
    pub fn open_market(ctx: Context<OpenMarket>) -> Result<()> {
        ctx.accounts.open_market()
    }

    /// Close an Open market once its end time passes (permissionless)
    pub fn close_market(ctx: Context<CloseMarket>) -> Result<()> {
        ctx.accounts.close_market()
    }

    /// Settle a Closed market with the winning item (admin only)
    pub fn settle_market(ctx: Context<SettleMarket>, winning_item: u8) -> Result<()> {
        ctx.accounts.settle_market(winning_item)
    }

    /// Post a wallet's FairScale reputation score (score authority only)
    pub fn update_score(ctx: Context<UpdateScore>, wallet: Pubkey, score: u32) -> Result<()> {
        ctx.accounts.update_score(wallet, score, &ctx.bumps)
    }

    /// Stake collateral on an item of an Open market
    pub fn place_position(ctx: Context<PlacePosition>, item_index: u8, amount: u64) -> Result<()> {
        ctx.accounts.place_position(item_index, amount, &ctx.bumps)
    }

    /// Redeem a winning position after settlement
    pub fn claim_payout(ctx: Context<ClaimPayout>) -> Result<()> {
        ctx.accounts.claim_payout()
    }
}
