//! Position Placement
//!
//! Stakes collateral on one item of an `Open` market. The position's weight
//! at settlement is its **effective stake**: the raw amount scaled by the
//! wallet's reputation tier and by how early in the window it arrived (see
//! [`crate::stake`]).
//!
//! The reputation account is optional: a wallet the score authority has
//! never attested stakes as unregistered, at the base tier.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::stake::compute_effective_stake;
use crate::state::{Config, Market, MarketStatus, Position, ReputationRecord};

/// Event emitted when a position is placed
#[event]
pub struct PositionPlaced {
    pub market_id: u64,
    pub owner: Pubkey,
    pub item_index: u8,
    pub raw_stake: u64,
    pub effective_stake: u64,
    pub reputation_bps: u16,
    pub timing_bps: u16,
}

#[derive(Accounts)]
pub struct PlacePosition<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [Market::SEED, config.key().as_ref(), market.id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Box<Account<'info, Market>>,

    /// The owner's reputation attestation, if the score authority has
    /// posted one
    #[account(
        seeds = [ReputationRecord::SEED, owner.key().as_ref()],
        bump = reputation.bump,
    )]
    pub reputation: Option<Account<'info, ReputationRecord>>,

    /// One position per wallet per market, written exactly once
    #[account(
        init,
        payer = owner,
        space = 8 + Position::INIT_SPACE,
        seeds = [Position::SEED, market.key().as_ref(), owner.key().as_ref()],
        bump,
    )]
    pub position: Box<Account<'info, Position>>,

    #[account(
        constraint = collateral_mint.key() == market.collateral_mint,
    )]
    pub collateral_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut)]
    pub owner_collateral: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = market,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> PlacePosition<'info> {
    pub fn place_position(
        &mut self,
        item_index: u8,
        amount: u64,
        bumps: &PlacePositionBumps,
    ) -> Result<()> {
        let clock = Clock::get()?;
        let now = clock.unix_timestamp;

        require!(!self.config.paused, PlacePositionError::ProtocolPaused);
        require!(
            self.market.status == MarketStatus::Open,
            PlacePositionError::MarketNotOpen
        );
        require!(now < self.market.end_ts, PlacePositionError::StakingClosed);
        require!(
            item_index < self.market.item_count,
            PlacePositionError::InvalidItem
        );

        // Unattested wallets stake at the base tier.
        let score = self.reputation.as_ref().map(|r| r.score).unwrap_or(0);

        let weighted = compute_effective_stake(
            amount,
            score,
            self.market.start_ts,
            self.market.end_ts,
            now,
            &self.config.stake_policy(),
        )?;

        transfer_checked(
            CpiContext::new(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.owner_collateral.to_account_info(),
                    mint: self.collateral_mint.to_account_info(),
                    to: self.vault.to_account_info(),
                    authority: self.owner.to_account_info(),
                },
            ),
            amount,
            self.collateral_mint.decimals,
        )?;

        let market = &mut self.market;
        market.total_staked = market
            .total_staked
            .checked_add(amount)
            .ok_or(PlacePositionError::Overflow)?;
        market.total_effective = market
            .total_effective
            .checked_add(weighted.effective_stake)
            .ok_or(PlacePositionError::Overflow)?;
        market.item_effective[item_index as usize] = market.item_effective[item_index as usize]
            .checked_add(weighted.effective_stake)
            .ok_or(PlacePositionError::Overflow)?;
        market.position_count += 1;

        self.position.set_inner(Position {
            market: self.market.key(),
            owner: self.owner.key(),
            item_index,
            raw_stake: amount,
            effective_stake: weighted.effective_stake,
            reputation_bps: weighted.reputation_bps,
            timing_bps: weighted.timing_bps,
            placed_at: now,
            claimed: false,
            bump: bumps.position,
        });

        emit!(PositionPlaced {
            market_id: self.market.id,
            owner: self.owner.key(),
            item_index,
            raw_stake: amount,
            effective_stake: weighted.effective_stake,
            reputation_bps: weighted.reputation_bps,
            timing_bps: weighted.timing_bps,
        });

        Ok(())
    }
}

#[error_code]
pub enum PlacePositionError {
    #[msg("Protocol is paused")]
    ProtocolPaused,
    #[msg("Market is not open for staking")]
    MarketNotOpen,
    #[msg("Staking window has ended")]
    StakingClosed,
    #[msg("Item index is out of range")]
    InvalidItem,
    #[msg("Arithmetic overflow")]
    Overflow,
}
