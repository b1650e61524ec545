//! Market Creation
//!
//! Markets are created in `Draft` status together with their collateral
//! vault. The item list itself lives off-chain; the market carries a 32-byte
//! content hash committing to it, so the option set cannot be swapped out
//! after positions exist.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::state::{Config, Market, MarketStatus};

/// Event emitted when a market is created
#[event]
pub struct MarketCreated {
    pub market_id: u64,
    pub creator: Pubkey,
    pub item_count: u8,
    pub start_ts: i64,
    pub end_ts: i64,
}

#[derive(Accounts)]
pub struct CreateMarket<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        init,
        payer = creator,
        space = 8 + Market::INIT_SPACE,
        seeds = [Market::SEED, config.key().as_ref(), config.market_count.to_le_bytes().as_ref()],
        bump,
    )]
    pub market: Box<Account<'info, Market>>,

    #[account(
        constraint = collateral_mint.key() == config.collateral_mint @ CreateMarketError::WrongCollateralMint,
    )]
    pub collateral_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Vault holding all collateral staked on this market
    #[account(
        init,
        payer = creator,
        associated_token::mint = collateral_mint,
        associated_token::authority = market,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreateMarket<'info> {
    pub fn create_market(
        &mut self,
        items_hash: [u8; 32],
        item_count: u8,
        start_ts: i64,
        end_ts: i64,
        bumps: &CreateMarketBumps,
    ) -> Result<()> {
        let clock = Clock::get()?;

        require!(!self.config.paused, CreateMarketError::ProtocolPaused);
        require!(
            (2..=Market::MAX_ITEMS).contains(&item_count),
            CreateMarketError::InvalidItemCount
        );
        require!(end_ts > start_ts, CreateMarketError::InvalidWindow);
        require!(end_ts > clock.unix_timestamp, CreateMarketError::InvalidWindow);
        require!(items_hash != [0u8; 32], CreateMarketError::EmptyItemsHash);

        let market_id = self.config.market_count;

        self.market.set_inner(Market {
            id: market_id,
            creator: self.creator.key(),
            collateral_mint: self.collateral_mint.key(),
            items_hash,
            item_count,
            start_ts,
            end_ts,
            status: MarketStatus::Draft,
            winning_item: None,
            total_staked: 0,
            total_effective: 0,
            item_effective: vec![0; item_count as usize],
            payout_pool: 0,
            position_count: 0,
            settled_at: 0,
            bump: bumps.market,
        });

        self.config.market_count += 1;

        emit!(MarketCreated {
            market_id,
            creator: self.creator.key(),
            item_count,
            start_ts,
            end_ts,
        });

        Ok(())
    }
}

#[error_code]
pub enum CreateMarketError {
    #[msg("Protocol is paused")]
    ProtocolPaused,
    #[msg("Item count must be between 2 and 16")]
    InvalidItemCount,
    #[msg("Market window is empty or already over")]
    InvalidWindow,
    #[msg("Items hash must not be all zeroes")]
    EmptyItemsHash,
    #[msg("Collateral mint does not match the protocol collateral")]
    WrongCollateralMint,
}
