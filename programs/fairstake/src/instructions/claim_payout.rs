//! Payout Claims
//!
//! After settlement, holders of winning positions redeem their share of the
//! payout pool, weighted by effective stake rather than raw stake:
//!
//! ```text
//! payout = (position_effective / winning_item_effective) * payout_pool
//! ```
//!
//! For example:
//! - Position: effective stake 1800 on the winning item
//! - Winning item effective total: 9000
//! - Payout pool after fees: 50_000 units
//! - Payout: (1800 / 9000) * 50_000 = 10_000 units

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::state::{Config, Market, MarketStatus, Position};

/// Event emitted when a winning position is redeemed
#[event]
pub struct PayoutClaimed {
    pub market_id: u64,
    pub owner: Pubkey,
    pub amount: u64,
}

#[derive(Accounts)]
pub struct ClaimPayout<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        seeds = [Market::SEED, config.key().as_ref(), market.id.to_le_bytes().as_ref()],
        bump = market.bump,
        constraint = market.status == MarketStatus::Settled @ ClaimPayoutError::NotSettled,
    )]
    pub market: Box<Account<'info, Market>>,

    #[account(
        mut,
        seeds = [Position::SEED, market.key().as_ref(), owner.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == owner.key() @ ClaimPayoutError::NotPositionOwner,
    )]
    pub position: Box<Account<'info, Position>>,

    #[account(
        constraint = collateral_mint.key() == market.collateral_mint,
    )]
    pub collateral_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = market,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub owner_collateral: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> ClaimPayout<'info> {
    pub fn claim_payout(&mut self) -> Result<()> {
        require!(!self.position.claimed, ClaimPayoutError::AlreadyClaimed);

        let winning_item = self
            .market
            .winning_item
            .ok_or(ClaimPayoutError::NotSettled)?;
        require!(
            self.position.item_index == winning_item,
            ClaimPayoutError::NotAWinner
        );

        // Nonzero whenever a winning position exists.
        let winning_effective = self.market.item_effective[winning_item as usize];

        let payout = ((self.position.effective_stake as u128)
            .checked_mul(self.market.payout_pool as u128)
            .ok_or(ClaimPayoutError::Overflow)?
            .checked_div(winning_effective as u128)
            .ok_or(ClaimPayoutError::Overflow)?) as u64;

        let config_key = self.config.key();
        let id_bytes = self.market.id.to_le_bytes();
        let market_seeds = &[
            Market::SEED,
            config_key.as_ref(),
            id_bytes.as_ref(),
            &[self.market.bump],
        ];
        let signer_seeds = &[&market_seeds[..]];

        transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.vault.to_account_info(),
                    mint: self.collateral_mint.to_account_info(),
                    to: self.owner_collateral.to_account_info(),
                    authority: self.market.to_account_info(),
                },
                signer_seeds,
            ),
            payout,
            self.collateral_mint.decimals,
        )?;

        self.position.claimed = true;

        emit!(PayoutClaimed {
            market_id: self.market.id,
            owner: self.owner.key(),
            amount: payout,
        });

        Ok(())
    }
}

#[error_code]
pub enum ClaimPayoutError {
    #[msg("Market is not settled")]
    NotSettled,
    #[msg("Position does not belong to the signer")]
    NotPositionOwner,
    #[msg("Position is not on the winning item")]
    NotAWinner,
    #[msg("Payout already claimed")]
    AlreadyClaimed,
    #[msg("Arithmetic overflow")]
    Overflow,
}
