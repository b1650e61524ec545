//! Market Settlement
//!
//! Records the winning item for a `Closed` market and skims the protocol
//! fee from the vault. Winners redeem their share of the remaining payout
//! pool via `claim_payout`.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::state::{Config, Market, MarketStatus};

/// Event emitted when a market is settled
#[event]
pub struct MarketSettled {
    pub market_id: u64,
    pub winning_item: u8,
    pub payout_pool: u64,
    pub protocol_fee: u64,
    pub timestamp: i64,
}

#[derive(Accounts)]
pub struct SettleMarket<'info> {
    /// Protocol admin acting as settlement authority
    #[account(
        constraint = admin.key() == config.admin @ SettleMarketError::Unauthorized,
    )]
    pub admin: Signer<'info>,

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

    /// Treasury's collateral account receiving the protocol fee
    #[account(
        mut,
        constraint = treasury_collateral.owner == config.treasury @ SettleMarketError::WrongTreasuryAccount,
        constraint = treasury_collateral.mint == market.collateral_mint @ SettleMarketError::WrongTreasuryAccount,
    )]
    pub treasury_collateral: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> SettleMarket<'info> {
    pub fn settle_market(&mut self, winning_item: u8) -> Result<()> {
        let clock = Clock::get()?;
        self.market.assert_can_settle(winning_item)?;

        let fee = ((self.market.total_staked as u128)
            .checked_mul(self.config.protocol_fee_bps as u128)
            .ok_or(SettleMarketError::Overflow)?
            / 10_000u128) as u64;
        let payout_pool = self
            .market
            .total_staked
            .checked_sub(fee)
            .ok_or(SettleMarketError::Overflow)?;

        if fee > 0 {
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
                        to: self.treasury_collateral.to_account_info(),
                        authority: self.market.to_account_info(),
                    },
                    signer_seeds,
                ),
                fee,
                self.collateral_mint.decimals,
            )?;
        }

        let market = &mut self.market;
        market.status = MarketStatus::Settled;
        market.winning_item = Some(winning_item);
        market.payout_pool = payout_pool;
        market.settled_at = clock.unix_timestamp;

        emit!(MarketSettled {
            market_id: market.id,
            winning_item,
            payout_pool,
            protocol_fee: fee,
            timestamp: clock.unix_timestamp,
        });

        msg!("Market {} settled, winning item {}", market.id, winning_item);

        Ok(())
    }
}

#[error_code]
pub enum SettleMarketError {
    #[msg("Only the protocol admin can settle a market")]
    Unauthorized,
    #[msg("Treasury account does not belong to the configured treasury")]
    WrongTreasuryAccount,
    #[msg("Arithmetic overflow")]
    Overflow,
}
